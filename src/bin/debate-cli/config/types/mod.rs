mod app;
mod controller;
mod logging;
mod server;

const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;
const DEFAULT_BIND: &str = "127.0.0.1:8787";

pub use app::AppConfig;
pub use controller::ControllerConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
