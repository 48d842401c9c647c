mod error;
mod load;
mod overrides;
mod paths;
mod types;

pub use load::load_config;
pub use overrides::{apply_overrides, fill_keys_from_env};
pub use types::{AppConfig, LoggingConfig};
