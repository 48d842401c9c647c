#[path = "debate-cli/app/mod.rs"]
mod app;
#[path = "debate-cli/args.rs"]
mod args;
#[path = "debate-cli/config/mod.rs"]
mod config;
#[path = "debate-cli/logging.rs"]
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    app::run().await
}
