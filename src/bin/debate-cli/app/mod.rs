mod render;
mod serve;
mod session;

use clap::Parser;

use debate::config::SharedSettings;
use debate::{DebateController, ProviderRegistry};

use crate::args::{CliArgs, Command};
use crate::config::{apply_overrides, fill_keys_from_env, load_config, AppConfig};
use crate::logging::init_logging;

pub async fn run() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let loaded = load_config(args.config.clone())?;
    let _logger = init_logging(&loaded.config.logging)?;
    if loaded.config_exists {
        log::info!("Loaded config from {}", loaded.paths.config_file.display());
    } else {
        log::info!(
            "No config at {}, using defaults",
            loaded.paths.config_file.display()
        );
    }

    let mut config = loaded.config;
    apply_overrides(&mut config, &args.overrides)?;
    fill_keys_from_env(&mut config.debate);

    let controller = build_controller(&config)?;
    match args.command.unwrap_or_default() {
        Command::Run { delay_ms } => session::run_auto(controller, delay_ms).await,
        Command::Step => session::run_stepped(controller).await,
        Command::Serve { bind } => {
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            serve::run_server(controller, &bind).await
        }
    }
}

fn build_controller(config: &AppConfig) -> anyhow::Result<DebateController<SharedSettings>> {
    let providers =
        ProviderRegistry::with_defaults(config.generation.clone(), config.mock.clone())?;

    let settings = SharedSettings::new(config.debate.clone());
    Ok(DebateController::new(settings, providers)
        .with_policy(config.controller.failure_policy)
        .with_turn_timeout(config.controller.turn_timeout()))
}
