use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "debate",
    about = "Run a two-participant debate between scripted and LLM speakers"
)]
pub struct CliArgs {
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,
    #[command(flatten)]
    pub overrides: Overrides,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Advance automatically until the turn limit is reached
    Run {
        /// Pause between turns, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
    /// Advance one turn per line read from stdin
    Step,
    /// Serve the debate over HTTP
    Serve {
        /// Address to bind, defaults to `[server] bind`
        #[arg(long)]
        bind: Option<String>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Self::Run { delay_ms: 0 }
    }
}

/// Settings overrides applied on top of the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    #[arg(long, global = true)]
    pub topic: Option<String>,
    #[arg(long, global = true)]
    pub tone: Option<String>,
    #[arg(long, global = true)]
    pub instruction: Option<String>,
    #[arg(long, global = true)]
    pub turns: Option<String>,
    #[arg(long, global = true)]
    pub p1_name: Option<String>,
    #[arg(long, global = true)]
    pub p2_name: Option<String>,
    #[arg(long, global = true)]
    pub p1_provider: Option<String>,
    #[arg(long, global = true)]
    pub p2_provider: Option<String>,
    #[arg(long, global = true)]
    pub p1_model: Option<String>,
    #[arg(long, global = true)]
    pub p2_model: Option<String>,
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}
