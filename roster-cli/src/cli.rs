use crate::commands::Commands;

use clap::Parser;
use roster_config::Config;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "Keep a locally saved list of randomly generated users")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User API endpoint (overrides remote.base_url)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print the list as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Pretty-print JSON output (implies --json)
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Keep the list in memory only; nothing is read from or written to disk
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

impl Cli {
    pub fn wants_json(&self) -> bool {
        self.json || self.pretty
    }

    /// Folds command-line overrides into `config`. Run before `Config::validate`.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(ref base_url) = self.base_url {
            config.remote.base_url = base_url.clone();
        }
    }
}
