use std::path::Path;

use clap::{Args, Subcommand};

use crate::config::{self, TalentflowConfig};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration and where it was read from
    Show,
    /// Write the configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: ConfigArgs, path: &Path, current: &TalentflowConfig) -> eyre::Result<()> {
    match args.command {
        ConfigCommands::Show => {
            tracing::info!(path = %path.display(), exists = path.exists(), "effective config");
            super::print_json(current)
        }
        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {}; pass --force to overwrite",
                    path.display()
                ));
            }
            // Re-saving a migrated config stamps it with the current version
            config::save(path, current)?;
            super::print_json(&config::load(path)?)
        }
    }
}
