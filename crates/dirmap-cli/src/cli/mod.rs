//! CLI for dirmap.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dirmap_core::config;

use commands::{run_completions, run_map, MapOptions};

/// Top-level CLI for dirmap.
#[derive(Debug, Parser)]
#[command(name = "dirmap")]
#[command(about = "Print a JSON map of a directory's immediate subdirectories", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Map each immediate subdirectory of --path to its path.
    Map {
        /// Base directory to scan.
        #[arg(long, value_name = "DIR")]
        path: Option<String>,

        /// Suffix joined onto every discovered directory's path.
        #[arg(long, value_name = "SUB")]
        sub_path: Option<String>,

        /// Pretty-print the JSON instead of a single line.
        #[arg(long)]
        pretty: bool,
    },

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Map {
                path,
                sub_path,
                pretty,
            } => {
                let cfg = config::load()?;
                tracing::debug!("loaded config: {:?}", cfg);
                run_map(
                    &cfg,
                    MapOptions {
                        path,
                        sub_path,
                        pretty,
                    },
                )?;
            }
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
