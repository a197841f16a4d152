//! CLI for order-preserving query strings.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use urlquery_core::config::{self, OutputFormat};

use commands::{run_decode, run_encode, run_escape, run_get, run_init_config};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "urlquery")]
#[command(about = "Parse and re-serialize URL query strings, keeping order and duplicates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the decoded key/value pairs of a query string.
    Decode {
        /// Raw query, e.g. "?a=1&b=2".
        query: String,
        /// Print JSON instead of tab-separated lines.
        #[arg(long)]
        json: bool,
        /// Fail if any segment cannot be percent-decoded.
        #[arg(long)]
        strict: bool,
    },

    /// Print the canonical `key=value&...` form.
    Encode {
        query: String,
        #[arg(long)]
        strict: bool,
    },

    /// Print the canonical form escaped as a single query component.
    Escape {
        query: String,
        #[arg(long)]
        strict: bool,
    },

    /// Print the first value of a key (or every value with --all).
    Get {
        query: String,
        key: String,
        /// Print every value, one per line.
        #[arg(long)]
        all: bool,
        #[arg(long)]
        strict: bool,
    },

    /// Write the default config file.
    InitConfig {
        /// Overwrite an existing config file.
        #[arg(long)]
        force: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // init-config must work even when the existing file is broken.
        if let CliCommand::InitConfig { force } = cli.command {
            return run_init_config(force);
        }

        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Decode {
                query,
                json,
                strict,
            } => {
                let json = json || cfg.output == OutputFormat::Json;
                run_decode(&query, json, strict || cfg.strict)?
            }
            CliCommand::Encode { query, strict } => run_encode(&query, strict || cfg.strict)?,
            CliCommand::Escape { query, strict } => run_escape(&query, strict || cfg.strict)?,
            CliCommand::Get {
                query,
                key,
                all,
                strict,
            } => run_get(&query, &key, all, strict || cfg.strict)?,
            CliCommand::InitConfig { .. } => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
