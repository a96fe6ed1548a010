//! CLI for the leadcat lead categorizer.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use leadcat_core::config;
use leadcat_core::dataset::Override;
use std::path::PathBuf;

use commands::{
    run_categories, run_check_mapping, run_classify, run_completions, run_man, run_summary,
    ClassifyOptions,
};

/// Top-level CLI for the leadcat lead categorizer.
#[derive(Debug, Parser)]
#[command(name = "leadcat")]
#[command(about = "leadcat: categorize leads by their website journey", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/leadcat/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Categorize every lead in a CSV file and write the result with a TYPE column first.
    Classify {
        /// Lead data CSV (must contain the journey column).
        leads: PathBuf,
        /// Mapping CSV with URL and TYPE columns (default from config).
        #[arg(long, value_name = "PATH")]
        mapping: Option<PathBuf>,
        /// Output CSV (default from config).
        #[arg(long, short, value_name = "PATH")]
        output: Option<PathBuf>,
        /// Name of the journey column (default from config).
        #[arg(long, value_name = "NAME")]
        journey_column: Option<String>,
        /// Only write leads whose category is LABEL.
        #[arg(long, value_name = "LABEL")]
        filter: Option<String>,
        /// Manually set the category of a 0-based data row. Repeatable.
        #[arg(long = "set", value_name = "ROW=LABEL")]
        overrides: Vec<Override>,
    },

    /// Show how many leads fall into each category.
    Summary {
        /// Lead data CSV (must contain the journey column).
        leads: PathBuf,
        /// Mapping CSV with URL and TYPE columns (default from config).
        #[arg(long, value_name = "PATH")]
        mapping: Option<PathBuf>,
        /// Name of the journey column (default from config).
        #[arg(long, value_name = "NAME")]
        journey_column: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Validate the mapping file against the priority list.
    CheckMapping {
        /// Mapping CSV with URL and TYPE columns (default from config).
        #[arg(long, value_name = "PATH")]
        mapping: Option<PathBuf>,
    },

    /// List the category vocabulary in priority order.
    Categories,

    /// Print a shell completion script.
    Completions {
        /// Target shell.
        shell: Shell,
    },

    /// Print the man page (roff).
    Man,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        // These never need the config file.
        match &cli.command {
            CliCommand::Completions { shell } => return run_completions(*shell),
            CliCommand::Man => return run_man(),
            _ => {}
        }

        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Classify {
                leads,
                mapping,
                output,
                journey_column,
                filter,
                overrides,
            } => run_classify(
                &cfg,
                &ClassifyOptions {
                    leads,
                    mapping,
                    output,
                    journey_column,
                    filter,
                    overrides,
                },
            )?,
            CliCommand::Summary {
                leads,
                mapping,
                journey_column,
                json,
            } => run_summary(
                &cfg,
                &leads,
                mapping.as_deref(),
                journey_column.as_deref(),
                json,
            )?,
            CliCommand::CheckMapping { mapping } => run_check_mapping(&cfg, mapping.as_deref())?,
            CliCommand::Categories => run_categories(&cfg)?,
            CliCommand::Completions { .. } | CliCommand::Man => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
