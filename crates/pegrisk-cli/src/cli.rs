use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pegrisk_models::ModelId;

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "pegrisk",
    version,
    about = "PEG-placement risk and PRO-MAL survival calculator for ALS"
)]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true, default_value_t = false)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available models
    Models,
    /// Print a model's input schema as JSON
    Describe(DescribeArgs),
    /// Evaluate one patient record
    Evaluate(EvaluateArgs),
    /// Show visit counts
    Stats,
    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Args)]
pub struct DescribeArgs {
    /// Model number, slug or short name (e.g. 1, functional, AN-PM)
    pub model: ModelId,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Model number, slug or short name (e.g. 1, functional, AN-PM)
    pub model: ModelId,

    /// JSON object of field values
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Field value as ID=VALUE (repeatable; overrides --input)
    #[arg(long = "field", value_name = "ID=VALUE")]
    pub fields: Vec<String>,

    /// Evaluation day bounding date fields (defaults to today)
    #[arg(long)]
    pub today: Option<jiff::civil::Date>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Do not record a visit for this evaluation
    #[arg(long, default_value_t = false)]
    pub no_count: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Write the default config
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print the effective config
    Show,
}
