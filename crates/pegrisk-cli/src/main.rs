use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use pegrisk_cli::cli::{Cli, Commands, ConfigCommand};
use pegrisk_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if cli.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };
    let cfg = config::load_config(&config_path)?;

    let output = match &cli.command {
        Commands::Models => commands::list_models(),
        Commands::Describe(args) => commands::describe(args.model.model())?,
        Commands::Evaluate(args) => commands::run_evaluate(args, &cfg, &config_path)?,
        Commands::Stats => commands::stats(&cfg, &config_path)?,
        Commands::Config(ConfigCommand::Init { force }) => {
            if config_path.exists() && !force {
                return Err(eyre::eyre!(
                    "config already exists at {} (use --force to overwrite)",
                    config_path.display()
                ));
            }
            config::save_config(&config::PegriskConfig::default(), &config_path)?;
            format!("wrote {}\n", config_path.display())
        }
        Commands::Config(ConfigCommand::Show) => {
            format!("{}\n", serde_json::to_string_pretty(&cfg)?)
        }
    };

    print!("{output}");
    Ok(())
}
