use anyhow::Result;
use clap::Parser;
use ideascout::cli::Cli;
use ideascout::config::Config;
use ideascout::utils::error::{AppResult, report_error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_file_path);
    let config = match load_config(&cli, &config_path) {
        Ok(config) => config,
        Err(err) => {
            report_error(&err);
            std::process::exit(1);
        }
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    let output = cli.output_options();
    cli.command.execute(config, &config_path, output).await?;

    Ok(())
}

/// Load the config file and apply command-line overrides on top
fn load_config(cli: &Cli, config_path: &std::path::Path) -> AppResult<Config> {
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    Config::resolve(config_path, cli.server.as_deref(), cli.raw)
}
