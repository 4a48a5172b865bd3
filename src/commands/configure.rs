use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::{OutputStyle, print_success};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_config_command(
    config: &Config,
    config_path: &Path,
    command: Option<ConfigCommands>,
) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(config, config_path),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Reset) => handle_reset_command(config_path),
    }
}

fn handle_show_command(config: &Config, config_path: &Path) -> Result<()> {
    OutputStyle::print_header("⚙️  ideascout Configuration");
    OutputStyle::print_field("File", &config_path.display().to_string());
    OutputStyle::print_field("Server", &config.general.server_url);
    OutputStyle::print_field("Endpoint", &config.endpoint());
    OutputStyle::print_field("Escaping", &format!("{:?}", config.general.escaping));
    OutputStyle::print_field("Overlap", &format!("{:?}", config.general.overlap));
    OutputStyle::print_field(
        "Timeout",
        &config
            .general
            .timeout_secs
            .map(|s| format!("{}s", s))
            .unwrap_or_else(|| "none".to_string()),
    );
    OutputStyle::print_field("Color", &config.general.color.to_string());
    OutputStyle::print_field("Presets", &config.presets.join(", "));
    Ok(())
}

fn handle_reset_command(config_path: &Path) -> Result<()> {
    Config::default()
        .save_to(config_path)
        .context("Failed to reset configuration")?;
    print_success(&format!("Configuration reset to defaults at {}", config_path.display()));
    Ok(())
}
