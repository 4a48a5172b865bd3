use crate::commands::{configure, examples, generate, render};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ideascout")]
#[command(about = "Generate business idea clusters and render them as HTML cards")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    #[arg(long, global = true, help = "Generation server base URL (overrides config)")]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Interpolate server text without HTML escaping")]
    pub raw: bool,

    #[arg(long, global = true, help = "Wrap the rendered cards in a full HTML page")]
    pub page: bool,

    #[arg(short, long, global = true, value_name = "FILE", help = "Write markup to a file instead of stdout")]
    pub output: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where and how rendered markup is written
#[derive(Debug, Clone, Default)]
pub struct OutputOptions {
    pub page: bool,
    pub output: Option<PathBuf>,
}

impl Cli {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            page: self.page,
            output: self.output.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate ideas for a prompt (reads stdin when no prompt is given)
    Generate(GenerateArgs),

    /// Generate ideas from a preset label or its number
    Example(ExampleArgs),

    /// List preset prompts
    Examples,

    /// Render a saved response envelope without contacting the server
    Render(RenderArgs),

    /// Configuration management
    Config(ConfigArgs),
}

impl Commands {
    pub async fn execute(
        self,
        config: Config,
        config_path: &Path,
        output: OutputOptions,
    ) -> Result<()> {
        match self {
            Commands::Generate(args) => {
                generate::handle_generate_command(config, &args, &output).await?;
            }
            Commands::Example(args) => {
                generate::handle_example_command(config, &args, &output).await?;
            }
            Commands::Examples => {
                examples::handle_examples_command(&config);
            }
            Commands::Render(args) => {
                render::handle_render_command(&config, &args, &output)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(&config, config_path, args.command)?;
            }
        }
        Ok(())
    }
}

#[derive(Args)]
pub struct GenerateArgs {
    #[arg(help = "Prompt text")]
    pub prompt: Option<String>,
}

#[derive(Args)]
pub struct ExampleArgs {
    #[arg(help = "Preset label (e.g. \"🚀 Fintech\") or its number from `examples`")]
    pub label: String,
}

#[derive(Args)]
pub struct RenderArgs {
    #[arg(help = "JSON response file, or - for stdin")]
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,
}
