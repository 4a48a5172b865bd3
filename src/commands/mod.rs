pub mod configure;
pub mod examples;
pub mod generate;
pub mod render;

use crate::cli::OutputOptions;
use crate::config::Config;
use crate::page;
use crate::utils::print_success;
use anyhow::{Context, Result};

/// Write rendered container markup to the configured destination
pub fn emit(config: &Config, prompt: &str, container_html: &str, output: &OutputOptions) -> Result<()> {
    let markup = if output.page {
        page::document(config, prompt, container_html)
    } else {
        container_html.to_string()
    };

    match &output.output {
        Some(path) => {
            std::fs::write(path, &markup)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_success(&format!("Wrote {}", path.display()));
        }
        None => println!("{}", markup),
    }
    Ok(())
}
