use crate::cli::{OutputOptions, RenderArgs};
use crate::commands::emit;
use crate::config::Config;
use crate::core::data::Envelope;
use crate::dispatch::settle;
use crate::render::Renderer;
use crate::utils::print_cycle_summary;
use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Render a saved `/generate_ideas` response exactly as a live cycle would
pub fn handle_render_command(config: &Config, args: &RenderArgs, output: &OutputOptions) -> Result<()> {
    let body = read_input(&args.file)?;
    let container = render_body(&body, Renderer::new(config.general.escaping));
    emit(config, "", &container, output)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read response from stdin")?;
        return Ok(buf);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn render_body(body: &str, renderer: Renderer) -> String {
    let result = Envelope::from_json(body).and_then(|envelope| envelope.into_outcome());
    let (html, outcome) = settle(&renderer, result);
    print_cycle_summary(&outcome);
    html
}
