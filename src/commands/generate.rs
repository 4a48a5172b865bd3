use crate::cli::{ExampleArgs, GenerateArgs, OutputOptions};
use crate::client::HttpIdeaSource;
use crate::commands::emit;
use crate::config::Config;
use crate::core::data::Prompt;
use crate::core::view::{Page, PageHandle};
use crate::dispatch::{CycleReport, Dispatcher};
use crate::render::Renderer;
use crate::utils::{print_cycle_summary, print_info};
use anyhow::{Context, Result};
use std::io::Read;

pub async fn handle_generate_command(
    config: Config,
    args: &GenerateArgs,
    output: &OutputOptions,
) -> Result<()> {
    let raw = match &args.prompt {
        Some(prompt) => prompt.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read prompt from stdin")?;
            buf
        }
    };

    // blank prompts end here without a request or any output
    let Some(prompt) = Prompt::parse(&raw) else {
        tracing::debug!("blank prompt, nothing to post");
        return Ok(());
    };

    let dispatcher = build_dispatcher(&config, Page::with_prompt(&raw))?;
    let report = dispatcher.generate(prompt).await;
    finish(&config, &dispatcher, &report, output)
}

pub async fn handle_example_command(
    config: Config,
    args: &ExampleArgs,
    output: &OutputOptions,
) -> Result<()> {
    let label = resolve_preset(&config, &args.label);
    if Prompt::from_preset_label(&label).is_none() {
        tracing::debug!(label = %label, "preset label has no usable text");
        return Ok(());
    }

    let dispatcher = build_dispatcher(&config, Page::default())?;
    let Some(report) = dispatcher.trigger_preset(&label).await else {
        return Ok(());
    };
    finish(&config, &dispatcher, &report, output)
}

/// A number selects the n-th configured preset; anything else is used as the label
pub fn resolve_preset(config: &Config, label: &str) -> String {
    label
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| config.presets.get(i))
        .cloned()
        .unwrap_or_else(|| label.to_string())
}

fn build_dispatcher(config: &Config, page: Page) -> Result<Dispatcher<HttpIdeaSource>> {
    let source = HttpIdeaSource::new(config).context("Failed to create HTTP client")?;
    print_info(&format!("Posting prompt to {}", source.endpoint()));
    Ok(Dispatcher::new(
        source,
        PageHandle::new(page),
        Renderer::new(config.general.escaping),
    )
    .with_policy(config.general.overlap))
}

fn finish(
    config: &Config,
    dispatcher: &Dispatcher<HttpIdeaSource>,
    report: &CycleReport,
    output: &OutputOptions,
) -> Result<()> {
    tracing::debug!(request_id = %report.request_id, "cycle finished");
    print_cycle_summary(&report.outcome);
    let page = dispatcher.page().snapshot();
    emit(config, &page.prompt_input, &page.container, output)
}
