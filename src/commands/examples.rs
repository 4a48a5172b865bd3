use crate::config::Config;
use crate::core::data::Prompt;
use crate::utils::{OutputStyle, print_info};

pub fn handle_examples_command(config: &Config) {
    if config.presets.is_empty() {
        print_info("No presets configured.");
        return;
    }

    OutputStyle::print_header(&format!("🎯 Preset prompts ({})", config.presets.len()));
    for (i, label) in config.presets.iter().enumerate() {
        let prompt = Prompt::from_preset_label(label)
            .map(|p| p.to_string())
            .unwrap_or_default();
        println!(
            "{:>3}. {}  {}",
            i + 1,
            label,
            OutputStyle::muted(&format!("→ prompt={}", prompt))
        );
    }
    println!(
        "\n{} {}",
        OutputStyle::muted("Run one with:"),
        OutputStyle::command("ideascout example <number>")
    );
}
