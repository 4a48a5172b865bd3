use crate::dispatch::CycleOutcome;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn command(text: &str) -> ColoredString {
        text.bright_yellow()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn info(text: &str) -> ColoredString {
        text.blue()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field(label: &str, value: &str) {
        println!("{:>12}: {}", Self::label(label), value);
    }
}

pub fn print_warning(message: &str) {
    eprintln!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    eprintln!("✅ {}", OutputStyle::success(message));
}

pub fn print_info(message: &str) {
    eprintln!("{}", OutputStyle::muted(message));
}

/// Print a one-line summary of a finished request/render cycle.
///
/// Goes to stderr so stdout carries only the rendered markup.
pub fn print_cycle_summary(outcome: &CycleOutcome) {
    match outcome {
        CycleOutcome::Rendered { clusters, ideas } => {
            if *clusters == 0 {
                print_info("No clusters returned.");
            } else {
                print_success(&format!(
                    "Rendered {} idea(s) in {} cluster(s)",
                    ideas, clusters
                ));
            }
        }
        CycleOutcome::Failed(msg) => print_warning(&format!("Server reported: {}", msg)),
        CycleOutcome::TransportFailed(msg) => {
            eprintln!("🌐 {}", OutputStyle::error(&format!("Request failed: {}", msg)))
        }
        CycleOutcome::Discarded => print_info("Response superseded by a newer request."),
    }
}
