//! Standalone page skeleton around a rendered container

use crate::config::Config;
use crate::render::markup::escape_html;
use std::fmt::Write;

/// Build a full HTML document with the form, loading block, preset buttons
/// and the ideas container pre-filled with `container_html`.
pub fn document(config: &Config, prompt: &str, container_html: &str) -> String {
    let mut buttons = String::new();
    for label in &config.presets {
        let _ = write!(
            buttons,
            "\n                <button type=\"button\" class=\"example-button\">{}</button>",
            escape_html(label)
        );
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>ideascout</title>
    <style>
        body {{ font-family: system-ui, sans-serif; margin: 1.5rem; background: #f7fafc; }}
        main {{ max-width: 960px; margin: 0 auto; }}
        .idea-card {{ background: #fff; border-radius: 12px; padding: 1.5rem; margin-bottom: 1rem; box-shadow: 0 1px 3px rgba(0,0,0,0.1); }}
        .metric-grid {{ display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-bottom: 1rem; }}
        .metric-card {{ background: #f7fafc; border-radius: 8px; padding: 0.75rem; text-align: center; }}
        .validation-section {{ background: #fff7ed; border-radius: 8px; padding: 1rem; margin: 1rem 0; }}
        .market-section {{ background: #eff6ff; border-radius: 8px; padding: 1rem; margin: 1rem 0; }}
        .error {{ background: #fed7d7; color: #9b2c2c; border-radius: 8px; padding: 1rem; }}
        .example-button {{ padding: 0.4rem 0.8rem; border: 1px solid #cbd5e0; border-radius: 999px; background: #fff; cursor: pointer; }}
    </style>
</head>
<body>
    <main>
        <h1>ideascout</h1>
        <form id="idea-form" method="post" action="/generate_ideas">
            <input id="prompt" name="prompt" value="{prompt}" placeholder="Describe a market or problem space" />
            <button type="submit">Generate</button>
            <div class="examples">{buttons}
            </div>
        </form>
        <div id="loading" style="display: none;">Generating ideas...</div>
        <div id="ideas-container">{container_html}</div>
    </main>
</body>
</html>
"#,
        prompt = escape_html(prompt),
    )
}
