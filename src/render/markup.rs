//! Escaping boundary between server-supplied text and generated markup

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How externally supplied strings are placed into markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Escaping {
    /// Escape `& < > " '` so text always displays as text
    #[default]
    Html,
    /// Interpolate verbatim
    Raw,
}

impl Escaping {
    pub fn apply<'a>(self, text: &'a str) -> Cow<'a, str> {
        match self {
            Escaping::Raw => Cow::Borrowed(text),
            Escaping::Html => escape_html(text),
        }
    }
}

pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 16);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
