//! The page regions a request/render cycle writes to

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};

/// Prompt input, loading indicator and the ideas container
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub prompt_input: String,
    pub loading: bool,
    pub container: String,
    pub rendered_at: Option<DateTime<Utc>>,
}

impl Page {
    pub fn with_prompt(prompt: &str) -> Self {
        Self {
            prompt_input: prompt.to_string(),
            ..Self::default()
        }
    }

    /// Replace the container wholesale
    pub fn replace_content(&mut self, html: String) {
        self.container = html;
        self.rendered_at = Some(Utc::now());
    }

    pub fn clear_content(&mut self) {
        self.container.clear();
    }
}

/// Shared handle to the current page
#[derive(Debug, Clone, Default)]
pub struct PageHandle(Arc<Mutex<Page>>);

impl PageHandle {
    pub fn new(page: Page) -> Self {
        Self(Arc::new(Mutex::new(page)))
    }

    /// Lock for a synchronous mutation; never hold the guard across an await
    pub fn lock(&self) -> MutexGuard<'_, Page> {
        // a poisoned page is still a valid page
        self.0.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn snapshot(&self) -> Page {
        self.lock().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_content_overwrites() {
        let mut page = Page::with_prompt("fintech");
        page.replace_content("<p>a</p>".to_string());
        page.replace_content("<p>b</p>".to_string());
        assert_eq!(page.container, "<p>b</p>");
        assert!(page.rendered_at.is_some());
        assert_eq!(page.prompt_input, "fintech");
    }

    #[test]
    fn test_handle_shares_state() {
        let handle = PageHandle::default();
        let other = handle.clone();
        other.lock().loading = true;
        assert!(handle.snapshot().loading);
    }
}
