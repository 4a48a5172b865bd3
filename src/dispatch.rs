//! Submission dispatcher: one prompt in, one request out, one page update back
//!
//! Every call to [`Dispatcher::generate`] is an independent cycle. Nothing is
//! debounced or cancelled, so overlapping cycles race and, under the default
//! [`OverlapPolicy::LastCompleted`], whichever finishes last owns the
//! container. [`OverlapPolicy::LatestOnly`] drops results of superseded
//! requests instead.

use crate::core::data::{Outcome, Prompt};
use crate::core::traits::IdeaSource;
use crate::core::view::PageHandle;
use crate::render::Renderer;
use crate::utils::error::AppResult;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};
use uuid::Uuid;

/// What happens when a response arrives after a newer request was started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapPolicy {
    /// Every completion overwrites the page
    #[default]
    LastCompleted,
    /// Completions of superseded requests are dropped
    LatestOnly,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CycleOutcome {
    Rendered { clusters: usize, ideas: usize },
    /// The server answered with `success: false`
    Failed(String),
    /// Network failure or an unparseable body
    TransportFailed(String),
    Discarded,
}

#[derive(Debug, Clone)]
pub struct CycleReport {
    pub request_id: Uuid,
    pub prompt: Prompt,
    pub outcome: CycleOutcome,
}

pub struct Dispatcher<S: IdeaSource> {
    source: S,
    page: PageHandle,
    renderer: Renderer,
    policy: OverlapPolicy,
    generation: AtomicU64,
}

impl<S: IdeaSource> Dispatcher<S> {
    pub fn new(source: S, page: PageHandle, renderer: Renderer) -> Self {
        Self {
            source,
            page,
            renderer,
            policy: OverlapPolicy::default(),
            generation: AtomicU64::new(0),
        }
    }

    pub fn with_policy(mut self, policy: OverlapPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn page(&self) -> &PageHandle {
        &self.page
    }

    /// Form submission: dispatch whatever is in the prompt input.
    ///
    /// Blank input is ignored without touching the page.
    pub async fn submit(&self) -> Option<CycleReport> {
        let raw = self.page.lock().prompt_input.clone();
        let Some(prompt) = Prompt::parse(&raw) else {
            debug!("ignoring submission with blank prompt");
            return None;
        };
        Some(self.generate(prompt).await)
    }

    /// Preset button: strip the label, write it into the input, dispatch it
    pub async fn trigger_preset(&self, label: &str) -> Option<CycleReport> {
        let Some(prompt) = Prompt::from_preset_label(label) else {
            debug!(label, "preset label has no usable text");
            return None;
        };
        self.page.lock().prompt_input = prompt.as_str().to_string();
        Some(self.generate(prompt).await)
    }

    pub async fn generate(&self, prompt: Prompt) -> CycleReport {
        let request_id = Uuid::new_v4();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut page = self.page.lock();
            page.loading = true;
            page.clear_content();
        }
        debug!(%request_id, generation, prompt = %prompt, "dispatching prompt");

        let result = self
            .source
            .generate_ideas(&prompt)
            .await
            .and_then(|envelope| envelope.into_outcome());

        if self.policy == OverlapPolicy::LatestOnly
            && self.generation.load(Ordering::SeqCst) != generation
        {
            debug!(%request_id, generation, "dropping response of superseded request");
            return CycleReport {
                request_id,
                prompt,
                outcome: CycleOutcome::Discarded,
            };
        }

        let (html, outcome) = settle(&self.renderer, result);
        if let CycleOutcome::Failed(msg) | CycleOutcome::TransportFailed(msg) = &outcome {
            warn!(%request_id, error = %msg, "generation cycle ended with an error block");
        }

        {
            let mut page = self.page.lock();
            page.loading = false;
            page.replace_content(html);
        }

        CycleReport {
            request_id,
            prompt,
            outcome,
        }
    }
}

/// Turn a finished request into the container markup and its summary
pub fn settle(renderer: &Renderer, result: AppResult<Outcome>) -> (String, CycleOutcome) {
    match result {
        Ok(Outcome::Clusters(clusters)) => (
            renderer.render(&clusters),
            CycleOutcome::Rendered {
                clusters: clusters.len(),
                ideas: clusters.idea_count(),
            },
        ),
        Ok(Outcome::Failure(message)) => {
            (renderer.render_error(&message), CycleOutcome::Failed(message))
        }
        Err(err) => {
            let message = err.message().to_string();
            (
                renderer.render_error(&message),
                CycleOutcome::TransportFailed(message),
            )
        }
    }
}
