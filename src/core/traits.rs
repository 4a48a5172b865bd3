//! Seams between the dispatcher and the outside world

use crate::core::data::{Envelope, Prompt};
use crate::utils::error::AppResult;
use async_trait::async_trait;

/// Something that turns a prompt into a response envelope
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait IdeaSource: Send + Sync {
    async fn generate_ideas(&self, prompt: &Prompt) -> AppResult<Envelope>;
}
