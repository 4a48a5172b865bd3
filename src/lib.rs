//! ideascout - generate business idea clusters and render them as HTML cards
//!
//! A prompt is posted to a generation server's `/generate_ideas` endpoint and
//! the returned clusters are rendered into the markup of an ideas container.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod page;
pub mod render;
pub mod utils;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{ClusterSet, Envelope, Idea, Outcome, Prompt},
    traits::IdeaSource,
    view::{Page, PageHandle},
};
pub use dispatch::{CycleOutcome, CycleReport, Dispatcher, OverlapPolicy};
pub use render::{Escaping, Renderer};
