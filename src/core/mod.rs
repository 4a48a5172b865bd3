//! Core data, page state and trait seams

pub mod data;
pub mod traits;
pub mod view;
