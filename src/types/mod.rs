// src/types/mod.rs
use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid block ID: {0}")]
    InvalidBlockId(String),

    #[error("Invalid page ID: {input} - {reason}")]
    InvalidPageId { input: String, reason: String },

    #[error("Invalid topic ID: {input} - {reason}")]
    InvalidTopicId { input: String, reason: String },

    #[error("Unknown input format: {0} (expected 'raw' or 'json')")]
    UnknownInputFormat(String),
}
