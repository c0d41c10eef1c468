// src/lib.rs
//! notecanon library — canonicalizes note-block content for rendering.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Canonicalizer** — `canonicalize`, `canonicalize_opt`,
//!   `split_caption_directive`, the span/pass internals in [`canon`]
//! - **Error handling** — `AppError`, `ValidationError`
//! - **Configuration** — `PipelineConfig`, `InputFormat`, `InputSource`
//! - **Domain model** — `ContentBlock`, `Page`, `Topic`, `NoteDocument`
//! - **Domain types** — `BlockId`, `PageId`, `TopicId`, `CanonicalText`
//! - **Pipeline** — the stage traits and the output delivery layer

mod analytics;
pub mod canon;
mod config;
mod constants;
mod error;
mod model;
mod output;
mod pipeline;
mod types;

// --- Canonicalizer ---
pub use crate::canon::{canonicalize, canonicalize_opt, split_caption_directive};

// --- Error Handling ---
pub use crate::error::AppError;
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, InputFormat, InputSource, PipelineConfig};

// --- Domain Model ---
pub use crate::model::{BlockKind, ContentBlock, NoteDocument, Page, Topic};

// --- Domain Types ---
pub use crate::types::{BlockId, CanonicalText, PageId, TopicId};

// --- Analytics ---
pub use crate::analytics::{measure_document, DocumentStats};

// --- Output ---
pub use crate::output::{deliver, DeliveryTarget, OutputPlan, OutputReport};

// --- Pipeline Traits ---
pub use crate::pipeline::{CanonicalComposer, CanonicalDelivery, ContentSource};
