// src/pipeline.rs
//! Pipeline capability traits — abstract the three stages of the
//! notes-to-canonical pipeline.
//!
//! Each trait describes a single capability, enabling testing each stage in
//! isolation. Unlike a network-bound pipeline there is nothing to await:
//! every stage is synchronous and bounded by input size.

use crate::error::AppError;
use crate::model::NoteDocument;
use crate::output::OutputReport;
use crate::types::CanonicalText;

/// Loads note content from the configured source.
pub trait ContentSource {
    fn load(&self) -> Result<NoteDocument, AppError>;
}

/// Transforms a NoteDocument into renderer-ready canonical text.
pub trait CanonicalComposer {
    fn compose(&self, document: &NoteDocument) -> Result<CanonicalText, AppError>;
}

/// Delivers canonical text to its destinations.
pub trait CanonicalDelivery {
    fn deliver(&self, canonical: CanonicalText) -> Result<OutputReport, AppError>;
}
