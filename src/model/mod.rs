// src/model/mod.rs
//! Domain model for note content: blocks, pages, topics, documents.
//!
//! Mirrors the storage backend's row shapes. The model is read-only from
//! the canonicalizer's point of view — every canonicalizing operation
//! returns a fresh copy.

mod block;
mod page;

pub use block::{BlockKind, ContentBlock};
pub use page::{NoteDocument, Page, Topic};
