// src/canon/mod.rs
//! The content canonicalizer — rewrites raw block text into the uniform
//! form the Markdown+Math+diagram renderer consumes.
//!
//! Three ordered passes, each a pure text-to-text transform:
//!
//! 1. **Caption extraction** ([`caption`]) — global, before anything else,
//!    because the caption annotation uses `$` outside the fence.
//! 2. **Segmentation** ([`span`]) — splits the text into fenced and prose
//!    spans so math rewriting can never corrupt code samples.
//! 3. **LaTeX normalization** ([`math`]) — prose spans only.
//!
//! The whole chain is total: it never fails, never panics, and passes
//! unrecognized input through unchanged. Malformed LaTeX or diagram syntax
//! is the downstream renderer's problem to report.

pub mod caption;
pub mod math;
pub mod span;

pub use caption::{embed_captions, split_caption_directive};
pub use span::{segment, Span};

use crate::constants::CANONICAL_GROWTH_HEADROOM;

/// Canonicalizes one block body.
///
/// Pure and deterministic; the empty string maps to the empty string.
/// Callers that re-render frequently should memoize on the raw input —
/// the function recomputes from scratch on every call.
pub fn canonicalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let captioned = embed_captions(raw);

    let mut canonical = String::with_capacity(captioned.len() + CANONICAL_GROWTH_HEADROOM);
    for piece in segment(&captioned) {
        match piece {
            Span::Fenced(text) => canonical.push_str(text),
            Span::Prose(text) => canonical.push_str(&math::normalize_prose(text)),
        }
    }

    canonical
}

/// [`canonicalize`] lifted over optional input.
///
/// Block bodies arrive from storage as nullable columns; absent content
/// canonicalizes to the empty string rather than an error.
#[allow(dead_code)] // Library surface, unused by the bin target
pub fn canonicalize_opt(raw: Option<&str>) -> String {
    raw.map(canonicalize).unwrap_or_default()
}
