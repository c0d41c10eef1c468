// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role. Reading these constants should tell you the story of
//! what the canonicalizer recognizes and how it sizes its buffers.

// ---------------------------------------------------------------------------
// Canonical form boundaries
// ---------------------------------------------------------------------------

/// The fence info-string tag that marks a code fence as diagram source.
///
/// Fences tagged with this dialect are eligible for caption extraction and
/// are handed to the diagram renderer downstream, never to the math passes.
pub const DIAGRAM_FENCE_TAG: &str = "mermaid";

/// Prefix of the caption directive line injected into a diagram fence.
///
/// This is the on-the-wire contract with the diagram renderer: everything
/// after the prefix up to end-of-line is the caption, taken verbatim.
pub const CAPTION_DIRECTIVE_PREFIX: &str = "%%caption: ";

/// Maximum backtick run length recognized as a fence delimiter.
///
/// Markdown uses one backtick for inline code and three for fenced blocks;
/// anything in between is treated as a fence too, so math rewriting can
/// never reach inside a code span.
pub const FENCE_MAX_BACKTICKS: usize = 3;

// ---------------------------------------------------------------------------
// String capacity hints (performance, not correctness)
// ---------------------------------------------------------------------------

/// Extra headroom added when reassembling a canonicalized string, covering
/// the newlines and delimiters the math passes insert.
///
/// This is a performance hint, not a constraint. Over-estimating wastes
/// a little memory; under-estimating causes reallocation.
pub const CANONICAL_GROWTH_HEADROOM: usize = 64;
