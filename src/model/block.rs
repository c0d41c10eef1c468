// src/model/block.rs
//! One item in a page's ordered content list.

use crate::canon;
use crate::types::BlockId;
use serde::{Deserialize, Serialize};

/// What a content block is rendered as.
///
/// The legacy editor called Q&A blocks "accordion" and notes "markdown";
/// both spellings deserialize so old exports keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// A collapsible question/answer pair.
    #[default]
    #[serde(alias = "accordion")]
    Qa,
    /// A free-form markdown note.
    #[serde(alias = "markdown")]
    Note,
    /// A diagram; the body tends to hold a fenced mermaid block.
    Diagram,
}

/// One content block as stored in a page's `content` column.
///
/// The canonicalizer only ever reads `body`; `id` and `kind` exist for the
/// surrounding document layer. Blocks are never mutated — canonicalization
/// produces a copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: BlockId,
    #[serde(rename = "kind", alias = "type", default)]
    pub kind: BlockKind,
    /// Question text for `qa` blocks; unused by the other kinds.
    #[serde(alias = "question", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Raw, user-edited text. May mix Markdown, LaTeX and diagram fences.
    #[serde(alias = "answer", default)]
    pub body: String,
}

impl ContentBlock {
    /// Wraps bare text (e.g. a whole file read from stdin) into a synthetic
    /// note block so it can flow through the document pipeline.
    pub fn from_raw_text(body: impl Into<String>) -> Self {
        Self {
            id: BlockId::generate(),
            kind: BlockKind::Note,
            title: None,
            body: body.into(),
        }
    }

    /// Returns a copy of this block with a canonicalized body.
    pub fn canonical(&self) -> Self {
        Self {
            body: canon::canonicalize(&self.body),
            ..self.clone()
        }
    }

    pub fn is_diagram(&self) -> bool {
        self.kind == BlockKind::Diagram
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn legacy_accordion_export_deserializes() {
        let json = r#"{
            "id": "1700000000000",
            "type": "accordion",
            "question": "What is pi?",
            "answer": "\\(\\pi\\) is a constant"
        }"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind, BlockKind::Qa);
        assert_eq!(block.title.as_deref(), Some("What is pi?"));
        assert_eq!(block.body, "\\(\\pi\\) is a constant");
    }

    #[test]
    fn kind_defaults_to_qa_when_missing() {
        let json = r#"{"id": "b1", "body": "text"}"#;
        let block: ContentBlock = serde_json::from_str(json).unwrap();
        assert_eq!(block.kind, BlockKind::Qa);
    }

    #[test]
    fn canonical_copy_leaves_original_untouched() {
        let block = ContentBlock {
            id: BlockId::parse("b1").unwrap(),
            kind: BlockKind::Note,
            title: None,
            body: "\\[x\\]".to_string(),
        };
        let canonical = block.canonical();
        assert_eq!(block.body, "\\[x\\]");
        assert_eq!(canonical.body, "\n$$\nx\n$$\n");
        assert_eq!(canonical.id, block.id);
    }

    #[test]
    fn raw_text_wraps_into_a_note_block() {
        let block = ContentBlock::from_raw_text("hello");
        assert_eq!(block.kind, BlockKind::Note);
        assert_eq!(block.body, "hello");
        assert!(block.title.is_none());
    }
}
