// src/model/page.rs
//! Pages, topics, and the document wrapper the CLI operates on.

use super::block::ContentBlock;
use crate::error::AppError;
use crate::types::{PageId, TopicId};
use serde::{Deserialize, Serialize};

/// A topic groups pages; purely organizational.
#[allow(dead_code)] // Part of the export model, not read by the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// One page: an ordered list of content blocks plus its metadata row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: PageId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<TopicId>,
    pub title: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl Page {
    /// Returns a copy of this page with every block body canonicalized.
    pub fn canonical(&self) -> Self {
        Self {
            content: self.content.iter().map(ContentBlock::canonical).collect(),
            ..self.clone()
        }
    }
}

/// What the pipeline loads: either one bare block body (raw mode) or a
/// page export (json mode).
#[derive(Debug, Clone, PartialEq)]
pub enum NoteDocument {
    RawBlock(ContentBlock),
    Pages(Vec<Page>),
}

/// Shapes the page export is accepted in: a bare array of pages or an
/// object wrapping it, whichever the exporter produced.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageExport {
    Wrapped { pages: Vec<Page> },
    Bare(Vec<Page>),
}

impl NoteDocument {
    /// Wraps bare text into a single synthetic note block.
    pub fn from_raw(text: impl Into<String>) -> Self {
        Self::RawBlock(ContentBlock::from_raw_text(text))
    }

    /// Parses a JSON page export.
    pub fn from_json(json: &str, origin: &str) -> Result<Self, AppError> {
        let export: PageExport =
            serde_json::from_str(json).map_err(|source| AppError::JsonParse {
                origin: origin.to_string(),
                source,
            })?;
        let pages = match export {
            PageExport::Wrapped { pages } => pages,
            PageExport::Bare(pages) => pages,
        };
        Ok(Self::Pages(pages))
    }

    /// Returns a copy of the document with every block body canonicalized.
    pub fn canonical(&self) -> Self {
        match self {
            Self::RawBlock(block) => Self::RawBlock(block.canonical()),
            Self::Pages(pages) => Self::Pages(pages.iter().map(Page::canonical).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE_JSON: &str = r#"{
        "id": "b7f9c2e4-9f1d-4a6e-8c3b-2d5f7a1e9b0c",
        "title": "Physics",
        "content": [
            {"id": "b1", "type": "markdown", "answer": "\\[E = mc^2\\]"}
        ]
    }"#;

    #[test]
    fn bare_array_export_parses() {
        let json = format!("[{}]", PAGE_JSON);
        let doc = NoteDocument::from_json(&json, "test").unwrap();
        match doc {
            NoteDocument::Pages(pages) => {
                assert_eq!(pages.len(), 1);
                assert_eq!(pages[0].title, "Physics");
                assert_eq!(pages[0].content.len(), 1);
            }
            other => panic!("expected pages, got {:?}", other),
        }
    }

    #[test]
    fn wrapped_export_parses() {
        let json = format!(r#"{{"pages": [{}]}}"#, PAGE_JSON);
        let doc = NoteDocument::from_json(&json, "test").unwrap();
        assert!(matches!(doc, NoteDocument::Pages(ref p) if p.len() == 1));
    }

    #[test]
    fn malformed_export_is_a_parse_error() {
        let err = NoteDocument::from_json("{not json", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn canonical_document_rewrites_block_bodies() {
        let json = format!("[{}]", PAGE_JSON);
        let doc = NoteDocument::from_json(&json, "test").unwrap();
        let canonical = doc.canonical();
        match canonical {
            NoteDocument::Pages(pages) => {
                assert_eq!(pages[0].content[0].body, "\n$$\nE = mc^2\n$$\n");
            }
            other => panic!("expected pages, got {:?}", other),
        }
    }
}
