// src/analytics.rs
//! Measurement of loaded documents for completion reporting.

use crate::model::{NoteDocument, Page};

/// Counts reported to the user after a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    pub pages: usize,
    pub blocks: usize,
    pub diagram_blocks: usize,
}

/// Walks a document and tallies its content.
pub fn measure_document(document: &NoteDocument) -> DocumentStats {
    match document {
        NoteDocument::RawBlock(block) => DocumentStats {
            pages: 0,
            blocks: 1,
            diagram_blocks: usize::from(block.is_diagram()),
        },
        NoteDocument::Pages(pages) => pages.iter().fold(
            DocumentStats {
                pages: pages.len(),
                ..DocumentStats::default()
            },
            |mut stats, page: &Page| {
                stats.blocks += page.content.len();
                stats.diagram_blocks += page
                    .content
                    .iter()
                    .filter(|block| block.is_diagram())
                    .count();
                stats
            },
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, NoteDocument};

    #[test]
    fn raw_block_counts_as_one() {
        let doc = NoteDocument::from_raw("text");
        let stats = measure_document(&doc);
        assert_eq!(stats.blocks, 1);
        assert_eq!(stats.pages, 0);
        assert_eq!(stats.diagram_blocks, 0);
    }

    #[test]
    fn diagram_blocks_are_tallied() {
        let mut block = ContentBlock::from_raw_text("```mermaid\ngraph TD;\n```");
        block.kind = crate::model::BlockKind::Diagram;
        let doc = NoteDocument::RawBlock(block);
        assert_eq!(measure_document(&doc).diagram_blocks, 1);
    }
}
