// src/canon/span.rs
//! Fence-aware segmentation of block text.
//!
//! The math passes must never touch text inside a backtick fence — a shell
//! sample containing `$HOME` or diagram source containing `\[` would be
//! corrupted otherwise. Segmentation makes that scoping structural: the
//! text is split into a sequence of tagged spans, and only prose spans are
//! ever handed to the LaTeX normalizer.

use crate::constants::FENCE_MAX_BACKTICKS;
use regex::Regex;

/// One segment of a block body, tagged by whether it sits inside a fence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span<'a> {
    /// A backtick-delimited span (inline code or fenced block), delimiters
    /// included. Passed through the math passes byte-for-byte.
    Fenced(&'a str),
    /// Everything between fences. The only text LaTeX normalization sees.
    Prose(&'a str),
}

impl<'a> Span<'a> {
    /// The underlying text of the span, delimiters included for fences.
    #[allow(dead_code)] // Library surface, unused by the bin target
    pub fn text(&self) -> &'a str {
        match self {
            Span::Fenced(text) | Span::Prose(text) => text,
        }
    }
}

lazy_static::lazy_static! {
    /// A backtick run of 1..=3, a minimal body, and a closing run.
    ///
    /// Non-greedy on the body so adjacent fences stay separate. An unclosed
    /// fence has no match and is treated as prose, which is the best-effort
    /// behavior for malformed input.
    static ref FENCE_SPAN: Regex = Regex::new(&format!(
        r"(?s)`{{1,{max}}}.*?`{{1,{max}}}",
        max = FENCE_MAX_BACKTICKS
    ))
    .expect("fence span pattern must compile");
}

/// Splits block text into alternating prose and fenced spans.
///
/// The concatenation of all span texts is the input, byte-for-byte.
pub fn segment(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for found in FENCE_SPAN.find_iter(text) {
        if found.start() > cursor {
            spans.push(Span::Prose(&text[cursor..found.start()]));
        }
        spans.push(Span::Fenced(found.as_str()));
        cursor = found.end();
    }

    if cursor < text.len() {
        spans.push(Span::Prose(&text[cursor..]));
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reassemble(spans: &[Span<'_>]) -> String {
        spans.iter().map(|s| s.text()).collect()
    }

    #[test]
    fn plain_text_is_a_single_prose_span() {
        let spans = segment("no fences here");
        assert_eq!(spans, vec![Span::Prose("no fences here")]);
    }

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn inline_code_becomes_a_fenced_span() {
        let spans = segment("use `rm -rf $DIR` carefully");
        assert_eq!(
            spans,
            vec![
                Span::Prose("use "),
                Span::Fenced("`rm -rf $DIR`"),
                Span::Prose(" carefully"),
            ]
        );
    }

    #[test]
    fn triple_backtick_block_is_one_span() {
        let text = "before\n```sh\necho $HOME\n```\nafter";
        let spans = segment(text);
        assert_eq!(
            spans,
            vec![
                Span::Prose("before\n"),
                Span::Fenced("```sh\necho $HOME\n```"),
                Span::Prose("\nafter"),
            ]
        );
        assert_eq!(reassemble(&spans), text);
    }

    #[test]
    fn separate_inline_spans_stay_separate() {
        let spans = segment("`a` and `b`");
        assert_eq!(
            spans,
            vec![
                Span::Fenced("`a`"),
                Span::Prose(" and "),
                Span::Fenced("`b`"),
            ]
        );
    }

    #[test]
    fn unclosed_fence_leaves_trailing_prose() {
        // A lone ``` pairs with itself (one opener, two closers); the rest
        // of the unterminated block is prose. Matches the non-greedy split
        // behavior the rest of the pipeline assumes.
        let spans = segment("```sh\nunterminated");
        assert_eq!(
            spans,
            vec![Span::Fenced("```"), Span::Prose("sh\nunterminated")]
        );
    }

    #[test]
    fn segmentation_is_lossless() {
        let text = "x `a` y ```m\nz\n``` w";
        assert_eq!(reassemble(&segment(text)), text);
    }
}
