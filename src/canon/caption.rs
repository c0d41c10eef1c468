// src/canon/caption.rs
//! Diagram caption extraction and the `%%caption:` directive contract.
//!
//! Users annotate a diagram fence with a trailing caption in one of two
//! surface syntaxes:
//!
//! ````text
//! ```mermaid
//! graph TD; A-->B;
//! ``` $<"Flow A to B">
//! ````
//!
//! or `$"Flow A to B"$`. Both resolve to the same internal directive: a
//! `%%caption: <text>` line injected immediately before the closing fence.
//! The diagram renderer reads the directive back out with
//! [`split_caption_directive`] and displays the caption beneath the diagram.
//!
//! This pass runs before segmentation because the caption annotation sits
//! *outside* the fence and uses `$`, which the math passes would otherwise
//! mangle into inline math.

use crate::constants::{CAPTION_DIRECTIVE_PREFIX, DIAGRAM_FENCE_TAG};
use regex::{Captures, Regex};

lazy_static::lazy_static! {
    /// A diagram fence immediately followed by a caption annotation.
    ///
    /// Caption text is single-line and quote-free; the annotation must be
    /// the next non-whitespace after the closing fence. Matches are taken
    /// leftmost, non-overlapping, left to right — the deterministic policy
    /// for back-to-back captioned diagrams.
    static ref CAPTIONED_FENCE: Regex = Regex::new(&format!(
        r#"(?s)(?P<fence>```{tag}.*?```)\s*(?:\$<"(?P<angled>[^"\n]*)">|\$"(?P<quoted>[^"\n]*)"\$)"#,
        tag = DIAGRAM_FENCE_TAG
    ))
    .expect("captioned fence pattern must compile");

    /// The directive line as the diagram renderer reads it back.
    static ref CAPTION_DIRECTIVE: Regex = Regex::new(r"%%caption:[ \t]*([^\n]*)")
        .expect("caption directive pattern must compile");
}

/// Moves trailing caption annotations into their diagram fences.
///
/// Each captioned fence gains a `%%caption: <text>` line before its closing
/// delimiter; the external annotation is removed. Fences without a caption
/// and captions without a fence are left alone.
pub fn embed_captions(raw: &str) -> String {
    CAPTIONED_FENCE
        .replace_all(raw, |caps: &Captures| {
            let fence = &caps["fence"];
            let caption = caps
                .name("angled")
                .or_else(|| caps.name("quoted"))
                .map(|m| m.as_str())
                .unwrap_or_default();

            match fence.strip_suffix("```") {
                Some(body) => format!(
                    "{}\n{}{}\n```",
                    body, CAPTION_DIRECTIVE_PREFIX, caption
                ),
                // The pattern guarantees the suffix; keep the text intact
                // rather than guessing if that ever stops holding.
                None => fence.to_string(),
            }
        })
        .into_owned()
}

/// Splits a fence body into diagram source and its caption, if any.
///
/// This is the consuming side of the directive contract: the renderer strips
/// the `%%caption:` line before handing the remainder to the diagram engine
/// and shows the caption text separately. Only the first directive counts.
#[allow(dead_code)] // Library surface, unused by the bin target
pub fn split_caption_directive(fence_body: &str) -> (String, Option<String>) {
    match CAPTION_DIRECTIVE.captures(fence_body) {
        Some(caps) => {
            let caption = caps
                .get(1)
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            let whole = caps.get(0).map(|m| m.as_str()).unwrap_or_default();
            (fence_body.replacen(whole, "", 1), Some(caption))
        }
        None => (fence_body.to_string(), None),
    }
}
