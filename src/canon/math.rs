// src/canon/math.rs
//! LaTeX delimiter normalization for prose spans.
//!
//! Raw note bodies mix several math conventions: `\[...\]` and `\(...\)`
//! delimiters pasted from LaTeX documents, bare `\begin{align}` environments
//! pasted without any delimiter, and `$`/`$$` spans typed by hand. The math
//! renderer accepts only uniform `$...$` and `$$...$$`, and only a subset of
//! environments inside a `$$` block. These passes rewrite everything into
//! that form.
//!
//! The pass order is load-bearing: bracket and paren delimiters are
//! rewritten first, then bare environments are wrapped, then existing
//! display blocks are normalized, and the inline pass runs last against
//! text with all display blocks masked out. Each pass is total — input a
//! pass does not recognize flows through unchanged.

use regex::{Captures, Regex};

lazy_static::lazy_static! {
    /// Display math in LaTeX bracket form: `\[ ... \]`.
    static ref BRACKET_DISPLAY: Regex = Regex::new(r"(?s)\\\[(.*?)\\\]")
        .expect("bracket display pattern must compile");

    /// Inline math in LaTeX paren form: `\( ... \)`.
    static ref PAREN_INLINE: Regex = Regex::new(r"(?s)\\\((.*?)\\\)")
        .expect("paren inline pattern must compile");

    /// A multi-line equation environment, with any `$$` already around it
    /// captured so wrapping never duplicates delimiters. Starred forms are
    /// accepted alongside the plain names.
    static ref ENVIRONMENT: Regex = Regex::new(
        r"(?s)(?:\$\$\s*)?\\begin\{(align|equation|gather|alignat)(\*?)\}(.*?)\\end\{(align|equation|gather|alignat)(\*?)\}(?:\s*\$\$)?"
    )
    .expect("environment pattern must compile");

    /// An existing display block: `$$ ... $$`.
    static ref DISPLAY_BLOCK: Regex = Regex::new(r"(?s)\$\$(.*?)\$\$")
        .expect("display block pattern must compile");

    /// An inline span: `$ ... $` with no bare `$` inside.
    ///
    /// The leading alternation rejects an opening delimiter preceded by a
    /// backslash (an escaped `\$` is literal text) or by another `$` (part
    /// of a display delimiter). Escaped characters inside the payload are
    /// skipped as pairs so `\$` never closes the span either.
    static ref INLINE_SPAN: Regex = Regex::new(
        r"(?P<lead>^|[^\\$])\$(?P<tex>(?:[^$\\]|\\.)+?)\$"
    )
    .expect("inline span pattern must compile");
}

/// Runs the full LaTeX normalization chain over one prose span.
pub fn normalize_prose(text: &str) -> String {
    let text = rewrite_bracket_display(text);
    let text = rewrite_paren_inline(&text);
    let text = wrap_environments(&text);
    let text = normalize_display_blocks(&text);
    normalize_inline_spans(&text)
}

/// `\[ x^2 \]` becomes a standalone `$$` block with the payload trimmed.
fn rewrite_bracket_display(text: &str) -> String {
    BRACKET_DISPLAY
        .replace_all(text, |caps: &Captures| {
            format!("\n$$\n{}\n$$\n", caps[1].trim())
        })
        .into_owned()
}

/// `\( \pi \)` becomes `$\pi$` — trimmed, no added newlines.
fn rewrite_paren_inline(text: &str) -> String {
    PAREN_INLINE
        .replace_all(text, |caps: &Captures| format!("${}$", caps[1].trim()))
        .into_owned()
}

/// Maps an environment name to one the math engine accepts inside `$$`.
///
/// `aligned`/`gathered` are the display-compatible equivalents; `equation`
/// and `alignat` have none, so they are approximated by `aligned`.
fn display_safe_environment(name: &str) -> &str {
    match name {
        "align" | "equation" | "alignat" => "aligned",
        "gather" => "gathered",
        other => other,
    }
}

/// Wraps a bare `\begin{ENV}...\end{ENV}` in a fresh `$$` block, renaming
/// the environment to its display-safe equivalent in both tags.
///
/// Any `$$` already flanking the environment was consumed by the match, so
/// re-wrapping never stacks delimiters. A begin/end name mismatch is left
/// exactly as written for the downstream renderer to complain about.
fn wrap_environments(text: &str) -> String {
    ENVIRONMENT
        .replace_all(text, |caps: &Captures| {
            let (begin_name, begin_star) = (&caps[1], &caps[2]);
            let (end_name, end_star) = (&caps[4], &caps[5]);
            if begin_name != end_name || begin_star != end_star {
                return caps[0].to_string();
            }

            let renamed = display_safe_environment(begin_name);
            format!(
                "\n\n$$\n\\begin{{{env}}}{body}\\end{{{env}}}\n$$\n\n",
                env = renamed,
                body = &caps[3]
            )
        })
        .into_owned()
}

/// Ensures every `$$` block carries a newline just inside each delimiter,
/// with the payload trimmed.
///
/// A block already in that shape is returned byte-identical, so re-running
/// the canonicalizer never accumulates newlines.
fn normalize_display_blocks(text: &str) -> String {
    DISPLAY_BLOCK
        .replace_all(text, |caps: &Captures| {
            let payload = &caps[1];
            let trimmed = payload.trim();
            if payload == format!("\n{}\n", trimmed) {
                caps[0].to_string()
            } else {
                format!("\n$$\n{}\n$$\n", trimmed)
            }
        })
        .into_owned()
}

/// Trims the payload of every remaining `$...$` inline span.
///
/// Display blocks are masked out first so an inline match can never start
/// before a `$$` region and end inside it.
fn normalize_inline_spans(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;

    for block in DISPLAY_BLOCK.find_iter(text) {
        push_inline_normalized(&mut output, &text[cursor..block.start()]);
        output.push_str(block.as_str());
        cursor = block.end();
    }
    push_inline_normalized(&mut output, &text[cursor..]);

    output
}

fn push_inline_normalized(output: &mut String, gap: &str) {
    let normalized = INLINE_SPAN.replace_all(gap, |caps: &Captures| {
        format!("{}${}$", &caps["lead"], caps["tex"].trim())
    });
    output.push_str(&normalized);
}
