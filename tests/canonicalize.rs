// tests/canonicalize.rs
//! End-to-end tests for the content canonicalizer: caption extraction,
//! delimiter normalization, fence shielding, and idempotence.

use notecanon::{canonicalize, canonicalize_opt, split_caption_directive};
use pretty_assertions::assert_eq;

#[test]
fn empty_and_absent_input_yield_empty_output() {
    assert_eq!(canonicalize(""), "");
    assert_eq!(canonicalize_opt(None), "");
    assert_eq!(canonicalize_opt(Some("")), "");
}

#[test]
fn bracket_display_math_becomes_dollar_block() {
    let out = canonicalize("\\[x^2\\]");
    let start = out.find("$$").expect("output should contain a $$ block");
    let end = out.rfind("$$").expect("output should contain a closing $$");
    assert!(end > start);
    assert_eq!(out[start + 2..end].trim(), "x^2");
}

#[test]
fn paren_inline_math_becomes_single_dollar() {
    assert_eq!(canonicalize("\\(\\pi\\)"), "$\\pi$");
}

#[test]
fn bare_align_environment_is_wrapped_and_renamed() {
    let out = canonicalize("\\begin{align}a &= b\\end{align}");
    assert!(out.contains("$$"));
    assert!(out.contains("\\begin{aligned}a &= b\\end{aligned}"));
    assert!(!out.contains("\\begin{align}"));
    assert!(!out.contains("\\end{align}"));
}

#[test]
fn canonical_display_block_survives_reruns_unchanged() {
    let canonical = "\n$$\nE = mc^2\n$$\n";
    assert_eq!(canonicalize(canonical), canonical);
}

#[test]
fn canonical_inline_span_survives_reruns_unchanged() {
    let canonical = "the constant $\\pi$ appears";
    assert_eq!(canonicalize(canonical), canonical);
}

#[test]
fn angled_caption_is_embedded_in_the_fence() {
    let raw = "```mermaid\ngraph TD; A-->B;\n``` $<\"Flow A to B\">";
    let out = canonicalize(raw);

    let lines: Vec<&str> = out.lines().collect();
    let closing = lines
        .iter()
        .rposition(|l| l.trim() == "```")
        .expect("closing fence present");
    assert_eq!(lines[closing - 1], "%%caption: Flow A to B");
    assert!(!out.contains("$<\""));
}

#[test]
fn quoted_caption_syntax_gives_the_same_directive() {
    let raw = "```mermaid\ngraph TD;\n``` $\"Simple\"$";
    let out = canonicalize(raw);
    assert!(out.contains("%%caption: Simple\n```"));
    assert!(!out.contains("$\"Simple\"$"));
}

#[test]
fn escaped_dollar_signs_are_left_alone() {
    let raw = "Price: \\$5 and \\$10";
    assert_eq!(canonicalize(raw), raw);
}

#[test]
fn mixed_content_normalizes_math_but_shields_the_fence() {
    let raw = concat!(
        "The energy relation \\[E = mc^2\\] holds.\n",
        "```sh\necho \"$PATH\"\n```\n",
        "And \\(\\pi\\) is inline.",
    );
    let out = canonicalize(raw);

    assert!(out.contains("$$\nE = mc^2\n$$"));
    assert!(out.contains("$\\pi$"));
    // The fenced shell sample is byte-for-byte intact.
    assert!(out.contains("```sh\necho \"$PATH\"\n```"));
}

#[test]
fn fence_interior_changes_only_by_the_caption_directive() {
    let source = "graph LR; X-->Y;";
    let raw = format!("```mermaid\n{}\n``` $<\"Edges\">", source);
    let out = canonicalize(&raw);
    assert!(out.contains(source));

    // The consuming side recovers exactly what was injected.
    let fence_body = out
        .strip_prefix("```mermaid\n")
        .and_then(|rest| rest.strip_suffix("```"))
        .expect("fence delimiters intact");
    let (diagram, caption) = split_caption_directive(fence_body);
    assert_eq!(caption.as_deref(), Some("Edges"));
    assert!(diagram.contains(source));
    assert!(!diagram.contains("%%caption"));
}

#[test]
fn full_pipeline_is_idempotent_on_representative_content() {
    let raw = concat!(
        "# Notes\n\n",
        "Inline \\(a+b\\) and display \\[c^2\\] math.\n\n",
        "\\begin{gather}x = 1\\end{gather}\n\n",
        "```mermaid\ngraph TD; A-->B;\n``` $<\"Flow\">\n\n",
        "Existing $$ d $$ and inline $ e $ spans.\n\n",
        "`code with $dollar`\n",
    );
    let once = canonicalize(raw);
    let twice = canonicalize(&once);
    assert_eq!(twice, once);
}

#[test]
fn malformed_latex_passes_through() {
    let raw = "\\[unclosed display and \\(unclosed inline";
    assert_eq!(canonicalize(raw), raw);
}
