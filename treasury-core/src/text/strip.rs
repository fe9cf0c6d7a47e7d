//! Markup noise removal for segmented source text
//!
//! Sources arrive as loosely Markdown-flavoured prose scraped from several
//! sites. None of the markup carries meaning for the reader, so links,
//! navigation residue, emphasis markers and list numbering are dropped while
//! the words themselves are kept.

use regex::Regex;
use std::sync::LazyLock;

// Regex patterns (compiled once using LazyLock)
static RE_LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[^\]]*\]\([^)]*\)").unwrap());

static RE_BACK_TO_TOP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[_*]*\[back\s+to\s+top\][^\n]*").unwrap());

static RE_EMPTY_BRACKETS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[[ \t]*\]").unwrap());

static RE_BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

static RE_ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([^_\n]+)_").unwrap());

static RE_LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:[a-z]|\d+)\.[ \t]+").unwrap());

static RE_EXTRA_BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\r?\n){3,}").unwrap());

static RE_LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(?:[A-Za-z]|\d+)\.\s*").unwrap());

/// Remove source markup noise from a span of text.
///
/// Never fails: text without any of the recognised patterns is only trimmed.
/// The result is a fixed point, so `strip_noise(&strip_noise(s)) == strip_noise(s)`.
pub fn strip_noise(text: &str) -> String {
    let mut current = strip_pass(text);
    // Every productive pass shortens the text, so this terminates.
    loop {
        let next = strip_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One pass of the cleanup pipeline. Order matters: links go before emphasis
/// so underscores inside URLs are never mistaken for italics.
fn strip_pass(text: &str) -> String {
    let text = RE_LINK.replace_all(text, "");
    let text = RE_BACK_TO_TOP.replace_all(&text, "");
    let text = RE_EMPTY_BRACKETS.replace_all(&text, "");
    let text = RE_BOLD.replace_all(&text, "$1");
    let text = RE_ITALIC.replace_all(&text, "$1");
    let text = RE_LIST_MARKER.replace_all(&text, "");
    let text = RE_EXTRA_BLANK_LINES.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Strip a single leading `a.` / `A.` / `12.` marker from a sentence
pub(crate) fn strip_leading_marker(text: &str) -> &str {
    match RE_LEADING_MARKER.find(text) {
        Some(m) => &text[m.end()..],
        None => text,
    }
}
