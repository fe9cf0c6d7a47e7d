//! Pull-quote extraction
//!
//! A cheap heuristic: split on sentence-ending punctuation and keep the
//! sentences whose length makes them read well on their own.

use super::strip::strip_leading_marker;
use regex::{Regex, Split};
use std::ops::RangeInclusive;
use std::sync::LazyLock;

static RE_SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());

/// Default minimum quote length in characters
pub const DEFAULT_MIN_LEN: usize = 100;

/// Default maximum quote length in characters
pub const DEFAULT_MAX_LEN: usize = 400;

/// Extracts standalone quotes within an inclusive length band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteExtractor {
    min_len: usize,
    max_len: usize,
}

impl QuoteExtractor {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self { min_len, max_len }
    }

    pub fn band(&self) -> RangeInclusive<usize> {
        self.min_len..=self.max_len
    }

    /// Lazily extract quotes from a block of text
    pub fn extract<'a>(&self, text: &'a str) -> Quotes<'a> {
        Quotes {
            spans: RE_SENTENCE_END.split(text),
            band: self.band(),
        }
    }
}

impl Default for QuoteExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LEN, DEFAULT_MAX_LEN)
    }
}

/// Iterator over the quotes found in one text block
pub struct Quotes<'a> {
    spans: Split<'static, 'a>,
    band: RangeInclusive<usize>,
}

impl Iterator for Quotes<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        for span in self.spans.by_ref() {
            let span = span.trim();
            if span.is_empty() || !self.band.contains(&span.chars().count()) {
                continue;
            }

            let mut quote = strip_leading_marker(span).trim().to_string();
            if !quote.ends_with(['.', '!', '?']) {
                quote.push('.');
            }
            return Some(quote);
        }
        None
    }
}

/// Extract quotes using the default 100..=400 character band
pub fn extract_quotes(text: &str) -> Quotes<'_> {
    QuoteExtractor::default().extract(text)
}
