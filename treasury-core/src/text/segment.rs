//! Chapter segmentation
//!
//! Each source site marks chapters differently, but the procedure is the same
//! for all of them: split before every heading line, take the title from that
//! line, clean the rest, and drop anything too short to be a real chapter.
//! The differences live entirely in a [`SegmentProfile`].

use super::strip::strip_noise;
use crate::error::ParseError;
use crate::types::Chapter;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Describes how one source format marks its chapters
#[derive(Debug, Clone)]
pub struct SegmentProfile {
    /// Matched against each line; a match starts a new span
    heading: Regex,
    /// Matched against a span's first line; group 1 is the title
    title: Regex,
    /// Cleaned content must be longer than this many characters
    min_content_len: usize,
    /// Used as `"<label> <n>"` when no title can be captured
    fallback_label: String,
}

impl SegmentProfile {
    /// Build a custom profile. Both patterns should be anchored with `^`.
    pub fn new(
        heading: &str,
        title: &str,
        min_content_len: usize,
        fallback_label: impl Into<String>,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            heading: Regex::new(heading)?,
            title: Regex::new(title)?,
            min_content_len,
            fallback_label: fallback_label.into(),
        })
    }

    pub fn min_content_len(&self) -> usize {
        self.min_content_len
    }

    pub fn fallback_label(&self) -> &str {
        &self.fallback_label
    }

    /// Title from the first line of a span, if the heading carries one
    fn capture_title(&self, first_line: &str) -> Option<String> {
        self.title
            .captures(first_line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string)
    }
}

fn builtin(heading: &str, title: &str, min_content_len: usize, label: &str) -> SegmentProfile {
    SegmentProfile {
        heading: Regex::new(heading).unwrap(),
        title: Regex::new(title).unwrap(),
        min_content_len,
        fallback_label: label.to_string(),
    }
}

// `# 1. The Reed` / `## 2. Bruising`
static DEVOTIONAL: LazyLock<SegmentProfile> = LazyLock::new(|| {
    builtin(r"^##?\s+\d+\.\s+", r"^##?\s*(\d+\.\s*[^#]+)", 200, "Chapter")
});

// `## Chapter 3: The Spirit as the Only Effectual Agent`
static EXPOSITION: LazyLock<SegmentProfile> = LazyLock::new(|| {
    builtin(
        r"^##\s+Chapter\s+\d+",
        r"^##\s+Chapter\s+\d+:\s*(.*)",
        300,
        "Chapter",
    )
});

// `## 4. Man's Chief End`
static CATECHETICAL: LazyLock<SegmentProfile> =
    LazyLock::new(|| builtin(r"^##\s+\d+\.", r"^##\s+(\d+\.\s*[^#]+)", 300, "Section"));

/// The built-in source formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    /// Numbered devotional prose (Sibbes, Monergism edition)
    #[serde(alias = "sibbes")]
    Devotional,

    /// `Chapter N:` expositions (Owen, Modern Puritans edition)
    #[serde(alias = "owen")]
    Exposition,

    /// Numbered catechism sections (Watson, CCEL edition)
    #[serde(alias = "watson")]
    Catechetical,
}

impl SourceFormat {
    pub const ALL: [SourceFormat; 3] = [
        SourceFormat::Devotional,
        SourceFormat::Exposition,
        SourceFormat::Catechetical,
    ];

    /// The segmentation profile for this format
    pub fn profile(&self) -> &'static SegmentProfile {
        match self {
            SourceFormat::Devotional => &DEVOTIONAL,
            SourceFormat::Exposition => &EXPOSITION,
            SourceFormat::Catechetical => &CATECHETICAL,
        }
    }

    /// Segment a document using this format's profile
    pub fn segment(&self, document: &str) -> Vec<Chapter> {
        segment(document, self.profile())
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Devotional => "devotional",
            SourceFormat::Exposition => "exposition",
            SourceFormat::Catechetical => "catechetical",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "devotional" | "sibbes" => Ok(SourceFormat::Devotional),
            "exposition" | "owen" => Ok(SourceFormat::Exposition),
            "catechetical" | "watson" => Ok(SourceFormat::Catechetical),
            other => Err(ParseError::UnknownFormat(other.to_string())),
        }
    }
}

/// Split a whole document into chapters.
///
/// Spans that clean down to no more than the profile's threshold are dropped,
/// so the result may be empty. Surviving chapters are numbered `1..=N` in
/// document order.
pub fn segment(document: &str, profile: &SegmentProfile) -> Vec<Chapter> {
    let mut chapters = Vec::new();

    for (index, span) in candidate_spans(document, &profile.heading).into_iter().enumerate() {
        let (first_line, rest) = match span.split_once('\n') {
            Some((first, rest)) => (first.trim_end_matches('\r'), rest),
            None => (span, ""),
        };

        // Fallback numbering counts candidates, not survivors
        let title = profile
            .capture_title(first_line)
            .unwrap_or_else(|| format!("{} {}", profile.fallback_label, index + 1));

        let content = strip_noise(rest);
        let len = content.chars().count();

        if len <= profile.min_content_len {
            tracing::debug!(
                "Discarding span {} ({:?}): {} chars, need more than {}",
                index + 1,
                title,
                len,
                profile.min_content_len
            );
            continue;
        }

        let id = chapters.len() as u32 + 1;
        tracing::debug!("Chapter {} ({:?}): {} chars", id, title, len);
        chapters.push(Chapter::new(id, title, content));
    }

    chapters
}

/// Contiguous spans of the document, each starting at a heading line except
/// possibly the first
fn candidate_spans<'a>(document: &'a str, heading: &Regex) -> Vec<&'a str> {
    let mut starts = vec![0];
    let mut offset = 0;

    for line in document.split_inclusive('\n') {
        if offset > 0 && heading.is_match(line) {
            starts.push(offset);
        }
        offset += line.len();
    }

    if document.is_empty() {
        return Vec::new();
    }

    starts
        .iter()
        .zip(starts.iter().skip(1).chain(std::iter::once(&document.len())))
        .map(|(&start, &end)| &document[start..end])
        .collect()
}
