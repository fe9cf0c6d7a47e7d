//! The BookRecord type - one readable entry of the catalog

use super::Chapter;
use serde::{Deserialize, Serialize};

/// Bibliographic metadata supplied alongside a source text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookMetadata {
    /// Slug identifier, unique across the catalog
    pub id: String,

    pub title: String,

    pub author: String,

    /// Year of original publication
    pub year: i32,

    pub description: String,

    /// Topic tags, rendered in insertion order
    #[serde(default)]
    pub topics: Vec<String>,

    /// Where the public-domain text was obtained
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    #[serde(default = "default_public_domain")]
    pub public_domain: bool,
}

fn default_public_domain() -> bool {
    true
}

impl BookMetadata {
    /// Create metadata with the required fields
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: i32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            year,
            description: String::new(),
            topics: Vec::new(),
            source_url: None,
            public_domain: true,
        }
    }

    /// Set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Add a topic tag, ignoring duplicates
    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        let topic = topic.into();
        if !self.topics.contains(&topic) {
            self.topics.push(topic);
        }
        self
    }

    /// Set source URL
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source_url = Some(url.into());
        self
    }
}

/// A complete book as offered by the reading application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    pub id: String,
    pub title: String,
    pub author: String,
    pub year: i32,
    pub description: String,
    pub topics: Vec<String>,

    /// Ordered list of chapters
    pub chapters: Vec<Chapter>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,

    pub public_domain: bool,
}

impl BookRecord {
    /// Whether the reader has anything to show
    pub fn is_readable(&self) -> bool {
        !self.chapters.is_empty()
    }

    /// Look up a chapter by its id
    pub fn chapter(&self, id: u32) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Total content length across chapters, in characters
    pub fn content_len(&self) -> usize {
        self.chapters.iter().map(Chapter::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BookRecord {
        BookRecord {
            id: "bruised-reed".to_string(),
            title: "The Bruised Reed".to_string(),
            author: "Richard Sibbes".to_string(),
            year: 1630,
            description: String::new(),
            topics: vec!["Grace".to_string()],
            chapters: vec![Chapter::new(1, "One", "abc"), Chapter::new(2, "Two", "defg")],
            source_url: None,
            public_domain: true,
        }
    }

    #[test]
    fn test_chapter_lookup() {
        let book = sample();
        assert_eq!(book.chapter(2).map(|c| c.title.as_str()), Some("Two"));
        assert!(book.chapter(3).is_none());
        assert_eq!(book.content_len(), 7);
        assert!(book.is_readable());
    }

    #[test]
    fn test_serialization_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["publicDomain"], true);
        assert!(json.get("sourceUrl").is_none());
        assert!(json.get("public_domain").is_none());
    }

    #[test]
    fn test_metadata_topics_deduplicated() {
        let meta = BookMetadata::new("x", "X", "A", 1600)
            .with_topic("Grace")
            .with_topic("Comfort")
            .with_topic("Grace");
        assert_eq!(meta.topics, vec!["Grace", "Comfort"]);
    }

    #[test]
    fn test_metadata_defaults_on_deserialize() {
        let meta: BookMetadata = serde_json::from_str(
            r#"{"id":"x","title":"X","author":"A","year":1650,"description":"d"}"#,
        )
        .unwrap();
        assert!(meta.public_domain);
        assert!(meta.topics.is_empty());
        assert!(meta.source_url.is_none());
    }
}
