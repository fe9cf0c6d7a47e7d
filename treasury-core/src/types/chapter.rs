//! Chapter type representing a single segmented chapter of a book

use serde::{Deserialize, Serialize};

/// A single chapter of a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chapter {
    /// 1-based position among the chapters that survived segmentation
    pub id: u32,

    /// Chapter title
    pub title: String,

    /// Cleaned chapter text
    pub content: String,
}

impl Chapter {
    /// Create a new chapter
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }

    /// Length of the content in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
