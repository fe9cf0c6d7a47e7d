//! Records kept in the user-data store
//!
//! These reference catalog entries by `bookId` / `planId` only; the catalog
//! itself is never written by the store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A passage the reader chose to keep
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedQuote {
    pub id: String,
    pub text: String,
    pub author: String,
    pub book_title: String,
    pub book_id: String,
    pub chapter_id: u32,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Input for saving a quote; id and timestamp are filled in by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuote {
    pub text: String,
    pub author: String,
    pub book_title: String,
    pub book_id: String,
    pub chapter_id: u32,
    pub tags: Vec<String>,
}

/// A free-form journal entry, optionally tied to a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_book_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// Create an entry stamped with the current time and a fresh id
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into().trim().to_string(),
            content: content.into().trim().to_string(),
            date: now.date_naive(),
            linked_book_id: None,
            tags: Vec::new(),
            timestamp: now,
        }
    }

    pub fn linked_to(mut self, book_id: impl Into<String>) -> Self {
        self.linked_book_id = Some(book_id.into());
        self
    }

    /// Case-insensitive match over title and content
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.title.to_lowercase().contains(&term) || self.content.to_lowercase().contains(&term)
    }
}

/// Progress through one reading plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlanProgress {
    pub plan_id: String,
    pub completed_days: Vec<u32>,
    pub start_date: DateTime<Utc>,
}

impl PlanProgress {
    pub fn new(plan_id: impl Into<String>) -> Self {
        Self {
            plan_id: plan_id.into(),
            completed_days: Vec::new(),
            start_date: Utc::now(),
        }
    }

    /// Mark a day done, or undone if it already was
    pub fn toggle(&mut self, day: u32) {
        if let Some(pos) = self.completed_days.iter().position(|&d| d == day) {
            self.completed_days.remove(pos);
        } else {
            self.completed_days.push(day);
        }
    }

    pub fn is_complete(&self, day: u32) -> bool {
        self.completed_days.contains(&day)
    }

    /// Share of the plan completed, 0.0 to 100.0
    pub fn percent_complete(&self, duration: u32) -> f64 {
        if duration == 0 {
            return 0.0;
        }
        (self.completed_days.len() as f64 / duration as f64 * 100.0).min(100.0)
    }
}
