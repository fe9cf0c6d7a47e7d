//! The book catalog
//!
//! The catalog is produced offline from a [`Manifest`] and saved as a JSON
//! file; the reading application only ever loads it.

mod daily;
mod manifest;

pub use daily::DailyQuote;
pub use manifest::{BookSource, Manifest};

use crate::error::{CatalogError, Result};
use crate::types::{BookRecord, ReadingPlan};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// All books and reading plans offered to readers
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    pub books: Vec<BookRecord>,

    #[serde(default)]
    pub plans: Vec<ReadingPlan>,
}

impl Catalog {
    pub fn new(books: Vec<BookRecord>, plans: Vec<ReadingPlan>) -> Self {
        Self { books, plans }
    }

    /// Load a catalog from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Save the catalog to a JSON file atomically
    /// Writes to a temp file then renames to avoid partial writes
    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, &data)?;
        std::fs::rename(&temp_path, path)?;

        tracing::info!(
            "Saved catalog with {} books and {} plans to {:?}",
            self.books.len(),
            self.plans.len(),
            path
        );
        Ok(())
    }

    /// Look up a book by its slug
    pub fn book(&self, id: &str) -> Option<&BookRecord> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn plan(&self, plan_id: &str) -> Option<&ReadingPlan> {
        self.plans.iter().find(|p| p.plan_id == plan_id)
    }

    /// Books tagged with a topic, in catalog order
    pub fn books_with_topic<'a>(&'a self, topic: &'a str) -> impl Iterator<Item = &'a BookRecord> {
        self.books.iter().filter(move |b| b.has_topic(topic))
    }

    /// Every topic in the catalog, in first-seen order
    pub fn topics(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.books
            .iter()
            .flat_map(|b| b.topics.iter())
            .filter(|t| seen.insert(t.as_str()))
            .map(String::as_str)
            .collect()
    }

    /// Case-insensitive search over title, author and topics
    pub fn search(&self, term: &str) -> Vec<&BookRecord> {
        let term = term.to_lowercase();
        self.books
            .iter()
            .filter(|b| {
                b.title.to_lowercase().contains(&term)
                    || b.author.to_lowercase().contains(&term)
                    || b.topics.iter().any(|t| t.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Check cross-references and readability, returning every problem found
    pub fn validate(&self) -> Vec<CatalogError> {
        let mut problems = Vec::new();

        let mut book_ids = HashSet::new();
        for book in &self.books {
            if !book_ids.insert(book.id.as_str()) {
                problems.push(CatalogError::DuplicateBook(book.id.clone()));
            }
            if !book.is_readable() {
                problems.push(CatalogError::Unreadable(book.id.clone()));
            }
        }

        let mut plan_ids = HashSet::new();
        for plan in &self.plans {
            if !plan_ids.insert(plan.plan_id.as_str()) {
                problems.push(CatalogError::DuplicatePlan(plan.plan_id.clone()));
            }
            if !book_ids.contains(plan.book_id.as_str()) {
                problems.push(CatalogError::UnknownBook {
                    plan_id: plan.plan_id.clone(),
                    book_id: plan.book_id.clone(),
                });
            }
            for day in &plan.schedule {
                if day.day == 0 || day.day > plan.duration {
                    problems.push(CatalogError::DayOutOfRange {
                        plan_id: plan.plan_id.clone(),
                        day: day.day,
                        duration: plan.duration,
                    });
                }
            }
        }

        problems
    }
}
