//! Typed access to the reader's quotes, journal and plan progress

use super::{KeyValueStore, StoreResult};
use crate::error::StoreError;
use crate::types::{JournalEntry, NewQuote, PlanProgress, SavedQuote};
use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use tokio::sync::Mutex;

pub const QUOTES_KEY: &str = "puritanTreasuryQuotes";
pub const JOURNAL_KEY: &str = "puritanTreasuryJournal";
pub const PLAN_PROGRESS_KEY: &str = "puritanTreasuryPlanProgress";

/// The three user collections over any [`KeyValueStore`]
pub struct UserData<S> {
    store: S,
    /// Held across each read-modify-write so concurrent edits are not lost
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> UserData<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    async fn load<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Vec<T>> {
        match self.store.get(key).await? {
            None => Ok(Vec::new()),
            Some(raw) => serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, items: &[T]) -> StoreResult<()> {
        let raw =
            serde_json::to_string(items).map_err(|e| StoreError::BackendError(e.to_string()))?;
        self.store.set(key, raw).await
    }

    // Quotes

    pub async fn quotes(&self) -> StoreResult<Vec<SavedQuote>> {
        self.load(QUOTES_KEY).await
    }

    /// Append a quote to the collection
    pub async fn save_quote(&self, quote: NewQuote) -> StoreResult<SavedQuote> {
        let _guard = self.write_lock.lock().await;
        let mut quotes = self.quotes().await?;
        let saved = SavedQuote {
            id: uuid::Uuid::new_v4().to_string(),
            text: quote.text,
            author: quote.author,
            book_title: quote.book_title,
            book_id: quote.book_id,
            chapter_id: quote.chapter_id,
            timestamp: Utc::now(),
            tags: quote.tags,
        };
        quotes.push(saved.clone());
        self.save(QUOTES_KEY, &quotes).await?;
        Ok(saved)
    }

    /// Remove a quote, returning whether it existed
    pub async fn delete_quote(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut quotes = self.quotes().await?;
        let before = quotes.len();
        quotes.retain(|q| q.id != id);
        if quotes.len() == before {
            return Ok(false);
        }
        self.save(QUOTES_KEY, &quotes).await?;
        Ok(true)
    }

    /// Every tag used on a saved quote, in first-seen order
    pub async fn quote_tags(&self) -> StoreResult<Vec<String>> {
        let mut seen = HashSet::new();
        Ok(self
            .quotes()
            .await?
            .into_iter()
            .flat_map(|q| q.tags)
            .filter(|t| seen.insert(t.clone()))
            .collect())
    }

    // Journal

    /// Entries, newest first
    pub async fn journal(&self) -> StoreResult<Vec<JournalEntry>> {
        self.load(JOURNAL_KEY).await
    }

    /// Replace the entry with the same id, or add a new one at the front
    pub async fn save_entry(&self, entry: JournalEntry) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.journal().await?;
        match entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                // Keep the original creation time when editing
                let timestamp = existing.timestamp;
                *existing = JournalEntry { timestamp, ..entry };
            }
            None => entries.insert(0, entry),
        }
        self.save(JOURNAL_KEY, &entries).await
    }

    pub async fn delete_entry(&self, id: &str) -> StoreResult<bool> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.journal().await?;
        let before = entries.len();
        entries.retain(|e| e.id != id);
        if entries.len() == before {
            return Ok(false);
        }
        self.save(JOURNAL_KEY, &entries).await?;
        Ok(true)
    }

    // Reading plans

    pub async fn plan_progress(&self) -> StoreResult<Vec<PlanProgress>> {
        self.load(PLAN_PROGRESS_KEY).await
    }

    /// Start a plan; starting one already in progress leaves it untouched
    pub async fn start_plan(&self, plan_id: &str) -> StoreResult<PlanProgress> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.plan_progress().await?;
        if let Some(existing) = all.iter().find(|p| p.plan_id == plan_id) {
            return Ok(existing.clone());
        }
        let progress = PlanProgress::new(plan_id);
        all.push(progress.clone());
        self.save(PLAN_PROGRESS_KEY, &all).await?;
        Ok(progress)
    }

    /// Toggle a day of a started plan. Returns `None` if the plan was never started.
    pub async fn toggle_day(&self, plan_id: &str, day: u32) -> StoreResult<Option<PlanProgress>> {
        let _guard = self.write_lock.lock().await;
        let mut all = self.plan_progress().await?;
        let Some(progress) = all.iter_mut().find(|p| p.plan_id == plan_id) else {
            return Ok(None);
        };
        progress.toggle(day);
        let updated = progress.clone();
        self.save(PLAN_PROGRESS_KEY, &all).await?;
        Ok(Some(updated))
    }
}
