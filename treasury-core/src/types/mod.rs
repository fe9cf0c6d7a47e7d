//! Core types shared by the parser, the catalog and the user-data store

mod book;
mod chapter;
mod plan;
mod user;

pub use book::{BookMetadata, BookRecord};
pub use chapter::Chapter;
pub use plan::{PlanDay, ReadingPlan};
pub use user::{JournalEntry, NewQuote, PlanProgress, SavedQuote};
