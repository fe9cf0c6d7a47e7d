//! Treasury Core Library
//!
//! This crate turns raw public-domain source texts into chaptered book
//! records for the Puritan Treasury reader. Each source is segmented with a
//! format-specific profile, cleaned of markup noise, and assembled with its
//! bibliographic metadata into a catalog that is generated offline and
//! loaded read-only by the application.

pub mod assemble;
pub mod catalog;
pub mod error;
pub mod store;
pub mod text;
pub mod types;

pub use assemble::{assemble, assemble_from_text};
pub use catalog::{BookSource, Catalog, DailyQuote, Manifest};
pub use error::{CatalogError, ParseError, Result, StoreError, TreasuryError};
pub use text::{extract_quotes, segment, strip_noise, QuoteExtractor, SegmentProfile, SourceFormat};
pub use types::{
    BookMetadata, BookRecord, Chapter, JournalEntry, NewQuote, PlanDay, PlanProgress, ReadingPlan,
    SavedQuote,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let metadata = BookMetadata::new("body-of-divinity", "A Body of Divinity", "Thomas Watson", 1692);
        let book = assemble(metadata, vec![Chapter::new(1, "1. Man's Chief End", "Glorify God.")]);
        assert_eq!(book.title, "A Body of Divinity");
        assert_eq!(book.chapters.len(), 1);
    }
}
