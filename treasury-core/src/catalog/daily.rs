//! Quote of the day

use super::Catalog;
use crate::text::QuoteExtractor;
use crate::types::NewQuote;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A quote drawn from the catalog, with enough context to link back to it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuote {
    pub text: String,
    pub author: String,
    pub book_title: String,
    pub book_id: String,
    pub chapter_id: u32,
}

impl DailyQuote {
    /// Turn this quote into something the reader can keep
    pub fn to_new_quote(&self, tags: Vec<String>) -> NewQuote {
        NewQuote {
            text: self.text.clone(),
            author: self.author.clone(),
            book_title: self.book_title.clone(),
            book_id: self.book_id.clone(),
            chapter_id: self.chapter_id,
            tags,
        }
    }
}

impl Catalog {
    /// Every extractable quote, in catalog then chapter order
    pub fn daily_candidates(&self) -> impl Iterator<Item = DailyQuote> + '_ {
        let extractor = QuoteExtractor::default();
        self.books.iter().flat_map(move |book| {
            book.chapters.iter().flat_map(move |chapter| {
                extractor.extract(&chapter.content).map(move |text| DailyQuote {
                    text,
                    author: book.author.clone(),
                    book_title: book.title.clone(),
                    book_id: book.id.clone(),
                    chapter_id: chapter.id,
                })
            })
        })
    }

    /// The quote for a given date, cycling through candidates by day of year
    pub fn daily_quote(&self, date: NaiveDate) -> Option<DailyQuote> {
        let candidates: Vec<_> = self.daily_candidates().collect();
        if candidates.is_empty() {
            return None;
        }
        let index = date.ordinal() as usize % candidates.len();
        candidates.into_iter().nth(index)
    }
}
