//! Build manifest: which source texts make up the catalog

use super::Catalog;
use crate::assemble::assemble_from_text;
use crate::error::{CatalogError, Result};
use crate::text::SourceFormat;
use crate::types::{BookMetadata, BookRecord, ReadingPlan};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One book to build: its metadata, where its text lives, and how to parse it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSource {
    #[serde(flatten)]
    pub metadata: BookMetadata,

    /// Path to the source text, relative to the manifest
    pub source: PathBuf,

    pub format: SourceFormat,
}

impl BookSource {
    /// Read the source text and assemble the book
    pub fn build(&self, base_dir: &Path) -> std::result::Result<BookRecord, CatalogError> {
        let path = base_dir.join(&self.source);
        let text =
            std::fs::read_to_string(&path).map_err(|e| CatalogError::SourceUnavailable {
                book_id: self.metadata.id.clone(),
                reason: format!("{}: {}", path.display(), e),
            })?;

        Ok(assemble_from_text(self.metadata.clone(), self.format, &text))
    }
}

/// The full list of books and plans to generate a catalog from
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Manifest {
    pub books: Vec<BookSource>,

    #[serde(default)]
    pub plans: Vec<ReadingPlan>,
}

impl Manifest {
    /// Load a manifest from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Build every book in parallel.
    ///
    /// Books whose source cannot be read are left out and reported. The
    /// catalog keeps manifest order regardless of completion order.
    pub fn build(&self, base_dir: &Path) -> (Catalog, Vec<CatalogError>) {
        self.build_with(base_dir, |_, _| {})
    }

    /// Like [`Manifest::build`], calling `on_done` as each book finishes
    pub fn build_with<F>(&self, base_dir: &Path, on_done: F) -> (Catalog, Vec<CatalogError>)
    where
        F: Fn(&BookSource, &std::result::Result<BookRecord, CatalogError>) + Sync,
    {
        let results: Vec<_> = self
            .books
            .par_iter()
            .map(|source| {
                let result = source.build(base_dir);
                on_done(source, &result);
                result
            })
            .collect();

        let mut books = Vec::with_capacity(results.len());
        let mut errors = Vec::new();
        for result in results {
            match result {
                Ok(book) => books.push(book),
                Err(e) => {
                    tracing::error!("{}", e);
                    errors.push(e);
                }
            }
        }

        (Catalog::new(books, self.plans.clone()), errors)
    }
}
