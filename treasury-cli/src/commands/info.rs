//! Info command implementation

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use treasury_core::Catalog;

/// Per-book summary output
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BookInfo {
    id: String,
    title: String,
    author: String,
    year: i32,
    topics: Vec<String>,
    chapters: usize,
    characters: usize,
}

#[derive(Serialize)]
struct CatalogInfo {
    books: Vec<BookInfo>,
    plans: usize,
    topics: Vec<String>,
}

/// Display a summary of a catalog file
pub fn info(catalog_file: &str, json: bool) -> Result<()> {
    let catalog = Catalog::load(Path::new(catalog_file))
        .with_context(|| format!("Failed to load catalog: {}", catalog_file))?;

    let info = CatalogInfo {
        books: catalog
            .books
            .iter()
            .map(|book| BookInfo {
                id: book.id.clone(),
                title: book.title.clone(),
                author: book.author.clone(),
                year: book.year,
                topics: book.topics.clone(),
                chapters: book.chapters.len(),
                characters: book.content_len(),
            })
            .collect(),
        plans: catalog.plans.len(),
        topics: catalog.topics().into_iter().map(str::to_string).collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    for book in &info.books {
        println!("{} ({})", book.title, book.id);
        println!("  Author:   {} ({})", book.author, book.year);
        if !book.topics.is_empty() {
            println!("  Topics:   {}", book.topics.join(", "));
        }
        println!("  Chapters: {}", book.chapters);
        println!("  Length:   {} chars", book.characters);
    }
    println!();
    println!("Books:  {}", info.books.len());
    println!("Plans:  {}", info.plans);
    println!("Topics: {}", info.topics.join(", "));

    Ok(())
}
