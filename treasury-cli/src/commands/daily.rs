//! Daily quote command implementation

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::Path;
use treasury_core::store::{FileStore, UserData};
use treasury_core::Catalog;

/// Print the quote of the day, optionally saving it to the user-data store
pub async fn daily(catalog_file: &str, date: Option<NaiveDate>, save: Option<&str>) -> Result<()> {
    let catalog = Catalog::load(Path::new(catalog_file))
        .with_context(|| format!("Failed to load catalog: {}", catalog_file))?;

    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let Some(quote) = catalog.daily_quote(date) else {
        println!("No quotes available in {}", catalog_file);
        return Ok(());
    };

    println!("\"{}\"", quote.text);
    println!("  {}, {} (chapter {})", quote.author, quote.book_title, quote.chapter_id);

    if let Some(dir) = save {
        let user_data = UserData::new(FileStore::new(dir));
        let saved = user_data
            .save_quote(quote.to_new_quote(vec!["daily".to_string()]))
            .await
            .with_context(|| format!("Failed to save quote to {}", dir))?;
        tracing::info!("Saved quote {} for {}", saved.id, date);
        println!("Saved as {}", saved.id);
    }

    Ok(())
}
