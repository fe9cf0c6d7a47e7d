//! Parse command implementation

use anyhow::{Context, Result};
use std::path::Path;
use treasury_core::SourceFormat;

/// Segment one source text and print the chapters found
pub fn parse(input: &str, format: SourceFormat, json: bool) -> Result<()> {
    let input_path = Path::new(input);
    let text = std::fs::read_to_string(input_path)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let chapters = format.segment(&text);
    tracing::info!("Parsed {} as {}: {} chapters", input, format, chapters.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&chapters)?);
        return Ok(());
    }

    if chapters.is_empty() {
        println!(
            "No chapters found (threshold {} characters)",
            format.profile().min_content_len()
        );
        return Ok(());
    }

    for chapter in &chapters {
        println!("{:>3}. {} ({} chars)", chapter.id, chapter.title, chapter.len());
    }

    Ok(())
}
