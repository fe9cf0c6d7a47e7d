//! Quotes command implementation

use anyhow::{bail, Context, Result};
use treasury_core::QuoteExtractor;

/// Print every quote in a text file that falls inside the length band
pub fn quotes(input: &str, min: usize, max: usize) -> Result<()> {
    if min > max {
        bail!("--min ({}) must not exceed --max ({})", min, max);
    }

    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read input file: {}", input))?;

    let mut count = 0;
    for quote in QuoteExtractor::new(min, max).extract(&text) {
        println!("{}", quote);
        count += 1;
    }

    tracing::info!("Extracted {} quotes from {}", count, input);
    Ok(())
}
