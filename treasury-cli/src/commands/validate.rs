//! Validate command implementation

use anyhow::{bail, Context, Result};
use std::path::Path;
use treasury_core::Catalog;

/// Validate a catalog file
pub fn validate(catalog_file: &str, strict: bool) -> Result<()> {
    let catalog = Catalog::load(Path::new(catalog_file))
        .with_context(|| format!("Failed to load catalog: {}", catalog_file))?;

    let problems = catalog.validate();
    let errors = problems
        .iter()
        .filter(|p| strict || !p.is_warning())
        .count();

    for problem in &problems {
        let level = if strict || !problem.is_warning() {
            "error"
        } else {
            "warning"
        };
        println!("{}: {}", level, problem);
    }

    if errors > 0 {
        bail!("Validation failed for {}: {} errors", catalog_file, errors);
    }

    println!(
        "Valid catalog: {} books, {} plans",
        catalog.books.len(),
        catalog.plans.len()
    );
    Ok(())
}
