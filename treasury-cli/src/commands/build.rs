//! Catalog build command implementation

use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use treasury_core::Manifest;

/// Build a catalog file from a manifest, parsing sources in parallel
pub fn build(manifest_file: &str, output: &str, jobs: usize, strict: bool) -> Result<()> {
    let manifest_path = Path::new(manifest_file);
    let output_path = Path::new(output);

    let manifest = Manifest::load(manifest_path)
        .with_context(|| format!("Failed to load manifest: {}", manifest_file))?;

    if manifest.books.is_empty() {
        bail!("Manifest {} lists no books", manifest_file);
    }

    println!("Found {} books to build", manifest.books.len());

    // Sources are relative to the manifest
    let base_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    let pb = ProgressBar::new(manifest.books.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
            .context("Invalid progress bar template")?
            .progress_chars("##-"),
    );

    // Configure thread pool
    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .ok(); // Ignore if already configured

    let chapter_count = AtomicUsize::new(0);
    let (catalog, source_errors) = manifest.build_with(base_dir, |source, result| {
        if let Ok(book) = result {
            chapter_count.fetch_add(book.chapters.len(), Ordering::Relaxed);
        }
        pb.set_message(source.metadata.id.clone());
        pb.inc(1);
    });
    pb.finish_with_message("done");

    let problems = catalog.validate();
    let mut failures = source_errors.len();
    for problem in &problems {
        if problem.is_warning() && !strict {
            tracing::warn!("{}", problem);
        } else {
            tracing::error!("{}", problem);
            failures += 1;
        }
    }

    println!("\nCatalog build complete:");
    println!("  Books:    {}", catalog.books.len());
    println!("  Chapters: {}", chapter_count.load(Ordering::Relaxed));
    println!("  Plans:    {}", catalog.plans.len());
    println!("  Problems: {}", problems.len() + source_errors.len());

    if failures > 0 {
        bail!("Catalog build failed with {} errors", failures);
    }

    catalog
        .save(output_path)
        .with_context(|| format!("Failed to write catalog: {}", output))?;

    println!("Wrote {}", output);
    Ok(())
}
