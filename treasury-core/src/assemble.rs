//! Book assembly: metadata plus segmented chapters

use crate::text::SourceFormat;
use crate::types::{BookMetadata, BookRecord, Chapter};

/// Combine bibliographic metadata with one segmentation result.
///
/// No validation happens here; an empty chapter list produces a record the
/// reader will show as having no content.
pub fn assemble(metadata: BookMetadata, chapters: Vec<Chapter>) -> BookRecord {
    if chapters.is_empty() {
        tracing::warn!("Book '{}' has no chapters and will not be readable", metadata.id);
    }

    let BookMetadata {
        id,
        title,
        author,
        year,
        description,
        topics,
        source_url,
        public_domain,
    } = metadata;

    BookRecord {
        id,
        title,
        author,
        year,
        description,
        topics,
        chapters,
        source_url,
        public_domain,
    }
}

/// Segment a document and assemble it in one step
pub fn assemble_from_text(
    metadata: BookMetadata,
    format: SourceFormat,
    document: &str,
) -> BookRecord {
    let chapters = format.segment(document);
    tracing::info!(
        "Parsed '{}' as {}: {} chapters",
        metadata.title,
        format,
        chapters.len()
    );
    assemble(metadata, chapters)
}
