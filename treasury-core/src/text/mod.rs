//! Text processing: noise stripping, chapter segmentation, quote extraction

mod quotes;
mod segment;
mod strip;

pub use quotes::{extract_quotes, QuoteExtractor, Quotes, DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
pub use segment::{segment, SegmentProfile, SourceFormat};
pub use strip::strip_noise;
