//! PDF text extraction

pub mod extractor;

pub use extractor::{PdfTextExtractor, TextExtractor, join_segments, split_segments};
