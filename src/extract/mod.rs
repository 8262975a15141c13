//! PDF text extraction.

mod options;
mod pdf_extractor;

pub use options::{ErrorMode, ExtractOptions, PageSelection};
pub use pdf_extractor::PdfExtractor;
