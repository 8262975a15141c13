//! # pdfmd
//!
//! Converts the extracted text of a PDF into heuristically structured
//! Markdown.
//!
//! The pipeline has three stages:
//!
//! 1. **Extraction** reads each page's text with `lopdf`.
//! 2. **Cleaning** strips "page X of Y" footers and trailing page numbers,
//!    then collapses whitespace.
//! 3. **Formatting** groups blank-line separated runs into paragraphs and
//!    promotes short lines ending in a colon or mentioning a section keyword
//!    (abstract, introduction, methods, ...) to headings.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn main() -> pdfmd::Result<()> {
//!     // Writes paper.md next to paper.pdf
//!     let report = pdfmd::convert_file(Path::new("paper.pdf"), None)?;
//!     println!("{} pages, {} characters", report.pages, report.chars);
//!     Ok(())
//! }
//! ```
//!
//! The cleaning and formatting stages are plain functions over strings:
//!
//! ```
//! let cleaned = pdfmd::clean_text("Results:\n\n第 1 页 共 3 页\n");
//! assert_eq!(cleaned, "Results:");
//! assert_eq!(pdfmd::format_markdown(&cleaned, None), "## Results:\n");
//! ```

pub mod clean;
pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod locale;
pub mod markdown;
pub mod model;

pub use clean::{clean_text, Cleaner, CleanupOptions};
pub use convert::{
    convert_file, default_output_path, title_from_path, ConversionReport, ConvertOptions,
    Converter, Stage, TitleMode,
};
pub use error::{Error, Result};
pub use extract::{ErrorMode, ExtractOptions, PageSelection, PdfExtractor};
pub use locale::Locale;
pub use markdown::{format_markdown, is_heading, HeadingRules, MarkdownFormatter};
pub use model::{Document, MarkdownDocument, MarkdownLine, Page};

use std::path::Path;

/// Extract the raw text of every page of a PDF file.
///
/// # Example
///
/// ```no_run
/// let doc = pdfmd::extract_file("paper.pdf").unwrap();
/// println!("{} pages", doc.page_count());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    PdfExtractor::open(path, ExtractOptions::default())?.extract()
}
