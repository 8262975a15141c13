//! Data types flowing through the conversion pipeline.
//!
//! A [`Document`] holds the raw page texts read from the PDF; the
//! formatter turns cleaned text into a [`MarkdownDocument`].

mod document;
mod markdown;
mod page;

pub use document::Document;
pub use markdown::{MarkdownDocument, MarkdownLine};
pub use page::Page;
