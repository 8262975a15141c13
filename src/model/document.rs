//! Extracted document types.

use super::Page;
use serde::{Deserialize, Serialize};

/// The raw text of a PDF document, one entry per extracted page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// PDF version from the file header (e.g., "1.7")
    pub pdf_version: String,

    /// Total number of pages in the source file
    pub total_pages: u32,

    /// Extracted pages in page order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(pdf_version: impl Into<String>, total_pages: u32) -> Self {
        Self {
            pdf_version: pdf_version.into(),
            total_pages,
            pages: Vec::new(),
        }
    }

    /// Number of pages that were extracted.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&Page> {
        self.pages.iter().find(|page| page.number == number)
    }

    /// Append a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Check if the document has no extracted pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Full text: each page's text followed by a newline.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.pages.iter().map(|p| p.text.len() + 1).sum());
        for page in &self.pages {
            text.push_str(&page.text);
            text.push('\n');
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_new() {
        let doc = Document::new("1.7", 3);
        assert!(doc.is_empty());
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.total_pages, 3);
        assert_eq!(doc.text(), "");
    }

    #[test]
    fn test_text_concatenates_pages_in_order() {
        let mut doc = Document::new("1.4", 2);
        doc.add_page(Page::new(1, "first page"));
        doc.add_page(Page::new(2, "second page\n"));

        assert_eq!(doc.text(), "first page\nsecond page\n\n");
        assert_eq!(doc.get_page(2).map(|p| p.text.as_str()), Some("second page\n"));
        assert!(doc.get_page(0).is_none());
    }
}
