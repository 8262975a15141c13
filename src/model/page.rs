//! Page-level types.

use serde::{Deserialize, Serialize};

/// The text extracted from a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Raw text as returned by the PDF library
    pub text: String,
}

impl Page {
    /// Create a page from its number and text.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Create a page with no text (used when extraction is skipped).
    pub fn blank(number: u32) -> Self {
        Self::new(number, String::new())
    }

    /// Check if the page has no visible text.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}
