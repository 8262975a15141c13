//! Paragraph segmentation and heading promotion.
//!
//! The formatter walks cleaned text line by line. Blank lines end the
//! current paragraph; short lines that end in a colon or mention a section
//! keyword become second-level headings; everything else accumulates into
//! the current paragraph.
//!
//! # Example
//!
//! ```
//! use pdfmd::markdown::format_markdown;
//!
//! let md = format_markdown("Methods:\nWe measured things.\nCarefully.", Some("Report"));
//! assert_eq!(md, "# Report\n\n## Methods:\n\nWe measured things. Carefully.");
//! ```

use crate::locale::Locale;
use crate::model::{MarkdownDocument, MarkdownLine};

/// Default length gate for heading promotion, in characters.
pub const DEFAULT_MAX_HEADING_LEN: usize = 100;

/// Configuration for heading promotion.
#[derive(Debug, Clone)]
pub struct HeadingRules {
    /// A heading must be strictly shorter than this many characters
    pub max_len: usize,

    /// Section keywords, lowercase; a line containing any of them qualifies
    pub keywords: Vec<String>,

    /// Markdown level of promoted headings
    pub level: u8,
}

impl HeadingRules {
    /// Rules for the given locale with default limits.
    pub fn for_locale(locale: Locale) -> Self {
        Self {
            max_len: DEFAULT_MAX_HEADING_LEN,
            keywords: locale
                .section_keywords()
                .into_iter()
                .map(|k| k.to_lowercase())
                .collect(),
            level: 2,
        }
    }

    /// Set the length gate.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Add a section keyword.
    pub fn with_keyword(mut self, keyword: impl AsRef<str>) -> Self {
        self.keywords.push(keyword.as_ref().to_lowercase());
        self
    }
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Whether a single line should be rendered as a heading.
///
/// The trimmed line must be shorter than `rules.max_len` characters, and
/// must either end with a half-width or full-width colon or contain one of
/// the section keywords (case-insensitive).
pub fn is_heading(line: &str, rules: &HeadingRules) -> bool {
    let line = line.trim();
    if line.is_empty() || line.chars().count() >= rules.max_len {
        return false;
    }

    if line.ends_with(':') || line.ends_with('：') {
        return true;
    }

    let lower = line.to_lowercase();
    rules.keywords.iter().any(|keyword| lower.contains(keyword.as_str()))
}

/// Turns cleaned text into a [`MarkdownDocument`].
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter {
    rules: HeadingRules,
}

impl MarkdownFormatter {
    /// Create a formatter with the given heading rules.
    pub fn new(rules: HeadingRules) -> Self {
        Self { rules }
    }

    /// Format text, optionally prefixed by a top-level title.
    pub fn format(&self, text: &str, title: Option<&str>) -> MarkdownDocument {
        let mut doc = MarkdownDocument::new();

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            doc.push(MarkdownLine::heading(1, title));
            doc.push(MarkdownLine::Blank);
        }

        let mut paragraph: Vec<&str> = Vec::new();

        for line in text.split('\n') {
            let line = line.trim();

            if line.is_empty() {
                if flush(&mut doc, &mut paragraph) {
                    doc.push(MarkdownLine::Blank);
                }
                continue;
            }

            if is_heading(line, &self.rules) {
                if flush(&mut doc, &mut paragraph) {
                    doc.push(MarkdownLine::Blank);
                }
                doc.push(MarkdownLine::heading(self.rules.level, line));
                doc.push(MarkdownLine::Blank);
            } else {
                paragraph.push(line);
            }
        }

        flush(&mut doc, &mut paragraph);
        doc
    }
}

/// Emit the accumulated fragments as one paragraph line. Returns false if
/// there was nothing to flush.
fn flush(doc: &mut MarkdownDocument, paragraph: &mut Vec<&str>) -> bool {
    if paragraph.is_empty() {
        return false;
    }
    doc.push(MarkdownLine::Paragraph(paragraph.join(" ")));
    paragraph.clear();
    true
}

/// Format text with the default rules and render it to a string.
pub fn format_markdown(text: &str, title: Option<&str>) -> String {
    MarkdownFormatter::default().format(text, title).render()
}
