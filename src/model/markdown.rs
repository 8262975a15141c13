//! Markdown output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of generated Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkdownLine {
    /// ATX heading (`#` repeated `level` times)
    Heading { level: u8, text: String },
    /// A paragraph joined onto a single line
    Paragraph(String),
    /// Blank separator
    Blank,
}

impl MarkdownLine {
    /// Create a heading line.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        MarkdownLine::Heading {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }
}

impl fmt::Display for MarkdownLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkdownLine::Heading { level, text } => {
                write!(f, "{} {}", "#".repeat(*level as usize), text)
            }
            MarkdownLine::Paragraph(text) => f.write_str(text),
            MarkdownLine::Blank => Ok(()),
        }
    }
}

/// An ordered sequence of Markdown lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownDocument {
    pub lines: Vec<MarkdownLine>,
}

impl MarkdownDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: MarkdownLine) {
        self.lines.push(line);
    }

    /// Number of heading lines.
    pub fn heading_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, MarkdownLine::Heading { .. }))
            .count()
    }

    /// Number of paragraph lines.
    pub fn paragraph_count(&self) -> usize {
        self.lines
            .iter()
            .filter(|line| matches!(line, MarkdownLine::Paragraph(_)))
            .count()
    }

    /// Render all lines joined with `\n`.
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_display() {
        assert_eq!(MarkdownLine::heading(2, "Methods").to_string(), "## Methods");
        assert_eq!(MarkdownLine::Paragraph("Body".into()).to_string(), "Body");
        assert_eq!(MarkdownLine::Blank.to_string(), "");
    }

    #[test]
    fn test_heading_level_is_clamped() {
        assert_eq!(
            MarkdownLine::heading(9, "Deep"),
            MarkdownLine::Heading {
                level: 6,
                text: "Deep".into()
            }
        );
    }

    #[test]
    fn test_render_and_counts() {
        let mut doc = MarkdownDocument::new();
        doc.push(MarkdownLine::heading(1, "Title"));
        doc.push(MarkdownLine::Blank);
        doc.push(MarkdownLine::Paragraph("Text".into()));

        assert_eq!(doc.render(), "# Title\n\nText");
        assert_eq!(doc.heading_count(), 1);
        assert_eq!(doc.paragraph_count(), 1);
    }
}
