//! End-to-end conversion: extract, clean, format, write.
//!
//! # Example
//!
//! ```no_run
//! use pdfmd::convert::{Converter, ConvertOptions};
//! use std::path::Path;
//!
//! fn main() -> pdfmd::Result<()> {
//!     let converter = Converter::new(ConvertOptions::default())?;
//!     let report = converter.convert(Path::new("paper.pdf"), None)?;
//!     println!("{} pages -> {}", report.pages, report.output.display());
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::clean::{Cleaner, CleanupOptions};
use crate::error::{Error, Result};
use crate::extract::{ExtractOptions, PdfExtractor};
use crate::locale::Locale;
use crate::markdown::{HeadingRules, MarkdownFormatter};
use crate::model::{Document, MarkdownDocument};

/// Where the top-level title comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TitleMode {
    /// Input file stem with underscores replaced by spaces
    #[default]
    FromFileName,
    /// A fixed title
    Custom(String),
    /// No title heading
    None,
}

impl TitleMode {
    /// Resolve the title for a given input path.
    pub fn resolve(&self, input: &Path) -> Option<String> {
        match self {
            TitleMode::FromFileName => Some(title_from_path(input)),
            TitleMode::Custom(title) => Some(title.clone()),
            TitleMode::None => None,
        }
    }
}

/// Options for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Extraction options
    pub extract: ExtractOptions,

    /// Cleanup options
    pub cleanup: CleanupOptions,

    /// Heading promotion rules
    pub headings: HeadingRules,

    /// Title source
    pub title: TitleMode,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the footer patterns and section keywords of `locale`.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.cleanup.locale = locale;
        self.headings = HeadingRules {
            keywords: HeadingRules::for_locale(locale).keywords,
            ..self.headings
        };
        self
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, options: CleanupOptions) -> Self {
        self.cleanup = options;
        self
    }

    /// Set heading rules.
    pub fn with_headings(mut self, rules: HeadingRules) -> Self {
        self.headings = rules;
        self
    }

    /// Set the title source.
    pub fn with_title(mut self, title: TitleMode) -> Self {
        self.title = title;
        self
    }
}

/// Pipeline stage, reported to progress callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Extracting,
    Cleaning,
    Formatting,
    Writing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Stage::Extracting => "Extracting text...",
            Stage::Cleaning => "Cleaning text...",
            Stage::Formatting => "Formatting Markdown...",
            Stage::Writing => "Writing output...",
        };
        f.write_str(label)
    }
}

/// Summary of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Input PDF path
    pub input: PathBuf,

    /// Markdown file written
    pub output: PathBuf,

    /// Total pages in the input file
    pub pages: u32,

    /// Pages whose text was extracted
    pub extracted_pages: u32,

    /// Length of the cleaned text in characters
    pub chars: usize,

    /// Heading lines emitted (including the title)
    pub headings: usize,

    /// Paragraph lines emitted
    pub paragraphs: usize,
}

/// Runs the extract → clean → format → write pipeline.
#[derive(Debug, Clone)]
pub struct Converter {
    options: ConvertOptions,
    cleaner: Cleaner,
    formatter: MarkdownFormatter,
}

impl Converter {
    /// Build a converter. Fails if a custom footer pattern is invalid.
    pub fn new(options: ConvertOptions) -> Result<Self> {
        let cleaner = Cleaner::new(options.cleanup.clone())?;
        let formatter = MarkdownFormatter::new(options.headings.clone());
        Ok(Self {
            options,
            cleaner,
            formatter,
        })
    }

    /// Convert `input` and write Markdown to `output` (or the default sibling
    /// `.md` path).
    pub fn convert(&self, input: &Path, output: Option<&Path>) -> Result<ConversionReport> {
        self.convert_with_progress(input, output, |_| {})
    }

    /// Like [`Converter::convert`], calling `progress` as each stage starts.
    pub fn convert_with_progress<F>(
        &self,
        input: &Path,
        output: Option<&Path>,
        mut progress: F,
    ) -> Result<ConversionReport>
    where
        F: FnMut(Stage),
    {
        if !input.exists() {
            return Err(Error::MissingInput(input.to_path_buf()));
        }

        let output = output
            .map(Path::to_path_buf)
            .unwrap_or_else(|| default_output_path(input));

        progress(Stage::Extracting);
        let document = PdfExtractor::open(input, self.options.extract.clone())?.extract()?;
        if document.is_empty() {
            log::warn!("No pages of {} matched the page selection", input.display());
        }

        progress(Stage::Cleaning);
        let cleaned = self.cleaner.clean(&document.text());
        log::debug!("Cleaned text: {} characters", cleaned.chars().count());

        progress(Stage::Formatting);
        let title = self.options.title.resolve(input);
        let markdown = self.formatter.format(&cleaned, title.as_deref());

        progress(Stage::Writing);
        fs::write(&output, markdown.render()).map_err(|source| Error::Write {
            path: output.clone(),
            source,
        })?;

        log::info!("Wrote {}", output.display());
        Ok(build_report(input, output, &document, &cleaned, &markdown))
    }

    /// Clean and format already-extracted text.
    pub fn format_text(&self, raw: &str, title: Option<&str>) -> MarkdownDocument {
        let cleaned = self.cleaner.clean(raw);
        self.formatter.format(&cleaned, title)
    }
}

fn build_report(
    input: &Path,
    output: PathBuf,
    document: &Document,
    cleaned: &str,
    markdown: &MarkdownDocument,
) -> ConversionReport {
    ConversionReport {
        input: input.to_path_buf(),
        output,
        pages: document.total_pages,
        extracted_pages: document.page_count(),
        chars: cleaned.chars().count(),
        headings: markdown.heading_count(),
        paragraphs: markdown.paragraph_count(),
    }
}

/// Convert with default options.
pub fn convert_file(input: &Path, output: Option<&Path>) -> Result<ConversionReport> {
    Converter::new(ConvertOptions::default())?.convert(input, output)
}

/// The input path with its extension replaced by `md`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("md")
}

/// Title derived from the file name: extension stripped, `_` → space.
pub fn title_from_path(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().replace('_', " "))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("report.pdf")),
            PathBuf::from("report.md")
        );
        assert_eq!(
            default_output_path(Path::new("docs/2024/paper.v2.pdf")),
            PathBuf::from("docs/2024/paper.v2.md")
        );
        assert_eq!(
            default_output_path(Path::new("no_extension")),
            PathBuf::from("no_extension.md")
        );
    }

    #[test]
    fn test_title_from_path() {
        assert_eq!(
            title_from_path(Path::new("dir/2_some_paper_title.pdf")),
            "2 some paper title"
        );
        assert_eq!(title_from_path(Path::new("plain.pdf")), "plain");
    }

    #[test]
    fn test_title_mode_resolve() {
        let input = Path::new("my_doc.pdf");
        assert_eq!(
            TitleMode::FromFileName.resolve(input).as_deref(),
            Some("my doc")
        );
        assert_eq!(
            TitleMode::Custom("Given".into()).resolve(input).as_deref(),
            Some("Given")
        );
        assert_eq!(TitleMode::None.resolve(input), None);
    }

    #[test]
    fn test_with_locale_keeps_length_gate() {
        let options = ConvertOptions::new()
            .with_headings(HeadingRules::default().with_max_len(40))
            .with_locale(Locale::English);

        assert_eq!(options.cleanup.locale, Locale::English);
        assert_eq!(options.headings.max_len, 40);
        assert!(options.headings.keywords.iter().any(|k| k == "abstract"));
    }

    #[test]
    fn test_invalid_footer_pattern_fails_construction() {
        let options =
            ConvertOptions::new().with_cleanup(CleanupOptions::new().with_footer_pattern("[z-a]"));
        assert!(matches!(
            Converter::new(options),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_format_text_collapsed() {
        // Default cleaning collapses newlines, so the whole text is one line
        let converter = Converter::new(ConvertOptions::default()).unwrap();
        let doc = converter.format_text("正文第一段。\n正文第二段。\n\n7", Some("Doc"));
        assert_eq!(doc.render(), "# Doc\n\n正文第一段。 正文第二段。");
    }

    #[test]
    fn test_format_text_line_preserving() {
        let options =
            ConvertOptions::new().with_cleanup(CleanupOptions::new().with_line_breaks(true));
        let converter = Converter::new(options).unwrap();
        let raw = "Title\n\n摘要：这是摘要内容\n\n正文第一段。\n正文第二段续写。\n\n3";

        let doc = converter.format_text(raw, Some("Doc"));
        let rendered = doc.render();
        let lines: Vec<&str> = rendered.split('\n').collect();

        assert_eq!(
            lines,
            vec![
                "# Doc",
                "",
                "Title",
                "",
                "## 摘要：这是摘要内容",
                "",
                "正文第一段。 正文第二段续写。",
            ]
        );
        assert_eq!(doc.paragraph_count(), 2);
        assert!(!lines.contains(&"3"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = ConversionReport {
            input: PathBuf::from("a.pdf"),
            output: PathBuf::from("a.md"),
            pages: 3,
            extracted_pages: 3,
            chars: 120,
            headings: 2,
            paragraphs: 4,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"pages\":3"));

        let back: ConversionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(Stage::Extracting.to_string(), "Extracting text...");
        assert_eq!(Stage::Writing.to_string(), "Writing output...");
    }
}
