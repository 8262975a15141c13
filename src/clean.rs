//! Boilerplate removal and whitespace normalization for extracted text.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::locale::Locale;

/// Options for text cleanup.
#[derive(Debug, Clone)]
pub struct CleanupOptions {
    /// Normalize Unicode to NFC form
    pub normalize_unicode: bool,

    /// Remove "page X of Y" footers
    pub remove_footers: bool,

    /// Remove digit runs at the end of each line
    pub remove_page_numbers: bool,

    /// Keep line structure: collapse only spaces and tabs, and runs of blank
    /// lines down to one. When false every whitespace run becomes one space.
    pub preserve_line_breaks: bool,

    /// Language of the built-in footer patterns
    pub locale: Locale,

    /// Additional footer regexes, applied with the built-in ones
    pub extra_footer_patterns: Vec<String>,
}

impl CleanupOptions {
    /// Create new cleanup options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the locale for built-in footer patterns.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Enable or disable line break preservation.
    pub fn with_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Add a footer regex.
    pub fn with_footer_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.extra_footer_patterns.push(pattern.into());
        self
    }
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            remove_footers: true,
            remove_page_numbers: true,
            preserve_line_breaks: false,
            locale: Locale::default(),
            extra_footer_patterns: Vec::new(),
        }
    }
}

/// Compiled cleanup pipeline.
///
/// Cleaning is idempotent: removal passes repeat until nothing more matches,
/// so a second run over the output finds nothing to strip.
///
/// With `remove_page_numbers` on, this means every number at the end of a
/// line is removed, not only the last one: `"Scores by year 2019 2020 2021"`
/// cleans to `"Scores by year"`. Disable `remove_page_numbers` for text where
/// lines legitimately end in numbers.
#[derive(Debug, Clone)]
pub struct Cleaner {
    options: CleanupOptions,
    footer_regexes: Vec<Regex>,
    page_number_regex: Regex,
    whitespace_regex: Regex,
    horizontal_space_regex: Regex,
    blank_lines_regex: Regex,
}

impl Cleaner {
    /// Compile a cleaner. Fails only if an extra footer pattern is invalid.
    pub fn new(options: CleanupOptions) -> Result<Self> {
        let mut footer_regexes: Vec<Regex> = options
            .locale
            .footer_patterns()
            .into_iter()
            .map(builtin)
            .collect();
        for pattern in &options.extra_footer_patterns {
            footer_regexes.push(Regex::new(pattern)?);
        }

        Ok(Self {
            options,
            footer_regexes,
            page_number_regex: builtin(r"(?m)\d+[^\S\n]*$"),
            whitespace_regex: builtin(r"\s+"),
            horizontal_space_regex: builtin(r"[^\S\n]+"),
            blank_lines_regex: builtin(r"\n{3,}"),
        })
    }

    /// Clean raw extracted text.
    pub fn clean(&self, text: &str) -> String {
        let mut result: String = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };

        // Removing one pattern can expose another (a footer followed by a
        // page number on the same line), so strip until stable.
        loop {
            let stripped = self.strip_boilerplate(&result);
            if stripped == result {
                break;
            }
            result = stripped;
        }

        let result = if self.options.preserve_line_breaks {
            self.collapse_within_lines(&result)
        } else {
            self.whitespace_regex.replace_all(&result, " ").into_owned()
        };

        result.trim().to_string()
    }

    fn strip_boilerplate(&self, text: &str) -> String {
        let mut result = text.to_string();

        if self.options.remove_footers {
            for regex in &self.footer_regexes {
                result = regex.replace_all(&result, "").into_owned();
            }
        }

        if self.options.remove_page_numbers {
            result = self.page_number_regex.replace_all(&result, "").into_owned();
        }

        result
    }

    fn collapse_within_lines(&self, text: &str) -> String {
        let joined = text
            .lines()
            .map(|line| self.horizontal_space_regex.replace_all(line.trim(), " "))
            .collect::<Vec<_>>()
            .join("\n");
        self.blank_lines_regex
            .replace_all(&joined, "\n\n")
            .into_owned()
    }
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(CleanupOptions::default()).expect("default options have no user patterns")
    }
}

/// Clean text with the default options.
pub fn clean_text(text: &str) -> String {
    Cleaner::default().clean(text)
}

fn builtin(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in pattern is valid")
}
