//! Language-specific marker words.
//!
//! Footer patterns and section keywords depend on the language of the
//! source document. Chinese is the default.

/// Source-document language used for footer and heading heuristics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    /// Simplified Chinese ("第 X 页 共 Y 页", 摘要, 引言, ...)
    #[default]
    Chinese,
    /// English ("Page X of Y", Abstract, Introduction, ...)
    English,
    /// Both of the above
    All,
}

const CHINESE_FOOTERS: &[&str] = &[r"(?s)第\s*\d+\s*页.*?共\s*\d+\s*页"];

const ENGLISH_FOOTERS: &[&str] = &[r"(?i)\bpage\s*\d+\s*of\s*\d+\b"];

const CHINESE_KEYWORDS: &[&str] = &[
    "摘要",
    "关键词",
    "引言",
    "方法",
    "结果",
    "讨论",
    "结论",
    "参考文献",
];

const ENGLISH_KEYWORDS: &[&str] = &[
    "abstract",
    "keywords",
    "introduction",
    "methods",
    "results",
    "discussion",
    "conclusion",
    "references",
];

impl Locale {
    /// Regular expressions matching "page X of Y" style footers.
    pub fn footer_patterns(self) -> Vec<&'static str> {
        match self {
            Locale::Chinese => CHINESE_FOOTERS.to_vec(),
            Locale::English => ENGLISH_FOOTERS.to_vec(),
            Locale::All => [CHINESE_FOOTERS, ENGLISH_FOOTERS].concat(),
        }
    }

    /// Section keywords that promote a short line to a heading.
    ///
    /// English keywords are lowercase; matching is case-insensitive.
    pub fn section_keywords(self) -> Vec<&'static str> {
        match self {
            Locale::Chinese => CHINESE_KEYWORDS.to_vec(),
            Locale::English => ENGLISH_KEYWORDS.to_vec(),
            Locale::All => [CHINESE_KEYWORDS, ENGLISH_KEYWORDS].concat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_chinese() {
        assert_eq!(Locale::default(), Locale::Chinese);
        assert!(Locale::default().section_keywords().contains(&"参考文献"));
    }

    #[test]
    fn test_all_combines_both() {
        let keywords = Locale::All.section_keywords();
        assert_eq!(
            keywords.len(),
            CHINESE_KEYWORDS.len() + ENGLISH_KEYWORDS.len()
        );
        assert_eq!(Locale::All.footer_patterns().len(), 2);
    }
}
