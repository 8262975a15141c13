//! Page-by-page text extraction using lopdf.

use std::path::Path;

use lopdf::Document as LopdfDocument;

use crate::detect::{pdf_version, pdf_version_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, Page};

use super::options::{ErrorMode, ExtractOptions};

/// Reads the text of a PDF page by page.
pub struct PdfExtractor {
    doc: LopdfDocument,
    version: String,
    options: ExtractOptions,
}

impl PdfExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();

        // Reject non-PDF input before handing it to lopdf
        let version = pdf_version_from_path(path)?;

        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::IO(source) => Error::Read {
                path: path.to_path_buf(),
                source,
            },
            other => Error::from(other),
        })?;

        log::debug!("Loaded {} (PDF {})", path.display(), version);
        Ok(Self {
            doc,
            version,
            options,
        })
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8], options: ExtractOptions) -> Result<Self> {
        let version = pdf_version(data)?;
        let doc = LopdfDocument::load_mem(data)?;
        Ok(Self {
            doc,
            version,
            options,
        })
    }

    /// Extract the selected pages in page order.
    pub fn extract(&self) -> Result<Document> {
        if self.doc.is_encrypted() {
            log::warn!("Document is encrypted; page text may be unreadable");
        }

        let page_ids = self.doc.get_pages();
        let mut document = Document::new(self.version.clone(), page_ids.len() as u32);

        // get_pages is a BTreeMap keyed by page number, so iteration is ordered
        for page_num in page_ids.keys().copied() {
            if !self.options.pages.includes(page_num) {
                continue;
            }

            match self.extract_page_text(page_num) {
                Ok(text) => document.add_page(Page::new(page_num, text)),
                Err(e) => {
                    if self.options.error_mode == ErrorMode::Strict {
                        return Err(e);
                    }
                    log::warn!("Failed to extract text from page {}: {}", page_num, e);
                    document.add_page(Page::blank(page_num));
                }
            }
        }

        log::debug!(
            "Extracted {} of {} pages ({} without text)",
            document.page_count(),
            document.total_pages,
            document.pages.iter().filter(|page| page.is_empty()).count()
        );
        Ok(document)
    }

    fn extract_page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::Extract(format!("Page {}: {}", page_num, e)))
    }
}
