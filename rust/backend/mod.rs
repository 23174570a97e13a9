use std::path::Path;

use tracing::debug;

use crate::error::ExtractError;

#[cfg(feature = "pdf-extract")]
pub mod native;
pub mod poppler;

pub type Pages = Box<dyn Iterator<Item = Result<Page, ExtractError>>>;

/// Builds a backend if its PDF library is usable in this process.
pub type BackendFactory = fn() -> Option<Box<dyn PdfBackend>>;

pub trait PdfBackend {
    fn name(&self) -> &'static str;

    fn open(&self, path: &Path) -> Result<Box<dyn PdfReader>, ExtractError>;
}

pub trait PdfReader {
    fn page_count(&self) -> usize;

    /// Consumes the reader; pages come back in document order, once.
    fn into_pages(self: Box<Self>) -> Pages;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    number: u32,
    text: String,
}

impl Page {
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn extract_text(&self) -> &str {
        &self.text
    }
}

/// Reader over page texts that a backend produced in one pass.
pub(crate) struct BufferedReader {
    pages: Vec<String>,
}

impl BufferedReader {
    pub(crate) fn new(pages: Vec<String>) -> Self {
        Self { pages }
    }
}

impl PdfReader for BufferedReader {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn into_pages(self: Box<Self>) -> Pages {
        Box::new(
            self.pages
                .into_iter()
                .zip(1u32..)
                .map(|(text, number)| Ok(Page::new(number, text))),
        )
    }
}

/// Candidates in priority order: poppler first, then the in-process parser.
pub fn default_backends() -> Vec<BackendFactory> {
    #[cfg(feature = "pdf-extract")]
    let backends = vec![poppler::probe as BackendFactory, native::probe];
    #[cfg(not(feature = "pdf-extract"))]
    let backends = vec![poppler::probe as BackendFactory];
    backends
}

pub fn select_backend(
    candidates: &[BackendFactory],
) -> Result<Box<dyn PdfBackend>, ExtractError> {
    for (index, factory) in candidates.iter().enumerate() {
        match factory() {
            Some(backend) => {
                debug!(
                    backend = backend.name(),
                    candidate = index,
                    "selected PDF backend"
                );
                return Ok(backend);
            }
            None => debug!(candidate = index, "PDF backend unavailable, trying next"),
        }
    }
    Err(ExtractError::NoBackend)
}

pub(crate) fn ensure_exists(path: &Path) -> Result<(), ExtractError> {
    std::fs::metadata(path)
        .map(|_| ())
        .map_err(|source| ExtractError::Open {
            path: path.to_path_buf(),
            source,
        })
}
