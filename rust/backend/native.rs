use std::path::Path;

use gag::Gag;

use super::{BufferedReader, PdfBackend, PdfReader, ensure_exists};
use crate::error::ExtractError;

const NAME: &str = "pdf-extract";

/// In-process parser from the `pdf-extract` crate.
pub struct PdfExtract;

pub fn probe() -> Option<Box<dyn PdfBackend>> {
    Some(Box::new(PdfExtract))
}

impl PdfBackend for PdfExtract {
    fn name(&self) -> &'static str {
        NAME
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PdfReader>, ExtractError> {
        ensure_exists(path)?;

        let pages = {
            // Suppress noisy stdout/stderr from the pdf-extract parser.
            let _gag_out = Gag::stdout().ok();
            let _gag_err = Gag::stderr().ok();
            ::pdf_extract::extract_text_by_pages(path)
        }
        .map_err(|e| ExtractError::Backend {
            backend: NAME,
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Ok(Box::new(BufferedReader::new(pages)))
    }
}
