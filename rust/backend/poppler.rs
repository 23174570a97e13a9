use std::{
    path::Path,
    process::{Command, Stdio},
};

use tracing::debug;

use super::{BufferedReader, PdfBackend, PdfReader, ensure_exists};
use crate::error::ExtractError;

const PROGRAM: &str = "pdftotext";
const PAGE_BREAK: char = '\x0c';

/// Shells out to poppler's `pdftotext`.
pub struct Pdftotext;

pub fn probe() -> Option<Box<dyn PdfBackend>> {
    let status = Command::new(PROGRAM)
        .arg("-v")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(_) => Some(Box::new(Pdftotext)),
        Err(err) => {
            debug!(error = %err, "pdftotext is not installed");
            None
        }
    }
}

impl PdfBackend for Pdftotext {
    fn name(&self) -> &'static str {
        PROGRAM
    }

    fn open(&self, path: &Path) -> Result<Box<dyn PdfReader>, ExtractError> {
        ensure_exists(path)?;

        let backend_error = |message: String| ExtractError::Backend {
            backend: PROGRAM,
            path: path.to_path_buf(),
            message,
        };

        // Layout mode keeps multi-column CV sections side by side instead of
        // interleaving their lines.
        let output = Command::new(PROGRAM)
            .arg("-layout")
            .arg("-enc")
            .arg("UTF-8")
            .arg(path)
            .arg("-")
            .output()
            .map_err(|e| backend_error(format!("failed to spawn pdftotext: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(backend_error(format!(
                "pdftotext exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|_| backend_error("pdftotext output was not valid UTF-8".into()))?;

        Ok(Box::new(BufferedReader::new(split_pages(&stdout))))
    }
}

/// Poppler terminates every page with a form feed, so the piece after the
/// last one is not a page.
fn split_pages(output: &str) -> Vec<String> {
    let mut pages: Vec<String> = output.split(PAGE_BREAK).map(str::to_owned).collect();
    if output.ends_with(PAGE_BREAK) || output.is_empty() {
        pages.pop();
    }
    pages
}
