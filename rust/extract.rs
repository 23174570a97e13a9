use std::path::Path;

use tracing::{debug, info};

use crate::{
    backend::{BackendFactory, PdfBackend, select_backend},
    error::ExtractError,
};

pub const DEFAULT_DOCUMENT_PATH: &str =
    "assets/documents/Curriculum-Vitae/CV-Ahnaf_Tahmid_Arnab.pdf";

/// Concatenates the text of every page in document order, one `\n` after
/// each page. Fails on the first page error without returning partial text.
pub fn extract_text(backend: &dyn PdfBackend, path: &Path) -> Result<String, ExtractError> {
    let reader = backend.open(path)?;

    info!(
        backend = backend.name(),
        source = %path.display(),
        page_count = reader.page_count(),
        "opened document"
    );

    let mut text = String::new();
    for page in reader.into_pages() {
        let page = page?;
        let page_text = page.extract_text();
        debug!(
            page = page.number(),
            chars = page_text.chars().count(),
            "extracted page"
        );
        text.push_str(page_text);
        text.push('\n');
    }

    info!(chars = text.chars().count(), "extraction finished");
    Ok(text)
}

/// Picks the first available backend, then extracts `path` with it.
pub fn extract_document(
    candidates: &[BackendFactory],
    path: &Path,
) -> Result<String, ExtractError> {
    let backend = select_backend(candidates)?;
    extract_text(backend.as_ref(), path)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::backend::{Page, Pages, PdfReader};

    thread_local! {
        static OPENED: Cell<usize> = const { Cell::new(0) };
    }

    /// Pages are `Ok(text)` or `Err(message)`.
    struct FakeBackend(Vec<Result<&'static str, &'static str>>);

    struct FakeReader(Vec<Result<&'static str, &'static str>>);

    impl PdfBackend for FakeBackend {
        fn name(&self) -> &'static str {
            "fake"
        }

        fn open(&self, _path: &Path) -> Result<Box<dyn PdfReader>, ExtractError> {
            OPENED.with(|opened| opened.set(opened.get() + 1));
            Ok(Box::new(FakeReader(self.0.clone())))
        }
    }

    impl PdfReader for FakeReader {
        fn page_count(&self) -> usize {
            self.0.len()
        }

        fn into_pages(self: Box<Self>) -> Pages {
            Box::new(self.0.into_iter().zip(1u32..).map(|(page, number)| {
                page.map(|text| Page::new(number, text))
                    .map_err(|message| ExtractError::Page {
                        number,
                        message: message.into(),
                    })
            }))
        }
    }

    struct MissingFile;

    impl PdfBackend for MissingFile {
        fn name(&self) -> &'static str {
            "missing"
        }

        fn open(&self, path: &Path) -> Result<Box<dyn PdfReader>, ExtractError> {
            crate::backend::ensure_exists(path)?;
            unreachable!("test path must not exist")
        }
    }

    fn doc() -> &'static Path {
        Path::new(DEFAULT_DOCUMENT_PATH)
    }

    fn fake_cv() -> Option<Box<dyn PdfBackend>> {
        Some(Box::new(FakeBackend(vec![Ok("Profile"), Ok("Skills")])))
    }

    fn unavailable() -> Option<Box<dyn PdfBackend>> {
        None
    }

    #[test]
    fn every_page_gets_one_trailing_newline_in_order() {
        let backend = FakeBackend(vec![Ok("Education"), Ok(""), Ok("Projects\nRust")]);
        let text = extract_text(&backend, doc()).unwrap();
        assert_eq!(text, "Education\n\nProjects\nRust\n");
    }

    #[test]
    fn single_page_is_text_plus_newline() {
        let backend = FakeBackend(vec![Ok("Ahnaf")]);
        assert_eq!(extract_text(&backend, doc()).unwrap(), "Ahnaf\n");
    }

    #[test]
    fn page_order_is_never_sorted() {
        let backend = FakeBackend(vec![Ok("z"), Ok("a"), Ok("m")]);
        assert_eq!(extract_text(&backend, doc()).unwrap(), "z\na\nm\n");
    }

    #[test]
    fn document_without_pages_yields_empty_text() {
        let backend = FakeBackend(Vec::new());
        assert_eq!(extract_text(&backend, doc()).unwrap(), "");
    }

    #[test]
    fn page_failure_aborts_without_partial_text() {
        let backend = FakeBackend(vec![Ok("first"), Err("bad font"), Ok("third")]);
        let err = extract_text(&backend, doc()).unwrap_err();
        assert!(matches!(err, ExtractError::Page { number: 2, .. }));
    }

    #[test]
    fn open_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract_text(&MissingFile, &dir.path().join("cv.pdf")).unwrap_err();
        assert!(matches!(err, ExtractError::Open { .. }));
        assert!(!err.is_capability_unavailable());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let candidates: [BackendFactory; 1] = [fake_cv];
        let first = extract_document(&candidates, doc()).unwrap();
        let second = extract_document(&candidates, doc()).unwrap();
        assert_eq!(first, "Profile\nSkills\n");
        assert_eq!(first, second);
    }

    #[test]
    fn falls_back_to_second_candidate() {
        let candidates: [BackendFactory; 2] = [unavailable, fake_cv];
        assert_eq!(
            extract_document(&candidates, doc()).unwrap(),
            "Profile\nSkills\n"
        );
    }

    #[test]
    fn no_backend_never_opens_the_document() {
        OPENED.with(|opened| opened.set(0));
        let candidates: [BackendFactory; 2] = [unavailable, unavailable];

        let err = extract_document(&candidates, doc()).unwrap_err();

        assert!(err.is_capability_unavailable());
        assert_eq!(err.to_string(), "No PDF library found");
        assert_eq!(OPENED.with(Cell::get), 0);
    }
}
