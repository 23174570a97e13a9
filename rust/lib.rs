pub mod backend;
pub mod cli;
pub mod error;
pub mod extract;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

use crate::{
    backend::default_backends,
    cli::Cli,
    extract::{DEFAULT_DOCUMENT_PATH, extract_document},
};

pub use crate::error::ExtractError;

pub fn run(cli: Cli) -> Result<String> {
    let max = match cli.global.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    fmt()
        .with_max_level(max)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    let path = Path::new(DEFAULT_DOCUMENT_PATH);
    extract_document(&default_backends(), path)
        .with_context(|| format!("Failed to extract text from {}", path.display()))
}

/// True when `err` means no PDF library could be loaded.
pub fn is_capability_unavailable(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ExtractError>()
        .is_some_and(ExtractError::is_capability_unavailable)
}

/// What the process writes and how it exits for a finished run.
#[derive(Debug, PartialEq, Eq)]
pub struct Report {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub exit_code: u8,
}

pub fn report(result: &Result<String>) -> Report {
    match result {
        Ok(text) => Report {
            stdout: Some(text.clone()),
            stderr: None,
            exit_code: 0,
        },
        Err(e) if is_capability_unavailable(e) => Report {
            stdout: Some(ExtractError::NoBackend.to_string()),
            stderr: None,
            exit_code: 1,
        },
        Err(e) => Report {
            stdout: None,
            stderr: Some(format!("{e:?}")),
            exit_code: 2,
        },
    }
}
