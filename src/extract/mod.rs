//! Text extraction collaborator.
//!
//! Everything the reader knows about a document format lives behind
//! [`TextExtractor`]: bytes plus a mime type in, plain text out. Extraction
//! can be slow for large PDFs, so loads run on a worker thread and deliver
//! their result over a channel the event loop polls between frames.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread;

use log::debug;
use thiserror::Error;

pub mod document;

pub use document::DocumentExtractor;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("PDF extraction failed: {0}")]
    PdfParse(String),

    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The one capability the reader requires of a document source.
pub trait TextExtractor: Send {
    fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String, ExtractError>;
}

/// Maps a file extension to the mime type handed to the extractor.
///
/// An unknown extension is an input error reported before any extraction
/// starts; there is no content sniffing.
pub fn mime_for_path(path: &Path) -> Result<&'static str, ExtractError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "pdf" => Ok("application/pdf"),
        "txt" | "md" => Ok("text/plain"),
        _ => Err(ExtractError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Runs one extraction on a background thread.
///
/// The returned receiver yields exactly one message. Dropping the receiver
/// abandons the result; the worker holds no shared state, so nothing else
/// needs cleanup.
pub fn spawn_extraction(
    extractor: Box<dyn TextExtractor>,
    path: PathBuf,
) -> Receiver<Result<String, ExtractError>> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = extract_file(extractor.as_ref(), &path);
        // Receiver may be gone if the user quit mid-load.
        let _ = tx.send(result);
    });
    rx
}

fn extract_file(extractor: &dyn TextExtractor, path: &Path) -> Result<String, ExtractError> {
    let mime = mime_for_path(path)?;
    if !path.exists() {
        return Err(ExtractError::FileNotFound(path.to_path_buf()));
    }
    let mut data = Vec::new();
    File::open(path)?.read_to_end(&mut data)?;
    debug!("extracting {} bytes from {}", data.len(), path.display());
    extractor.extract_text(&data, mime)
}
