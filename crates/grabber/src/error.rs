//! Error types for the grabber library
//!
//! Failures come in two tiers: fetching the thread listing is fatal to the
//! whole run (`FetchError`), while a single attachment download failing is
//! recorded per item (`DownloadError`) and never stops its siblings.

use reqwest::StatusCode;
use thiserror::Error;

/// Result alias used throughout the download engine.
pub type Result<T, E = DownloadError> = std::result::Result<T, E>;

/// Fatal errors from fetching a thread's post list.
///
/// Any of these aborts the run before a single download is scheduled.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure talking to the thread endpoint
    #[error("thread request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The thread endpoint answered with a non-success status
    #[error("thread endpoint returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The response body was not a valid thread object
    #[error("could not decode thread JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-item errors from a single attachment download.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Transport-level failure for the media request
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The media host answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Writing the downloaded bytes to disk failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// The thread URL did not match the expected board/thread pattern.
#[derive(Error, Debug)]
#[error("could not extract board and thread id from `{0}`")]
pub struct InvalidThreadUrl(pub String);
