//! Grabber Library
//!
//! This library downloads the media attachments of a single imageboard
//! thread, concurrently, into a local directory. It fetches the thread's
//! post list from the JSON API, filters the posts that carry attachments,
//! and fans the downloads out over a bounded worker pool, collecting one
//! outcome per post without letting a single failure abort the batch.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::collections::HashSet;
//! use std::path::Path;
//!
//! use grabber::{
//!     DownloadConfig, MediaDownloader, ThreadClient, filter_media_posts,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // One shared configuration for both components
//! let config = DownloadConfig::default();
//!
//! // Fetch the thread's full post list (fatal on failure)
//! let client = ThreadClient::new(&config)?;
//! let thread = client.fetch("wg", 1234567).await?;
//!
//! // Keep only posts with attachments, honoring the ignore list
//! let ignored: HashSet<String> = ["gif"].iter().map(|s| s.to_string()).collect();
//! let posts = filter_media_posts(&thread.posts, &ignored);
//!
//! // Download everything concurrently; one outcome per post
//! let downloader = MediaDownloader::new(config)?;
//! let outcomes = downloader
//!     .download_thread_media("wg", &posts, Path::new("downloads"), false, None)
//!     .await;
//!
//! for outcome in outcomes.iter().filter(|o| !o.is_success()) {
//!     eprintln!("post no. {} failed", outcome.post_no());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **Single-shot thread fetch**: the post list is fully known before any
//!   download is scheduled
//! - **Bounded concurrency**: worker pool sized by configuration, defaulting
//!   to the host's available parallelism
//! - **Isolated failures**: a non-success response or write error is recorded
//!   per post and never cancels sibling downloads
//! - **Deterministic naming**: `{tim}{ext}` or `{filename}{ext}`, chosen by a
//!   single run-wide flag
//! - **Progress reporting**: explicit callback/reporter handed into the
//!   engine, no global logger state

pub mod client;
pub mod downloader;
pub mod error;
pub mod thread;

// Re-export commonly used types for convenience
pub use client::ThreadClient;
pub use downloader::{
    ConsoleProgressReporter, DownloadConfig, DownloadMetrics, DownloadMetricsSnapshot,
    DownloadOutcome, DownloadTask, IntoProgressCallback, MediaDownloader, NullProgressReporter,
    ProgressCallback, ProgressEvent, ProgressReporter,
};
pub use error::{DownloadError, FetchError, InvalidThreadUrl, Result};
pub use thread::{Post, Thread, filter_media_posts, parse_thread_url};
