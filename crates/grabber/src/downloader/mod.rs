//! Download engine
//!
//! Batch orchestration, configuration, progress reporting, and the HTTP
//! plumbing underneath. `MediaDownloader` is the entry point: it owns the
//! shared HTTP client and metrics, builds one task per eligible post, and
//! fans the tasks out under the configured concurrency bound.

pub mod batch;
pub mod config;
pub mod http;
pub mod progress;

// Re-export main types for convenience
pub use batch::{
    DownloadMetrics, DownloadMetricsSnapshot, DownloadOutcome, DownloadTask, download_batch,
};
pub use config::DownloadConfig;
pub use http::HttpClient;
pub use progress::{
    ConsoleProgressReporter, IntoProgressCallback, NullProgressReporter, ProgressCallback,
    ProgressEvent, ProgressReporter,
};


use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::thread::Post;

/// Batch downloader for a thread's media attachments.
///
/// Tasks run concurrently, bounded by `DownloadConfig::max_concurrent`; one
/// task's failure never aborts its siblings, and every task produces exactly
/// one outcome in the returned report.
pub struct MediaDownloader {
    http: HttpClient,
    config: DownloadConfig,
    metrics: Arc<DownloadMetrics>,
}

impl MediaDownloader {
    /// Create a downloader from the given configuration.
    pub fn new(config: DownloadConfig) -> Result<Self> {
        let http = HttpClient::from_config(&config)?;
        let metrics = Arc::new(DownloadMetrics::default());
        Ok(Self {
            http,
            config,
            metrics,
        })
    }

    /// Get access to the built-in performance counters.
    pub fn metrics(&self) -> &DownloadMetrics {
        &self.metrics
    }

    /// Download every eligible post's attachment into `output_dir`.
    ///
    /// One task is built per post that carries an attachment; posts without
    /// one are skipped. The destination filename follows the run-wide
    /// `keep_original_filename` policy.
    pub async fn download_thread_media(
        &self,
        board: &str,
        posts: &[Post],
        output_dir: &Path,
        keep_original_filename: bool,
        progress_callback: Option<ProgressCallback>,
    ) -> Vec<DownloadOutcome> {
        let tasks: Vec<DownloadTask> = posts
            .iter()
            .filter_map(|post| {
                DownloadTask::from_post(
                    &self.config,
                    board,
                    post,
                    output_dir,
                    keep_original_filename,
                )
            })
            .collect();

        self.download_batch(tasks, progress_callback).await
    }

    /// Download an explicit set of tasks with the configured concurrency.
    pub async fn download_batch(
        &self,
        tasks: Vec<DownloadTask>,
        progress_callback: Option<ProgressCallback>,
    ) -> Vec<DownloadOutcome> {
        batch::download_batch(
            &self.http,
            &self.metrics,
            tasks,
            progress_callback,
            self.config.max_concurrent,
        )
        .await
    }
}
