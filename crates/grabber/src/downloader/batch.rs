//! Batch download orchestration
//!
//! The fan-out/fan-in engine: one task per eligible post, bounded
//! concurrency, per-task outcomes collected without aborting the batch.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use futures::stream::{self, StreamExt};
use tracing::debug;

use crate::downloader::config::DownloadConfig;
use crate::downloader::http::HttpClient;
use crate::downloader::progress::{ProgressCallback, ProgressEvent};
use crate::error::DownloadError;
use crate::thread::Post;

/// One scheduled attachment download, derived 1:1 from an eligible post.
#[derive(Debug, Clone)]
pub struct DownloadTask {
    /// Media URL the attachment is fetched from
    pub url: String,
    /// Full destination path the bytes are written to
    pub dest_path: PathBuf,
    /// Owning post number, kept for error attribution
    pub post_no: u64,
}

impl DownloadTask {
    /// Build the task for a post's attachment.
    ///
    /// Returns `None` for posts without `tim` and `ext`; the media URL
    /// cannot be constructed without them.
    pub fn from_post(
        config: &DownloadConfig,
        board: &str,
        post: &Post,
        output_dir: &Path,
        keep_original_filename: bool,
    ) -> Option<Self> {
        let tim = post.tim?;
        let ext = post.ext.as_deref()?;
        let filename = post.local_filename(keep_original_filename)?;

        Some(Self {
            url: format!("{}/{}/{}{}", config.media_base_url, board, tim, ext),
            dest_path: output_dir.join(filename),
            post_no: post.no,
        })
    }
}

/// Result of one download task.
///
/// The batch report is the full vector of these; no outcome is ever dropped.
#[derive(Debug)]
pub enum DownloadOutcome {
    Success {
        post_no: u64,
        path: PathBuf,
        size: u64,
    },
    Failure {
        post_no: u64,
        reason: DownloadError,
    },
}

impl DownloadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Post number the outcome is attributed to.
    pub fn post_no(&self) -> u64 {
        match self {
            Self::Success { post_no, .. } | Self::Failure { post_no, .. } => *post_no,
        }
    }
}

/// Performance counters for a downloader instance
#[derive(Debug, Default)]
pub struct DownloadMetrics {
    pub total_downloads: AtomicU64,
    pub successful_downloads: AtomicU64,
    pub failed_downloads: AtomicU64,
    pub total_bytes: AtomicU64,
}

impl DownloadMetrics {
    pub fn record_download_started(&self) {
        self.total_downloads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_download_completed(&self, size: u64) {
        self.successful_downloads.fetch_add(1, Ordering::Relaxed);
        self.total_bytes.fetch_add(size, Ordering::Relaxed);
    }

    pub fn record_download_failed(&self) {
        self.failed_downloads.fetch_add(1, Ordering::Relaxed);
    }

    /// Get metrics snapshot
    pub fn snapshot(&self) -> DownloadMetricsSnapshot {
        DownloadMetricsSnapshot {
            total_downloads: self.total_downloads.load(Ordering::Relaxed),
            successful_downloads: self.successful_downloads.load(Ordering::Relaxed),
            failed_downloads: self.failed_downloads.load(Ordering::Relaxed),
            total_bytes: self.total_bytes.load(Ordering::Relaxed),
        }
    }
}

/// Immutable snapshot of metrics
#[derive(Debug, Clone)]
pub struct DownloadMetricsSnapshot {
    pub total_downloads: u64,
    pub successful_downloads: u64,
    pub failed_downloads: u64,
    pub total_bytes: u64,
}

impl DownloadMetricsSnapshot {
    pub fn success_rate(&self) -> f64 {
        if self.total_downloads == 0 {
            0.0
        } else {
            self.successful_downloads as f64 / self.total_downloads as f64
        }
    }
}

/// Download every task concurrently, bounded by `max_concurrent`.
///
/// Returns exactly one outcome per task. Outcomes are collected in
/// completion order, which is non-deterministic; callers must not rely on
/// it. The call only returns once every task has finished.
pub async fn download_batch(
    http: &HttpClient,
    metrics: &DownloadMetrics,
    tasks: Vec<DownloadTask>,
    progress_callback: Option<ProgressCallback>,
    max_concurrent: usize,
) -> Vec<DownloadOutcome> {
    debug!(
        "Starting batch download of {} files with max_concurrent={}",
        tasks.len(),
        max_concurrent
    );

    stream::iter(tasks)
        .map(|task| {
            let progress_cb = progress_callback.clone();
            async move { download_task(http, metrics, task, progress_cb).await }
        })
        .buffer_unordered(max_concurrent.max(1))
        .collect()
        .await
}

/// Run one task to its outcome. Failures are recorded, never propagated.
async fn download_task(
    http: &HttpClient,
    metrics: &DownloadMetrics,
    task: DownloadTask,
    progress_callback: Option<ProgressCallback>,
) -> DownloadOutcome {
    metrics.record_download_started();

    if let Some(ref callback) = progress_callback {
        callback(ProgressEvent::DownloadStarted {
            post_no: task.post_no,
            url: task.url.clone(),
        });
    }

    match http.download_to_file(&task.url, &task.dest_path).await {
        Ok(size) => {
            metrics.record_download_completed(size);
            if let Some(ref callback) = progress_callback {
                callback(ProgressEvent::DownloadComplete {
                    post_no: task.post_no,
                    size,
                });
            }
            DownloadOutcome::Success {
                post_no: task.post_no,
                path: task.dest_path,
                size,
            }
        }
        Err(reason) => {
            metrics.record_download_failed();
            debug!("Download for post no. {} failed: {}", task.post_no, reason);
            if let Some(ref callback) = progress_callback {
                callback(ProgressEvent::DownloadFailed {
                    post_no: task.post_no,
                    error: reason.to_string(),
                });
            }
            DownloadOutcome::Failure {
                post_no: task.post_no,
                reason,
            }
        }
    }
}
