//! Progress tracking and reporting for download operations
//!
//! There is no global logging switch in the engine: whoever drives a batch
//! hands in a callback, configured once at process start.

use std::sync::Arc;

/// Progress callback handed into the batch engine.
pub type ProgressCallback = Arc<dyn Fn(ProgressEvent) + Send + Sync>;

/// Events emitted while a batch runs.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    DownloadStarted {
        post_no: u64,
        url: String,
    },
    DownloadComplete {
        post_no: u64,
        size: u64,
    },
    DownloadFailed {
        post_no: u64,
        error: String,
    },
}

/// Trait for progress reporting with more granular control
pub trait ProgressReporter: Send + Sync {
    fn on_download_started(&self, _post_no: u64, _url: &str) {}
    fn on_download_complete(&self, _post_no: u64, _size: u64) {}
    fn on_download_failed(&self, _post_no: u64, _error: &str) {}
}

/// Extension trait to convert a ProgressReporter into a ProgressCallback
pub trait IntoProgressCallback {
    fn into_callback(self) -> ProgressCallback;
}

impl<T: ProgressReporter + 'static> IntoProgressCallback for T {
    fn into_callback(self) -> ProgressCallback {
        Arc::new(move |event| match event {
            ProgressEvent::DownloadStarted { post_no, url } => {
                self.on_download_started(post_no, &url);
            }
            ProgressEvent::DownloadComplete { post_no, size } => {
                self.on_download_complete(post_no, size);
            }
            ProgressEvent::DownloadFailed { post_no, error } => {
                self.on_download_failed(post_no, &error);
            }
        })
    }
}

/// Simple console progress reporter implementation
#[derive(Debug, Default)]
pub struct ConsoleProgressReporter {
    pub verbose: bool,
}

impl ConsoleProgressReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl ProgressReporter for ConsoleProgressReporter {
    fn on_download_started(&self, post_no: u64, url: &str) {
        if self.verbose {
            println!("Downloading post no. {}: {}", post_no, url);
        }
    }

    fn on_download_complete(&self, post_no: u64, size: u64) {
        println!("Downloaded post no. {} ({} bytes)", post_no, size);
    }

    fn on_download_failed(&self, post_no: u64, error: &str) {
        eprintln!("Could not download post no. {}: {}", post_no, error);
    }
}

/// Null progress reporter that does nothing
#[derive(Debug, Default)]
pub struct NullProgressReporter;

impl ProgressReporter for NullProgressReporter {}
