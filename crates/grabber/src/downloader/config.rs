//! Configuration for the download engine

use std::thread::available_parallelism;
use std::time::Duration;

/// Configuration shared by the thread client and the batch downloader.
///
/// The worker-pool bound is an explicit parameter here rather than a hidden
/// per-call default; tests point the two base URLs at a mock server.
#[derive(Debug, Clone)]
pub struct DownloadConfig {
    /// Maximum number of simultaneous in-flight downloads
    pub max_concurrent: usize,
    /// Per-request timeout
    pub timeout: Duration,
    pub user_agent: String,
    /// Base URL of the thread listing API
    pub api_base_url: String,
    /// Base URL of the media host
    pub media_base_url: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            max_concurrent: default_max_concurrent(),
            timeout: Duration::from_secs(30),
            user_agent: "grabber/0.1.0".to_string(),
            api_base_url: "https://a.4cdn.org".to_string(),
            media_base_url: "https://i.4cdn.org".to_string(),
        }
    }
}

/// Worker-pool bound matching the host's available concurrency.
fn default_max_concurrent() -> usize {
    available_parallelism().map(|n| n.get()).unwrap_or(4)
}
