//! Thread fetching against the board JSON API

use tracing::debug;

use crate::downloader::DownloadConfig;
use crate::error::FetchError;
use crate::thread::Thread;

/// Client for the thread listing endpoint.
///
/// Fetches a thread's full post list in a single request. Any failure here
/// is fatal to the run; the downloader never starts on a partial thread.
#[derive(Debug, Clone)]
pub struct ThreadClient {
    client: reqwest::Client,
    api_base_url: String,
}

impl ThreadClient {
    /// Build a client from the shared download configuration.
    pub fn new(config: &DownloadConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
        })
    }

    /// Fetch the full post list for `thread_id` on `board`.
    pub async fn fetch(&self, board: &str, thread_id: u64) -> Result<Thread, FetchError> {
        let url = format!("{}/{}/thread/{}.json", self.api_base_url, board, thread_id);
        debug!("Fetching thread listing: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status { status, body });
        }

        let bytes = response.bytes().await?;
        let thread: Thread = serde_json::from_slice(&bytes)?;
        debug!(
            "Thread /{}/{} has {} posts",
            board,
            thread_id,
            thread.posts.len()
        );
        Ok(thread)
    }
}
