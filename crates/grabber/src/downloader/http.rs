//! HTTP plumbing for attachment downloads

use std::path::Path;

use futures::StreamExt;
use reqwest::Client;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::downloader::config::DownloadConfig;
use crate::error::{DownloadError, Result};

/// HTTP client shared by every download task in a batch.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Build a client from the download configuration.
    pub fn from_config(config: &DownloadConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Download `url` into `dest_path`, creating or truncating the file.
    ///
    /// A non-success status never touches the filesystem; the response body
    /// is captured as the failure reason instead. A failure mid-stream may
    /// leave a truncated file behind.
    pub async fn download_to_file(&self, url: &str, dest_path: &Path) -> Result<u64> {
        debug!("Downloading {} to {}", url, dest_path.display());

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DownloadError::Status { status, body });
        }

        if let Some(parent) = dest_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = fs::File::create(dest_path).await?;
        let mut stream = response.bytes_stream();
        let mut written = 0u64;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        file.flush().await?;

        debug!("Wrote {} bytes to {}", written, dest_path.display());
        Ok(written)
    }
}
