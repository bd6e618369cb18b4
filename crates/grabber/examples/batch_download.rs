//! Example demonstrating a concurrent thread media download
//!
//! Fetches a thread's post list, filters the posts that carry attachments,
//! and downloads everything into a temporary directory with console
//! progress.
//!
//! Run this example with:
//! ```
//! cargo run --example batch_download -- https://boards.4chan.org/wg/thread/1234567
//! ```

use std::collections::HashSet;

use grabber::{
    ConsoleProgressReporter, DownloadConfig, DownloadOutcome, IntoProgressCallback,
    MediaDownloader, ThreadClient, filter_media_posts, parse_thread_url,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let url = std::env::args()
        .nth(1)
        .expect("usage: batch_download <thread-url>");
    let (board, thread_id) = parse_thread_url(&url)?;

    let output_dir = tempfile::tempdir()?;
    println!("Download directory: {}", output_dir.path().display());

    let config = DownloadConfig::default();
    let client = ThreadClient::new(&config)?;
    let thread = client.fetch(&board, thread_id).await?;

    let posts = filter_media_posts(&thread.posts, &HashSet::new());
    println!("Thread has {} posts with media", posts.len());

    let downloader = MediaDownloader::new(config)?;
    let progress = ConsoleProgressReporter::new(true).into_callback();
    let outcomes = downloader
        .download_thread_media(&board, &posts, output_dir.path(), false, Some(progress))
        .await;

    let snapshot = downloader.metrics().snapshot();
    println!(
        "{} of {} downloads succeeded ({} bytes)",
        snapshot.successful_downloads, snapshot.total_downloads, snapshot.total_bytes
    );

    for outcome in &outcomes {
        if let DownloadOutcome::Failure { post_no, reason } = outcome {
            eprintln!("post no. {post_no}: {reason}");
        }
    }

    Ok(())
}
