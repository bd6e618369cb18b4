//! Command-line front-end for the grabber library

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use grabber::{
    ConsoleProgressReporter, DownloadConfig, IntoProgressCallback, MediaDownloader, ThreadClient,
    filter_media_posts, parse_thread_url,
};
use tracing::{Level, debug, info, warn};

/// Imageboard thread media downloader
#[derive(Debug, Parser)]
#[command(name = "grabber", version, about = "Imageboard thread media downloader")]
struct Cli {
    /// Thread URL, e.g. https://boards.4chan.org/wg/thread/1234567
    #[arg(short = 't', long = "thread")]
    thread: String,

    /// Output directory path
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Show debug information
    #[arg(short, long)]
    verbose: bool,

    /// Comma separated values of formats to ignore
    #[arg(long = "ignore-formats", value_delimiter = ',')]
    ignore_formats: Vec<String>,

    /// Use the media's original filename instead of the attachment timestamp
    #[arg(long = "keep-filename")]
    keep_filename: bool,

    /// Number of simultaneous downloads (defaults to the host's parallelism)
    #[arg(long = "max-concurrent")]
    max_concurrent: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let (board, thread_id) = parse_thread_url(&cli.thread)
        .context("could not extract board and thread id from provided URL")?;
    debug!("Parsed thread URL: board={} thread={}", board, thread_id);

    if !cli.output.exists() {
        warn!("Output directory does not exist, creating it");
        std::fs::create_dir_all(&cli.output).with_context(|| {
            format!("could not create output directory {}", cli.output.display())
        })?;
    }

    let mut config = DownloadConfig::default();
    if let Some(max_concurrent) = cli.max_concurrent {
        config.max_concurrent = max_concurrent;
    }

    let client = ThreadClient::new(&config)?;
    let thread = client
        .fetch(&board, thread_id)
        .await
        .context("could not get thread")?;

    let ignored: HashSet<String> = cli
        .ignore_formats
        .iter()
        .map(|format| format.trim().to_string())
        .filter(|format| !format.is_empty())
        .collect();

    let posts = filter_media_posts(&thread.posts, &ignored);
    if posts.is_empty() {
        bail!("thread does not have posts or no post matches your criteria");
    }
    info!(
        "Downloading media for {} posts from /{}/{}",
        posts.len(),
        board,
        thread_id
    );

    let downloader = MediaDownloader::new(config)?;
    let progress = ConsoleProgressReporter::new(cli.verbose).into_callback();
    let outcomes = downloader
        .download_thread_media(&board, &posts, &cli.output, cli.keep_filename, Some(progress))
        .await;

    let failed = outcomes.iter().filter(|outcome| !outcome.is_success()).count();
    info!("Finished: {} downloaded, {} failed", outcomes.len() - failed, failed);

    Ok(())
}
