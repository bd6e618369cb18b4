//! Thread and post models, eligibility filtering, and the naming policy

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use crate::error::InvalidThreadUrl;

/// Pattern for a board thread URL, e.g. `https://boards.4chan.org/wg/thread/1234567`.
static THREAD_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://boards\.4chan\.org/(\w+)/thread/(\d+)").unwrap());

/// A thread as served by the JSON API: an ordered list of posts.
///
/// Immutable once fetched; it only lives for the duration of one run.
#[derive(Debug, Clone, Deserialize)]
pub struct Thread {
    pub posts: Vec<Post>,
}

/// One post in a thread.
///
/// Only `no` is guaranteed by the API; everything else depends on the post.
/// A post carries a media attachment when `filename` and `ext` are both set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Post {
    /// Post number, unique within the thread
    pub no: u64,
    #[serde(default)]
    pub time: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub com: Option<String>,
    /// Attachment timestamp, the server-assigned media id
    #[serde(default)]
    pub tim: Option<u64>,
    /// Original filename of the attachment, without extension
    #[serde(default)]
    pub filename: Option<String>,
    /// Extension with leading dot, e.g. `.jpg`
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub fsize: Option<u64>,
    #[serde(default)]
    pub w: Option<u32>,
    #[serde(default)]
    pub h: Option<u32>,
    #[serde(default)]
    pub md5: Option<String>,
    #[serde(default)]
    pub resto: Option<u64>,
    #[serde(default)]
    pub replies: Option<u32>,
    #[serde(default)]
    pub images: Option<u32>,
}

impl Post {
    /// Whether this post carries a downloadable attachment.
    pub fn has_attachment(&self) -> bool {
        self.filename.is_some() && self.ext.is_some()
    }

    /// Destination filename for this post's attachment.
    ///
    /// `{filename}{ext}` when `keep_original_filename` is set and the post
    /// has an original filename, `{tim}{ext}` otherwise. Deterministic for a
    /// given post and flag. `None` when the post has no attachment.
    pub fn local_filename(&self, keep_original_filename: bool) -> Option<String> {
        let ext = self.ext.as_deref()?;
        if keep_original_filename {
            if let Some(filename) = self.filename.as_deref() {
                return Some(format!("{filename}{ext}"));
            }
        }
        self.tim.map(|tim| format!("{tim}{ext}"))
    }
}

/// Strip a leading `.` so `jpg` and `.jpg` compare equal.
fn normalize_format(format: &str) -> &str {
    format.strip_prefix('.').unwrap_or(format)
}

/// Keep only posts that carry an attachment whose extension is not ignored.
///
/// Ignore tokens and post extensions are both compared without their leading
/// dot; the comparison itself is case-sensitive. Pure function, no I/O.
pub fn filter_media_posts(posts: &[Post], ignored_formats: &HashSet<String>) -> Vec<Post> {
    let ignored: HashSet<&str> = ignored_formats
        .iter()
        .map(|format| normalize_format(format.trim()))
        .collect();

    posts
        .iter()
        .filter(|post| post.has_attachment())
        .filter(|post| match post.ext.as_deref() {
            Some(ext) => !ignored.contains(normalize_format(ext)),
            None => false,
        })
        .cloned()
        .collect()
}

/// Extract `(board, thread id)` from a full thread URL.
pub fn parse_thread_url(url: &str) -> Result<(String, u64), InvalidThreadUrl> {
    let captures = THREAD_URL_RE
        .captures(url)
        .ok_or_else(|| InvalidThreadUrl(url.to_string()))?;
    let board = captures[1].to_string();
    let thread_id: u64 = captures[2]
        .parse()
        .map_err(|_| InvalidThreadUrl(url.to_string()))?;
    Ok((board, thread_id))
}
