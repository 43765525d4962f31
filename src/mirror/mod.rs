//! Retrieval of `Contents-<arch>.gz` indexes.
//!
//! A mirror is either an HTTP(S) base URL, such as
//! `http://ftp.uk.debian.org/debian/dists/stable/main/`, or a local directory
//! laid out the same way. Both are exposed through [`ContentsSource`], which
//! hands back the whole compressed index as one buffer.

mod http;
mod local;

pub use http::HttpMirror;
pub use local::LocalMirror;

use async_trait::async_trait;
use std::path::PathBuf;
use thiserror::Error;

/// Mirror used when neither `--mirror` nor `DEBIAN_MIRROR` is given.
pub const DEFAULT_MIRROR: &str = "http://ftp.uk.debian.org/debian/dists/stable/main/";

/// Errors raised while fetching a Contents index.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The server answered, but not with a success status.
    #[error("HTTP error: {status} for url ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The request never completed: connection refused, DNS, timeout, body read.
    #[error("Network error: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// A local mirror is missing the file or it cannot be read.
    #[error("Cannot read {}: {source}", path.display())]
    Local {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    /// The server rejected the request with an HTTP status.
    pub fn is_status(&self) -> bool {
        matches!(self, DownloadError::Status { .. })
    }

    /// The request failed below the HTTP layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, DownloadError::Transport { .. })
    }
}

/// A place Contents indexes can be fetched from.
#[async_trait]
pub trait ContentsSource: Send + Sync {
    /// Human readable location of the index for `arch`.
    fn location(&self, arch: &str) -> String;

    /// Fetch the complete gzip-compressed index for `arch`.
    async fn fetch(&self, arch: &str) -> Result<Vec<u8>, DownloadError>;
}

/// Name of the Contents index for `arch` inside a mirror's component directory.
pub fn contents_file_name(arch: &str) -> String {
    format!("Contents-{arch}.gz")
}

pub fn is_http_url(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

/// Open the mirror described by `base`.
///
/// `http://` and `https://` locations go over the network; anything else is
/// treated as a directory, with an optional `file://` prefix.
pub fn open(base: &str) -> Result<Box<dyn ContentsSource>, DownloadError> {
    if is_http_url(base) {
        Ok(Box::new(HttpMirror::new(base)?))
    } else {
        let root = base.strip_prefix("file://").unwrap_or(base);
        Ok(Box::new(LocalMirror::new(root)))
    }
}

/// Make sure appending a file name to `base` lands inside it.
fn with_trailing_slash(base: &str) -> String {
    if base.ends_with('/') {
        base.to_string()
    } else {
        format!("{base}/")
    }
}
