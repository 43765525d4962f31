use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use super::{ContentsSource, DownloadError, contents_file_name, with_trailing_slash};

/// Connect and read timeout for mirror requests.
const TIMEOUT: Duration = Duration::from_secs(10);

/// Debian mirror reached over HTTP(S)
pub struct HttpMirror {
    client: Client,
    base: String,
}

impl HttpMirror {
    pub fn new(base: &str) -> Result<Self, DownloadError> {
        let client = Client::builder()
            .connect_timeout(TIMEOUT)
            .read_timeout(TIMEOUT)
            .build()
            .map_err(|source| DownloadError::Transport {
                url: base.to_string(),
                source,
            })?;

        Ok(Self::with_client(base, client))
    }

    /// Use a preconfigured client, e.g. one with a custom proxy setup.
    pub fn with_client(base: &str, client: Client) -> Self {
        Self {
            client,
            base: with_trailing_slash(base),
        }
    }

    /// Full URL of the Contents index for `arch`
    pub fn url_for(&self, arch: &str) -> String {
        format!("{}{}", self.base, contents_file_name(arch))
    }
}

#[async_trait]
impl ContentsSource for HttpMirror {
    fn location(&self, arch: &str) -> String {
        self.url_for(arch)
    }

    async fn fetch(&self, arch: &str) -> Result<Vec<u8>, DownloadError> {
        let url = self.url_for(arch);

        let resp = match self.client.get(&url).send().await {
            Ok(resp) => resp,
            Err(source) => return Err(DownloadError::Transport { url, source }),
        };

        let status = resp.status();
        if !status.is_success() {
            return Err(DownloadError::Status { url, status });
        }

        let body = match resp.bytes().await {
            Ok(body) => body,
            Err(source) => return Err(DownloadError::Transport { url, source }),
        };
        debug!("Received {} bytes from {}", body.len(), url);

        Ok(Vec::from(body))
    }
}
