use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

use super::{ContentsSource, DownloadError, contents_file_name};

/// Mirror directory on the local filesystem
pub struct LocalMirror {
    root: PathBuf,
}

impl LocalMirror {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, arch: &str) -> PathBuf {
        self.root.join(contents_file_name(arch))
    }
}

#[async_trait]
impl ContentsSource for LocalMirror {
    fn location(&self, arch: &str) -> String {
        self.path_for(arch).display().to_string()
    }

    async fn fetch(&self, arch: &str) -> Result<Vec<u8>, DownloadError> {
        let path = self.path_for(arch);
        match tokio::fs::read(&path).await {
            Ok(data) => {
                debug!("Read {} bytes from {}", data.len(), path.display());
                Ok(data)
            }
            Err(source) => Err(DownloadError::Local { path, source }),
        }
    }
}
