use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedAudio {
    pub path: PathBuf,
    pub size_bytes: u64,
    /// Combined stdout and stderr of the downloader.
    pub output: String,
}

#[async_trait]
pub trait AudioDownloader: Send + Sync {
    async fn download(
        &self,
        url: &str,
        output_path: &Path,
    ) -> Result<DownloadedAudio, DownloadError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    #[error("failed to start downloader: {0}")]
    Spawn(#[source] io::Error),
    #[error("downloader exited with {status}")]
    Failed { status: ExitStatus, output: String },
    #[error("downloader produced no file at {}", .path.display())]
    MissingOutput { path: PathBuf, output: String },
    #[error("downloader skipped a file over the {limit} byte limit")]
    TooLarge { limit: u64, output: String },
}

impl DownloadError {
    /// Captured downloader output, when the process got far enough to produce any.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Spawn(_) => None,
            Self::Failed { output, .. }
            | Self::MissingOutput { output, .. }
            | Self::TooLarge { output, .. } => Some(output),
        }
    }
}
