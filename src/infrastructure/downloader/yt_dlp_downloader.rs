use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{AudioDownloader, DownloadError, DownloadedAudio};
use crate::infrastructure::observability::truncate_for_log;

pub const DEFAULT_BINARY: &str = "yt-dlp";
/// m4a audio-only stream.
pub const DEFAULT_FORMAT: &str = "140";

/// Printed by yt-dlp when `--max-filesize` makes it skip or abort a download.
/// It still exits 0 in that case.
const MAX_FILESIZE_MARKER: &str = "larger than max-filesize";

pub struct YtDlpDownloader {
    binary: String,
    format: String,
    max_file_size: u64,
}

impl YtDlpDownloader {
    pub fn new(binary: impl Into<String>, format: impl Into<String>, max_file_size: u64) -> Self {
        Self {
            binary: binary.into(),
            format: format.into(),
            max_file_size,
        }
    }

    fn command(&self, url: &str, output_path: &Path) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("--format")
            .arg(&self.format)
            .arg("--no-playlist")
            .arg("--max-filesize")
            .arg(self.max_file_size.to_string())
            .arg("-o")
            .arg(output_path)
            .arg("--")
            .arg(url)
            .stdin(Stdio::null())
            .kill_on_drop(true);
        cmd
    }
}

#[async_trait]
impl AudioDownloader for YtDlpDownloader {
    async fn download(
        &self,
        url: &str,
        output_path: &Path,
    ) -> Result<DownloadedAudio, DownloadError> {
        tracing::debug!(binary = %self.binary, format = %self.format, url = %url, "Starting downloader");

        let result = self
            .command(url, output_path)
            .output()
            .await
            .map_err(DownloadError::Spawn)?;

        let mut output = String::from_utf8_lossy(&result.stdout).into_owned();
        output.push_str(&String::from_utf8_lossy(&result.stderr));

        if !result.status.success() {
            tracing::error!(
                status = %result.status,
                output = %truncate_for_log(&output),
                "Downloader failed"
            );
            return Err(DownloadError::Failed {
                status: result.status,
                output,
            });
        }

        tracing::debug!(output = %truncate_for_log(&output), "Downloader finished");

        let size_bytes = match tokio::fs::metadata(output_path).await {
            Ok(meta) if meta.is_file() => meta.len(),
            _ if output.contains(MAX_FILESIZE_MARKER) => {
                tracing::warn!(
                    limit = self.max_file_size,
                    output = %truncate_for_log(&output),
                    "Downloader skipped a file over the size limit"
                );
                return Err(DownloadError::TooLarge {
                    limit: self.max_file_size,
                    output,
                });
            }
            _ => {
                tracing::error!(
                    path = %output_path.display(),
                    output = %truncate_for_log(&output),
                    "Downloader exited cleanly without writing a file"
                );
                return Err(DownloadError::MissingOutput {
                    path: output_path.to_path_buf(),
                    output,
                });
            }
        };

        Ok(DownloadedAudio {
            path: output_path.to_path_buf(),
            size_bytes,
            output,
        })
    }
}
