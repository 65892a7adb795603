use std::sync::Arc;

use tokio::sync::Semaphore;

use crate::application::ports::{
    AudioDownloader, AudioProcessor, DownloadError, RelayError, WorkspaceError, WorkspaceStore,
};
use crate::domain::{AudioFileName, DownloadRequest, ProcessedAudio, ValidationError, Workspace};

/// Download → stage → relay pipeline behind `POST /downloadUrl`.
///
/// Every call gets its own [`Workspace`], which is removed once the pipeline
/// finishes, whichever step failed. At most `max_concurrent_jobs` pipelines
/// run at once; further callers wait for a permit.
pub struct SamplerService {
    downloader: Arc<dyn AudioDownloader>,
    processor: Arc<dyn AudioProcessor>,
    workspace_store: Arc<dyn WorkspaceStore>,
    max_file_size: u64,
    permits: Semaphore,
}

impl SamplerService {
    pub fn new(
        downloader: Arc<dyn AudioDownloader>,
        processor: Arc<dyn AudioProcessor>,
        workspace_store: Arc<dyn WorkspaceStore>,
        max_file_size: u64,
        max_concurrent_jobs: usize,
    ) -> Self {
        Self {
            downloader,
            processor,
            workspace_store,
            max_file_size,
            permits: Semaphore::new(max_concurrent_jobs.max(1)),
        }
    }

    /// Runs [`SamplerService::process`] on its own task. A caller that goes
    /// away mid-request then cannot cut the pipeline short before the
    /// workspace is removed.
    pub async fn spawn_process(
        self: &Arc<Self>,
        request: DownloadRequest,
    ) -> Result<ProcessedAudio, SamplerError> {
        let service = Arc::clone(self);
        tokio::spawn(async move { service.process(&request).await })
            .await
            .map_err(|e| SamplerError::Internal(format!("pipeline task failed: {}", e)))?
    }

    #[tracing::instrument(skip(self, request), fields(url = %request.url))]
    pub async fn process(&self, request: &DownloadRequest) -> Result<ProcessedAudio, SamplerError> {
        request.validate()?;

        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|e| SamplerError::Internal(format!("job limiter closed: {}", e)))?;

        let workspace = self.workspace_store.create().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to create workspace");
            SamplerError::Workspace(e)
        })?;

        tracing::debug!(workspace_id = %workspace.id, path = %workspace.path().display(), "Workspace created");

        let result = self.run_in(&workspace, request).await;

        if let Err(e) = self.workspace_store.remove(&workspace).await {
            tracing::warn!(workspace_id = %workspace.id, error = %e, "Failed to remove workspace");
        }

        result
    }

    async fn run_in(
        &self,
        workspace: &Workspace,
        request: &DownloadRequest,
    ) -> Result<ProcessedAudio, SamplerError> {
        let filename = AudioFileName::generate();
        let output_path = workspace.file_path(&filename);

        let downloaded = self
            .downloader
            .download(request.url.trim(), &output_path)
            .await
            .map_err(|e| match e {
                DownloadError::TooLarge { limit, .. } => {
                    SamplerError::FileTooLarge { size: None, limit }
                }
                e => {
                    tracing::error!(error = %e, "Error downloading audio");
                    SamplerError::Download(e)
                }
            })?;

        if downloaded.size_bytes > self.max_file_size {
            tracing::warn!(
                size = downloaded.size_bytes,
                limit = self.max_file_size,
                "Downloaded audio exceeds maximum file size"
            );
            return Err(SamplerError::FileTooLarge {
                size: Some(downloaded.size_bytes),
                limit: self.max_file_size,
            });
        }

        let params = request.splice_params();
        let bytes = self
            .processor
            .process(&downloaded.path, &params)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error processing audio");
                SamplerError::Relay(e)
            })?;

        tracing::info!(
            filename = %filename,
            downloaded_bytes = downloaded.size_bytes,
            processed_bytes = bytes.len(),
            "Audio processed"
        );

        Ok(ProcessedAudio::new(filename, bytes))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SamplerError {
    #[error("validation: {0}")]
    Validation(#[from] ValidationError),
    #[error("workspace: {0}")]
    Workspace(#[from] WorkspaceError),
    #[error("download: {0}")]
    Download(#[from] DownloadError),
    /// `size` is unknown when the downloader refused the file up front.
    #[error("downloaded audio exceeds the {limit} byte limit")]
    FileTooLarge { size: Option<u64>, limit: u64 },
    #[error("relay: {0}")]
    Relay(#[from] RelayError),
    #[error("internal: {0}")]
    Internal(String),
}
