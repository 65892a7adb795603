use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart;

use crate::application::ports::{AudioProcessor, RelayError};
use crate::domain::SpliceParams;

/// Content type of the uploaded part; the download format is not fixed to mp3.
const UPLOAD_MIME: &str = "application/octet-stream";

/// Client for the splice service's `POST /process` endpoint.
pub struct SpliceServiceClient {
    client: reqwest::Client,
    endpoint: String,
}

impl SpliceServiceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RelayError::Request(format!("client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/process", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AudioProcessor for SpliceServiceClient {
    async fn process(&self, file_path: &Path, params: &SpliceParams) -> Result<Bytes, RelayError> {
        let data = tokio::fs::read(file_path).await?;
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string());

        let file_part = multipart::Part::bytes(data)
            .file_name(file_name)
            .mime_str(UPLOAD_MIME)
            .map_err(|e| RelayError::Request(format!("mime: {}", e)))?;

        let form = multipart::Form::new()
            .part("file", file_part)
            .text("spliceDuration", params.duration_field())
            .text("spliceCount", params.count_field())
            .text("reverse", params.reverse_field());

        tracing::debug!(endpoint = %self.endpoint, ?params, "Sending audio to splice service");

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| RelayError::Transport(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Splice service answered with a non-success status");
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Transport(format!("body: {}", e)))?;

        tracing::info!(status = %status, bytes = body.len(), "Splice service responded");

        Ok(body)
    }
}
