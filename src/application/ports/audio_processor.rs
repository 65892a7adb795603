use std::io;
use std::path::Path;

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::SpliceParams;

/// Remote processing step. Returns the raw response body, whatever the
/// downstream status code was.
#[async_trait]
pub trait AudioProcessor: Send + Sync {
    async fn process(&self, file_path: &Path, params: &SpliceParams) -> Result<Bytes, RelayError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("failed to read audio file: {0}")]
    Io(#[from] io::Error),
    #[error("failed to build request: {0}")]
    Request(String),
    #[error("transport failure: {0}")]
    Transport(String),
}
