use serde::Deserialize;
use url::Url;

use super::splice_params::SpliceParams;

/// Body of a `POST /downloadUrl` call.
///
/// Missing fields decode to their zero values so that [`DownloadRequest::validate`]
/// reports them instead of the JSON decoder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DownloadRequest {
    pub url: String,
    pub splice_duration: f64,
    pub splice_count: i32,
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("URL cannot be empty")]
    EmptyUrl,
    #[error("URL is not valid")]
    InvalidUrl,
    #[error("splice duration must be > 0")]
    NonPositiveDuration,
    #[error("splice count must be > 0")]
    NonPositiveCount,
}

impl DownloadRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let url = self.url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyUrl);
        }

        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") && parsed.has_host() => {}
            _ => return Err(ValidationError::InvalidUrl),
        }

        if !self.splice_duration.is_finite() || self.splice_duration <= 0.0 {
            return Err(ValidationError::NonPositiveDuration);
        }

        if self.splice_count <= 0 {
            return Err(ValidationError::NonPositiveCount);
        }

        Ok(())
    }

    pub fn splice_params(&self) -> SpliceParams {
        SpliceParams {
            duration: self.splice_duration,
            count: self.splice_count,
            reverse: self.reverse,
        }
    }
}
