use std::fmt;

use chrono::Utc;

pub const AUDIO_EXTENSION: &str = "mp3";

/// Time-derived name of the single audio file written into a workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioFileName(String);

impl AudioFileName {
    pub fn generate() -> Self {
        let now = Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_micros().saturating_mul(1_000));
        Self::from_stem(nanos.to_string())
    }

    pub fn from_stem(stem: impl Into<String>) -> Self {
        Self(format!("{}.{}", stem.into(), AUDIO_EXTENSION))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AudioFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
