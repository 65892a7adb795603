use bytes::Bytes;

use super::audio_file_name::AudioFileName;

pub const AUDIO_MIME: &str = "audio/mpeg";

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedAudio {
    pub filename: AudioFileName,
    pub bytes: Bytes,
}

impl ProcessedAudio {
    pub fn new(filename: AudioFileName, bytes: Bytes) -> Self {
        Self { filename, bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
