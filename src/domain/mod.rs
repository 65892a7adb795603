mod audio_file_name;
mod download_request;
mod processed_audio;
mod splice_params;
mod workspace;

pub use audio_file_name::{AUDIO_EXTENSION, AudioFileName};
pub use download_request::{DownloadRequest, ValidationError};
pub use processed_audio::{AUDIO_MIME, ProcessedAudio};
pub use splice_params::SpliceParams;
pub use workspace::{WORKSPACE_PREFIX, Workspace, WorkspaceId};
