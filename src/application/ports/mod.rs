mod audio_downloader;
mod audio_processor;
mod workspace_store;

pub use audio_downloader::{AudioDownloader, DownloadError, DownloadedAudio};
pub use audio_processor::{AudioProcessor, RelayError};
pub use workspace_store::{WorkspaceError, WorkspaceStore};
