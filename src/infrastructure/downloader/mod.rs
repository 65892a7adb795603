mod yt_dlp_downloader;

pub use yt_dlp_downloader::{DEFAULT_BINARY, DEFAULT_FORMAT, YtDlpDownloader};
