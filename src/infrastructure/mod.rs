pub mod audio;
pub mod downloader;
pub mod observability;
pub mod storage;
