use std::path::PathBuf;
use std::time::Duration;

use super::Environment;
use crate::infrastructure::downloader::{DEFAULT_BINARY, DEFAULT_FORMAT};

const DEFAULT_PROCESSOR_URL: &str = "http://localhost:8081";
const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_FILE_SIZE: u64 = 50 * 1024 * 1024;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_JOBS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    /// Base URL of the splice service; `/process` is appended.
    pub processor_url: String,
    pub max_file_size: u64,
    pub temp_dir: PathBuf,
    pub http_timeout: Duration,
    pub downloader: DownloaderSettings,
    pub max_concurrent_jobs: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloaderSettings {
    pub binary: String,
    pub format: String,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup. Missing, empty or
    /// unparsable values fall back to their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = get("APP_ENVIRONMENT")
            .and_then(|v| Environment::try_from(v).ok())
            .unwrap_or(Environment::Local);

        let timeout_secs = get("HTTP_TIMEOUT_SECONDS")
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        Self {
            environment,
            server: ServerSettings {
                host: get("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: get("SERVER_PORT")
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
            },
            processor_url: get("RUST_SERVICE_URL")
                .unwrap_or_else(|| DEFAULT_PROCESSOR_URL.to_string()),
            max_file_size: get("MAX_FILE_SIZE")
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|size| *size > 0)
                .unwrap_or(DEFAULT_MAX_FILE_SIZE),
            temp_dir: get("TEMP_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(std::env::temp_dir),
            http_timeout: Duration::from_secs(timeout_secs),
            downloader: DownloaderSettings {
                binary: get("DOWNLOADER_BINARY")
                    .unwrap_or_else(|| DEFAULT_BINARY.to_string()),
                format: get("DOWNLOADER_FORMAT")
                    .unwrap_or_else(|| DEFAULT_FORMAT.to_string()),
            },
            max_concurrent_jobs: get("MAX_CONCURRENT_JOBS")
                .and_then(|v| v.parse::<usize>().ok())
                .map(|jobs| jobs.max(1))
                .unwrap_or(DEFAULT_MAX_CONCURRENT_JOBS),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
