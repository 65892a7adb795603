use std::fmt;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use super::audio_file_name::AudioFileName;

pub const WORKSPACE_PREFIX: &str = "yt-sampler-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }

    pub fn dir_name(&self) -> String {
        format!("{}{}", WORKSPACE_PREFIX, self.0)
    }
}

impl Default for WorkspaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A per-request scratch directory. Owned by exactly one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    path: PathBuf,
}

impl Workspace {
    pub fn new(id: WorkspaceId, path: PathBuf) -> Self {
        Self { id, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, filename: &AudioFileName) -> PathBuf {
        self.path.join(filename.as_str())
    }
}
