use std::io;
use std::path::PathBuf;

use async_trait::async_trait;

use crate::application::ports::{WorkspaceError, WorkspaceStore};
use crate::domain::{Workspace, WorkspaceId};

/// Creates one directory per request under `root`.
pub struct LocalWorkspaceStore {
    root: PathBuf,
}

impl LocalWorkspaceStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

#[async_trait]
impl WorkspaceStore for LocalWorkspaceStore {
    async fn create(&self) -> Result<Workspace, WorkspaceError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(WorkspaceError::Create)?;

        let id = WorkspaceId::new();
        let path = self.root.join(id.dir_name());

        // Fails if the directory already exists.
        tokio::fs::create_dir(&path)
            .await
            .map_err(WorkspaceError::Create)?;

        Ok(Workspace::new(id, path))
    }

    async fn remove(&self, workspace: &Workspace) -> Result<(), WorkspaceError> {
        match tokio::fs::remove_dir_all(workspace.path()).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(WorkspaceError::Remove(e)),
        }
    }
}
