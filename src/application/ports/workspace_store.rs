use std::io;

use async_trait::async_trait;

use crate::domain::Workspace;

#[async_trait]
pub trait WorkspaceStore: Send + Sync {
    async fn create(&self) -> Result<Workspace, WorkspaceError>;

    async fn remove(&self, workspace: &Workspace) -> Result<(), WorkspaceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum WorkspaceError {
    #[error("failed to create workspace: {0}")]
    Create(#[source] io::Error),
    #[error("failed to remove workspace: {0}")]
    Remove(#[source] io::Error),
}
