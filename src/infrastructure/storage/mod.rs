mod local_workspace_store;

pub use local_workspace_store::LocalWorkspaceStore;
