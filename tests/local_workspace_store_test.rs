use yt_sampler::application::ports::WorkspaceStore;
use yt_sampler::domain::{AudioFileName, WORKSPACE_PREFIX};
use yt_sampler::infrastructure::storage::LocalWorkspaceStore;

fn create_test_store() -> (tempfile::TempDir, LocalWorkspaceStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalWorkspaceStore::new(dir.path().to_path_buf());
    (dir, store)
}

#[tokio::test]
async fn given_store_when_creating_workspace_then_directory_exists_under_root() {
    let (dir, store) = create_test_store();

    let workspace = store.create().await.unwrap();

    assert!(workspace.path().is_dir());
    assert_eq!(workspace.path().parent().unwrap(), dir.path());
    let name = workspace.path().file_name().unwrap().to_string_lossy();
    assert!(name.starts_with(WORKSPACE_PREFIX));
    assert!(name.ends_with(&workspace.id.to_string()));
}

#[tokio::test]
async fn given_two_creations_when_comparing_then_workspaces_differ() {
    let (_dir, store) = create_test_store();

    let first = store.create().await.unwrap();
    let second = store.create().await.unwrap();

    assert_ne!(first.id, second.id);
    assert_ne!(first.path(), second.path());
}

#[tokio::test]
async fn given_missing_root_when_creating_workspace_then_root_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("nested").join("tmp");
    let store = LocalWorkspaceStore::new(root.clone());

    let workspace = store.create().await.unwrap();

    assert!(root.is_dir());
    assert!(workspace.path().starts_with(&root));
}

#[tokio::test]
async fn given_workspace_with_file_when_removing_then_directory_is_gone() {
    let (dir, store) = create_test_store();
    let workspace = store.create().await.unwrap();
    let file = workspace.file_path(&AudioFileName::from_stem("123"));
    tokio::fs::write(&file, b"audio").await.unwrap();

    store.remove(&workspace).await.unwrap();

    assert!(!workspace.path().exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn given_removed_workspace_when_removing_again_then_succeeds() {
    let (_dir, store) = create_test_store();
    let workspace = store.create().await.unwrap();

    store.remove(&workspace).await.unwrap();
    let result = store.remove(&workspace).await;

    assert!(result.is_ok());
}

#[cfg(unix)]
#[tokio::test]
async fn given_root_is_a_file_when_creating_workspace_then_returns_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let root = dir.path().join("not-a-dir");
    std::fs::write(&root, b"x").unwrap();
    let store = LocalWorkspaceStore::new(root);

    let result = store.create().await;

    assert!(result.is_err());
}
