use std::path::PathBuf;

use bytes::Bytes;
use yt_sampler::domain::{
    AUDIO_EXTENSION, AudioFileName, ProcessedAudio, WORKSPACE_PREFIX, Workspace, WorkspaceId,
};

#[test]
fn given_generated_file_name_when_inspected_then_is_numeric_stem_with_mp3_extension() {
    let name = AudioFileName::generate();
    let (stem, extension) = name.as_str().rsplit_once('.').unwrap();

    assert_eq!(extension, AUDIO_EXTENSION);
    assert!(!stem.is_empty());
    assert!(stem.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn given_stem_when_building_file_name_then_appends_extension() {
    let name = AudioFileName::from_stem("42");

    assert_eq!(name.as_str(), "42.mp3");
    assert_eq!(format!("{}", name), "42.mp3");
}

#[test]
fn given_two_workspace_ids_when_comparing_then_they_differ() {
    let a = WorkspaceId::new();
    let b = WorkspaceId::new();

    assert_ne!(a, b);
    assert_ne!(a.dir_name(), b.dir_name());
}

#[test]
fn given_workspace_id_when_naming_directory_then_uses_prefix_and_uuid() {
    let id = WorkspaceId::new();

    assert_eq!(
        id.dir_name(),
        format!("{}{}", WORKSPACE_PREFIX, id.as_uuid())
    );
}

#[test]
fn given_workspace_when_resolving_file_path_then_joins_file_name() {
    let workspace = Workspace::new(WorkspaceId::new(), PathBuf::from("/tmp/yt-sampler-x"));
    let name = AudioFileName::from_stem("7");

    assert_eq!(
        workspace.file_path(&name),
        PathBuf::from("/tmp/yt-sampler-x/7.mp3")
    );
}

#[test]
fn given_processed_audio_when_measured_then_reports_byte_length() {
    let audio = ProcessedAudio::new(
        AudioFileName::from_stem("1"),
        Bytes::from_static(&[1, 2, 3]),
    );

    assert_eq!(audio.len(), 3);
    assert!(!audio.is_empty());
}
