//! Integration tests for parsing Block Storage data.
//!
//! These tests validate that the oci-blockstorage models deserialize
//! representative service responses, including fields and discriminators the
//! models do not know about.

use std::fs;
use std::path::PathBuf;

use oci_blockstorage::models::{
    BootVolumeBackup, Volume, VolumeBackupLifecycleState, VolumeBackupSourceType,
    VolumeBackupType, VolumeLifecycleState, VolumeSourceDetails,
};

/// Get the path to the test fixtures directory.
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn load_fixture(name: &str) -> String {
    let fixture_path = fixtures_dir().join(name);
    fs::read_to_string(&fixture_path).unwrap_or_else(|e| {
        panic!(
            "Failed to read fixture at {}: {}",
            fixture_path.display(),
            e
        )
    })
}

fn load_volumes() -> Vec<Volume> {
    let json_data = load_fixture("volume_list.json");
    serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!("Failed to deserialize volume list: {}\nJSON: {}", e, json_data)
    })
}

#[test]
fn test_deserialize_volume_list() {
    let volumes = load_volumes();
    assert_eq!(volumes.len(), 2, "Expected 2 volumes in test data");
}

#[test]
fn test_restored_volume() {
    let volumes = load_volumes();
    let volume = &volumes[0];

    assert_eq!(volume.display_name, "build-cache");
    assert_eq!(volume.lifecycle_state, VolumeLifecycleState::Available);
    assert_eq!(volume.size_in_gbs, Some(50));
    assert_eq!(volume.size_in_mbs, 51200);
    assert_eq!(volume.vpus_per_gb, Some(20));
    assert_eq!(volume.auto_tuned_vpus_per_gb, Some(10));
    assert_eq!(volume.is_hydrated, Some(true));
    assert!(volume.volume_group_id.is_none());

    match &volume.source_details {
        Some(VolumeSourceDetails::VolumeBackup(backup)) => {
            assert!(backup.id.as_str().starts_with("ocid1.volumebackup."));
        }
        other => panic!("unexpected source details: {other:?}"),
    }

    let tags = volume.defined_tags.as_ref().expect("defined tags");
    assert_eq!(tags["Operations"]["CostCenter"], "42");
    assert_eq!(
        volume.freeform_tags.as_ref().and_then(|t| t.get("team")).map(String::as_str),
        Some("images")
    );
}

#[test]
fn test_unknown_source_type_and_extra_fields() {
    let volumes = load_volumes();
    let volume = &volumes[1];

    assert_eq!(volume.lifecycle_state, VolumeLifecycleState::Provisioning);
    let source = volume.source_details.as_ref().expect("source details");
    assert!(source.is_unknown());
    assert_eq!(source.kind(), "blockVolumeReplica");
    assert!(volume.size_in_gbs.is_none());
    assert!(volume.system_tags.is_some());
}

#[test]
fn test_volume_serialization_keeps_wire_names() {
    let volumes = load_volumes();
    let json = serde_json::to_value(&volumes[0]).unwrap();

    assert_eq!(json["sizeInGBs"], 50);
    assert_eq!(json["vpusPerGB"], 20);
    assert_eq!(json["autoTunedVpusPerGB"], 10);
    assert_eq!(json["sourceDetails"]["type"], "volumeBackup");
    assert!(json.get("volumeGroupId").is_none());
}

#[test]
fn test_deserialize_boot_volume_backup() {
    let json_data = load_fixture("boot_volume_backup.json");
    let backup: BootVolumeBackup = serde_json::from_str(&json_data).unwrap();

    assert_eq!(backup.display_name, "packer-base-backup");
    assert_eq!(backup.lifecycle_state, VolumeBackupLifecycleState::Available);
    assert_eq!(backup.backup_type, Some(VolumeBackupType::Full));
    assert_eq!(backup.source_type, Some(VolumeBackupSourceType::Manual));
    assert_eq!(backup.unique_size_in_gbs, Some(12));
    assert!(backup.expiration_time.is_none());
    assert!(backup.image_id.is_some());
}
