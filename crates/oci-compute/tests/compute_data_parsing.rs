//! Integration tests for parsing Compute data.
//!
//! These tests validate that the oci-compute models deserialize
//! representative instance and image documents.

use std::fs;
use std::path::PathBuf;

use oci_compute::models::{
    BootVolumeType, Firmware, Image, ImageLifecycleState, Instance, InstanceLifecycleState,
    InstanceSourceDetails, LaunchMode,
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

#[test]
fn test_deserialize_instance() {
    let json_data = load_fixture("instance.json");
    let instance: Instance = serde_json::from_str(&json_data).unwrap_or_else(|e| {
        panic!("Failed to deserialize instance: {}\nJSON: {}", e, json_data)
    });

    assert_eq!(instance.lifecycle_state, InstanceLifecycleState::Running);
    assert_eq!(instance.shape, "VM.Standard.E4.Flex");
    assert_eq!(instance.fault_domain.as_deref(), Some("FAULT-DOMAIN-2"));
    assert_eq!(instance.launch_mode, Some(LaunchMode::Paravirtualized));
    assert!(instance.time_maintenance_reboot_due.is_none());

    let options = instance.launch_options.as_ref().expect("launch options");
    assert_eq!(options.firmware, Some(Firmware::Uefi64));
    assert_eq!(options.boot_volume_type, Some(BootVolumeType::Paravirtualized));

    let metadata = instance.metadata.as_ref().expect("metadata");
    assert!(metadata["ssh_authorized_keys"].starts_with("ssh-ed25519"));
    assert!(metadata.contains_key("user_data"));

    match &instance.source_details {
        Some(InstanceSourceDetails::Image(image)) => {
            assert_eq!(image.boot_volume_size_in_gbs, Some(60));
            assert!(image.kms_key_id.is_none());
        }
        other => panic!("unexpected source details: {other:?}"),
    }

    let shape_config = instance.shape_config.as_ref().expect("shape config");
    assert_eq!(shape_config.ocpus, Some(1.0));
    assert_eq!(shape_config.max_vnic_attachments, Some(2));
}

#[test]
fn test_deserialize_image_list() {
    let json_data = load_fixture("image_list.json");
    let images: Vec<Image> = serde_json::from_str(&json_data).unwrap();
    assert_eq!(images.len(), 2, "Expected 2 images in test data");

    let platform = &images[0];
    assert!(platform.compartment_id.is_none());
    assert_eq!(platform.lifecycle_state, ImageLifecycleState::Available);
    assert_eq!(platform.size_in_mbs, Some(47694));
    assert_eq!(platform.billable_size_in_gbs, Some(3));

    let custom = &images[1];
    assert_eq!(custom.launch_mode, Some(LaunchMode::Custom));
    assert_eq!(custom.base_image_id.as_ref(), Some(&platform.id));
    assert_eq!(custom.lifecycle_state, ImageLifecycleState::Provisioning);
}
