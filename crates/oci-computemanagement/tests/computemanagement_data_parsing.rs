//! Integration tests for parsing Compute Management data.
//!
//! These tests validate that the oci-computemanagement models deserialize
//! representative instance configuration and instance pool documents.

use std::fs;
use std::path::PathBuf;

use oci_compute::models::LaunchMode;
use oci_computemanagement::models::{
    ComputeInstanceDetails, InstanceConfiguration, InstanceConfigurationAttachVolumeDetails,
    InstanceConfigurationInstanceDetails, InstanceConfigurationInstanceSourceDetails,
    InstanceConfigurationLaunchInstancePlatformConfig, InstancePoolLifecycleState,
    InstancePoolSummary, PreferredMaintenanceAction, RecoveryAction,
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
fn test_deserialize_instance_configuration() {
    let json_data = load_fixture("instance_configuration.json");
    let configuration: InstanceConfiguration = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| {
            panic!(
                "Failed to deserialize instance configuration: {}\nJSON: {}",
                e, json_data
            )
        });

    assert_eq!(configuration.display_name.as_deref(), Some("web-tier"));
    assert_eq!(configuration.deferred_fields.as_ref().map(Vec::len), Some(1));

    let Some(InstanceConfigurationInstanceDetails::Compute(ComputeInstanceDetails {
        block_volumes,
        launch_details,
        secondary_vnics,
    })) = configuration.instance_details
    else {
        panic!("expected compute instance details");
    };

    let launch = launch_details.expect("launch details");
    assert_eq!(launch.shape.as_deref(), Some("VM.Standard.E4.Flex"));
    assert_eq!(launch.launch_mode, Some(LaunchMode::Paravirtualized));
    assert_eq!(
        launch.preferred_maintenance_action,
        Some(PreferredMaintenanceAction::LiveMigrate)
    );
    assert_eq!(
        launch.availability_config.and_then(|c| c.recovery_action),
        Some(RecoveryAction::RestoreInstance)
    );
    assert!(launch.ipxe_script.is_none());
    assert_eq!(
        launch.shape_config.and_then(|c| c.memory_in_gbs),
        Some(32.0)
    );
    match launch.source_details {
        Some(InstanceConfigurationInstanceSourceDetails::Image(image)) => {
            assert_eq!(image.boot_volume_size_in_gbs, Some(100));
        }
        other => panic!("unexpected source details {other:?}"),
    }
    match launch.platform_config {
        Some(InstanceConfigurationLaunchInstancePlatformConfig::AmdVm(flags)) => {
            assert_eq!(flags.is_measured_boot_enabled, Some(true));
            assert!(flags.is_secure_boot_enabled.is_none());
        }
        other => panic!("unexpected platform config {other:?}"),
    }

    let volumes = block_volumes.expect("block volumes");
    assert_eq!(volumes.len(), 2);
    match &volumes[0].attach_details {
        Some(InstanceConfigurationAttachVolumeDetails::Iscsi(iscsi)) => {
            assert_eq!(iscsi.use_chap, Some(true));
            assert_eq!(iscsi.display_name.as_deref(), Some("data"));
        }
        other => panic!("unexpected attach details {other:?}"),
    }
    assert_eq!(
        volumes[0].create_details.as_ref().and_then(|d| d.size_in_gbs),
        Some(512)
    );
    // Attachment types added after these bindings still decode.
    let attach = volumes[1].attach_details.as_ref().expect("attach details");
    assert!(attach.is_unknown());
    assert_eq!(attach.kind(), "nvme");

    let vnics = secondary_vnics.expect("secondary vnics");
    assert_eq!(vnics[0].nic_index, Some(1));
}

#[test]
fn test_deserialize_instance_pool_list() {
    let json_data = load_fixture("instance_pool_list.json");
    let pools: Vec<InstancePoolSummary> = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize instance pools: {}", e));

    assert_eq!(pools.len(), 2);
    assert_eq!(pools[0].lifecycle_state, InstancePoolLifecycleState::Running);
    assert_eq!(pools[0].availability_domains.len(), 2);
    assert!(pools[0].defined_tags.is_some());

    assert_eq!(
        pools[1].lifecycle_state,
        InstancePoolLifecycleState::Unknown("HIBERNATING".to_string())
    );
    assert_eq!(pools[1].size, 0);
    assert!(pools[1].display_name.is_none());
}
