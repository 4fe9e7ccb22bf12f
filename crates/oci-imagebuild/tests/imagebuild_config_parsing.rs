//! Integration tests for parsing image build configurations.

use std::fs;
use std::path::PathBuf;

use oci_compute::LaunchMode;
use oci_imagebuild::config::DEFAULT_DISK_SIZE_GBS;
use oci_imagebuild::ImageBuildConfig;

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

fn load_config() -> ImageBuildConfig {
    serde_json::from_str(&load_fixture("image_build.json"))
        .unwrap_or_else(|e| panic!("Failed to deserialize image build config: {}", e))
}

#[test]
fn test_deserialize_image_build_config() {
    let config = load_config();

    assert_eq!(config.availability_domain, "Uocm:PHX-AD-3");
    assert_eq!(config.shape, "VM.Standard.E4.Flex");
    assert!(config.subnet_id.is_none());
    assert!(config.base_image_id.is_none());
    assert_eq!(config.image_launch_mode, Some(LaunchMode::Native));
    assert_eq!(config.disk_size, Some(100));
    assert!(config.use_private_ip);

    let vnic = &config.create_vnic_details;
    assert_eq!(vnic.assign_public_ip, Some(false));
    assert_eq!(
        vnic.subnet_id.as_ref().map(|id| id.as_str()),
        Some("ocid1.subnet.oc1.phx.aaaaaaaaprivate")
    );

    let filter = config.base_image_filter.as_ref().unwrap();
    assert_eq!(filter.operating_system.as_deref(), Some("Oracle Linux"));
    assert!(filter.compartment_id.is_none());
    assert!(filter.shape.is_none());
}

#[test]
fn test_prepare_fixture() {
    let config = load_config().prepare().unwrap();

    let compartment = config.compartment().unwrap();
    assert_eq!(compartment.as_str(), "ocid1.compartment.oc1..aaaaaaaabuild");
    assert_eq!(config.image_compartment().unwrap(), compartment);
    assert_eq!(config.image_name.as_deref(), Some("ol8-hardened"));
    // Already base64 encoded, so left as is.
    assert_eq!(
        config.user_data.as_deref(),
        Some("I2Nsb3VkLWNvbmZpZwpwYWNrYWdlX3VwZ3JhZGU6IHRydWUK")
    );

    let filter = config.base_image_filter.as_ref().unwrap();
    assert_eq!(filter.compartment_id.as_ref(), Some(compartment));
    assert_eq!(filter.shape.as_deref(), Some("VM.Standard.E4.Flex"));

    let details = config.create_vnic_details.to_details();
    assert_eq!(details.display_name.as_deref(), Some("builder-vnic"));
    assert_eq!(
        details.freeform_tags.unwrap().get("purpose").map(String::as_str),
        Some("image-build")
    );
}

#[test]
fn test_prepare_defaults_disk_size() {
    let mut config = load_config();
    config.disk_size = None;

    let config = config.prepare().unwrap();
    assert_eq!(config.disk_size, Some(DEFAULT_DISK_SIZE_GBS));
}

#[test]
fn test_serialize_round_trip_keeps_template_keys() {
    let config = load_config();
    let value = serde_json::to_value(&config).unwrap();

    assert_eq!(value["compartment_ocid"], "ocid1.compartment.oc1..aaaaaaaabuild");
    assert_eq!(value["create_vnic_details"]["subnet_ocid"], "ocid1.subnet.oc1.phx.aaaaaaaaprivate");
    assert!(value.get("base_image_ocid").is_none());
}
