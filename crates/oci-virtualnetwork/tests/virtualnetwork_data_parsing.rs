//! Integration tests for parsing Virtual Network data.
//!
//! These tests validate that the oci-virtualnetwork models deserialize
//! representative security rule and BYOIP range documents.

use std::fs;
use std::path::PathBuf;

use oci_virtualnetwork::models::{
    ByoipRange, ByoipRangeLifecycleDetails, ByoipRangeLifecycleState, PortRange, SecurityRule,
    SecurityRuleAddressType, SecurityRuleDirection,
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
fn test_deserialize_security_rules() {
    let json_data = load_fixture("security_rules.json");
    let rules: Vec<SecurityRule> = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize security rules: {}", e));

    assert_eq!(rules.len(), 4);

    let ssh = &rules[0];
    assert_eq!(ssh.direction, SecurityRuleDirection::Ingress);
    assert_eq!(ssh.source_type, Some(SecurityRuleAddressType::CidrBlock));
    assert_eq!(
        ssh.tcp_options.as_ref().and_then(|o| o.destination_port_range),
        Some(PortRange::single(22))
    );

    let icmp = rules[1].icmp_options.as_ref().expect("icmp options");
    assert_eq!(icmp.icmp_type, 3);
    assert_eq!(icmp.code, Some(4));
    assert_eq!(
        rules[1].source_type,
        Some(SecurityRuleAddressType::NetworkSecurityGroup)
    );

    assert_eq!(rules[2].direction, SecurityRuleDirection::Egress);
    assert_eq!(
        rules[2].destination_type,
        Some(SecurityRuleAddressType::ServiceCidrBlock)
    );

    let udp = &rules[3];
    assert!(udp.time_created.is_none());
    assert_eq!(udp.is_valid, Some(false));
    assert_eq!(
        udp.destination_type.as_ref().map(SecurityRuleAddressType::as_str),
        Some("PRIVATE_ENDPOINT")
    );
    let ports = udp
        .udp_options
        .as_ref()
        .and_then(|o| o.source_port_range)
        .expect("udp source ports");
    assert_eq!((ports.min, ports.max), (1024, 65535));
}

#[test]
fn test_deserialize_byoip_range() {
    let json_data = load_fixture("byoip_range.json");
    let range: ByoipRange = serde_json::from_str(&json_data)
        .unwrap_or_else(|e| panic!("Failed to deserialize BYOIP range: {}\nJSON: {}", e, json_data));

    assert_eq!(range.cidr_block, "203.0.113.0/24");
    assert_eq!(range.lifecycle_state, ByoipRangeLifecycleState::Active);
    assert_eq!(range.lifecycle_details, Some(ByoipRangeLifecycleDetails::Active));
    assert!(range.time_validated.unwrap() < range.time_advertised.unwrap());
    assert!(range.time_withdrawn.is_none());
    assert_eq!(range.validation_token.as_deref(), Some("b2Np-1d2Y3Jv"));
}
