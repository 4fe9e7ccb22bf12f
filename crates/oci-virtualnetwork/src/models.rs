//! Virtual Network models: VCNs, subnets, VNICs, network security group rules
//! and BYOIP ranges.

use chrono::{DateTime, Utc};
use oci_core::ocid::{
    ByoipRangeId, CompartmentId, NetworkSecurityGroupId, SubnetId, VcnId, VnicId,
};
use oci_core::oci_enum;
use oci_core::types::{DefinedTags, FreeformTags};
use serde::{Deserialize, Serialize};

oci_enum! {
    /// Lifecycle state of a VCN.
    pub enum VcnLifecycleState {
        /// Being created.
        Provisioning => "PROVISIONING",
        /// Ready.
        Available => "AVAILABLE",
        /// Being deleted.
        Terminating => "TERMINATING",
        /// Deleted.
        Terminated => "TERMINATED",
        /// CIDR blocks are changing.
        Updating => "UPDATING",
    }
}

oci_enum! {
    /// Lifecycle state of a subnet.
    pub enum SubnetLifecycleState {
        /// Being created.
        Provisioning => "PROVISIONING",
        /// Ready.
        Available => "AVAILABLE",
        /// Being deleted.
        Terminating => "TERMINATING",
        /// Deleted.
        Terminated => "TERMINATED",
        /// CIDR block is changing.
        Updating => "UPDATING",
    }
}

oci_enum! {
    /// Lifecycle state of a VNIC.
    pub enum VnicLifecycleState {
        /// Being created.
        Provisioning => "PROVISIONING",
        /// Ready.
        Available => "AVAILABLE",
        /// Being deleted.
        Terminating => "TERMINATING",
        /// Deleted.
        Terminated => "TERMINATED",
    }
}

oci_enum! {
    /// Traffic direction of a security rule.
    pub enum SecurityRuleDirection {
        /// Outbound traffic.
        Egress => "EGRESS",
        /// Inbound traffic.
        Ingress => "INGRESS",
    }
}

oci_enum! {
    /// How the `source` or `destination` of a security rule is expressed.
    pub enum SecurityRuleAddressType {
        /// An IP address range in CIDR notation.
        CidrBlock => "CIDR_BLOCK",
        /// The CIDR label of an Oracle service.
        ServiceCidrBlock => "SERVICE_CIDR_BLOCK",
        /// Another network security group.
        NetworkSecurityGroup => "NETWORK_SECURITY_GROUP",
    }
}

oci_enum! {
    /// Lifecycle state of a BYOIP range.
    pub enum ByoipRangeLifecycleState {
        /// Not yet provisioned.
        Inactive => "INACTIVE",
        /// An operation is in progress.
        Updating => "UPDATING",
        /// Provisioned.
        Active => "ACTIVE",
        /// Being deleted.
        Deleting => "DELETING",
        /// Deleted.
        Deleted => "DELETED",
    }
}

oci_enum! {
    /// Detailed progress of a BYOIP range.
    pub enum ByoipRangeLifecycleDetails {
        /// Being created.
        Creating => "CREATING",
        /// Ownership is being validated.
        Validating => "VALIDATING",
        /// Validated and provisioned.
        Provisioned => "PROVISIONED",
        /// Advertised to the internet.
        Active => "ACTIVE",
        /// Validation or provisioning failed.
        Failed => "FAILED",
        /// Being deleted.
        Deleting => "DELETING",
        /// Deleted.
        Deleted => "DELETED",
        /// Advertisement starting.
        Advertising => "ADVERTISING",
        /// Advertisement stopping.
        Withdrawing => "WITHDRAWING",
    }
}

/// A virtual cloud network.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vcn {
    /// VCN OCID.
    pub id: VcnId,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Current lifecycle state.
    pub lifecycle_state: VcnLifecycleState,
    /// First IPv4 CIDR block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// All IPv4 CIDR blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_blocks: Option<Vec<String>>,
    /// IPv6 CIDR blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipv6_cidr_blocks: Option<Vec<String>>,
    /// Default DHCP options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dhcp_options_id: Option<String>,
    /// Default route table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_route_table_id: Option<String>,
    /// Default security list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_security_list_id: Option<String>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Domain name, e.g. `vcn1.oraclevcn.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vcn_domain_name: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `CreateVcn`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVcnDetails {
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Single IPv4 CIDR block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// IPv4 CIDR blocks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_blocks: Option<Vec<String>>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Assign an IPv6 block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_ipv6_enabled: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateVcnDetails {
    /// VCN covering `cidr_block` in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId, cidr_block: impl Into<String>) -> Self {
        Self {
            compartment_id,
            cidr_block: Some(cidr_block.into()),
            cidr_blocks: None,
            display_name: None,
            dns_label: None,
            is_ipv6_enabled: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}

/// A subnet of a VCN.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subnet {
    /// Subnet OCID.
    pub id: SubnetId,
    /// IPv4 CIDR block.
    pub cidr_block: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Current lifecycle state.
    pub lifecycle_state: SubnetLifecycleState,
    /// Route table.
    pub route_table_id: String,
    /// Parent VCN.
    pub vcn_id: VcnId,
    /// Gateway address of the subnet.
    pub virtual_router_ip: String,
    /// Gateway MAC address.
    pub virtual_router_mac: String,
    /// Availability domain; absent for regional subnets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// DHCP options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp_options_id: Option<String>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Whether VNICs in the subnet may have public IPs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibit_public_ip_on_vnic: Option<bool>,
    /// Security lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_list_ids: Option<Vec<String>>,
    /// Domain name, e.g. `subnet1.vcn1.oraclevcn.com`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_domain_name: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `CreateSubnet`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubnetDetails {
    /// IPv4 CIDR block.
    pub cidr_block: String,
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Parent VCN.
    pub vcn_id: VcnId,
    /// Availability domain; omit for a regional subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// DHCP options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dhcp_options_id: Option<String>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// DNS label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dns_label: Option<String>,
    /// Make the subnet private.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prohibit_public_ip_on_vnic: Option<bool>,
    /// Route table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route_table_id: Option<String>,
    /// Security lists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_list_ids: Option<Vec<String>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateSubnetDetails {
    /// Regional subnet covering `cidr_block` in `vcn_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId, vcn_id: VcnId, cidr_block: impl Into<String>) -> Self {
        Self {
            cidr_block: cidr_block.into(),
            compartment_id,
            vcn_id,
            availability_domain: None,
            dhcp_options_id: None,
            display_name: None,
            dns_label: None,
            prohibit_public_ip_on_vnic: None,
            route_table_id: None,
            security_list_ids: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}

/// A virtual network interface card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vnic {
    /// VNIC OCID.
    pub id: VnicId,
    /// Availability domain.
    pub availability_domain: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Current lifecycle state.
    pub lifecycle_state: VnicLifecycleState,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Hostname for DNS in the VCN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname_label: Option<String>,
    /// Whether this is the primary VNIC of its instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
    /// MAC address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mac_address: Option<String>,
    /// Network security groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<NetworkSecurityGroupId>>,
    /// VLAN, for VNICs in a VLAN rather than a subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<String>,
    /// Primary private IP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
    /// Public IP, if assigned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
    /// Whether source/destination checks are disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_source_dest_check: Option<bool>,
    /// Subnet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<SubnetId>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `UpdateVnic`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVnicDetails {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New hostname.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname_label: Option<String>,
    /// Replacement network security groups; an empty list leaves them all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<NetworkSecurityGroupId>>,
    /// Disable source/destination checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_source_dest_check: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Inclusive port range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PortRange {
    /// Lowest port.
    pub min: u16,
    /// Highest port.
    pub max: u16,
}

impl PortRange {
    /// A range covering exactly `port`.
    #[must_use]
    pub const fn single(port: u16) -> Self {
        Self {
            min: port,
            max: port,
        }
    }
}

/// Port filters for TCP rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TcpOptions {
    /// Destination ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_range: Option<PortRange>,
    /// Source ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_range: Option<PortRange>,
}

/// Port filters for UDP rules.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UdpOptions {
    /// Destination ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_port_range: Option<PortRange>,
    /// Source ports.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_port_range: Option<PortRange>,
}

/// Type and code filters for ICMP rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IcmpOptions {
    /// ICMP type.
    #[serde(rename = "type")]
    pub icmp_type: i32,
    /// ICMP code; all codes when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

/// A rule of a network security group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecurityRule {
    /// Traffic direction.
    pub direction: SecurityRuleDirection,
    /// IANA protocol number or `all`.
    pub protocol: String,
    /// Rule id, unique within the group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Egress destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// How `destination` is expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<SecurityRuleAddressType>,
    /// Ingress source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// How `source` is expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SecurityRuleAddressType>,
    /// ICMP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_options: Option<IcmpOptions>,
    /// TCP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_options: Option<TcpOptions>,
    /// UDP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_options: Option<UdpOptions>,
    /// Stateless rules do not track connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
    /// Whether the rule is currently valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_valid: Option<bool>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
}

/// A rule to add to a network security group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddSecurityRuleDetails {
    /// Traffic direction.
    pub direction: SecurityRuleDirection,
    /// IANA protocol number or `all`.
    pub protocol: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Egress destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// How `destination` is expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<SecurityRuleAddressType>,
    /// Ingress source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// How `source` is expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SecurityRuleAddressType>,
    /// ICMP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_options: Option<IcmpOptions>,
    /// TCP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_options: Option<TcpOptions>,
    /// UDP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_options: Option<UdpOptions>,
    /// Stateless rules do not track connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
}

impl AddSecurityRuleDetails {
    /// Rule for `protocol` traffic in `direction` with no address filter.
    #[must_use]
    pub fn new(direction: SecurityRuleDirection, protocol: impl Into<String>) -> Self {
        Self {
            direction,
            protocol: protocol.into(),
            description: None,
            destination: None,
            destination_type: None,
            source: None,
            source_type: None,
            icmp_options: None,
            tcp_options: None,
            udp_options: None,
            is_stateless: None,
        }
    }

    /// Ingress TCP rule from `cidr` to `port`.
    #[must_use]
    pub fn ingress_tcp(cidr: impl Into<String>, port: u16) -> Self {
        let mut rule = Self::new(SecurityRuleDirection::Ingress, "6");
        rule.source = Some(cidr.into());
        rule.source_type = Some(SecurityRuleAddressType::CidrBlock);
        rule.tcp_options = Some(TcpOptions {
            destination_port_range: Some(PortRange::single(port)),
            source_port_range: None,
        });
        rule
    }
}

/// Replacement for an existing rule, matched by `id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSecurityRuleDetails {
    /// Rule to replace.
    pub id: String,
    /// Traffic direction.
    pub direction: SecurityRuleDirection,
    /// IANA protocol number or `all`.
    pub protocol: String,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Egress destination.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    /// How `destination` is expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_type: Option<SecurityRuleAddressType>,
    /// Ingress source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// How `source` is expressed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<SecurityRuleAddressType>,
    /// ICMP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icmp_options: Option<IcmpOptions>,
    /// TCP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tcp_options: Option<TcpOptions>,
    /// UDP filters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub udp_options: Option<UdpOptions>,
    /// Stateless rules do not track connections.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_stateless: Option<bool>,
}

/// Body of `AddNetworkSecurityGroupSecurityRules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddNetworkSecurityGroupSecurityRulesDetails {
    /// Rules to add; at most 25 per call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_rules: Option<Vec<AddSecurityRuleDetails>>,
}

/// Body of `UpdateNetworkSecurityGroupSecurityRules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNetworkSecurityGroupSecurityRulesDetails {
    /// Rules to replace; at most 25 per call.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_rules: Option<Vec<UpdateSecurityRuleDetails>>,
}

/// Body of `RemoveNetworkSecurityGroupSecurityRules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoveNetworkSecurityGroupSecurityRulesDetails {
    /// Ids of the rules to remove.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_rule_ids: Option<Vec<String>>,
}

/// Rules created by `AddNetworkSecurityGroupSecurityRules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddedNetworkSecurityGroupSecurityRules {
    /// Created rules with their ids.
    #[serde(default)]
    pub security_rules: Vec<SecurityRule>,
}

/// Rules changed by `UpdateNetworkSecurityGroupSecurityRules`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedNetworkSecurityGroupSecurityRules {
    /// Rules after the update.
    #[serde(default)]
    pub security_rules: Vec<SecurityRule>,
}

/// A customer-owned public address range imported into OCI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ByoipRange {
    /// Range OCID.
    pub id: ByoipRangeId,
    /// Public IPv4 CIDR block.
    pub cidr_block: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Current lifecycle state.
    pub lifecycle_state: ByoipRangeLifecycleState,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// Detailed progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<ByoipRangeLifecycleDetails>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Token to publish in the RIR record for ownership validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_token: Option<String>,
    /// When ownership was validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_validated: Option<DateTime<Utc>>,
    /// When the range was last advertised.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_advertised: Option<DateTime<Utc>>,
    /// When the range was last withdrawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_withdrawn: Option<DateTime<Utc>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// List entry of `ListByoipRanges`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ByoipRangeSummary {
    /// Range OCID.
    pub id: ByoipRangeId,
    /// Public IPv4 CIDR block.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cidr_block: Option<String>,
    /// Owning compartment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<CompartmentId>,
    /// Current lifecycle state.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_state: Option<ByoipRangeLifecycleState>,
    /// Detailed progress.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifecycle_details: Option<ByoipRangeLifecycleDetails>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_created: Option<DateTime<Utc>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `ListByoipRanges`; unlike most lists the items are wrapped.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ByoipRangeCollection {
    /// Ranges on this page.
    pub items: Vec<ByoipRangeSummary>,
}

/// Body of `CreateByoipRange`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateByoipRangeDetails {
    /// Public IPv4 CIDR block to import.
    pub cidr_block: String,
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `UpdateByoipRange`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateByoipRangeDetails {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}
