//! Compute Management models: instance pools and instance configurations.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use oci_compute::models::{
    CreateVnicDetails, LaunchInstanceAgentConfigDetails, LaunchInstanceShapeConfigDetails,
    LaunchMode, LaunchOptions, Metadata,
};
use oci_core::ocid::{
    BootVolumeId, CompartmentId, DedicatedVmHostId, ImageId, InstanceConfigurationId, InstanceId,
    InstancePoolId, InstancePoolLoadBalancerAttachmentId, KmsKeyId, LoadBalancerId, SubnetId,
    VolumeBackupId, VolumeId,
};
use oci_core::{oci_enum, oci_polymorphic};
use oci_core::types::{DefinedTags, FreeformTags};
use serde::{Deserialize, Serialize};

oci_enum! {
    /// Lifecycle state of an instance pool.
    pub enum InstancePoolLifecycleState {
        /// Instances are being created.
        Provisioning => "PROVISIONING",
        /// The pool size is changing.
        Scaling => "SCALING",
        /// Instances are booting.
        Starting => "STARTING",
        /// Instances are shutting down.
        Stopping => "STOPPING",
        /// The pool is being terminated.
        Terminating => "TERMINATING",
        /// All instances are stopped.
        Stopped => "STOPPED",
        /// Terminated.
        Terminated => "TERMINATED",
        /// All instances are running.
        Running => "RUNNING",
    }
}

oci_enum! {
    /// Lifecycle state of a load balancer attachment of an instance pool.
    pub enum InstancePoolLoadBalancerAttachmentLifecycleState {
        /// Being attached.
        Attaching => "ATTACHING",
        /// Attached.
        Attached => "ATTACHED",
        /// Being detached.
        Detaching => "DETACHING",
        /// Detached.
        Detached => "DETACHED",
    }
}

oci_enum! {
    /// Maintenance handling preferred for instances launched from a configuration.
    pub enum PreferredMaintenanceAction {
        /// Live migrate to a healthy host.
        LiveMigrate => "LIVE_MIGRATE",
        /// Reboot in place.
        Reboot => "REBOOT",
    }
}

oci_enum! {
    /// Recovery action after an infrastructure failure.
    pub enum RecoveryAction {
        /// Restart the instance on a healthy host.
        RestoreInstance => "RESTORE_INSTANCE",
        /// Leave the instance stopped.
        StopInstance => "STOP_INSTANCE",
    }
}

oci_enum! {
    /// NUMA nodes per socket on AMD bare metal shapes.
    pub enum NumaNodesPerSocket {
        /// One node per system.
        Nps0 => "NPS0",
        /// One node per socket.
        Nps1 => "NPS1",
        /// Two nodes per socket.
        Nps2 => "NPS2",
        /// Four nodes per socket.
        Nps4 => "NPS4",
    }
}

/// Secondary VNIC subnet of a placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePoolPlacementSecondaryVnicSubnet {
    /// Subnet.
    pub subnet_id: SubnetId,
    /// VNIC name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Where the instances of a pool are placed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePoolPlacementConfiguration {
    /// Availability domain.
    pub availability_domain: String,
    /// Subnet of the primary VNIC.
    pub primary_subnet_id: SubnetId,
    /// Fault domains to spread instances across.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_domains: Option<Vec<String>>,
    /// Secondary VNIC subnets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_vnic_subnets: Option<Vec<InstancePoolPlacementSecondaryVnicSubnet>>,
}

impl InstancePoolPlacementConfiguration {
    /// Place instances in `availability_domain` on `primary_subnet_id`.
    #[must_use]
    pub fn new(availability_domain: impl Into<String>, primary_subnet_id: SubnetId) -> Self {
        Self {
            availability_domain: availability_domain.into(),
            primary_subnet_id,
            fault_domains: None,
            secondary_vnic_subnets: None,
        }
    }
}

/// A load balancer backend set that pool instances are registered with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePoolLoadBalancerAttachment {
    /// Attachment OCID.
    pub id: InstancePoolLoadBalancerAttachmentId,
    /// Pool.
    pub instance_pool_id: InstancePoolId,
    /// Load balancer.
    pub load_balancer_id: LoadBalancerId,
    /// Backend set.
    pub backend_set_name: String,
    /// Backend port.
    pub port: i32,
    /// `PrimaryVnic` or the display name of a secondary VNIC.
    pub vnic_selection: String,
    /// Current lifecycle state.
    pub lifecycle_state: InstancePoolLoadBalancerAttachmentLifecycleState,
}

/// A group of instances created from one instance configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePool {
    /// Pool OCID.
    pub id: InstancePoolId,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Configuration instances are created from.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Current lifecycle state.
    pub lifecycle_state: InstancePoolLifecycleState,
    /// Placement of instances.
    pub placement_configurations: Vec<InstancePoolPlacementConfiguration>,
    /// Number of instances.
    pub size: i32,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Attached load balancers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<InstancePoolLoadBalancerAttachment>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// List entry of `ListInstancePools`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePoolSummary {
    /// Pool OCID.
    pub id: InstancePoolId,
    /// Availability domains the pool spans.
    pub availability_domains: Vec<String>,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Configuration instances are created from.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Current lifecycle state.
    pub lifecycle_state: InstancePoolLifecycleState,
    /// Number of instances.
    pub size: i32,
    /// Creation time.
    pub time_created: DateTime<Utc>,
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

/// Backend registration of a pool instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePoolInstanceLoadBalancerBackend {
    /// Load balancer.
    pub load_balancer_id: LoadBalancerId,
    /// Backend set.
    pub backend_set_name: String,
    /// Backend name.
    pub backend_name: String,
    /// `OK`, `WARNING`, `CRITICAL` or `UNKNOWN`.
    pub backend_health_status: String,
}

/// Instance that belongs to a pool, as reported by `ListInstancePoolInstances`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstancePoolInstance {
    /// Instance OCID.
    pub id: InstanceId,
    /// Availability domain.
    pub availability_domain: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Region, e.g. `phx`.
    pub region: String,
    /// Lifecycle state of the instance as a string.
    pub state: String,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// Configuration the instance was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<InstanceConfigurationId>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Fault domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_domain: Option<String>,
    /// Shape name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Load balancer backends of the instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancer_backends: Option<Vec<InstancePoolInstanceLoadBalancerBackend>>,
}

/// Body of `AttachLoadBalancer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttachLoadBalancerDetails {
    /// Load balancer.
    pub load_balancer_id: LoadBalancerId,
    /// Backend set.
    pub backend_set_name: String,
    /// Backend port.
    pub port: i32,
    /// `PrimaryVnic` or the display name of a secondary VNIC.
    pub vnic_selection: String,
}

/// Body of `DetachLoadBalancer`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DetachLoadBalancerDetails {
    /// Load balancer.
    pub load_balancer_id: LoadBalancerId,
    /// Backend set.
    pub backend_set_name: String,
}

/// Body of `CreateInstancePool`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateInstancePoolDetails {
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Configuration to create instances from.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Placement of instances.
    pub placement_configurations: Vec<InstancePoolPlacementConfiguration>,
    /// Number of instances.
    pub size: i32,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Load balancers to attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_balancers: Option<Vec<AttachLoadBalancerDetails>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateInstancePoolDetails {
    /// Pool of `size` instances of `instance_configuration_id`.
    #[must_use]
    pub const fn new(
        compartment_id: CompartmentId,
        instance_configuration_id: InstanceConfigurationId,
        placement_configurations: Vec<InstancePoolPlacementConfiguration>,
        size: i32,
    ) -> Self {
        Self {
            compartment_id,
            instance_configuration_id,
            placement_configurations,
            size,
            display_name: None,
            load_balancers: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}

/// Body of `UpdateInstancePool`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstancePoolDetails {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New configuration for instances created from now on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_configuration_id: Option<InstanceConfigurationId>,
    /// New placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placement_configurations: Option<Vec<InstancePoolPlacementConfiguration>>,
    /// New size; the pool scales to it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `ChangeInstancePoolCompartment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeInstancePoolCompartmentDetails {
    /// Destination compartment.
    pub compartment_id: CompartmentId,
}

/// Boot instances from an image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationInstanceSourceViaImageDetails {
    /// Image to boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ImageId>,
    /// Boot volume size in GBs.
    #[serde(rename = "bootVolumeSizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_size_in_gbs: Option<i64>,
}

/// Boot instances from an existing boot volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationInstanceSourceViaBootVolumeDetails {
    /// Boot volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_id: Option<BootVolumeId>,
}

oci_polymorphic! {
    /// Boot source of instances launched from a configuration, selected by
    /// `sourceType`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InstanceConfigurationInstanceSourceDetails: "sourceType" {
        /// Boot from an image.
        Image(InstanceConfigurationInstanceSourceViaImageDetails) => "image",
        /// Boot from an existing boot volume.
        BootVolume(InstanceConfigurationInstanceSourceViaBootVolumeDetails) => "bootVolume",
    }
}

/// Security flags shared by every platform configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformSecurityConfig {
    /// Secure Boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_secure_boot_enabled: Option<bool>,
    /// Trusted Platform Module.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_trusted_platform_module_enabled: Option<bool>,
    /// Measured Boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_measured_boot_enabled: Option<bool>,
}

/// Platform configuration of AMD bare metal shapes.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AmdBmPlatformConfig {
    /// Security flags.
    #[serde(flatten)]
    pub security: PlatformSecurityConfig,
    /// NUMA nodes per socket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numa_nodes_per_socket: Option<NumaNodesPerSocket>,
}

oci_polymorphic! {
    /// Platform settings of launched instances, selected by `type`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InstanceConfigurationLaunchInstancePlatformConfig: "type" {
        /// AMD Milan bare metal.
        AmdMilanBm(AmdBmPlatformConfig) => "AMD_MILAN_BM",
        /// AMD Rome bare metal.
        AmdRomeBm(AmdBmPlatformConfig) => "AMD_ROME_BM",
        /// Intel Skylake bare metal.
        IntelSkylakeBm(PlatformSecurityConfig) => "INTEL_SKYLAKE_BM",
        /// AMD virtual machine.
        AmdVm(PlatformSecurityConfig) => "AMD_VM",
        /// Intel virtual machine.
        IntelVm(PlatformSecurityConfig) => "INTEL_VM",
    }
}

/// Availability settings of launched instances.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationAvailabilityConfig {
    /// Recovery action after an infrastructure failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recovery_action: Option<RecoveryAction>,
}

/// Launch parameters of instances created from a configuration.
///
/// Every field is optional; `LaunchInstanceConfiguration` callers supply the
/// placement fields that the stored configuration leaves out.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationLaunchInstanceDetails {
    /// Availability domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// Target compartment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<CompartmentId>,
    /// Primary VNIC parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_vnic_details: Option<CreateVnicDetails>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Nested metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_metadata: Option<HashMap<String, serde_json::Value>>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// iPXE script run at boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipxe_script: Option<String>,
    /// Cloud-init metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Shape name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Flexible shape resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_config: Option<LaunchInstanceShapeConfigDetails>,
    /// Boot source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<InstanceConfigurationInstanceSourceDetails>,
    /// Fault domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_domain: Option<String>,
    /// Dedicated host to launch on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_vm_host_id: Option<DedicatedVmHostId>,
    /// Launch mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_mode: Option<LaunchMode>,
    /// Emulation options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_options: Option<LaunchOptions>,
    /// Oracle Cloud Agent settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_config: Option<LaunchInstanceAgentConfigDetails>,
    /// Whether paravirtualized traffic is encrypted in transit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: Option<bool>,
    /// Maintenance handling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_maintenance_action: Option<PreferredMaintenanceAction>,
    /// Availability settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_config: Option<InstanceConfigurationAvailabilityConfig>,
    /// Platform settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_config: Option<InstanceConfigurationLaunchInstancePlatformConfig>,
}

/// Clone an existing volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceConfigurationVolumeSourceFromVolumeDetails {
    /// Source volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VolumeId>,
}

/// Restore a volume backup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceConfigurationVolumeSourceFromVolumeBackupDetails {
    /// Source backup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<VolumeBackupId>,
}

oci_polymorphic! {
    /// Source of a volume created with a configuration, selected by `type`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InstanceConfigurationVolumeSourceDetails: "type" {
        /// Clone an existing volume.
        Volume(InstanceConfigurationVolumeSourceFromVolumeDetails) => "volume",
        /// Restore a volume backup.
        VolumeBackup(InstanceConfigurationVolumeSourceFromVolumeBackupDetails) => "volumeBackup",
    }
}

/// iSCSI attachment of a configured volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationIscsiAttachVolumeDetails {
    /// Attachment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Attach read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    /// Device path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Attach in shared mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shareable: Option<bool>,
    /// Use CHAP authentication.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_chap: Option<bool>,
}

/// Paravirtualized attachment of a configured volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationParavirtualizedAttachVolumeDetails {
    /// Attachment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Attach read-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_read_only: Option<bool>,
    /// Device path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    /// Attach in shared mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_shareable: Option<bool>,
    /// Whether traffic is encrypted in transit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: Option<bool>,
}

oci_polymorphic! {
    /// How a configured volume is attached, selected by `type`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InstanceConfigurationAttachVolumeDetails: "type" {
        /// iSCSI attachment.
        Iscsi(InstanceConfigurationIscsiAttachVolumeDetails) => "iscsi",
        /// Paravirtualized attachment.
        Paravirtualized(InstanceConfigurationParavirtualizedAttachVolumeDetails) => "paravirtualized",
    }
}

/// Volume created with each instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationCreateVolumeDetails {
    /// Availability domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// Backup policy to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_policy_id: Option<String>,
    /// Target compartment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<CompartmentId>,
    /// Volume name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Encryption key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
    /// Performance units per GB.
    #[serde(rename = "vpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub vpus_per_gb: Option<i64>,
    /// Size in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Clone or restore source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<InstanceConfigurationVolumeSourceDetails>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Block volume attached to each instance, either existing or created.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationBlockVolumeDetails {
    /// Attachment parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attach_details: Option<InstanceConfigurationAttachVolumeDetails>,
    /// Volume to create.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_details: Option<InstanceConfigurationCreateVolumeDetails>,
    /// Existing volume to attach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<VolumeId>,
}

/// Secondary VNIC attached to each instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationAttachVnicDetails {
    /// VNIC parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_vnic_details: Option<CreateVnicDetails>,
    /// Attachment name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Physical NIC index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_index: Option<i32>,
}

/// A compute instance with optional volumes and secondary VNICs.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComputeInstanceDetails {
    /// Block volumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_volumes: Option<Vec<InstanceConfigurationBlockVolumeDetails>>,
    /// Launch parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_details: Option<InstanceConfigurationLaunchInstanceDetails>,
    /// Secondary VNICs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_vnics: Option<Vec<InstanceConfigurationAttachVnicDetails>>,
}

oci_polymorphic! {
    /// What an instance configuration launches, selected by `instanceType`.
    #[derive(Debug, Clone, PartialEq)]
    pub enum InstanceConfigurationInstanceDetails: "instanceType" {
        /// A compute instance.
        Compute(ComputeInstanceDetails) => "compute",
    }
}

impl InstanceConfigurationInstanceDetails {
    /// Compute instance launched with `launch_details` only.
    #[must_use]
    pub const fn compute(launch_details: InstanceConfigurationLaunchInstanceDetails) -> Self {
        Self::Compute(ComputeInstanceDetails {
            block_volumes: None,
            launch_details: Some(launch_details),
            secondary_vnics: None,
        })
    }
}

/// A reusable template for launching instances.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfiguration {
    /// Configuration OCID.
    pub id: InstanceConfigurationId,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// What the configuration launches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_details: Option<InstanceConfigurationInstanceDetails>,
    /// Fields left unset because they are instance specific.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deferred_fields: Option<Vec<String>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// List entry of `ListInstanceConfigurations`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceConfigurationSummary {
    /// Configuration OCID.
    pub id: InstanceConfigurationId,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Creation time.
    pub time_created: DateTime<Utc>,
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

/// Body of `CreateInstanceConfiguration`, selected by `source`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source")]
pub enum CreateInstanceConfigurationDetails {
    /// Configuration written out in full.
    #[serde(rename = "NONE", rename_all = "camelCase")]
    None {
        /// Target compartment.
        compartment_id: CompartmentId,
        /// What the configuration launches.
        instance_details: InstanceConfigurationInstanceDetails,
        /// User-friendly name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        /// Defined tags.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        defined_tags: Option<DefinedTags>,
        /// Free-form tags.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        freeform_tags: Option<FreeformTags>,
    },
    /// Configuration captured from a running instance.
    #[serde(rename = "INSTANCE", rename_all = "camelCase")]
    Instance {
        /// Target compartment.
        compartment_id: CompartmentId,
        /// Instance to capture.
        instance_id: InstanceId,
        /// User-friendly name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        display_name: Option<String>,
        /// Defined tags.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        defined_tags: Option<DefinedTags>,
        /// Free-form tags.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        freeform_tags: Option<FreeformTags>,
    },
}

impl CreateInstanceConfigurationDetails {
    /// Configuration launching `instance_details`.
    #[must_use]
    pub const fn from_details(
        compartment_id: CompartmentId,
        instance_details: InstanceConfigurationInstanceDetails,
    ) -> Self {
        Self::None {
            compartment_id,
            instance_details,
            display_name: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }

    /// Configuration captured from `instance_id`.
    #[must_use]
    pub const fn from_instance(compartment_id: CompartmentId, instance_id: InstanceId) -> Self {
        Self::Instance {
            compartment_id,
            instance_id,
            display_name: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }

    /// Value of the `source` discriminator.
    #[must_use]
    pub const fn source(&self) -> &'static str {
        match self {
            Self::None { .. } => "NONE",
            Self::Instance { .. } => "INSTANCE",
        }
    }
}

/// Body of `UpdateInstanceConfiguration`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateInstanceConfigurationDetails {
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
