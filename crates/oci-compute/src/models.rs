//! Compute models: instances, images and VNIC attachments.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use oci_core::ocid::{
    BootVolumeId, CompartmentId, DedicatedVmHostId, ImageId, InstanceId, KmsKeyId,
    NetworkSecurityGroupId, SubnetId, VnicAttachmentId, VnicId,
};
use oci_core::{oci_enum, oci_polymorphic};
use oci_core::types::{DefinedTags, FreeformTags};
use serde::{Deserialize, Serialize};

/// Instance metadata passed to cloud-init, such as `ssh_authorized_keys` and
/// `user_data`.
pub type Metadata = HashMap<String, String>;

oci_enum! {
    /// Lifecycle state of an instance.
    pub enum InstanceLifecycleState {
        /// Being moved between hosts.
        Moving => "MOVING",
        /// Being created.
        Provisioning => "PROVISIONING",
        /// Running.
        Running => "RUNNING",
        /// Booting.
        Starting => "STARTING",
        /// Shutting down.
        Stopping => "STOPPING",
        /// Stopped.
        Stopped => "STOPPED",
        /// A custom image is being captured.
        CreatingImage => "CREATING_IMAGE",
        /// Being terminated.
        Terminating => "TERMINATING",
        /// Terminated.
        Terminated => "TERMINATED",
    }
}

oci_enum! {
    /// Lifecycle state of an image.
    pub enum ImageLifecycleState {
        /// Being captured.
        Provisioning => "PROVISIONING",
        /// Being imported from object storage.
        Importing => "IMPORTING",
        /// Ready for launches.
        Available => "AVAILABLE",
        /// Being exported to object storage.
        Exporting => "EXPORTING",
        /// Unusable.
        Disabled => "DISABLED",
        /// Deleted.
        Deleted => "DELETED",
    }
}

oci_enum! {
    /// Lifecycle state of a VNIC attachment.
    pub enum VnicAttachmentLifecycleState {
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
    /// Power action accepted by `InstanceAction`.
    pub enum InstanceAction {
        /// Power off.
        Stop => "STOP",
        /// Power on.
        Start => "START",
        /// ACPI reboot.
        Softreset => "SOFTRESET",
        /// Hard reset.
        Reset => "RESET",
        /// ACPI shutdown.
        Softstop => "SOFTSTOP",
        /// Send a diagnostic interrupt.
        SendDiagnosticInterrupt => "SENDDIAGNOSTICINTERRUPT",
    }
}

oci_enum! {
    /// How an image or instance is launched.
    pub enum LaunchMode {
        /// VM with native interfaces.
        Native => "NATIVE",
        /// VM with emulated devices.
        Emulated => "EMULATED",
        /// VM with paravirtualized devices.
        Paravirtualized => "PARAVIRTUALIZED",
        /// Configured through `launchOptions`.
        Custom => "CUSTOM",
    }
}

oci_enum! {
    /// Emulation type of the boot volume.
    pub enum BootVolumeType {
        /// iSCSI attached.
        Iscsi => "ISCSI",
        /// Emulated SCSI.
        Scsi => "SCSI",
        /// Emulated IDE.
        Ide => "IDE",
        /// Direct device access.
        Vfio => "VFIO",
        /// Paravirtualized disk.
        Paravirtualized => "PARAVIRTUALIZED",
    }
}

oci_enum! {
    /// Firmware used to boot the instance.
    pub enum Firmware {
        /// Legacy BIOS.
        Bios => "BIOS",
        /// 64-bit UEFI.
        Uefi64 => "UEFI_64",
    }
}

oci_enum! {
    /// Emulation type of the primary NIC.
    pub enum NetworkType {
        /// Emulated Intel gigabit NIC.
        E1000 => "E1000",
        /// SR-IOV.
        Vfio => "VFIO",
        /// Paravirtualized NIC.
        Paravirtualized => "PARAVIRTUALIZED",
    }
}

/// Hardware emulation options for an instance or image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchOptions {
    /// Boot volume emulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_type: Option<BootVolumeType>,
    /// Firmware.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware: Option<Firmware>,
    /// NIC emulation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_type: Option<NetworkType>,
    /// Emulation of attached data volumes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_data_volume_type: Option<BootVolumeType>,
    /// Whether paravirtualized traffic is encrypted in transit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: Option<bool>,
    /// Whether attached volumes get consistent device paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_consistent_volume_naming_enabled: Option<bool>,
}

/// Resources of a flexible shape as reported on an instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceShapeConfig {
    /// OCPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocpus: Option<f32>,
    /// Memory in GBs.
    #[serde(rename = "memoryInGBs", default, skip_serializing_if = "Option::is_none")]
    pub memory_in_gbs: Option<f32>,
    /// CPU model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor_description: Option<String>,
    /// Network bandwidth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub networking_bandwidth_in_gbps: Option<f32>,
    /// Maximum VNIC attachments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_vnic_attachments: Option<i32>,
    /// GPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gpus: Option<i32>,
    /// Local disks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_disks: Option<i32>,
}

/// Requested resources for a flexible shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceShapeConfigDetails {
    /// OCPUs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocpus: Option<f32>,
    /// Memory in GBs.
    #[serde(rename = "memoryInGBs", default, skip_serializing_if = "Option::is_none")]
    pub memory_in_gbs: Option<f32>,
}

/// Oracle Cloud Agent settings for a new instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceAgentConfigDetails {
    /// Disable monitoring plugins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_monitoring_disabled: Option<bool>,
    /// Disable management plugins.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_management_disabled: Option<bool>,
}

/// Parameters of the primary VNIC created with an instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVnicDetails {
    /// Whether to assign a public IP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_public_ip: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// VNIC name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Hostname for DNS in the VCN.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname_label: Option<String>,
    /// Network security groups to join.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<NetworkSecurityGroupId>>,
    /// Fixed private IP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
    /// Disable source/destination checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_source_dest_check: Option<bool>,
    /// Subnet to place the VNIC in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<SubnetId>,
}

/// Boot from a new boot volume created from an image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSourceViaImageDetails {
    /// Image to boot.
    pub image_id: ImageId,
    /// Boot volume size in GBs; defaults to the image size.
    #[serde(rename = "bootVolumeSizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_size_in_gbs: Option<i64>,
    /// Key for the new boot volume.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
}

/// Boot from an existing boot volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSourceViaBootVolumeDetails {
    /// Boot volume to attach.
    pub boot_volume_id: BootVolumeId,
}

oci_polymorphic! {
    /// Boot source of an instance, selected by `sourceType`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum InstanceSourceDetails: "sourceType" {
        /// Boot from a new boot volume created from an image.
        Image(InstanceSourceViaImageDetails) => "image",
        /// Boot from an existing boot volume.
        BootVolume(InstanceSourceViaBootVolumeDetails) => "bootVolume",
    }
}

impl InstanceSourceDetails {
    /// Boot from `image_id` with the default boot volume size.
    #[must_use]
    pub const fn from_image(image_id: ImageId) -> Self {
        Self::Image(InstanceSourceViaImageDetails {
            image_id,
            boot_volume_size_in_gbs: None,
            kms_key_id: None,
        })
    }
}

/// A compute instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Instance {
    /// Instance OCID.
    pub id: InstanceId,
    /// Availability domain.
    pub availability_domain: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Current lifecycle state.
    pub lifecycle_state: InstanceLifecycleState,
    /// Region, e.g. `phx`.
    pub region: String,
    /// Shape name, e.g. `VM.Standard.E4.Flex`.
    pub shape: String,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Dedicated host the instance runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_vm_host_id: Option<DedicatedVmHostId>,
    /// Fault domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_domain: Option<String>,
    /// Image the instance was launched from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ImageId>,
    /// iPXE script run at boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipxe_script: Option<String>,
    /// Launch mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_mode: Option<LaunchMode>,
    /// Emulation options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_options: Option<LaunchOptions>,
    /// Cloud-init metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Nested metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_metadata: Option<HashMap<String, serde_json::Value>>,
    /// Flexible shape resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_config: Option<InstanceShapeConfig>,
    /// Boot source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<InstanceSourceDetails>,
    /// Scheduled maintenance reboot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_maintenance_reboot_due: Option<DateTime<Utc>>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// System tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_tags: Option<DefinedTags>,
}

/// Body of `LaunchInstance`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LaunchInstanceDetails {
    /// Availability domain.
    pub availability_domain: String,
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Shape name.
    pub shape: String,
    /// Primary VNIC parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_vnic_details: Option<CreateVnicDetails>,
    /// Dedicated host to launch on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dedicated_vm_host_id: Option<DedicatedVmHostId>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Nested metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_metadata: Option<HashMap<String, serde_json::Value>>,
    /// Fault domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fault_domain: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Hostname (superseded by `createVnicDetails.hostnameLabel`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname_label: Option<String>,
    /// Image to boot (superseded by `sourceDetails`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ImageId>,
    /// iPXE script run at boot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipxe_script: Option<String>,
    /// Emulation options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_options: Option<LaunchOptions>,
    /// Cloud-init metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    /// Oracle Cloud Agent settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_config: Option<LaunchInstanceAgentConfigDetails>,
    /// Flexible shape resources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape_config: Option<LaunchInstanceShapeConfigDetails>,
    /// Boot source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<InstanceSourceDetails>,
    /// Subnet (superseded by `createVnicDetails.subnetId`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<SubnetId>,
    /// Whether paravirtualized traffic is encrypted in transit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_pv_encryption_in_transit_enabled: Option<bool>,
}

impl LaunchInstanceDetails {
    /// Minimal launch details; everything else uses service defaults.
    #[must_use]
    pub fn new(
        availability_domain: impl Into<String>,
        compartment_id: CompartmentId,
        shape: impl Into<String>,
    ) -> Self {
        Self {
            availability_domain: availability_domain.into(),
            compartment_id,
            shape: shape.into(),
            create_vnic_details: None,
            dedicated_vm_host_id: None,
            defined_tags: None,
            display_name: None,
            extended_metadata: None,
            fault_domain: None,
            freeform_tags: None,
            hostname_label: None,
            image_id: None,
            ipxe_script: None,
            launch_options: None,
            metadata: None,
            agent_config: None,
            shape_config: None,
            source_details: None,
            subnet_id: None,
            is_pv_encryption_in_transit_enabled: None,
        }
    }
}

/// A boot disk image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Image OCID.
    pub id: ImageId,
    /// Owning compartment; absent for platform images.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<CompartmentId>,
    /// Whether custom images may be created from instances of this image.
    pub create_image_allowed: bool,
    /// Current lifecycle state.
    pub lifecycle_state: ImageLifecycleState,
    /// Operating system, e.g. `Oracle Linux`.
    pub operating_system: String,
    /// Operating system version, e.g. `8`.
    pub operating_system_version: String,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// Image this one was derived from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image_id: Option<ImageId>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Launch mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_mode: Option<LaunchMode>,
    /// Emulation options.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_options: Option<LaunchOptions>,
    /// Size in MBs.
    #[serde(rename = "sizeInMBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_mbs: Option<i64>,
    /// Billable size in GBs.
    #[serde(rename = "billableSizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub billable_size_in_gbs: Option<i64>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Imported image addressed by namespace, bucket and object name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSourceViaObjectStorageTupleDetails {
    /// Object storage namespace.
    pub namespace_name: String,
    /// Bucket.
    pub bucket_name: String,
    /// Object.
    pub object_name: String,
    /// `QCOW2` or `VMDK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_image_type: Option<String>,
}

/// Imported image addressed by a pre-authenticated or public object URI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ImageSourceViaObjectStorageUriDetails {
    /// Object URI.
    pub source_uri: String,
    /// `QCOW2` or `VMDK`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_image_type: Option<String>,
}

oci_polymorphic! {
    /// Object storage source of an imported image, selected by `sourceType`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum ImageSourceDetails: "sourceType" {
        /// Namespace, bucket and object name.
        ObjectStorageTuple(ImageSourceViaObjectStorageTupleDetails) => "objectStorageTuple",
        /// Pre-authenticated or public object URI.
        ObjectStorageUri(ImageSourceViaObjectStorageUriDetails) => "objectStorageUri",
    }
}

/// Body of `CreateImage`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateImageDetails {
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Image name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
    /// Instance to capture.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<InstanceId>,
    /// Import source, instead of capturing an instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_source_details: Option<ImageSourceDetails>,
    /// Launch mode of the new image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_mode: Option<LaunchMode>,
}

impl CreateImageDetails {
    /// Capture `instance_id` into `compartment_id`.
    #[must_use]
    pub const fn from_instance(compartment_id: CompartmentId, instance_id: InstanceId) -> Self {
        Self {
            compartment_id,
            defined_tags: None,
            display_name: None,
            freeform_tags: None,
            instance_id: Some(instance_id),
            image_source_details: None,
            launch_mode: None,
        }
    }
}

/// Attachment of a VNIC to an instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VnicAttachment {
    /// Attachment OCID.
    pub id: VnicAttachmentId,
    /// Availability domain.
    pub availability_domain: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Attached instance.
    pub instance_id: InstanceId,
    /// Current lifecycle state.
    pub lifecycle_state: VnicAttachmentLifecycleState,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Physical NIC index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic_index: Option<i32>,
    /// Subnet of the VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<SubnetId>,
    /// VLAN tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vlan_tag: Option<i32>,
    /// Attached VNIC; absent while attaching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vnic_id: Option<VnicId>,
}

/// Initial Windows administrator credentials.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstanceCredentials {
    /// Username.
    pub username: String,
    /// One-time password.
    pub password: String,
}

impl std::fmt::Debug for InstanceCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_instance_source_details_image() {
        let source = InstanceSourceDetails::Image(InstanceSourceViaImageDetails {
            image_id: ImageId::new("ocid1.image.oc1.phx.a"),
            boot_volume_size_in_gbs: Some(100),
            kms_key_id: None,
        });
        let json = serde_json::to_value(&source).unwrap();
        assert_eq!(
            json,
            json!({
                "sourceType": "image",
                "imageId": "ocid1.image.oc1.phx.a",
                "bootVolumeSizeInGBs": 100
            })
        );
        let back: InstanceSourceDetails = serde_json::from_value(json).unwrap();
        assert_eq!(back, source);
    }

    #[test]
    fn test_instance_source_details_boot_volume_and_unknown() {
        let source: InstanceSourceDetails = serde_json::from_value(json!({
            "sourceType": "bootVolume",
            "bootVolumeId": "ocid1.bootvolume.oc1.phx.a"
        }))
        .unwrap();
        assert_eq!(source.kind(), "bootVolume");

        let input = json!({"sourceType": "volumeGroup", "volumeGroupId": "ocid1.volumegroup.oc1.phx.a"});
        let source: InstanceSourceDetails = serde_json::from_value(input.clone()).unwrap();
        assert!(source.is_unknown());
        assert_eq!(source.kind(), "volumeGroup");
        assert_eq!(serde_json::to_value(&source).unwrap(), input);
    }

    #[test]
    fn test_image_source_details_tuple() {
        let source: ImageSourceDetails = serde_json::from_value(json!({
            "sourceType": "objectStorageTuple",
            "namespaceName": "ns",
            "bucketName": "images",
            "objectName": "base.qcow2",
            "sourceImageType": "QCOW2"
        }))
        .unwrap();
        match &source {
            ImageSourceDetails::ObjectStorageTuple(tuple) => {
                assert_eq!(tuple.bucket_name, "images");
                assert_eq!(tuple.source_image_type.as_deref(), Some("QCOW2"));
            }
            other => panic!("unexpected source: {other:?}"),
        }
        assert_eq!(ImageSourceDetails::values(), vec!["objectStorageTuple", "objectStorageUri"]);
    }

    #[test]
    fn test_launch_options_enums() {
        let options: LaunchOptions = serde_json::from_value(json!({
            "bootVolumeType": "PARAVIRTUALIZED",
            "firmware": "UEFI_64",
            "networkType": "VFIO",
            "remoteDataVolumeType": "NVME"
        }))
        .unwrap();
        assert_eq!(options.boot_volume_type, Some(BootVolumeType::Paravirtualized));
        assert_eq!(options.firmware, Some(Firmware::Uefi64));
        assert_eq!(options.network_type, Some(NetworkType::Vfio));
        assert_eq!(
            options.remote_data_volume_type,
            Some(BootVolumeType::Unknown("NVME".to_string()))
        );
    }

    #[test]
    fn test_instance_action_values() {
        assert_eq!(InstanceAction::values().len(), 6);
        assert_eq!(InstanceAction::Softreset.as_str(), "SOFTRESET");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = InstanceCredentials {
            username: "opc".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{credentials:?}");
        assert!(debug.contains("opc"));
        assert!(!debug.contains("hunter2"));
    }
}
