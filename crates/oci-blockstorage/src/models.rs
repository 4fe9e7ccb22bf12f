//! Block Storage models: volumes, boot volumes and their backups.

use chrono::{DateTime, Utc};
use oci_core::ocid::{
    BootVolumeBackupId, BootVolumeId, CompartmentId, ImageId, KmsKeyId, VolumeBackupId, VolumeGroupId,
    VolumeId,
};
use oci_core::{oci_enum, oci_polymorphic};
use oci_core::types::{DefinedTags, FreeformTags};
use serde::{Deserialize, Serialize};

oci_enum! {
    /// Lifecycle state of a block volume.
    pub enum VolumeLifecycleState {
        /// Being created.
        Provisioning => "PROVISIONING",
        /// Being restored from a backup.
        Restoring => "RESTORING",
        /// Ready for use.
        Available => "AVAILABLE",
        /// Being deleted.
        Terminating => "TERMINATING",
        /// Deleted.
        Terminated => "TERMINATED",
        /// Unusable.
        Faulty => "FAULTY",
    }
}

oci_enum! {
    /// Lifecycle state of a boot volume.
    pub enum BootVolumeLifecycleState {
        /// Being created.
        Provisioning => "PROVISIONING",
        /// Being restored from a backup.
        Restoring => "RESTORING",
        /// Ready for use.
        Available => "AVAILABLE",
        /// Being deleted.
        Terminating => "TERMINATING",
        /// Deleted.
        Terminated => "TERMINATED",
        /// Unusable.
        Faulty => "FAULTY",
    }
}

oci_enum! {
    /// Lifecycle state of a volume or boot volume backup.
    pub enum VolumeBackupLifecycleState {
        /// Backup in progress.
        Creating => "CREATING",
        /// Backup complete.
        Available => "AVAILABLE",
        /// Being deleted.
        Terminating => "TERMINATING",
        /// Deleted.
        Terminated => "TERMINATED",
        /// Unusable.
        Faulty => "FAULTY",
        /// Accepted, not yet started.
        RequestReceived => "REQUEST_RECEIVED",
    }
}

oci_enum! {
    /// Kind of backup.
    pub enum VolumeBackupType {
        /// All data.
        Full => "FULL",
        /// Changes since the last backup.
        Incremental => "INCREMENTAL",
    }
}

oci_enum! {
    /// How a backup was started.
    pub enum VolumeBackupSourceType {
        /// Created by a user.
        Manual => "MANUAL",
        /// Created by a backup policy.
        Scheduled => "SCHEDULED",
    }
}

/// Clone of another volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeSourceFromVolumeDetails {
    /// Source volume OCID.
    pub id: VolumeId,
}

/// Restore of a volume backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VolumeSourceFromVolumeBackupDetails {
    /// Source backup OCID.
    pub id: VolumeBackupId,
}

oci_polymorphic! {
    /// Clone source of a volume, selected by `type`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum VolumeSourceDetails: "type" {
        /// Clone of another volume.
        Volume(VolumeSourceFromVolumeDetails) => "volume",
        /// Restore of a volume backup.
        VolumeBackup(VolumeSourceFromVolumeBackupDetails) => "volumeBackup",
    }
}

/// Clone of another boot volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootVolumeSourceFromBootVolumeDetails {
    /// Source boot volume OCID.
    pub id: BootVolumeId,
}

/// Restore of a boot volume backup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BootVolumeSourceFromBootVolumeBackupDetails {
    /// Source backup OCID.
    pub id: BootVolumeBackupId,
}

oci_polymorphic! {
    /// Clone source of a boot volume, selected by `type`.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum BootVolumeSourceDetails: "type" {
        /// Clone of another boot volume.
        BootVolume(BootVolumeSourceFromBootVolumeDetails) => "bootVolume",
        /// Restore of a boot volume backup.
        BootVolumeBackup(BootVolumeSourceFromBootVolumeBackupDetails) => "bootVolumeBackup",
    }
}

/// A block volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    /// Volume OCID.
    pub id: VolumeId,
    /// Availability domain, e.g. `Uocm:PHX-AD-1`.
    pub availability_domain: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// User-friendly name.
    pub display_name: String,
    /// Current lifecycle state.
    pub lifecycle_state: VolumeLifecycleState,
    /// Size in MBs (deprecated by the service in favour of `sizeInGBs`).
    #[serde(rename = "sizeInMBs")]
    pub size_in_mbs: i64,
    /// Size in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// Whether cloned data has been fully copied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hydrated: Option<bool>,
    /// Encryption key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
    /// Performance units per GB.
    #[serde(rename = "vpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub vpus_per_gb: Option<i64>,
    /// Whether performance auto-tuning is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_tune_enabled: Option<bool>,
    /// Performance units per GB picked by auto-tuning.
    #[serde(rename = "autoTunedVpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub auto_tuned_vpus_per_gb: Option<i64>,
    /// Clone or restore source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<VolumeSourceDetails>,
    /// Volume group membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_group_id: Option<VolumeGroupId>,
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

/// Body of `CreateVolume`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolumeDetails {
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Availability domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_domain: Option<String>,
    /// Backup policy to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_policy_id: Option<String>,
    /// User-friendly name.
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
    /// Size in MBs.
    #[serde(rename = "sizeInMBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_mbs: Option<i64>,
    /// Clone or restore source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<VolumeSourceDetails>,
    /// Backup to restore from (superseded by `sourceDetails`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_backup_id: Option<VolumeBackupId>,
    /// Whether performance auto-tuning is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_tune_enabled: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateVolumeDetails {
    /// Details for a new volume in `compartment_id`.
    #[must_use]
    pub const fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            availability_domain: None,
            backup_policy_id: None,
            display_name: None,
            kms_key_id: None,
            vpus_per_gb: None,
            size_in_gbs: None,
            size_in_mbs: None,
            source_details: None,
            volume_backup_id: None,
            is_auto_tune_enabled: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}

/// Body of `UpdateVolume`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolumeDetails {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New performance units per GB.
    #[serde(rename = "vpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub vpus_per_gb: Option<i64>,
    /// New size in GBs; volumes can only grow.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Whether performance auto-tuning is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_tune_enabled: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// Body of `ChangeVolumeCompartment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeVolumeCompartmentDetails {
    /// Destination compartment.
    pub compartment_id: CompartmentId,
}

/// The encryption key assigned to a volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeKmsKey {
    /// Key OCID; absent when the volume uses Oracle-managed keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
}

/// Body of `UpdateVolumeKmsKey`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolumeKmsKeyDetails {
    /// New key OCID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
}

/// The encryption key assigned to a boot volume.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BootVolumeKmsKey {
    /// Key OCID; absent when the boot volume uses Oracle-managed keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
}

/// Body of `UpdateBootVolumeKmsKey`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootVolumeKmsKeyDetails {
    /// New key OCID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
}

/// A point-in-time copy of a block volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeBackup {
    /// Backup OCID.
    pub id: VolumeBackupId,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// User-friendly name.
    pub display_name: String,
    /// Current lifecycle state.
    pub lifecycle_state: VolumeBackupLifecycleState,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// Full or incremental.
    #[serde(rename = "type")]
    pub backup_type: VolumeBackupType,
    /// Source volume, if it still exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_id: Option<VolumeId>,
    /// Expiration time for scheduled backups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
    /// Encryption key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
    /// Size of the source volume in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Size of the source volume in MBs.
    #[serde(rename = "sizeInMBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_mbs: Option<i64>,
    /// Manual or scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<VolumeBackupSourceType>,
    /// Backup this one was copied from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_volume_backup_id: Option<VolumeBackupId>,
    /// Time the request was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_request_received: Option<DateTime<Utc>>,
    /// Storage used by this backup alone, in GBs.
    #[serde(rename = "uniqueSizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub unique_size_in_gbs: Option<i64>,
    /// Storage used by this backup alone, in MBs.
    #[serde(rename = "uniqueSizeInMbs", default, skip_serializing_if = "Option::is_none")]
    pub unique_size_in_mbs: Option<i64>,
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

/// Body of `CreateVolumeBackup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateVolumeBackupDetails {
    /// Volume to back up.
    pub volume_id: VolumeId,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Full or incremental; the service defaults to incremental.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<VolumeBackupType>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateVolumeBackupDetails {
    /// Back up `volume_id` with service defaults.
    #[must_use]
    pub const fn new(volume_id: VolumeId) -> Self {
        Self {
            volume_id,
            display_name: None,
            backup_type: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}

/// Body of `UpdateVolumeBackup`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVolumeBackupDetails {
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

/// Body of `CopyVolumeBackup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CopyVolumeBackupDetails {
    /// Region to copy into, e.g. `us-ashburn-1`.
    pub destination_region: String,
    /// Name of the copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Key in the destination region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
}

/// A boot volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BootVolume {
    /// Boot volume OCID.
    pub id: BootVolumeId,
    /// Availability domain.
    pub availability_domain: String,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// Current lifecycle state.
    pub lifecycle_state: BootVolumeLifecycleState,
    /// Size in MBs.
    #[serde(rename = "sizeInMBs")]
    pub size_in_mbs: i64,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Size in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Image the boot volume was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ImageId>,
    /// Whether cloned data has been fully copied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hydrated: Option<bool>,
    /// Performance units per GB.
    #[serde(rename = "vpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub vpus_per_gb: Option<i64>,
    /// Whether performance auto-tuning is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_tune_enabled: Option<bool>,
    /// Performance units per GB picked by auto-tuning.
    #[serde(rename = "autoTunedVpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub auto_tuned_vpus_per_gb: Option<i64>,
    /// Encryption key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
    /// Clone or restore source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_details: Option<BootVolumeSourceDetails>,
    /// Volume group membership.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume_group_id: Option<VolumeGroupId>,
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

/// Body of `CreateBootVolume`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootVolumeDetails {
    /// Availability domain.
    pub availability_domain: String,
    /// Target compartment.
    pub compartment_id: CompartmentId,
    /// Clone or restore source.
    pub source_details: BootVolumeSourceDetails,
    /// Backup policy to assign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backup_policy_id: Option<String>,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Encryption key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
    /// Size in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Performance units per GB.
    #[serde(rename = "vpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub vpus_per_gb: Option<i64>,
    /// Whether performance auto-tuning is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_tune_enabled: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateBootVolumeDetails {
    /// Details for a boot volume cloned or restored from `source_details`.
    #[must_use]
    pub fn new(
        availability_domain: impl Into<String>,
        compartment_id: CompartmentId,
        source_details: BootVolumeSourceDetails,
    ) -> Self {
        Self {
            availability_domain: availability_domain.into(),
            compartment_id,
            source_details,
            backup_policy_id: None,
            display_name: None,
            kms_key_id: None,
            size_in_gbs: None,
            vpus_per_gb: None,
            is_auto_tune_enabled: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}

/// Body of `UpdateBootVolume`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBootVolumeDetails {
    /// New name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// New size in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// New performance units per GB.
    #[serde(rename = "vpusPerGB", default, skip_serializing_if = "Option::is_none")]
    pub vpus_per_gb: Option<i64>,
    /// Whether performance auto-tuning is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_auto_tune_enabled: Option<bool>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

/// A point-in-time copy of a boot volume.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BootVolumeBackup {
    /// Backup OCID.
    pub id: BootVolumeBackupId,
    /// Owning compartment.
    pub compartment_id: CompartmentId,
    /// User-friendly name.
    pub display_name: String,
    /// Current lifecycle state.
    pub lifecycle_state: VolumeBackupLifecycleState,
    /// Creation time.
    pub time_created: DateTime<Utc>,
    /// Source boot volume, if it still exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boot_volume_id: Option<BootVolumeId>,
    /// Image the source boot volume was created from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<ImageId>,
    /// Full or incremental.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<VolumeBackupType>,
    /// Expiration time for scheduled backups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_time: Option<DateTime<Utc>>,
    /// Encryption key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kms_key_id: Option<KmsKeyId>,
    /// Size of the source boot volume in GBs.
    #[serde(rename = "sizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub size_in_gbs: Option<i64>,
    /// Manual or scheduled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<VolumeBackupSourceType>,
    /// Backup this one was copied from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_boot_volume_backup_id: Option<BootVolumeBackupId>,
    /// Time the request was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_request_received: Option<DateTime<Utc>>,
    /// Storage used by this backup alone, in GBs.
    #[serde(rename = "uniqueSizeInGBs", default, skip_serializing_if = "Option::is_none")]
    pub unique_size_in_gbs: Option<i64>,
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

/// Body of `CreateBootVolumeBackup`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateBootVolumeBackupDetails {
    /// Boot volume to back up.
    pub boot_volume_id: BootVolumeId,
    /// User-friendly name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Full or incremental.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub backup_type: Option<VolumeBackupType>,
    /// Defined tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform_tags: Option<FreeformTags>,
}

impl CreateBootVolumeBackupDetails {
    /// Back up `boot_volume_id` with service defaults.
    #[must_use]
    pub const fn new(boot_volume_id: BootVolumeId) -> Self {
        Self {
            boot_volume_id,
            display_name: None,
            backup_type: None,
            defined_tags: None,
            freeform_tags: None,
        }
    }
}
