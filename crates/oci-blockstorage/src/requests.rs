//! Request and response wrappers for Block Storage operations.
//!
//! Each request carries its path parameters, body and headers plus the
//! per-call [`RequestMetadata`]. Build one, optionally override its retry
//! policy, then pass it to the matching [`crate::BlockstorageClient`] method.

use oci_core::enums::{SortBy, SortOrder};
use oci_core::ocid::{
    BootVolumeBackupId, BootVolumeId, CompartmentId, VolumeBackupId, VolumeGroupId, VolumeId,
};
use oci_core::pagination::{ListResponse, PagedRequest};
use oci_core::query::QueryParams;
use oci_core::request::{
    EmptyResponse, HttpRequest, OciRequest, RequestMetadata, ResourceResponse, IF_MATCH,
};
use oci_core::{Method, Result};

use crate::models::{
    BootVolume, BootVolumeBackup, BootVolumeKmsKey,
    ChangeVolumeCompartmentDetails, CopyVolumeBackupDetails, CreateBootVolumeBackupDetails,
    CreateBootVolumeDetails, CreateVolumeBackupDetails, CreateVolumeDetails,
    UpdateBootVolumeDetails, UpdateBootVolumeKmsKeyDetails, UpdateVolumeBackupDetails,
    UpdateVolumeDetails, UpdateVolumeKmsKeyDetails, Volume, VolumeBackup,
    VolumeBackupLifecycleState, VolumeKmsKey, VolumeLifecycleState,
};

/// Response of `ChangeVolumeCompartment`.
pub type ChangeVolumeCompartmentResponse = EmptyResponse;
/// Response of `DeleteVolume`.
pub type DeleteVolumeResponse = EmptyResponse;
/// Response of `DeleteVolumeKmsKey`.
pub type DeleteVolumeKmsKeyResponse = EmptyResponse;
/// Response of `DeleteVolumeBackup`.
pub type DeleteVolumeBackupResponse = EmptyResponse;
/// Response of `DeleteBootVolume`.
pub type DeleteBootVolumeResponse = EmptyResponse;
/// Response of `DeleteBootVolumeKmsKey`.
pub type DeleteBootVolumeKmsKeyResponse = EmptyResponse;
/// Response of `DeleteBootVolumeBackup`.
pub type DeleteBootVolumeBackupResponse = EmptyResponse;

/// Response of `CreateVolume`, `GetVolume` and `UpdateVolume`.
pub type VolumeResponse = ResourceResponse<Volume>;
/// Response of the volume KMS key operations.
pub type VolumeKmsKeyResponse = ResourceResponse<VolumeKmsKey>;
/// Response of the volume backup operations returning a backup.
pub type VolumeBackupResponse = ResourceResponse<VolumeBackup>;
/// Response of the boot volume operations returning a boot volume.
pub type BootVolumeResponse = ResourceResponse<BootVolume>;
/// Response of the boot volume KMS key operations.
pub type BootVolumeKmsKeyResponse = ResourceResponse<BootVolumeKmsKey>;
/// Response of the boot volume backup operations returning a backup.
pub type BootVolumeBackupResponse = ResourceResponse<BootVolumeBackup>;

/// Response of `ListVolumes`.
pub type ListVolumesResponse = ListResponse<Volume>;
/// Response of `ListVolumeBackups`.
pub type ListVolumeBackupsResponse = ListResponse<VolumeBackup>;
/// Response of `ListBootVolumes`.
pub type ListBootVolumesResponse = ListResponse<BootVolume>;
/// Response of `ListBootVolumeBackups`.
pub type ListBootVolumeBackupsResponse = ListResponse<BootVolumeBackup>;

/// `POST /volumes`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVolumeRequest {
    /// Volume to create.
    pub details: CreateVolumeDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateVolumeRequest {
    /// Create a volume from `details`.
    #[must_use]
    pub fn new(details: CreateVolumeDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }

    /// Use a caller chosen idempotency token.
    #[must_use]
    pub fn with_retry_token(mut self, token: impl Into<String>) -> Self {
        self.opc_retry_token = Some(token.into());
        self
    }
}

impl OciRequest for CreateVolumeRequest {
    type Response = VolumeResponse;
    const OPERATION: &'static str = "CreateVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["volumes"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /volumes/{volumeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetVolumeRequest {
    /// Volume to fetch.
    pub volume_id: VolumeId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetVolumeRequest {
    /// Fetch `volume_id`.
    #[must_use]
    pub fn new(volume_id: VolumeId) -> Self {
        Self {
            volume_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetVolumeRequest {
    type Response = VolumeResponse;
    const OPERATION: &'static str = "GetVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::GET, ["volumes", self.volume_id.as_str()])
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /volumes`
#[derive(Debug, Clone, PartialEq)]
pub struct ListVolumesRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to one availability domain.
    pub availability_domain: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor from a previous `opc-next-page`.
    pub page: Option<String>,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Restrict to one volume group.
    pub volume_group_id: Option<VolumeGroupId>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<VolumeLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListVolumesRequest {
    /// List volumes in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            availability_domain: None,
            limit: None,
            page: None,
            display_name: None,
            sort_by: None,
            sort_order: None,
            volume_group_id: None,
            lifecycle_state: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListVolumesRequest {
    type Response = ListVolumesResponse;
    const OPERATION: &'static str = "ListVolumes";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("availabilityDomain", self.availability_domain.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("volumeGroupId", self.volume_group_id.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["volumes"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListVolumesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `PUT /volumes/{volumeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVolumeRequest {
    /// Volume to update.
    pub volume_id: VolumeId,
    /// Fields to change.
    pub details: UpdateVolumeDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateVolumeRequest {
    /// Update `volume_id` with `details`.
    #[must_use]
    pub fn new(volume_id: VolumeId, details: UpdateVolumeDetails) -> Self {
        Self {
            volume_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }

    /// Require the given etag.
    #[must_use]
    pub fn with_if_match(mut self, etag: impl Into<String>) -> Self {
        self.if_match = Some(etag.into());
        self
    }
}

impl OciRequest for UpdateVolumeRequest {
    type Response = VolumeResponse;
    const OPERATION: &'static str = "UpdateVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::PUT, ["volumes", self.volume_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /volumes/{volumeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteVolumeRequest {
    /// Volume to delete.
    pub volume_id: VolumeId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteVolumeRequest {
    /// Delete `volume_id`.
    #[must_use]
    pub fn new(volume_id: VolumeId) -> Self {
        Self {
            volume_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteVolumeRequest {
    type Response = DeleteVolumeResponse;
    const OPERATION: &'static str = "DeleteVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::DELETE, ["volumes", self.volume_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `POST /volumes/{volumeId}/actions/changeCompartment`
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeVolumeCompartmentRequest {
    /// Volume to move.
    pub volume_id: VolumeId,
    /// Destination.
    pub details: ChangeVolumeCompartmentDetails,
    /// Only move when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ChangeVolumeCompartmentRequest {
    /// Move `volume_id` into `compartment_id`.
    #[must_use]
    pub fn new(volume_id: VolumeId, compartment_id: CompartmentId) -> Self {
        Self {
            volume_id,
            details: ChangeVolumeCompartmentDetails { compartment_id },
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ChangeVolumeCompartmentRequest {
    type Response = ChangeVolumeCompartmentResponse;
    const OPERATION: &'static str = "ChangeVolumeCompartment";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            ["volumes", self.volume_id.as_str(), "actions", "changeCompartment"],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /volumes/{volumeId}/kmsKey`
#[derive(Debug, Clone, PartialEq)]
pub struct GetVolumeKmsKeyRequest {
    /// Volume to inspect.
    pub volume_id: VolumeId,
    /// Only return the key when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetVolumeKmsKeyRequest {
    /// Fetch the key of `volume_id`.
    #[must_use]
    pub fn new(volume_id: VolumeId) -> Self {
        Self {
            volume_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetVolumeKmsKeyRequest {
    type Response = VolumeKmsKeyResponse;
    const OPERATION: &'static str = "GetVolumeKmsKey";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::GET, ["volumes", self.volume_id.as_str(), "kmsKey"])
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `PUT /volumes/{volumeId}/kmsKey`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVolumeKmsKeyRequest {
    /// Volume to re-key.
    pub volume_id: VolumeId,
    /// New key.
    pub details: UpdateVolumeKmsKeyDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateVolumeKmsKeyRequest {
    /// Assign the key in `details` to `volume_id`.
    #[must_use]
    pub fn new(volume_id: VolumeId, details: UpdateVolumeKmsKeyDetails) -> Self {
        Self {
            volume_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateVolumeKmsKeyRequest {
    type Response = VolumeKmsKeyResponse;
    const OPERATION: &'static str = "UpdateVolumeKmsKey";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::PUT, ["volumes", self.volume_id.as_str(), "kmsKey"])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /volumes/{volumeId}/kmsKey`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteVolumeKmsKeyRequest {
    /// Volume to revert to Oracle-managed keys.
    pub volume_id: VolumeId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteVolumeKmsKeyRequest {
    /// Remove the key of `volume_id`.
    #[must_use]
    pub fn new(volume_id: VolumeId) -> Self {
        Self {
            volume_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteVolumeKmsKeyRequest {
    type Response = DeleteVolumeKmsKeyResponse;
    const OPERATION: &'static str = "DeleteVolumeKmsKey";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::DELETE, ["volumes", self.volume_id.as_str(), "kmsKey"])
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `POST /volumeBackups`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVolumeBackupRequest {
    /// Backup to create.
    pub details: CreateVolumeBackupDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateVolumeBackupRequest {
    /// Create a backup from `details`.
    #[must_use]
    pub fn new(details: CreateVolumeBackupDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateVolumeBackupRequest {
    type Response = VolumeBackupResponse;
    const OPERATION: &'static str = "CreateVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["volumeBackups"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /volumeBackups/{volumeBackupId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetVolumeBackupRequest {
    /// Backup to fetch.
    pub volume_backup_id: VolumeBackupId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetVolumeBackupRequest {
    /// Fetch `volume_backup_id`.
    #[must_use]
    pub fn new(volume_backup_id: VolumeBackupId) -> Self {
        Self {
            volume_backup_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetVolumeBackupRequest {
    type Response = VolumeBackupResponse;
    const OPERATION: &'static str = "GetVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::GET, ["volumeBackups", self.volume_backup_id.as_str()])
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /volumeBackups`
#[derive(Debug, Clone, PartialEq)]
pub struct ListVolumeBackupsRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to backups of one volume.
    pub volume_id: Option<VolumeId>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Restrict to copies of one backup.
    pub source_volume_backup_id: Option<VolumeBackupId>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<VolumeBackupLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListVolumeBackupsRequest {
    /// List volume backups in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            volume_id: None,
            limit: None,
            page: None,
            display_name: None,
            source_volume_backup_id: None,
            sort_by: None,
            sort_order: None,
            lifecycle_state: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListVolumeBackupsRequest {
    type Response = ListVolumeBackupsResponse;
    const OPERATION: &'static str = "ListVolumeBackups";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("volumeId", self.volume_id.as_ref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_opt("sourceVolumeBackupId", self.source_volume_backup_id.as_ref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["volumeBackups"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListVolumeBackupsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `PUT /volumeBackups/{volumeBackupId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVolumeBackupRequest {
    /// Backup to update.
    pub volume_backup_id: VolumeBackupId,
    /// Fields to change.
    pub details: UpdateVolumeBackupDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateVolumeBackupRequest {
    /// Update `volume_backup_id` with `details`.
    #[must_use]
    pub fn new(volume_backup_id: VolumeBackupId, details: UpdateVolumeBackupDetails) -> Self {
        Self {
            volume_backup_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateVolumeBackupRequest {
    type Response = VolumeBackupResponse;
    const OPERATION: &'static str = "UpdateVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::PUT, ["volumeBackups", self.volume_backup_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /volumeBackups/{volumeBackupId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteVolumeBackupRequest {
    /// Backup to delete.
    pub volume_backup_id: VolumeBackupId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteVolumeBackupRequest {
    /// Delete `volume_backup_id`.
    #[must_use]
    pub fn new(volume_backup_id: VolumeBackupId) -> Self {
        Self {
            volume_backup_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteVolumeBackupRequest {
    type Response = DeleteVolumeBackupResponse;
    const OPERATION: &'static str = "DeleteVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::DELETE, ["volumeBackups", self.volume_backup_id.as_str()])
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `POST /volumeBackups/{volumeBackupId}/actions/copy`
#[derive(Debug, Clone, PartialEq)]
pub struct CopyVolumeBackupRequest {
    /// Backup to copy.
    pub volume_backup_id: VolumeBackupId,
    /// Destination of the copy.
    pub details: CopyVolumeBackupDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CopyVolumeBackupRequest {
    /// Copy `volume_backup_id` as described by `details`.
    #[must_use]
    pub fn new(volume_backup_id: VolumeBackupId, details: CopyVolumeBackupDetails) -> Self {
        Self {
            volume_backup_id,
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CopyVolumeBackupRequest {
    type Response = VolumeBackupResponse;
    const OPERATION: &'static str = "CopyVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            ["volumeBackups", self.volume_backup_id.as_str(), "actions", "copy"],
        )
        .retry_token(self.opc_retry_token.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `POST /bootVolumes`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBootVolumeRequest {
    /// Boot volume to create.
    pub details: CreateBootVolumeDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateBootVolumeRequest {
    /// Create a boot volume from `details`.
    #[must_use]
    pub fn new(details: CreateBootVolumeDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateBootVolumeRequest {
    type Response = BootVolumeResponse;
    const OPERATION: &'static str = "CreateBootVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["bootVolumes"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /bootVolumes/{bootVolumeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetBootVolumeRequest {
    /// Boot volume to fetch.
    pub boot_volume_id: BootVolumeId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetBootVolumeRequest {
    /// Fetch `boot_volume_id`.
    #[must_use]
    pub fn new(boot_volume_id: BootVolumeId) -> Self {
        Self {
            boot_volume_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetBootVolumeRequest {
    type Response = BootVolumeResponse;
    const OPERATION: &'static str = "GetBootVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::GET, ["bootVolumes", self.boot_volume_id.as_str()])
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /bootVolumes`
#[derive(Debug, Clone, PartialEq)]
pub struct ListBootVolumesRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to one availability domain.
    pub availability_domain: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Restrict to one volume group.
    pub volume_group_id: Option<VolumeGroupId>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListBootVolumesRequest {
    /// List boot volumes in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            availability_domain: None,
            limit: None,
            page: None,
            volume_group_id: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListBootVolumesRequest {
    type Response = ListBootVolumesResponse;
    const OPERATION: &'static str = "ListBootVolumes";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("availabilityDomain", self.availability_domain.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_opt("volumeGroupId", self.volume_group_id.as_ref());
        Ok(HttpRequest::new(Method::GET, ["bootVolumes"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListBootVolumesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `PUT /bootVolumes/{bootVolumeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBootVolumeRequest {
    /// Boot volume to update.
    pub boot_volume_id: BootVolumeId,
    /// Fields to change.
    pub details: UpdateBootVolumeDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateBootVolumeRequest {
    /// Update `boot_volume_id` with `details`.
    #[must_use]
    pub fn new(boot_volume_id: BootVolumeId, details: UpdateBootVolumeDetails) -> Self {
        Self {
            boot_volume_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateBootVolumeRequest {
    type Response = BootVolumeResponse;
    const OPERATION: &'static str = "UpdateBootVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::PUT, ["bootVolumes", self.boot_volume_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /bootVolumes/{bootVolumeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBootVolumeRequest {
    /// Boot volume to delete.
    pub boot_volume_id: BootVolumeId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteBootVolumeRequest {
    /// Delete `boot_volume_id`.
    #[must_use]
    pub fn new(boot_volume_id: BootVolumeId) -> Self {
        Self {
            boot_volume_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteBootVolumeRequest {
    type Response = DeleteBootVolumeResponse;
    const OPERATION: &'static str = "DeleteBootVolume";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::DELETE, ["bootVolumes", self.boot_volume_id.as_str()])
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /bootVolumes/{bootVolumeId}/kmsKey`
#[derive(Debug, Clone, PartialEq)]
pub struct GetBootVolumeKmsKeyRequest {
    /// Boot volume to inspect.
    pub boot_volume_id: BootVolumeId,
    /// Only return the key when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetBootVolumeKmsKeyRequest {
    /// Fetch the key of `boot_volume_id`.
    #[must_use]
    pub fn new(boot_volume_id: BootVolumeId) -> Self {
        Self {
            boot_volume_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetBootVolumeKmsKeyRequest {
    type Response = BootVolumeKmsKeyResponse;
    const OPERATION: &'static str = "GetBootVolumeKmsKey";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::GET,
            ["bootVolumes", self.boot_volume_id.as_str(), "kmsKey"],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `PUT /bootVolumes/{bootVolumeId}/kmsKey`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateBootVolumeKmsKeyRequest {
    /// Boot volume to re-key.
    pub boot_volume_id: BootVolumeId,
    /// New key.
    pub details: UpdateBootVolumeKmsKeyDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateBootVolumeKmsKeyRequest {
    /// Assign the key in `details` to `boot_volume_id`.
    #[must_use]
    pub fn new(boot_volume_id: BootVolumeId, details: UpdateBootVolumeKmsKeyDetails) -> Self {
        Self {
            boot_volume_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateBootVolumeKmsKeyRequest {
    type Response = BootVolumeKmsKeyResponse;
    const OPERATION: &'static str = "UpdateBootVolumeKmsKey";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::PUT,
            ["bootVolumes", self.boot_volume_id.as_str(), "kmsKey"],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /bootVolumes/{bootVolumeId}/kmsKey`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBootVolumeKmsKeyRequest {
    /// Boot volume to revert to Oracle-managed keys.
    pub boot_volume_id: BootVolumeId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteBootVolumeKmsKeyRequest {
    /// Remove the key of `boot_volume_id`.
    #[must_use]
    pub fn new(boot_volume_id: BootVolumeId) -> Self {
        Self {
            boot_volume_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteBootVolumeKmsKeyRequest {
    type Response = DeleteBootVolumeKmsKeyResponse;
    const OPERATION: &'static str = "DeleteBootVolumeKmsKey";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::DELETE,
            ["bootVolumes", self.boot_volume_id.as_str(), "kmsKey"],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `POST /bootVolumeBackups`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBootVolumeBackupRequest {
    /// Backup to create.
    pub details: CreateBootVolumeBackupDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateBootVolumeBackupRequest {
    /// Create a boot volume backup from `details`.
    #[must_use]
    pub fn new(details: CreateBootVolumeBackupDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateBootVolumeBackupRequest {
    type Response = BootVolumeBackupResponse;
    const OPERATION: &'static str = "CreateBootVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["bootVolumeBackups"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /bootVolumeBackups/{bootVolumeBackupId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetBootVolumeBackupRequest {
    /// Backup to fetch.
    pub boot_volume_backup_id: BootVolumeBackupId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetBootVolumeBackupRequest {
    /// Fetch `boot_volume_backup_id`.
    #[must_use]
    pub fn new(boot_volume_backup_id: BootVolumeBackupId) -> Self {
        Self {
            boot_volume_backup_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetBootVolumeBackupRequest {
    type Response = BootVolumeBackupResponse;
    const OPERATION: &'static str = "GetBootVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::GET,
            ["bootVolumeBackups", self.boot_volume_backup_id.as_str()],
        )
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /bootVolumeBackups`
#[derive(Debug, Clone, PartialEq)]
pub struct ListBootVolumeBackupsRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to backups of one boot volume.
    pub boot_volume_id: Option<BootVolumeId>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Restrict to copies of one backup.
    pub source_boot_volume_backup_id: Option<BootVolumeBackupId>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<VolumeBackupLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListBootVolumeBackupsRequest {
    /// List boot volume backups in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            boot_volume_id: None,
            limit: None,
            page: None,
            display_name: None,
            source_boot_volume_backup_id: None,
            sort_by: None,
            sort_order: None,
            lifecycle_state: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListBootVolumeBackupsRequest {
    type Response = ListBootVolumeBackupsResponse;
    const OPERATION: &'static str = "ListBootVolumeBackups";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("bootVolumeId", self.boot_volume_id.as_ref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_opt(
            "sourceBootVolumeBackupId",
            self.source_boot_volume_backup_id.as_ref(),
        );
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["bootVolumeBackups"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListBootVolumeBackupsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `DELETE /bootVolumeBackups/{bootVolumeBackupId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteBootVolumeBackupRequest {
    /// Backup to delete.
    pub boot_volume_backup_id: BootVolumeBackupId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteBootVolumeBackupRequest {
    /// Delete `boot_volume_backup_id`.
    #[must_use]
    pub fn new(boot_volume_backup_id: BootVolumeBackupId) -> Self {
        Self {
            boot_volume_backup_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteBootVolumeBackupRequest {
    type Response = DeleteBootVolumeBackupResponse;
    const OPERATION: &'static str = "DeleteBootVolumeBackup";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::DELETE,
            ["bootVolumeBackups", self.boot_volume_backup_id.as_str()],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use oci_core::client::RetryPolicy;
    use oci_core::request::{OPC_REQUEST_ID, OPC_RETRY_TOKEN};

    fn compartment() -> CompartmentId {
        CompartmentId::new("ocid1.compartment.oc1..aaa")
    }

    #[test]
    fn test_create_volume_request() {
        let mut details = CreateVolumeDetails::new(compartment());
        details.display_name = Some("data".to_string());
        let request = CreateVolumeRequest::new(details)
            .with_retry_token("token-1")
            .with_opc_request_id("req-1");

        let http = request.to_http_request().unwrap();
        assert_eq!(http.method, Method::POST);
        assert_eq!(http.path(), "/volumes");
        assert_eq!(http.header_value(OPC_RETRY_TOKEN), Some("token-1"));
        assert_eq!(http.header_value(OPC_REQUEST_ID), Some("req-1"));
        assert_eq!(
            http.body,
            Some(serde_json::json!({
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "displayName": "data"
            }))
        );
    }

    #[test]
    fn test_create_requests_generate_retry_token() {
        let http = CreateBootVolumeBackupRequest::new(CreateBootVolumeBackupDetails::new(
            BootVolumeId::new("ocid1.bootvolume.oc1.phx.a"),
        ))
        .to_http_request()
        .unwrap();
        assert_eq!(http.header_value(OPC_RETRY_TOKEN).map(str::len), Some(30));
    }

    #[test]
    fn test_update_volume_sets_if_match() {
        let request = UpdateVolumeRequest::new(
            VolumeId::new("ocid1.volume.oc1.phx.a"),
            UpdateVolumeDetails {
                size_in_gbs: Some(100),
                ..UpdateVolumeDetails::default()
            },
        )
        .with_if_match("etag-7");

        let http = request.to_http_request().unwrap();
        assert_eq!(http.method, Method::PUT);
        assert_eq!(http.path(), "/volumes/ocid1.volume.oc1.phx.a");
        assert_eq!(http.header_value(IF_MATCH), Some("etag-7"));
        assert_eq!(http.body, Some(serde_json::json!({"sizeInGBs": 100})));
    }

    #[test]
    fn test_list_volumes_query() {
        let mut request = ListVolumesRequest::new(compartment());
        request.availability_domain = Some("Uocm:PHX-AD-1".to_string());
        request.limit = Some(25);
        request.sort_by = Some(SortBy::TimeCreated);
        request.sort_order = Some(SortOrder::Desc);
        request.lifecycle_state = Some(VolumeLifecycleState::Available);

        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.query,
            vec![
                ("compartmentId", "ocid1.compartment.oc1..aaa".to_string()),
                ("availabilityDomain", "Uocm:PHX-AD-1".to_string()),
                ("limit", "25".to_string()),
                ("sortBy", "TIMECREATED".to_string()),
                ("sortOrder", "DESC".to_string()),
                ("lifecycleState", "AVAILABLE".to_string()),
            ]
        );
    }

    #[test]
    fn test_action_paths() {
        let id = VolumeBackupId::new("ocid1.volumebackup.oc1.phx.a");
        let http = CopyVolumeBackupRequest::new(
            id,
            CopyVolumeBackupDetails {
                destination_region: "us-ashburn-1".to_string(),
                display_name: None,
                kms_key_id: None,
            },
        )
        .to_http_request()
        .unwrap();
        assert_eq!(
            http.path(),
            "/volumeBackups/ocid1.volumebackup.oc1.phx.a/actions/copy"
        );
        assert_eq!(
            http.body,
            Some(serde_json::json!({"destinationRegion": "us-ashburn-1"}))
        );

        let http = ChangeVolumeCompartmentRequest::new(
            VolumeId::new("ocid1.volume.oc1.phx.a"),
            CompartmentId::new("ocid1.compartment.oc1..bbb"),
        )
        .to_http_request()
        .unwrap();
        assert_eq!(
            http.path(),
            "/volumes/ocid1.volume.oc1.phx.a/actions/changeCompartment"
        );

        let http = DeleteBootVolumeKmsKeyRequest::new(BootVolumeId::new("ocid1.bootvolume.oc1.phx.a"))
            .to_http_request()
            .unwrap();
        assert_eq!(http.method, Method::DELETE);
        assert_eq!(http.path(), "/bootVolumes/ocid1.bootvolume.oc1.phx.a/kmsKey");
    }

    #[test]
    fn test_request_retry_policy_override() {
        let request = GetVolumeRequest::new(VolumeId::new("ocid1.volume.oc1.phx.a"));
        assert!(request.retry_policy().is_none());

        let request = request.with_retry_policy(RetryPolicy::for_throttling());
        assert_eq!(request.retry_policy(), Some(&RetryPolicy::for_throttling()));
    }
}
