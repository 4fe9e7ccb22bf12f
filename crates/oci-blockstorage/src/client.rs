//! Asynchronous Block Storage client.

use std::sync::Arc;
use std::time::Duration;

use oci_core::client::{
    ClientConfig, RequestSigner, RetryPolicy, ServiceClient, ServiceClientBuilder,
    BLOCKSTORAGE_DEFAULT_TIMEOUT,
};
use oci_core::config::OciClientConfig;
use oci_core::types::{OciService, Region};
use secrecy::SecretString;
use url::Url;

use crate::models::{BootVolume, BootVolumeBackup, Volume, VolumeBackup};
use crate::requests::{
    BootVolumeBackupResponse, BootVolumeKmsKeyResponse, BootVolumeResponse,
    ChangeVolumeCompartmentRequest, ChangeVolumeCompartmentResponse, CopyVolumeBackupRequest,
    CreateBootVolumeBackupRequest, CreateBootVolumeRequest, CreateVolumeBackupRequest,
    CreateVolumeRequest, DeleteBootVolumeBackupRequest, DeleteBootVolumeBackupResponse,
    DeleteBootVolumeKmsKeyRequest, DeleteBootVolumeKmsKeyResponse, DeleteBootVolumeRequest,
    DeleteBootVolumeResponse, DeleteVolumeBackupRequest, DeleteVolumeBackupResponse,
    DeleteVolumeKmsKeyRequest, DeleteVolumeKmsKeyResponse, DeleteVolumeRequest,
    DeleteVolumeResponse, GetBootVolumeBackupRequest, GetBootVolumeKmsKeyRequest,
    GetBootVolumeRequest, GetVolumeBackupRequest, GetVolumeKmsKeyRequest, GetVolumeRequest,
    ListBootVolumeBackupsRequest, ListBootVolumeBackupsResponse, ListBootVolumesRequest,
    ListBootVolumesResponse, ListVolumeBackupsRequest, ListVolumeBackupsResponse,
    ListVolumesRequest, ListVolumesResponse, UpdateBootVolumeKmsKeyRequest,
    UpdateBootVolumeRequest, UpdateVolumeBackupRequest, UpdateVolumeKmsKeyRequest,
    UpdateVolumeRequest, VolumeBackupResponse, VolumeKmsKeyResponse, VolumeResponse,
};
use crate::Result;

const USER_AGENT: &str = concat!("oci-blockstorage/", env!("CARGO_PKG_VERSION"));

/// Builder for [`BlockstorageClient`].
#[derive(Debug)]
pub struct BlockstorageClientBuilder {
    inner: ServiceClientBuilder,
}

impl BlockstorageClientBuilder {
    /// Create a builder for the specified base URL, including the API version
    /// path.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ServiceClientBuilder::new(
            OciService::Blockstorage,
            base_url,
            Duration::from_secs(BLOCKSTORAGE_DEFAULT_TIMEOUT),
        )?
        .with_user_agent(USER_AGENT);

        Ok(Self { inner: builder })
    }

    /// Create a builder for the regional endpoint of `region`.
    pub fn for_region(region: &Region) -> Result<Self> {
        Self::new(region.endpoint(OciService::Blockstorage))
    }

    /// Create a builder from a loaded configuration profile.
    pub fn from_config(config: &OciClientConfig) -> Result<Self> {
        let builder = config
            .service_client_builder(OciService::Blockstorage)?
            .with_user_agent(USER_AGENT);
        Ok(Self { inner: builder })
    }

    /// Set the client default retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.inner = self.inner.with_retry_policy(retry);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Sign every request with `signer`.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.inner = self.inner.with_signer(signer);
        self
    }

    /// Send an on-behalf-of token with every request.
    #[must_use]
    pub fn with_obo_token(mut self, token: SecretString) -> Self {
        self.inner = self.inner.with_obo_token(token);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<BlockstorageClient> {
        let inner = self.inner.build()?;
        Ok(BlockstorageClient { inner })
    }
}

/// Asynchronous client for volumes, boot volumes and their backups.
#[derive(Debug, Clone)]
pub struct BlockstorageClient {
    inner: ServiceClient,
}

impl BlockstorageClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        BlockstorageClientBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Client default retry policy, if one was configured.
    #[must_use]
    pub const fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.inner.retry_policy()
    }

    /// Create a block volume.
    pub async fn create_volume(&self, request: &CreateVolumeRequest) -> Result<VolumeResponse> {
        self.inner.call(request).await
    }

    /// Fetch a block volume.
    pub async fn get_volume(&self, request: &GetVolumeRequest) -> Result<VolumeResponse> {
        self.inner.call(request).await
    }

    /// List one page of block volumes.
    pub async fn list_volumes(&self, request: &ListVolumesRequest) -> Result<ListVolumesResponse> {
        self.inner.call(request).await
    }

    /// List every block volume matching `request`, following page cursors.
    pub async fn list_all_volumes(&self, request: &ListVolumesRequest) -> Result<Vec<Volume>> {
        self.inner.call_all_pages(request).await
    }

    /// Update a block volume's name, size, performance or tags.
    pub async fn update_volume(&self, request: &UpdateVolumeRequest) -> Result<VolumeResponse> {
        self.inner.call(request).await
    }

    /// Delete a block volume.
    pub async fn delete_volume(&self, request: &DeleteVolumeRequest) -> Result<DeleteVolumeResponse> {
        self.inner.call(request).await
    }

    /// Move a block volume into another compartment.
    pub async fn change_volume_compartment(
        &self,
        request: &ChangeVolumeCompartmentRequest,
    ) -> Result<ChangeVolumeCompartmentResponse> {
        self.inner.call(request).await
    }

    /// Fetch the encryption key of a block volume.
    pub async fn get_volume_kms_key(
        &self,
        request: &GetVolumeKmsKeyRequest,
    ) -> Result<VolumeKmsKeyResponse> {
        self.inner.call(request).await
    }

    /// Assign a new encryption key to a block volume.
    pub async fn update_volume_kms_key(
        &self,
        request: &UpdateVolumeKmsKeyRequest,
    ) -> Result<VolumeKmsKeyResponse> {
        self.inner.call(request).await
    }

    /// Revert a block volume to Oracle-managed keys.
    pub async fn delete_volume_kms_key(
        &self,
        request: &DeleteVolumeKmsKeyRequest,
    ) -> Result<DeleteVolumeKmsKeyResponse> {
        self.inner.call(request).await
    }

    /// Back up a block volume.
    pub async fn create_volume_backup(
        &self,
        request: &CreateVolumeBackupRequest,
    ) -> Result<VolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// Fetch a volume backup.
    pub async fn get_volume_backup(
        &self,
        request: &GetVolumeBackupRequest,
    ) -> Result<VolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// List one page of volume backups.
    pub async fn list_volume_backups(
        &self,
        request: &ListVolumeBackupsRequest,
    ) -> Result<ListVolumeBackupsResponse> {
        self.inner.call(request).await
    }

    /// List every volume backup matching `request`.
    pub async fn list_all_volume_backups(
        &self,
        request: &ListVolumeBackupsRequest,
    ) -> Result<Vec<VolumeBackup>> {
        self.inner.call_all_pages(request).await
    }

    /// Rename or retag a volume backup.
    pub async fn update_volume_backup(
        &self,
        request: &UpdateVolumeBackupRequest,
    ) -> Result<VolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// Delete a volume backup.
    pub async fn delete_volume_backup(
        &self,
        request: &DeleteVolumeBackupRequest,
    ) -> Result<DeleteVolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// Copy a volume backup to another region.
    pub async fn copy_volume_backup(
        &self,
        request: &CopyVolumeBackupRequest,
    ) -> Result<VolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// Clone or restore a boot volume.
    pub async fn create_boot_volume(
        &self,
        request: &CreateBootVolumeRequest,
    ) -> Result<BootVolumeResponse> {
        self.inner.call(request).await
    }

    /// Fetch a boot volume.
    pub async fn get_boot_volume(&self, request: &GetBootVolumeRequest) -> Result<BootVolumeResponse> {
        self.inner.call(request).await
    }

    /// List one page of boot volumes.
    pub async fn list_boot_volumes(
        &self,
        request: &ListBootVolumesRequest,
    ) -> Result<ListBootVolumesResponse> {
        self.inner.call(request).await
    }

    /// List every boot volume matching `request`.
    pub async fn list_all_boot_volumes(
        &self,
        request: &ListBootVolumesRequest,
    ) -> Result<Vec<BootVolume>> {
        self.inner.call_all_pages(request).await
    }

    /// Update a boot volume.
    pub async fn update_boot_volume(
        &self,
        request: &UpdateBootVolumeRequest,
    ) -> Result<BootVolumeResponse> {
        self.inner.call(request).await
    }

    /// Delete a detached boot volume.
    pub async fn delete_boot_volume(
        &self,
        request: &DeleteBootVolumeRequest,
    ) -> Result<DeleteBootVolumeResponse> {
        self.inner.call(request).await
    }

    /// Fetch the encryption key of a boot volume.
    pub async fn get_boot_volume_kms_key(
        &self,
        request: &GetBootVolumeKmsKeyRequest,
    ) -> Result<BootVolumeKmsKeyResponse> {
        self.inner.call(request).await
    }

    /// Assign a new encryption key to a boot volume.
    pub async fn update_boot_volume_kms_key(
        &self,
        request: &UpdateBootVolumeKmsKeyRequest,
    ) -> Result<BootVolumeKmsKeyResponse> {
        self.inner.call(request).await
    }

    /// Revert a boot volume to Oracle-managed keys.
    pub async fn delete_boot_volume_kms_key(
        &self,
        request: &DeleteBootVolumeKmsKeyRequest,
    ) -> Result<DeleteBootVolumeKmsKeyResponse> {
        self.inner.call(request).await
    }

    /// Back up a boot volume.
    pub async fn create_boot_volume_backup(
        &self,
        request: &CreateBootVolumeBackupRequest,
    ) -> Result<BootVolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// Fetch a boot volume backup.
    pub async fn get_boot_volume_backup(
        &self,
        request: &GetBootVolumeBackupRequest,
    ) -> Result<BootVolumeBackupResponse> {
        self.inner.call(request).await
    }

    /// List one page of boot volume backups.
    pub async fn list_boot_volume_backups(
        &self,
        request: &ListBootVolumeBackupsRequest,
    ) -> Result<ListBootVolumeBackupsResponse> {
        self.inner.call(request).await
    }

    /// List every boot volume backup matching `request`.
    pub async fn list_all_boot_volume_backups(
        &self,
        request: &ListBootVolumeBackupsRequest,
    ) -> Result<Vec<BootVolumeBackup>> {
        self.inner.call_all_pages(request).await
    }

    /// Delete a boot volume backup.
    pub async fn delete_boot_volume_backup(
        &self,
        request: &DeleteBootVolumeBackupRequest,
    ) -> Result<DeleteBootVolumeBackupResponse> {
        self.inner.call(request).await
    }
}
