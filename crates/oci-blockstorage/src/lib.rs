//! Block Storage client and data models for the OCI Core Services API.
//!
//! Covers block volumes, boot volumes, their backups and their encryption
//! keys. Every operation takes a request wrapper from [`requests`] and
//! returns the matching response wrapper.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod requests;

pub use client::{BlockstorageClient, BlockstorageClientBuilder};
pub use models::{
    BootVolume, BootVolumeBackup, BootVolumeLifecycleState, BootVolumeSourceDetails,
    CreateBootVolumeBackupDetails, CreateBootVolumeDetails, CreateVolumeBackupDetails,
    CreateVolumeDetails, UpdateBootVolumeDetails, UpdateVolumeDetails, Volume, VolumeBackup,
    VolumeBackupLifecycleState, VolumeBackupType, VolumeLifecycleState, VolumeSourceDetails,
};

/// Convenient result alias that reuses the shared OCI error type.
pub type Result<T> = oci_core::Result<T>;
