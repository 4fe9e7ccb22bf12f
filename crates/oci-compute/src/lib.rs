//! Compute client and data models for the OCI Core Services API.
//!
//! Provides typed structures and an asynchronous client for launching and
//! managing instances, capturing images and inspecting VNIC attachments.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod requests;

pub use client::{ComputeClient, ComputeClientBuilder};
pub use models::{
    CreateImageDetails, CreateVnicDetails, Image, ImageLifecycleState, Instance, InstanceAction,
    InstanceCredentials, InstanceLifecycleState, InstanceSourceDetails,
    InstanceSourceViaImageDetails, LaunchInstanceDetails,
    LaunchMode, LaunchOptions, VnicAttachment,
};

/// Convenient result alias that reuses the shared OCI error type.
pub type Result<T> = oci_core::Result<T>;
