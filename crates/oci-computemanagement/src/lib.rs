//! Compute Management client and data models for the OCI Core Services API.
//!
//! Instance configurations are reusable launch templates. Instance pools keep
//! a fixed number of instances created from one configuration, spread over
//! placement configurations and optionally registered with load balancers.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod requests;

pub use client::{ComputeManagementClient, ComputeManagementClientBuilder};
pub use models::{
    CreateInstanceConfigurationDetails, CreateInstancePoolDetails, InstanceConfiguration,
    InstanceConfigurationInstanceDetails, InstanceConfigurationLaunchInstanceDetails, InstancePool,
    InstancePoolLifecycleState, InstancePoolPlacementConfiguration, UpdateInstancePoolDetails,
};

/// Convenient result alias that reuses the shared OCI error type.
pub type Result<T> = oci_core::Result<T>;
