//! Virtual Network client and data models for the OCI Core Services API.
//!
//! Covers VCNs, subnets and VNICs, the rules of network security groups, and
//! bring-your-own-IP ranges through validation, advertisement and withdrawal.

#![deny(missing_docs)]

pub mod client;
pub mod models;
pub mod requests;

pub use client::{VirtualNetworkClient, VirtualNetworkClientBuilder};
pub use models::{
    AddSecurityRuleDetails, ByoipRange, ByoipRangeLifecycleState, PortRange, SecurityRule,
    SecurityRuleDirection, Subnet, Vcn, Vnic,
};

/// Convenient result alias that reuses the shared OCI error type.
pub type Result<T> = oci_core::Result<T>;
