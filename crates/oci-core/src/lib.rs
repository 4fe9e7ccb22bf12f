//! # oci-core
//!
//! Core types and utilities shared by the OCI Core Services API bindings.
//!
//! This crate provides the error hierarchy, the retrying HTTP transport used by
//! every service client, and the protocol types that request and response
//! wrappers are built from.
//!
//! ## Modules
//!
//! - [`error`] - Error types and service error decoding
//! - [`client`] - Retry policies, HTTP configuration and the shared service client
//! - [`request`] - Request/response traits and HTTP request descriptions
//! - [`pagination`] - Traits for `opc-next-page` pagination
//! - [`enums`] - The `oci_enum!` macro and shared string enums
//! - [`polymorphic`] - The `oci_polymorphic!` macro for discriminated models
//! - [`ocid`] - Oracle Cloud Identifiers and typed wrappers
//! - [`types`] - Services, realms and regions
//! - [`config`] - Client configuration and CLI config file parsing
//! - [`waiter`] - Lifecycle state polling
//! - [`query`] - Query parameter builder

#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod enums;
pub mod error;
pub mod ocid;
pub mod pagination;
pub mod polymorphic;
pub mod query;
pub mod request;
pub mod types;
pub mod waiter;

// Re-export commonly used types
pub use error::{Error, Result};
pub use reqwest::Method;

#[doc(hidden)]
pub use serde as __serde;
