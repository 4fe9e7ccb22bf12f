//! Custom image builds on Oracle Cloud Infrastructure.
//!
//! An image build launches a temporary instance from a base image, waits for
//! it to come up, captures it as a new custom image and terminates it again.
//! [`ImageBuildConfig`] describes the build, and the [`Driver`] trait exposes
//! the individual cloud operations so build steps can be tested against a
//! mock. [`OciDriver`] is the implementation backed by the Compute and
//! Virtual Network clients.

#![warn(missing_docs)]

pub mod config;
pub mod driver;

pub use config::{BaseImageFilter, ImageBuildConfig, VnicConfig};
pub use driver::{build_image, Driver, OciDriver};

/// Convenient result alias that reuses the shared OCI error type.
pub type Result<T> = oci_core::Result<T>;
