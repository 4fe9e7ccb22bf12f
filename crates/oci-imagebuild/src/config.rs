//! Image build configuration.
//!
//! Field names follow the snake_case keys of a build template, so a
//! configuration can be deserialized straight from JSON. Call
//! [`ImageBuildConfig::prepare`] before handing it to a driver: it validates
//! the configuration and fills in the values derived from other fields.

use std::borrow::Cow;
use std::collections::HashMap;
use std::path::PathBuf;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use oci_compute::models::Metadata;
use oci_compute::{CreateVnicDetails, LaunchMode};
use oci_core::ocid::{CompartmentId, ImageId, NetworkSecurityGroupId, SubnetId, TenancyId};
use oci_core::types::{DefinedTags, FreeformTags};
use serde::{Deserialize, Serialize};
use oci_core::Error;
use tracing::debug;
use validator::{Validate, ValidationError};

use crate::Result;

/// Boot volume size used when none is configured.
pub const DEFAULT_DISK_SIZE_GBS: i64 = 50;

const MAX_TAG_LENGTH: usize = 100;

/// Settings of the primary VNIC of the build instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VnicConfig {
    /// Whether to assign a public IP.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assign_public_ip: Option<bool>,
    /// Defined tags of the VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
    /// Display name of the VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Free-form tags of the VNIC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<FreeformTags>,
    /// Hostname label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname_label: Option<String>,
    /// Network security groups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nsg_ids: Option<Vec<NetworkSecurityGroupId>>,
    /// Private IP to request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_ip: Option<String>,
    /// Skip the source/destination check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skip_source_dest_check: Option<bool>,
    /// Subnet of the VNIC.
    #[serde(default, rename = "subnet_ocid", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<SubnetId>,
}

impl VnicConfig {
    /// The `createVnicDetails` of the launch request.
    #[must_use]
    pub fn to_details(&self) -> CreateVnicDetails {
        CreateVnicDetails {
            assign_public_ip: self.assign_public_ip,
            defined_tags: self.defined_tags.clone(),
            display_name: self.display_name.clone(),
            freeform_tags: self.tags.clone(),
            hostname_label: self.hostname_label.clone(),
            nsg_ids: self.nsg_ids.clone(),
            private_ip: self.private_ip.clone(),
            skip_source_dest_check: self.skip_source_dest_check,
            subnet_id: self.subnet_id.clone(),
        }
    }
}

/// Criteria selecting the newest matching platform image as the base image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseImageFilter {
    /// Compartment to search; defaults to the build compartment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<CompartmentId>,
    /// Exact display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Regular expression the display name must match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name_search: Option<String>,
    /// Operating system, e.g. `Oracle Linux`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system: Option<String>,
    /// Operating system version, e.g. `8`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operating_system_version: Option<String>,
    /// Shape the image must support; defaults to the build shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
}

impl BaseImageFilter {
    /// Whether no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Configuration of a custom image build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_image_sources"))]
pub struct ImageBuildConfig {
    /// Availability domain of the build instance.
    #[validate(length(min = 1, message = "'availability_domain' must be specified"))]
    pub availability_domain: String,

    /// Compartment of the build instance; defaults to the tenancy.
    #[serde(default, rename = "compartment_ocid", skip_serializing_if = "Option::is_none")]
    pub compartment_id: Option<CompartmentId>,

    /// Tenancy of the build; taken from the client profile when absent.
    #[serde(default, rename = "tenancy_ocid", skip_serializing_if = "Option::is_none")]
    pub tenancy_id: Option<TenancyId>,

    /// Compartment of the captured image; defaults to `compartment_ocid`.
    #[serde(default, rename = "image_compartment_ocid", skip_serializing_if = "Option::is_none")]
    pub image_compartment_id: Option<CompartmentId>,

    /// Shape of the build instance.
    #[validate(length(min = 1, message = "'shape' must be specified"))]
    pub shape: String,

    /// Subnet of the build instance.
    #[serde(default, rename = "subnet_ocid", skip_serializing_if = "Option::is_none")]
    pub subnet_id: Option<SubnetId>,

    /// Primary VNIC settings.
    #[serde(default)]
    pub create_vnic_details: VnicConfig,

    /// Base image to launch from.
    #[serde(default, rename = "base_image_ocid", skip_serializing_if = "Option::is_none")]
    pub base_image_id: Option<ImageId>,

    /// Criteria selecting the base image when `base_image_ocid` is absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image_filter: Option<BaseImageFilter>,

    /// Display name of the captured image; defaults to `packer-<unix time>`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,

    /// Launch mode recorded on the captured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_launch_mode: Option<LaunchMode>,

    /// Display name of the build instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_name: Option<String>,

    /// Free-form tags of the build instance.
    #[validate(custom(function = "validate_tags"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_tags: Option<FreeformTags>,

    /// Defined tags of the build instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_defined_tags: Option<DefinedTags>,

    /// Boot volume size in GBs.
    #[validate(range(min = 50, max = 16384, message = "'disk_size' must be between 50 and 16384 GBs"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_size: Option<i64>,

    /// Instance metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: Metadata,

    /// Cloud-init user data; encoded to base64 by `prepare` unless it
    /// already is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    /// File holding the cloud-init user data, read by `prepare`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data_file: Option<PathBuf>,

    /// Connect through the private IP of the build instance.
    #[serde(default)]
    pub use_private_ip: bool,

    /// Free-form tags of the captured image.
    #[validate(custom(function = "validate_tags"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<FreeformTags>,

    /// Defined tags of the captured image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defined_tags: Option<DefinedTags>,
}

fn validation_error(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_image_sources(config: &ImageBuildConfig) -> std::result::Result<(), ValidationError> {
    config.validate_sources()
}

fn validate_tags(tags: &FreeformTags) -> std::result::Result<(), ValidationError> {
    for (key, value) in tags {
        let key = key.trim();
        let value = value.trim();
        if key.is_empty() {
            return Err(validation_error("tags", "Tag key empty in config"));
        }
        if key.len() > MAX_TAG_LENGTH {
            return Err(validation_error(
                "tags",
                format!(
                    "Tag key length too long. Maximum {MAX_TAG_LENGTH} but found {}. Key: {key}",
                    key.len()
                ),
            ));
        }
        if value.is_empty() {
            return Err(validation_error("tags", "Tag value empty in config"));
        }
        if value.len() > MAX_TAG_LENGTH {
            return Err(validation_error(
                "tags",
                format!(
                    "Tag value length too long. Maximum {MAX_TAG_LENGTH} but found {}. Key: {key}",
                    value.len()
                ),
            ));
        }
    }
    Ok(())
}

impl ImageBuildConfig {
    /// Minimal configuration launching from `base_image_id` into `subnet_id`.
    #[must_use]
    pub fn new(
        availability_domain: impl Into<String>,
        compartment_id: CompartmentId,
        shape: impl Into<String>,
        subnet_id: SubnetId,
        base_image_id: ImageId,
    ) -> Self {
        Self {
            availability_domain: availability_domain.into(),
            compartment_id: Some(compartment_id),
            tenancy_id: None,
            image_compartment_id: None,
            shape: shape.into(),
            subnet_id: Some(subnet_id),
            create_vnic_details: VnicConfig::default(),
            base_image_id: Some(base_image_id),
            base_image_filter: None,
            image_name: None,
            image_launch_mode: None,
            instance_name: None,
            instance_tags: None,
            instance_defined_tags: None,
            disk_size: None,
            metadata: Metadata::new(),
            user_data: None,
            user_data_file: None,
            use_private_ip: false,
            tags: None,
            defined_tags: None,
        }
    }

    /// Check the fields that may come from more than one place: compartment,
    /// subnet, base image and user data.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate_sources(&self) -> std::result::Result<(), ValidationError> {
        if self.compartment_id.is_none() && self.tenancy_id.is_none() {
            return Err(validation_error(
                "compartment_ocid",
                "'compartment_ocid' or 'tenancy_ocid' must be specified",
            ));
        }

        match (&self.subnet_id, &self.create_vnic_details.subnet_id) {
            (None, None) => {
                return Err(validation_error("subnet_ocid", "'subnet_ocid' must be specified"));
            }
            (Some(subnet), Some(vnic_subnet)) if subnet != vnic_subnet => {
                return Err(validation_error(
                    "subnet_ocid",
                    "'create_vnic_details[subnet]' must match 'subnet_ocid' if both are specified",
                ));
            }
            _ => {}
        }

        let has_filter = self
            .base_image_filter
            .as_ref()
            .is_some_and(|filter| !filter.is_empty());
        if self.base_image_id.is_none() && !has_filter {
            return Err(validation_error(
                "base_image",
                "'base_image_ocid' or 'base_image_filter' must be specified",
            ));
        }

        if self.user_data.is_some() && self.user_data_file.is_some() {
            return Err(validation_error(
                "user_data",
                "Only one of user_data or user_data_file can be specified.",
            ));
        }
        Ok(())
    }

    /// Validate the configuration and fill in derived defaults.
    ///
    /// Defaults applied:
    /// - the build compartment is the tenancy;
    /// - the image compartment and the base image filter's compartment and
    ///   shape follow the build instance;
    /// - the VNIC subnet follows `subnet_ocid`;
    /// - the boot volume is 50 GBs and the image is named after the current
    ///   time.
    ///
    /// `user_data_file` is read into `user_data`, and user data that is not
    /// valid base64 is encoded.
    ///
    /// # Errors
    ///
    /// Returns [`oci_core::Error::ValidationError`] listing every violated
    /// rule, or [`oci_core::Error::ConfigError`] if the user data file
    /// cannot be read.
    pub fn prepare(mut self) -> Result<Self> {
        self.validate()?;

        let compartment_id = match (&self.compartment_id, &self.tenancy_id) {
            (Some(compartment_id), _) => compartment_id.clone(),
            (None, Some(tenancy_id)) => {
                debug!(%tenancy_id, "defaulting compartment to the tenancy");
                CompartmentId::new(tenancy_id.as_str())
            }
            (None, None) => return Err(missing_compartment()),
        };
        self.compartment_id = Some(compartment_id.clone());

        if self.image_compartment_id.is_none() {
            self.image_compartment_id = Some(compartment_id.clone());
        }
        if self.create_vnic_details.subnet_id.is_none() {
            self.create_vnic_details.subnet_id = self.subnet_id.clone();
        }
        if let Some(filter) = self.base_image_filter.as_mut() {
            filter
                .compartment_id
                .get_or_insert_with(|| compartment_id.clone());
            filter.shape.get_or_insert_with(|| self.shape.clone());
        }
        self.disk_size.get_or_insert(DEFAULT_DISK_SIZE_GBS);
        if self.image_name.is_none() {
            let name = format!("packer-{}", Utc::now().timestamp());
            debug!(image_name = %name, "defaulting image name");
            self.image_name = Some(name);
        }

        if let Some(path) = self.user_data_file.take() {
            let contents = std::fs::read_to_string(&path).map_err(|err| {
                Error::ConfigError(format!(
                    "Problem reading user_data_file {}: {err}",
                    path.display()
                ))
            })?;
            self.user_data = Some(contents);
        }
        if let Some(user_data) = self.user_data.as_mut() {
            if STANDARD.decode(user_data.as_bytes()).is_err() {
                debug!("base64 encoding user data");
                *user_data = STANDARD.encode(user_data.as_bytes());
            }
        }

        Ok(self)
    }

    /// Compartment of the build instance.
    ///
    /// # Errors
    ///
    /// Returns [`oci_core::Error::ConfigError`] if neither a compartment nor
    /// a tenancy is configured.
    pub fn compartment(&self) -> Result<&CompartmentId> {
        self.compartment_id.as_ref().ok_or_else(missing_compartment)
    }

    /// Compartment receiving the captured image.
    ///
    /// # Errors
    ///
    /// Returns [`oci_core::Error::ConfigError`] if no compartment is known.
    pub fn image_compartment(&self) -> Result<&CompartmentId> {
        match &self.image_compartment_id {
            Some(compartment_id) => Ok(compartment_id),
            None => self.compartment(),
        }
    }
}

fn missing_compartment() -> Error {
    Error::ConfigError("'compartment_ocid' or 'tenancy_ocid' must be specified".to_string())
}
