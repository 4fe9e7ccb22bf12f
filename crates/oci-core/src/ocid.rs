//! Oracle Cloud Identifiers (OCIDs).
//!
//! OCIDs have the shape `ocid1.<resource type>.<realm>.[region][.future use].<unique id>`.
//! This module provides a parser for that shape and strongly-typed wrappers
//! for the resources the bindings deal with, preventing id mix-ups at compile
//! time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

const OCID_VERSION: &str = "ocid1";

/// The components of a parsed OCID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OcidParts<'a> {
    /// Resource type (`instance`, `volume`, ...).
    pub resource_type: &'a str,
    /// Realm (`oc1`, ...).
    pub realm: &'a str,
    /// Region key, empty for global resources.
    pub region: Option<&'a str>,
    /// Reserved segment, rarely present.
    pub future_use: Option<&'a str>,
    /// Unique portion.
    pub unique_id: &'a str,
}

impl<'a> OcidParts<'a> {
    /// Split an OCID into its components.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOcid`] if the string does not have the OCID shape.
    pub fn parse(input: &'a str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidOcid(format!("{input}: {reason}"));

        let parts: Vec<&str> = input.split('.').collect();
        if parts.len() < 5 || parts.len() > 6 {
            return Err(invalid("expected 5 or 6 dot separated segments"));
        }
        if parts[0] != OCID_VERSION {
            return Err(invalid("must start with `ocid1`"));
        }

        let (future_use, unique_id) = if parts.len() == 6 {
            (non_empty(parts[4]), parts[5])
        } else {
            (None, parts[4])
        };

        let ocid = Self {
            resource_type: parts[1],
            realm: parts[2],
            region: non_empty(parts[3]),
            future_use,
            unique_id,
        };

        if ocid.resource_type.is_empty() {
            return Err(invalid("missing resource type"));
        }
        if ocid.realm.is_empty() {
            return Err(invalid("missing realm"));
        }
        if ocid.unique_id.is_empty() {
            return Err(invalid("missing unique id"));
        }

        Ok(ocid)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

/// Returns true if `input` has the OCID shape.
#[must_use]
pub fn is_valid_ocid(input: &str) -> bool {
    OcidParts::parse(input).is_ok()
}

/// Macro to generate strongly-typed OCID wrapper types.
macro_rules! ocid_type {
    ($(#[$meta:meta])* $name:ident, $doc:expr, [$($resource_type:literal),+ $(,)?]) => {
        $(#[$meta])*
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Resource types accepted by [`Self::parse_str`].
            pub const RESOURCE_TYPES: &'static [&'static str] = &[$($resource_type),+];

            /// Wraps a value without validation.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Parses and validates an OCID of this resource type.
            ///
            /// # Errors
            ///
            /// Returns an error if the string is not an OCID or names another
            /// resource type.
            pub fn parse_str(input: &str) -> Result<Self> {
                let parts = OcidParts::parse(input)?;
                if !Self::RESOURCE_TYPES.contains(&parts.resource_type) {
                    return Err(Error::InvalidOcid(format!(
                        "{input}: expected resource type {}, found `{}`",
                        Self::RESOURCE_TYPES.join(" or "),
                        parts.resource_type
                    )));
                }
                Ok(Self(input.to_string()))
            }

            /// Returns the OCID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Converts into the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse_str(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(wrapper: $name) -> Self {
                wrapper.0
            }
        }
    };
}

// Identity
ocid_type!(CompartmentId, "Compartment (or root tenancy) OCID", ["compartment", "tenancy"]);
ocid_type!(TenancyId, "Tenancy OCID", ["tenancy"]);
ocid_type!(UserId, "User OCID", ["user"]);

// Block storage
ocid_type!(VolumeId, "Block volume OCID", ["volume"]);
ocid_type!(BootVolumeId, "Boot volume OCID", ["bootvolume"]);
ocid_type!(VolumeBackupId, "Block volume backup OCID", ["volumebackup"]);
ocid_type!(BootVolumeBackupId, "Boot volume backup OCID", ["bootvolumebackup"]);
ocid_type!(VolumeGroupId, "Volume group OCID", ["volumegroup"]);
ocid_type!(KmsKeyId, "Vault master encryption key OCID", ["key"]);

// Compute
ocid_type!(ImageId, "Image OCID", ["image"]);
ocid_type!(InstanceId, "Instance OCID", ["instance"]);
ocid_type!(DedicatedVmHostId, "Dedicated virtual machine host OCID", ["dedicatedvmhost"]);
ocid_type!(InstancePoolId, "Instance pool OCID", ["instancepool"]);
ocid_type!(InstanceConfigurationId, "Instance configuration OCID", ["instanceconfiguration"]);
ocid_type!(
    InstancePoolLoadBalancerAttachmentId,
    "Instance pool load balancer attachment OCID",
    ["instancepoolloadbalancerattachment"]
);
ocid_type!(LoadBalancerId, "Load balancer OCID", ["loadbalancer", "networkloadbalancer"]);

// Networking
ocid_type!(VcnId, "Virtual cloud network OCID", ["vcn"]);
ocid_type!(SubnetId, "Subnet OCID", ["subnet"]);
ocid_type!(VnicId, "VNIC OCID", ["vnic"]);
ocid_type!(VnicAttachmentId, "VNIC attachment OCID", ["vnicattachment"]);
ocid_type!(NetworkSecurityGroupId, "Network security group OCID", ["networksecuritygroup"]);
ocid_type!(ByoipRangeId, "BYOIP range OCID", ["byoiprange"]);

#[cfg(test)]
mod tests {
    use super::*;

    const INSTANCE: &str = "ocid1.instance.oc1.phx.anyhqljrabcdefghijklmnop";
    const TENANCY: &str = "ocid1.tenancy.oc1..aaaaaaaabcdefghijk";

    #[test]
    fn test_parse_regional_ocid() {
        let parts = OcidParts::parse(INSTANCE).unwrap();
        assert_eq!(parts.resource_type, "instance");
        assert_eq!(parts.realm, "oc1");
        assert_eq!(parts.region, Some("phx"));
        assert_eq!(parts.future_use, None);
        assert_eq!(parts.unique_id, "anyhqljrabcdefghijklmnop");
    }

    #[test]
    fn test_parse_global_ocid() {
        let parts = OcidParts::parse(TENANCY).unwrap();
        assert_eq!(parts.resource_type, "tenancy");
        assert_eq!(parts.region, None);
        assert_eq!(parts.unique_id, "aaaaaaaabcdefghijk");
    }

    #[test]
    fn test_parse_with_future_use_segment() {
        let parts = OcidParts::parse("ocid1.volume.oc1.iad.v2.abc").unwrap();
        assert_eq!(parts.future_use, Some("v2"));
        assert_eq!(parts.unique_id, "abc");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in [
            "",
            "not-an-ocid",
            "ocid2.instance.oc1.phx.abc",
            "ocid1..oc1.phx.abc",
            "ocid1.instance..phx.abc",
            "ocid1.instance.oc1.phx.",
            "ocid1.instance.oc1",
        ] {
            assert!(
                matches!(OcidParts::parse(input), Err(Error::InvalidOcid(_))),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_typed_parse_checks_resource_type() {
        let id = InstanceId::parse_str(INSTANCE).unwrap();
        assert_eq!(id.as_str(), INSTANCE);
        assert_eq!(id.to_string(), INSTANCE);

        let err = VolumeId::parse_str(INSTANCE).unwrap_err();
        assert!(err.to_string().contains("expected resource type volume"));
    }

    #[test]
    fn test_compartment_accepts_tenancy() {
        assert!(CompartmentId::parse_str(TENANCY).is_ok());
        assert!(CompartmentId::parse_str("ocid1.compartment.oc1..xyz").is_ok());
        assert!(CompartmentId::parse_str(INSTANCE).is_err());
    }

    #[test]
    fn test_from_str() {
        let id: InstanceId = INSTANCE.parse().unwrap();
        assert_eq!(String::from(id), INSTANCE);
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = ImageId::new("ocid1.image.oc1.phx.abc");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"ocid1.image.oc1.phx.abc\"");
        let back: ImageId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_is_valid_ocid() {
        assert!(is_valid_ocid(INSTANCE));
        assert!(!is_valid_ocid("instance-1"));
    }
}
