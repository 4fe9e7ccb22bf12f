//! Core OCI domain types.
//!
//! This module provides the service enumeration, realms and regions used to
//! derive service endpoints, plus the tag map aliases shared by every model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// API version path shared by the Core Services.
pub const CORE_API_VERSION: &str = "20160918";

/// Endpoint template shared by the Core Services.
pub const IAAS_ENDPOINT_TEMPLATE: &str = "https://iaas.{region}.{secondLevelDomain}";

/// Free-form tags: simple key/value pairs with no predefined schema.
pub type FreeformTags = HashMap<String, String>;

/// Defined tags: namespace → key → value.
pub type DefinedTags = HashMap<String, HashMap<String, serde_json::Value>>;

/// Supported OCI services.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OciService {
    /// Block volumes, boot volumes and their backups
    Blockstorage,
    /// Instances, images and VNIC attachments
    Compute,
    /// Instance pools and instance configurations
    ComputeManagement,
    /// VCNs, subnets, VNICs, security rules and BYOIP ranges
    VirtualNetwork,
}

impl OciService {
    /// Returns the service name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Blockstorage => "blockstorage",
            Self::Compute => "compute",
            Self::ComputeManagement => "computemanagement",
            Self::VirtualNetwork => "virtualnetwork",
        }
    }

    /// Returns all available services.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Blockstorage,
            Self::Compute,
            Self::ComputeManagement,
            Self::VirtualNetwork,
        ]
    }

    /// Host prefix of the service endpoint.
    #[must_use]
    pub const fn endpoint_prefix(&self) -> &'static str {
        "iaas"
    }

    /// Endpoint template with `{region}` and `{secondLevelDomain}` placeholders.
    #[must_use]
    pub const fn endpoint_template(&self) -> &'static str {
        IAAS_ENDPOINT_TEMPLATE
    }

    /// API version path segment.
    #[must_use]
    pub const fn api_version(&self) -> &'static str {
        CORE_API_VERSION
    }
}

impl FromStr for OciService {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "blockstorage" => Ok(Self::Blockstorage),
            "compute" => Ok(Self::Compute),
            "computemanagement" => Ok(Self::ComputeManagement),
            "virtualnetwork" => Ok(Self::VirtualNetwork),
            _ => Err(Error::InvalidRequest(format!("Unknown service: {s}"))),
        }
    }
}

impl fmt::Display for OciService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// OCI realm: a set of regions sharing a second-level domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Realm {
    /// Commercial realm
    Oc1,
    /// US Government (FedRAMP)
    Oc2,
    /// US Government (DISA)
    Oc3,
    /// UK Government
    Oc4,
    /// Japan dedicated realm
    Oc8,
}

impl Realm {
    /// Realm key as it appears in OCIDs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Oc1 => "oc1",
            Self::Oc2 => "oc2",
            Self::Oc3 => "oc3",
            Self::Oc4 => "oc4",
            Self::Oc8 => "oc8",
        }
    }

    /// Second-level domain of the realm's endpoints.
    #[must_use]
    pub const fn second_level_domain(&self) -> &'static str {
        match self {
            Self::Oc1 => "oraclecloud.com",
            Self::Oc2 | Self::Oc3 => "oraclegovcloud.com",
            Self::Oc4 => "oraclegovcloud.uk",
            Self::Oc8 => "oraclecloud8.com",
        }
    }
}

impl FromStr for Realm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oc1" => Ok(Self::Oc1),
            "oc2" => Ok(Self::Oc2),
            "oc3" => Ok(Self::Oc3),
            "oc4" => Ok(Self::Oc4),
            "oc8" => Ok(Self::Oc8),
            _ => Err(Error::InvalidRequest(format!("Unknown realm: {s}"))),
        }
    }
}

impl fmt::Display for Realm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// (region id, short code, realm)
const KNOWN_REGIONS: &[(&str, &str, Realm)] = &[
    ("af-johannesburg-1", "jnb", Realm::Oc1),
    ("ap-chuncheon-1", "yny", Realm::Oc1),
    ("ap-hyderabad-1", "hyd", Realm::Oc1),
    ("ap-melbourne-1", "mel", Realm::Oc1),
    ("ap-mumbai-1", "bom", Realm::Oc1),
    ("ap-osaka-1", "kix", Realm::Oc1),
    ("ap-seoul-1", "icn", Realm::Oc1),
    ("ap-singapore-1", "sin", Realm::Oc1),
    ("ap-sydney-1", "syd", Realm::Oc1),
    ("ap-tokyo-1", "nrt", Realm::Oc1),
    ("ca-montreal-1", "yul", Realm::Oc1),
    ("ca-toronto-1", "yyz", Realm::Oc1),
    ("eu-amsterdam-1", "ams", Realm::Oc1),
    ("eu-frankfurt-1", "fra", Realm::Oc1),
    ("eu-madrid-1", "mad", Realm::Oc1),
    ("eu-marseille-1", "mrs", Realm::Oc1),
    ("eu-milan-1", "lin", Realm::Oc1),
    ("eu-paris-1", "cdg", Realm::Oc1),
    ("eu-stockholm-1", "arn", Realm::Oc1),
    ("eu-zurich-1", "zrh", Realm::Oc1),
    ("il-jerusalem-1", "mtz", Realm::Oc1),
    ("me-dubai-1", "dxb", Realm::Oc1),
    ("me-jeddah-1", "jed", Realm::Oc1),
    ("mx-queretaro-1", "qro", Realm::Oc1),
    ("sa-santiago-1", "scl", Realm::Oc1),
    ("sa-saopaulo-1", "gru", Realm::Oc1),
    ("sa-vinhedo-1", "vcp", Realm::Oc1),
    ("uk-cardiff-1", "cwl", Realm::Oc1),
    ("uk-london-1", "lhr", Realm::Oc1),
    ("us-ashburn-1", "iad", Realm::Oc1),
    ("us-chicago-1", "ord", Realm::Oc1),
    ("us-phoenix-1", "phx", Realm::Oc1),
    ("us-sanjose-1", "sjc", Realm::Oc1),
    ("us-langley-1", "lfi", Realm::Oc2),
    ("us-luke-1", "luf", Realm::Oc2),
    ("us-gov-ashburn-1", "ric", Realm::Oc3),
    ("us-gov-chicago-1", "pia", Realm::Oc3),
    ("us-gov-phoenix-1", "tus", Realm::Oc3),
    ("uk-gov-cardiff-1", "brs", Realm::Oc4),
    ("uk-gov-london-1", "ltn", Realm::Oc4),
    ("ap-chiyoda-1", "nja", Realm::Oc8),
    ("ap-ibaraki-1", "ukb", Realm::Oc8),
];

/// An OCI region.
///
/// Parsing accepts full region identifiers (`us-phoenix-1`) and short codes
/// (`phx`). Identifiers not in the built-in table are accepted as long as they
/// look like region ids and are assumed to live in the commercial realm.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Region {
    name: String,
    realm: Realm,
}

impl Region {
    /// Parse a region id or short code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] for strings that cannot be a region id.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        if let Some((name, _, realm)) = KNOWN_REGIONS
            .iter()
            .find(|(name, code, _)| *name == normalized || *code == normalized)
        {
            return Ok(Self {
                name: (*name).to_string(),
                realm: *realm,
            });
        }

        let looks_like_region = normalized.contains('-')
            && normalized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
            && !normalized.starts_with('-')
            && !normalized.ends_with('-');
        if !looks_like_region {
            return Err(Error::ConfigError(format!("Invalid region: {input}")));
        }

        Ok(Self {
            name: normalized,
            realm: Realm::Oc1,
        })
    }

    /// Region identifier, e.g. `us-phoenix-1`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Realm the region belongs to.
    #[must_use]
    pub const fn realm(&self) -> Realm {
        self.realm
    }

    /// Short code, when known.
    #[must_use]
    pub fn short_code(&self) -> Option<&'static str> {
        KNOWN_REGIONS
            .iter()
            .find(|(name, _, _)| *name == self.name)
            .map(|(_, code, _)| *code)
    }

    /// Fill an endpoint template with this region.
    #[must_use]
    pub fn endpoint_for_template(&self, template: &str) -> String {
        template
            .replace("{region}", &self.name)
            .replace("{secondLevelDomain}", self.realm.second_level_domain())
    }

    /// Versioned base URL of `service` in this region.
    #[must_use]
    pub fn endpoint(&self, service: OciService) -> String {
        format!(
            "{}/{}",
            self.endpoint_for_template(service.endpoint_template()),
            service.api_version()
        )
    }
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Region {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Region> for String {
    fn from(region: Region) -> Self {
        region.name
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
