//! Configuration structures for OCI clients.
//!
//! This module provides the client configuration shared by every service
//! client, and a parser for the INI-style config file used by the OCI CLI
//! (`~/.oci/config`).

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use crate::client::{ClientConfig, RetryPolicy, ServiceClientBuilder};
use crate::error::{Error, Result};
use crate::types::{OciService, Region};

/// Profile read when none is specified.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// Configuration for an OCI client instance.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct OciClientConfig {
    /// Region id or short code
    #[validate(length(min = 1))]
    pub region: String,

    /// Tenancy OCID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,

    /// User OCID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// API signing key fingerprint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<String>,

    /// Path to the API signing key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_file: Option<PathBuf>,

    /// Pass phrase of the signing key
    #[serde(skip)]
    pub pass_phrase: Option<SecretString>,

    /// Endpoint override (scheme and host, without the API version)
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Whether to verify TLS certificates
    #[serde(default = "default_tls_verify")]
    pub tls_verify: bool,

    /// Optional path to custom CA certificate
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_ca_cert: Option<PathBuf>,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300))]
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Maximum number of retry attempts
    #[validate(range(min = 0, max = 10))]
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

const fn default_tls_verify() -> bool {
    true
}

const fn default_request_timeout_secs() -> u64 {
    60
}

const fn default_max_retries() -> u32 {
    3
}

impl OciClientConfig {
    /// Create a new client configuration for `region`.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails or the region cannot be parsed.
    pub fn new(region: impl Into<String>) -> Result<Self> {
        let config = Self {
            region: region.into(),
            tenancy: None,
            user: None,
            fingerprint: None,
            key_file: None,
            pass_phrase: None,
            endpoint: None,
            tls_verify: default_tls_verify(),
            tls_ca_cert: None,
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        };

        config.check()?;
        Ok(config)
    }

    /// Load a profile from an OCI CLI config file.
    ///
    /// Keys from the `DEFAULT` section are inherited by every other profile.
    /// A leading `~` in `key_file` is expanded to the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the profile is missing,
    /// or the profile has no `region`.
    pub fn from_config_file(path: impl AsRef<Path>, profile: Option<&str>) -> Result<Self> {
        let path = path.as_ref();
        let profile = profile.unwrap_or(DEFAULT_PROFILE);
        debug!(path = %path.display(), profile, "loading OCI config file");

        let contents = std::fs::read_to_string(path).map_err(|err| {
            Error::ConfigError(format!(
                "Failed to read config file {}: {err}",
                path.display()
            ))
        })?;

        let sections = parse_ini(&contents)?;
        let mut values = section(&sections, DEFAULT_PROFILE).cloned().unwrap_or_default();
        match section(&sections, profile) {
            Some(section) => values.extend(section.clone()),
            None if profile == DEFAULT_PROFILE && !values.is_empty() => {}
            None => {
                return Err(Error::ConfigError(format!(
                    "Profile {profile} not found in {}",
                    path.display()
                )))
            }
        }

        let region = values.remove("region").ok_or_else(|| {
            Error::ConfigError(format!("Profile {profile} does not define a region"))
        })?;

        let config = Self {
            region,
            tenancy: values.remove("tenancy"),
            user: values.remove("user"),
            fingerprint: values.remove("fingerprint"),
            key_file: values.remove("key_file").map(|value| expand_home(&value)),
            pass_phrase: values.remove("pass_phrase").map(SecretString::from),
            endpoint: None,
            tls_verify: default_tls_verify(),
            tls_ca_cert: None,
            request_timeout_secs: default_request_timeout_secs(),
            max_retries: default_max_retries(),
        };

        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<()> {
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))?;
        self.region()?;
        Ok(())
    }

    /// Override the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set whether to verify TLS certificates.
    #[must_use]
    pub const fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Set custom CA certificate path.
    #[must_use]
    pub fn with_ca_cert(mut self, path: PathBuf) -> Self {
        self.tls_ca_cert = Some(path);
        self
    }

    /// Set request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = seconds;
        self
    }

    /// Set maximum retry attempts.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }

    /// Get the request timeout as a Duration.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Parse the configured region.
    ///
    /// # Errors
    ///
    /// Returns an error if the region is not a valid region id or short code.
    pub fn region(&self) -> Result<Region> {
        Region::parse(&self.region)
    }

    /// Versioned base URL for `service`.
    ///
    /// # Errors
    ///
    /// Returns an error if the region cannot be parsed.
    pub fn endpoint_for(&self, service: OciService) -> Result<String> {
        match &self.endpoint {
            Some(endpoint) => Ok(format!(
                "{}/{}",
                endpoint.trim_end_matches('/'),
                service.api_version()
            )),
            None => Ok(self.region()?.endpoint(service)),
        }
    }

    /// HTTP configuration derived from this config.
    #[must_use]
    pub fn http_config(&self) -> ClientConfig {
        let retry_policy = if self.max_retries == 0 {
            RetryPolicy::no_retry()
        } else {
            RetryPolicy::new().with_max_retries(self.max_retries)
        };
        ClientConfig::new()
            .with_timeout(self.timeout())
            .with_retry_policy(retry_policy)
    }

    /// A [`ServiceClientBuilder`] for `service` with endpoint, HTTP and TLS
    /// settings applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is invalid or the CA certificate
    /// cannot be read.
    pub fn service_client_builder(&self, service: OciService) -> Result<ServiceClientBuilder> {
        let mut builder =
            ServiceClientBuilder::new(service, self.endpoint_for(service)?, self.timeout())?
                .with_http_config(self.http_config())
                .with_tls_verify(self.tls_verify);

        if let Some(ca_cert) = &self.tls_ca_cert {
            debug!("loading CA certificate from {}", ca_cert.display());
            let pem = std::fs::read(ca_cert).map_err(|err| {
                Error::ConfigError(format!(
                    "Failed to read CA certificate {}: {err}",
                    ca_cert.display()
                ))
            })?;
            builder = builder.with_ca_cert_pem(pem);
        }

        Ok(builder)
    }
}

type IniSections = HashMap<String, HashMap<String, String>>;

fn parse_ini(contents: &str) -> Result<IniSections> {
    ::config::Config::builder()
        .add_source(::config::File::from_str(contents, ::config::FileFormat::Ini))
        .build()
        .and_then(|settings| settings.try_deserialize::<IniSections>())
        .map_err(|err| Error::ConfigError(format!("Malformed config file: {err}")))
}

fn section<'a>(sections: &'a IniSections, name: &str) -> Option<&'a HashMap<String, String>> {
    sections.get(name).or_else(|| {
        sections
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values)
    })
}

fn expand_home(value: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(value).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CONFIG: &str = "\
# OCI CLI config
[DEFAULT]
user=ocid1.user.oc1..aaaa
fingerprint=20:3b:97:13:55:1c:5b:0d:d3:37:d8:50:4e:c5:3a:34
key_file=/keys/oci_api_key.pem
tenancy=ocid1.tenancy.oc1..bbbb
region=us-ashburn-1

[ADMIN]
region = phx
user = ocid1.user.oc1..cccc
pass_phrase = hunter2
";

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_new_config_defaults() {
        let config = OciClientConfig::new("us-phoenix-1").unwrap();
        assert!(config.tls_verify);
        assert_eq!(config.request_timeout_secs, 60);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_new_config_rejects_bad_region() {
        assert!(OciClientConfig::new("").is_err());
        assert!(OciClientConfig::new("nowhere").is_err());
    }

    #[test]
    fn test_load_default_profile() {
        let file = write_config(CONFIG);
        let config = OciClientConfig::from_config_file(file.path(), None).unwrap();
        assert_eq!(config.region, "us-ashburn-1");
        assert_eq!(config.user.as_deref(), Some("ocid1.user.oc1..aaaa"));
        assert_eq!(config.tenancy.as_deref(), Some("ocid1.tenancy.oc1..bbbb"));
        assert_eq!(config.key_file, Some(PathBuf::from("/keys/oci_api_key.pem")));
        assert!(config.pass_phrase.is_none());
    }

    #[test]
    fn test_named_profile_inherits_default() {
        let file = write_config(CONFIG);
        let config = OciClientConfig::from_config_file(file.path(), Some("ADMIN")).unwrap();
        assert_eq!(config.region().unwrap().name(), "us-phoenix-1");
        assert_eq!(config.user.as_deref(), Some("ocid1.user.oc1..cccc"));
        assert_eq!(config.tenancy.as_deref(), Some("ocid1.tenancy.oc1..bbbb"));
        assert!(config.pass_phrase.is_some());
    }

    #[test]
    fn test_missing_profile() {
        let file = write_config(CONFIG);
        let err = OciClientConfig::from_config_file(file.path(), Some("NOPE")).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_missing_region() {
        let file = write_config("[DEFAULT]\nuser=ocid1.user.oc1..aaaa\n");
        let err = OciClientConfig::from_config_file(file.path(), None).unwrap_err();
        assert!(err.to_string().contains("region"));
    }

    #[test]
    fn test_malformed_section_header() {
        let file = write_config("[DEFAULT\nregion=us-ashburn-1\n");
        let err = OciClientConfig::from_config_file(file.path(), None).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_key_outside_profile_rejected() {
        let file = write_config("region=us-ashburn-1\n[DEFAULT]\nuser=ocid1.user.oc1..aaaa\n");
        assert!(OciClientConfig::from_config_file(file.path(), None).is_err());
    }

    #[test]
    fn test_key_file_home_expansion() {
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                expand_home("~/.oci/key.pem"),
                PathBuf::from(home).join(".oci/key.pem")
            );
        }
        assert_eq!(expand_home("/abs/key.pem"), PathBuf::from("/abs/key.pem"));
        // Only the current user's home is expanded.
        assert_eq!(expand_home("~alice/key.pem"), PathBuf::from("~alice/key.pem"));
    }

    #[test]
    fn test_key_file_expanded_when_loading() {
        let file = write_config("[DEFAULT]\nregion=phx\nkey_file=~/.oci/oci_api_key.pem\n");
        let config = OciClientConfig::from_config_file(file.path(), None).unwrap();
        let key_file = config.key_file.unwrap();
        assert!(!key_file.starts_with("~"));
        assert!(key_file.ends_with(".oci/oci_api_key.pem"));
    }

    #[test]
    fn test_endpoint_for() {
        let config = OciClientConfig::new("fra").unwrap();
        assert_eq!(
            config.endpoint_for(OciService::VirtualNetwork).unwrap(),
            "https://iaas.eu-frankfurt-1.oraclecloud.com/20160918"
        );

        let config = config.with_endpoint("http://localhost:8080/");
        assert_eq!(
            config.endpoint_for(OciService::Compute).unwrap(),
            "http://localhost:8080/20160918"
        );
    }

    #[test]
    fn test_endpoint_override_is_validated() {
        let config = OciClientConfig::new("phx").unwrap().with_endpoint("not a url");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_http_config() {
        let config = OciClientConfig::new("phx").unwrap().with_max_retries(5).with_timeout(10);
        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(10));
        assert_eq!(http.retry_policy.max_retries, 5);

        let none = OciClientConfig::new("phx").unwrap().with_max_retries(0);
        assert_eq!(none.http_config().retry_policy, RetryPolicy::no_retry());
    }

    #[test]
    fn test_invalid_timeout_rejected() {
        let config = OciClientConfig::new("phx").unwrap().with_timeout(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_service_client_builder_missing_ca_cert() {
        let config = OciClientConfig::new("phx")
            .unwrap()
            .with_ca_cert(PathBuf::from("/nonexistent/ca.pem"));
        assert!(config.service_client_builder(OciService::Compute).is_err());
    }

    #[test]
    fn test_service_client_builder() {
        let client = OciClientConfig::new("phx")
            .unwrap()
            .service_client_builder(OciService::Blockstorage)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "https://iaas.us-phoenix-1.oraclecloud.com/20160918"
        );
        assert_eq!(client.retry_policy().map(|p| p.max_retries), Some(3));
    }
}
