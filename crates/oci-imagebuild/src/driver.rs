//! Cloud operations performed by an image build.

use std::time::Duration;

use async_trait::async_trait;
use oci_compute::models::{Image, ImageLifecycleState, InstanceCredentials, InstanceLifecycleState};
use oci_compute::requests::{
    CreateImageRequest, DeleteImageRequest, GetImageRequest, GetInstanceRequest,
    GetWindowsInstanceInitialCredentialsRequest, LaunchInstanceRequest, ListImagesRequest,
    ListVnicAttachmentsRequest, TerminateInstanceRequest,
};
use oci_compute::{
    ComputeClient, CreateImageDetails, InstanceSourceDetails, InstanceSourceViaImageDetails,
    LaunchInstanceDetails,
};
use oci_core::client::RetryPolicy;
use oci_core::config::OciClientConfig;
use oci_core::enums::{SortBy, SortOrder};
use oci_core::ocid::{ImageId, InstanceId, TenancyId};
use oci_core::request::OciRequest;
use oci_core::waiter::{wait_for_state, DEFAULT_POLL_INTERVAL};
use oci_core::Error;
use oci_virtualnetwork::requests::GetVnicRequest;
use oci_virtualnetwork::{VirtualNetworkClient, VirtualNetworkClientBuilder};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::ImageBuildConfig;
use crate::Result;

/// Metadata key carrying the SSH public key of the build user.
pub const SSH_AUTHORIZED_KEYS: &str = "ssh_authorized_keys";
/// Metadata key carrying cloud-init user data.
pub const USER_DATA: &str = "user_data";

/// Operations an image build needs from the cloud.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Driver: Send + Sync {
    /// Launch the build instance authorizing `public_key` for SSH.
    async fn create_instance(&self, public_key: &str) -> Result<InstanceId>;

    /// Capture `instance_id` as a custom image.
    async fn create_image(&self, instance_id: &InstanceId) -> Result<Image>;

    /// Delete a custom image.
    async fn delete_image(&self, image_id: &ImageId) -> Result<()>;

    /// Address used to connect to the build instance.
    async fn get_instance_ip(&self, instance_id: &InstanceId) -> Result<String>;

    /// Initial credentials of a Windows build instance.
    async fn get_instance_initial_credentials(
        &self,
        instance_id: &InstanceId,
    ) -> Result<InstanceCredentials>;

    /// Terminate the build instance.
    async fn terminate_instance(&self, instance_id: &InstanceId) -> Result<()>;

    /// Wait until a captured image becomes available.
    async fn wait_for_image_creation(&self, image_id: &ImageId) -> Result<()>;

    /// Wait while the instance is in one of `wait_states` until it reaches
    /// `terminal_state`.
    async fn wait_for_instance_state(
        &self,
        instance_id: &InstanceId,
        wait_states: &[InstanceLifecycleState],
        terminal_state: InstanceLifecycleState,
    ) -> Result<()>;
}

/// [`Driver`] backed by the Compute and Virtual Network clients.
///
/// Every call carries [`RetryPolicy::for_throttling`] unless replaced with
/// [`OciDriver::with_retry_policy`].
#[derive(Debug)]
pub struct OciDriver {
    compute: ComputeClient,
    network: VirtualNetworkClient,
    config: ImageBuildConfig,
    retry_policy: RetryPolicy,
    poll_interval: Duration,
}

impl OciDriver {
    /// Create a driver for a prepared configuration.
    #[must_use]
    pub const fn new(
        compute: ComputeClient,
        network: VirtualNetworkClient,
        config: ImageBuildConfig,
    ) -> Self {
        Self {
            compute,
            network,
            config,
            retry_policy: RetryPolicy::for_throttling(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Build both clients from a loaded configuration profile.
    ///
    /// The profile's tenancy stands in for a missing `tenancy_ocid`.
    ///
    /// # Errors
    ///
    /// Returns an error if the build configuration is invalid or a client
    /// cannot be built.
    pub fn from_config(
        client_config: &OciClientConfig,
        mut config: ImageBuildConfig,
    ) -> Result<Self> {
        if config.tenancy_id.is_none() {
            config.tenancy_id = client_config.tenancy.as_deref().map(TenancyId::new);
        }
        let config = config.prepare()?;
        let compute = oci_compute::ComputeClientBuilder::from_config(client_config)?.build()?;
        let network = VirtualNetworkClientBuilder::from_config(client_config)?.build()?;
        Ok(Self::new(compute, network, config))
    }

    /// Replace the retry policy attached to every call.
    #[must_use]
    pub const fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Set the interval between lifecycle polls.
    #[must_use]
    pub const fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// The build configuration.
    #[must_use]
    pub const fn config(&self) -> &ImageBuildConfig {
        &self.config
    }

    fn launch_metadata(&self, public_key: &str) -> oci_compute::models::Metadata {
        let mut metadata = oci_compute::models::Metadata::new();
        metadata.insert(SSH_AUTHORIZED_KEYS.to_string(), public_key.to_string());
        metadata.extend(self.config.metadata.clone());
        if let Some(user_data) = &self.config.user_data {
            metadata.insert(USER_DATA.to_string(), user_data.clone());
        }
        metadata
    }

    async fn resolve_base_image(&self) -> Result<ImageId> {
        if let Some(image_id) = &self.config.base_image_id {
            return Ok(image_id.clone());
        }
        let filter = self.config.base_image_filter.clone().unwrap_or_default();

        let compartment_id = match filter.compartment_id {
            Some(compartment_id) => compartment_id,
            None => self.config.compartment()?.clone(),
        };
        let mut request =
            ListImagesRequest::new(compartment_id).with_retry_policy(self.retry_policy);
        request.display_name = filter.display_name;
        request.operating_system = filter.operating_system;
        request.operating_system_version = filter.operating_system_version;
        request.shape = filter.shape;
        request.lifecycle_state = Some(ImageLifecycleState::Available);
        request.sort_by = Some(SortBy::TimeCreated);
        request.sort_order = Some(SortOrder::Desc);

        let images = self.compute.list_images(&request).await?.items;
        if images.is_empty() {
            return Err(Error::NotFound(
                "base_image_filter returned no images".to_string(),
            ));
        }

        let Some(pattern) = filter.display_name_search else {
            return Ok(images[0].id.clone());
        };
        let regex = Regex::new(&pattern).map_err(|e| {
            Error::ConfigError(format!("invalid display_name_search {pattern:?}: {e}"))
        })?;
        images
            .into_iter()
            .find(|image| {
                image
                    .display_name
                    .as_deref()
                    .is_some_and(|name| regex.is_match(name))
            })
            .map(|image| image.id)
            .ok_or_else(|| {
                Error::NotFound("No image matched display_name_search criteria".to_string())
            })
    }
}

#[async_trait]
impl Driver for OciDriver {
    async fn create_instance(&self, public_key: &str) -> Result<InstanceId> {
        let image_id = self.resolve_base_image().await?;
        debug!(%image_id, "resolved base image");

        let mut details = LaunchInstanceDetails::new(
            self.config.availability_domain.clone(),
            self.config.compartment()?.clone(),
            self.config.shape.clone(),
        );
        details.create_vnic_details = Some(self.config.create_vnic_details.to_details());
        details.defined_tags = self.config.instance_defined_tags.clone();
        details.display_name = self.config.instance_name.clone();
        details.freeform_tags = self.config.instance_tags.clone();
        details.metadata = Some(self.launch_metadata(public_key));
        details.source_details = Some(InstanceSourceDetails::Image(InstanceSourceViaImageDetails {
            image_id,
            boot_volume_size_in_gbs: self.config.disk_size,
            kms_key_id: None,
        }));

        let request = LaunchInstanceRequest::new(details).with_retry_policy(self.retry_policy);
        let instance = self.compute.launch_instance(&request).await?.body;
        info!(instance_id = %instance.id, shape = %instance.shape, "launched build instance");
        Ok(instance.id)
    }

    async fn create_image(&self, instance_id: &InstanceId) -> Result<Image> {
        let mut details = CreateImageDetails::from_instance(
            self.config.image_compartment()?.clone(),
            instance_id.clone(),
        );
        details.display_name = self.config.image_name.clone();
        details.freeform_tags = self.config.tags.clone();
        details.defined_tags = self.config.defined_tags.clone();
        details.launch_mode = self.config.image_launch_mode.clone();

        let request = CreateImageRequest::new(details).with_retry_policy(self.retry_policy);
        let image = self.compute.create_image(&request).await?.body;
        info!(image_id = %image.id, %instance_id, "capturing image");
        Ok(image)
    }

    async fn delete_image(&self, image_id: &ImageId) -> Result<()> {
        let request =
            DeleteImageRequest::new(image_id.clone()).with_retry_policy(self.retry_policy);
        self.compute.delete_image(&request).await?;
        Ok(())
    }

    async fn get_instance_ip(&self, instance_id: &InstanceId) -> Result<String> {
        let request = ListVnicAttachmentsRequest::new(self.config.compartment()?.clone())
            .for_instance(instance_id.clone())
            .with_retry_policy(self.retry_policy);
        let attachments = self.compute.list_vnic_attachments(&request).await?.items;

        let vnic_id = attachments
            .into_iter()
            .next()
            .and_then(|attachment| attachment.vnic_id)
            .ok_or_else(|| Error::NotFound("instance has zero VNICs".to_string()))?;

        let request = GetVnicRequest::new(vnic_id).with_retry_policy(self.retry_policy);
        let vnic = match self.network.get_vnic(&request).await {
            Ok(response) => response.body,
            Err(err) => {
                warn!(%instance_id, error = %err, "error getting VNIC details");
                return Err(err);
            }
        };

        let address = if self.config.use_private_ip {
            vnic.private_ip
        } else {
            vnic.public_ip
        };
        address.ok_or_else(|| {
            let kind = if self.config.use_private_ip { "Private" } else { "Public" };
            Error::NotFound(format!("Error getting VNIC {kind} Ip for: {instance_id}"))
        })
    }

    async fn get_instance_initial_credentials(
        &self,
        instance_id: &InstanceId,
    ) -> Result<InstanceCredentials> {
        let request = GetWindowsInstanceInitialCredentialsRequest::new(instance_id.clone())
            .with_retry_policy(self.retry_policy);
        Ok(self
            .compute
            .get_windows_instance_initial_credentials(&request)
            .await?
            .body)
    }

    async fn terminate_instance(&self, instance_id: &InstanceId) -> Result<()> {
        let request =
            TerminateInstanceRequest::new(instance_id.clone()).with_retry_policy(self.retry_policy);
        self.compute.terminate_instance(&request).await?;
        info!(%instance_id, "terminating build instance");
        Ok(())
    }

    async fn wait_for_image_creation(&self, image_id: &ImageId) -> Result<()> {
        let compute = &self.compute;
        let request = &GetImageRequest::new(image_id.clone()).with_retry_policy(self.retry_policy);
        wait_for_state(
            move || async move {
                Ok::<_, Error>(compute.get_image(request).await?.body.lifecycle_state)
            },
            &[ImageLifecycleState::Provisioning],
            &ImageLifecycleState::Available,
            None,
            self.poll_interval,
        )
        .await?;
        Ok(())
    }

    async fn wait_for_instance_state(
        &self,
        instance_id: &InstanceId,
        wait_states: &[InstanceLifecycleState],
        terminal_state: InstanceLifecycleState,
    ) -> Result<()> {
        let compute = &self.compute;
        let request =
            &GetInstanceRequest::new(instance_id.clone()).with_retry_policy(self.retry_policy);
        wait_for_state(
            move || async move {
                Ok::<_, Error>(compute.get_instance(request).await?.body.lifecycle_state)
            },
            wait_states,
            &terminal_state,
            None,
            self.poll_interval,
        )
        .await?;
        Ok(())
    }
}

async fn capture(driver: &dyn Driver, instance_id: &InstanceId) -> Result<Image> {
    driver
        .wait_for_instance_state(
            instance_id,
            &[
                InstanceLifecycleState::Provisioning,
                InstanceLifecycleState::Starting,
            ],
            InstanceLifecycleState::Running,
        )
        .await?;
    let image = driver.create_image(instance_id).await?;
    driver.wait_for_image_creation(&image.id).await?;
    Ok(image)
}

/// Run a complete build: launch, wait for `RUNNING`, capture, wait for the
/// image, then terminate the instance.
///
/// The instance is terminated even when the capture fails; a failed capture
/// is reported in preference to a failed cleanup.
///
/// # Errors
///
/// Returns the first error of the capture, or of the cleanup if the capture
/// succeeded.
pub async fn build_image(driver: &dyn Driver, public_key: &str) -> Result<Image> {
    let instance_id = driver.create_instance(public_key).await?;
    let captured = capture(driver, &instance_id).await;

    let cleanup = async {
        driver.terminate_instance(&instance_id).await?;
        driver
            .wait_for_instance_state(
                &instance_id,
                &[InstanceLifecycleState::Terminating],
                InstanceLifecycleState::Terminated,
            )
            .await
    }
    .await;

    match (captured, cleanup) {
        (Ok(image), Ok(())) => Ok(image),
        (Ok(_), Err(err)) => Err(err),
        (Err(err), cleanup) => {
            if let Err(cleanup_err) = cleanup {
                warn!(%instance_id, error = %cleanup_err, "failed to clean up build instance");
            }
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BaseImageFilter;
    use mockall::predicate::eq;
    use mockall::Sequence;
    use oci_core::ocid::{CompartmentId, SubnetId};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const INSTANCE: &str = "ocid1.instance.oc1.phx.build";
    const IMAGE: &str = "ocid1.image.oc1.phx.captured";

    fn config() -> ImageBuildConfig {
        ImageBuildConfig::new(
            "Uocm:PHX-AD-1",
            CompartmentId::new("ocid1.compartment.oc1..aaa"),
            "VM.Standard.E4.Flex",
            SubnetId::new("ocid1.subnet.oc1.phx.aaa"),
            ImageId::new("ocid1.image.oc1.phx.base"),
        )
    }

    fn filter_config(search: Option<&str>) -> ImageBuildConfig {
        let mut config = config();
        config.base_image_id = None;
        config.base_image_filter = Some(BaseImageFilter {
            operating_system: Some("Oracle Linux".to_string()),
            display_name_search: search.map(str::to_string),
            ..BaseImageFilter::default()
        });
        config
    }

    fn driver(server: &MockServer, config: ImageBuildConfig) -> OciDriver {
        let base = format!("{}/20160918", server.uri());
        OciDriver::new(
            ComputeClient::new(&base).unwrap(),
            VirtualNetworkClient::new(&base).unwrap(),
            config.prepare().unwrap(),
        )
        .with_retry_policy(
            RetryPolicy::for_throttling()
                .with_initial_delay(Duration::from_millis(1))
                .with_jitter(Duration::ZERO),
        )
        .with_poll_interval(Duration::from_millis(1))
    }

    fn instance_json(state: &str) -> serde_json::Value {
        json!({
            "id": INSTANCE,
            "availabilityDomain": "Uocm:PHX-AD-1",
            "compartmentId": "ocid1.compartment.oc1..aaa",
            "lifecycleState": state,
            "region": "phx",
            "shape": "VM.Standard.E4.Flex",
            "timeCreated": "2024-03-01T10:00:00.000Z"
        })
    }

    fn image_json(id: &str, name: &str, state: &str) -> serde_json::Value {
        json!({
            "id": id,
            "compartmentId": "ocid1.compartment.oc1..aaa",
            "createImageAllowed": true,
            "displayName": name,
            "lifecycleState": state,
            "operatingSystem": "Oracle Linux",
            "operatingSystemVersion": "8",
            "timeCreated": "2024-03-01T10:00:00.000Z"
        })
    }

    fn image(id: &str) -> Image {
        serde_json::from_value(image_json(id, "captured", "PROVISIONING")).unwrap()
    }

    async fn mount_base_images(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/20160918/images"))
            .and(query_param("lifecycleState", "AVAILABLE"))
            .and(query_param("sortBy", "TIMECREATED"))
            .and(query_param("sortOrder", "DESC"))
            .and(query_param("shape", "VM.Standard.E4.Flex"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                image_json("ocid1.image.oc1.phx.newest", "Oracle-Linux-8.9-GPU-2024.03.01", "AVAILABLE"),
                image_json("ocid1.image.oc1.phx.second", "Oracle-Linux-8.9-2024.02.15", "AVAILABLE"),
                image_json("ocid1.image.oc1.phx.oldest", "Oracle-Linux-8.8-2023.12.01", "AVAILABLE"),
            ])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_create_instance_with_image_id() {
        let server = MockServer::start().await;
        let mut config = config();
        config.metadata.insert("ssh_authorized_keys".to_string(), "overridden".to_string());
        config.metadata.insert("role".to_string(), "builder".to_string());
        config.user_data = Some("IyEvYmluL2Jhc2gK".to_string());

        Mock::given(method("POST"))
            .and(path("/20160918/instances"))
            .and(body_partial_json(json!({
                "availabilityDomain": "Uocm:PHX-AD-1",
                "createVnicDetails": {"subnetId": "ocid1.subnet.oc1.phx.aaa"},
                "metadata": {
                    "ssh_authorized_keys": "overridden",
                    "role": "builder",
                    "user_data": "IyEvYmluL2Jhc2gK"
                },
                "sourceDetails": {
                    "sourceType": "image",
                    "imageId": "ocid1.image.oc1.phx.base",
                    "bootVolumeSizeInGBs": 50
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("PROVISIONING")))
            .expect(1)
            .mount(&server)
            .await;

        let instance_id = driver(&server, config)
            .create_instance("ssh-rsa AAAA")
            .await
            .unwrap();
        assert_eq!(instance_id.as_str(), INSTANCE);
    }

    #[tokio::test]
    async fn test_create_instance_picks_newest_filtered_image() {
        let server = MockServer::start().await;
        mount_base_images(&server).await;

        Mock::given(method("POST"))
            .and(path("/20160918/instances"))
            .and(body_partial_json(json!({
                "metadata": {"ssh_authorized_keys": "ssh-rsa AAAA"},
                "sourceDetails": {"imageId": "ocid1.image.oc1.phx.newest"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("PROVISIONING")))
            .expect(1)
            .mount(&server)
            .await;

        driver(&server, filter_config(None))
            .create_instance("ssh-rsa AAAA")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_display_name_search() {
        let server = MockServer::start().await;
        mount_base_images(&server).await;

        let matching = driver(&server, filter_config(Some(r"^Oracle-Linux-8\.\d+-\d{4}")));
        assert_eq!(
            matching.resolve_base_image().await.unwrap().as_str(),
            "ocid1.image.oc1.phx.second"
        );

        let unmatched = driver(&server, filter_config(Some("Windows")));
        let err = unmatched.resolve_base_image().await.unwrap_err();
        assert!(err.to_string().contains("No image matched display_name_search criteria"));
    }

    #[tokio::test]
    async fn test_filter_without_images() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/20160918/images"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = driver(&server, filter_config(None))
            .create_instance("ssh-rsa AAAA")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(ref message) if message.contains("returned no images")));
    }

    #[tokio::test]
    async fn test_image_id_takes_precedence_over_filter() {
        let server = MockServer::start().await;
        let mut config = filter_config(None);
        config.base_image_id = Some(ImageId::new("ocid1.image.oc1.phx.base"));

        Mock::given(method("GET"))
            .and(path("/20160918/images"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/20160918/instances"))
            .and(body_partial_json(json!({
                "sourceDetails": {"sourceType": "image", "imageId": "ocid1.image.oc1.phx.base"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("PROVISIONING")))
            .expect(1)
            .mount(&server)
            .await;

        let instance_id = driver(&server, config)
            .create_instance("ssh-rsa AAAA")
            .await
            .unwrap();
        assert_eq!(instance_id.as_str(), INSTANCE);
    }

    #[tokio::test]
    async fn test_launch_into_tenancy_compartment() {
        let server = MockServer::start().await;
        let mut config = config();
        config.compartment_id = None;
        config.tenancy_id = Some(TenancyId::new("ocid1.tenancy.oc1..root"));

        Mock::given(method("POST"))
            .and(path("/20160918/instances"))
            .and(body_partial_json(json!({"compartmentId": "ocid1.tenancy.oc1..root"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("PROVISIONING")))
            .expect(1)
            .mount(&server)
            .await;

        driver(&server, config)
            .create_instance("ssh-rsa AAAA")
            .await
            .unwrap();
    }

    #[test]
    fn test_from_config_takes_tenancy_from_profile() {
        let mut profile = OciClientConfig::new("phx").unwrap();
        profile.tenancy = Some("ocid1.tenancy.oc1..root".to_string());
        let mut build = config();
        build.compartment_id = None;

        let driver = OciDriver::from_config(&profile, build.clone()).unwrap();
        assert_eq!(
            driver.config().compartment().unwrap().as_str(),
            "ocid1.tenancy.oc1..root"
        );

        let anonymous = OciClientConfig::new("phx").unwrap();
        assert!(matches!(
            OciDriver::from_config(&anonymous, build),
            Err(Error::ValidationError(_))
        ));
    }

    async fn mount_vnic(server: &MockServer, public_ip: Option<&str>) {
        Mock::given(method("GET"))
            .and(path("/20160918/vnicAttachments"))
            .and(query_param("instanceId", INSTANCE))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "id": "ocid1.vnicattachment.oc1.phx.aaa",
                "availabilityDomain": "Uocm:PHX-AD-1",
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "instanceId": INSTANCE,
                "lifecycleState": "ATTACHED",
                "timeCreated": "2024-03-01T10:00:00.000Z",
                "vnicId": "ocid1.vnic.oc1.phx.aaa"
            }])))
            .mount(server)
            .await;

        let mut vnic = json!({
            "id": "ocid1.vnic.oc1.phx.aaa",
            "availabilityDomain": "Uocm:PHX-AD-1",
            "compartmentId": "ocid1.compartment.oc1..aaa",
            "lifecycleState": "AVAILABLE",
            "timeCreated": "2024-03-01T10:00:00.000Z",
            "privateIp": "10.0.0.7"
        });
        if let Some(ip) = public_ip {
            vnic["publicIp"] = json!(ip);
        }
        Mock::given(method("GET"))
            .and(path("/20160918/vnics/ocid1.vnic.oc1.phx.aaa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(vnic))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_get_instance_ip() {
        let server = MockServer::start().await;
        mount_vnic(&server, Some("203.0.113.7")).await;
        let instance_id = InstanceId::new(INSTANCE);

        let ip = driver(&server, config()).get_instance_ip(&instance_id).await.unwrap();
        assert_eq!(ip, "203.0.113.7");

        let mut private = config();
        private.use_private_ip = true;
        let ip = driver(&server, private).get_instance_ip(&instance_id).await.unwrap();
        assert_eq!(ip, "10.0.0.7");
    }

    #[tokio::test]
    async fn test_get_instance_ip_without_public_ip() {
        let server = MockServer::start().await;
        mount_vnic(&server, None).await;

        let err = driver(&server, config())
            .get_instance_ip(&InstanceId::new(INSTANCE))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Error getting VNIC Public Ip for"));
    }

    #[tokio::test]
    async fn test_get_instance_ip_without_vnics() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/20160918/vnicAttachments"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = driver(&server, config())
            .get_instance_ip(&InstanceId::new(INSTANCE))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("instance has zero VNICs"));
    }

    #[tokio::test]
    async fn test_create_image_uses_image_settings() {
        let server = MockServer::start().await;
        let mut config = config();
        config.image_name = Some("golden".to_string());
        config.image_compartment_id = Some(CompartmentId::new("ocid1.compartment.oc1..images"));

        Mock::given(method("POST"))
            .and(path("/20160918/images"))
            .and(body_partial_json(json!({
                "compartmentId": "ocid1.compartment.oc1..images",
                "instanceId": INSTANCE,
                "displayName": "golden"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(image_json(IMAGE, "golden", "PROVISIONING")),
            )
            .expect(1)
            .mount(&server)
            .await;

        let image = driver(&server, config)
            .create_image(&InstanceId::new(INSTANCE))
            .await
            .unwrap();
        assert_eq!(image.id.as_str(), IMAGE);
    }

    #[tokio::test]
    async fn test_wait_for_image_creation_polls() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/20160918/images/{IMAGE}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(image_json(IMAGE, "golden", "PROVISIONING")),
            )
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("/20160918/images/{IMAGE}")))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(image_json(IMAGE, "golden", "AVAILABLE")),
            )
            .mount(&server)
            .await;

        driver(&server, config())
            .wait_for_image_creation(&ImageId::new(IMAGE))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_wait_for_instance_unexpected_state() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/20160918/instances/{INSTANCE}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("STOPPED")))
            .mount(&server)
            .await;

        let err = driver(&server, config())
            .wait_for_instance_state(
                &InstanceId::new(INSTANCE),
                &[InstanceLifecycleState::Provisioning],
                InstanceLifecycleState::Running,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnexpectedState(_)));
    }

    #[tokio::test]
    async fn test_throttled_calls_are_retried() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("/20160918/images/{IMAGE}")))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "code": "TooManyRequests",
                "message": "slow down"
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path(format!("/20160918/images/{IMAGE}")))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        driver(&server, config())
            .delete_image(&ImageId::new(IMAGE))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_build_image_runs_every_step() {
        let mut mock = MockDriver::new();
        let mut seq = Sequence::new();
        let instance_id = InstanceId::new(INSTANCE);

        mock.expect_create_instance()
            .with(eq("ssh-rsa AAAA"))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(InstanceId::new(INSTANCE)));
        mock.expect_wait_for_instance_state()
            .withf(|_, _, terminal| *terminal == InstanceLifecycleState::Running)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));
        mock.expect_create_image()
            .with(eq(instance_id.clone()))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(image(IMAGE)));
        mock.expect_wait_for_image_creation()
            .with(eq(ImageId::new(IMAGE)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock.expect_terminate_instance()
            .with(eq(instance_id))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mock.expect_wait_for_instance_state()
            .withf(|_, _, terminal| *terminal == InstanceLifecycleState::Terminated)
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _, _| Ok(()));

        let image = build_image(&mock, "ssh-rsa AAAA").await.unwrap();
        assert_eq!(image.id.as_str(), IMAGE);
    }

    #[tokio::test]
    async fn test_build_image_terminates_after_failed_capture() {
        let mut mock = MockDriver::new();

        mock.expect_create_instance()
            .returning(|_| Ok(InstanceId::new(INSTANCE)));
        mock.expect_wait_for_instance_state()
            .withf(|_, _, terminal| *terminal == InstanceLifecycleState::Running)
            .returning(|_, _, _| Err(Error::UnexpectedState("STOPPED".to_string())));
        mock.expect_create_image().never();
        mock.expect_terminate_instance()
            .times(1)
            .returning(|_| Err(Error::HttpError("connection reset".to_string())));

        let err = build_image(&mock, "ssh-rsa AAAA").await.unwrap_err();
        assert!(matches!(err, Error::UnexpectedState(_)));
    }
}
