//! Asynchronous Compute client.

use std::sync::Arc;
use std::time::Duration;

use oci_core::client::{
    ClientConfig, RequestSigner, RetryPolicy, ServiceClient, ServiceClientBuilder,
    COMPUTE_DEFAULT_TIMEOUT,
};
use oci_core::config::OciClientConfig;
use oci_core::types::{OciService, Region};
use secrecy::SecretString;
use url::Url;

use crate::models::{Image, Instance, VnicAttachment};
use crate::requests::{
    CreateImageRequest, DeleteImageRequest, DeleteImageResponse, GetImageRequest,
    GetInstanceRequest, GetWindowsInstanceInitialCredentialsRequest, ImageResponse,
    InstanceActionRequest, InstanceCredentialsResponse, InstanceResponse, LaunchInstanceRequest,
    ListImagesRequest, ListImagesResponse, ListInstancesRequest, ListInstancesResponse,
    ListVnicAttachmentsRequest, ListVnicAttachmentsResponse, TerminateInstanceRequest,
    TerminateInstanceResponse,
};
use crate::Result;

const USER_AGENT: &str = concat!("oci-compute/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ComputeClient`].
#[derive(Debug)]
pub struct ComputeClientBuilder {
    inner: ServiceClientBuilder,
}

impl ComputeClientBuilder {
    /// Create a builder for the specified base URL, including the API version
    /// path.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ServiceClientBuilder::new(
            OciService::Compute,
            base_url,
            Duration::from_secs(COMPUTE_DEFAULT_TIMEOUT),
        )?
        .with_user_agent(USER_AGENT);

        Ok(Self { inner: builder })
    }

    /// Create a builder for the regional endpoint of `region`.
    pub fn for_region(region: &Region) -> Result<Self> {
        Self::new(region.endpoint(OciService::Compute))
    }

    /// Create a builder from a loaded configuration profile.
    pub fn from_config(config: &OciClientConfig) -> Result<Self> {
        let builder = config
            .service_client_builder(OciService::Compute)?
            .with_user_agent(USER_AGENT);
        Ok(Self { inner: builder })
    }

    /// Set the client default retry policy.
    #[must_use]
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.inner = self.inner.with_retry_policy(retry);
        self
    }

    /// Override the HTTP client configuration.
    #[must_use]
    pub fn with_http_config(mut self, config: ClientConfig) -> Self {
        self.inner = self.inner.with_http_config(config);
        self
    }

    /// Sign every request with `signer`.
    #[must_use]
    pub fn with_signer(mut self, signer: Arc<dyn RequestSigner>) -> Self {
        self.inner = self.inner.with_signer(signer);
        self
    }

    /// Send an on-behalf-of token with every request.
    #[must_use]
    pub fn with_obo_token(mut self, token: SecretString) -> Self {
        self.inner = self.inner.with_obo_token(token);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ComputeClient> {
        let inner = self.inner.build()?;
        Ok(ComputeClient { inner })
    }
}

/// Asynchronous client for instances, images and VNIC attachments.
#[derive(Debug, Clone)]
pub struct ComputeClient {
    inner: ServiceClient,
}

impl ComputeClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        ComputeClientBuilder::new(base_url)?.build()
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        self.inner.base_url()
    }

    /// Client default retry policy, if one was configured.
    #[must_use]
    pub const fn retry_policy(&self) -> Option<&RetryPolicy> {
        self.inner.retry_policy()
    }

    /// Launch an instance. The instance starts in `PROVISIONING`.
    pub async fn launch_instance(&self, request: &LaunchInstanceRequest) -> Result<InstanceResponse> {
        self.inner.call(request).await
    }

    /// Fetch an instance.
    pub async fn get_instance(&self, request: &GetInstanceRequest) -> Result<InstanceResponse> {
        self.inner.call(request).await
    }

    /// List one page of instances.
    pub async fn list_instances(
        &self,
        request: &ListInstancesRequest,
    ) -> Result<ListInstancesResponse> {
        self.inner.call(request).await
    }

    /// List every instance matching `request`.
    pub async fn list_all_instances(&self, request: &ListInstancesRequest) -> Result<Vec<Instance>> {
        self.inner.call_all_pages(request).await
    }

    /// Start, stop or reset an instance.
    pub async fn instance_action(&self, request: &InstanceActionRequest) -> Result<InstanceResponse> {
        self.inner.call(request).await
    }

    /// Terminate an instance.
    pub async fn terminate_instance(
        &self,
        request: &TerminateInstanceRequest,
    ) -> Result<TerminateInstanceResponse> {
        self.inner.call(request).await
    }

    /// Fetch the generated credentials of a Windows instance.
    pub async fn get_windows_instance_initial_credentials(
        &self,
        request: &GetWindowsInstanceInitialCredentialsRequest,
    ) -> Result<InstanceCredentialsResponse> {
        self.inner.call(request).await
    }

    /// Capture or import a custom image.
    pub async fn create_image(&self, request: &CreateImageRequest) -> Result<ImageResponse> {
        self.inner.call(request).await
    }

    /// Fetch an image.
    pub async fn get_image(&self, request: &GetImageRequest) -> Result<ImageResponse> {
        self.inner.call(request).await
    }

    /// List one page of images.
    pub async fn list_images(&self, request: &ListImagesRequest) -> Result<ListImagesResponse> {
        self.inner.call(request).await
    }

    /// List every image matching `request`.
    pub async fn list_all_images(&self, request: &ListImagesRequest) -> Result<Vec<Image>> {
        self.inner.call_all_pages(request).await
    }

    /// Delete a custom image.
    pub async fn delete_image(&self, request: &DeleteImageRequest) -> Result<DeleteImageResponse> {
        self.inner.call(request).await
    }

    /// List one page of VNIC attachments.
    pub async fn list_vnic_attachments(
        &self,
        request: &ListVnicAttachmentsRequest,
    ) -> Result<ListVnicAttachmentsResponse> {
        self.inner.call(request).await
    }

    /// List every VNIC attachment matching `request`.
    pub async fn list_all_vnic_attachments(
        &self,
        request: &ListVnicAttachmentsRequest,
    ) -> Result<Vec<VnicAttachment>> {
        self.inner.call_all_pages(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CreateImageDetails, ImageLifecycleState, InstanceAction, InstanceLifecycleState};
    use oci_core::ocid::{CompartmentId, ImageId, InstanceId};
    use oci_core::request::OciRequest;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn instance_json(state: &str) -> serde_json::Value {
        json!({
            "id": "ocid1.instance.oc1.phx.abc",
            "availabilityDomain": "Uocm:PHX-AD-1",
            "compartmentId": "ocid1.compartment.oc1..aaa",
            "lifecycleState": state,
            "region": "phx",
            "shape": "VM.Standard.E4.Flex",
            "timeCreated": "2024-03-01T10:00:00.000Z",
            "shapeConfig": {"ocpus": 1.0, "memoryInGBs": 16.0}
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

    fn client(server: &MockServer) -> ComputeClient {
        ComputeClient::new(format!("{}/20160918", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_instance() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/20160918/instances/ocid1.instance.oc1.phx.abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("RUNNING")))
            .mount(&server)
            .await;

        let response = client(&server)
            .get_instance(&GetInstanceRequest::new(InstanceId::new(
                "ocid1.instance.oc1.phx.abc",
            )))
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, InstanceLifecycleState::Running);
        let shape_config = response.body.shape_config.unwrap();
        assert_eq!(shape_config.memory_in_gbs, Some(16.0));
    }

    #[tokio::test]
    async fn test_instance_action() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/20160918/instances/ocid1.instance.oc1.phx.abc"))
            .and(query_param("action", "STOP"))
            .respond_with(ResponseTemplate::new(200).set_body_json(instance_json("STOPPING")))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .instance_action(&InstanceActionRequest::new(
                InstanceId::new("ocid1.instance.oc1.phx.abc"),
                InstanceAction::Stop,
            ))
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, InstanceLifecycleState::Stopping);
    }

    #[tokio::test]
    async fn test_create_image_reports_work_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/20160918/images"))
            .and(body_partial_json(json!({
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "instanceId": "ocid1.instance.oc1.phx.abc",
                "displayName": "golden"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("opc-work-request-id", "ocid1.coreservicesworkrequest.oc1.phx.w")
                    .set_body_json(image_json("ocid1.image.oc1.phx.new", "golden", "PROVISIONING")),
            )
            .mount(&server)
            .await;

        let mut details = CreateImageDetails::from_instance(
            CompartmentId::new("ocid1.compartment.oc1..aaa"),
            InstanceId::new("ocid1.instance.oc1.phx.abc"),
        );
        details.display_name = Some("golden".to_string());

        let response = client(&server)
            .create_image(&CreateImageRequest::new(details))
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, ImageLifecycleState::Provisioning);
        assert_eq!(
            response.opc_work_request_id.as_deref(),
            Some("ocid1.coreservicesworkrequest.oc1.phx.w")
        );
    }

    #[tokio::test]
    async fn test_list_images_newest_first() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/20160918/images"))
            .and(query_param("sortBy", "TIMECREATED"))
            .and(query_param("sortOrder", "DESC"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                image_json("ocid1.image.oc1.phx.b", "Oracle-Linux-8.9-2024.02", "AVAILABLE"),
                image_json("ocid1.image.oc1.phx.a", "Oracle-Linux-8.9-2024.01", "AVAILABLE")
            ])))
            .mount(&server)
            .await;

        let mut request = ListImagesRequest::new(CompartmentId::new("ocid1.compartment.oc1..aaa"));
        request.sort_by = Some(oci_core::enums::SortBy::TimeCreated);
        request.sort_order = Some(oci_core::enums::SortOrder::Desc);

        let response = client(&server).list_images(&request).await.unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id, ImageId::new("ocid1.image.oc1.phx.b"));
        assert!(response.opc_next_page.is_none());
    }

    #[tokio::test]
    async fn test_terminate_instance_preserves_boot_volume() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/20160918/instances/ocid1.instance.oc1.phx.abc"))
            .and(query_param("preserveBootVolume", "true"))
            .and(header("opc-request-id", "my-req"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = TerminateInstanceRequest::new(InstanceId::new("ocid1.instance.oc1.phx.abc"))
            .with_opc_request_id("my-req");
        request.preserve_boot_volume = Some(true);
        client(&server).terminate_instance(&request).await.unwrap();
    }

    #[tokio::test]
    async fn test_windows_credentials() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(
                "/20160918/instances/ocid1.instance.oc1.phx.abc/initialCredentials",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"username": "opc", "password": "Secr3t!"})),
            )
            .mount(&server)
            .await;

        let response = client(&server)
            .get_windows_instance_initial_credentials(
                &GetWindowsInstanceInitialCredentialsRequest::new(InstanceId::new(
                    "ocid1.instance.oc1.phx.abc",
                )),
            )
            .await
            .unwrap();
        assert_eq!(response.body.username, "opc");
        assert_eq!(response.body.password, "Secr3t!");
    }

    #[tokio::test]
    async fn test_throttling_policy_retries_429() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/20160918/images/ocid1.image.oc1.phx.a"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "code": "TooManyRequests",
                "message": "slow down"
            })))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/20160918/images/ocid1.image.oc1.phx.a"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(image_json("ocid1.image.oc1.phx.a", "base", "AVAILABLE")),
            )
            .mount(&server)
            .await;

        let policy = RetryPolicy::for_throttling()
            .with_initial_delay(Duration::from_millis(1))
            .with_jitter(Duration::ZERO);
        let request = GetImageRequest::new(ImageId::new("ocid1.image.oc1.phx.a")).with_retry_policy(policy);
        let response = client(&server).get_image(&request).await.unwrap();
        assert_eq!(response.body.lifecycle_state, ImageLifecycleState::Available);
    }
}
