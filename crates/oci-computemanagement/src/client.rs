//! Asynchronous Compute Management client.

use std::sync::Arc;
use std::time::Duration;

use oci_core::client::{
    ClientConfig, RequestSigner, RetryPolicy, ServiceClient, ServiceClientBuilder,
    COMPUTEMANAGEMENT_DEFAULT_TIMEOUT,
};
use oci_core::config::OciClientConfig;
use oci_core::types::{OciService, Region};
use secrecy::SecretString;
use url::Url;

use crate::models::{InstanceConfigurationSummary, InstancePoolInstance, InstancePoolSummary};
use crate::requests::{
    AttachLoadBalancerRequest, ChangeInstancePoolCompartmentRequest,
    ChangeInstancePoolCompartmentResponse, CreateInstanceConfigurationRequest,
    CreateInstancePoolRequest, DeleteInstanceConfigurationRequest,
    DeleteInstanceConfigurationResponse, DetachLoadBalancerRequest,
    GetInstanceConfigurationRequest, GetInstancePoolLoadBalancerAttachmentRequest,
    GetInstancePoolRequest, InstanceConfigurationResponse,
    InstancePoolLoadBalancerAttachmentResponse, InstancePoolResponse,
    LaunchInstanceConfigurationRequest, LaunchInstanceConfigurationResponse,
    ListInstanceConfigurationsRequest, ListInstanceConfigurationsResponse,
    ListInstancePoolInstancesRequest, ListInstancePoolInstancesResponse, ListInstancePoolsRequest,
    ListInstancePoolsResponse, ResetInstancePoolRequest, SoftresetInstancePoolRequest,
    StartInstancePoolRequest, StopInstancePoolRequest, TerminateInstancePoolRequest,
    TerminateInstancePoolResponse, UpdateInstanceConfigurationRequest, UpdateInstancePoolRequest,
};
use crate::Result;

const USER_AGENT: &str = concat!("oci-computemanagement/", env!("CARGO_PKG_VERSION"));

/// Builder for [`ComputeManagementClient`].
#[derive(Debug)]
pub struct ComputeManagementClientBuilder {
    inner: ServiceClientBuilder,
}

impl ComputeManagementClientBuilder {
    /// Create a builder for the specified base URL, including the API version
    /// path.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ServiceClientBuilder::new(
            OciService::ComputeManagement,
            base_url,
            Duration::from_secs(COMPUTEMANAGEMENT_DEFAULT_TIMEOUT),
        )?
        .with_user_agent(USER_AGENT);

        Ok(Self { inner: builder })
    }

    /// Create a builder for the regional endpoint of `region`.
    pub fn for_region(region: &Region) -> Result<Self> {
        Self::new(region.endpoint(OciService::ComputeManagement))
    }

    /// Create a builder from a loaded configuration profile.
    pub fn from_config(config: &OciClientConfig) -> Result<Self> {
        let builder = config
            .service_client_builder(OciService::ComputeManagement)?
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
    pub fn build(self) -> Result<ComputeManagementClient> {
        let inner = self.inner.build()?;
        Ok(ComputeManagementClient { inner })
    }
}

/// Asynchronous client for instance pools and instance configurations.
#[derive(Debug, Clone)]
pub struct ComputeManagementClient {
    inner: ServiceClient,
}

impl ComputeManagementClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        ComputeManagementClientBuilder::new(base_url)?.build()
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

    /// Create an instance pool. The pool starts in `PROVISIONING`.
    pub async fn create_instance_pool(
        &self,
        request: &CreateInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Fetch an instance pool.
    pub async fn get_instance_pool(
        &self,
        request: &GetInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// List one page of instance pools.
    pub async fn list_instance_pools(
        &self,
        request: &ListInstancePoolsRequest,
    ) -> Result<ListInstancePoolsResponse> {
        self.inner.call(request).await
    }

    /// List every instance pool matching `request`.
    pub async fn list_all_instance_pools(
        &self,
        request: &ListInstancePoolsRequest,
    ) -> Result<Vec<InstancePoolSummary>> {
        self.inner.call_all_pages(request).await
    }

    /// Resize, rename or re-place an instance pool.
    pub async fn update_instance_pool(
        &self,
        request: &UpdateInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Terminate an instance pool and its instances.
    pub async fn terminate_instance_pool(
        &self,
        request: &TerminateInstancePoolRequest,
    ) -> Result<TerminateInstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Start every instance in a pool.
    pub async fn start_instance_pool(
        &self,
        request: &StartInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Stop every instance in a pool.
    pub async fn stop_instance_pool(
        &self,
        request: &StopInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Hard reset every instance in a pool.
    pub async fn reset_instance_pool(
        &self,
        request: &ResetInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Reboot every instance in a pool.
    pub async fn softreset_instance_pool(
        &self,
        request: &SoftresetInstancePoolRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// List one page of the instances in a pool.
    pub async fn list_instance_pool_instances(
        &self,
        request: &ListInstancePoolInstancesRequest,
    ) -> Result<ListInstancePoolInstancesResponse> {
        self.inner.call(request).await
    }

    /// List every instance in a pool.
    pub async fn list_all_instance_pool_instances(
        &self,
        request: &ListInstancePoolInstancesRequest,
    ) -> Result<Vec<InstancePoolInstance>> {
        self.inner.call_all_pages(request).await
    }

    /// Register a pool with a load balancer backend set.
    pub async fn attach_load_balancer(
        &self,
        request: &AttachLoadBalancerRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Deregister a pool from a load balancer backend set.
    pub async fn detach_load_balancer(
        &self,
        request: &DetachLoadBalancerRequest,
    ) -> Result<InstancePoolResponse> {
        self.inner.call(request).await
    }

    /// Fetch a load balancer attachment of a pool.
    pub async fn get_instance_pool_load_balancer_attachment(
        &self,
        request: &GetInstancePoolLoadBalancerAttachmentRequest,
    ) -> Result<InstancePoolLoadBalancerAttachmentResponse> {
        self.inner.call(request).await
    }

    /// Move a pool to another compartment.
    pub async fn change_instance_pool_compartment(
        &self,
        request: &ChangeInstancePoolCompartmentRequest,
    ) -> Result<ChangeInstancePoolCompartmentResponse> {
        self.inner.call(request).await
    }

    /// Create an instance configuration.
    pub async fn create_instance_configuration(
        &self,
        request: &CreateInstanceConfigurationRequest,
    ) -> Result<InstanceConfigurationResponse> {
        self.inner.call(request).await
    }

    /// Fetch an instance configuration.
    pub async fn get_instance_configuration(
        &self,
        request: &GetInstanceConfigurationRequest,
    ) -> Result<InstanceConfigurationResponse> {
        self.inner.call(request).await
    }

    /// List one page of instance configurations.
    pub async fn list_instance_configurations(
        &self,
        request: &ListInstanceConfigurationsRequest,
    ) -> Result<ListInstanceConfigurationsResponse> {
        self.inner.call(request).await
    }

    /// List every instance configuration matching `request`.
    pub async fn list_all_instance_configurations(
        &self,
        request: &ListInstanceConfigurationsRequest,
    ) -> Result<Vec<InstanceConfigurationSummary>> {
        self.inner.call_all_pages(request).await
    }

    /// Rename or retag an instance configuration.
    pub async fn update_instance_configuration(
        &self,
        request: &UpdateInstanceConfigurationRequest,
    ) -> Result<InstanceConfigurationResponse> {
        self.inner.call(request).await
    }

    /// Delete an instance configuration.
    pub async fn delete_instance_configuration(
        &self,
        request: &DeleteInstanceConfigurationRequest,
    ) -> Result<DeleteInstanceConfigurationResponse> {
        self.inner.call(request).await
    }

    /// Launch a single instance from an instance configuration.
    pub async fn launch_instance_configuration(
        &self,
        request: &LaunchInstanceConfigurationRequest,
    ) -> Result<LaunchInstanceConfigurationResponse> {
        self.inner.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        InstanceConfigurationInstanceDetails, InstanceConfigurationLaunchInstanceDetails,
        InstancePoolLifecycleState, UpdateInstancePoolDetails,
    };
    use oci_compute::models::InstanceLifecycleState;
    use oci_core::ocid::{CompartmentId, InstanceConfigurationId, InstancePoolId};
    use oci_core::Error;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, header_exists, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const POOL: &str = "ocid1.instancepool.oc1.phx.pool";

    fn pool_json(state: &str, size: i32) -> serde_json::Value {
        json!({
            "id": POOL,
            "compartmentId": "ocid1.compartment.oc1..aaa",
            "instanceConfigurationId": "ocid1.instanceconfiguration.oc1.phx.cfg",
            "lifecycleState": state,
            "placementConfigurations": [{
                "availabilityDomain": "Uocm:PHX-AD-1",
                "primarySubnetId": "ocid1.subnet.oc1.phx.a",
                "faultDomains": ["FAULT-DOMAIN-1", "FAULT-DOMAIN-2"]
            }],
            "size": size,
            "timeCreated": "2024-03-01T10:00:00.000Z"
        })
    }

    fn client(server: &MockServer) -> ComputeManagementClient {
        ComputeManagementClient::new(format!("{}/20160918", server.uri())).unwrap()
    }

    #[tokio::test]
    async fn test_get_instance_pool() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/20160918/instancePools/{POOL}")))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("etag", "pool-etag")
                    .set_body_json(pool_json("RUNNING", 2)),
            )
            .mount(&server)
            .await;

        let response = client(&server)
            .get_instance_pool(&GetInstancePoolRequest::new(InstancePoolId::new(POOL)))
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, InstancePoolLifecycleState::Running);
        assert_eq!(response.body.placement_configurations[0].fault_domains.as_ref().unwrap().len(), 2);
        assert_eq!(response.etag.as_deref(), Some("pool-etag"));
    }

    #[tokio::test]
    async fn test_scale_instance_pool() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path(format!("/20160918/instancePools/{POOL}")))
            .and(header("if-match", "pool-etag"))
            .and(body_partial_json(json!({"size": 5})))
            .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("SCALING", 5)))
            .expect(1)
            .mount(&server)
            .await;

        let mut request = UpdateInstancePoolRequest::new(
            InstancePoolId::new(POOL),
            UpdateInstancePoolDetails {
                size: Some(5),
                ..Default::default()
            },
        );
        request.if_match = Some("pool-etag".to_string());

        let response = client(&server).update_instance_pool(&request).await.unwrap();
        assert_eq!(response.body.lifecycle_state, InstancePoolLifecycleState::Scaling);
        assert_eq!(response.body.size, 5);
    }

    #[tokio::test]
    async fn test_stop_instance_pool_sends_retry_token() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!("/20160918/instancePools/{POOL}/actions/stop")))
            .and(header_exists("opc-retry-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(pool_json("STOPPING", 2)))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .stop_instance_pool(&StopInstancePoolRequest::new(InstancePoolId::new(POOL)))
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, InstancePoolLifecycleState::Stopping);
    }

    #[tokio::test]
    async fn test_list_all_instance_pool_instances() {
        let server = MockServer::start().await;
        let instance = |id: &str| {
            json!({
                "id": id,
                "availabilityDomain": "Uocm:PHX-AD-1",
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "region": "phx",
                "state": "Running",
                "timeCreated": "2024-03-01T10:00:00.000Z"
            })
        };

        Mock::given(method("GET"))
            .and(path(format!("/20160918/instancePools/{POOL}/instances")))
            .and(query_param("page", "next"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([instance("ocid1.instance.oc1.phx.b")])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/20160918/instancePools/{POOL}/instances")))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("opc-next-page", "next")
                    .set_body_json(json!([instance("ocid1.instance.oc1.phx.a")])),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let instances = client(&server)
            .list_all_instance_pool_instances(&ListInstancePoolInstancesRequest::new(
                CompartmentId::new("ocid1.compartment.oc1..aaa"),
                InstancePoolId::new(POOL),
            ))
            .await
            .unwrap();
        assert_eq!(instances.len(), 2);
        assert_eq!(instances[1].id.as_str(), "ocid1.instance.oc1.phx.b");
    }

    #[tokio::test]
    async fn test_launch_instance_configuration_returns_instance() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/20160918/instanceConfigurations/ocid1.instanceconfiguration.oc1.phx.cfg/actions/launch",
            ))
            .and(body_partial_json(json!({"instanceType": "compute"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ocid1.instance.oc1.phx.new",
                "availabilityDomain": "Uocm:PHX-AD-1",
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "lifecycleState": "PROVISIONING",
                "region": "phx",
                "shape": "VM.Standard.E4.Flex",
                "timeCreated": "2024-03-01T10:00:00.000Z"
            })))
            .mount(&server)
            .await;

        let request = LaunchInstanceConfigurationRequest::new(
            InstanceConfigurationId::new("ocid1.instanceconfiguration.oc1.phx.cfg"),
            InstanceConfigurationInstanceDetails::compute(
                InstanceConfigurationLaunchInstanceDetails::default(),
            ),
        );
        let response = client(&server)
            .launch_instance_configuration(&request)
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, InstanceLifecycleState::Provisioning);
    }

    #[tokio::test]
    async fn test_conflict_is_not_retried_without_policy() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path(
                "/20160918/instanceConfigurations/ocid1.instanceconfiguration.oc1.phx.cfg",
            ))
            .respond_with(
                ResponseTemplate::new(409)
                    .insert_header("opc-request-id", "req-409")
                    .set_body_json(json!({
                        "code": "Conflict",
                        "message": "configuration is in use by an instance pool"
                    })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let error = client(&server)
            .delete_instance_configuration(&DeleteInstanceConfigurationRequest::new(
                InstanceConfigurationId::new("ocid1.instanceconfiguration.oc1.phx.cfg"),
            ))
            .await
            .unwrap_err();
        match error {
            Error::Service(service) => {
                assert_eq!(service.status_code, 409);
                assert_eq!(service.code, "Conflict");
                assert_eq!(service.opc_request_id.as_deref(), Some("req-409"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }
}
