//! Asynchronous Virtual Network client.

use std::sync::Arc;
use std::time::Duration;

use oci_core::client::{
    ClientConfig, RequestSigner, RetryPolicy, ServiceClient, ServiceClientBuilder,
    VIRTUALNETWORK_DEFAULT_TIMEOUT,
};
use oci_core::config::OciClientConfig;
use oci_core::types::{OciService, Region};
use secrecy::SecretString;
use url::Url;

use crate::models::{ByoipRangeSummary, SecurityRule, Subnet, Vcn};
use crate::requests::{
    AddNetworkSecurityGroupSecurityRulesRequest, AddNetworkSecurityGroupSecurityRulesResponse,
    AdvertiseByoipRangeRequest, ByoipRangeActionResponse, ByoipRangeResponse,
    CreateByoipRangeRequest, CreateSubnetRequest, CreateVcnRequest, DeleteByoipRangeRequest,
    DeleteByoipRangeResponse, DeleteSubnetRequest, DeleteSubnetResponse, DeleteVcnRequest,
    DeleteVcnResponse, GetByoipRangeRequest, GetSubnetRequest, GetVcnRequest, GetVnicRequest,
    ListByoipRangesRequest, ListByoipRangesResponse,
    ListNetworkSecurityGroupSecurityRulesRequest, ListNetworkSecurityGroupSecurityRulesResponse,
    ListSubnetsRequest, ListSubnetsResponse, ListVcnsRequest, ListVcnsResponse,
    RemoveNetworkSecurityGroupSecurityRulesRequest,
    RemoveNetworkSecurityGroupSecurityRulesResponse, SubnetResponse, UpdateByoipRangeRequest,
    UpdateNetworkSecurityGroupSecurityRulesRequest,
    UpdateNetworkSecurityGroupSecurityRulesResponse, UpdateVnicRequest, ValidateByoipRangeRequest,
    VcnResponse, VnicResponse, WithdrawByoipRangeRequest,
};
use crate::Result;

const USER_AGENT: &str = concat!("oci-virtualnetwork/", env!("CARGO_PKG_VERSION"));

/// Builder for [`VirtualNetworkClient`].
#[derive(Debug)]
pub struct VirtualNetworkClientBuilder {
    inner: ServiceClientBuilder,
}

impl VirtualNetworkClientBuilder {
    /// Create a builder for the specified base URL, including the API version
    /// path.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        let builder = ServiceClientBuilder::new(
            OciService::VirtualNetwork,
            base_url,
            Duration::from_secs(VIRTUALNETWORK_DEFAULT_TIMEOUT),
        )?
        .with_user_agent(USER_AGENT);

        Ok(Self { inner: builder })
    }

    /// Create a builder for the regional endpoint of `region`.
    pub fn for_region(region: &Region) -> Result<Self> {
        Self::new(region.endpoint(OciService::VirtualNetwork))
    }

    /// Create a builder from a loaded configuration profile.
    pub fn from_config(config: &OciClientConfig) -> Result<Self> {
        let builder = config
            .service_client_builder(OciService::VirtualNetwork)?
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
    pub fn build(self) -> Result<VirtualNetworkClient> {
        let inner = self.inner.build()?;
        Ok(VirtualNetworkClient { inner })
    }
}

/// Asynchronous client for VCNs, subnets, VNICs, security rules and BYOIP
/// ranges.
#[derive(Debug, Clone)]
pub struct VirtualNetworkClient {
    inner: ServiceClient,
}

impl VirtualNetworkClient {
    /// Construct a client directly from the base URL.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
        VirtualNetworkClientBuilder::new(base_url)?.build()
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

    /// Create a VCN.
    pub async fn create_vcn(&self, request: &CreateVcnRequest) -> Result<VcnResponse> {
        self.inner.call(request).await
    }

    /// Fetch a VCN.
    pub async fn get_vcn(&self, request: &GetVcnRequest) -> Result<VcnResponse> {
        self.inner.call(request).await
    }

    /// List one page of VCNs.
    pub async fn list_vcns(&self, request: &ListVcnsRequest) -> Result<ListVcnsResponse> {
        self.inner.call(request).await
    }

    /// List every VCN matching `request`.
    pub async fn list_all_vcns(&self, request: &ListVcnsRequest) -> Result<Vec<Vcn>> {
        self.inner.call_all_pages(request).await
    }

    /// Delete an empty VCN.
    pub async fn delete_vcn(&self, request: &DeleteVcnRequest) -> Result<DeleteVcnResponse> {
        self.inner.call(request).await
    }

    /// Create a subnet.
    pub async fn create_subnet(&self, request: &CreateSubnetRequest) -> Result<SubnetResponse> {
        self.inner.call(request).await
    }

    /// Fetch a subnet.
    pub async fn get_subnet(&self, request: &GetSubnetRequest) -> Result<SubnetResponse> {
        self.inner.call(request).await
    }

    /// List one page of subnets.
    pub async fn list_subnets(&self, request: &ListSubnetsRequest) -> Result<ListSubnetsResponse> {
        self.inner.call(request).await
    }

    /// List every subnet matching `request`.
    pub async fn list_all_subnets(&self, request: &ListSubnetsRequest) -> Result<Vec<Subnet>> {
        self.inner.call_all_pages(request).await
    }

    /// Delete an empty subnet.
    pub async fn delete_subnet(
        &self,
        request: &DeleteSubnetRequest,
    ) -> Result<DeleteSubnetResponse> {
        self.inner.call(request).await
    }

    /// Fetch a VNIC, including its private and public IPs.
    pub async fn get_vnic(&self, request: &GetVnicRequest) -> Result<VnicResponse> {
        self.inner.call(request).await
    }

    /// Update a VNIC.
    pub async fn update_vnic(&self, request: &UpdateVnicRequest) -> Result<VnicResponse> {
        self.inner.call(request).await
    }

    /// Add rules to a network security group.
    pub async fn add_network_security_group_security_rules(
        &self,
        request: &AddNetworkSecurityGroupSecurityRulesRequest,
    ) -> Result<AddNetworkSecurityGroupSecurityRulesResponse> {
        self.inner.call(request).await
    }

    /// List one page of the rules of a network security group.
    pub async fn list_network_security_group_security_rules(
        &self,
        request: &ListNetworkSecurityGroupSecurityRulesRequest,
    ) -> Result<ListNetworkSecurityGroupSecurityRulesResponse> {
        self.inner.call(request).await
    }

    /// List every rule of a network security group.
    pub async fn list_all_network_security_group_security_rules(
        &self,
        request: &ListNetworkSecurityGroupSecurityRulesRequest,
    ) -> Result<Vec<SecurityRule>> {
        self.inner.call_all_pages(request).await
    }

    /// Replace rules of a network security group.
    pub async fn update_network_security_group_security_rules(
        &self,
        request: &UpdateNetworkSecurityGroupSecurityRulesRequest,
    ) -> Result<UpdateNetworkSecurityGroupSecurityRulesResponse> {
        self.inner.call(request).await
    }

    /// Remove rules from a network security group.
    pub async fn remove_network_security_group_security_rules(
        &self,
        request: &RemoveNetworkSecurityGroupSecurityRulesRequest,
    ) -> Result<RemoveNetworkSecurityGroupSecurityRulesResponse> {
        self.inner.call(request).await
    }

    /// Import a customer-owned address range.
    pub async fn create_byoip_range(
        &self,
        request: &CreateByoipRangeRequest,
    ) -> Result<ByoipRangeResponse> {
        self.inner.call(request).await
    }

    /// Fetch a BYOIP range.
    pub async fn get_byoip_range(&self, request: &GetByoipRangeRequest) -> Result<ByoipRangeResponse> {
        self.inner.call(request).await
    }

    /// List one page of BYOIP ranges.
    pub async fn list_byoip_ranges(
        &self,
        request: &ListByoipRangesRequest,
    ) -> Result<ListByoipRangesResponse> {
        self.inner.call(request).await
    }

    /// List every BYOIP range matching `request`.
    pub async fn list_all_byoip_ranges(
        &self,
        request: &ListByoipRangesRequest,
    ) -> Result<Vec<ByoipRangeSummary>> {
        self.inner.call_all_pages(request).await
    }

    /// Rename or retag a BYOIP range.
    pub async fn update_byoip_range(
        &self,
        request: &UpdateByoipRangeRequest,
    ) -> Result<ByoipRangeResponse> {
        self.inner.call(request).await
    }

    /// Delete a BYOIP range. The service answers 202 and reports the work
    /// request tracking the deletion.
    pub async fn delete_byoip_range(
        &self,
        request: &DeleteByoipRangeRequest,
    ) -> Result<DeleteByoipRangeResponse> {
        self.inner.call(request).await
    }

    /// Start ownership validation of a BYOIP range.
    pub async fn validate_byoip_range(
        &self,
        request: &ValidateByoipRangeRequest,
    ) -> Result<ByoipRangeActionResponse> {
        self.inner.call(request).await
    }

    /// Start advertising a validated BYOIP range.
    pub async fn advertise_byoip_range(
        &self,
        request: &AdvertiseByoipRangeRequest,
    ) -> Result<ByoipRangeActionResponse> {
        self.inner.call(request).await
    }

    /// Stop advertising a BYOIP range.
    pub async fn withdraw_byoip_range(
        &self,
        request: &WithdrawByoipRangeRequest,
    ) -> Result<ByoipRangeActionResponse> {
        self.inner.call(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AddNetworkSecurityGroupSecurityRulesDetails, AddSecurityRuleDetails,
        ByoipRangeLifecycleDetails, SecurityRuleDirection, VnicLifecycleState,
    };
    use oci_core::ocid::{ByoipRangeId, CompartmentId, NetworkSecurityGroupId, VnicId};
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const NSG: &str = "ocid1.networksecuritygroup.oc1.phx.nsg";

    fn client(server: &MockServer) -> VirtualNetworkClient {
        VirtualNetworkClient::new(format!("{}/20160918", server.uri())).unwrap()
    }

    fn rule_json(id: &str, direction: &str) -> serde_json::Value {
        json!({
            "id": id,
            "direction": direction,
            "protocol": "6",
            "isValid": true,
            "timeCreated": "2024-03-01T10:00:00.000Z"
        })
    }

    #[tokio::test]
    async fn test_get_vnic() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/20160918/vnics/ocid1.vnic.oc1.phx.abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "ocid1.vnic.oc1.phx.abc",
                "availabilityDomain": "Uocm:PHX-AD-1",
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "lifecycleState": "AVAILABLE",
                "timeCreated": "2024-03-01T10:00:00.000Z",
                "privateIp": "10.0.0.7",
                "publicIp": "203.0.113.7",
                "isPrimary": true
            })))
            .mount(&server)
            .await;

        let response = client(&server)
            .get_vnic(&GetVnicRequest::new(VnicId::new("ocid1.vnic.oc1.phx.abc")))
            .await
            .unwrap();
        assert_eq!(response.body.lifecycle_state, VnicLifecycleState::Available);
        assert_eq!(response.body.public_ip.as_deref(), Some("203.0.113.7"));
    }

    #[tokio::test]
    async fn test_add_security_rules() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(format!(
                "/20160918/networkSecurityGroups/{NSG}/actions/addSecurityRules"
            )))
            .and(body_partial_json(json!({
                "securityRules": [{"direction": "INGRESS", "protocol": "6"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "securityRules": [rule_json("04ABEC", "INGRESS")]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = AddNetworkSecurityGroupSecurityRulesRequest::new(
            NetworkSecurityGroupId::new(NSG),
            AddNetworkSecurityGroupSecurityRulesDetails {
                security_rules: Some(vec![AddSecurityRuleDetails::ingress_tcp("0.0.0.0/0", 22)]),
            },
        );
        let response = client(&server)
            .add_network_security_group_security_rules(&request)
            .await
            .unwrap();
        assert_eq!(response.body.security_rules.len(), 1);
        assert_eq!(response.body.security_rules[0].id.as_deref(), Some("04ABEC"));
    }

    #[tokio::test]
    async fn test_list_all_security_rules_follows_pages() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(format!("/20160918/networkSecurityGroups/{NSG}/securityRules")))
            .and(query_param("page", "2"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([rule_json("B", "EGRESS")])),
            )
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path(format!("/20160918/networkSecurityGroups/{NSG}/securityRules")))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("opc-next-page", "2")
                    .set_body_json(json!([rule_json("A", "EGRESS")])),
            )
            .up_to_n_times(1)
            .mount(&server)
            .await;

        let mut request =
            ListNetworkSecurityGroupSecurityRulesRequest::new(NetworkSecurityGroupId::new(NSG));
        request.direction = Some(SecurityRuleDirection::Egress);
        let rules = client(&server)
            .list_all_network_security_group_security_rules(&request)
            .await
            .unwrap();
        let ids: Vec<_> = rules.iter().filter_map(|r| r.id.as_deref()).collect();
        assert_eq!(ids, vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_list_byoip_ranges_collection() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/20160918/byoipRanges"))
            .and(query_param("compartmentId", "ocid1.compartment.oc1..aaa"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "id": "ocid1.byoiprange.oc1.phx.a",
                    "cidrBlock": "203.0.113.0/24",
                    "lifecycleState": "ACTIVE",
                    "lifecycleDetails": "PROVISIONED"
                }]
            })))
            .mount(&server)
            .await;

        let ranges = client(&server)
            .list_all_byoip_ranges(&ListByoipRangesRequest::new(CompartmentId::new(
                "ocid1.compartment.oc1..aaa",
            )))
            .await
            .unwrap();
        assert_eq!(ranges.len(), 1);
        assert_eq!(
            ranges[0].lifecycle_details,
            Some(ByoipRangeLifecycleDetails::Provisioned)
        );
    }

    #[tokio::test]
    async fn test_delete_byoip_range_accepted() {
        let server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/20160918/byoipRanges/ocid1.byoiprange.oc1.phx.a"))
            .and(header("if-match", "etag-7"))
            .respond_with(
                ResponseTemplate::new(202)
                    .insert_header("opc-work-request-id", "ocid1.coreservicesworkrequest.oc1.phx.w"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let mut request = DeleteByoipRangeRequest::new(ByoipRangeId::new("ocid1.byoiprange.oc1.phx.a"));
        request.if_match = Some("etag-7".to_string());
        let response = client(&server).delete_byoip_range(&request).await.unwrap();
        assert_eq!(
            response.opc_work_request_id.as_deref(),
            Some("ocid1.coreservicesworkrequest.oc1.phx.w")
        );
    }

    #[tokio::test]
    async fn test_advertise_byoip_range() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path(
                "/20160918/byoipRanges/ocid1.byoiprange.oc1.phx.a/actions/advertise",
            ))
            .respond_with(ResponseTemplate::new(204).insert_header("opc-request-id", "adv-1"))
            .expect(1)
            .mount(&server)
            .await;

        let response = client(&server)
            .advertise_byoip_range(&AdvertiseByoipRangeRequest::new(ByoipRangeId::new(
                "ocid1.byoiprange.oc1.phx.a",
            )))
            .await
            .unwrap();
        assert_eq!(response.opc_request_id.as_deref(), Some("adv-1"));
    }
}
