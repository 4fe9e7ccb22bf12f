//! Request and response wrappers for Virtual Network operations.

use oci_core::enums::{SortBy, SortOrder};
use oci_core::ocid::{ByoipRangeId, CompartmentId, NetworkSecurityGroupId, SubnetId, VcnId, VnicId};
use oci_core::pagination::{ListResponse, PagedRequest, PagedResponse};
use oci_core::query::QueryParams;
use oci_core::request::{
    EmptyResponse, HttpRequest, OciRequest, OciResponse, RequestMetadata, ResourceResponse,
    ResponseParts, IF_MATCH,
};
use oci_core::{Method, Result};

use crate::models::{
    AddNetworkSecurityGroupSecurityRulesDetails, AddedNetworkSecurityGroupSecurityRules,
    ByoipRange, ByoipRangeCollection, ByoipRangeLifecycleState, ByoipRangeSummary,
    CreateByoipRangeDetails, CreateSubnetDetails, CreateVcnDetails,
    RemoveNetworkSecurityGroupSecurityRulesDetails, SecurityRule, SecurityRuleDirection, Subnet,
    SubnetLifecycleState, UpdateByoipRangeDetails, UpdateNetworkSecurityGroupSecurityRulesDetails,
    UpdateVnicDetails, UpdatedNetworkSecurityGroupSecurityRules, Vcn, VcnLifecycleState, Vnic,
};

/// Response of `CreateVcn` and `GetVcn`.
pub type VcnResponse = ResourceResponse<Vcn>;
/// Response of `CreateSubnet` and `GetSubnet`.
pub type SubnetResponse = ResourceResponse<Subnet>;
/// Response of `GetVnic` and `UpdateVnic`.
pub type VnicResponse = ResourceResponse<Vnic>;
/// Response of the operations that return a BYOIP range.
pub type ByoipRangeResponse = ResourceResponse<ByoipRange>;
/// Response of `AddNetworkSecurityGroupSecurityRules`.
pub type AddNetworkSecurityGroupSecurityRulesResponse =
    ResourceResponse<AddedNetworkSecurityGroupSecurityRules>;
/// Response of `UpdateNetworkSecurityGroupSecurityRules`.
pub type UpdateNetworkSecurityGroupSecurityRulesResponse =
    ResourceResponse<UpdatedNetworkSecurityGroupSecurityRules>;
/// Response of `RemoveNetworkSecurityGroupSecurityRules`.
pub type RemoveNetworkSecurityGroupSecurityRulesResponse = EmptyResponse;
/// Response of `DeleteVcn`.
pub type DeleteVcnResponse = EmptyResponse;
/// Response of `DeleteSubnet`.
pub type DeleteSubnetResponse = EmptyResponse;
/// Response of `DeleteByoipRange`; the deletion is tracked by a work request.
pub type DeleteByoipRangeResponse = EmptyResponse;
/// Response of `ValidateByoipRange`, `AdvertiseByoipRange` and
/// `WithdrawByoipRange`.
pub type ByoipRangeActionResponse = EmptyResponse;
/// Response of `ListVcns`.
pub type ListVcnsResponse = ListResponse<Vcn>;
/// Response of `ListSubnets`.
pub type ListSubnetsResponse = ListResponse<Subnet>;
/// Response of `ListNetworkSecurityGroupSecurityRules`.
pub type ListNetworkSecurityGroupSecurityRulesResponse = ListResponse<SecurityRule>;

/// One page of `ListByoipRanges`, whose body wraps the items in a
/// collection object.
#[derive(Debug, Clone, PartialEq)]
pub struct ListByoipRangesResponse {
    /// Ranges on this page.
    pub collection: ByoipRangeCollection,
    /// Cursor for the next page.
    pub opc_next_page: Option<String>,
    /// Service request id.
    pub opc_request_id: Option<String>,
}

impl OciResponse for ListByoipRangesResponse {
    fn from_parts(parts: ResponseParts) -> Result<Self> {
        Ok(Self {
            opc_next_page: parts.opc_next_page(),
            opc_request_id: parts.opc_request_id(),
            collection: parts.json()?,
        })
    }
}

impl PagedResponse for ListByoipRangesResponse {
    type Item = ByoipRangeSummary;

    fn next_page(&self) -> Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> Vec<ByoipRangeSummary> {
        self.collection.items
    }
}

/// `POST /vcns`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateVcnRequest {
    /// VCN to create.
    pub details: CreateVcnDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateVcnRequest {
    /// Create a VCN from `details`.
    #[must_use]
    pub fn new(details: CreateVcnDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateVcnRequest {
    type Response = VcnResponse;
    const OPERATION: &'static str = "CreateVcn";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["vcns"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /vcns/{vcnId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetVcnRequest {
    /// VCN to fetch.
    pub vcn_id: VcnId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetVcnRequest {
    /// Fetch `vcn_id`.
    #[must_use]
    pub fn new(vcn_id: VcnId) -> Self {
        Self {
            vcn_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetVcnRequest {
    type Response = VcnResponse;
    const OPERATION: &'static str = "GetVcn";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::GET, ["vcns", self.vcn_id.as_str()])
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /vcns`
#[derive(Debug, Clone, PartialEq)]
pub struct ListVcnsRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<VcnLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListVcnsRequest {
    /// List VCNs in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            display_name: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            lifecycle_state: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListVcnsRequest {
    type Response = ListVcnsResponse;
    const OPERATION: &'static str = "ListVcns";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["vcns"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListVcnsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `DELETE /vcns/{vcnId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteVcnRequest {
    /// VCN to delete; it must be empty.
    pub vcn_id: VcnId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteVcnRequest {
    /// Delete `vcn_id`.
    #[must_use]
    pub fn new(vcn_id: VcnId) -> Self {
        Self {
            vcn_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteVcnRequest {
    type Response = DeleteVcnResponse;
    const OPERATION: &'static str = "DeleteVcn";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::DELETE, ["vcns", self.vcn_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `POST /subnets`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSubnetRequest {
    /// Subnet to create.
    pub details: CreateSubnetDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateSubnetRequest {
    /// Create a subnet from `details`.
    #[must_use]
    pub fn new(details: CreateSubnetDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateSubnetRequest {
    type Response = SubnetResponse;
    const OPERATION: &'static str = "CreateSubnet";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["subnets"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /subnets/{subnetId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetSubnetRequest {
    /// Subnet to fetch.
    pub subnet_id: SubnetId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetSubnetRequest {
    /// Fetch `subnet_id`.
    #[must_use]
    pub fn new(subnet_id: SubnetId) -> Self {
        Self {
            subnet_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetSubnetRequest {
    type Response = SubnetResponse;
    const OPERATION: &'static str = "GetSubnet";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::GET, ["subnets", self.subnet_id.as_str()])
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /subnets`
#[derive(Debug, Clone, PartialEq)]
pub struct ListSubnetsRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to one VCN.
    pub vcn_id: Option<VcnId>,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<SubnetLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListSubnetsRequest {
    /// List subnets in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            vcn_id: None,
            display_name: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            lifecycle_state: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListSubnetsRequest {
    type Response = ListSubnetsResponse;
    const OPERATION: &'static str = "ListSubnets";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("vcnId", self.vcn_id.as_ref());
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["subnets"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListSubnetsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `DELETE /subnets/{subnetId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteSubnetRequest {
    /// Subnet to delete; it must be empty.
    pub subnet_id: SubnetId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteSubnetRequest {
    /// Delete `subnet_id`.
    #[must_use]
    pub fn new(subnet_id: SubnetId) -> Self {
        Self {
            subnet_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteSubnetRequest {
    type Response = DeleteSubnetResponse;
    const OPERATION: &'static str = "DeleteSubnet";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::DELETE, ["subnets", self.subnet_id.as_str()])
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /vnics/{vnicId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetVnicRequest {
    /// VNIC to fetch.
    pub vnic_id: VnicId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetVnicRequest {
    /// Fetch `vnic_id`.
    #[must_use]
    pub fn new(vnic_id: VnicId) -> Self {
        Self {
            vnic_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetVnicRequest {
    type Response = VnicResponse;
    const OPERATION: &'static str = "GetVnic";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::GET, ["vnics", self.vnic_id.as_str()])
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `PUT /vnics/{vnicId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateVnicRequest {
    /// VNIC to update.
    pub vnic_id: VnicId,
    /// Fields to change.
    pub details: UpdateVnicDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateVnicRequest {
    /// Apply `details` to `vnic_id`.
    #[must_use]
    pub fn new(vnic_id: VnicId, details: UpdateVnicDetails) -> Self {
        Self {
            vnic_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateVnicRequest {
    type Response = VnicResponse;
    const OPERATION: &'static str = "UpdateVnic";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::PUT, ["vnics", self.vnic_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `POST /networkSecurityGroups/{networkSecurityGroupId}/actions/addSecurityRules`
#[derive(Debug, Clone, PartialEq)]
pub struct AddNetworkSecurityGroupSecurityRulesRequest {
    /// Group to add rules to.
    pub network_security_group_id: NetworkSecurityGroupId,
    /// Rules to add.
    pub details: AddNetworkSecurityGroupSecurityRulesDetails,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl AddNetworkSecurityGroupSecurityRulesRequest {
    /// Add `details` to `network_security_group_id`.
    #[must_use]
    pub fn new(
        network_security_group_id: NetworkSecurityGroupId,
        details: AddNetworkSecurityGroupSecurityRulesDetails,
    ) -> Self {
        Self {
            network_security_group_id,
            details,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for AddNetworkSecurityGroupSecurityRulesRequest {
    type Response = AddNetworkSecurityGroupSecurityRulesResponse;
    const OPERATION: &'static str = "AddNetworkSecurityGroupSecurityRules";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "networkSecurityGroups",
                self.network_security_group_id.as_str(),
                "actions",
                "addSecurityRules",
            ],
        )
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /networkSecurityGroups/{networkSecurityGroupId}/securityRules`
#[derive(Debug, Clone, PartialEq)]
pub struct ListNetworkSecurityGroupSecurityRulesRequest {
    /// Group to list.
    pub network_security_group_id: NetworkSecurityGroupId,
    /// Restrict to one direction.
    pub direction: Option<SecurityRuleDirection>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Sort field; only `TIMECREATED` is accepted.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListNetworkSecurityGroupSecurityRulesRequest {
    /// List the rules of `network_security_group_id`.
    #[must_use]
    pub fn new(network_security_group_id: NetworkSecurityGroupId) -> Self {
        Self {
            network_security_group_id,
            direction: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListNetworkSecurityGroupSecurityRulesRequest {
    type Response = ListNetworkSecurityGroupSecurityRulesResponse;
    const OPERATION: &'static str = "ListNetworkSecurityGroupSecurityRules";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push_opt("direction", self.direction.as_ref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        Ok(HttpRequest::new(
            Method::GET,
            [
                "networkSecurityGroups",
                self.network_security_group_id.as_str(),
                "securityRules",
            ],
        )
        .with_query(query)
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListNetworkSecurityGroupSecurityRulesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `POST /networkSecurityGroups/{networkSecurityGroupId}/actions/updateSecurityRules`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateNetworkSecurityGroupSecurityRulesRequest {
    /// Group owning the rules.
    pub network_security_group_id: NetworkSecurityGroupId,
    /// Replacement rules.
    pub details: UpdateNetworkSecurityGroupSecurityRulesDetails,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateNetworkSecurityGroupSecurityRulesRequest {
    /// Replace rules of `network_security_group_id` with `details`.
    #[must_use]
    pub fn new(
        network_security_group_id: NetworkSecurityGroupId,
        details: UpdateNetworkSecurityGroupSecurityRulesDetails,
    ) -> Self {
        Self {
            network_security_group_id,
            details,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateNetworkSecurityGroupSecurityRulesRequest {
    type Response = UpdateNetworkSecurityGroupSecurityRulesResponse;
    const OPERATION: &'static str = "UpdateNetworkSecurityGroupSecurityRules";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "networkSecurityGroups",
                self.network_security_group_id.as_str(),
                "actions",
                "updateSecurityRules",
            ],
        )
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `POST /networkSecurityGroups/{networkSecurityGroupId}/actions/removeSecurityRules`
#[derive(Debug, Clone, PartialEq)]
pub struct RemoveNetworkSecurityGroupSecurityRulesRequest {
    /// Group owning the rules.
    pub network_security_group_id: NetworkSecurityGroupId,
    /// Rule ids to remove.
    pub details: RemoveNetworkSecurityGroupSecurityRulesDetails,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl RemoveNetworkSecurityGroupSecurityRulesRequest {
    /// Remove `security_rule_ids` from `network_security_group_id`.
    #[must_use]
    pub fn new(
        network_security_group_id: NetworkSecurityGroupId,
        security_rule_ids: Vec<String>,
    ) -> Self {
        Self {
            network_security_group_id,
            details: RemoveNetworkSecurityGroupSecurityRulesDetails {
                security_rule_ids: Some(security_rule_ids),
            },
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for RemoveNetworkSecurityGroupSecurityRulesRequest {
    type Response = RemoveNetworkSecurityGroupSecurityRulesResponse;
    const OPERATION: &'static str = "RemoveNetworkSecurityGroupSecurityRules";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "networkSecurityGroups",
                self.network_security_group_id.as_str(),
                "actions",
                "removeSecurityRules",
            ],
        )
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `POST /byoipRanges`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateByoipRangeRequest {
    /// Range to import.
    pub details: CreateByoipRangeDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateByoipRangeRequest {
    /// Import the range described by `details`.
    #[must_use]
    pub fn new(details: CreateByoipRangeDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateByoipRangeRequest {
    type Response = ByoipRangeResponse;
    const OPERATION: &'static str = "CreateByoipRange";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["byoipRanges"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /byoipRanges/{byoipRangeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetByoipRangeRequest {
    /// Range to fetch.
    pub byoip_range_id: ByoipRangeId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetByoipRangeRequest {
    /// Fetch `byoip_range_id`.
    #[must_use]
    pub fn new(byoip_range_id: ByoipRangeId) -> Self {
        Self {
            byoip_range_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetByoipRangeRequest {
    type Response = ByoipRangeResponse;
    const OPERATION: &'static str = "GetByoipRange";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::GET, ["byoipRanges", self.byoip_range_id.as_str()])
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /byoipRanges`
#[derive(Debug, Clone, PartialEq)]
pub struct ListByoipRangesRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<ByoipRangeLifecycleState>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListByoipRangesRequest {
    /// List BYOIP ranges in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            display_name: None,
            lifecycle_state: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListByoipRangesRequest {
    type Response = ListByoipRangesResponse;
    const OPERATION: &'static str = "ListByoipRanges";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        Ok(HttpRequest::new(Method::GET, ["byoipRanges"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListByoipRangesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `PUT /byoipRanges/{byoipRangeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateByoipRangeRequest {
    /// Range to update.
    pub byoip_range_id: ByoipRangeId,
    /// Fields to change.
    pub details: UpdateByoipRangeDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateByoipRangeRequest {
    /// Apply `details` to `byoip_range_id`.
    #[must_use]
    pub fn new(byoip_range_id: ByoipRangeId, details: UpdateByoipRangeDetails) -> Self {
        Self {
            byoip_range_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateByoipRangeRequest {
    type Response = ByoipRangeResponse;
    const OPERATION: &'static str = "UpdateByoipRange";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::PUT, ["byoipRanges", self.byoip_range_id.as_str()])
            .header_opt(IF_MATCH, self.if_match.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /byoipRanges/{byoipRangeId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteByoipRangeRequest {
    /// Range to delete; it must not be advertised.
    pub byoip_range_id: ByoipRangeId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteByoipRangeRequest {
    /// Delete `byoip_range_id`.
    #[must_use]
    pub fn new(byoip_range_id: ByoipRangeId) -> Self {
        Self {
            byoip_range_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteByoipRangeRequest {
    type Response = DeleteByoipRangeResponse;
    const OPERATION: &'static str = "DeleteByoipRange";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::DELETE,
            ["byoipRanges", self.byoip_range_id.as_str()],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// BYOIP range actions take no body and return no body.
macro_rules! byoip_range_action_request {
    ($(#[$doc:meta])* $name:ident, $operation:literal, $action:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            /// Range to act on.
            pub byoip_range_id: ByoipRangeId,
            /// Per-call metadata.
            pub metadata: RequestMetadata,
        }

        impl $name {
            /// Act on `byoip_range_id`.
            #[must_use]
            pub fn new(byoip_range_id: ByoipRangeId) -> Self {
                Self {
                    byoip_range_id,
                    metadata: RequestMetadata::new(),
                }
            }
        }

        impl OciRequest for $name {
            type Response = ByoipRangeActionResponse;
            const OPERATION: &'static str = $operation;

            fn to_http_request(&self) -> Result<HttpRequest> {
                Ok(HttpRequest::new(
                    Method::POST,
                    ["byoipRanges", self.byoip_range_id.as_str(), "actions", $action],
                )
                .with_metadata(&self.metadata))
            }

            oci_core::impl_request_metadata!();
        }
    };
}

byoip_range_action_request!(
    /// `POST /byoipRanges/{byoipRangeId}/actions/validate`
    ///
    /// Starts ownership validation against the published validation token.
    ValidateByoipRangeRequest,
    "ValidateByoipRange",
    "validate"
);
byoip_range_action_request!(
    /// `POST /byoipRanges/{byoipRangeId}/actions/advertise`
    AdvertiseByoipRangeRequest,
    "AdvertiseByoipRange",
    "advertise"
);
byoip_range_action_request!(
    /// `POST /byoipRanges/{byoipRangeId}/actions/withdraw`
    WithdrawByoipRangeRequest,
    "WithdrawByoipRange",
    "withdraw"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AddSecurityRuleDetails;
    use bytes::Bytes;
    use oci_core::request::OPC_RETRY_TOKEN;
    use reqwest::header::{HeaderMap, HeaderValue};
    use reqwest::StatusCode;
    use serde_json::json;

    fn nsg() -> NetworkSecurityGroupId {
        NetworkSecurityGroupId::new("ocid1.networksecuritygroup.oc1.phx.a")
    }

    #[test]
    fn test_create_vcn_body() {
        let mut details = CreateVcnDetails::new(
            CompartmentId::new("ocid1.compartment.oc1..aaa"),
            "10.0.0.0/16",
        );
        details.dns_label = Some("build".to_string());
        let http = CreateVcnRequest::new(details).to_http_request().unwrap();
        assert_eq!(http.path(), "/vcns");
        assert!(http.header_value(OPC_RETRY_TOKEN).is_some());
        assert_eq!(
            http.body,
            Some(json!({
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "cidrBlock": "10.0.0.0/16",
                "dnsLabel": "build"
            }))
        );
    }

    #[test]
    fn test_list_subnets_by_vcn() {
        let mut request = ListSubnetsRequest::new(CompartmentId::new("ocid1.compartment.oc1..aaa"));
        request.vcn_id = Some(VcnId::new("ocid1.vcn.oc1.phx.a"));
        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.query,
            vec![
                ("compartmentId", "ocid1.compartment.oc1..aaa".to_string()),
                ("vcnId", "ocid1.vcn.oc1.phx.a".to_string()),
            ]
        );
    }

    #[test]
    fn test_add_security_rules_path_and_body() {
        let http = AddNetworkSecurityGroupSecurityRulesRequest::new(
            nsg(),
            AddNetworkSecurityGroupSecurityRulesDetails {
                security_rules: Some(vec![AddSecurityRuleDetails::ingress_tcp("10.0.0.0/16", 443)]),
            },
        )
        .to_http_request()
        .unwrap();
        assert_eq!(
            http.path(),
            "/networkSecurityGroups/ocid1.networksecuritygroup.oc1.phx.a/actions/addSecurityRules"
        );
        let body = http.body.unwrap();
        assert_eq!(body["securityRules"][0]["sourceType"], "CIDR_BLOCK");
        assert_eq!(
            body["securityRules"][0]["tcpOptions"]["destinationPortRange"]["min"],
            443
        );
    }

    #[test]
    fn test_list_security_rules_filters() {
        let mut request = ListNetworkSecurityGroupSecurityRulesRequest::new(nsg());
        request.direction = Some(SecurityRuleDirection::Egress);
        request.sort_by = Some(SortBy::TimeCreated);
        request.sort_order = Some(SortOrder::Asc);
        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.path(),
            "/networkSecurityGroups/ocid1.networksecuritygroup.oc1.phx.a/securityRules"
        );
        assert_eq!(
            http.query,
            vec![
                ("direction", "EGRESS".to_string()),
                ("sortBy", "TIMECREATED".to_string()),
                ("sortOrder", "ASC".to_string()),
            ]
        );
    }

    #[test]
    fn test_remove_security_rules_body() {
        let http = RemoveNetworkSecurityGroupSecurityRulesRequest::new(
            nsg(),
            vec!["04ABEC".to_string()],
        )
        .to_http_request()
        .unwrap();
        assert_eq!(http.body, Some(json!({"securityRuleIds": ["04ABEC"]})));
    }

    #[test]
    fn test_byoip_action_paths() {
        let id = ByoipRangeId::new("ocid1.byoiprange.oc1.phx.a");
        let validate = ValidateByoipRangeRequest::new(id.clone()).to_http_request().unwrap();
        let advertise = AdvertiseByoipRangeRequest::new(id.clone()).to_http_request().unwrap();
        let withdraw = WithdrawByoipRangeRequest::new(id).to_http_request().unwrap();
        assert_eq!(validate.path(), "/byoipRanges/ocid1.byoiprange.oc1.phx.a/actions/validate");
        assert_eq!(advertise.path(), "/byoipRanges/ocid1.byoiprange.oc1.phx.a/actions/advertise");
        assert_eq!(withdraw.path(), "/byoipRanges/ocid1.byoiprange.oc1.phx.a/actions/withdraw");
        assert!(withdraw.body.is_none());
    }

    #[test]
    fn test_byoip_collection_response() {
        let mut headers = HeaderMap::new();
        headers.insert("opc-next-page", HeaderValue::from_static("p2"));
        let parts = ResponseParts {
            status: StatusCode::OK,
            headers,
            body: Bytes::from_static(
                br#"{"items":[{"id":"ocid1.byoiprange.oc1.phx.a","cidrBlock":"203.0.113.0/24"}]}"#,
            ),
        };
        let response = ListByoipRangesResponse::from_parts(parts).unwrap();
        assert_eq!(response.next_page(), Some("p2"));
        let items = response.into_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].cidr_block.as_deref(), Some("203.0.113.0/24"));
    }
}
