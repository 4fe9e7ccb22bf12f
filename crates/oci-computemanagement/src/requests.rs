//! Request and response wrappers for Compute Management operations.

use oci_compute::models::Instance;
use oci_core::enums::{SortBy, SortOrder};
use oci_core::ocid::{
    CompartmentId, InstanceConfigurationId, InstancePoolId, InstancePoolLoadBalancerAttachmentId,
};
use oci_core::pagination::{ListResponse, PagedRequest};
use oci_core::query::QueryParams;
use oci_core::request::{
    EmptyResponse, HttpRequest, OciRequest, RequestMetadata, ResourceResponse, IF_MATCH,
};
use oci_core::{Method, Result};

use crate::models::{
    AttachLoadBalancerDetails, ChangeInstancePoolCompartmentDetails,
    CreateInstanceConfigurationDetails, CreateInstancePoolDetails, DetachLoadBalancerDetails,
    InstanceConfiguration, InstanceConfigurationInstanceDetails, InstanceConfigurationSummary,
    InstancePool, InstancePoolInstance, InstancePoolLifecycleState,
    InstancePoolLoadBalancerAttachment, InstancePoolSummary, UpdateInstanceConfigurationDetails,
    UpdateInstancePoolDetails,
};

/// Response of the operations that return an instance pool.
pub type InstancePoolResponse = ResourceResponse<InstancePool>;
/// Response of `GetInstancePoolLoadBalancerAttachment`.
pub type InstancePoolLoadBalancerAttachmentResponse =
    ResourceResponse<InstancePoolLoadBalancerAttachment>;
/// Response of the operations that return an instance configuration.
pub type InstanceConfigurationResponse = ResourceResponse<InstanceConfiguration>;
/// Response of `LaunchInstanceConfiguration`.
pub type LaunchInstanceConfigurationResponse = ResourceResponse<Instance>;
/// Response of `TerminateInstancePool`.
pub type TerminateInstancePoolResponse = EmptyResponse;
/// Response of `ChangeInstancePoolCompartment`.
pub type ChangeInstancePoolCompartmentResponse = EmptyResponse;
/// Response of `DeleteInstanceConfiguration`.
pub type DeleteInstanceConfigurationResponse = EmptyResponse;
/// Response of `ListInstancePools`.
pub type ListInstancePoolsResponse = ListResponse<InstancePoolSummary>;
/// Response of `ListInstancePoolInstances`.
pub type ListInstancePoolInstancesResponse = ListResponse<InstancePoolInstance>;
/// Response of `ListInstanceConfigurations`.
pub type ListInstanceConfigurationsResponse = ListResponse<InstanceConfigurationSummary>;

/// `POST /instancePools`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInstancePoolRequest {
    /// Pool to create.
    pub details: CreateInstancePoolDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateInstancePoolRequest {
    /// Create a pool from `details`.
    #[must_use]
    pub fn new(details: CreateInstancePoolDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateInstancePoolRequest {
    type Response = InstancePoolResponse;
    const OPERATION: &'static str = "CreateInstancePool";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["instancePools"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instancePools/{instancePoolId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetInstancePoolRequest {
    /// Pool to fetch.
    pub instance_pool_id: InstancePoolId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetInstancePoolRequest {
    /// Fetch `instance_pool_id`.
    #[must_use]
    pub fn new(instance_pool_id: InstancePoolId) -> Self {
        Self {
            instance_pool_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetInstancePoolRequest {
    type Response = InstancePoolResponse;
    const OPERATION: &'static str = "GetInstancePool";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::GET,
            ["instancePools", self.instance_pool_id.as_str()],
        )
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instancePools`
#[derive(Debug, Clone, PartialEq)]
pub struct ListInstancePoolsRequest {
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
    pub lifecycle_state: Option<InstancePoolLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListInstancePoolsRequest {
    /// List pools in `compartment_id`.
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

impl OciRequest for ListInstancePoolsRequest {
    type Response = ListInstancePoolsResponse;
    const OPERATION: &'static str = "ListInstancePools";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["instancePools"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListInstancePoolsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `PUT /instancePools/{instancePoolId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInstancePoolRequest {
    /// Pool to update.
    pub instance_pool_id: InstancePoolId,
    /// Fields to change.
    pub details: UpdateInstancePoolDetails,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateInstancePoolRequest {
    /// Apply `details` to `instance_pool_id`.
    #[must_use]
    pub fn new(instance_pool_id: InstancePoolId, details: UpdateInstancePoolDetails) -> Self {
        Self {
            instance_pool_id,
            details,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateInstancePoolRequest {
    type Response = InstancePoolResponse;
    const OPERATION: &'static str = "UpdateInstancePool";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::PUT,
            ["instancePools", self.instance_pool_id.as_str()],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /instancePools/{instancePoolId}`
///
/// Terminates every instance in the pool.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminateInstancePoolRequest {
    /// Pool to terminate.
    pub instance_pool_id: InstancePoolId,
    /// Only terminate when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl TerminateInstancePoolRequest {
    /// Terminate `instance_pool_id`.
    #[must_use]
    pub fn new(instance_pool_id: InstancePoolId) -> Self {
        Self {
            instance_pool_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for TerminateInstancePoolRequest {
    type Response = TerminateInstancePoolResponse;
    const OPERATION: &'static str = "TerminateInstancePool";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::DELETE,
            ["instancePools", self.instance_pool_id.as_str()],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// Power actions on a pool share one shape: no body, a retry token and an
/// optional etag guard.
macro_rules! instance_pool_action_request {
    ($(#[$doc:meta])* $name:ident, $operation:literal, $action:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            /// Pool to act on.
            pub instance_pool_id: InstancePoolId,
            /// Idempotency token; generated when absent.
            pub opc_retry_token: Option<String>,
            /// Only act when the current etag matches.
            pub if_match: Option<String>,
            /// Per-call metadata.
            pub metadata: RequestMetadata,
        }

        impl $name {
            /// Act on `instance_pool_id`.
            #[must_use]
            pub fn new(instance_pool_id: InstancePoolId) -> Self {
                Self {
                    instance_pool_id,
                    opc_retry_token: None,
                    if_match: None,
                    metadata: RequestMetadata::new(),
                }
            }
        }

        impl OciRequest for $name {
            type Response = InstancePoolResponse;
            const OPERATION: &'static str = $operation;

            fn to_http_request(&self) -> Result<HttpRequest> {
                Ok(HttpRequest::new(
                    Method::POST,
                    [
                        "instancePools",
                        self.instance_pool_id.as_str(),
                        "actions",
                        $action,
                    ],
                )
                .retry_token(self.opc_retry_token.as_deref())
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata))
            }

            oci_core::impl_request_metadata!();
        }
    };
}

instance_pool_action_request!(
    /// `POST /instancePools/{instancePoolId}/actions/start`
    StartInstancePoolRequest,
    "StartInstancePool",
    "start"
);
instance_pool_action_request!(
    /// `POST /instancePools/{instancePoolId}/actions/stop`
    StopInstancePoolRequest,
    "StopInstancePool",
    "stop"
);
instance_pool_action_request!(
    /// `POST /instancePools/{instancePoolId}/actions/reset`
    ResetInstancePoolRequest,
    "ResetInstancePool",
    "reset"
);
instance_pool_action_request!(
    /// `POST /instancePools/{instancePoolId}/actions/softreset`
    SoftresetInstancePoolRequest,
    "SoftresetInstancePool",
    "softreset"
);

/// `GET /instancePools/{instancePoolId}/instances`
#[derive(Debug, Clone, PartialEq)]
pub struct ListInstancePoolInstancesRequest {
    /// Compartment of the pool.
    pub compartment_id: CompartmentId,
    /// Pool to list.
    pub instance_pool_id: InstancePoolId,
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
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListInstancePoolInstancesRequest {
    /// List the instances of `instance_pool_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId, instance_pool_id: InstancePoolId) -> Self {
        Self {
            compartment_id,
            instance_pool_id,
            display_name: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListInstancePoolInstancesRequest {
    type Response = ListInstancePoolInstancesResponse;
    const OPERATION: &'static str = "ListInstancePoolInstances";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        Ok(HttpRequest::new(
            Method::GET,
            ["instancePools", self.instance_pool_id.as_str(), "instances"],
        )
        .with_query(query)
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListInstancePoolInstancesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `POST /instancePools/{instancePoolId}/actions/attachLoadBalancer`
#[derive(Debug, Clone, PartialEq)]
pub struct AttachLoadBalancerRequest {
    /// Pool to attach to.
    pub instance_pool_id: InstancePoolId,
    /// Load balancer backend set.
    pub details: AttachLoadBalancerDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Only attach when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl AttachLoadBalancerRequest {
    /// Attach `details` to `instance_pool_id`.
    #[must_use]
    pub fn new(instance_pool_id: InstancePoolId, details: AttachLoadBalancerDetails) -> Self {
        Self {
            instance_pool_id,
            details,
            opc_retry_token: None,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for AttachLoadBalancerRequest {
    type Response = InstancePoolResponse;
    const OPERATION: &'static str = "AttachLoadBalancer";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "instancePools",
                self.instance_pool_id.as_str(),
                "actions",
                "attachLoadBalancer",
            ],
        )
        .retry_token(self.opc_retry_token.as_deref())
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `POST /instancePools/{instancePoolId}/actions/detachLoadBalancer`
#[derive(Debug, Clone, PartialEq)]
pub struct DetachLoadBalancerRequest {
    /// Pool to detach from.
    pub instance_pool_id: InstancePoolId,
    /// Load balancer backend set.
    pub details: DetachLoadBalancerDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Only detach when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DetachLoadBalancerRequest {
    /// Detach `details` from `instance_pool_id`.
    #[must_use]
    pub fn new(instance_pool_id: InstancePoolId, details: DetachLoadBalancerDetails) -> Self {
        Self {
            instance_pool_id,
            details,
            opc_retry_token: None,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DetachLoadBalancerRequest {
    type Response = InstancePoolResponse;
    const OPERATION: &'static str = "DetachLoadBalancer";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "instancePools",
                self.instance_pool_id.as_str(),
                "actions",
                "detachLoadBalancer",
            ],
        )
        .retry_token(self.opc_retry_token.as_deref())
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instancePools/{instancePoolId}/loadBalancerAttachments/{attachmentId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetInstancePoolLoadBalancerAttachmentRequest {
    /// Pool owning the attachment.
    pub instance_pool_id: InstancePoolId,
    /// Attachment to fetch.
    pub instance_pool_load_balancer_attachment_id: InstancePoolLoadBalancerAttachmentId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetInstancePoolLoadBalancerAttachmentRequest {
    /// Fetch `attachment_id` of `instance_pool_id`.
    #[must_use]
    pub fn new(
        instance_pool_id: InstancePoolId,
        attachment_id: InstancePoolLoadBalancerAttachmentId,
    ) -> Self {
        Self {
            instance_pool_id,
            instance_pool_load_balancer_attachment_id: attachment_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetInstancePoolLoadBalancerAttachmentRequest {
    type Response = InstancePoolLoadBalancerAttachmentResponse;
    const OPERATION: &'static str = "GetInstancePoolLoadBalancerAttachment";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::GET,
            [
                "instancePools",
                self.instance_pool_id.as_str(),
                "loadBalancerAttachments",
                self.instance_pool_load_balancer_attachment_id.as_str(),
            ],
        )
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `POST /instancePools/{instancePoolId}/actions/changeCompartment`
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeInstancePoolCompartmentRequest {
    /// Pool to move.
    pub instance_pool_id: InstancePoolId,
    /// Destination.
    pub details: ChangeInstancePoolCompartmentDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Only move when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ChangeInstancePoolCompartmentRequest {
    /// Move `instance_pool_id` into `compartment_id`.
    #[must_use]
    pub fn new(instance_pool_id: InstancePoolId, compartment_id: CompartmentId) -> Self {
        Self {
            instance_pool_id,
            details: ChangeInstancePoolCompartmentDetails { compartment_id },
            opc_retry_token: None,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ChangeInstancePoolCompartmentRequest {
    type Response = ChangeInstancePoolCompartmentResponse;
    const OPERATION: &'static str = "ChangeInstancePoolCompartment";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "instancePools",
                self.instance_pool_id.as_str(),
                "actions",
                "changeCompartment",
            ],
        )
        .retry_token(self.opc_retry_token.as_deref())
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `POST /instanceConfigurations`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateInstanceConfigurationRequest {
    /// Configuration to create.
    pub details: CreateInstanceConfigurationDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateInstanceConfigurationRequest {
    /// Create a configuration from `details`.
    #[must_use]
    pub fn new(details: CreateInstanceConfigurationDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateInstanceConfigurationRequest {
    type Response = InstanceConfigurationResponse;
    const OPERATION: &'static str = "CreateInstanceConfiguration";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["instanceConfigurations"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instanceConfigurations/{instanceConfigurationId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetInstanceConfigurationRequest {
    /// Configuration to fetch.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetInstanceConfigurationRequest {
    /// Fetch `instance_configuration_id`.
    #[must_use]
    pub fn new(instance_configuration_id: InstanceConfigurationId) -> Self {
        Self {
            instance_configuration_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetInstanceConfigurationRequest {
    type Response = InstanceConfigurationResponse;
    const OPERATION: &'static str = "GetInstanceConfiguration";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::GET,
            [
                "instanceConfigurations",
                self.instance_configuration_id.as_str(),
            ],
        )
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instanceConfigurations`
#[derive(Debug, Clone, PartialEq)]
pub struct ListInstanceConfigurationsRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
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

impl ListInstanceConfigurationsRequest {
    /// List configurations in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListInstanceConfigurationsRequest {
    type Response = ListInstanceConfigurationsResponse;
    const OPERATION: &'static str = "ListInstanceConfigurations";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        Ok(HttpRequest::new(Method::GET, ["instanceConfigurations"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListInstanceConfigurationsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `PUT /instanceConfigurations/{instanceConfigurationId}`
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateInstanceConfigurationRequest {
    /// Configuration to update.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Fields to change.
    pub details: UpdateInstanceConfigurationDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Only update when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl UpdateInstanceConfigurationRequest {
    /// Apply `details` to `instance_configuration_id`.
    #[must_use]
    pub fn new(
        instance_configuration_id: InstanceConfigurationId,
        details: UpdateInstanceConfigurationDetails,
    ) -> Self {
        Self {
            instance_configuration_id,
            details,
            opc_retry_token: None,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for UpdateInstanceConfigurationRequest {
    type Response = InstanceConfigurationResponse;
    const OPERATION: &'static str = "UpdateInstanceConfiguration";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::PUT,
            [
                "instanceConfigurations",
                self.instance_configuration_id.as_str(),
            ],
        )
        .retry_token(self.opc_retry_token.as_deref())
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /instanceConfigurations/{instanceConfigurationId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteInstanceConfigurationRequest {
    /// Configuration to delete.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteInstanceConfigurationRequest {
    /// Delete `instance_configuration_id`.
    #[must_use]
    pub fn new(instance_configuration_id: InstanceConfigurationId) -> Self {
        Self {
            instance_configuration_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteInstanceConfigurationRequest {
    type Response = DeleteInstanceConfigurationResponse;
    const OPERATION: &'static str = "DeleteInstanceConfiguration";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::DELETE,
            [
                "instanceConfigurations",
                self.instance_configuration_id.as_str(),
            ],
        )
        .header_opt(IF_MATCH, self.if_match.as_deref())
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `POST /instanceConfigurations/{instanceConfigurationId}/actions/launch`
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchInstanceConfigurationRequest {
    /// Configuration to launch from.
    pub instance_configuration_id: InstanceConfigurationId,
    /// Values for the fields the stored configuration leaves out.
    pub details: InstanceConfigurationInstanceDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl LaunchInstanceConfigurationRequest {
    /// Launch an instance from `instance_configuration_id`.
    #[must_use]
    pub fn new(
        instance_configuration_id: InstanceConfigurationId,
        details: InstanceConfigurationInstanceDetails,
    ) -> Self {
        Self {
            instance_configuration_id,
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for LaunchInstanceConfigurationRequest {
    type Response = LaunchInstanceConfigurationResponse;
    const OPERATION: &'static str = "LaunchInstanceConfiguration";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(
            Method::POST,
            [
                "instanceConfigurations",
                self.instance_configuration_id.as_str(),
                "actions",
                "launch",
            ],
        )
        .retry_token(self.opc_retry_token.as_deref())
        .with_metadata(&self.metadata)
        .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}
