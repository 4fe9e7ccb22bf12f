//! Request and response wrappers for Compute operations.

use oci_core::enums::{SortBy, SortOrder};
use oci_core::ocid::{CompartmentId, ImageId, InstanceId, VnicId};
use oci_core::pagination::{ListResponse, PagedRequest};
use oci_core::query::QueryParams;
use oci_core::request::{
    EmptyResponse, HttpRequest, OciRequest, RequestMetadata, ResourceResponse, IF_MATCH,
};
use oci_core::{Method, Result};

use crate::models::{
    CreateImageDetails, Image, ImageLifecycleState, Instance, InstanceAction,
    InstanceCredentials, InstanceLifecycleState, LaunchInstanceDetails, VnicAttachment,
};

/// Response of `LaunchInstance`, `GetInstance` and `InstanceAction`.
pub type InstanceResponse = ResourceResponse<Instance>;
/// Response of `CreateImage` and `GetImage`.
///
/// `CreateImage` also reports the work request id tracking the capture.
pub type ImageResponse = ResourceResponse<Image>;
/// Response of `GetWindowsInstanceInitialCredentials`.
pub type InstanceCredentialsResponse = ResourceResponse<InstanceCredentials>;
/// Response of `TerminateInstance`.
pub type TerminateInstanceResponse = EmptyResponse;
/// Response of `DeleteImage`.
pub type DeleteImageResponse = EmptyResponse;
/// Response of `ListInstances`.
pub type ListInstancesResponse = ListResponse<Instance>;
/// Response of `ListImages`.
pub type ListImagesResponse = ListResponse<Image>;
/// Response of `ListVnicAttachments`.
pub type ListVnicAttachmentsResponse = ListResponse<VnicAttachment>;

/// `POST /instances`
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchInstanceRequest {
    /// Instance to launch.
    pub details: LaunchInstanceDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl LaunchInstanceRequest {
    /// Launch an instance from `details`.
    #[must_use]
    pub fn new(details: LaunchInstanceDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for LaunchInstanceRequest {
    type Response = InstanceResponse;
    const OPERATION: &'static str = "LaunchInstance";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["instances"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instances/{instanceId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetInstanceRequest {
    /// Instance to fetch.
    pub instance_id: InstanceId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetInstanceRequest {
    /// Fetch `instance_id`.
    #[must_use]
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetInstanceRequest {
    type Response = InstanceResponse;
    const OPERATION: &'static str = "GetInstance";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::GET, ["instances", self.instance_id.as_str()])
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instances`
#[derive(Debug, Clone, PartialEq)]
pub struct ListInstancesRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to one availability domain.
    pub availability_domain: Option<String>,
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
    pub lifecycle_state: Option<InstanceLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListInstancesRequest {
    /// List instances in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            availability_domain: None,
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

impl OciRequest for ListInstancesRequest {
    type Response = ListInstancesResponse;
    const OPERATION: &'static str = "ListInstances";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("availabilityDomain", self.availability_domain.as_deref());
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["instances"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListInstancesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `POST /instances/{instanceId}?action={action}`
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceActionRequest {
    /// Instance to act on.
    pub instance_id: InstanceId,
    /// Power action.
    pub action: InstanceAction,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Only act when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl InstanceActionRequest {
    /// Perform `action` on `instance_id`.
    #[must_use]
    pub fn new(instance_id: InstanceId, action: InstanceAction) -> Self {
        Self {
            instance_id,
            action,
            opc_retry_token: None,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for InstanceActionRequest {
    type Response = InstanceResponse;
    const OPERATION: &'static str = "InstanceAction";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("action", &self.action);
        Ok(
            HttpRequest::new(Method::POST, ["instances", self.instance_id.as_str()])
                .with_query(query)
                .retry_token(self.opc_retry_token.as_deref())
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `DELETE /instances/{instanceId}`
#[derive(Debug, Clone, PartialEq)]
pub struct TerminateInstanceRequest {
    /// Instance to terminate.
    pub instance_id: InstanceId,
    /// Keep the boot volume after termination.
    pub preserve_boot_volume: Option<bool>,
    /// Only terminate when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl TerminateInstanceRequest {
    /// Terminate `instance_id`, deleting its boot volume.
    #[must_use]
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            preserve_boot_volume: None,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for TerminateInstanceRequest {
    type Response = TerminateInstanceResponse;
    const OPERATION: &'static str = "TerminateInstance";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push_opt("preserveBootVolume", self.preserve_boot_volume);
        Ok(
            HttpRequest::new(Method::DELETE, ["instances", self.instance_id.as_str()])
                .with_query(query)
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /instances/{instanceId}/initialCredentials`
#[derive(Debug, Clone, PartialEq)]
pub struct GetWindowsInstanceInitialCredentialsRequest {
    /// Windows instance.
    pub instance_id: InstanceId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetWindowsInstanceInitialCredentialsRequest {
    /// Fetch the initial credentials of `instance_id`.
    #[must_use]
    pub fn new(instance_id: InstanceId) -> Self {
        Self {
            instance_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetWindowsInstanceInitialCredentialsRequest {
    type Response = InstanceCredentialsResponse;
    const OPERATION: &'static str = "GetWindowsInstanceInitialCredentials";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(
            Method::GET,
            ["instances", self.instance_id.as_str(), "initialCredentials"],
        )
        .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `POST /images`
#[derive(Debug, Clone, PartialEq)]
pub struct CreateImageRequest {
    /// Image to create.
    pub details: CreateImageDetails,
    /// Idempotency token; generated when absent.
    pub opc_retry_token: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl CreateImageRequest {
    /// Create an image from `details`.
    #[must_use]
    pub fn new(details: CreateImageDetails) -> Self {
        Self {
            details,
            opc_retry_token: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for CreateImageRequest {
    type Response = ImageResponse;
    const OPERATION: &'static str = "CreateImage";

    fn to_http_request(&self) -> Result<HttpRequest> {
        HttpRequest::new(Method::POST, ["images"])
            .retry_token(self.opc_retry_token.as_deref())
            .with_metadata(&self.metadata)
            .json_body(&self.details)
    }

    oci_core::impl_request_metadata!();
}

/// `GET /images/{imageId}`
#[derive(Debug, Clone, PartialEq)]
pub struct GetImageRequest {
    /// Image to fetch.
    pub image_id: ImageId,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl GetImageRequest {
    /// Fetch `image_id`.
    #[must_use]
    pub fn new(image_id: ImageId) -> Self {
        Self {
            image_id,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for GetImageRequest {
    type Response = ImageResponse;
    const OPERATION: &'static str = "GetImage";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(HttpRequest::new(Method::GET, ["images", self.image_id.as_str()])
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

/// `GET /images`
#[derive(Debug, Clone, PartialEq)]
pub struct ListImagesRequest {
    /// Compartment to list; platform images are listed in every compartment.
    pub compartment_id: CompartmentId,
    /// Exact display name.
    pub display_name: Option<String>,
    /// Operating system, e.g. `Oracle Linux`.
    pub operating_system: Option<String>,
    /// Operating system version, e.g. `8`.
    pub operating_system_version: Option<String>,
    /// Only images compatible with this shape.
    pub shape: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Sort field.
    pub sort_by: Option<SortBy>,
    /// Sort direction.
    pub sort_order: Option<SortOrder>,
    /// Restrict to one lifecycle state.
    pub lifecycle_state: Option<ImageLifecycleState>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListImagesRequest {
    /// List images visible in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            display_name: None,
            operating_system: None,
            operating_system_version: None,
            shape: None,
            limit: None,
            page: None,
            sort_by: None,
            sort_order: None,
            lifecycle_state: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for ListImagesRequest {
    type Response = ListImagesResponse;
    const OPERATION: &'static str = "ListImages";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("displayName", self.display_name.as_deref());
        query.push_opt("operatingSystem", self.operating_system.as_deref());
        query.push_opt(
            "operatingSystemVersion",
            self.operating_system_version.as_deref(),
        );
        query.push_opt("shape", self.shape.as_deref());
        query.push_page(self.limit, self.page.as_deref());
        query.push_sort(self.sort_by.as_ref(), self.sort_order.as_ref());
        query.push_opt("lifecycleState", self.lifecycle_state.as_ref());
        Ok(HttpRequest::new(Method::GET, ["images"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListImagesRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

/// `DELETE /images/{imageId}`
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteImageRequest {
    /// Image to delete.
    pub image_id: ImageId,
    /// Only delete when the current etag matches.
    pub if_match: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl DeleteImageRequest {
    /// Delete `image_id`.
    #[must_use]
    pub fn new(image_id: ImageId) -> Self {
        Self {
            image_id,
            if_match: None,
            metadata: RequestMetadata::new(),
        }
    }
}

impl OciRequest for DeleteImageRequest {
    type Response = DeleteImageResponse;
    const OPERATION: &'static str = "DeleteImage";

    fn to_http_request(&self) -> Result<HttpRequest> {
        Ok(
            HttpRequest::new(Method::DELETE, ["images", self.image_id.as_str()])
                .header_opt(IF_MATCH, self.if_match.as_deref())
                .with_metadata(&self.metadata),
        )
    }

    oci_core::impl_request_metadata!();
}

/// `GET /vnicAttachments`
#[derive(Debug, Clone, PartialEq)]
pub struct ListVnicAttachmentsRequest {
    /// Compartment to list.
    pub compartment_id: CompartmentId,
    /// Restrict to one availability domain.
    pub availability_domain: Option<String>,
    /// Restrict to one instance.
    pub instance_id: Option<InstanceId>,
    /// Restrict to one VNIC.
    pub vnic_id: Option<VnicId>,
    /// Page size.
    pub limit: Option<u32>,
    /// Page cursor.
    pub page: Option<String>,
    /// Per-call metadata.
    pub metadata: RequestMetadata,
}

impl ListVnicAttachmentsRequest {
    /// List VNIC attachments in `compartment_id`.
    #[must_use]
    pub fn new(compartment_id: CompartmentId) -> Self {
        Self {
            compartment_id,
            availability_domain: None,
            instance_id: None,
            vnic_id: None,
            limit: None,
            page: None,
            metadata: RequestMetadata::new(),
        }
    }

    /// Restrict the listing to attachments of `instance_id`.
    #[must_use]
    pub fn for_instance(mut self, instance_id: InstanceId) -> Self {
        self.instance_id = Some(instance_id);
        self
    }
}

impl OciRequest for ListVnicAttachmentsRequest {
    type Response = ListVnicAttachmentsResponse;
    const OPERATION: &'static str = "ListVnicAttachments";

    fn to_http_request(&self) -> Result<HttpRequest> {
        let mut query = QueryParams::new();
        query.push("compartmentId", &self.compartment_id);
        query.push_opt("availabilityDomain", self.availability_domain.as_deref());
        query.push_opt("instanceId", self.instance_id.as_ref());
        query.push_opt("vnicId", self.vnic_id.as_ref());
        query.push_page(self.limit, self.page.as_deref());
        Ok(HttpRequest::new(Method::GET, ["vnicAttachments"])
            .with_query(query)
            .with_metadata(&self.metadata))
    }

    oci_core::impl_request_metadata!();
}

impl PagedRequest for ListVnicAttachmentsRequest {
    fn set_page(&mut self, page: Option<String>) {
        self.page = page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InstanceSourceDetails;
    use oci_core::request::OPC_RETRY_TOKEN;

    #[test]
    fn test_launch_instance_body() {
        let mut details = LaunchInstanceDetails::new(
            "Uocm:PHX-AD-1",
            CompartmentId::new("ocid1.compartment.oc1..aaa"),
            "VM.Standard.E4.Flex",
        );
        details.source_details = Some(InstanceSourceDetails::from_image(ImageId::new(
            "ocid1.image.oc1.phx.a",
        )));

        let http = LaunchInstanceRequest::new(details).to_http_request().unwrap();
        assert_eq!(http.method, Method::POST);
        assert_eq!(http.path(), "/instances");
        assert!(http.header_value(OPC_RETRY_TOKEN).is_some());
        assert_eq!(
            http.body,
            Some(serde_json::json!({
                "availabilityDomain": "Uocm:PHX-AD-1",
                "compartmentId": "ocid1.compartment.oc1..aaa",
                "shape": "VM.Standard.E4.Flex",
                "sourceDetails": {"sourceType": "image", "imageId": "ocid1.image.oc1.phx.a"}
            }))
        );
    }

    #[test]
    fn test_instance_action_query() {
        let http = InstanceActionRequest::new(
            InstanceId::new("ocid1.instance.oc1.phx.a"),
            InstanceAction::Softstop,
        )
        .to_http_request()
        .unwrap();
        assert_eq!(http.path(), "/instances/ocid1.instance.oc1.phx.a");
        assert_eq!(http.query, vec![("action", "SOFTSTOP".to_string())]);
        assert!(http.body.is_none());
    }

    #[test]
    fn test_terminate_instance_query() {
        let mut request = TerminateInstanceRequest::new(InstanceId::new("ocid1.instance.oc1.phx.a"));
        assert!(request.to_http_request().unwrap().query.is_empty());

        request.preserve_boot_volume = Some(false);
        let http = request.to_http_request().unwrap();
        assert_eq!(http.method, Method::DELETE);
        assert_eq!(http.query, vec![("preserveBootVolume", "false".to_string())]);
    }

    #[test]
    fn test_list_images_filters() {
        let mut request = ListImagesRequest::new(CompartmentId::new("ocid1.compartment.oc1..aaa"));
        request.operating_system = Some("Oracle Linux".to_string());
        request.operating_system_version = Some("8".to_string());
        request.lifecycle_state = Some(ImageLifecycleState::Available);
        request.sort_by = Some(SortBy::TimeCreated);
        request.sort_order = Some(SortOrder::Desc);

        let http = request.to_http_request().unwrap();
        assert_eq!(
            http.query,
            vec![
                ("compartmentId", "ocid1.compartment.oc1..aaa".to_string()),
                ("operatingSystem", "Oracle Linux".to_string()),
                ("operatingSystemVersion", "8".to_string()),
                ("sortBy", "TIMECREATED".to_string()),
                ("sortOrder", "DESC".to_string()),
                ("lifecycleState", "AVAILABLE".to_string()),
            ]
        );
    }

    #[test]
    fn test_initial_credentials_path() {
        let http = GetWindowsInstanceInitialCredentialsRequest::new(InstanceId::new(
            "ocid1.instance.oc1.phx.a",
        ))
        .to_http_request()
        .unwrap();
        assert_eq!(
            http.path(),
            "/instances/ocid1.instance.oc1.phx.a/initialCredentials"
        );
    }
}
