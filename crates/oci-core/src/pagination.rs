//! Pagination over `opc-next-page` cursors.
//!
//! List operations return at most `limit` items plus an `opc-next-page`
//! header; the next call passes that value back as the `page` query
//! parameter. See [`crate::client::ServiceClient::call_all_pages`].

use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::request::{OciRequest, OciResponse, ResponseParts};

/// A list request that accepts a page cursor.
pub trait PagedRequest: OciRequest + Clone {
    /// Set the page cursor for the next call.
    fn set_page(&mut self, page: Option<String>);
}

/// A list response that may carry a page cursor.
pub trait PagedResponse: OciResponse {
    /// Item type collected across pages.
    type Item: Send;

    /// Cursor for the next page, if any.
    fn next_page(&self) -> Option<&str>;

    /// Consume the response into its items.
    fn into_items(self) -> Vec<Self::Item>;
}

/// One page of a list operation whose body is a JSON array.
#[derive(Debug, Clone, PartialEq)]
pub struct ListResponse<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Cursor for the next page.
    pub opc_next_page: Option<String>,
    /// Service request id.
    pub opc_request_id: Option<String>,
}

impl<T> OciResponse for ListResponse<T>
where
    T: DeserializeOwned + Send,
{
    fn from_parts(parts: ResponseParts) -> Result<Self> {
        Ok(Self {
            opc_next_page: parts.opc_next_page(),
            opc_request_id: parts.opc_request_id(),
            items: parts.json()?,
        })
    }
}

impl<T> PagedResponse for ListResponse<T>
where
    T: DeserializeOwned + Send,
{
    type Item = T;

    fn next_page(&self) -> Option<&str> {
        self.opc_next_page.as_deref()
    }

    fn into_items(self) -> Vec<T> {
        self.items
    }
}
