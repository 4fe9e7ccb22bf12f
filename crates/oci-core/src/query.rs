//! Query string builder for list and action operations.
//!
//! OCI list operations share the `limit`/`page` paging pair and the
//! `sortBy`/`sortOrder` pair; everything else is an optional filter that is
//! left out of the query string when absent. Pairs keep insertion order so
//! the wire form is deterministic.

use std::fmt::Display;

/// Query parameter name of the page size.
pub const LIMIT: &str = "limit";
/// Query parameter name of the page token.
pub const PAGE: &str = "page";
/// Query parameter name of the sort field.
pub const SORT_BY: &str = "sortBy";
/// Query parameter name of the sort direction.
pub const SORT_ORDER: &str = "sortOrder";

/// Ordered list of query parameter pairs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a mandatory parameter.
    pub fn push(&mut self, key: &'static str, value: impl Display) {
        self.pairs.push((key, value.to_string()));
    }

    /// Append a filter when it is set.
    pub fn push_opt<T: Display>(&mut self, key: &'static str, value: Option<T>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    /// Append the paging pair of a list operation.
    pub fn push_page(&mut self, limit: Option<u32>, page: Option<&str>) {
        self.push_opt(LIMIT, limit);
        self.push_opt(PAGE, page);
    }

    /// Append the sorting pair of a list operation.
    pub fn push_sort<B: Display, O: Display>(&mut self, sort_by: Option<B>, sort_order: Option<O>) {
        self.push_opt(SORT_BY, sort_by);
        self.push_opt(SORT_ORDER, sort_order);
    }

    /// Value of the first pair named `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, value)| value.as_str())
    }

    /// Whether nothing was appended.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The collected pairs in insertion order.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{SortBy, SortOrder};

    #[test]
    fn absent_filters_are_skipped() {
        let mut params = QueryParams::new();
        params.push_opt("displayName", Option::<String>::None);
        params.push_page(None, None);
        params.push_sort(Option::<SortBy>::None, Option::<SortOrder>::None);
        assert!(params.is_empty());
    }

    #[test]
    fn paging_and_sorting_pairs() {
        let mut params = QueryParams::new();
        params.push("compartmentId", "ocid1.compartment.oc1..aaa");
        params.push_page(Some(50), Some("AAAA=="));
        params.push_sort(Some(&SortBy::TimeCreated), Some(&SortOrder::Desc));

        assert_eq!(params.get(PAGE), Some("AAAA=="));
        assert_eq!(params.get("lifecycleState"), None);
        assert_eq!(
            params.into_pairs(),
            vec![
                ("compartmentId", "ocid1.compartment.oc1..aaa".to_string()),
                ("limit", "50".to_string()),
                ("page", "AAAA==".to_string()),
                ("sortBy", "TIMECREATED".to_string()),
                ("sortOrder", "DESC".to_string()),
            ]
        );
    }
}
