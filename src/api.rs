//! Typed entry points for the OpenFIGI v3 operations.
//!
//! Each operation lives in its own submodule and follows the same shape: record an attempt,
//! open a span, run the executor pipeline (permit, dispatch, decode), then record the
//! outcome. Every call takes the caller's cancellation token first; both suspension points
//! (permit wait, HTTP round trip) honor it and unblock promptly.

mod filter;
mod mapping;
mod search;

/// Resource path of the filter endpoint.
pub const FILTER_RESOURCE_PATH: &str = "/v3/filter";
/// Resource path of the search endpoint.
pub const SEARCH_RESOURCE_PATH: &str = "/v3/search";
/// Resource path of the mapping endpoint.
pub const MAPPING_RESOURCE_PATH: &str = "/v3/mapping";
/// Resource path prefix of the mapping-values enumeration endpoint.
pub const MAPPING_VALUES_RESOURCE_PATH: &str = "/v3/mapping/values";
