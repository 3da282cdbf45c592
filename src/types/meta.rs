use serde::{Deserialize, Serialize};

use super::de;

/// API-level outcome summary attached to every response, independent of the
/// transport-level HTTP status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Meta {
    pub status: i64,
    pub msg: String,
    #[serde(default)]
    pub response_id: String,
}

/// Paging info accompanying list responses. Counters are server-trusted and
/// default to zero when omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Pagination {
    #[serde(default)]
    pub total_count: i64,
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

/// Envelope for list endpoints. A malformed item inside `data` is dropped and
/// the rest of the page survives; a missing `data` or `meta` fails the whole
/// decode.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(bound(deserialize = "T: serde::de::DeserializeOwned"))]
pub struct ListResponse<T> {
    #[serde(deserialize_with = "de::lenient_items")]
    pub data: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    pub meta: Meta,
}

/// Envelope for single-item endpoints.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SingleResponse<T> {
    pub data: T,
    pub meta: Meta,
}

/// Uniform access to the envelope [`Meta`], used by the request engine to
/// surface API-level errors regardless of the payload type.
pub trait ApiResponse {
    fn meta(&self) -> &Meta;
}

impl<T> ApiResponse for ListResponse<T> {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}

impl<T> ApiResponse for SingleResponse<T> {
    fn meta(&self) -> &Meta {
        &self.meta
    }
}
