//! DTOs exposed by the advocates API endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::advocate::Advocate;
use crate::pagination::PageInfo;

/// Query parameters accepted by `GET /api/advocates`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvocatesQuery {
    /// Optional free-form search string applied across all record fields.
    pub search: Option<String>,
    /// Optional page number, defaults to 1. Signed so that negative values
    /// reach the clamping logic instead of failing extraction with a 400.
    pub page: Option<i64>,
    /// Optional page size, defaults to 25 and is clamped into `[1, 100]`.
    pub page_size: Option<i64>,
}

/// Successful response body: one page of advocates plus pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvocatesResponse {
    pub data: Vec<Advocate>,
    pub pagination: PageInfo,
}

/// Failure response body. The message is fixed per error class; internal
/// detail stays in the server log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
