use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope for page-link pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    /// Items on the requested page.
    pub results: Vec<T>,
    /// Size of the whole collection, not of this page.
    pub count: u64,
    /// Absolute URL of the next page, if there is one.
    pub next: Option<String>,
    /// Absolute URL of the previous page, if there is one.
    pub previous: Option<String>,
}
