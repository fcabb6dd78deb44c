//! Common traits for TFE resources

use crate::hcp::PaginationMeta;
use serde::Deserialize;

/// Common trait for TFE resources that are looked up by name
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;

    /// Exact, case-sensitive name match
    fn has_name(&self, name: &str) -> bool {
        self.name() == name
    }
}

/// Trait for API responses that contain paginated data
///
/// Implement this trait for any list response to drive it through
/// `TfeClient::paginate()`.
pub trait PaginatedResponse<T> {
    /// Consume self and return the data items
    fn into_data(self) -> Vec<T>;
    /// Get reference to pagination metadata
    fn meta(&self) -> Option<&PaginationMeta>;

    /// Page to request next; `None` once the listing is exhausted
    ///
    /// The service reports the last page with `next-page` null or zero.
    fn next_page(&self) -> Option<u32> {
        self.meta()
            .and_then(|m| m.pagination.as_ref())
            .and_then(|p| p.next_page)
            .filter(|n| *n != 0)
    }
}

/// Generic API list response wrapper for paginated endpoints
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub meta: Option<PaginationMeta>,
}

impl<T> PaginatedResponse<T> for ApiListResponse<T> {
    fn into_data(self) -> Vec<T> {
        self.data
    }

    fn meta(&self) -> Option<&PaginationMeta> {
        self.meta.as_ref()
    }
}
