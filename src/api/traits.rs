use crate::api::types::ListResponse;
use crate::errors::TransportResult;
use crate::models::{Property, PropertyId, PropertyQuery};
use async_trait::async_trait;

/// Transport seam for the listing API.
/// The HTTP client implements it in production, tests substitute their own.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyApi: Send + Sync {
    /// `GET /properties` with the set fields of `query` in the query string
    async fn list_properties(&self, query: &PropertyQuery) -> TransportResult<ListResponse>;

    /// `GET /properties/{id}`
    async fn get_property(&self, id: &PropertyId) -> TransportResult<Property>;
}
