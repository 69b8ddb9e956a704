use crate::api::PropertyApi;
use crate::errors::TransportResult;
use crate::models::{Property, PropertyId, PropertyQuery, SortField, SortOrder};
use async_trait::async_trait;
use tracing::error;

pub const DEFAULT_TOP_LIMIT: u32 = 5;

pub type RepositoryResult<T> = TransportResult<T>;

/// Read access to property records, with the API's response shapes already
/// flattened into plain lists.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PropertyReader: Send + Sync {
    async fn get_all(&self, query: &PropertyQuery) -> RepositoryResult<Vec<Property>>;
    async fn get_by_id(&self, id: &PropertyId) -> RepositoryResult<Property>;
    /// Most expensive properties first, at most `limit` of them
    async fn get_top_properties(&self, limit: u32) -> RepositoryResult<Vec<Property>>;
}

/// Repository backed by a [`PropertyApi`]
pub struct ApiPropertyRepository<A> {
    api: A,
}

impl<A: PropertyApi> ApiPropertyRepository<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }
}

#[async_trait]
impl<A: PropertyApi> PropertyReader for ApiPropertyRepository<A> {
    async fn get_all(&self, query: &PropertyQuery) -> RepositoryResult<Vec<Property>> {
        let response = self.api.list_properties(query).await.inspect_err(|e| {
            error!("Repository error fetching properties: {}", e);
        })?;
        Ok(response.into_properties())
    }

    async fn get_by_id(&self, id: &PropertyId) -> RepositoryResult<Property> {
        self.api.get_property(id).await.inspect_err(|e| {
            error!("Repository error fetching property {}: {}", id, e);
        })
    }

    async fn get_top_properties(&self, limit: u32) -> RepositoryResult<Vec<Property>> {
        let query = PropertyQuery {
            page_size: Some(limit),
            sort_by: Some(SortField::Price),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };

        // The server may ignore pageSize, so bound the result here as well.
        let mut properties = self.get_all(&query).await?;
        properties.truncate(limit as usize);
        Ok(properties)
    }
}
