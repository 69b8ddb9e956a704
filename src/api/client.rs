use crate::api::traits::PropertyApi;
use crate::api::types::ListResponse;
use crate::config::ClientConfig;
use crate::errors::{TransportError, TransportResult};
use crate::models::{Property, PropertyId, PropertyQuery};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

/// reqwest-backed client for the listing API
pub struct HttpPropertyApi {
    client: Client,
    base_url: Url,
}

impl HttpPropertyApi {
    /// Create a client from explicit configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Base URL with `segments` appended, each escaped as a single path segment
    fn endpoint(&self, segments: &[&str]) -> TransportResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TransportError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&'static str, String)],
    ) -> TransportResult<T> {
        debug!("Fetching URL: {} {:?}", url, query);

        let response = self.client.get(url.clone()).query(query).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Listing API returned status {} for {}", status, url);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Downloaded {} bytes from {}", body.len(), url);
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl PropertyApi for HttpPropertyApi {
    async fn list_properties(&self, query: &PropertyQuery) -> TransportResult<ListResponse> {
        let url = self.endpoint(&["properties"])?;
        let pairs = query.to_query_pairs();

        let response: ListResponse = self.fetch(url, &pairs).await.inspect_err(|e| {
            warn!("Error fetching properties: {}", e);
        })?;

        info!(
            "Listing API returned {} properties (total count: {:?})",
            match &response {
                ListResponse::Bare(properties) => properties.len(),
                ListResponse::Envelope(page) => page.properties.as_ref().map_or(0, Vec::len),
            },
            response.total_count()
        );

        Ok(response)
    }

    async fn get_property(&self, id: &PropertyId) -> TransportResult<Property> {
        let id = id.to_string();
        let url = self.endpoint(&["properties", id.as_str()])?;

        // A missing property comes back either as a 404 or as a `null` body.
        let property: Option<Property> = match self.fetch(url, &[]).await {
            Ok(property) => property,
            Err(TransportError::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                None
            }
            Err(e) => {
                warn!("Error fetching property {}: {}", id, e);
                return Err(e);
            }
        };

        property.ok_or_else(|| {
            info!("Property {} not found", id);
            TransportError::NotFound
        })
    }
}
