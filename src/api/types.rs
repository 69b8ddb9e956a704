use crate::models::Property;
use serde::{Deserialize, Serialize};

/// Body of `GET /properties`.
///
/// Depending on the deployment the API answers with a bare array or with a
/// paged envelope. Both are resolved here, once, by the repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListResponse {
    Bare(Vec<Property>),
    Envelope(PropertyPage),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyPage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<Property>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl ListResponse {
    /// Flat ordered list of properties; an envelope without `properties` is empty
    pub fn into_properties(self) -> Vec<Property> {
        match self {
            ListResponse::Bare(properties) => properties,
            ListResponse::Envelope(page) => page.properties.unwrap_or_default(),
        }
    }

    pub fn total_count(&self) -> Option<u64> {
        match self {
            ListResponse::Bare(properties) => Some(properties.len() as u64),
            ListResponse::Envelope(page) => page.total_count,
        }
    }
}
