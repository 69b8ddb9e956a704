pub mod filters;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use filters::{FilterCriteria, PropertyQuery, SortField, SortOrder};

/// Server-assigned property identifier.
///
/// The listing API hands out numeric ids, but nothing in the client depends on
/// that, so string ids are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyId {
    Number(i64),
    Text(String),
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyId::Number(id) => write!(f, "{}", id),
            PropertyId::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for PropertyId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(id) => PropertyId::Number(id),
            Err(_) => PropertyId::Text(s.to_string()),
        })
    }
}

impl From<i64> for PropertyId {
    fn from(id: i64) -> Self {
        PropertyId::Number(id)
    }
}

impl From<i32> for PropertyId {
    fn from(id: i32) -> Self {
        PropertyId::Number(i64::from(id))
    }
}

impl From<&str> for PropertyId {
    fn from(id: &str) -> Self {
        PropertyId::Text(id.to_string())
    }
}

/// Core property data model, as served by the listing API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: PropertyId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Fields the client does not model, kept so nothing the server sent is lost
    #[serde(flatten)]
    pub raw_data: serde_json::Map<String, serde_json::Value>,
}

impl Property {
    /// Minimal record, mostly useful for fixtures.
    pub fn new(id: impl Into<PropertyId>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            address: String::new(),
            price,
            description: None,
            bedrooms: None,
            bathrooms: None,
            image_url: None,
            raw_data: serde_json::Map::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_rooms(mut self, bedrooms: u32, bathrooms: u32) -> Self {
        self.bedrooms = Some(bedrooms);
        self.bathrooms = Some(bathrooms);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }
}

/// A property with its display strings precomputed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedProperty {
    #[serde(flatten)]
    pub property: Property,
    pub formatted_price: String,
    pub formatted_address: String,
}
