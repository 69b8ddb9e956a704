//! Façade used by the views.
//!
//! This is the one place where transport failures become user-facing
//! messages, and where raw filter input is sanitized into a query.

use crate::errors::{ApplicationError, TransportError};
use crate::models::filters::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::models::{FilterCriteria, FormattedProperty, Property, PropertyId, PropertyQuery};
use crate::repository::PropertyReader;
use crate::services::{format_address, format_price, PropertyService};
use tracing::{error, warn};

pub struct PropertyApplication<R> {
    service: PropertyService<R>,
}

impl<R: PropertyReader> PropertyApplication<R> {
    pub fn new(service: PropertyService<R>) -> Self {
        Self { service }
    }

    pub fn from_repository(repository: R) -> Self {
        Self::new(PropertyService::new(repository))
    }

    pub async fn load_properties(
        &self,
        filters: &FilterCriteria,
    ) -> Result<Vec<Property>, ApplicationError> {
        let query = validate_filters(filters);
        self.service.get_properties(&query).await.map_err(|e| {
            error!("Application error loading properties: {}", e);
            ApplicationError::LoadProperties
        })
    }

    pub async fn load_property_details(&self, id: &PropertyId) -> Result<Property, ApplicationError> {
        self.service.get_property_by_id(id).await.map_err(|e| match e {
            TransportError::NotFound => {
                warn!("Property {} not found", id);
                ApplicationError::PropertyNotFound
            }
            e => {
                error!("Application error loading property details: {}", e);
                ApplicationError::LoadPropertyDetails
            }
        })
    }

    /// Never fails: an empty list keeps the page usable when the API is down
    pub async fn load_top_properties(&self, limit: u32) -> Vec<Property> {
        match self.service.get_top_properties(limit).await {
            Ok(properties) => properties,
            Err(e) => {
                error!("Application error loading top properties: {}", e);
                Vec::new()
            }
        }
    }

    pub fn format_property_data(&self, property: Property) -> FormattedProperty {
        format_property_data(property)
    }
}

pub fn format_property_data(property: Property) -> FormattedProperty {
    FormattedProperty {
        formatted_price: format_price(property.price),
        formatted_address: format_address(&property.address),
        property,
    }
}

/// Sanitize raw filters into a query. Never rejects.
///
/// * `page` falls back to 1 when missing, non-numeric or below 1
/// * `page_size` falls back to 10 when missing, non-numeric or outside 1..=100
/// * a non-numeric `min_price`/`max_price` is dropped
pub fn validate_filters(filters: &FilterCriteria) -> PropertyQuery {
    let page = parse_integer(&filters.page)
        .filter(|page| *page >= 1)
        .and_then(|page| u32::try_from(page).ok())
        .unwrap_or(DEFAULT_PAGE);

    let page_size = parse_integer(&filters.page_size)
        .filter(|size| (1..=i64::from(MAX_PAGE_SIZE)).contains(size))
        .and_then(|size| u32::try_from(size).ok())
        .unwrap_or(DEFAULT_PAGE_SIZE);

    PropertyQuery {
        name: non_empty(&filters.name),
        address: non_empty(&filters.address),
        min_price: parse_price(&filters.min_price),
        max_price: parse_price(&filters.max_price),
        page: Some(page),
        page_size: Some(page_size),
        sort_by: filters.sort_by,
        sort_order: filters.sort_order,
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn parse_price(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}
