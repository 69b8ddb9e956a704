use crate::models::{Property, PropertyId, PropertyQuery};
use crate::repository::{PropertyReader, RepositoryResult};
use tracing::error;

const PLACEHOLDER_IMAGE_BASE: &str = "https://picsum.photos/400/300";

/// Property lookups with display defaults filled in
pub struct PropertyService<R> {
    repository: R,
}

impl<R: PropertyReader> PropertyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_properties(&self, query: &PropertyQuery) -> RepositoryResult<Vec<Property>> {
        let properties = self.repository.get_all(query).await.inspect_err(|e| {
            error!("Service error fetching properties: {}", e);
        })?;
        Ok(properties.into_iter().map(with_display_image).collect())
    }

    pub async fn get_property_by_id(&self, id: &PropertyId) -> RepositoryResult<Property> {
        let property = self.repository.get_by_id(id).await.inspect_err(|e| {
            error!("Service error fetching property {}: {}", id, e);
        })?;
        Ok(with_display_image(property))
    }

    pub async fn get_top_properties(&self, limit: u32) -> RepositoryResult<Vec<Property>> {
        let properties = self
            .repository
            .get_top_properties(limit)
            .await
            .inspect_err(|e| {
                error!("Service error fetching top properties: {}", e);
            })?;
        Ok(properties.into_iter().map(with_display_image).collect())
    }
}

/// Placeholder image for a property without one. Stable for a given id.
pub fn generate_property_image(id: &PropertyId) -> String {
    format!("{}?random={}", PLACEHOLDER_IMAGE_BASE, id)
}

/// Fills in `image_url` when the server left it out or sent an empty string
pub fn with_display_image(mut property: Property) -> Property {
    if property.image_url.as_deref().map_or(true, str::is_empty) {
        property.image_url = Some(generate_property_image(&property.id));
    }
    property
}

/// US-dollar amount without cents, e.g. `$1,500,000`
pub fn format_price(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{}${}", sign, group_thousands(&digits))
}

pub fn format_address(address: &str) -> String {
    address.to_string()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
