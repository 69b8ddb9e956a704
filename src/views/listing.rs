use crate::application::PropertyApplication;
use crate::models::{FilterCriteria, FormattedProperty};
use crate::repository::PropertyReader;
use crate::search::LOAD_FAILED_MESSAGE;
use crate::views::ViewState;
use tracing::error;

/// Properties shown on the landing page
pub const LISTING_PAGE_SIZE: u32 = 10;

pub const EMPTY_LISTING_MESSAGE: &str = "No properties found matching your criteria.";

/// Landing-page listing: first page of properties, loaded once
#[derive(Debug, Clone, PartialEq)]
pub struct ListingView {
    pub state: ViewState<Vec<FormattedProperty>>,
}

impl ListingView {
    pub async fn load<R: PropertyReader>(app: &PropertyApplication<R>) -> Self {
        let filters = FilterCriteria::default()
            .with_page(1)
            .with_page_size(LISTING_PAGE_SIZE);

        let state = match app.load_properties(&filters).await {
            Ok(properties) => ViewState::Ready(
                properties
                    .into_iter()
                    .take(LISTING_PAGE_SIZE as usize)
                    .map(|property| app.format_property_data(property))
                    .collect(),
            ),
            Err(e) => {
                error!("Error fetching properties: {}", e);
                ViewState::Failed(LOAD_FAILED_MESSAGE.to_string())
            }
        };

        Self { state }
    }

    pub fn properties(&self) -> &[FormattedProperty] {
        self.state.ready().map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        matches!(&self.state, ViewState::Ready(properties) if properties.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::models::Property;
    use crate::repository::MockPropertyReader;

    #[tokio::test]
    async fn loads_first_page_formatted() {
        let mut repo = MockPropertyReader::new();
        repo.expect_get_all()
            .withf(|query| query.page == Some(1) && query.page_size == Some(10))
            .returning(|_| Ok(vec![Property::new(1, "Beautiful Villa", 250000.0)]));

        let app = PropertyApplication::from_repository(repo);
        let view = ListingView::load(&app).await;

        assert_eq!(view.properties().len(), 1);
        assert_eq!(view.properties()[0].formatted_price, "$250,000");
        assert!(!view.is_empty());
    }

    #[tokio::test]
    async fn caps_oversized_responses_at_one_page() {
        let mut repo = MockPropertyReader::new();
        repo.expect_get_all().returning(|_| {
            Ok((1..=15)
                .map(|id| Property::new(id, format!("Listing {}", id), 100_000.0))
                .collect())
        });

        let app = PropertyApplication::from_repository(repo);
        let view = ListingView::load(&app).await;

        assert_eq!(view.properties().len(), 10);
        assert_eq!(view.properties()[9].property.name, "Listing 10");
    }

    #[tokio::test]
    async fn failure_shows_banner_and_no_cards() {
        let mut repo = MockPropertyReader::new();
        repo.expect_get_all().returning(|_| {
            Err(TransportError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let app = PropertyApplication::from_repository(repo);
        let view = ListingView::load(&app).await;

        assert_eq!(view.state.error(), Some("Failed to load properties"));
        assert!(view.properties().is_empty());
        assert!(!view.is_empty());
    }
}
