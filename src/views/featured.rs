use crate::application::PropertyApplication;
use crate::models::FormattedProperty;
use crate::repository::{PropertyReader, DEFAULT_TOP_LIMIT};

/// Sidebar of the most expensive listings. Empty when the API is unavailable.
#[derive(Debug, Clone, PartialEq)]
pub struct FeaturedView {
    pub properties: Vec<FormattedProperty>,
}

impl FeaturedView {
    pub async fn load<R: PropertyReader>(app: &PropertyApplication<R>) -> Self {
        Self::load_with_limit(app, DEFAULT_TOP_LIMIT).await
    }

    pub async fn load_with_limit<R: PropertyReader>(app: &PropertyApplication<R>, limit: u32) -> Self {
        let properties = app
            .load_top_properties(limit)
            .await
            .into_iter()
            .map(|property| app.format_property_data(property))
            .collect();

        Self { properties }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::TransportError;
    use crate::models::Property;
    use crate::repository::MockPropertyReader;

    #[tokio::test]
    async fn loads_top_five_by_default() {
        let mut repo = MockPropertyReader::new();
        repo.expect_get_top_properties()
            .withf(|limit| *limit == 5)
            .returning(|_| Ok(vec![Property::new(3, "Penthouse", 4_200_000.0)]));

        let app = PropertyApplication::from_repository(repo);
        let view = FeaturedView::load(&app).await;
        assert_eq!(view.properties.len(), 1);
        assert_eq!(view.properties[0].formatted_price, "$4,200,000");
    }

    #[tokio::test]
    async fn api_failure_leaves_sidebar_empty() {
        let mut repo = MockPropertyReader::new();
        repo.expect_get_top_properties().returning(|_| {
            Err(TransportError::Status {
                status: 500,
                body: String::new(),
            })
        });

        let app = PropertyApplication::from_repository(repo);
        assert!(FeaturedView::load(&app).await.properties.is_empty());
    }
}
