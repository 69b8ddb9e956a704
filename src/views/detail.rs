use crate::application::PropertyApplication;
use crate::errors::ApplicationError;
use crate::models::{FormattedProperty, PropertyId};
use crate::repository::PropertyReader;
use crate::views::{ViewState, LISTING_ROUTE};
use tracing::error;

pub const BACK_LINK_LABEL: &str = "Back to Properties";

/// Single property page
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: PropertyId,
    pub state: ViewState<FormattedProperty>,
}

impl DetailView {
    pub async fn load<R: PropertyReader>(app: &PropertyApplication<R>, id: PropertyId) -> Self {
        let state = match app.load_property_details(&id).await {
            Ok(property) => ViewState::Ready(app.format_property_data(property)),
            Err(e @ ApplicationError::PropertyNotFound) => ViewState::Failed(e.to_string()),
            Err(e) => {
                error!("Error fetching property {}: {}", id, e);
                ViewState::Failed(e.to_string())
            }
        };

        Self { id, state }
    }

    pub fn property(&self) -> Option<&FormattedProperty> {
        self.state.ready()
    }

    /// Where the "back" link leads, offered whenever the property could not be shown
    pub fn return_to_listing(&self) -> (&'static str, &'static str) {
        (BACK_LINK_LABEL, LISTING_ROUTE)
    }
}
