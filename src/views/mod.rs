//! Fetch-on-load views around the application façade.

pub mod contact;
pub mod detail;
pub mod featured;
pub mod listing;
pub mod render;

pub use contact::ContactForm;
pub use detail::DetailView;
pub use featured::FeaturedView;
pub use listing::ListingView;

/// Route of the listing page, target of every "back" link
pub const LISTING_ROUTE: &str = "/";

/// Outcome of a view's initial load
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Ready(T),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }
}
