pub mod api;
pub mod application;
pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod repository;
pub mod search;
pub mod services;
pub mod views;

pub use api::{HttpPropertyApi, PropertyApi};
pub use application::PropertyApplication;
pub use errors::{ApplicationError, TransportError};
pub use models::{FilterCriteria, FormattedProperty, Property, PropertyId, PropertyQuery};
pub use repository::{ApiPropertyRepository, PropertyReader};
pub use search::SearchView;
