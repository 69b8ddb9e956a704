pub mod client;
pub mod traits;
pub mod types;

pub use client::HttpPropertyApi;
pub use traits::PropertyApi;
pub use types::{ListResponse, PropertyPage};

#[cfg(test)]
pub use traits::MockPropertyApi;
