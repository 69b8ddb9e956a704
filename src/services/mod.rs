pub mod property;

pub use property::{
    format_address, format_price, generate_property_image, with_display_image, PropertyService,
};
