//! Building blocks shared by every resource

pub mod body;
pub mod geo;
pub mod render;
pub mod resource;
pub mod validation;

pub use geo::{GeoPoint, GeoPointBody};
pub use resource::Resource;
pub use validation::{ValidationError, ValidationPolicy};
