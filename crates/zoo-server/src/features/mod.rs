//! Feature modules implementing the zoo API
//!
//! # Features
//!
//! - **categories**: `/categories`, `/category`, `/category/:id`
//! - **species**: `/species`, `/species/:id`
//! - **animals**: `/animals`, `/animal`, `/animal/:id`
//!
//! # Architecture
//!
//! Each resource module only declares its types and a
//! [`ValidationPolicy`](shared::ValidationPolicy). The HTTP handlers,
//! commands and queries live once in [`crud`] and are instantiated per
//! resource.

pub mod animals;
pub mod categories;
pub mod crud;
pub mod shared;
pub mod species;

use axum::Router;

use crate::{config::BodyDecoding, storage::Collections};
use animals::Animal;
use categories::Category;
use crud::{resource_routes, ResourceState};
use species::Species;

/// Creates the API router with every resource mounted on its own collection
pub fn router(collections: &Collections, decoding: BodyDecoding) -> Router<()> {
    Router::new()
        .merge(
            resource_routes::<Category>()
                .with_state(ResourceState::new(collections.categories.clone(), decoding)),
        )
        .merge(
            resource_routes::<Species>()
                .with_state(ResourceState::new(collections.species.clone(), decoding)),
        )
        .merge(
            resource_routes::<Animal>()
                .with_state(ResourceState::new(collections.animals.clone(), decoding)),
        )
}
