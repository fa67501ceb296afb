//! Zoo Server Library
//!
//! REST API over a MongoDB database of categories, species and animals.
//!
//! # Overview
//!
//! - **API Endpoints**: list, get, create, update and delete for each resource
//! - **Storage**: MongoDB collections behind the [`storage::DocumentCollection`] trait,
//!   each operation bounded by a configured deadline
//! - **Configuration**: environment-based configuration management
//! - **Middleware**: request logging and trailing-slash normalisation
//!
//! # Architecture
//!
//! Resources are declared once in [`features`] and served by one generic
//! handler set:
//!
//! - **Commands** (write operations): create, update, delete
//! - **Queries** (read operations): get, list
//!
//! Every request decodes its body, validates ids and references, issues a
//! single collection operation and encodes the response. Errors are
//! returned as plain text.
//!
//! # Example
//!
//! ```no_run
//! use zoo_server::{api::{self, AppState}, config::Config, storage};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     let collections = storage::connect(&config.database).await?;
//!     let app = api::app(AppState::new(collections, config.api.body_decoding));
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await?;
//!     axum::serve(listener, axum::ServiceExt::<axum::extract::Request>::into_make_service(app))
//!         .await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod features;
pub mod middleware;
pub mod storage;

// Re-export commonly used types
pub use error::{AppError, AppResult};
