//! Zoo Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared utilities for the zoo registry workspace.
//!
//! # Overview
//!
//! - **Logging**: tracing subscriber setup driven by environment variables
//! - **Identifiers**: ObjectId parsing and reference conversion
//!
//! # Example
//!
//! ```no_run
//! use zoo_common::ids::parse_object_id;
//! use zoo_common::logging::{init_logging, LogConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogConfig::from_env()?)?;
//!     let id = parse_object_id("65f1c0a2b3d4e5f601234567")?;
//!     tracing::info!(%id, "parsed identifier");
//!     Ok(())
//! }
//! ```

pub mod ids;
pub mod logging;

pub use ids::{IdError, IdResult};
