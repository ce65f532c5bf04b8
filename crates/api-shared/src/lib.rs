//! # API Shared
//!
//! Shared wire definitions for the form generator API.
//!
//! Contains:
//! - Request/response bodies (`messages` module) with OpenAPI schemas
//! - Shared services like `HealthService`
//!
//! Used by `api-rest` on the server side and by `formgen-render`'s HTTP client.

pub mod health;
pub mod messages;

pub use health::HealthService;
pub use messages::*;
