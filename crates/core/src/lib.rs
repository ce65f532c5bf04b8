//! # Formgen Core
//!
//! Core logic for turning free-text form descriptions into structured forms and annotating
//! submissions:
//! - [`templates`]: canonical forms for recognised domains
//! - [`heuristic`]: rule-based fallback generation
//! - [`backend`]: the generative-text capability and its OpenAI-compatible client
//! - [`extractor`]: template → backend → heuristic orchestration
//! - [`mapper`]: submission values → meta-tag annotated submission
//!
//! **No API concerns**: HTTP routing, CORS and process bootstrap belong in `api-rest`,
//! `api-shared` or the binaries.

pub mod backend;
pub mod config;
pub mod constants;
pub mod error;
pub mod extractor;
pub mod heuristic;
pub mod mapper;
pub mod templates;

pub use backend::{GenerativeBackend, OpenAiBackend};
pub use config::{backend_settings_from_env_values, BackendSettings, CoreConfig};
pub use constants::*;
pub use error::{BackendError, CoreError, CoreResult, ExtractError};
pub use extractor::{SpecificationExtractor, Source};
pub use mapper::{map_submission, map_submission_at};
