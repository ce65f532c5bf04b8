//! # Form Render
//!
//! Client side of the form generator: turns a [`FormSpecification`](formgen_types::FormSpecification)
//! into input controls, keeps the entered values, validates them, and drives the
//! generate → fill → review cycle against a [`FormApi`].
//!
//! - [`controls`]: field type to control mapping; unknown types render as text inputs
//! - [`session`]: values and per-field errors for one form
//! - [`workflow`]: view state machine with an error banner
//! - [`client`]: [`HttpFormApi`] for a running server, [`LocalFormApi`] for in-process use
//! - [`views`] and [`export`]: reviewing and saving a mapped submission

pub mod client;
pub mod controls;
pub mod error;
pub mod examples;
pub mod export;
pub mod session;
pub mod validation;
pub mod views;
pub mod workflow;

pub use client::{FormApi, HttpFormApi, LocalFormApi};
pub use controls::{Control, InputKind};
pub use error::{ClientError, ExportError, ValidationErrors};
pub use examples::EXAMPLE_PROMPTS;
pub use export::{to_json_document, write_json, DEFAULT_EXPORT_FILENAME};
pub use session::{FormSession, RenderedField};
pub use views::{render_tab, SubmissionTab};
pub use workflow::{SubmitOutcome, View, Workflow};
