//! # Formgen Types
//!
//! Shared data model for the form generator.
//!
//! Contains:
//! - [`Prompt`]: a validated, non-blank form description
//! - [`FormSpecification`] and [`FieldDefinition`]: the structured form schema
//! - [`FieldValue`] and [`SubmissionValues`]: raw values entered by a user
//! - [`MappedSubmission`]: submitted values annotated with meta-tags
//!
//! These types carry no behaviour beyond construction, normalisation and serialisation. The
//! extraction pipeline lives in `formgen-core`; rendering and validation live in `formgen-render`.

pub mod field;
pub mod prompt;
pub mod spec;
pub mod submission;

pub use field::{FieldDefinition, FieldType};
pub use prompt::{Prompt, PromptError};
pub use spec::FormSpecification;
pub use submission::{FieldValue, MappedField, MappedSubmission, SubmissionValues};
