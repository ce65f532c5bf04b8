use std::sync::LazyLock;

use formgen_types::{FieldType, FieldValue, FormSpecification, SubmissionValues};
use regex::Regex;

use crate::ValidationErrors;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

pub fn required_message(label: &str) -> String {
    format!("{label} is required")
}

/// Checks `values` against the specification's `required` flags and email fields.
///
/// A field gets at most one message; an email check on a non-empty value takes precedence over
/// the required check.
pub fn validate(spec: &FormSpecification, values: &SubmissionValues) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in &spec.fields {
        let value = values.get(&field.name);

        if field.required && value.map_or(true, FieldValue::is_missing) {
            errors.insert(&field.name, required_message(&field.label));
        }

        if field.field_type == FieldType::Email {
            if let Some(FieldValue::Text(text)) = value {
                if !text.is_empty() && !is_valid_email(text) {
                    errors.insert(&field.name, INVALID_EMAIL_MESSAGE);
                }
            }
        }
    }

    errors
}
