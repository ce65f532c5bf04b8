//! Rule-based form synthesis used when no generative backend is available or it fails.

use crate::constants::{HEURISTIC_TITLE_SUFFIX, HEURISTIC_TITLE_WORDS};
use formgen_types::{FieldDefinition, FieldType, FormSpecification, Prompt};

/// Build a minimal form from keywords in the prompt.
///
/// Always emits a required full-name field. Adds an email field when the prompt mentions
/// "email" or "contact", and a phone field when it mentions "phone", "mobile" or "number". The
/// phone field is required only when the prompt contains the literal "mobile number".
pub fn generate(prompt: &Prompt) -> FormSpecification {
    let lower = prompt.lowercase();
    let mut fields = vec![FieldDefinition::new("name", "Full Name", FieldType::Text)
        .required(true)
        .placeholder("Enter your full name")
        .meta_tags(["name", "full name", "identity"])];

    if lower.contains("email") || lower.contains("contact") {
        fields.push(
            FieldDefinition::new("email", "Email Address", FieldType::Email)
                .required(true)
                .placeholder("Enter your email address")
                .meta_tags(["email", "contact", "communication"]),
        );
    }

    if ["phone", "mobile", "number"]
        .iter()
        .any(|k| lower.contains(k))
    {
        fields.push(
            FieldDefinition::new("phone", "Phone Number", FieldType::Tel)
                .required(lower.contains("mobile number"))
                .placeholder("Enter your phone number")
                .meta_tags(["phone", "mobile", "contact", "telephone"]),
        );
    }

    FormSpecification {
        title: title_for(prompt),
        description: Some(format!("Form generated from: \"{}\"", prompt.as_str())),
        fields,
    }
}

fn title_for(prompt: &Prompt) -> String {
    let words: Vec<&str> = prompt
        .as_str()
        .split_whitespace()
        .take(HEURISTIC_TITLE_WORDS)
        .collect();
    format!("{} {}", words.join(" "), HEURISTIC_TITLE_SUFFIX)
}
