//! Mapping from field types to input controls.

use formgen_types::{FieldDefinition, FieldType, FieldValue};

/// Leading entry of every drop-down; selecting it leaves the field empty.
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Caption for a checkbox without a placeholder.
pub const DEFAULT_CHECKBOX_CAPTION: &str = "Check this box";

pub const TEXTAREA_ROWS: u8 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Number,
    Date,
}

/// How a single field is presented for input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Input {
        kind: InputKind,
        placeholder: Option<String>,
    },
    TextArea {
        rows: u8,
        placeholder: Option<String>,
    },
    /// Single choice. `options` does not include [`SELECT_PLACEHOLDER`].
    Select { options: Vec<String> },
    /// One checkbox per option; the value is the list of ticked options.
    CheckboxGroup { options: Vec<String> },
    Checkbox { caption: String },
}

impl Control {
    /// Every field type maps to a control; unrecognised types render as a text input.
    pub fn for_field(field: &FieldDefinition) -> Self {
        let placeholder = field.placeholder.clone();
        let input = |kind| Control::Input {
            kind,
            placeholder: placeholder.clone(),
        };
        match &field.field_type {
            FieldType::Text => input(InputKind::Text),
            FieldType::Email => input(InputKind::Email),
            FieldType::Tel => input(InputKind::Tel),
            FieldType::Number => input(InputKind::Number),
            FieldType::Date => input(InputKind::Date),
            FieldType::Textarea => Control::TextArea {
                rows: TEXTAREA_ROWS,
                placeholder: placeholder.clone(),
            },
            FieldType::Select => Control::Select {
                options: field.options.clone(),
            },
            FieldType::Multiselect => Control::CheckboxGroup {
                options: field.options.clone(),
            },
            FieldType::Checkbox => Control::Checkbox {
                caption: placeholder
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CHECKBOX_CAPTION.to_string()),
            },
            FieldType::Other(wire) => {
                tracing::debug!("rendering unknown field type {wire:?} as text");
                input(InputKind::Text)
            }
        }
    }

    /// The value shown before the user has entered anything.
    pub fn initial_value(&self) -> FieldValue {
        match self {
            Control::CheckboxGroup { .. } => FieldValue::List(Vec::new()),
            Control::Checkbox { .. } => FieldValue::Bool(false),
            _ => FieldValue::text(""),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textarea_has_four_rows() {
        let field = FieldDefinition::new("notes", "Notes", FieldType::Textarea).placeholder("...");
        assert_eq!(
            Control::for_field(&field),
            Control::TextArea {
                rows: 4,
                placeholder: Some("...".into())
            }
        );
    }

    #[test]
    fn checkbox_caption_falls_back_to_default() {
        let plain = FieldDefinition::new("agree", "Agree", FieldType::Checkbox);
        assert_eq!(
            Control::for_field(&plain),
            Control::Checkbox {
                caption: DEFAULT_CHECKBOX_CAPTION.into()
            }
        );

        let captioned = plain.placeholder("I accept the terms");
        assert!(matches!(
            Control::for_field(&captioned),
            Control::Checkbox { caption } if caption == "I accept the terms"
        ));
    }

    #[test]
    fn unknown_types_render_as_text_input() {
        let field = FieldDefinition::new("cv", "Resume", FieldType::from_wire("file"));
        assert!(matches!(
            Control::for_field(&field),
            Control::Input {
                kind: InputKind::Text,
                ..
            }
        ));
    }

    #[test]
    fn multiselect_starts_with_empty_selection() {
        let field = FieldDefinition::new("topics", "Topics", FieldType::Multiselect)
            .options(["A", "B"]);
        let control = Control::for_field(&field);
        assert_eq!(
            control,
            Control::CheckboxGroup {
                options: vec!["A".into(), "B".into()]
            }
        );
        assert_eq!(control.initial_value(), FieldValue::List(vec![]));
    }
}
