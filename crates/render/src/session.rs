//! Value and error state for one rendered form.

use formgen_types::{FieldDefinition, FieldValue, FormSpecification, SubmissionValues};

use crate::controls::Control;
use crate::validation::validate;
use crate::ValidationErrors;

/// A field as it should currently be drawn.
#[derive(Debug)]
pub struct RenderedField<'a> {
    pub definition: &'a FieldDefinition,
    pub control: Control,
    pub value: FieldValue,
    pub error: Option<&'a str>,
}

/// Holds the values entered against one [`FormSpecification`] and the validation messages from
/// the last blocked submit.
#[derive(Clone, Debug)]
pub struct FormSession {
    spec: FormSpecification,
    values: SubmissionValues,
    errors: ValidationErrors,
}

impl FormSession {
    pub fn new(spec: FormSpecification) -> Self {
        Self {
            spec,
            values: SubmissionValues::new(),
            errors: ValidationErrors::new(),
        }
    }

    pub fn spec(&self) -> &FormSpecification {
        &self.spec
    }

    pub fn values(&self) -> &SubmissionValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Fields in specification order with their control, current value and error.
    pub fn fields(&self) -> Vec<RenderedField<'_>> {
        self.spec
            .fields
            .iter()
            .map(|definition| {
                let control = Control::for_field(definition);
                let value = self
                    .values
                    .get(&definition.name)
                    .filter(|v| !matches!(v, FieldValue::Null))
                    .cloned()
                    .unwrap_or_else(|| control.initial_value());
                RenderedField {
                    definition,
                    control,
                    value,
                    error: self.errors.get(&definition.name),
                }
            })
            .collect()
    }

    /// Records a value and clears any error shown for that field.
    pub fn set_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.values.insert(name.to_string(), value.into());
        self.errors.remove(name);
    }

    /// Removes a value and clears any error shown for that field.
    pub fn clear_value(&mut self, name: &str) {
        self.values.remove(name);
        self.errors.remove(name);
    }

    /// Records raw numeric input. Input that does not parse as a number clears the value.
    pub fn set_number_input(&mut self, name: &str, raw: &str) {
        match parse_number(raw.trim()) {
            Some(number) => self.set_value(name, FieldValue::Number(number)),
            None => self.clear_value(name),
        }
    }

    /// Ticks or unticks one option of a multiselect.
    ///
    /// Ticking appends the option (once); unticking removes it. The remaining selections keep
    /// the order they were ticked in.
    pub fn toggle_option(&mut self, name: &str, option: &str, checked: bool) {
        let mut selected = match self.values.get(name) {
            Some(FieldValue::List(items)) => items.clone(),
            _ => Vec::new(),
        };
        if checked {
            if !selected.iter().any(|s| s == option) {
                selected.push(option.to_string());
            }
        } else {
            selected.retain(|s| s != option);
        }
        self.set_value(name, FieldValue::List(selected));
    }

    /// Re-runs validation, keeping the resulting messages. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors = validate(&self.spec, &self.values);
        self.errors.is_empty()
    }

    /// Validates and, only when every field passes, hands the values to `on_submit`.
    ///
    /// A blocked submit returns the messages and leaves the values untouched.
    pub fn submit<R>(
        &mut self,
        on_submit: impl FnOnce(&SubmissionValues, &FormSpecification) -> R,
    ) -> Result<R, ValidationErrors> {
        if !self.validate() {
            tracing::debug!("submit blocked: {}", self.errors);
            return Err(self.errors.clone());
        }
        Ok(on_submit(&self.values, &self.spec))
    }

    /// Clears all values and errors.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }
}

fn parse_number(raw: &str) -> Option<serde_json::Number> {
    if raw.is_empty() {
        return None;
    }
    if let Ok(int) = raw.parse::<i64>() {
        return Some(int.into());
    }
    raw.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
}
