//! Submitted values and their keyword-annotated form.

use crate::FieldType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// A value entered for one field.
///
/// The shape depends on the field type: text-like fields hold [`FieldValue::Text`], numeric
/// fields [`FieldValue::Number`], checkboxes [`FieldValue::Bool`] and multiselects
/// [`FieldValue::List`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Text(String),
    List(Vec<String>),
    /// Any other JSON shape, carried through unchanged.
    Other(serde_json::Value),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Whether the value counts as "not supplied" for mapping: null or the empty string.
    ///
    /// `false`, `0` and empty lists are real answers and are kept.
    pub fn is_unset(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether the value fails a `required` check.
    ///
    /// Stricter than [`FieldValue::is_unset`]: an empty selection and an unticked checkbox also
    /// count as missing. Numeric zero is an answer.
    pub fn is_missing(&self) -> bool {
        match self {
            FieldValue::Null => true,
            FieldValue::Bool(checked) => !checked,
            FieldValue::Number(_) => false,
            FieldValue::Text(s) => s.is_empty(),
            FieldValue::List(items) => items.is_empty(),
            FieldValue::Other(_) => false,
        }
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{b}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
            FieldValue::Other(value) => write!(f, "{value}"),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value.into())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        FieldValue::List(value)
    }
}

/// Raw values keyed by field name.
pub type SubmissionValues = BTreeMap<String, FieldValue>;

/// One submitted value paired with its field's metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MappedField {
    pub field_name: String,
    pub field_label: String,
    #[schema(value_type = String)]
    pub field_type: FieldType,
    #[schema(value_type = Object)]
    pub value: FieldValue,
    pub meta_tags: Vec<String>,
    /// Same content as `meta_tags`.
    pub keywords: Vec<String>,
}

/// Submitted values annotated with meta-tags, stamped with the mapping time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MappedSubmission {
    pub form_title: String,
    #[serde(with = "iso_millis")]
    #[schema(value_type = String, format = DateTime)]
    pub submitted_at: DateTime<Utc>,
    pub fields: Vec<MappedField>,
}

/// ISO-8601 UTC timestamps with millisecond precision and a `Z` suffix,
/// e.g. `2026-01-23T13:58:04.099Z`.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
