//! Field definitions and the field type vocabulary.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Kind of input a field collects.
///
/// The vocabulary is closed, but specifications arriving from a generative backend or a client
/// may name a type outside it. Such names are preserved in [`FieldType::Other`] so that they
/// round-trip unchanged; the renderer treats them as plain text inputs.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Email,
    Number,
    Tel,
    Textarea,
    Select,
    Multiselect,
    Date,
    Checkbox,
    /// A type name outside the known vocabulary.
    Other(String),
}

impl FieldType {
    /// Wire-format name of this type.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Tel => "tel",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Multiselect => "multiselect",
            FieldType::Date => "date",
            FieldType::Checkbox => "checkbox",
            FieldType::Other(name) => name,
        }
    }

    /// Parse from the wire-format name. Never fails.
    pub fn from_wire(s: &str) -> Self {
        match s {
            "text" => FieldType::Text,
            "email" => FieldType::Email,
            "number" => FieldType::Number,
            "tel" => FieldType::Tel,
            "textarea" => FieldType::Textarea,
            "select" => FieldType::Select,
            "multiselect" => FieldType::Multiselect,
            "date" => FieldType::Date,
            "checkbox" => FieldType::Checkbox,
            other => FieldType::Other(other.to_owned()),
        }
    }

    /// Whether this type takes its value from a fixed list of options.
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Multiselect)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FieldType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(FieldType::from_wire(&s))
    }
}

/// Treats an explicit `null` like a missing member.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One field of a form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldDefinition {
    /// Stable snake_case identifier; the key under which the value is submitted.
    pub name: String,

    /// Display text.
    pub label: String,

    #[schema(value_type = String, example = "text")]
    pub field_type: FieldType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Choices for select and multiselect fields, in display order.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub options: Vec<String>,

    /// Keywords describing the semantic intent of the field.
    ///
    /// `None` means the source did not supply any; see [`FieldDefinition::resolved_meta_tags`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_tags: Option<Vec<String>>,
}

impl FieldDefinition {
    /// A new optional field with no placeholder, options or meta-tags.
    pub fn new(name: impl Into<String>, label: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            field_type,
            required: false,
            placeholder: None,
            options: Vec::new(),
            meta_tags: None,
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn meta_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meta_tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    /// Meta-tags for this field, synthesising `[name, lowercase(label)]` when none were supplied.
    ///
    /// An explicitly empty list is returned as-is.
    pub fn resolved_meta_tags(&self) -> Vec<String> {
        match &self.meta_tags {
            Some(tags) => tags.clone(),
            None => vec![self.name.clone(), self.label.to_lowercase()],
        }
    }

    /// Fill in synthesised meta-tags if the field has none.
    pub fn ensure_meta_tags(&mut self) {
        if self.meta_tags.is_none() {
            self.meta_tags = Some(self.resolved_meta_tags());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(meta_tags: Option<Vec<String>>) -> FieldDefinition {
        FieldDefinition {
            meta_tags,
            ..FieldDefinition::new("company_size", "Company Size", FieldType::Number)
        }
    }

    #[test]
    fn builder_sets_members() {
        let f = FieldDefinition::new("plan", "Plan", FieldType::Select)
            .required(true)
            .placeholder("Pick one")
            .options(["Basic", "Pro"])
            .meta_tags(["plan", "tier"]);
        assert!(f.required);
        assert_eq!(f.placeholder.as_deref(), Some("Pick one"));
        assert_eq!(f.options, vec!["Basic", "Pro"]);
        assert_eq!(f.meta_tags, Some(vec!["plan".to_string(), "tier".to_string()]));
        assert!(f.field_type.has_options());
    }

    #[test]
    fn synthesises_missing_meta_tags() {
        let mut f = field(None);
        assert_eq!(f.resolved_meta_tags(), vec!["company_size", "company size"]);
        f.ensure_meta_tags();
        assert_eq!(
            f.meta_tags,
            Some(vec!["company_size".to_string(), "company size".to_string()])
        );
    }

    #[test]
    fn keeps_explicit_empty_meta_tags() {
        let mut f = field(Some(vec![]));
        f.ensure_meta_tags();
        assert_eq!(f.meta_tags, Some(vec![]));
        assert!(f.resolved_meta_tags().is_empty());
    }

    #[test]
    fn unknown_field_type_round_trips() {
        let json = r#"{"name":"cv","label":"Resume","field_type":"file"}"#;
        let parsed: FieldDefinition = serde_json::from_str(json).expect("parse field");
        assert_eq!(parsed.field_type, FieldType::Other("file".into()));
        assert!(!parsed.required);
        let out = serde_json::to_string(&parsed).expect("serialise field");
        assert!(out.contains(r#""field_type":"file""#));
    }

    #[test]
    fn optional_members_are_omitted_when_empty() {
        let out = serde_json::to_value(field(None)).expect("serialise field");
        let obj = out.as_object().expect("object");
        assert!(!obj.contains_key("placeholder"));
        assert!(!obj.contains_key("options"));
        assert!(!obj.contains_key("meta_tags"));
        assert_eq!(obj["field_type"], "number");
    }

    #[test]
    fn null_members_read_as_defaults() {
        let f: FieldDefinition = serde_json::from_str(
            r#"{"name":"plan","label":"Plan","field_type":"select","required":null,"options":null,"placeholder":null,"meta_tags":null}"#,
        )
        .expect("parse field");
        assert!(!f.required);
        assert!(f.options.is_empty());
        assert_eq!(f.placeholder, None);
        assert_eq!(f.meta_tags, None);
    }
}
