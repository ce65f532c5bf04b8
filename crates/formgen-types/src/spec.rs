//! Form specifications: the structured result of extraction.

use crate::FieldDefinition;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use utoipa::ToSchema;

/// A complete form: title, optional description and ordered fields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FormSpecification {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub fields: Vec<FieldDefinition>,
}

impl FormSpecification {
    /// Fill in synthesised meta-tags on every field that lacks them.
    pub fn normalise_meta_tags(&mut self) {
        for field in &mut self.fields {
            field.ensure_meta_tags();
        }
    }

    /// Look up a field by name. With duplicate names the first definition wins.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Field names that occur more than once, in order of first repetition.
    ///
    /// Duplicates are not rejected anywhere; fields sharing a name also share one submitted
    /// value.
    pub fn duplicate_field_names(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut dups = Vec::new();
        for field in &self.fields {
            let name = field.name.as_str();
            if !seen.insert(name) && !dups.contains(&name) {
                dups.push(name);
            }
        }
        dups
    }
}
