//! Submitted values → keyword-annotated submission.

use chrono::{DateTime, Utc};
use formgen_types::{FormSpecification, MappedField, MappedSubmission, SubmissionValues};

/// Pair each supplied value with its field's metadata, stamped with the current time.
pub fn map_submission(values: &SubmissionValues, spec: &FormSpecification) -> MappedSubmission {
    map_submission_at(values, spec, Utc::now())
}

/// Like [`map_submission`] with an explicit timestamp.
///
/// Fields are visited in specification order. Values that are absent, null or the empty string
/// are dropped; `false`, `0` and empty lists are kept. Values keyed by names the specification
/// does not declare are ignored.
pub fn map_submission_at(
    values: &SubmissionValues,
    spec: &FormSpecification,
    submitted_at: DateTime<Utc>,
) -> MappedSubmission {
    let fields = spec
        .fields
        .iter()
        .filter_map(|field| {
            let value = values.get(&field.name).filter(|v| !v.is_unset())?;
            let tags = field.resolved_meta_tags();
            Some(MappedField {
                field_name: field.name.clone(),
                field_label: field.label.clone(),
                field_type: field.field_type.clone(),
                value: value.clone(),
                meta_tags: tags.clone(),
                keywords: tags,
            })
        })
        .collect();

    MappedSubmission {
        form_title: spec.title.clone(),
        submitted_at,
        fields,
    }
}
