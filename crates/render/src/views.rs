//! Text renderings of a mapped submission.

use std::fmt::Write;

use formgen_types::MappedSubmission;

use crate::export::to_json_document;
use crate::ExportError;

/// The three ways a submission can be reviewed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionTab {
    /// Values with their labels, types and keywords.
    #[default]
    Mapped,
    /// The submission as pretty-printed JSON.
    Raw,
    /// Labels, names and keywords only.
    Metadata,
}

impl SubmissionTab {
    pub const ALL: [SubmissionTab; 3] = [
        SubmissionTab::Mapped,
        SubmissionTab::Raw,
        SubmissionTab::Metadata,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SubmissionTab::Mapped => "Mapped Data",
            SubmissionTab::Raw => "Raw JSON",
            SubmissionTab::Metadata => "Metadata",
        }
    }
}

pub fn render_tab(submission: &MappedSubmission, tab: SubmissionTab) -> Result<String, ExportError> {
    match tab {
        SubmissionTab::Mapped => Ok(render_mapped(submission)),
        SubmissionTab::Raw => to_json_document(submission),
        SubmissionTab::Metadata => Ok(render_metadata(submission)),
    }
}

pub fn render_mapped(submission: &MappedSubmission) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Form Title: {}", submission.form_title);
    let _ = writeln!(
        out,
        "Submitted At: {}",
        submission.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    for field in &submission.fields {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} [{}]", field.field_label, field.field_type);
        let _ = writeln!(out, "  Value: {}", field.value);
        let _ = writeln!(out, "  Keywords/Meta-tags: {}", field.keywords.join(", "));
    }
    out
}

pub fn render_metadata(submission: &MappedSubmission) -> String {
    let mut out = String::from("Field Metadata Summary\n");
    for field in &submission.fields {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} ({})", field.field_label, field.field_name);
        let _ = writeln!(out, "  {}", field.meta_tags.join(" | "));
    }
    out
}
