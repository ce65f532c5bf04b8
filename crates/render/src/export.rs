use std::path::Path;

use formgen_types::MappedSubmission;

use crate::ExportError;

pub const DEFAULT_EXPORT_FILENAME: &str = "form_submission.json";

/// The submission as JSON indented with two spaces.
pub fn to_json_document(submission: &MappedSubmission) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(submission)?)
}

/// Writes the submission to `path`, replacing any existing file.
pub fn write_json(path: &Path, submission: &MappedSubmission) -> Result<(), ExportError> {
    let document = to_json_document(submission)?;
    std::fs::write(path, document)?;
    tracing::info!("wrote submission to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn writes_readable_document() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_EXPORT_FILENAME);
        let submission = MappedSubmission {
            form_title: "Contact".into(),
            submitted_at: chrono::Utc
                .with_ymd_and_hms(2026, 3, 1, 9, 0, 0)
                .single()
                .expect("timestamp"),
            fields: Vec::new(),
        };

        write_json(&path, &submission).expect("write");

        let written = std::fs::read_to_string(&path).expect("read back");
        assert!(written.starts_with("{\n  \"form_title\": \"Contact\""));
        let parsed: MappedSubmission = serde_json::from_str(&written).expect("parse");
        assert_eq!(parsed, submission);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("absent").join(DEFAULT_EXPORT_FILENAME);
        let submission = MappedSubmission {
            form_title: "Contact".into(),
            submitted_at: chrono::Utc::now(),
            fields: Vec::new(),
        };
        let err = write_json(&path, &submission).expect_err("should fail");
        assert!(matches!(err, ExportError::Io(_)));
    }
}
