//! Prompt → form specification.
//!
//! Resolution order:
//! 1. template store, when the prompt contains a domain trigger word;
//! 2. the generative backend, when one is configured;
//! 3. the heuristic generator, when there is no backend or the backend path failed.
//!
//! [`SpecificationExtractor::extract`] never fails.

use crate::backend::{GenerativeBackend, OpenAiBackend};
use crate::config::CoreConfig;
use crate::{heuristic, templates, CoreResult, ExtractError};
use formgen_types::{FormSpecification, Prompt};
use std::sync::Arc;

/// Which path produced a specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Template,
    Backend,
    Heuristic,
}

#[derive(Clone, Default)]
pub struct SpecificationExtractor {
    backend: Option<Arc<dyn GenerativeBackend>>,
}

impl SpecificationExtractor {
    pub fn new(backend: Option<Arc<dyn GenerativeBackend>>) -> Self {
        Self { backend }
    }

    /// An extractor with no generative backend.
    pub fn heuristic_only() -> Self {
        Self { backend: None }
    }

    /// Build an extractor from startup configuration.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError` if the backend HTTP client cannot be built.
    pub fn from_config(cfg: &CoreConfig) -> CoreResult<Self> {
        let backend = match cfg.backend() {
            Some(settings) => {
                let backend: Arc<dyn GenerativeBackend> =
                    Arc::new(OpenAiBackend::new(settings.clone())?);
                Some(backend)
            }
            None => None,
        };
        Ok(Self { backend })
    }

    pub fn has_backend(&self) -> bool {
        self.backend.is_some()
    }

    /// Derive a form specification from a prompt.
    pub async fn extract(&self, prompt: &Prompt) -> FormSpecification {
        self.extract_with_source(prompt).await.0
    }

    /// Like [`SpecificationExtractor::extract`], also reporting which path was taken.
    pub async fn extract_with_source(&self, prompt: &Prompt) -> (FormSpecification, Source) {
        if let Some(spec) = templates::lookup(&prompt.lowercase()) {
            tracing::debug!(title = %spec.title, "matched form template");
            return (spec, Source::Template);
        }

        if let Some(backend) = &self.backend {
            match generate_with(backend.as_ref(), prompt).await {
                Ok(spec) => {
                    let dups = spec.duplicate_field_names();
                    if !dups.is_empty() {
                        tracing::warn!(?dups, "generated form repeats field names");
                    }
                    tracing::debug!(title = %spec.title, "generated form from backend");
                    return (spec, Source::Backend);
                }
                Err(ExtractError::Backend(e)) => {
                    tracing::warn!("generative backend failed, using heuristic form: {e}");
                }
                Err(ExtractError::MalformedResponse(msg)) => {
                    tracing::warn!("discarding backend response, using heuristic form: {msg}");
                }
            }
        }

        tracing::debug!("generated heuristic form");
        (heuristic::generate(prompt), Source::Heuristic)
    }
}

async fn generate_with(
    backend: &dyn GenerativeBackend,
    prompt: &Prompt,
) -> Result<FormSpecification, ExtractError> {
    let raw = backend.generate(prompt.as_str()).await?;
    parse_backend_response(&raw)
}

/// Parse raw backend text into a normalised form specification.
///
/// Surrounding code fences are removed first. Missing meta-tags are synthesised.
///
/// # Errors
///
/// Returns `ExtractError::MalformedResponse` when the text is not JSON of the specification
/// shape. The message names the JSON path of the first mismatch.
pub fn parse_backend_response(raw: &str) -> Result<FormSpecification, ExtractError> {
    let json = strip_code_fences(raw);
    let mut deserializer = serde_json::Deserializer::from_str(json);

    let mut spec: FormSpecification = match serde_path_to_error::deserialize(&mut deserializer) {
        Ok(parsed) => parsed,
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() || path == "." {
                "<root>"
            } else {
                path.as_str()
            };
            return Err(ExtractError::MalformedResponse(format!(
                "form specification mismatch at {path}: {source}"
            )));
        }
    };
    deserializer
        .end()
        .map_err(|e| ExtractError::MalformedResponse(format!("trailing content: {e}")))?;

    spec.normalise_meta_tags();
    Ok(spec)
}

/// Remove a surrounding Markdown code fence (```` ```json ```` or ```` ``` ````), if present.
pub fn strip_code_fences(raw: &str) -> &str {
    let text = raw.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BackendError;
    use async_trait::async_trait;
    use formgen_types::FieldType;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a canned reply and counts calls.
    struct FakeBackend {
        reply: Result<String, String>,
        calls: AtomicUsize,
    }

    impl FakeBackend {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Ok(text.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing(msg: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Err(msg.into()),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeBackend for FakeBackend {
        async fn generate(&self, _prompt: &str) -> Result<String, BackendError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone().map_err(BackendError::Unavailable)
        }
    }

    fn extractor(backend: Arc<FakeBackend>) -> SpecificationExtractor {
        SpecificationExtractor::new(Some(backend))
    }

    fn prompt(s: &str) -> Prompt {
        Prompt::new(s).expect("valid prompt")
    }

    const SURVEY: &str = r#"{
        "title": "Customer Survey",
        "description": "Tell us what you think",
        "fields": [
            {"name": "rating", "label": "Overall Rating", "field_type": "number", "required": true},
            {"name": "channel", "label": "How did you hear about us?", "field_type": "select",
             "options": ["Search", "Friend"], "meta_tags": ["channel", "acquisition"]}
        ]
    }"#;

    #[tokio::test]
    async fn templates_win_over_backend() {
        let backend = FakeBackend::replying(SURVEY);
        let (spec, source) = extractor(backend.clone())
            .extract_with_source(&prompt("Medical staff onboarding survey"))
            .await;

        assert_eq!(source, Source::Template);
        assert_eq!(spec, templates::TemplateKind::DoctorConference.specification());
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn fintech_prompt_returns_fintech_template() {
        let spec = SpecificationExtractor::heuristic_only()
            .extract(&prompt("Feedback on your Business Pain today"))
            .await;
        assert_eq!(spec, templates::TemplateKind::FintechConference.specification());
    }

    #[tokio::test]
    async fn uses_backend_and_fills_meta_tags() {
        let backend = FakeBackend::replying(SURVEY);
        let (spec, source) = extractor(backend.clone())
            .extract_with_source(&prompt("A customer survey"))
            .await;

        assert_eq!(source, Source::Backend);
        assert_eq!(backend.calls(), 1);
        assert_eq!(spec.title, "Customer Survey");
        assert_eq!(
            spec.field("rating").and_then(|f| f.meta_tags.clone()),
            Some(vec!["rating".to_string(), "overall rating".to_string()])
        );
        assert_eq!(
            spec.field("channel").and_then(|f| f.meta_tags.clone()),
            Some(vec!["channel".to_string(), "acquisition".to_string()])
        );
    }

    #[tokio::test]
    async fn accepts_fenced_json() {
        let fenced = format!("```json\n{SURVEY}\n```");
        let backend = FakeBackend::replying(&fenced);
        let (spec, source) = extractor(backend)
            .extract_with_source(&prompt("A customer survey"))
            .await;
        assert_eq!(source, Source::Backend);
        assert_eq!(spec.fields.len(), 2);
    }

    #[tokio::test]
    async fn backend_failure_falls_back_without_retry() {
        let backend = FakeBackend::failing("connection refused");
        let (spec, source) = extractor(backend.clone())
            .extract_with_source(&prompt("Create a contact form with name, email, and message"))
            .await;

        assert_eq!(source, Source::Heuristic);
        assert_eq!(backend.calls(), 1);
        assert_eq!(spec.title, "Create a contact form with Registration Form");
    }

    #[tokio::test]
    async fn malformed_response_falls_back() {
        let backend = FakeBackend::replying("Sure! Here is your form: title=Survey");
        let (spec, source) = extractor(backend)
            .extract_with_source(&prompt("A customer survey"))
            .await;
        assert_eq!(source, Source::Heuristic);
        assert_eq!(spec.fields[0].name, "name");
    }

    #[test]
    fn reports_whether_a_backend_is_configured() {
        assert!(!SpecificationExtractor::heuristic_only().has_backend());
        assert!(extractor(FakeBackend::replying("{}")).has_backend());
    }

    #[tokio::test]
    async fn without_backend_uses_heuristic() {
        let (spec, source) = SpecificationExtractor::heuristic_only()
            .extract_with_source(&prompt("Create a contact form with name, email, and message"))
            .await;
        assert_eq!(source, Source::Heuristic);
        assert_eq!(spec.fields.len(), 2);
        assert_eq!(spec.fields[1].field_type, FieldType::Email);
    }

    #[test]
    fn schema_mismatch_reports_path() {
        let err = parse_backend_response(r#"{"title":"T","fields":[{"name":"a","label":5,"field_type":"text"}]}"#)
            .expect_err("label must be a string");
        match err {
            ExtractError::MalformedResponse(msg) => assert!(msg.contains("fields[0].label"), "{msg}"),
            other => panic!("expected MalformedResponse, got {other:?}"),
        }
    }

    #[test]
    fn null_optional_members_are_accepted() {
        let spec = parse_backend_response(
            r#"{"title":"T","fields":[{"name":"plan","label":"Plan","field_type":"select","required":null,"options":null,"placeholder":null}]}"#,
        )
        .expect("nulls read as defaults");
        let field = &spec.fields[0];
        assert!(!field.required);
        assert!(field.options.is_empty());
        assert_eq!(field.placeholder, None);
        assert_eq!(field.meta_tags, Some(vec!["plan".to_string(), "plan".to_string()]));
    }

    #[test]
    fn missing_fields_is_malformed() {
        let err = parse_backend_response(r#"{"title":"T"}"#).expect_err("fields are required");
        assert!(matches!(err, ExtractError::MalformedResponse(msg) if msg.contains("fields")));
    }

    #[test]
    fn trailing_text_is_malformed() {
        let err = parse_backend_response(r#"{"title":"T","fields":[]} and more"#)
            .expect_err("trailing text");
        assert!(matches!(err, ExtractError::MalformedResponse(_)));
    }

    #[test]
    fn strips_fences() {
        assert_eq!(strip_code_fences("```json\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
        assert_eq!(strip_code_fences("```json{}"), "{}");
    }
}
