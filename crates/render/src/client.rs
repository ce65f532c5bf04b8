//! Access to the form API, over HTTP or in-process.

use api_shared::{ErrorRes, GenerateFormReq, SubmitFormReq};
use async_trait::async_trait;
use formgen_core::{map_submission, SpecificationExtractor};
use formgen_types::{FormSpecification, MappedSubmission, Prompt, SubmissionValues};
use serde::de::DeserializeOwned;

use crate::ClientError;

/// The two operations a client session needs from the server.
#[async_trait]
pub trait FormApi: Send + Sync {
    async fn generate_form(&self, prompt: &str) -> Result<FormSpecification, ClientError>;

    async fn submit_form(
        &self,
        values: &SubmissionValues,
        spec: &FormSpecification,
    ) -> Result<MappedSubmission, ClientError>;
}

/// Talks to a running server, e.g. `http://localhost:5000/api`.
#[derive(Clone, Debug)]
pub struct HttpFormApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFormApi {
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if `base_url` is not an absolute URL, or
    /// `ClientError::Transport` if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        reqwest::Url::parse(trimmed)
            .map_err(|e| ClientError::InvalidBaseUrl(format!("{trimmed}: {e}")))?;
        let client = reqwest::Client::builder().build()?;
        Ok(Self {
            client,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        B: serde::Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}/{path}", self.base_url);
        tracing::debug!("POST {url}");
        let response = self.client.post(&url).json(body).send().await?;

        let status = response.status();
        let bytes = response.bytes().await?;
        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorRes>(&bytes) {
                Ok(err) => ClientError::Api {
                    status: status.as_u16(),
                    message: err.error,
                },
                Err(_) => ClientError::Status {
                    status: status.as_u16(),
                },
            });
        }

        serde_json::from_slice(&bytes).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl FormApi for HttpFormApi {
    async fn generate_form(&self, prompt: &str) -> Result<FormSpecification, ClientError> {
        let body = GenerateFormReq {
            prompt: Some(prompt.to_string()),
        };
        self.post("generate-form", &body).await
    }

    async fn submit_form(
        &self,
        values: &SubmissionValues,
        spec: &FormSpecification,
    ) -> Result<MappedSubmission, ClientError> {
        let body = SubmitFormReq {
            form_data: Some(values.clone()),
            form_spec: Some(spec.clone()),
        };
        self.post("submit-form", &body).await
    }
}

/// Runs extraction and mapping in the calling process, without a server.
#[derive(Clone, Default)]
pub struct LocalFormApi {
    extractor: SpecificationExtractor,
}

impl LocalFormApi {
    pub fn new(extractor: SpecificationExtractor) -> Self {
        Self { extractor }
    }
}

#[async_trait]
impl FormApi for LocalFormApi {
    async fn generate_form(&self, prompt: &str) -> Result<FormSpecification, ClientError> {
        let prompt = Prompt::new(prompt).map_err(|e| ClientError::Api {
            status: 400,
            message: e.to_string(),
        })?;
        Ok(self.extractor.extract(&prompt).await)
    }

    async fn submit_form(
        &self,
        values: &SubmissionValues,
        spec: &FormSpecification,
    ) -> Result<MappedSubmission, ClientError> {
        Ok(map_submission(values, spec))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgen_types::FieldValue;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn contact_spec_json() -> serde_json::Value {
        json!({
            "title": "Contact",
            "fields": [
                {"name": "name", "label": "Full Name", "field_type": "text", "required": true}
            ]
        })
    }

    #[tokio::test]
    async fn http_generate_posts_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-form"))
            .and(body_json(json!({"prompt": "contact form"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(contact_spec_json()))
            .expect(1)
            .mount(&server)
            .await;

        let api = HttpFormApi::new(&format!("{}/api/", server.uri())).expect("client");
        let spec = api.generate_form("contact form").await.expect("spec");
        assert_eq!(spec.title, "Contact");
        assert_eq!(spec.fields[0].name, "name");
    }

    #[tokio::test]
    async fn http_error_body_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-form"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"error": "Prompt is required"})),
            )
            .mount(&server)
            .await;

        let api = HttpFormApi::new(&format!("{}/api", server.uri())).expect("client");
        let err = api.generate_form(" ").await.expect_err("should fail");
        assert!(matches!(
            err,
            ClientError::Api { status: 400, ref message } if message == "Prompt is required"
        ));
    }

    #[tokio::test]
    async fn http_error_without_body_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/submit-form"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let api = HttpFormApi::new(&format!("{}/api", server.uri())).expect("client");
        let spec: FormSpecification =
            serde_json::from_value(contact_spec_json()).expect("spec");
        let err = api
            .submit_form(&SubmissionValues::new(), &spec)
            .await
            .expect_err("should fail");
        assert!(matches!(err, ClientError::Status { status: 502 }));
    }

    #[tokio::test]
    async fn http_submit_sends_camel_case_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/submit-form"))
            .and(body_json(json!({
                "formData": {"name": "Alice"},
                "formSpec": {
                    "title": "Contact",
                    "fields": [
                        {"name": "name", "label": "Full Name", "field_type": "text", "required": true}
                    ]
                }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "form_title": "Contact",
                "submitted_at": "2026-01-23T13:58:04.099Z",
                "fields": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = HttpFormApi::new(&format!("{}/api", server.uri())).expect("client");
        let spec: FormSpecification =
            serde_json::from_value(contact_spec_json()).expect("spec");
        let values = SubmissionValues::from([("name".to_string(), FieldValue::text("Alice"))]);
        let mapped = api.submit_form(&values, &spec).await.expect("mapped");
        assert_eq!(mapped.form_title, "Contact");
    }

    #[test]
    fn rejects_relative_base_url() {
        let err = HttpFormApi::new("localhost/api").expect_err("should fail");
        assert!(matches!(err, ClientError::InvalidBaseUrl(_)));
    }

    #[tokio::test]
    async fn local_api_rejects_blank_prompt() {
        let api = LocalFormApi::default();
        let err = api.generate_form("   ").await.expect_err("should fail");
        assert_eq!(err.banner_message("fallback"), "Prompt is required");
    }

    #[tokio::test]
    async fn local_api_maps_submission() {
        let api = LocalFormApi::default();
        let spec = api
            .generate_form("Create a contact form with name, email, and message")
            .await
            .expect("spec");
        let values = SubmissionValues::from([
            ("name".to_string(), FieldValue::text("Alice")),
            ("email".to_string(), FieldValue::text("")),
        ]);
        let mapped = api.submit_form(&values, &spec).await.expect("mapped");
        assert_eq!(mapped.fields.len(), 1);
        assert_eq!(mapped.fields[0].field_name, "name");
    }
}
