//! JSON bodies exchanged over the REST API.

use formgen_types::{FormSpecification, SubmissionValues};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Liveness payload for `GET /health`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub status: String,
    pub message: String,
}

/// Error body for 4xx/5xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorRes {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// Body of `POST /generate-form`.
///
/// `prompt` is optional on the wire so a missing prompt is reported as a 400 rather than a
/// deserialisation failure.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateFormReq {
    #[serde(default)]
    pub prompt: Option<String>,
}

/// Body of `POST /submit-form`.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFormReq {
    #[serde(default)]
    #[schema(value_type = Option<Object>)]
    pub form_data: Option<SubmissionValues>,
    #[serde(default)]
    pub form_spec: Option<FormSpecification>,
}
