//! # API REST
//!
//! REST API for the form generator.
//!
//! Handles:
//! - HTTP endpoints with axum (`/generate-form`, `/submit-form`, `/health`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, status codes, CORS)
//!
//! Form logic lives in `formgen-core`; wire bodies in `api-shared`.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{ErrorRes, GenerateFormReq, HealthRes, HealthService, SubmitFormReq};
use formgen_core::{map_submission, SpecificationExtractor};
use formgen_types::{FieldDefinition, FormSpecification, MappedField, MappedSubmission, Prompt};

const PROMPT_REQUIRED: &str = "Prompt is required";
const SUBMISSION_REQUIRED: &str = "Form data and form spec are required";
const GENERATE_FAILED: &str = "Failed to generate form";

type ApiError = (StatusCode, Json<ErrorRes>);

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    extractor: SpecificationExtractor,
}

impl AppState {
    pub fn new(extractor: SpecificationExtractor) -> Self {
        Self { extractor }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(health, generate_form, submit_form),
    components(schemas(
        HealthRes,
        ErrorRes,
        GenerateFormReq,
        SubmitFormReq,
        FormSpecification,
        FieldDefinition,
        MappedSubmission,
        MappedField,
    ))
)]
pub struct ApiDoc;

/// Routes for the form API, without a path prefix.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate-form", post(generate_form))
        .route("/submit-form", post(submit_form))
        .with_state(state)
}

/// The full application: API routes under `/api`, Swagger UI and permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", router(state))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
}

fn bad_request(message: &str) -> ApiError {
    (StatusCode::BAD_REQUEST, Json(ErrorRes::new(message)))
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint used for monitoring and load balancer checks.
#[axum::debug_handler]
async fn health() -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/api/generate-form",
    request_body = GenerateFormReq,
    responses(
        (status = 200, description = "Generated form specification", body = FormSpecification),
        (status = 400, description = "Prompt missing or blank", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Generate a form specification from a free-text prompt.
///
/// Extraction itself never fails: backend problems are recovered by the heuristic generator.
/// Extraction runs on its own task so that an unexpected panic is reported as a 500.
///
/// # Errors
/// Returns `400 Bad Request` if the prompt is missing or blank, and `500 Internal Server
/// Error` if the extraction task aborts.
#[axum::debug_handler]
async fn generate_form(
    State(state): State<AppState>,
    payload: Result<Json<GenerateFormReq>, JsonRejection>,
) -> Result<Json<FormSpecification>, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Rejected generate-form body: {rejection}");
            return Err(bad_request(PROMPT_REQUIRED));
        }
    };
    let Some(Ok(prompt)) = req.prompt.map(Prompt::new) else {
        return Err(bad_request(PROMPT_REQUIRED));
    };

    let extractor = state.extractor.clone();
    match tokio::spawn(async move { extractor.extract(&prompt).await }).await {
        Ok(spec) => Ok(Json(spec)),
        Err(e) => {
            tracing::error!("Error generating form: {:?}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes::with_details(GENERATE_FAILED, e.to_string())),
            ))
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/submit-form",
    request_body = SubmitFormReq,
    responses(
        (status = 200, description = "Submission mapped to meta-tags", body = MappedSubmission),
        (status = 400, description = "Form data or form spec missing", body = ErrorRes)
    )
)]
/// Map submitted values to their fields' meta-tags.
///
/// # Errors
/// Returns `400 Bad Request` if `formData` or `formSpec` is missing or the body does not parse.
#[axum::debug_handler]
async fn submit_form(
    payload: Result<Json<SubmitFormReq>, JsonRejection>,
) -> Result<Json<MappedSubmission>, ApiError> {
    let req = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            tracing::debug!("Rejected submit-form body: {rejection}");
            return Err(bad_request(SUBMISSION_REQUIRED));
        }
    };
    let (Some(values), Some(spec)) = (req.form_data, req.form_spec) else {
        return Err(bad_request(SUBMISSION_REQUIRED));
    };

    Ok(Json(map_submission(&values, &spec)))
}
