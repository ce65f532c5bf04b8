/// Errors raised while configuring core services.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

/// Failures of a generative-text backend call.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request to generative backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("generative backend returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("generative backend returned no completion")]
    EmptyCompletion,
    #[error("generative backend unavailable: {0}")]
    Unavailable(String),
}

/// Reasons the generative extraction path can fail.
///
/// Both variants are recovered by the extractor, which falls back to the heuristic generator.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),
}
