use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use formgen_core::{
    backend_settings_from_env_values, CoreConfig, SpecificationExtractor, DEFAULT_REST_ADDR,
};

/// Main entry point for the form generator service
///
/// Serves the REST API under `/api` with Swagger UI at `/swagger-ui`.
///
/// Without `OPENAI_API_KEY` every prompt that does not match a template is answered by the
/// heuristic generator.
///
/// # Environment Variables
/// - `FORMGEN_REST_ADDR`: REST server address (default: "0.0.0.0:5000")
/// - `OPENAI_API_KEY`: API key for the generative backend (optional)
/// - `OPENAI_BASE_URL`: OpenAI-compatible API base URL (default: "https://api.openai.com/v1")
/// - `OPENAI_MODEL`: chat model name (default: "gpt-3.5-turbo")
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the backend configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("formgen_run=info".parse()?)
                .add_directive("formgen_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("FORMGEN_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let backend = backend_settings_from_env_values(
        std::env::var("OPENAI_API_KEY").ok(),
        std::env::var("OPENAI_BASE_URL").ok(),
        std::env::var("OPENAI_MODEL").ok(),
    )?;
    if let Some(settings) = &backend {
        tracing::info!(
            "Generative backend: {} at {}",
            settings.model(),
            settings.base_url()
        );
    }

    let cfg = CoreConfig::new(backend);
    let extractor = SpecificationExtractor::from_config(&cfg)?;
    if !extractor.has_backend() {
        tracing::warn!("OPENAI_API_KEY not set. Using fallback form generation.");
    }
    let app = api_rest::app(AppState::new(extractor));

    tracing::info!("++ Starting form generator REST on {}", rest_addr);
    tracing::info!("++ API endpoint: http://{}/api/generate-form", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
