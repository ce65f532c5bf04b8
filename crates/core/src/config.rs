//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core services. Request
//! handling never reads environment variables; binaries read them and hand the raw values to the
//! helpers below.

use crate::constants::{
    DEFAULT_BACKEND_BASE_URL, DEFAULT_BACKEND_MAX_TOKENS, DEFAULT_BACKEND_MODEL,
    DEFAULT_BACKEND_TEMPERATURE,
};
use crate::{CoreError, CoreResult};

/// Connection settings for an OpenAI-compatible chat-completions backend.
#[derive(Clone)]
pub struct BackendSettings {
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl BackendSettings {
    /// Create settings with the default model and sampling parameters.
    pub fn new(api_key: String, base_url: String) -> CoreResult<Self> {
        if api_key.trim().is_empty() {
            return Err(CoreError::InvalidInput("api_key cannot be empty".into()));
        }
        reqwest::Url::parse(&base_url).map_err(|e| {
            CoreError::InvalidInput(format!("backend base URL '{base_url}' is invalid: {e}"))
        })?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: DEFAULT_BACKEND_MODEL.into(),
            temperature: DEFAULT_BACKEND_TEMPERATURE,
            max_tokens: DEFAULT_BACKEND_MAX_TOKENS,
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }
}

impl std::fmt::Debug for BackendSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackendSettings")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct CoreConfig {
    backend: Option<BackendSettings>,
}

impl CoreConfig {
    pub fn new(backend: Option<BackendSettings>) -> Self {
        Self { backend }
    }

    /// Configuration that routes every generation through the heuristic generator.
    pub fn without_backend() -> Self {
        Self { backend: None }
    }

    pub fn backend(&self) -> Option<&BackendSettings> {
        self.backend.as_ref()
    }
}

/// Build backend settings from optional raw environment values.
///
/// A missing or blank `api_key` is not an error: it yields `Ok(None)` and generation uses the
/// heuristic generator. Blank `base_url`/`model` values fall back to the defaults.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` if a key is present but the base URL does not parse.
pub fn backend_settings_from_env_values(
    api_key: Option<String>,
    base_url: Option<String>,
    model: Option<String>,
) -> CoreResult<Option<BackendSettings>> {
    fn non_blank(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    let Some(api_key) = non_blank(api_key) else {
        return Ok(None);
    };
    let base_url = non_blank(base_url).unwrap_or_else(|| DEFAULT_BACKEND_BASE_URL.into());

    let mut settings = BackendSettings::new(api_key, base_url)?;
    if let Some(model) = non_blank(model) {
        settings = settings.with_model(model);
    }
    Ok(Some(settings))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_disables_backend() {
        let settings = backend_settings_from_env_values(None, None, None).expect("no error");
        assert!(settings.is_none());

        let settings =
            backend_settings_from_env_values(Some("   ".into()), None, None).expect("no error");
        assert!(settings.is_none());
    }

    #[test]
    fn applies_defaults() {
        let settings = backend_settings_from_env_values(Some("sk-test".into()), None, None)
            .expect("valid settings")
            .expect("backend configured");
        assert_eq!(settings.base_url(), DEFAULT_BACKEND_BASE_URL);
        assert_eq!(settings.model(), DEFAULT_BACKEND_MODEL);
        assert_eq!(settings.max_tokens(), DEFAULT_BACKEND_MAX_TOKENS);
    }

    #[test]
    fn overrides_model_and_trims_base_url() {
        let settings = backend_settings_from_env_values(
            Some("sk-test".into()),
            Some("http://localhost:8080/v1/".into()),
            Some("gpt-4o-mini".into()),
        )
        .expect("valid settings")
        .expect("backend configured");
        assert_eq!(settings.base_url(), "http://localhost:8080/v1");
        assert_eq!(settings.model(), "gpt-4o-mini");
    }

    #[test]
    fn rejects_invalid_base_url() {
        let err = backend_settings_from_env_values(
            Some("sk-test".into()),
            Some("not a url".into()),
            None,
        )
        .expect_err("should reject url");
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("not a url")));
    }

    #[test]
    fn debug_output_redacts_key() {
        let settings =
            BackendSettings::new("sk-secret".into(), DEFAULT_BACKEND_BASE_URL.into())
                .expect("valid settings");
        let debug = format!("{settings:?}");
        assert!(!debug.contains("sk-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
