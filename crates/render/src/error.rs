use std::collections::BTreeMap;

/// Failures talking to the form API.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with an error body.
    #[error("API returned {status}: {message}")]
    Api { status: u16, message: String },
    /// The server answered with a non-2xx status and no readable error body.
    #[error("API returned {status}")]
    Status { status: u16 },
    #[error("failed to decode API response: {0}")]
    Decode(String),
}

impl ClientError {
    /// Text for the error banner: the server's `error` message when it sent one, otherwise
    /// `default`.
    pub fn banner_message(&self, default: &str) -> String {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
            _ => default.to_string(),
        }
    }
}

/// Failures writing a submission out.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialise submission: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write submission: {0}")]
    Io(#[from] std::io::Error),
}

/// Per-field validation messages, keyed by field name.
///
/// Returned by a submit that was blocked; the submit handler is not invoked when this is
/// non-empty.
#[derive(Clone, Debug, Default, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<String, String>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub(crate) fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_prefers_server_message() {
        let err = ClientError::Api {
            status: 400,
            message: "Prompt is required".into(),
        };
        assert_eq!(err.banner_message("fallback"), "Prompt is required");

        let err = ClientError::Status { status: 502 };
        assert_eq!(err.banner_message("fallback"), "fallback");

        let err = ClientError::Api {
            status: 500,
            message: String::new(),
        };
        assert_eq!(err.banner_message("fallback"), "fallback");
    }
}
