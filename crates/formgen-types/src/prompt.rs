/// Errors that can occur when creating a [`Prompt`].
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PromptError {
    /// The input text was empty or contained only whitespace
    #[error("Prompt is required")]
    Blank,
}

/// A free-text form description that is guaranteed to contain non-whitespace content.
///
/// Unlike a trimmed string type, the original text is kept verbatim: the heuristic generator
/// quotes the prompt back in the form description, so leading and trailing whitespace are
/// preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Creates a new `Prompt` from the given input.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(Prompt)` if the input has at least one non-whitespace character,
    /// or `Err(PromptError::Blank)` otherwise.
    pub fn new(input: impl AsRef<str>) -> Result<Self, PromptError> {
        let text = input.as_ref();
        if text.trim().is_empty() {
            return Err(PromptError::Blank);
        }
        Ok(Self(text.to_owned()))
    }

    /// Returns the prompt text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the lowercased prompt, used for trigger-word matching.
    pub fn lowercase(&self) -> String {
        self.0.to_lowercase()
    }
}

impl std::fmt::Display for Prompt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Prompt {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Prompt {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for Prompt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Prompt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Prompt::new(&s).map_err(serde::de::Error::custom)
    }
}
