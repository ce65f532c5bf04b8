//! Constants used throughout the formgen core crate.

/// Default OpenAI-compatible API base URL.
pub const DEFAULT_BACKEND_BASE_URL: &str = "https://api.openai.com/v1";

/// Default chat model used for form extraction.
pub const DEFAULT_BACKEND_MODEL: &str = "gpt-3.5-turbo";

/// Sampling temperature for form extraction requests.
pub const DEFAULT_BACKEND_TEMPERATURE: f32 = 0.3;

/// Completion token limit for form extraction requests.
pub const DEFAULT_BACKEND_MAX_TOKENS: u32 = 1000;

/// Default bind address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:5000";

/// Default base URL the CLI uses to reach the REST API.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Number of prompt words the heuristic generator copies into the title.
pub const HEURISTIC_TITLE_WORDS: usize = 5;

/// Suffix appended to heuristic titles.
pub const HEURISTIC_TITLE_SUFFIX: &str = "Registration Form";

/// System instruction sent with every generative request.
pub const FORM_INSTRUCTION: &str = r#"You are a form generation assistant. Extract form requirements from the user's prompt and return ONLY valid JSON (no markdown, no code blocks).

Format: {
  "title": "Form Title",
  "description": "Form description",
  "fields": [
    {
      "name": "field_name_snake_case",
      "label": "Field Label",
      "field_type": "text|email|number|tel|textarea|select|multiselect|date|checkbox",
      "required": true/false,
      "placeholder": "optional placeholder",
      "options": ["option1", "option2"],
      "meta_tags": ["keyword1", "keyword2"]
    }
  ]
}

Important:
- Return ONLY JSON, no markdown formatting
- Use snake_case for field names
- Only include "options" for select and multiselect fields
- Include relevant meta_tags for each field based on the prompt
- Make field_type appropriate for the context"#;
