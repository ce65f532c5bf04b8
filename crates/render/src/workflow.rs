//! The generate → fill → review cycle of one client session.

use formgen_types::{FormSpecification, MappedSubmission};

use crate::client::FormApi;
use crate::session::FormSession;
use crate::ValidationErrors;

pub const BLANK_PROMPT_MESSAGE: &str = "Please enter a form description";
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate form. Please try again.";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to submit form. Please try again.";

/// What the session is currently showing.
#[derive(Clone, Debug)]
pub enum View {
    /// Prompt entry.
    Generator,
    /// A generated form being filled in.
    Form(FormSession),
    /// The mapped result of a successful submit.
    Submitted {
        spec: FormSpecification,
        submission: MappedSubmission,
    },
}

/// Result of [`Workflow::submit`].
#[derive(Debug)]
pub enum SubmitOutcome {
    Submitted,
    /// Validation failed; the form is still shown with these messages.
    Invalid(ValidationErrors),
    /// The API call failed; the banner is set and the form is kept.
    Failed,
    /// There is no form to submit.
    NoForm,
}

/// Client session state with a single dismissible error banner.
///
/// Failed operations set the banner and leave the current view untouched.
pub struct Workflow<A> {
    api: A,
    prompt: String,
    view: View,
    error: Option<String>,
}

impl<A: FormApi> Workflow<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            prompt: String::new(),
            view: View::Generator,
            error: None,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// The form being filled in, if any.
    pub fn form_mut(&mut self) -> Option<&mut FormSession> {
        match &mut self.view {
            View::Form(session) => Some(session),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Sends the trimmed prompt and, on success, shows the generated form.
    ///
    /// A blank prompt is rejected locally without calling the API.
    pub async fn generate(&mut self) -> bool {
        let prompt = self.prompt.trim().to_string();
        if prompt.is_empty() {
            self.error = Some(BLANK_PROMPT_MESSAGE.to_string());
            return false;
        }

        self.error = None;
        match self.api.generate_form(&prompt).await {
            Ok(spec) => {
                tracing::debug!("generated form {:?} with {} fields", spec.title, spec.fields.len());
                self.view = View::Form(FormSession::new(spec));
                true
            }
            Err(err) => {
                tracing::warn!("form generation failed: {err}");
                self.error = Some(err.banner_message(GENERATE_FAILED_MESSAGE));
                false
            }
        }
    }

    /// Validates the current form and, if it passes, submits it for mapping.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let View::Form(session) = &mut self.view else {
            return SubmitOutcome::NoForm;
        };
        let (values, spec) = match session.submit(|values, spec| (values.clone(), spec.clone())) {
            Ok(payload) => payload,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        self.error = None;
        match self.api.submit_form(&values, &spec).await {
            Ok(submission) => {
                self.view = View::Submitted { spec, submission };
                SubmitOutcome::Submitted
            }
            Err(err) => {
                tracing::warn!("form submission failed: {err}");
                self.error = Some(err.banner_message(SUBMIT_FAILED_MESSAGE));
                SubmitOutcome::Failed
            }
        }
    }

    /// Back to prompt entry with everything cleared.
    pub fn reset(&mut self) {
        self.prompt.clear();
        self.view = View::Generator;
        self.error = None;
    }
}
