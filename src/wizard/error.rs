use thiserror::Error;

/// Required fields of a step that were empty when it was validated.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("step '{step}' is missing required fields: {}", .fields.join(", "))]
pub struct ValidationError {
    pub step: &'static str,
    pub fields: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error(transparent)]
    Incomplete(#[from] ValidationError),
    #[error("already on the last step")]
    NoNextStep,
    #[error("already on the first step")]
    NoPreviousStep,
    #[error("the form can only be submitted from the last step")]
    NotOnFinalStep,
    #[error("a submission is already in flight")]
    SubmitInFlight,
    #[error("the form has already been submitted")]
    Finished,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    /// The endpoint answered with a non-success status.
    #[error("HTTP {status}: {detail}")]
    Status { status: u16, detail: String },
    /// The request never got an answer (offline, blocked, CORS).
    #[error("{0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Connectivity,
    NotFound,
    Forbidden,
    Generic,
}

impl SubmissionError {
    pub fn status(status: u16, body: &str) -> Self {
        let detail = if body.trim().is_empty() {
            "Form submission failed".to_string()
        } else {
            body.trim().to_string()
        };
        SubmissionError::Status { status, detail }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            SubmissionError::Transport(_) => FailureKind::Connectivity,
            SubmissionError::Status { status: 404, .. } => FailureKind::NotFound,
            SubmissionError::Status { status: 403, .. } => FailureKind::Forbidden,
            SubmissionError::Status { .. } => FailureKind::Generic,
        }
    }
}

impl FailureKind {
    pub fn message(self) -> &'static str {
        match self {
            FailureKind::Connectivity => "Network error: Please check your internet connection.",
            FailureKind::NotFound => "Form endpoint not found. Please contact support.",
            FailureKind::Forbidden => "Form submission not allowed. Please contact support.",
            FailureKind::Generic => "There was an error submitting your form.",
        }
    }
}
