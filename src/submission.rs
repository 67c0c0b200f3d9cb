use std::fmt;

pub const SUBMITTING_MESSAGE: &str = "Submitting your consultation request...";
pub const SUCCESS_MESSAGE: &str =
    "Your consultation request has been submitted successfully! We'll contact you within 24 hours.";
pub const REJECTED_MESSAGE: &str = "Failed to submit your request. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded | SubmissionState::Failed)
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("A submission is already in flight.")]
    AlreadySubmitting,
    #[error("No submission is in flight (state is {0}).")]
    NotSubmitting(SubmissionState),
}

/// Lifecycle of the form's submissions. Exactly one outcome is accepted per attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionStatus {
    state: SubmissionState,
    message: Option<String>,
}

impl SubmissionStatus {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Enters `submitting` from any state but `submitting` itself.
    pub fn begin(&mut self) -> Result<(), TransitionError> {
        if self.is_submitting() {
            return Err(TransitionError::AlreadySubmitting);
        }
        self.enter(SubmissionState::Submitting, SUBMITTING_MESSAGE.to_string());
        Ok(())
    }

    pub fn succeed(&mut self) -> Result<(), TransitionError> {
        self.ensure_submitting()?;
        self.enter(SubmissionState::Succeeded, SUCCESS_MESSAGE.to_string());
        Ok(())
    }

    /// The server answered but declined. An empty `detail` counts as absent.
    pub fn reject(&mut self, detail: Option<&str>) -> Result<(), TransitionError> {
        self.ensure_submitting()?;
        let message = detail
            .filter(|d| !d.is_empty())
            .unwrap_or(REJECTED_MESSAGE)
            .to_string();
        self.enter(SubmissionState::Failed, message);
        Ok(())
    }

    /// No response was obtained from the server.
    pub fn lose_connection(&mut self) -> Result<(), TransitionError> {
        self.ensure_submitting()?;
        self.enter(SubmissionState::Failed, NETWORK_ERROR_MESSAGE.to_string());
        Ok(())
    }

    fn ensure_submitting(&self) -> Result<(), TransitionError> {
        if !self.is_submitting() {
            return Err(TransitionError::NotSubmitting(self.state));
        }
        Ok(())
    }

    fn enter(&mut self, state: SubmissionState, message: String) {
        tracing::debug!(from = %self.state, to = %state, "Submission state changed");
        self.state = state;
        self.message = Some(message);
    }
}
