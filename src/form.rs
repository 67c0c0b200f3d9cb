use crate::booking_client::{BookingApi, BookingError};
use crate::domain::{validate, BookingRequest, FormField, ValidationResult};
use crate::storage::{KeyValueStore, SelectionBridge};
use crate::submission::{SubmissionState, SubmissionStatus};

/// Read-only snapshot handed to the change hook after every mutation.
pub struct FormView<'a> {
    pub request: &'a BookingRequest,
    pub errors: &'a ValidationResult,
    pub status: &'a SubmissionStatus,
}

impl FormView<'_> {
    /// Inputs and the submit action are locked while a submission is in flight.
    pub fn inputs_enabled(&self) -> bool {
        !self.status.is_submitting()
    }
}

pub type ChangeHook = Box<dyn FnMut(&FormView<'_>)>;

/// Owns the booking form state and drives it from user events.
///
/// Everything runs on one task: the only suspension point is the booking call inside
/// [`BookingForm::submit`], and edits or submits arriving while it is outstanding are
/// refused.
pub struct BookingForm<S> {
    request: BookingRequest,
    errors: ValidationResult,
    status: SubmissionStatus,
    bridge: SelectionBridge<S>,
    on_change: Option<ChangeHook>,
}

impl<S: KeyValueStore> BookingForm<S> {
    pub fn new(bridge: SelectionBridge<S>) -> Self {
        Self {
            request: BookingRequest::default(),
            errors: ValidationResult::default(),
            status: SubmissionStatus::default(),
            bridge,
            on_change: None,
        }
    }

    pub fn with_change_hook(mut self, hook: impl FnMut(&FormView<'_>) + 'static) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    pub fn request(&self) -> &BookingRequest {
        &self.request
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn selection_bridge(&self) -> &SelectionBridge<S> {
        &self.bridge
    }

    pub fn view(&self) -> FormView<'_> {
        FormView {
            request: &self.request,
            errors: &self.errors,
            status: &self.status,
        }
    }

    /// Restores the options chosen on another page.
    pub fn on_mount(&mut self) {
        let options = self.bridge.load();
        if options.is_empty() {
            return;
        }
        tracing::info!(count = options.len(), "Restored selected options");
        self.request.selected_options = options;
        self.notify();
    }

    /// Returns `false` when the edit was refused because a submission is in flight.
    pub fn on_field_change(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.status.is_submitting() {
            tracing::debug!(%field, "Ignoring an edit while submitting");
            return false;
        }
        self.request.set_field(field, value.into());
        if let Some(error_field) = field.error_field() {
            self.errors.remove(error_field);
        }
        self.notify();
        true
    }

    /// Validates and, when clean, enters `submitting` and hands back the payload to send.
    pub fn begin_submit(&mut self) -> Option<BookingRequest> {
        if self.status.is_submitting() {
            tracing::debug!("Ignoring a submit while another one is in flight");
            return None;
        }
        self.errors = validate(&self.request);
        if !self.errors.is_clean() {
            tracing::debug!(invalid_fields = self.errors.len(), "Booking form failed validation");
            self.notify();
            return None;
        }
        self.status.begin().ok()?;
        self.notify();
        Some(self.request.clone())
    }

    /// Applies the outcome of the booking call started by `begin_submit`.
    pub fn complete_submit(&mut self, outcome: Result<(), BookingError>) {
        let transition = match &outcome {
            Ok(()) => self.status.succeed(),
            Err(e) if e.is_transport() => {
                tracing::error!(error.cause_chain = ?e, "Booking request did not reach the server");
                self.status.lose_connection()
            }
            Err(e) => {
                tracing::warn!(error.cause_chain = ?e, "Booking request was declined");
                self.status.reject(e.detail())
            }
        };
        if let Err(e) = transition {
            tracing::warn!(error = %e, "Dropping a submission outcome");
            return;
        }
        if outcome.is_ok() {
            tracing::info!("Booking request submitted");
            self.request.reset_fields();
            self.bridge.clear();
        }
        self.notify();
    }

    #[tracing::instrument(name = "Submitting the booking form", skip(self, api))]
    pub async fn submit<A: BookingApi>(&mut self, api: &A) -> SubmissionState {
        let Some(payload) = self.begin_submit() else {
            return self.status.state();
        };
        let outcome = api.book(&payload).await;
        self.complete_submit(outcome);
        self.status.state()
    }

    fn notify(&mut self) {
        if let Some(hook) = self.on_change.as_mut() {
            let view = FormView {
                request: &self.request,
                errors: &self.errors,
                status: &self.status,
            };
            hook(&view);
        }
    }
}
