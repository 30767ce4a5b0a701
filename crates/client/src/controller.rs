//! Form-state controller for the prediction request lifecycle.
//!
//! [`PredictionController`] owns the editable [`CustomerInput`] draft,
//! the in-flight flag, the last error message, and the last successful
//! [`PredictionResult`].  State moves idle -> loading -> success/error;
//! a failed request never clears a previously stored result, and the
//! loading flag is cleared unconditionally on both outcomes.

use churn_core::customer::{CustomerField, CustomerInput};
use churn_core::prediction::PredictionResult;

use crate::api::{PredictionApi, PredictionApiError};

/// User-facing message shown for any failed prediction request.
///
/// Every failure cause (network unreachable, non-2xx status, malformed
/// response body) collapses to this one message; the typed error is
/// logged, not surfaced.
pub const PREDICTION_ERROR_MESSAGE: &str = "Error making prediction. Please try again.";

/// Outcome of a [`PredictionController::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service returned a prediction; it is now the current result.
    Predicted(PredictionResult),
    /// The request failed; [`PredictionController::error`] holds the
    /// user-facing message.
    Failed,
    /// A submission was already in flight; this call changed nothing.
    InFlight,
}

/// Owns the draft, the request lifecycle, and the last result for one
/// page view.  Single-owner by construction: only this controller
/// mutates its state, in response to user edits or request completion.
#[derive(Debug, Default)]
pub struct PredictionController {
    draft: CustomerInput,
    result: Option<PredictionResult>,
    loading: bool,
    error: Option<String>,
}

impl PredictionController {
    /// Create a controller with an empty draft, no result, and no error.
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------
    // Draft editing
    // -----------------------------------------------------------------

    /// Overwrite one draft field, leaving all others untouched.
    ///
    /// No validation happens at edit time; required-field enforcement
    /// is the form shell's concern (see [`CustomerInput::missing_fields`]).
    pub fn update_field(&mut self, field: CustomerField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    // -----------------------------------------------------------------
    // Read state
    // -----------------------------------------------------------------

    /// The current draft, for display and editing.
    pub fn draft(&self) -> &CustomerInput {
        &self.draft
    }

    /// Current value of one draft field.
    pub fn field(&self, field: CustomerField) -> &str {
        self.draft.get(field)
    }

    /// Whether a submission is in flight (disables the submit control).
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message from the last failed submission, cleared by the next
    /// submit attempt.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The last successful prediction, kept until overwritten by the
    /// next successful submission.
    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    // -----------------------------------------------------------------
    // Submission lifecycle
    // -----------------------------------------------------------------

    /// Begin a submission: mark the controller loading, clear any prior
    /// error, and snapshot the draft to send.  The prior result stays
    /// in place until the call resolves.
    ///
    /// Returns `None` if a submission is already in flight; overlapping
    /// submits are ignored rather than queued or cancelled.
    pub fn begin_submit(&mut self) -> Option<CustomerInput> {
        if self.loading {
            tracing::debug!("Ignoring submit while a request is in flight");
            return None;
        }
        self.loading = true;
        self.error = None;
        Some(self.draft.clone())
    }

    /// Apply the outcome of the network call.
    ///
    /// Clears the loading flag unconditionally.  On success the result
    /// replaces any prior one; on failure the prior result is left
    /// untouched and the fixed user-facing message is stored.
    pub fn complete_submit(
        &mut self,
        response: Result<PredictionResult, PredictionApiError>,
    ) -> SubmitOutcome {
        self.loading = false;
        match response {
            Ok(result) => {
                tracing::info!(
                    customer_id = %result.customer_id,
                    prediction = result.prediction,
                    "Prediction received"
                );
                self.result = Some(result.clone());
                SubmitOutcome::Predicted(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "Prediction request failed");
                self.error = Some(PREDICTION_ERROR_MESSAGE.to_string());
                SubmitOutcome::Failed
            }
        }
    }

    /// Drive a full submission against the given API client.
    ///
    /// Composition of [`begin_submit`](Self::begin_submit) and
    /// [`complete_submit`](Self::complete_submit); errors travel as
    /// values, so the loading flag cannot get stuck on any path.
    pub async fn submit(&mut self, api: &PredictionApi) -> SubmitOutcome {
        let Some(draft) = self.begin_submit() else {
            return SubmitOutcome::InFlight;
        };
        let response = api.predict(&draft).await;
        self.complete_submit(response)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
