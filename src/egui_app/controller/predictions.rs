use super::jobs::{PredictionJob, PredictionJobResult};
use super::*;
use crate::form::{SubmissionVector, VALIDATION_MESSAGE, ValidationError};
use crate::prediction_gateway::{PredictError, PredictionResult};

/// Message shown to the user for any backend or transport failure.
pub const BACKEND_MESSAGE: &str = "Failed to get prediction from backend.";

/// Why a submit cycle ended without a prediction.
///
/// `Display` is the user-facing text; the cause is kept as the error source
/// for diagnostics.
#[derive(Debug, thiserror::Error)]
pub enum SubmitFailure {
    #[error("{}", VALIDATION_MESSAGE)]
    Validation(#[source] ValidationError),
    #[error("{}", BACKEND_MESSAGE)]
    Backend(#[source] PredictError),
}

impl PredictorController {
    /// Start a submit cycle from the current form.
    ///
    /// Validation failures finish the cycle immediately without any network
    /// activity. Otherwise the request runs in the background and
    /// [`PredictorController::poll_jobs`] applies its outcome.
    pub fn submit(&mut self) {
        self.ui.prediction = PredictionUiState::submitting();
        let features = match SubmissionVector::from_form(&self.form) {
            Ok(features) => features,
            Err(err) => {
                self.finish_submission(Err(SubmitFailure::Validation(err)));
                return;
            }
        };
        let request_id = self.jobs.next_request_id();
        tracing::info!(
            request_id,
            url = %self.client.base_url(),
            "Submitting prediction request"
        );
        tracing::debug!(request_id, features = ?features.as_slice(), "Prediction features");
        self.set_status("Analyzing...", StatusTone::Busy);
        self.jobs.begin_prediction(PredictionJob {
            request_id,
            client: self.client.clone(),
            features,
        });
    }

    pub(super) fn apply_prediction_result(&mut self, message: PredictionJobResult) {
        self.jobs.finish_prediction();
        let request_id = message.request_id;
        match message.result {
            Ok(prediction) => {
                tracing::info!(
                    request_id,
                    logistic_regression = prediction.logistic_regression.as_wire(),
                    decision_tree = prediction.decision_tree.as_wire(),
                    "Prediction received"
                );
                self.finish_submission(Ok(prediction));
            }
            Err(err) => {
                tracing::error!(request_id, "Prediction request failed: {err}");
                self.finish_submission(Err(SubmitFailure::Backend(err)));
            }
        }
    }

    /// Swap in the terminal state of a submit cycle; `loading` always ends false.
    fn finish_submission(&mut self, outcome: Result<PredictionResult, SubmitFailure>) {
        match outcome {
            Ok(prediction) => {
                self.ui.prediction = PredictionUiState::succeeded(prediction);
                self.set_status("Prediction complete", StatusTone::Info);
            }
            Err(failure) => {
                if let SubmitFailure::Validation(err) = &failure {
                    tracing::info!("Submission rejected: {err}");
                }
                let tone = match failure {
                    SubmitFailure::Validation(_) => StatusTone::Warning,
                    SubmitFailure::Backend(_) => StatusTone::Error,
                };
                self.set_status(failure.to_string(), tone);
                self.ui.prediction = PredictionUiState::failed(failure.to_string());
            }
        }
    }
}
