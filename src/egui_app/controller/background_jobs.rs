use super::jobs::JobMessage;
use super::*;

impl PredictorController {
    /// Apply every finished background job. Returns how many were handled.
    ///
    /// Prediction results are applied in arrival order, so with several
    /// requests in flight the last one to finish decides what is shown.
    pub fn poll_jobs(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(message) = self.jobs.try_recv_message() {
            handled += 1;
            match message {
                JobMessage::PredictionFinished(message) => self.apply_prediction_result(message),
                JobMessage::StatusChecked(message) => self.apply_status_check(message),
            }
        }
        handled
    }
}
