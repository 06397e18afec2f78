use super::jobs::StatusCheckResult;
use super::*;

impl PredictorController {
    /// Ping the service once if launch checks are enabled.
    pub fn check_backend_status_on_launch(&mut self) {
        if self.check_status_on_launch {
            self.check_backend_status();
        }
    }

    /// Ping the service root in the background and report it in the status bar.
    pub fn check_backend_status(&mut self) {
        if self.jobs.status_check_in_progress {
            return;
        }
        self.set_status(
            format!("Contacting {}...", self.client.base_url()),
            StatusTone::Busy,
        );
        self.jobs.begin_status_check(self.client.clone());
    }

    pub fn is_status_check_in_progress(&self) -> bool {
        self.jobs.status_check_in_progress
    }

    pub(super) fn apply_status_check(&mut self, message: StatusCheckResult) {
        self.jobs.clear_status_check();
        if self.is_prediction_in_progress() {
            return;
        }
        match message.result {
            Ok(status) => {
                let text = match status.message {
                    Some(message) => format!("Backend online: {message}"),
                    None => format!("Backend online at {}", self.client.base_url()),
                };
                tracing::info!("{text}");
                self.set_status(text, StatusTone::Info);
            }
            Err(err) => {
                tracing::warn!("Backend status check failed: {err}");
                self.set_status(
                    format!("Backend unreachable at {}", self.client.base_url()),
                    StatusTone::Warning,
                );
            }
        }
    }
}
