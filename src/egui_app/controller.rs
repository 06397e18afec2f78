//! Controller that owns the form and bridges it to the prediction service.

mod background_jobs;
mod jobs;
mod predictions;
mod status;

pub use predictions::{BACKEND_MESSAGE, SubmitFailure};

use crate::config::{BackendConfig, BaseUrl, UrlSource};
use crate::egui_app::state::*;
use crate::egui_app::ui::style::StatusTone;
use crate::form::{FormError, FormState};
use crate::prediction_gateway::PredictionClient;
use jobs::ControllerJobs;

/// Maintains app state and bridges core logic to the egui UI.
pub struct PredictorController {
    pub ui: UiState,
    form: FormState,
    client: PredictionClient,
    url_source: UrlSource,
    check_status_on_launch: bool,
    jobs: ControllerJobs,
}

impl PredictorController {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            ui: UiState::default(),
            form: FormState::new(),
            client: PredictionClient::new(config),
            url_source: config.url_source,
            check_status_on_launch: config.check_status_on_launch,
            jobs: ControllerJobs::new(),
        }
    }

    /// Current raw form values.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Apply one user edit. Values are not validated until submit.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        self.form.set_field(name, value).inspect_err(|err| {
            tracing::warn!("Ignoring form edit: {err}");
        })
    }

    pub fn backend_url(&self) -> &BaseUrl {
        self.client.base_url()
    }

    pub fn backend_url_source(&self) -> UrlSource {
        self.url_source
    }

    /// True while at least one prediction request has not reported back.
    pub fn is_prediction_in_progress(&self) -> bool {
        self.jobs.predictions_in_flight > 0
    }

    fn set_status(&mut self, text: impl Into<String>, tone: StatusTone) {
        self.ui.status = StatusBarState::new(text, tone);
    }
}
