//! Shared state types for the egui UI.

use crate::egui_app::ui::style::{self, StatusTone};
use crate::prediction_gateway::PredictionResult;
use egui::Color32;

/// Top-level UI model consumed by the egui renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct UiState {
    pub status: StatusBarState,
    pub prediction: PredictionUiState,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            status: StatusBarState::idle(),
            prediction: PredictionUiState::idle(),
        }
    }
}

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    pub text: String,
    pub badge_label: String,
    pub badge_color: Color32,
}

impl StatusBarState {
    pub fn idle() -> Self {
        Self::new("Enter patient details and press Predict", StatusTone::Idle)
    }

    pub fn new(text: impl Into<String>, tone: StatusTone) -> Self {
        let (badge_label, badge_color) = style::status_badge(tone);
        Self {
            text: text.into(),
            badge_label: badge_label.to_string(),
            badge_color,
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionPhase {
    /// Nothing submitted yet.
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Transient result of the latest submit cycle.
///
/// Each transition builds a fresh value; the controller swaps it in whole so
/// `error` and `prediction` are never left half-updated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PredictionUiState {
    pub phase: SubmissionPhase,
    pub loading: bool,
    pub error: Option<String>,
    pub prediction: Option<PredictionResult>,
}

impl PredictionUiState {
    pub fn idle() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            loading: false,
            error: None,
            prediction: None,
        }
    }

    /// Entry state of a submit: previous outcome cleared, loading set.
    pub fn submitting() -> Self {
        Self {
            phase: SubmissionPhase::Submitting,
            loading: true,
            error: None,
            prediction: None,
        }
    }

    pub fn succeeded(prediction: PredictionResult) -> Self {
        Self {
            phase: SubmissionPhase::Succeeded,
            loading: false,
            error: None,
            prediction: Some(prediction),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            phase: SubmissionPhase::Failed,
            loading: false,
            error: Some(message.into()),
            prediction: None,
        }
    }
}

impl Default for PredictionUiState {
    fn default() -> Self {
        Self::idle()
    }
}
