//! Helpers that turn form and result state into renderer-facing views.

use crate::config::{API_URL_ENV, BaseUrl, CONFIG_FILE_NAME, UrlSource};
use crate::egui_app::state::PredictionUiState;
use crate::form::{FIELDS, FieldDescriptor};
use crate::prediction_gateway::{PredictionResult, RiskLabel};

/// Marker next to each field label; hovering it shows the description.
pub const FIELD_INFO_MARKER: &str = "ℹ";

/// Visual treatment of a result panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskTone {
    Danger,
    Safe,
}

/// One model's verdict card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultPanelView {
    pub model_label: &'static str,
    pub verdict: &'static str,
    pub tone: RiskTone,
}

/// What the result area below the form shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResultAreaView {
    Empty,
    Error(String),
    Prediction([ResultPanelView; 2]),
}

/// Label + description pair for the glossary grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlossaryEntryView {
    pub label: &'static str,
    pub description: &'static str,
}

pub fn result_area(state: &PredictionUiState) -> ResultAreaView {
    if let Some(error) = &state.error {
        return ResultAreaView::Error(error.clone());
    }
    match &state.prediction {
        Some(prediction) => ResultAreaView::Prediction(result_panels(prediction)),
        None => ResultAreaView::Empty,
    }
}

/// Logistic regression first, decision tree second.
pub fn result_panels(prediction: &PredictionResult) -> [ResultPanelView; 2] {
    [
        result_panel("Logistic Regression", prediction.logistic_regression),
        result_panel("Decision Tree", prediction.decision_tree),
    ]
}

fn result_panel(model_label: &'static str, label: RiskLabel) -> ResultPanelView {
    ResultPanelView {
        model_label,
        verdict: label.verdict(),
        tone: match label {
            RiskLabel::High => RiskTone::Danger,
            RiskLabel::Low => RiskTone::Safe,
        },
    }
}

/// Glossary rows in catalog order; independent of form and result state.
pub fn glossary_entries() -> Vec<GlossaryEntryView> {
    FIELDS
        .iter()
        .map(|descriptor| GlossaryEntryView {
            label: descriptor.label,
            description: descriptor.description,
        })
        .collect()
}

/// Status bar caption naming the backend and where its URL came from.
pub fn backend_caption(url: &BaseUrl, source: UrlSource) -> String {
    match source {
        UrlSource::Environment => format!("{url} (from {API_URL_ENV})"),
        UrlSource::ConfigFile => format!("{url} (from {CONFIG_FILE_NAME})"),
        UrlSource::Default => format!("{url} (default)"),
    }
}

pub fn submit_button_label(loading: bool) -> &'static str {
    if loading { "Analyzing..." } else { "Predict" }
}

/// Placeholder text for a numeric input.
pub fn numeric_hint(descriptor: &FieldDescriptor) -> String {
    let step = descriptor.effective_step();
    if step.fract() == 0.0 {
        "whole number".to_string()
    } else {
        format!("step {step}")
    }
}

/// Combo box caption for the current raw value.
pub fn selected_option_label(descriptor: &FieldDescriptor, value: &str) -> String {
    descriptor
        .option_for(value)
        .map(|option| option.label.to_string())
        .unwrap_or_else(|| value.to_string())
}
