//! HTTP client for the heart disease prediction service.

use serde::{Deserialize, Serialize};

use crate::config::{BackendConfig, BaseUrl};
use crate::form::SubmissionVector;
use crate::http_client;

const MAX_PREDICTION_RESPONSE_BYTES: usize = 64 * 1024;
const MAX_STATUS_RESPONSE_BYTES: usize = 16 * 1024;
/// Longest body excerpt kept in error messages.
const ERROR_BODY_PREVIEW_CHARS: usize = 512;

/// Binary output of one model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RiskLabel {
    Low,
    High,
}

impl RiskLabel {
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            0 => Some(Self::Low),
            1 => Some(Self::High),
            _ => None,
        }
    }

    pub fn as_wire(self) -> i64 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    pub fn verdict(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::High => "High Risk",
        }
    }
}

/// Labels returned by the two models behind `/predict`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PredictionResult {
    pub logistic_regression: RiskLabel,
    pub decision_tree: RiskLabel,
}

#[derive(Clone, Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub features: &'a SubmissionVector,
}

/// Liveness message reported by `GET /`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceStatus {
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("HTTP {code}: {body}")]
    Status { code: u16, body: String },
    #[error("HTTP error: {0}")]
    Transport(String),
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("JSON error: {0}")]
    Json(String),
    #[error("Response is missing the '{0}' label")]
    MissingLabel(&'static str),
    #[error("Label '{model}' must be 0 or 1, got {value}")]
    InvalidLabel { model: &'static str, value: i64 },
}

/// Blocking client bound to one service origin.
#[derive(Clone)]
pub struct PredictionClient {
    agent: ureq::Agent,
    base_url: BaseUrl,
}

impl std::fmt::Debug for PredictionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredictionClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PredictionClient {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            agent: http_client::build_agent(config.request_timeout),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Submit one feature vector and validate both labels of the reply.
    pub fn predict(&self, features: &SubmissionVector) -> Result<PredictionResult, PredictError> {
        let url = self.base_url.endpoint("/predict");
        let request = self
            .agent
            .post(&url)
            .set("Accept", "application/json")
            .set("Content-Type", "application/json");
        let response = request
            .send_json(PredictRequest { features })
            .map_err(map_ureq_error)?;
        let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
            .map_err(|err| PredictError::Body(err.to_string()))?;
        parse_prediction_response(&body)
    }

    /// Probe the service root.
    pub fn service_status(&self) -> Result<ServiceStatus, PredictError> {
        let url = self.base_url.endpoint("/");
        let response = self
            .agent
            .get(&url)
            .set("Accept", "application/json")
            .call()
            .map_err(map_ureq_error)?;
        let body = http_client::read_response_text(response, MAX_STATUS_RESPONSE_BYTES)
            .map_err(|err| PredictError::Body(err.to_string()))?;
        Ok(parse_service_status(&body))
    }
}

fn map_ureq_error(err: ureq::Error) -> PredictError {
    match err {
        ureq::Error::Status(code, response) => {
            let body = http_client::read_response_text(response, MAX_PREDICTION_RESPONSE_BYTES)
                .unwrap_or_else(|err| format!("<unreadable body: {err}>"));
            PredictError::Status {
                code,
                body: preview(&body),
            }
        }
        ureq::Error::Transport(err) => PredictError::Transport(err.to_string()),
    }
}

#[derive(Debug, Deserialize)]
struct PredictionResponseWire {
    logistic_regression: Option<i64>,
    decision_tree: Option<i64>,
}

fn parse_prediction_response(body: &str) -> Result<PredictionResult, PredictError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(PredictError::Json("Empty response body".to_string()));
    }
    let wire: PredictionResponseWire = serde_json::from_str(trimmed)
        .map_err(|err| PredictError::Json(format!("{err}: {}", preview(trimmed))))?;
    Ok(PredictionResult {
        logistic_regression: label("logistic_regression", wire.logistic_regression)?,
        decision_tree: label("decision_tree", wire.decision_tree)?,
    })
}

fn label(model: &'static str, value: Option<i64>) -> Result<RiskLabel, PredictError> {
    let value = value.ok_or(PredictError::MissingLabel(model))?;
    RiskLabel::from_wire(value).ok_or(PredictError::InvalidLabel { model, value })
}

fn parse_service_status(body: &str) -> ServiceStatus {
    let message = serde_json::from_str::<serde_json::Value>(body.trim())
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_string)
        });
    ServiceStatus { message }
}

fn preview(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(ERROR_BODY_PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}…", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
