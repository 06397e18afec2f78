//! Outbound calls to the remote heart disease prediction service.
//!
//! The service runs two models (logistic regression, decision tree) and
//! answers `POST /predict` with one binary label per model.

pub mod api;

pub use api::{PredictError, PredictionClient, PredictionResult, RiskLabel, ServiceStatus};
