use serde::Serialize;

use super::schema::FIELD_COUNT;
use super::state::FormState;

/// Message shown to the user when any field fails to parse.
pub const VALIDATION_MESSAGE: &str = "Please fill in all fields correctly.";

/// A field value that could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Field '{field}' is not a number: {value:?}")]
pub struct ValidationError {
    /// First field, in wire order, that failed to parse.
    pub field: &'static str,
    /// Raw value that was rejected.
    pub value: String,
}

/// Numeric encoding of the whole form, in wire order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SubmissionVector([f64; FIELD_COUNT]);

impl SubmissionVector {
    /// Parse every field of `form` in wire order.
    ///
    /// Fails on the first empty, non-numeric or non-finite value.
    pub fn from_form(form: &FormState) -> Result<Self, ValidationError> {
        let mut features = [0.0; FIELD_COUNT];
        for (slot, (descriptor, raw)) in features.iter_mut().zip(form.iter()) {
            *slot = parse_feature(raw).ok_or_else(|| ValidationError {
                field: descriptor.name,
                value: raw.to_string(),
            })?;
        }
        Ok(Self(features))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn parse_feature(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
