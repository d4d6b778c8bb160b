use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Inclusive range of accepted values for an input field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// NaN and infinities are never contained.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn check(&self, field: &str, value: f64) -> Result<(), ValidationError> {
        if self.contains(value) {
            return Ok(());
        }
        Err(ValidationError {
            field: field.to_string(),
            value,
            expected_range: *self,
            message: format!(
                "{field}: {value} is outside range [{}, {}]",
                self.min, self.max
            ),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub field: String,
    pub value: f64,
    pub expected_range: ValueRange,
    pub message: String,
}
