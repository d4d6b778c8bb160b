use thiserror::Error;

use crate::range::ValidationError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}
