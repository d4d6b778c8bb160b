use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("unknown score: {0}")]
    UnknownScore(String),
}
