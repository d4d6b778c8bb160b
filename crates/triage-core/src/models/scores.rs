use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The three early-warning scores computed for one set of vitals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Scores {
    /// National Early Warning Score, 0–20.
    pub news: u8,
    /// Modified Early Warning Score, 0–14.
    pub mews: u8,
    /// Quick SOFA, 0–3.
    pub qsofa: u8,
}
