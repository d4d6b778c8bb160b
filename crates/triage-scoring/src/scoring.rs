use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Upper edge of a scoring band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit<T> {
    /// Value is less than or equal to the bound.
    AtMost(T),
    /// Value is strictly less than the bound.
    Below(T),
    /// Catch-all for the last band of a table.
    Otherwise,
}

/// One row of a threshold table: values up to `limit` score `points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub limit: Limit<T>,
    pub points: u8,
}

impl<T: PartialOrd + Copy> Band<T> {
    pub const fn at_most(bound: T, points: u8) -> Self {
        Self {
            limit: Limit::AtMost(bound),
            points,
        }
    }

    pub const fn below(bound: T, points: u8) -> Self {
        Self {
            limit: Limit::Below(bound),
            points,
        }
    }

    pub const fn otherwise(points: u8) -> Self {
        Self {
            limit: Limit::Otherwise,
            points,
        }
    }

    pub fn matches(&self, value: T) -> bool {
        match self.limit {
            Limit::AtMost(bound) => value <= bound,
            Limit::Below(bound) => value < bound,
            Limit::Otherwise => true,
        }
    }
}

/// Points for `value` from an ascending band table. The first matching band
/// wins, so each value lands in exactly one band.
pub fn band_points<T: PartialOrd + Copy>(bands: &[Band<T>], value: T) -> u8 {
    bands
        .iter()
        .find(|band| band.matches(value))
        .map_or(0, |band| band.points)
}

/// A vital-sign parameter that contributes to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Parameter {
    RespiratoryRate,
    Spo2,
    OxygenSupplementation,
    HeartRate,
    SystolicBp,
    Temperature,
    Consciousness,
}

/// Points a single parameter contributed to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ParameterScore {
    pub parameter: Parameter,
    pub points: u8,
}

impl ParameterScore {
    pub fn new(parameter: Parameter, points: u8) -> Self {
        Self { parameter, points }
    }
}

/// Per-parameter breakdown of one score, as shown next to the total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreBreakdown {
    pub id: String,
    pub name: String,
    pub total: u8,
    pub max: u8,
    pub parameters: Vec<ParameterScore>,
}
