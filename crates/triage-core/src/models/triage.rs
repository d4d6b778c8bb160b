use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Triage tier, ordered from most to least severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum TriageLevel {
    Resuscitation,
    Emergency,
    Urgent,
    SemiUrgent,
    NonUrgent,
}

impl TriageLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            TriageLevel::Resuscitation => "resuscitation",
            TriageLevel::Emergency => "emergency",
            TriageLevel::Urgent => "urgent",
            TriageLevel::SemiUrgent => "semi-urgent",
            TriageLevel::NonUrgent => "non-urgent",
        }
    }

    pub fn color(self) -> TriageColor {
        match self {
            TriageLevel::Resuscitation => TriageColor::Red,
            TriageLevel::Emergency => TriageColor::Orange,
            TriageLevel::Urgent => TriageColor::Yellow,
            TriageLevel::SemiUrgent => TriageColor::Green,
            TriageLevel::NonUrgent => TriageColor::Blue,
        }
    }

    /// Lowest priority score a patient in this tier may carry.
    pub fn priority_floor(self) -> u8 {
        match self {
            TriageLevel::Resuscitation => 90,
            TriageLevel::Emergency => 70,
            TriageLevel::Urgent => 50,
            TriageLevel::SemiUrgent => 30,
            TriageLevel::NonUrgent => 10,
        }
    }

    pub fn requires_escalation(self) -> bool {
        matches!(self, TriageLevel::Resuscitation | TriageLevel::Emergency)
    }

    /// Display label shown on the result card.
    pub fn label(self) -> &'static str {
        match self {
            TriageLevel::Resuscitation => "РЕАНИМАЦИЯ",
            TriageLevel::Emergency => "ЭКСТРЕННАЯ",
            TriageLevel::Urgent => "СРОЧНАЯ",
            TriageLevel::SemiUrgent => "ПОЛУСРОЧНАЯ",
            TriageLevel::NonUrgent => "НЕСРОЧНАЯ",
        }
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum TriageColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
}

impl TriageColor {
    pub const ALL: [TriageColor; 5] = [
        TriageColor::Red,
        TriageColor::Orange,
        TriageColor::Yellow,
        TriageColor::Green,
        TriageColor::Blue,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TriageColor::Red => "red",
            TriageColor::Orange => "orange",
            TriageColor::Yellow => "yellow",
            TriageColor::Green => "green",
            TriageColor::Blue => "blue",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TriageColor::Red => "КРАСНАЯ",
            TriageColor::Orange => "ОРАНЖЕВАЯ",
            TriageColor::Yellow => "ЖЁЛТАЯ",
            TriageColor::Green => "ЗЕЛЁНАЯ",
            TriageColor::Blue => "СИНЯЯ",
        }
    }

    /// Inverse of [`TriageLevel::color`].
    pub fn level(self) -> TriageLevel {
        match self {
            TriageColor::Red => TriageLevel::Resuscitation,
            TriageColor::Orange => TriageLevel::Emergency,
            TriageColor::Yellow => TriageLevel::Urgent,
            TriageColor::Green => TriageLevel::SemiUrgent,
            TriageColor::Blue => TriageLevel::NonUrgent,
        }
    }
}

impl fmt::Display for TriageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TriageResult {
    pub level: TriageLevel,
    pub color: TriageColor,
    /// 0–100, never below the tier's floor.
    pub priority_score: u8,
    pub immediate_actions: Vec<String>,
    pub monitoring_plan: Vec<String>,
    pub investigations_needed: Vec<String>,
    pub escalation_required: bool,
}
