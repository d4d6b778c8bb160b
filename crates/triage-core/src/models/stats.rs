use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::triage::TriageColor;

/// Aggregate view over all stored patients. Recomputed on demand.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatsSummary {
    pub total_patients: usize,
    pub red_patients: usize,
    pub orange_patients: usize,
    pub yellow_patients: usize,
    pub green_patients: usize,
    pub blue_patients: usize,
    pub avg_news: f64,
    pub avg_mews: f64,
    pub avg_priority: f64,
}

impl StatsSummary {
    pub fn count_for(&self, color: TriageColor) -> usize {
        match color {
            TriageColor::Red => self.red_patients,
            TriageColor::Orange => self.orange_patients,
            TriageColor::Yellow => self.yellow_patients,
            TriageColor::Green => self.green_patients,
            TriageColor::Blue => self.blue_patients,
        }
    }

    /// Patients needing escalation (red and orange).
    pub fn critical_patients(&self) -> usize {
        self.red_patients + self.orange_patients
    }

    /// Percentage of all patients carrying `color`; 0 when there are none.
    pub fn color_share(&self, color: TriageColor) -> f64 {
        if self.total_patients == 0 {
            return 0.0;
        }
        self.count_for(color) as f64 * 100.0 / self.total_patients as f64
    }
}
