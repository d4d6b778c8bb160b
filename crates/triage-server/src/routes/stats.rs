use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use triage_core::models::stats::StatsSummary;
use triage_core::models::triage::{TriageColor, TriageLevel};
use triage_scoring::stats;

use crate::error::ApiError;
use crate::state::AppState;

/// One bar of the color distribution chart.
#[derive(Debug, Serialize, Deserialize)]
pub struct ColorShare {
    pub color: TriageColor,
    pub level: TriageLevel,
    pub label: String,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResponse {
    #[serde(flatten)]
    pub summary: StatsSummary,
    pub critical_patients: usize,
    pub distribution: Vec<ColorShare>,
}

impl From<StatsSummary> for StatsResponse {
    fn from(summary: StatsSummary) -> Self {
        let distribution = TriageColor::ALL
            .into_iter()
            .map(|color| ColorShare {
                color,
                level: color.level(),
                label: color.label().to_string(),
                count: summary.count_for(color),
                percent: summary.color_share(color),
            })
            .collect();
        Self {
            critical_patients: summary.critical_patients(),
            distribution,
            summary,
        }
    }
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let records = state.store.load()?;
    Ok(Json(stats::compute(&records).into()))
}
