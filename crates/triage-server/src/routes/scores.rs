use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use triage_scoring::{all_scores, get_score};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct ScoreSummary {
    id: String,
    name: String,
    max: u8,
}

pub async fn list_scores() -> Json<Vec<ScoreSummary>> {
    let scores: Vec<ScoreSummary> = all_scores()
        .iter()
        .map(|s| ScoreSummary {
            id: s.id().to_string(),
            name: s.name().to_string(),
            max: s.max(),
        })
        .collect();
    Json(scores)
}

pub async fn get_score_detail(Path(id): Path<String>) -> Result<Json<ScoreSummary>, ApiError> {
    let score = get_score(&id)?;
    Ok(Json(ScoreSummary {
        id: score.id().to_string(),
        name: score.name().to_string(),
        max: score.max(),
    }))
}
