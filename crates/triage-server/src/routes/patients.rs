use axum::Json;
use axum::extract::{Path, State};

use triage_core::models::patient::PatientRecord;

use crate::error::ApiError;
use crate::state::AppState;

/// Work list: highest priority first.
pub async fn list_patients(
    State(state): State<AppState>,
) -> Result<Json<Vec<PatientRecord>>, ApiError> {
    Ok(Json(state.store.list_by_priority()?))
}

pub async fn get_patient(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PatientRecord>, ApiError> {
    let record = state
        .store
        .get(&id)?
        .ok_or_else(|| ApiError::NotFound(format!("patient not found: {id}")))?;
    Ok(Json(record))
}
