use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use triage_core::models::features::ClinicalFeatures;
use triage_core::models::patient::{PatientIntake, PatientRecord};
use triage_core::models::vitals::VitalsInput;
use triage_scoring::Assessment;

use crate::error::ApiError;
use crate::state::AppState;

/// One submitted triage form.
#[derive(Debug, Deserialize)]
pub struct AssessmentRequest {
    pub patient: PatientIntake,
    pub vitals: VitalsInput,
    #[serde(default)]
    pub features: ClinicalFeatures,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssessmentResponse {
    #[serde(flatten)]
    pub assessment: Assessment,
    pub record: PatientRecord,
    /// Localized tier and color names for the result card.
    pub level_label: String,
    pub color_label: String,
}

/// Validate, score, classify, and save. A resubmitted patient ID replaces
/// the earlier record.
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(request): Json<AssessmentRequest>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    let demographics = request.patient.validate()?;
    let vitals = request.vitals.validate()?;

    let assessment = triage_scoring::assess(&vitals, &request.features);
    let record = PatientRecord::from_assessment(
        demographics,
        &vitals,
        assessment.scores,
        &assessment.triage,
        jiff::Timestamp::now(),
    );
    state.store.upsert(record.clone())?;

    tracing::info!(
        patient_id = %record.patient_id,
        level = %record.triage_level,
        priority = record.priority_score,
        "assessment saved"
    );

    let level_label = assessment.triage.level.label().to_string();
    let color_label = assessment.triage.color.label().to_string();
    Ok((
        StatusCode::CREATED,
        Json(AssessmentResponse {
            assessment,
            record,
            level_label,
            color_label,
        }),
    ))
}
