use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::models::scores::Scores;
use crate::models::triage::{TriageColor, TriageLevel, TriageResult};
use crate::models::vitals::VitalSigns;
use crate::range::ValueRange;

pub const AGE_RANGE: ValueRange = ValueRange::new(0.0, 120.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ArrivalMode {
    #[default]
    Walking,
    Ambulance,
    Icu,
}

/// Demographic part of a triage submission, as entered on the form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PatientIntake {
    #[serde(default)]
    pub patient_id: String,
    pub age: Option<i64>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub arrival_mode: ArrivalMode,
    pub chief_complaint: Option<String>,
    pub assessed_by: Option<String>,
}

/// Normalized demographics: trimmed identity, blank text dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demographics {
    pub patient_id: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    pub arrival_mode: ArrivalMode,
    pub chief_complaint: Option<String>,
    pub assessed_by: Option<String>,
}

impl PatientIntake {
    pub fn validate(&self) -> Result<Demographics, CoreError> {
        let patient_id = self.patient_id.trim();
        if patient_id.is_empty() {
            return Err(CoreError::MissingField("patientId".to_string()));
        }

        let age = match self.age {
            Some(age) => {
                AGE_RANGE.check("age", age as f64)?;
                Some(age as u8)
            }
            None => None,
        };

        Ok(Demographics {
            patient_id: patient_id.to_string(),
            age,
            gender: self.gender,
            arrival_mode: self.arrival_mode,
            chief_complaint: non_blank(self.chief_complaint.as_deref()),
            assessed_by: non_blank(self.assessed_by.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// A persisted triage record, keyed by `patient_id`.
///
/// Scores that are missing, null, or not a whole number in `0..=255`
/// deserialize as 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientRecord {
    pub patient_id: String,
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub arrival_mode: ArrivalMode,
    pub chief_complaint: Option<String>,
    pub admission_time: jiff::Timestamp,
    pub triage_level: TriageLevel,
    pub triage_color: TriageColor,
    #[serde(default, deserialize_with = "score_or_zero")]
    pub priority_score: u8,
    #[serde(default, deserialize_with = "score_or_zero")]
    pub news_score: u8,
    #[serde(default, deserialize_with = "score_or_zero")]
    pub mews_score: u8,
    #[serde(default, deserialize_with = "score_or_zero")]
    pub qsofa_score: u8,
    pub assessed_by: Option<String>,
    pub gcs_score: Option<u8>,
}

impl PatientRecord {
    pub fn from_assessment(
        demographics: Demographics,
        vitals: &VitalSigns,
        scores: Scores,
        triage: &TriageResult,
        admission_time: jiff::Timestamp,
    ) -> Self {
        Self {
            patient_id: demographics.patient_id,
            age: demographics.age,
            gender: demographics.gender,
            arrival_mode: demographics.arrival_mode,
            chief_complaint: demographics.chief_complaint,
            admission_time,
            triage_level: triage.level,
            triage_color: triage.color,
            priority_score: triage.priority_score,
            news_score: scores.news,
            mews_score: scores.mews,
            qsofa_score: scores.qsofa,
            assessed_by: demographics.assessed_by,
            gcs_score: vitals.gcs_score,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
#[allow(dead_code)]
enum StoredScore {
    Number(f64),
    Other(IgnoredAny),
}

fn score_or_zero<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let score = match StoredScore::deserialize(deserializer)? {
        StoredScore::Number(n) if n.fract() == 0.0 && (0.0..=f64::from(u8::MAX)).contains(&n) => {
            n as u8
        }
        _ => 0,
    };
    Ok(score)
}
