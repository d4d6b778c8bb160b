use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::range::{ValidationError, ValueRange};

pub const RESPIRATORY_RATE_RANGE: ValueRange = ValueRange::new(0.0, 60.0);
pub const SPO2_RANGE: ValueRange = ValueRange::new(50.0, 100.0);
pub const HEART_RATE_RANGE: ValueRange = ValueRange::new(20.0, 250.0);
pub const SYSTOLIC_BP_RANGE: ValueRange = ValueRange::new(40.0, 280.0);
pub const DIASTOLIC_BP_RANGE: ValueRange = ValueRange::new(20.0, 180.0);
pub const TEMPERATURE_RANGE: ValueRange = ValueRange::new(30.0, 44.0);
pub const GCS_RANGE: ValueRange = ValueRange::new(3.0, 15.0);
/// Litres per minute.
pub const OXYGEN_FLOW_RANGE: ValueRange = ValueRange::new(0.0, 15.0);

/// AVPU consciousness scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Consciousness {
    #[default]
    Alert,
    Voice,
    Pain,
    Unresponsive,
}

impl Consciousness {
    pub fn is_alert(self) -> bool {
        self == Consciousness::Alert
    }
}

/// A validated set of vital signs for one assessment.
///
/// Fields past `consciousness` are recorded for the chart but do not feed
/// any score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VitalSigns {
    /// Breaths per minute.
    pub respiratory_rate: u16,
    /// Peripheral oxygen saturation, percent.
    pub spo2: u16,
    pub oxygen_supplementation: bool,
    /// Beats per minute.
    pub heart_rate: u16,
    /// mmHg.
    #[serde(rename = "systolicBP")]
    pub systolic_bp: u16,
    /// Degrees Celsius.
    pub temperature: f64,
    #[serde(rename = "consciousnessLevel")]
    pub consciousness: Consciousness,
    pub gcs_score: Option<u8>,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: Option<u16>,
    pub oxygen_flow: Option<f64>,
}

/// Raw vital signs as submitted by a form. Every field may be absent;
/// [`VitalsInput::validate`] turns this into [`VitalSigns`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VitalsInput {
    pub respiratory_rate: Option<i64>,
    pub spo2: Option<i64>,
    pub oxygen_supplementation: Option<bool>,
    pub oxygen_flow: Option<f64>,
    pub heart_rate: Option<i64>,
    #[serde(rename = "systolicBP")]
    pub systolic_bp: Option<i64>,
    #[serde(rename = "diastolicBP")]
    pub diastolic_bp: Option<i64>,
    pub temperature: Option<f64>,
    #[serde(rename = "consciousnessLevel")]
    pub consciousness: Option<Consciousness>,
    pub gcs_score: Option<i64>,
}

impl VitalsInput {
    /// Reject missing required fields and out-of-range values.
    ///
    /// Absent consciousness means alert, absent oxygen supplementation means
    /// none unless a positive oxygen flow was recorded.
    pub fn validate(&self) -> Result<VitalSigns, CoreError> {
        let respiratory_rate = required_int(
            "respiratoryRate",
            self.respiratory_rate,
            RESPIRATORY_RATE_RANGE,
        )?;
        let spo2 = required_int("spo2", self.spo2, SPO2_RANGE)?;
        let heart_rate = required_int("heartRate", self.heart_rate, HEART_RATE_RANGE)?;
        let systolic_bp = required_int("systolicBP", self.systolic_bp, SYSTOLIC_BP_RANGE)?;

        let temperature = self
            .temperature
            .ok_or_else(|| CoreError::MissingField("temperature".to_string()))?;
        TEMPERATURE_RANGE.check("temperature", temperature)?;

        let diastolic_bp = self
            .diastolic_bp
            .map(|v| int_in_range("diastolicBP", v, DIASTOLIC_BP_RANGE))
            .transpose()?;
        let gcs_score = self
            .gcs_score
            .map(|v| int_in_range("gcsScore", v, GCS_RANGE).map(|gcs| gcs as u8))
            .transpose()?;
        if let Some(flow) = self.oxygen_flow {
            OXYGEN_FLOW_RANGE.check("oxygenFlow", flow)?;
        }

        let oxygen_supplementation = self.oxygen_supplementation.unwrap_or(false)
            || self.oxygen_flow.is_some_and(|flow| flow > 0.0);

        Ok(VitalSigns {
            respiratory_rate,
            spo2,
            oxygen_supplementation,
            heart_rate,
            systolic_bp,
            temperature,
            consciousness: self.consciousness.unwrap_or_default(),
            gcs_score,
            diastolic_bp,
            oxygen_flow: self.oxygen_flow,
        })
    }
}

fn required_int(field: &str, value: Option<i64>, range: ValueRange) -> Result<u16, CoreError> {
    let value = value.ok_or_else(|| CoreError::MissingField(field.to_string()))?;
    Ok(int_in_range(field, value, range)?)
}

// Every range above fits in u16, so the cast after the check is lossless.
fn int_in_range(field: &str, value: i64, range: ValueRange) -> Result<u16, ValidationError> {
    range.check(field, value as f64)?;
    Ok(value as u16)
}
