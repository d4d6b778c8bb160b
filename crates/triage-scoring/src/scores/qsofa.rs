use triage_core::models::vitals::VitalSigns;

use crate::EarlyWarningScore;
use crate::scoring::{Band, Parameter, ParameterScore, band_points};

/// qSOFA: quick Sequential Organ Failure Assessment.
/// Three binary criteria, one point each. Total 0–3.
pub struct Qsofa;

const RESPIRATORY_RATE: &[Band<u16>] = &[Band::below(22, 0), Band::otherwise(1)];

const SYSTOLIC_BP: &[Band<u16>] = &[Band::at_most(100, 1), Band::otherwise(0)];

impl EarlyWarningScore for Qsofa {
    fn id(&self) -> &str {
        "qsofa"
    }

    fn name(&self) -> &str {
        "qSOFA"
    }

    fn max(&self) -> u8 {
        3
    }

    fn breakdown(&self, vitals: &VitalSigns) -> Vec<ParameterScore> {
        vec![
            ParameterScore::new(
                Parameter::RespiratoryRate,
                band_points(RESPIRATORY_RATE, vitals.respiratory_rate),
            ),
            ParameterScore::new(
                Parameter::Consciousness,
                u8::from(!vitals.consciousness.is_alert()),
            ),
            ParameterScore::new(
                Parameter::SystolicBp,
                band_points(SYSTOLIC_BP, vitals.systolic_bp),
            ),
        ]
    }
}
