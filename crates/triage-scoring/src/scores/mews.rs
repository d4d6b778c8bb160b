use triage_core::models::vitals::{Consciousness, VitalSigns};

use crate::EarlyWarningScore;
use crate::scoring::{Band, Parameter, ParameterScore, band_points};

/// MEWS: Modified Early Warning Score.
/// Five parameters, full AVPU weighting. Total 0–14.
pub struct Mews;

const RESPIRATORY_RATE: &[Band<u16>] = &[
    Band::below(9, 2),
    Band::at_most(14, 0),
    Band::at_most(20, 1),
    Band::at_most(29, 2),
    Band::otherwise(3),
];

const HEART_RATE: &[Band<u16>] = &[
    Band::below(40, 2),
    Band::at_most(50, 1),
    Band::at_most(100, 0),
    Band::at_most(110, 1),
    Band::at_most(129, 2),
    Band::otherwise(3),
];

const SYSTOLIC_BP: &[Band<u16>] = &[
    Band::below(70, 3),
    Band::at_most(80, 2),
    Band::at_most(100, 1),
    Band::at_most(199, 0),
    Band::otherwise(2),
];

const TEMPERATURE: &[Band<f64>] = &[
    Band::below(35.0, 2),
    Band::at_most(38.4, 0),
    Band::otherwise(2),
];

impl EarlyWarningScore for Mews {
    fn id(&self) -> &str {
        "mews"
    }

    fn name(&self) -> &str {
        "MEWS"
    }

    fn max(&self) -> u8 {
        14
    }

    fn breakdown(&self, vitals: &VitalSigns) -> Vec<ParameterScore> {
        let consciousness = match vitals.consciousness {
            Consciousness::Alert => 0,
            Consciousness::Voice => 1,
            Consciousness::Pain => 2,
            Consciousness::Unresponsive => 3,
        };

        vec![
            ParameterScore::new(
                Parameter::RespiratoryRate,
                band_points(RESPIRATORY_RATE, vitals.respiratory_rate),
            ),
            ParameterScore::new(
                Parameter::HeartRate,
                band_points(HEART_RATE, vitals.heart_rate),
            ),
            ParameterScore::new(
                Parameter::SystolicBp,
                band_points(SYSTOLIC_BP, vitals.systolic_bp),
            ),
            ParameterScore::new(
                Parameter::Temperature,
                band_points(TEMPERATURE, vitals.temperature),
            ),
            ParameterScore::new(Parameter::Consciousness, consciousness),
        ]
    }
}
