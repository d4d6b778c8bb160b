use triage_core::models::vitals::{Consciousness, VitalSigns};

use crate::EarlyWarningScore;
use crate::scoring::{Band, Parameter, ParameterScore, band_points};

/// NEWS: National Early Warning Score.
/// Seven parameters; oxygen supplementation adds a flat 2. Total 0–20.
pub struct News;

const RESPIRATORY_RATE: &[Band<u16>] = &[
    Band::at_most(8, 3),
    Band::at_most(11, 1),
    Band::at_most(20, 0),
    Band::at_most(24, 2),
    Band::otherwise(3),
];

const SPO2: &[Band<u16>] = &[
    Band::at_most(91, 3),
    Band::at_most(93, 2),
    Band::at_most(95, 1),
    Band::otherwise(0),
];

const HEART_RATE: &[Band<u16>] = &[
    Band::at_most(40, 3),
    Band::at_most(50, 1),
    Band::at_most(90, 0),
    Band::at_most(110, 1),
    Band::at_most(130, 2),
    Band::otherwise(3),
];

const SYSTOLIC_BP: &[Band<u16>] = &[
    Band::at_most(90, 3),
    Band::at_most(100, 2),
    Band::at_most(110, 1),
    Band::at_most(219, 0),
    Band::otherwise(3),
];

const TEMPERATURE: &[Band<f64>] = &[
    Band::at_most(35.0, 3),
    Band::at_most(36.0, 1),
    Band::at_most(38.0, 0),
    Band::at_most(39.0, 1),
    Band::otherwise(2),
];

const SUPPLEMENTAL_OXYGEN_POINTS: u8 = 2;

impl EarlyWarningScore for News {
    fn id(&self) -> &str {
        "news"
    }

    fn name(&self) -> &str {
        "NEWS"
    }

    fn max(&self) -> u8 {
        20
    }

    fn breakdown(&self, vitals: &VitalSigns) -> Vec<ParameterScore> {
        let oxygen = if vitals.oxygen_supplementation {
            SUPPLEMENTAL_OXYGEN_POINTS
        } else {
            0
        };
        // Any response short of full alertness scores the maximum.
        let consciousness = match vitals.consciousness {
            Consciousness::Alert => 0,
            _ => 3,
        };

        vec![
            ParameterScore::new(
                Parameter::RespiratoryRate,
                band_points(RESPIRATORY_RATE, vitals.respiratory_rate),
            ),
            ParameterScore::new(Parameter::Spo2, band_points(SPO2, vitals.spo2)),
            ParameterScore::new(Parameter::OxygenSupplementation, oxygen),
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
