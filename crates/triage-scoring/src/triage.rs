use triage_core::models::features::{ClinicalFeature, ClinicalFeatures};
use triage_core::models::scores::Scores;
use triage_core::models::triage::{TriageLevel, TriageResult};
use triage_core::models::vitals::{Consciousness, VitalSigns};

use crate::catalog;

/// A single red-flag condition that can place a patient in a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Criterion {
    QsofaAtLeast(u8),
    NewsAtLeast(u8),
    MewsAtLeast(u8),
    NewsAbove(u8),
    MewsAbove(u8),
    Consciousness(Consciousness),
    Spo2Below(u16),
    SystolicBelow(u16),
    TemperatureAbove(f64),
    TemperatureBelow(f64),
    Feature(ClinicalFeature),
}

impl Criterion {
    pub fn is_met(&self, scores: &Scores, vitals: &VitalSigns, features: &ClinicalFeatures) -> bool {
        match *self {
            Criterion::QsofaAtLeast(n) => scores.qsofa >= n,
            Criterion::NewsAtLeast(n) => scores.news >= n,
            Criterion::MewsAtLeast(n) => scores.mews >= n,
            Criterion::NewsAbove(n) => scores.news > n,
            Criterion::MewsAbove(n) => scores.mews > n,
            Criterion::Consciousness(level) => vitals.consciousness == level,
            Criterion::Spo2Below(limit) => vitals.spo2 < limit,
            Criterion::SystolicBelow(limit) => vitals.systolic_bp < limit,
            Criterion::TemperatureAbove(limit) => vitals.temperature > limit,
            Criterion::TemperatureBelow(limit) => vitals.temperature < limit,
            Criterion::Feature(feature) => features.has(feature),
        }
    }
}

struct Tier {
    level: TriageLevel,
    criteria: &'static [Criterion],
}

/// Tiers in descending severity. A patient matching none is non-urgent.
const LADDER: &[Tier] = &[
    Tier {
        level: TriageLevel::Resuscitation,
        criteria: &[
            Criterion::QsofaAtLeast(2),
            Criterion::NewsAtLeast(7),
            Criterion::Consciousness(Consciousness::Unresponsive),
            Criterion::Spo2Below(85),
            Criterion::SystolicBelow(70),
            Criterion::Feature(ClinicalFeature::Seizures),
        ],
    },
    Tier {
        level: TriageLevel::Emergency,
        criteria: &[
            Criterion::NewsAtLeast(5),
            Criterion::MewsAtLeast(5),
            Criterion::Feature(ClinicalFeature::ChestPain),
            Criterion::Feature(ClinicalFeature::Bleeding),
            Criterion::Spo2Below(90),
            Criterion::SystolicBelow(90),
        ],
    },
    Tier {
        level: TriageLevel::Urgent,
        criteria: &[
            Criterion::NewsAtLeast(3),
            Criterion::MewsAtLeast(3),
            Criterion::Feature(ClinicalFeature::Dyspnea),
            Criterion::Feature(ClinicalFeature::Trauma),
            Criterion::TemperatureAbove(38.5),
            Criterion::TemperatureBelow(36.0),
        ],
    },
    Tier {
        level: TriageLevel::SemiUrgent,
        criteria: &[Criterion::NewsAbove(0), Criterion::MewsAbove(0)],
    },
];

/// Walk the ladder and return the first tier with a met criterion, together
/// with the criteria of that tier that were met.
pub fn determine_level(
    scores: &Scores,
    vitals: &VitalSigns,
    features: &ClinicalFeatures,
) -> (TriageLevel, Vec<Criterion>) {
    for tier in LADDER {
        let met: Vec<Criterion> = tier
            .criteria
            .iter()
            .filter(|c| c.is_met(scores, vitals, features))
            .copied()
            .collect();
        if !met.is_empty() {
            return (tier.level, met);
        }
    }
    (TriageLevel::NonUrgent, Vec::new())
}

/// Weighted sum of the three scores, capped at 100.
pub fn base_priority(scores: &Scores) -> u8 {
    let weighted =
        u32::from(scores.news) * 4 + u32::from(scores.mews) * 3 + u32::from(scores.qsofa) * 10;
    weighted.min(100) as u8
}

/// Classify one assessment into a triage tier with its action lists.
pub fn classify(scores: &Scores, vitals: &VitalSigns, features: &ClinicalFeatures) -> TriageResult {
    let (level, _) = determine_level(scores, vitals, features);
    result_for(level, scores)
}

pub(crate) fn result_for(level: TriageLevel, scores: &Scores) -> TriageResult {
    TriageResult {
        level,
        color: level.color(),
        priority_score: base_priority(scores).max(level.priority_floor()),
        immediate_actions: owned_lines(catalog::immediate_actions(level)),
        monitoring_plan: owned_lines(catalog::monitoring_plan(level)),
        investigations_needed: owned_lines(catalog::investigations(level)),
        escalation_required: level.requires_escalation(),
    }
}

fn owned_lines(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}
