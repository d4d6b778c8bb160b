//! triage-scoring
//!
//! Early-warning scores and triage classification. Pure computation over
//! `triage-core` types: no I/O, no shared state, safe to call from any
//! thread.

pub mod catalog;
pub mod error;
pub mod scores;
pub mod scoring;
pub mod stats;
pub mod triage;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use triage_core::models::features::ClinicalFeatures;
use triage_core::models::scores::Scores;
use triage_core::models::triage::TriageResult;
use triage_core::models::vitals::VitalSigns;

use error::ScoringError;
use scoring::{ParameterScore, ScoreBreakdown};

/// Trait implemented by each early-warning score.
pub trait EarlyWarningScore: Send + Sync {
    /// Unique identifier (e.g., "news", "qsofa").
    fn id(&self) -> &str;

    /// Display name (e.g., "NEWS", "qSOFA").
    fn name(&self) -> &str;

    /// Highest total the score can reach.
    fn max(&self) -> u8;

    /// Points per parameter, in table order.
    fn breakdown(&self, vitals: &VitalSigns) -> Vec<ParameterScore>;

    fn score(&self, vitals: &VitalSigns) -> u8 {
        self.breakdown(vitals).iter().map(|p| p.points).sum()
    }

    fn scored_breakdown(&self, vitals: &VitalSigns) -> ScoreBreakdown {
        let parameters = self.breakdown(vitals);
        ScoreBreakdown {
            id: self.id().to_string(),
            name: self.name().to_string(),
            total: parameters.iter().map(|p| p.points).sum(),
            max: self.max(),
            parameters,
        }
    }
}

/// Return all registered scores.
pub fn all_scores() -> Vec<Box<dyn EarlyWarningScore>> {
    vec![
        Box::new(scores::news::News),
        Box::new(scores::mews::Mews),
        Box::new(scores::qsofa::Qsofa),
    ]
}

/// Look up a score by ID.
pub fn get_score(id: &str) -> Result<Box<dyn EarlyWarningScore>, ScoringError> {
    all_scores()
        .into_iter()
        .find(|s| s.id() == id)
        .ok_or_else(|| ScoringError::UnknownScore(id.to_string()))
}

pub fn compute_scores(vitals: &VitalSigns) -> Scores {
    Scores {
        news: scores::news::News.score(vitals),
        mews: scores::mews::Mews.score(vitals),
        qsofa: scores::qsofa::Qsofa.score(vitals),
    }
}

fn scores_from(breakdowns: &[ScoreBreakdown]) -> Scores {
    let total = |id: &str| {
        breakdowns
            .iter()
            .find(|b| b.id == id)
            .map_or(0, |b| b.total)
    };
    Scores {
        news: total(scores::news::News.id()),
        mews: total(scores::mews::Mews.id()),
        qsofa: total(scores::qsofa::Qsofa.id()),
    }
}

/// Scores plus triage outcome for one set of vitals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub scores: Scores,
    pub breakdowns: Vec<ScoreBreakdown>,
    pub triage: TriageResult,
}

/// Score the vitals and classify the patient.
pub fn assess(vitals: &VitalSigns, features: &ClinicalFeatures) -> Assessment {
    let breakdowns: Vec<ScoreBreakdown> = all_scores()
        .iter()
        .map(|s| s.scored_breakdown(vitals))
        .collect();
    let scores = scores_from(&breakdowns);

    let (level, criteria) = triage::determine_level(&scores, vitals, features);
    let result = triage::result_for(level, &scores);

    if result.escalation_required {
        tracing::warn!(
            level = %result.level,
            priority = result.priority_score,
            ?criteria,
            "escalation required"
        );
    } else {
        tracing::debug!(
            level = %result.level,
            priority = result.priority_score,
            news = scores.news,
            mews = scores.mews,
            qsofa = scores.qsofa,
            "assessment classified"
        );
    }

    Assessment {
        scores,
        breakdowns,
        triage: result,
    }
}
