use triage_core::models::patient::PatientRecord;
use triage_core::models::stats::StatsSummary;
use triage_core::models::triage::TriageColor;

/// Reduce stored records to summary counts and averages.
///
/// An empty slice yields the all-zero summary. Averages divide by the total
/// record count.
pub fn compute(records: &[PatientRecord]) -> StatsSummary {
    if records.is_empty() {
        return StatsSummary::default();
    }

    let count = |color: TriageColor| records.iter().filter(|r| r.triage_color == color).count();
    let mean = |value: fn(&PatientRecord) -> u8| {
        records.iter().map(|r| f64::from(value(r))).sum::<f64>() / records.len() as f64
    };

    StatsSummary {
        total_patients: records.len(),
        red_patients: count(TriageColor::Red),
        orange_patients: count(TriageColor::Orange),
        yellow_patients: count(TriageColor::Yellow),
        green_patients: count(TriageColor::Green),
        blue_patients: count(TriageColor::Blue),
        avg_news: mean(|r| r.news_score),
        avg_mews: mean(|r| r.mews_score),
        avg_priority: mean(|r| r.priority_score),
    }
}
