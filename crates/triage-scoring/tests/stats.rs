use triage_core::models::patient::{ArrivalMode, PatientRecord};
use triage_core::models::stats::StatsSummary;
use triage_core::models::triage::{TriageColor, TriageLevel};
use triage_scoring::stats;

fn record(id: &str, level: TriageLevel, news: u8, mews: u8, priority: u8) -> PatientRecord {
    PatientRecord {
        patient_id: id.to_string(),
        age: None,
        gender: None,
        arrival_mode: ArrivalMode::Walking,
        chief_complaint: None,
        admission_time: "2025-01-15T10:00:00Z".parse().unwrap(),
        triage_level: level,
        triage_color: level.color(),
        priority_score: priority,
        news_score: news,
        mews_score: mews,
        qsofa_score: 0,
        assessed_by: None,
        gcs_score: None,
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn empty_input_yields_zero_summary() {
    let summary = stats::compute(&[]);
    assert_eq!(summary, StatsSummary::default());
    assert_eq!(summary.avg_news, 0.0);
    assert!(!summary.avg_priority.is_nan());
}

#[test]
fn counts_and_averages() {
    let records = vec![
        record("a", TriageLevel::Resuscitation, 9, 7, 100),
        record("b", TriageLevel::Emergency, 5, 4, 70),
        record("c", TriageLevel::Urgent, 3, 2, 50),
        record("d", TriageLevel::NonUrgent, 0, 0, 10),
    ];
    let summary = stats::compute(&records);

    assert_eq!(summary.total_patients, 4);
    assert_eq!(summary.red_patients, 1);
    assert_eq!(summary.orange_patients, 1);
    assert_eq!(summary.yellow_patients, 1);
    assert_eq!(summary.green_patients, 0);
    assert_eq!(summary.blue_patients, 1);
    assert_eq!(summary.critical_patients(), 2);
    assert!(approx(summary.avg_news, 17.0 / 4.0));
    assert!(approx(summary.avg_mews, 13.0 / 4.0));
    assert!(approx(summary.avg_priority, 230.0 / 4.0));
}

#[test]
fn color_counts_sum_to_total() {
    let levels = [
        TriageLevel::SemiUrgent,
        TriageLevel::SemiUrgent,
        TriageLevel::Urgent,
        TriageLevel::NonUrgent,
        TriageLevel::Resuscitation,
    ];
    let records: Vec<_> = levels
        .iter()
        .enumerate()
        .map(|(i, &level)| record(&format!("p{i}"), level, 1, 1, level.priority_floor()))
        .collect();
    let summary = stats::compute(&records);
    let per_color: usize = TriageColor::ALL.iter().map(|&c| summary.count_for(c)).sum();
    assert_eq!(per_color, summary.total_patients);
    assert_eq!(summary.green_patients, 2);
}

#[test]
fn record_without_scores_counts_as_zero() {
    let json = r#"[
        {"patient_id": "old", "admission_time": "2024-01-01T00:00:00Z",
         "triage_level": "urgent", "triage_color": "yellow"},
        {"patient_id": "new", "admission_time": "2024-01-02T00:00:00Z",
         "triage_level": "emergency", "triage_color": "orange",
         "priority_score": 80, "news_score": 6, "mews_score": 4, "qsofa_score": 1}
    ]"#;
    let records: Vec<PatientRecord> = serde_json::from_str(json).unwrap();
    let summary = stats::compute(&records);
    assert_eq!(summary.total_patients, 2);
    assert!(approx(summary.avg_news, 3.0));
    assert!(approx(summary.avg_priority, 40.0));
}

#[test]
fn order_does_not_change_summary() {
    let mut records = vec![
        record("a", TriageLevel::Emergency, 5, 3, 71),
        record("b", TriageLevel::Urgent, 3, 3, 50),
        record("c", TriageLevel::SemiUrgent, 1, 2, 30),
    ];
    let forward = stats::compute(&records);
    records.reverse();
    let backward = stats::compute(&records);

    assert_eq!(forward.total_patients, backward.total_patients);
    assert_eq!(forward.orange_patients, backward.orange_patients);
    assert!(approx(forward.avg_news, backward.avg_news));
    assert!(approx(forward.avg_priority, backward.avg_priority));
}
