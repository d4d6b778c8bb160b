use triage_core::error::CoreError;
use triage_core::models::patient::{ArrivalMode, Gender, PatientIntake, PatientRecord};
use triage_core::models::stats::StatsSummary;
use triage_core::models::triage::{TriageColor, TriageLevel};

const LEVELS: [TriageLevel; 5] = [
    TriageLevel::Resuscitation,
    TriageLevel::Emergency,
    TriageLevel::Urgent,
    TriageLevel::SemiUrgent,
    TriageLevel::NonUrgent,
];

#[test]
fn levels_are_ordered_most_severe_first() {
    assert!(TriageLevel::Resuscitation < TriageLevel::Emergency);
    assert!(TriageLevel::SemiUrgent < TriageLevel::NonUrgent);
    let mut shuffled = vec![
        TriageLevel::Urgent,
        TriageLevel::NonUrgent,
        TriageLevel::Resuscitation,
    ];
    shuffled.sort();
    assert_eq!(shuffled[0], TriageLevel::Resuscitation);
}

#[test]
fn color_mapping_is_bijective() {
    for level in LEVELS {
        assert_eq!(level.color().level(), level);
    }
    for color in TriageColor::ALL {
        assert_eq!(color.level().color(), color);
    }
}

#[test]
fn escalation_only_for_top_two_tiers() {
    let escalated: Vec<_> = LEVELS
        .into_iter()
        .filter(|l| l.requires_escalation())
        .collect();
    assert_eq!(
        escalated,
        vec![TriageLevel::Resuscitation, TriageLevel::Emergency]
    );
}

#[test]
fn levels_serialize_with_wire_names() {
    assert_eq!(
        serde_json::to_string(&TriageLevel::SemiUrgent).unwrap(),
        "\"semi-urgent\""
    );
    assert_eq!(serde_json::to_string(&TriageColor::Blue).unwrap(), "\"blue\"");
    assert_eq!(TriageLevel::NonUrgent.to_string(), "non-urgent");
}

#[test]
fn intake_trims_identity_and_drops_blank_text() {
    let intake = PatientIntake {
        patient_id: "  P-001 ".to_string(),
        age: Some(54),
        gender: Some(Gender::Female),
        arrival_mode: ArrivalMode::Ambulance,
        chief_complaint: Some("   ".to_string()),
        assessed_by: Some("Dr. Ivanova".to_string()),
    };
    let demographics = intake.validate().unwrap();
    assert_eq!(demographics.patient_id, "P-001");
    assert_eq!(demographics.age, Some(54));
    assert_eq!(demographics.chief_complaint, None);
    assert_eq!(demographics.assessed_by.as_deref(), Some("Dr. Ivanova"));
}

#[test]
fn intake_requires_patient_id() {
    let intake = PatientIntake::default();
    assert!(matches!(intake.validate(), Err(CoreError::MissingField(f)) if f == "patientId"));
}

#[test]
fn intake_rejects_implausible_age() {
    let intake = PatientIntake {
        patient_id: "P-2".to_string(),
        age: Some(130),
        ..Default::default()
    };
    assert!(matches!(intake.validate(), Err(CoreError::Validation(e)) if e.field == "age"));
}

#[test]
fn record_missing_scores_default_to_zero() {
    let json = r#"{
        "patient_id": "legacy",
        "admission_time": "2024-03-01T08:30:00Z",
        "triage_level": "urgent",
        "triage_color": "yellow"
    }"#;
    let record: PatientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.news_score, 0);
    assert_eq!(record.priority_score, 0);
    assert_eq!(record.arrival_mode, ArrivalMode::Walking);
    assert_eq!(record.gcs_score, None);
}

#[test]
fn record_malformed_scores_read_as_zero() {
    let json = r#"{
        "patient_id": "a",
        "admission_time": "2024-03-01T08:30:00Z",
        "triage_level": "urgent",
        "triage_color": "yellow",
        "news_score": null,
        "mews_score": "4",
        "qsofa_score": 1.5,
        "priority_score": 55
    }"#;
    let record: PatientRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.news_score, 0);
    assert_eq!(record.mews_score, 0);
    assert_eq!(record.qsofa_score, 0);
    assert_eq!(record.priority_score, 55);

    let out_of_range = json.replace("55", "300");
    let record: PatientRecord = serde_json::from_str(&out_of_range).unwrap();
    assert_eq!(record.priority_score, 0);
}

#[test]
fn stats_helpers() {
    let summary = StatsSummary {
        total_patients: 4,
        red_patients: 1,
        orange_patients: 1,
        blue_patients: 2,
        ..Default::default()
    };
    assert_eq!(summary.critical_patients(), 2);
    assert_eq!(summary.color_share(TriageColor::Blue), 50.0);
    assert_eq!(StatsSummary::default().color_share(TriageColor::Red), 0.0);
}

#[test]
fn display_labels() {
    assert_eq!(TriageLevel::Resuscitation.label(), "РЕАНИМАЦИЯ");
    assert_eq!(TriageLevel::SemiUrgent.label(), "ПОЛУСРОЧНАЯ");
    assert_eq!(TriageColor::Yellow.label(), "ЖЁЛТАЯ");
}
