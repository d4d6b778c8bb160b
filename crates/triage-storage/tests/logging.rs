use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

use triage_core::models::patient::{ArrivalMode, PatientRecord};
use triage_core::models::triage::TriageLevel;
use triage_storage::file::JsonFileStore;
use triage_storage::memory::MemoryStore;
use triage_storage::store::PatientStore;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn record(id: &str) -> PatientRecord {
    PatientRecord {
        patient_id: id.to_string(),
        age: None,
        gender: None,
        arrival_mode: ArrivalMode::Walking,
        chief_complaint: None,
        admission_time: jiff::Timestamp::UNIX_EPOCH,
        triage_level: TriageLevel::Urgent,
        triage_color: TriageLevel::Urgent.color(),
        priority_score: 50,
        news_score: 3,
        mews_score: 2,
        qsofa_score: 0,
        assessed_by: None,
        gcs_score: None,
    }
}

/// Upsert twice under an info-level subscriber and return what was logged.
fn info_log_of(store: &dyn PatientStore) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        store.upsert(record("p-1")).unwrap();
        store.upsert(record("p-1")).unwrap();
    });
    captured.text()
}

#[test]
fn both_stores_log_upserts_at_info() {
    let dir = tempfile::tempdir().unwrap();
    let file_log = info_log_of(&JsonFileStore::in_dir(dir.path()));
    let memory_log = info_log_of(&MemoryStore::new());

    for log in [&file_log, &memory_log] {
        assert!(log.contains("patient record added"), "{log}");
        assert!(log.contains("patient record replaced"), "{log}");
        assert!(log.contains("p-1"), "{log}");
    }
}
