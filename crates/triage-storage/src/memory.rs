use std::sync::Mutex;

use triage_core::models::patient::PatientRecord;

use crate::error::StorageError;
use crate::store::{PatientStore, upsert_into};

/// Process-local store, used by tests and ephemeral deployments.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<PatientRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<PatientRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }
}

impl PatientStore for MemoryStore {
    fn load(&self) -> Result<Vec<PatientRecord>, StorageError> {
        let records = self.records.lock().map_err(|_| StorageError::LockPoisoned)?;
        Ok(records.clone())
    }

    fn upsert(&self, record: PatientRecord) -> Result<Vec<PatientRecord>, StorageError> {
        let mut records = self.records.lock().map_err(|_| StorageError::LockPoisoned)?;
        let patient_id = record.patient_id.clone();
        if upsert_into(&mut records, record) {
            tracing::info!(%patient_id, "patient record replaced");
        } else {
            tracing::info!(%patient_id, total = records.len(), "patient record added");
        }
        Ok(records.clone())
    }
}
