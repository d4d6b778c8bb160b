use triage_core::models::patient::PatientRecord;

use crate::error::StorageError;

/// Keyed persistence for patient records.
///
/// Implementations must make `upsert` atomic per call: concurrent upserts of
/// the same patient leave exactly one complete record (last writer wins).
pub trait PatientStore: Send + Sync {
    /// All records in submission order.
    fn load(&self) -> Result<Vec<PatientRecord>, StorageError>;

    /// Replace the record with the same `patient_id`, or append it.
    /// Returns the updated list.
    fn upsert(&self, record: PatientRecord) -> Result<Vec<PatientRecord>, StorageError>;

    fn get(&self, patient_id: &str) -> Result<Option<PatientRecord>, StorageError> {
        Ok(self
            .load()?
            .into_iter()
            .find(|r| r.patient_id == patient_id))
    }

    /// Records ordered for the work list: highest priority first.
    fn list_by_priority(&self) -> Result<Vec<PatientRecord>, StorageError> {
        let mut records = self.load()?;
        rank_by_priority(&mut records);
        Ok(records)
    }
}

/// Replace in place or append. Returns `true` when an existing record was
/// replaced. Untouched records keep their relative order.
pub fn upsert_into(records: &mut Vec<PatientRecord>, record: PatientRecord) -> bool {
    match records
        .iter_mut()
        .find(|r| r.patient_id == record.patient_id)
    {
        Some(existing) => {
            *existing = record;
            true
        }
        None => {
            records.push(record);
            false
        }
    }
}

/// Stable sort by descending priority score.
pub fn rank_by_priority(records: &mut [PatientRecord]) {
    records.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));
}
