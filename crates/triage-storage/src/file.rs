use std::path::{Path, PathBuf};
use std::sync::Mutex;

use triage_core::models::patient::PatientRecord;

use crate::PATIENTS_FILE;
use crate::error::StorageError;
use crate::store::{PatientStore, upsert_into};

/// Patient records as a pretty-printed JSON array on local disk.
///
/// Every write goes to a sibling temp file that is then renamed over the
/// target, so readers never observe a half-written list. The mutex
/// serializes read-modify-write cycles within this process.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store backed by [`PATIENTS_FILE`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PATIENTS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<PatientRecord>, StorageError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no patient file yet, starting empty");
            return Ok(Vec::new());
        }

        let bytes = std::fs::read(&self.path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }

        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn write(&self, records: &[PatientRecord]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(records)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let tmp_path = self.path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &json)?;
        std::fs::rename(&tmp_path, &self.path)?;

        tracing::debug!(
            path = %self.path.display(),
            records = records.len(),
            "patient file written"
        );
        Ok(())
    }
}

impl PatientStore for JsonFileStore {
    fn load(&self) -> Result<Vec<PatientRecord>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        self.read()
    }

    fn upsert(&self, record: PatientRecord) -> Result<Vec<PatientRecord>, StorageError> {
        let _guard = self.lock.lock().map_err(|_| StorageError::LockPoisoned)?;
        let mut records = self.read()?;
        let patient_id = record.patient_id.clone();
        let replaced = upsert_into(&mut records, record);
        self.write(&records)?;

        if replaced {
            tracing::info!(%patient_id, "patient record replaced");
        } else {
            tracing::info!(%patient_id, total = records.len(), "patient record added");
        }
        Ok(records)
    }
}
