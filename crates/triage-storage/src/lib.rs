//! triage-storage
//!
//! Local persistence for patient records. Records are keyed by patient ID
//! and kept in submission order; saving a record with a known ID replaces it.

pub mod error;
pub mod file;
pub mod memory;
pub mod store;

/// File name of the record list inside the data directory.
pub const PATIENTS_FILE: &str = "triage_patients.json";
