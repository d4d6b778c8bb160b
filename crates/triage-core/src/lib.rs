//! triage-core
//!
//! Pure domain types for emergency triage: vital signs, clinical features,
//! score and triage outcomes, persisted patient records, and the error
//! taxonomy shared by every other crate. No I/O lives here.

pub mod error;
pub mod models;
pub mod range;
