pub mod features;
pub mod patient;
pub mod scores;
pub mod stats;
pub mod triage;
pub mod vitals;
