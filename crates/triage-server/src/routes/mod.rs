pub mod assessments;
pub mod health;
pub mod patients;
pub mod scores;
pub mod stats;
