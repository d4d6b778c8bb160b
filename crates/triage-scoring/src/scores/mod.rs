pub mod mews;
pub mod news;
pub mod qsofa;
