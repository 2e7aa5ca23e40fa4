//! intake-core
//!
//! Pure domain types for the adaptive intake questionnaire: answer values,
//! per-pathway responses, and the submission envelope handed to persistence.
//! No I/O. This is the shared vocabulary of the intake system.

pub mod error;
pub mod models;
