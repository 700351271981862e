//! Core of the rental-marketplace listing creation flow: a seven-step wizard
//! that gates forward navigation on per-step validity, merges step output into
//! a single draft record, autosaves that draft on every change, and runs a
//! final completeness check before publishing.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod wizard;
