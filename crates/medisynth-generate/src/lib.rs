//! Synthetic medical-records fixture generator.
//!
//! This crate fabricates flat-record datasets for demos and tests: patients,
//! users, medical records, appointments, prescriptions, lab results, and
//! audit logs, with cross-table references drawn from shared identifier
//! pools and one indented JSON array file written per table.

pub mod errors;
mod fields;
pub mod ids;
pub mod model;
pub mod output;
pub mod records;
pub mod synthesizer;
pub mod vocab;

pub use errors::SynthesisError;
pub use ids::{IdMint, IdPool};
pub use model::{SynthesisOptions, TableCounts, TableReport};
pub use records::{
    Appointment, AuditLog, Dataset, LabResult, MedicalRecord, Patient, Prescription, User,
};
pub use synthesizer::Synthesizer;
