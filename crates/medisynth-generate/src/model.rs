use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Options for a synthesis run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesisOptions {
    /// Seed for the deterministic generator. Drawn from OS entropy when
    /// absent; either way the effective seed is reported so a run can be
    /// replayed.
    pub seed: Option<u64>,
    /// Anchor for identifier stamps and every generated date. Defaults to
    /// the current UTC time; pin it to make seeded runs fully reproducible.
    pub timestamp: Option<NaiveDateTime>,
    /// Records to generate per table.
    pub counts: TableCounts,
}

/// Per-table record counts for a run. Defaults match the shipped demo
/// fixture sizes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableCounts {
    pub patients: u64,
    pub doctors: u64,
    pub staff: u64,
    pub medical_records: u64,
    pub appointments: u64,
    pub prescriptions: u64,
    pub lab_results: u64,
    pub audit_logs: u64,
}

impl Default for TableCounts {
    fn default() -> Self {
        Self {
            patients: 100,
            doctors: 20,
            staff: 30,
            medical_records: 200,
            appointments: 300,
            prescriptions: 250,
            lab_results: 200,
            audit_logs: 500,
        }
    }
}

/// Summary of one written table file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableReport {
    pub table: String,
    pub records: u64,
    pub bytes: u64,
    pub path: PathBuf,
}
