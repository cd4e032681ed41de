use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::errors::SynthesisError;
use crate::model::TableReport;
use crate::records::Dataset;

/// Write one record collection as an indented JSON array.
///
/// The destination directory is created if absent. The file name is the
/// lowercased table name, so the `MedicalRecords` table lands in
/// `medicalrecords.json`.
pub fn write_table_json<T: Serialize>(
    dir: &Path,
    table: &str,
    records: &[T],
) -> Result<TableReport, SynthesisError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.json", table.to_lowercase()));
    let mut writer = CountingWriter::new(BufWriter::new(File::create(&path)?));
    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    Ok(TableReport {
        table: table.to_string(),
        records: records.len() as u64,
        bytes: writer.bytes_written(),
        path,
    })
}

/// Persist every table of a dataset, one JSON file per table, in canonical
/// order.
pub fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<Vec<TableReport>, SynthesisError> {
    let mut reports = Vec::with_capacity(Dataset::TABLE_NAMES.len());
    reports.push(write_table_json(dir, "Patients", &dataset.patients)?);
    reports.push(write_table_json(dir, "Users", &dataset.users)?);
    reports.push(write_table_json(dir, "MedicalRecords", &dataset.medical_records)?);
    reports.push(write_table_json(dir, "Appointments", &dataset.appointments)?);
    reports.push(write_table_json(dir, "Prescriptions", &dataset.prescriptions)?);
    reports.push(write_table_json(dir, "LabResults", &dataset.lab_results)?);
    reports.push(write_table_json(dir, "AuditLogs", &dataset.audit_logs)?);
    Ok(reports)
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
