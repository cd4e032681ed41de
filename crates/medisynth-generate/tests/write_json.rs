use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use medisynth_generate::output::{write_dataset, write_table_json};
use medisynth_generate::{IdPool, Patient, SynthesisOptions, Synthesizer, TableCounts};

fn options(seed: u64) -> SynthesisOptions {
    SynthesisOptions {
        seed: Some(seed),
        timestamp: NaiveDate::from_ymd_opt(2024, 6, 1).and_then(|date| date.and_hms_opt(12, 0, 0)),
        counts: TableCounts {
            patients: 6,
            doctors: 3,
            staff: 2,
            medical_records: 8,
            appointments: 9,
            prescriptions: 7,
            lab_results: 5,
            audit_logs: 10,
        },
    }
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("medisynth_generate_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

#[test]
fn write_dataset_lands_one_lowercased_file_per_table() {
    let mut synth = Synthesizer::new(options(1));
    let dataset = synth.synthesize().expect("synthesize");

    let out_dir = temp_out_dir("dataset");
    let reports = write_dataset(&out_dir, &dataset).expect("write dataset");

    let expected = [
        ("Patients", "patients.json", dataset.patients.len()),
        ("Users", "users.json", dataset.users.len()),
        ("MedicalRecords", "medicalrecords.json", dataset.medical_records.len()),
        ("Appointments", "appointments.json", dataset.appointments.len()),
        ("Prescriptions", "prescriptions.json", dataset.prescriptions.len()),
        ("LabResults", "labresults.json", dataset.lab_results.len()),
        ("AuditLogs", "auditlogs.json", dataset.audit_logs.len()),
    ];

    assert_eq!(reports.len(), expected.len());
    for (report, (table, file_name, records)) in reports.iter().zip(expected.iter()) {
        assert_eq!(report.table, *table);
        assert_eq!(report.records, *records as u64);
        assert!(report.bytes > 0);
        assert_eq!(report.path, out_dir.join(file_name));

        let contents = fs::read_to_string(&report.path).expect("read table file");
        let parsed: serde_json::Value = serde_json::from_str(&contents).expect("parse table file");
        let rows = parsed.as_array().expect("file holds a JSON array");
        assert_eq!(rows.len(), *records);
        assert_eq!(contents.len() as u64, report.bytes);
    }
}

#[test]
fn written_json_is_indented_with_fields_in_declaration_order() {
    let mut synth = Synthesizer::new(options(2));
    let patients = synth.patients(3);

    let out_dir = temp_out_dir("indent");
    let report = write_table_json(&out_dir, "Patients", &patients).expect("write patients");

    let contents = fs::read_to_string(&report.path).expect("read patients.json");
    assert!(
        contents.starts_with("[\n  {\n    \"Id\": \"PAT-"),
        "unexpected file prefix: {}",
        &contents[..40.min(contents.len())]
    );
}

#[test]
fn writer_creates_missing_directories() {
    let mut synth = Synthesizer::new(options(3));
    let patients = synth.patients(2);

    let out_dir = temp_out_dir("nested").join("deep").join("deeper");
    assert!(!out_dir.exists());
    let report = write_table_json(&out_dir, "Patients", &patients).expect("write patients");
    assert!(report.path.is_file());
}

#[test]
fn empty_collections_write_empty_arrays() {
    let out_dir = temp_out_dir("empty");
    let report =
        write_table_json::<Patient>(&out_dir, "Patients", &[]).expect("write empty table");

    assert_eq!(report.records, 0);
    let contents = fs::read_to_string(&report.path).expect("read empty file");
    assert_eq!(contents, "[]");
    assert_eq!(report.bytes, 2);
}

#[test]
fn audit_diff_blobs_survive_the_round_trip() {
    let mut synth = Synthesizer::new(options(4));
    let users = IdPool::new("users", vec!["USER-A".to_string(), "USER-B".to_string()]);
    let logs = synth.audit_logs(&users, 200).expect("audit logs");

    let out_dir = temp_out_dir("audit");
    let report = write_table_json(&out_dir, "AuditLogs", &logs).expect("write audit logs");

    let contents = fs::read_to_string(&report.path).expect("read audit logs");
    let parsed: serde_json::Value = serde_json::from_str(&contents).expect("parse audit logs");
    let mut saw_blob = false;
    for entry in parsed.as_array().expect("array") {
        let old_values = entry.get("OldValues").expect("OldValues present");
        assert!(old_values.is_null() || old_values.is_object());
        if let Some(blob) = old_values.as_object() {
            assert_eq!(blob.get("field"), Some(&serde_json::json!("old_value")));
            saw_blob = true;
        }
    }
    assert!(saw_blob, "expected at least one UPDATE or DELETE diff");
}

#[test]
fn written_files_are_deterministic_for_a_seed() {
    let dataset_a = Synthesizer::new(options(5)).synthesize().expect("run a");
    let dataset_b = Synthesizer::new(options(5)).synthesize().expect("run b");

    let dir_a = temp_out_dir("determinism_a");
    let dir_b = temp_out_dir("determinism_b");
    write_dataset(&dir_a, &dataset_a).expect("write a");
    write_dataset(&dir_b, &dataset_b).expect("write b");

    for file_name in [
        "patients.json",
        "users.json",
        "medicalrecords.json",
        "appointments.json",
        "prescriptions.json",
        "labresults.json",
        "auditlogs.json",
    ] {
        let contents_a = fs::read_to_string(dir_a.join(file_name)).expect("read run a");
        let contents_b = fs::read_to_string(dir_b.join(file_name)).expect("read run b");
        assert_eq!(contents_a, contents_b, "{file_name} should be deterministic");
    }
}
