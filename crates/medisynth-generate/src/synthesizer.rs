use std::time::Instant;

use chrono::{Duration, NaiveDateTime, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde_json::json;
use tracing::info;

use crate::errors::SynthesisError;
use crate::fields::{self, pick};
use crate::ids::{IdMint, IdPool};
use crate::model::{SynthesisOptions, TableCounts};
use crate::records::{
    Appointment, AuditLog, Dataset, LabResult, MedicalRecord, Patient, Prescription, User,
};
use crate::vocab::{
    BLOOD_TYPES, DEPARTMENTS, FIRST_NAMES, LAST_NAMES, MEDICAL_CONDITIONS, MEDICATIONS, TEST_TYPES,
};

const HOSPITAL_ID: &str = "HOSPITAL-001";
const SYSTEM_USER: &str = "SYSTEM";

/// Generates all seven entity collections for one fixture dataset.
///
/// The synthesizer owns a single seeded RNG and an identifier mint shared by
/// every operation, so identifiers never collide across tables and a run is
/// fully replayable from its seed and timestamp anchor.
///
/// Records never reference each other's content. The only cross-table
/// coupling is through [`IdPool`]s: dependent tables draw their reference
/// fields from pools built out of the parent records generated earlier in
/// the same run.
pub struct Synthesizer {
    seed: u64,
    now: NaiveDateTime,
    counts: TableCounts,
    rng: ChaCha8Rng,
    mint: IdMint,
}

impl Synthesizer {
    pub fn new(options: SynthesisOptions) -> Self {
        let seed = options.seed.unwrap_or_else(|| rand::rng().random());
        let now = options
            .timestamp
            .unwrap_or_else(|| Utc::now().naive_utc());
        Self {
            seed,
            now,
            counts: options.counts,
            rng: ChaCha8Rng::seed_from_u64(seed),
            mint: IdMint::new(now),
        }
    }

    /// Effective seed for this run. Reported even when it came from OS
    /// entropy, so any run can be replayed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Run every generation operation in dependency order and collect the
    /// results. Parents go first; each dependent table samples its reference
    /// fields from pools built over the records actually generated, so every
    /// reference resolves within the dataset.
    pub fn synthesize(&mut self) -> Result<Dataset, SynthesisError> {
        let start = Instant::now();
        let run_id = uuid::Uuid::new_v4().to_string();
        let counts = self.counts.clone();

        info!(
            run_id = %run_id,
            seed = self.seed,
            tables = Dataset::TABLE_NAMES.len(),
            "synthesis started"
        );

        let patients = self.patients(counts.patients);
        info!(run_id = %run_id, table = "Patients", rows = patients.len(), "table generated");

        let users = self.users(counts.doctors, counts.staff);
        info!(run_id = %run_id, table = "Users", rows = users.len(), "table generated");

        let patient_pool = IdPool::new(
            "patients",
            patients.iter().map(|patient| patient.id.clone()).collect(),
        );
        let doctor_pool = IdPool::new(
            "doctors",
            users
                .iter()
                .filter(|user| user.role == "Doctor")
                .map(|user| user.id.clone())
                .collect(),
        );
        let user_pool = IdPool::new("users", users.iter().map(|user| user.id.clone()).collect());

        let medical_records =
            self.medical_records(&patient_pool, &doctor_pool, counts.medical_records)?;
        info!(
            run_id = %run_id,
            table = "MedicalRecords",
            rows = medical_records.len(),
            "table generated"
        );

        let appointments = self.appointments(&patient_pool, &doctor_pool, counts.appointments)?;
        info!(run_id = %run_id, table = "Appointments", rows = appointments.len(), "table generated");

        let prescriptions =
            self.prescriptions(&patient_pool, &doctor_pool, counts.prescriptions)?;
        info!(
            run_id = %run_id,
            table = "Prescriptions",
            rows = prescriptions.len(),
            "table generated"
        );

        let lab_results = self.lab_results(&patient_pool, &doctor_pool, counts.lab_results)?;
        info!(run_id = %run_id, table = "LabResults", rows = lab_results.len(), "table generated");

        let audit_logs = self.audit_logs(&user_pool, counts.audit_logs)?;
        info!(run_id = %run_id, table = "AuditLogs", rows = audit_logs.len(), "table generated");

        let dataset = Dataset {
            patients,
            users,
            medical_records,
            appointments,
            prescriptions,
            lab_results,
            audit_logs,
        };

        info!(
            run_id = %run_id,
            records = dataset.total_records(),
            duration_ms = start.elapsed().as_millis() as u64,
            "synthesis completed"
        );

        Ok(dataset)
    }

    /// Generate `count` patient records.
    pub fn patients(&mut self, count: u64) -> Vec<Patient> {
        let Self { rng, mint, now, .. } = self;
        let now = *now;
        let created_at = fields::format_timestamp(now);

        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let first_name = pick(FIRST_NAMES, rng).to_string();
            let last_name = pick(LAST_NAMES, rng).to_string();
            let email = fields::email(&first_name, &last_name, rng);
            out.push(Patient {
                id: mint.mint("PAT", rng),
                first_name,
                last_name,
                date_of_birth: fields::date_of_birth(now, rng),
                gender: pick(&["Male", "Female", "Other"], rng).to_string(),
                phone_number: fields::phone_number(rng),
                email,
                address: fields::street_address(rng),
                blood_type: pick(BLOOD_TYPES, rng).to_string(),
                emergency_contact: fields::phone_number(rng),
                allergies: pick(
                    &["None", "Penicillin", "Latex", "Pollen", "Dust Mites", "Shellfish"],
                    rng,
                )
                .to_string(),
                medical_history: pick(MEDICAL_CONDITIONS, rng).to_string(),
                current_medications: pick(MEDICATIONS, rng).to_string(),
                insurance_provider: pick(
                    &["Blue Cross", "Aetna", "UnitedHealth", "Cigna", "Humana"],
                    rng,
                )
                .to_string(),
                insurance_policy_number: format!("POL-{}", rng.random_range(100000..=999999)),
                primary_care_physician: format!("Dr. {}", pick(LAST_NAMES, rng)),
                notes: pick(
                    &[
                        "Regular checkups",
                        "Chronic condition management",
                        "Post-surgery follow-up",
                        "Medication monitoring",
                    ],
                    rng,
                )
                .to_string(),
                hospital_id: HOSPITAL_ID.to_string(),
                created_by: SYSTEM_USER.to_string(),
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }
        out
    }

    /// Generate the user directory: one admin account, then `doctors` doctor
    /// accounts, then `staff` support accounts. The admin is created by the
    /// system; everyone else is created by the admin.
    pub fn users(&mut self, doctors: u64, staff: u64) -> Vec<User> {
        let Self { rng, mint, now, .. } = self;
        let created_at = fields::format_timestamp(*now);

        let mut out = Vec::with_capacity(1 + doctors as usize + staff as usize);

        let admin_id = mint.mint("USER", rng);
        out.push(User {
            id: admin_id.clone(),
            username: "admin".to_string(),
            email: "admin@hospital.com".to_string(),
            first_name: "System".to_string(),
            last_name: "Administrator".to_string(),
            role: "Administrator".to_string(),
            department: "IT".to_string(),
            hospital_id: HOSPITAL_ID.to_string(),
            is_active: true,
            created_by: SYSTEM_USER.to_string(),
            created_at: created_at.clone(),
            updated_at: created_at.clone(),
        });

        for index in 0..doctors {
            out.push(User {
                id: mint.mint("USER", rng),
                username: format!("doctor_{}", index + 1),
                email: format!("doctor{}@hospital.com", index + 1),
                first_name: pick(FIRST_NAMES, rng).to_string(),
                last_name: pick(LAST_NAMES, rng).to_string(),
                role: "Doctor".to_string(),
                department: pick(DEPARTMENTS, rng).to_string(),
                hospital_id: HOSPITAL_ID.to_string(),
                is_active: true,
                created_by: admin_id.clone(),
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }

        for index in 0..staff {
            out.push(User {
                id: mint.mint("USER", rng),
                username: format!("staff_{}", index + 1),
                email: format!("staff{}@hospital.com", index + 1),
                first_name: pick(FIRST_NAMES, rng).to_string(),
                last_name: pick(LAST_NAMES, rng).to_string(),
                role: pick(&["Nurse", "Receptionist", "Lab Technician", "Pharmacist"], rng)
                    .to_string(),
                department: pick(DEPARTMENTS, rng).to_string(),
                hospital_id: HOSPITAL_ID.to_string(),
                is_active: true,
                created_by: admin_id.clone(),
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }

        out
    }

    /// Generate `count` medical records referencing the supplied pools.
    pub fn medical_records(
        &mut self,
        patients: &IdPool,
        doctors: &IdPool,
        count: u64,
    ) -> Result<Vec<MedicalRecord>, SynthesisError> {
        let Self { rng, mint, now, .. } = self;
        let now = *now;
        let created_at = fields::format_timestamp(now);

        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let patient_id = patients.pick(rng)?.to_string();
            let doctor_id = doctors.pick(rng)?.to_string();
            let visit_date = now - Duration::days(rng.random_range(0..=365));
            out.push(MedicalRecord {
                id: mint.mint("MR", rng),
                patient_id,
                doctor_id: doctor_id.clone(),
                record_type: pick(
                    &["Consultation", "Follow-up", "Emergency", "Routine Checkup"],
                    rng,
                )
                .to_string(),
                visit_date: fields::format_timestamp(visit_date),
                chief_complaint: pick(
                    &["Headache", "Chest Pain", "Fever", "Cough", "Abdominal Pain", "Fatigue"],
                    rng,
                )
                .to_string(),
                history_of_present_illness: format!(
                    "Patient reports {} onset of symptoms",
                    pick(&["acute", "chronic"], rng)
                ),
                physical_examination: pick(
                    &[
                        "Normal examination",
                        "Mild abnormalities detected",
                        "Significant findings",
                    ],
                    rng,
                )
                .to_string(),
                assessment: pick(MEDICAL_CONDITIONS, rng).to_string(),
                plan: pick(
                    &[
                        "Continue current treatment",
                        "Start new medication",
                        "Refer to specialist",
                        "Schedule follow-up",
                    ],
                    rng,
                )
                .to_string(),
                diagnosis: pick(MEDICAL_CONDITIONS, rng).to_string(),
                treatment: pick(MEDICATIONS, rng).to_string(),
                follow_up_instructions: pick(
                    &[
                        "Return in 1 week",
                        "Return in 1 month",
                        "Call if symptoms worsen",
                        "Continue as directed",
                    ],
                    rng,
                )
                .to_string(),
                vital_signs: fields::vital_signs(rng),
                hospital_id: HOSPITAL_ID.to_string(),
                created_by: doctor_id,
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }
        Ok(out)
    }

    /// Generate `count` appointments referencing the supplied pools.
    pub fn appointments(
        &mut self,
        patients: &IdPool,
        doctors: &IdPool,
        count: u64,
    ) -> Result<Vec<Appointment>, SynthesisError> {
        let Self { rng, mint, now, .. } = self;
        let now = *now;
        let created_at = fields::format_timestamp(now);

        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let patient_id = patients.pick(rng)?.to_string();
            let doctor_id = doctors.pick(rng)?.to_string();
            let appointment_date = now.date() + Duration::days(rng.random_range(-30..=90));
            let start_hour: u32 = rng.random_range(8..=17);
            let end_hour = rng.random_range(start_hour + 1..=18);
            let is_virtual = rng.random_bool(0.5);
            let virtual_meeting_link = if rng.random_bool(0.5) {
                Some(format!("https://meet.jit.si/{}", mint.mint("MEET", rng)))
            } else {
                None
            };
            out.push(Appointment {
                id: mint.mint("APT", rng),
                patient_id,
                doctor_id: doctor_id.clone(),
                appointment_date: fields::format_date(appointment_date),
                start_time: format!("{start_hour:02}"),
                end_time: format!("{end_hour:02}"),
                status: pick(
                    &["Scheduled", "Confirmed", "Completed", "Cancelled", "No Show"],
                    rng,
                )
                .to_string(),
                appointment_type: pick(
                    &["Consultation", "Follow-up", "Emergency", "Routine Checkup", "Surgery"],
                    rng,
                )
                .to_string(),
                reason: pick(
                    &[
                        "Regular checkup",
                        "Follow-up visit",
                        "New symptoms",
                        "Medication review",
                        "Test results",
                    ],
                    rng,
                )
                .to_string(),
                notes: pick(
                    &["Patient on time", "Patient late", "Rescheduled", "Virtual appointment"],
                    rng,
                )
                .to_string(),
                room_number: format!("Room {}", rng.random_range(100..=999)),
                department: pick(DEPARTMENTS, rng).to_string(),
                is_virtual,
                virtual_meeting_link,
                reminder_sent: pick(&["SMS", "Email", "Phone", "None"], rng).to_string(),
                hospital_id: HOSPITAL_ID.to_string(),
                created_by: doctor_id,
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }
        Ok(out)
    }

    /// Generate `count` prescriptions referencing the supplied pools.
    pub fn prescriptions(
        &mut self,
        patients: &IdPool,
        doctors: &IdPool,
        count: u64,
    ) -> Result<Vec<Prescription>, SynthesisError> {
        let Self { rng, mint, now, .. } = self;
        let now = *now;
        let created_at = fields::format_timestamp(now);

        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let patient_id = patients.pick(rng)?.to_string();
            let doctor_id = doctors.pick(rng)?.to_string();
            let start_date = now.date() - Duration::days(rng.random_range(0..=30));
            let end_date = now.date() + Duration::days(rng.random_range(1..=90));
            out.push(Prescription {
                id: mint.mint("RX", rng),
                patient_id,
                doctor_id: doctor_id.clone(),
                medication_name: pick(MEDICATIONS, rng).to_string(),
                dosage: format!(
                    "{}{}",
                    rng.random_range(5..=500),
                    pick(&["mg", "mcg", "ml"], rng)
                ),
                frequency: pick(
                    &[
                        "Once daily",
                        "Twice daily",
                        "Three times daily",
                        "As needed",
                        "Every 4 hours",
                    ],
                    rng,
                )
                .to_string(),
                route: pick(&["Oral", "IV", "IM", "Topical", "Inhalation"], rng).to_string(),
                instructions: pick(
                    &[
                        "Take with food",
                        "Take on empty stomach",
                        "Take at bedtime",
                        "Take as needed",
                    ],
                    rng,
                )
                .to_string(),
                duration: format!(
                    "{} {}",
                    rng.random_range(1..=30),
                    pick(&["days", "weeks", "months"], rng)
                ),
                prescription_date: created_at.clone(),
                start_date: fields::format_date(start_date),
                end_date: fields::format_date(end_date),
                refills: rng.random_range(0..=5).to_string(),
                status: pick(&["Active", "Completed", "Cancelled", "Expired"], rng).to_string(),
                notes: pick(
                    &["Take as prescribed", "Monitor for side effects", "Follow up in 1 month"],
                    rng,
                )
                .to_string(),
                pharmacy: pick(&["CVS", "Walgreens", "Rite Aid", "Walmart Pharmacy"], rng)
                    .to_string(),
                pharmacy_phone: fields::phone_number(rng),
                diagnosis: pick(MEDICAL_CONDITIONS, rng).to_string(),
                side_effects: pick(
                    &["None", "Drowsiness", "Nausea", "Headache", "Dizziness"],
                    rng,
                )
                .to_string(),
                drug_interactions: pick(
                    &["None", "Alcohol", "Grapefruit", "Dairy products"],
                    rng,
                )
                .to_string(),
                hospital_id: HOSPITAL_ID.to_string(),
                created_by: doctor_id,
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }
        Ok(out)
    }

    /// Generate `count` lab results referencing the supplied pools.
    pub fn lab_results(
        &mut self,
        patients: &IdPool,
        doctors: &IdPool,
        count: u64,
    ) -> Result<Vec<LabResult>, SynthesisError> {
        let Self { rng, mint, now, .. } = self;
        let now = *now;
        let created_at = fields::format_timestamp(now);

        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let patient_id = patients.pick(rng)?.to_string();
            let doctor_id = doctors.pick(rng)?.to_string();
            let test_date = now - Duration::days(rng.random_range(0..=30));
            let result_date = test_date + Duration::days(rng.random_range(1..=3));
            let collected_at = test_date - Duration::hours(rng.random_range(1..=24));
            out.push(LabResult {
                id: mint.mint("LAB", rng),
                patient_id,
                doctor_id: doctor_id.clone(),
                test_name: pick(TEST_TYPES, rng).to_string(),
                test_category: pick(
                    &["Hematology", "Chemistry", "Immunology", "Microbiology", "Radiology"],
                    rng,
                )
                .to_string(),
                test_type: pick(&["Routine", "Stat", "Urgent", "Screening"], rng).to_string(),
                test_date: fields::format_timestamp(test_date),
                result_date: fields::format_timestamp(result_date),
                result: pick(&["Normal", "Abnormal", "Borderline", "Critical"], rng).to_string(),
                unit: pick(&["mg/dL", "mmol/L", "cells/μL", "pg/mL", "ng/mL"], rng).to_string(),
                reference_range: format!(
                    "{}-{}",
                    rng.random_range(70..=120),
                    rng.random_range(121..=200)
                ),
                status: pick(&["Completed", "Pending", "Cancelled", "Critical"], rng).to_string(),
                abnormal_flag: pick(&["", "H", "L", "HH", "LL"], rng).to_string(),
                interpretation: pick(
                    &[
                        "Within normal limits",
                        "Mildly abnormal",
                        "Moderately abnormal",
                        "Severely abnormal",
                    ],
                    rng,
                )
                .to_string(),
                laboratory: pick(
                    &["Hospital Lab", "Quest Diagnostics", "LabCorp", "Mayo Clinic"],
                    rng,
                )
                .to_string(),
                technician: format!("Tech {}", pick(LAST_NAMES, rng)),
                pathologist: format!("Dr. {}", pick(LAST_NAMES, rng)),
                notes: pick(
                    &[
                        "Sample quality good",
                        "Hemolysis present",
                        "Insufficient sample",
                        "Repeat testing recommended",
                    ],
                    rng,
                )
                .to_string(),
                comments: pick(
                    &["Routine testing", "Follow-up recommended", "Clinical correlation advised"],
                    rng,
                )
                .to_string(),
                urgency: pick(&["Routine", "Stat", "Urgent", "Critical"], rng).to_string(),
                specimen_type: pick(&["Blood", "Urine", "Swab", "Tissue", "CSF"], rng).to_string(),
                specimen_collection_date: fields::format_date(collected_at.date()),
                accession_number: format!("ACC-{}", rng.random_range(100000..=999999)),
                hospital_id: HOSPITAL_ID.to_string(),
                created_by: doctor_id,
                created_at: created_at.clone(),
                updated_at: created_at.clone(),
            });
        }
        Ok(out)
    }

    /// Generate `count` audit log entries attributed to users from the pool.
    pub fn audit_logs(
        &mut self,
        users: &IdPool,
        count: u64,
    ) -> Result<Vec<AuditLog>, SynthesisError> {
        const ACTIONS: &[&str] = &[
            "LOGIN", "LOGOUT", "CREATE", "UPDATE", "DELETE", "VIEW", "SEARCH", "EXPORT", "PRINT",
        ];
        const ENTITIES: &[&str] = &[
            "Patient",
            "MedicalRecord",
            "Appointment",
            "Prescription",
            "LabResult",
            "User",
            "Security",
        ];

        let Self { rng, mint, now, .. } = self;
        let now = *now;

        let mut out = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let user_id = users.pick(rng)?.to_string();
            let action = pick(ACTIONS, rng);
            let entity = pick(ENTITIES, rng);
            let status = pick(&["Success", "Failed", "Warning", "Error"], rng);
            let entity_prefix = entity.chars().take(3).collect::<String>().to_uppercase();
            out.push(AuditLog {
                id: mint.mint("AUDIT", rng),
                user_id,
                user_name: format!("User_{}", rng.random_range(1..=999)),
                action: action.to_string(),
                entity_type: entity.to_string(),
                entity_id: mint.mint(&entity_prefix, rng),
                description: format!("{action} operation on {entity}"),
                old_values: matches!(action, "UPDATE" | "DELETE")
                    .then(|| json!({"field": "old_value"})),
                new_values: matches!(action, "CREATE" | "UPDATE")
                    .then(|| json!({"field": "new_value"})),
                ip_address: format!("192.168.1.{}", rng.random_range(1..=254)),
                user_agent: "WPF Application".to_string(),
                status: status.to_string(),
                error_message: (status != "Success")
                    .then(|| format!("Error in {action} operation")),
                severity: pick(&["Info", "Warning", "Error", "Critical"], rng).to_string(),
                hospital_id: HOSPITAL_ID.to_string(),
                timestamp: fields::format_timestamp(
                    now - Duration::hours(rng.random_range(0..=720)),
                ),
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn options(seed: u64) -> SynthesisOptions {
        SynthesisOptions {
            seed: Some(seed),
            timestamp: NaiveDate::from_ymd_opt(2024, 6, 1)
                .and_then(|date| date.and_hms_opt(12, 0, 0)),
            counts: TableCounts::default(),
        }
    }

    #[test]
    fn users_start_with_the_admin_account() {
        let mut synth = Synthesizer::new(options(9));
        let users = synth.users(3, 2);
        assert_eq!(users.len(), 6);
        assert_eq!(users[0].username, "admin");
        assert_eq!(users[0].created_by, "SYSTEM");
        assert_eq!(users[1].role, "Doctor");
        assert_eq!(users[1].created_by, users[0].id);
        assert_eq!(users[4].username, "staff_1");
        assert_ne!(users[4].role, "Doctor");
        assert!(users.iter().all(|user| user.is_active));
    }

    #[test]
    fn appointment_hours_are_two_digit_and_ordered() {
        let mut synth = Synthesizer::new(options(10));
        let patients = IdPool::new("patients", vec!["PAT-A".to_string()]);
        let doctors = IdPool::new("doctors", vec!["USER-A".to_string()]);
        let appointments = synth.appointments(&patients, &doctors, 50).unwrap();
        for appointment in &appointments {
            assert_eq!(appointment.start_time.len(), 2);
            assert_eq!(appointment.end_time.len(), 2);
            let start: u32 = appointment.start_time.parse().unwrap();
            let end: u32 = appointment.end_time.parse().unwrap();
            assert!((8..=17).contains(&start));
            assert!(end > start && end <= 18);
            match &appointment.virtual_meeting_link {
                Some(link) => assert!(link.starts_with("https://meet.jit.si/MEET-")),
                None => {}
            }
        }
    }

    #[test]
    fn audit_diffs_follow_the_action() {
        let mut synth = Synthesizer::new(options(11));
        let users = IdPool::new("users", vec!["USER-A".to_string()]);
        let logs = synth.audit_logs(&users, 200).unwrap();
        for log in &logs {
            match log.action.as_str() {
                "UPDATE" => {
                    assert!(log.old_values.is_some());
                    assert!(log.new_values.is_some());
                }
                "DELETE" => {
                    assert!(log.old_values.is_some());
                    assert!(log.new_values.is_none());
                }
                "CREATE" => {
                    assert!(log.old_values.is_none());
                    assert!(log.new_values.is_some());
                }
                _ => {
                    assert!(log.old_values.is_none());
                    assert!(log.new_values.is_none());
                }
            }
            if log.status == "Success" {
                assert!(log.error_message.is_none());
            } else {
                let message = log.error_message.as_deref().unwrap();
                assert!(message.contains(&log.action));
            }
            assert!(log.entity_id.starts_with(
                &log.entity_type
                    .chars()
                    .take(3)
                    .collect::<String>()
                    .to_uppercase()
            ));
        }
    }

    #[test]
    fn prescription_dosage_and_duration_have_units() {
        let mut synth = Synthesizer::new(options(12));
        let patients = IdPool::new("patients", vec!["PAT-A".to_string()]);
        let doctors = IdPool::new("doctors", vec!["USER-A".to_string()]);
        let prescriptions = synth.prescriptions(&patients, &doctors, 40).unwrap();
        for prescription in &prescriptions {
            assert!(
                prescription.dosage.ends_with("mg")
                    || prescription.dosage.ends_with("mcg")
                    || prescription.dosage.ends_with("ml")
            );
            let (_, unit) = prescription.duration.split_once(' ').unwrap();
            assert!(["days", "weeks", "months"].contains(&unit));
            let refills: u32 = prescription.refills.parse().unwrap();
            assert!(refills <= 5);
        }
    }
}
