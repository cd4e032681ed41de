use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Patient demographics and coverage. Field order matches the column order
/// the demo application expects when importing the fixture files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Patient {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub phone_number: String,
    pub email: String,
    pub address: String,
    pub blood_type: String,
    pub emergency_contact: String,
    pub allergies: String,
    pub medical_history: String,
    pub current_medications: String,
    pub insurance_provider: String,
    pub insurance_policy_number: String,
    pub primary_care_physician: String,
    pub notes: String,
    pub hospital_id: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Application account: the admin, doctors, and support staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub hospital_id: String,
    pub is_active: bool,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Clinical visit note tied to one patient and one doctor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MedicalRecord {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub record_type: String,
    pub visit_date: String,
    pub chief_complaint: String,
    pub history_of_present_illness: String,
    pub physical_examination: String,
    pub assessment: String,
    pub plan: String,
    pub diagnosis: String,
    pub treatment: String,
    pub follow_up_instructions: String,
    pub vital_signs: String,
    pub hospital_id: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Scheduled appointment. Virtual appointments carry a meeting link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub appointment_date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: String,
    pub appointment_type: String,
    pub reason: String,
    pub notes: String,
    pub room_number: String,
    pub department: String,
    pub is_virtual: bool,
    pub virtual_meeting_link: Option<String>,
    pub reminder_sent: String,
    pub hospital_id: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Prescription {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub route: String,
    pub instructions: String,
    pub duration: String,
    pub prescription_date: String,
    pub start_date: String,
    pub end_date: String,
    pub refills: String,
    pub status: String,
    pub notes: String,
    pub pharmacy: String,
    pub pharmacy_phone: String,
    pub diagnosis: String,
    pub side_effects: String,
    pub drug_interactions: String,
    pub hospital_id: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LabResult {
    pub id: String,
    pub patient_id: String,
    pub doctor_id: String,
    pub test_name: String,
    pub test_category: String,
    pub test_type: String,
    pub test_date: String,
    pub result_date: String,
    pub result: String,
    pub unit: String,
    pub reference_range: String,
    pub status: String,
    pub abnormal_flag: String,
    pub interpretation: String,
    pub laboratory: String,
    pub technician: String,
    pub pathologist: String,
    pub notes: String,
    pub comments: String,
    pub urgency: String,
    pub specimen_type: String,
    pub specimen_collection_date: String,
    pub accession_number: String,
    pub hospital_id: String,
    pub created_by: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Security audit trail entry. Diff payloads are small nested JSON blobs,
/// present only for the actions that modify data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuditLog {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: String,
    pub description: String,
    pub old_values: Option<Value>,
    pub new_values: Option<Value>,
    pub ip_address: String,
    pub user_agent: String,
    pub status: String,
    pub error_message: Option<String>,
    pub severity: String,
    pub hospital_id: String,
    pub timestamp: String,
}

/// Every collection produced by one synthesis run, keyed implicitly by
/// canonical table name in [`Dataset::TABLE_NAMES`] order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub patients: Vec<Patient>,
    pub users: Vec<User>,
    pub medical_records: Vec<MedicalRecord>,
    pub appointments: Vec<Appointment>,
    pub prescriptions: Vec<Prescription>,
    pub lab_results: Vec<LabResult>,
    pub audit_logs: Vec<AuditLog>,
}

impl Dataset {
    /// Canonical table names, in write order.
    pub const TABLE_NAMES: [&'static str; 7] = [
        "Patients",
        "Users",
        "MedicalRecords",
        "Appointments",
        "Prescriptions",
        "LabResults",
        "AuditLogs",
    ];

    /// Record count per table, in [`Dataset::TABLE_NAMES`] order.
    pub fn table_counts(&self) -> [(&'static str, u64); 7] {
        [
            ("Patients", self.patients.len() as u64),
            ("Users", self.users.len() as u64),
            ("MedicalRecords", self.medical_records.len() as u64),
            ("Appointments", self.appointments.len() as u64),
            ("Prescriptions", self.prescriptions.len() as u64),
            ("LabResults", self.lab_results.len() as u64),
            ("AuditLogs", self.audit_logs.len() as u64),
        ]
    }

    pub fn total_records(&self) -> u64 {
        self.table_counts().iter().map(|(_, count)| count).sum()
    }
}
