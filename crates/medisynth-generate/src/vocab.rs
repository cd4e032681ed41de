//! Fixed vocabularies the synthesizer samples from.
//!
//! The lists are intentionally small so generated datasets stay readable
//! when eyeballed in a demo environment.

pub const FIRST_NAMES: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Charles", "Joseph",
    "Thomas", "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica",
    "Sarah", "Karen",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee",
    "Thompson",
];

pub const MEDICAL_CONDITIONS: &[&str] = &[
    "Hypertension", "Diabetes Type 2", "Asthma", "Heart Disease", "Arthritis", "COPD",
    "Depression", "Anxiety", "High Cholesterol", "Migraines", "Allergies", "Osteoporosis",
    "Kidney Disease", "Liver Disease",
];

pub const MEDICATIONS: &[&str] = &[
    "Lisinopril", "Metformin", "Albuterol", "Atorvastatin", "Amlodipine", "Omeprazole",
    "Sertraline", "Levothyroxine", "Metoprolol", "Hydrochlorothiazide", "Simvastatin", "Losartan",
    "Gabapentin", "Amoxicillin", "Ibuprofen", "Acetaminophen",
];

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub const DEPARTMENTS: &[&str] = &[
    "Internal Medicine", "Emergency", "Cardiology", "Pediatrics", "Obstetrics", "Surgery",
    "Radiology", "Pathology",
];

pub const TEST_TYPES: &[&str] = &[
    "Complete Blood Count", "Comprehensive Metabolic Panel", "Lipid Panel", "Hemoglobin A1c",
    "Thyroid Panel", "Urinalysis", "Chest X-Ray", "EKG", "MRI", "CT Scan", "Ultrasound",
    "Stress Test",
];
