// Fixed vocabularies the demo dataset is sampled from.
// FACILITIES order matters: the first five are the default filter selection.

pub const FACILITIES: &[&str] = &[
    "Al-Assad University Hospital",
    "Al-Mouwasat University Hospital",
    "Children's University Hospital",
    "Damascus Hospital (Ibn Al-Nafis)",
    "Maternity University Hospital",
    "Ophthalmology University Hospital",
    "Oncology Hospital",
    "Al-Basel Heart Hospital",
    "Martyr Yusuf Al-Azma Hospital",
    "Red Crescent Hospital",
    "Al-Sham Health Center",
    "Douma Health Center",
    "Jaramana Health Center",
    "Al-Midan Health Center",
    "Al-Qaboun Health Center",
    "Bab Touma Health Center",
    "Al-Qassaa Health Center",
    "Al-Zahira Health Center",
    "Directorate Headquarters",
    "Central Emergency Department",
    "Public Health Laboratory",
    "Disease Control Center",
];

pub const EMPLOYEE_NAMES: &[&str] = &[
    "Dr. Mohammad Ahmad Al-Saeed", "Dr. Fatima Ali Hammoud", "Dr. Khaled Mahmoud Shaheen",
    "Dr. Nour Al-Din Abdullah", "Dr. Rana Saleh Al-Masri", "Dr. Omar Hassan Al-Khouri",
    "Dr. Layla Ibrahim Najjar", "Dr. Samer Mohammad Othman", "Dr. Hind Farouk Zeidan",
    "Dr. Ahmad Youssef Al-Halabi", "Dr. Maryam Abdul Rahman", "Dr. Walid Mohammad Al-Aswad",
    "Ms. Suad Ahmad Merhi", "Mr. Hussam Al-Din Taleb", "Ms. Nadia Salim Haddad",
    "Nurse Zeinab Ali", "Nurse Mohammad Imad", "Nurse Raghad Hassan",
    "Tech. Ayman Al-Shami", "Tech. Sawsan Al-Dimashqi", "Admin. Adnan Al-Miqdad",
    "Admin. Rola Al-Khatib", "Acct. Ghassan Al-Nabulsi", "Guard Walid Al-Ahmad",
    "Janitor Abu Ahmad", "Driver Mahmoud Al-Hourani", "Supervisor Tarek Al-Omari",
    "Dr. Basel Al-Shaar", "Dr. Rami Al-Hakim", "Dr. Salma Al-Turk",
    "Dr. Imad Al-Bitar", "Dr. Mona Al-Sabbagh", "Dr. Jihad Al-Atassi",
    "Ms. Yasmin Al-Ali", "Mr. Mouin Al-Dandashi", "Nurse Amal Haidar",
    "Tech. Kamal Al-Souri", "Admin. Nabil Al-Sheikh", "Acct. Rana Al-Hamwi",
    "Dr. Talal Al-Mohammad", "Dr. Naya Al-Abdullah", "Nurse Sami Al-Hassan",
];

pub const DEPARTMENTS: &[&str] = &[
    "Emergency", "General Surgery", "Internal Medicine", "Pediatrics", "Obstetrics & Gynecology",
    "Orthopedics", "Cardiology", "Neurology", "Dermatology", "Ophthalmology", "ENT",
    "Anesthesia", "Radiology", "Laboratory", "Pharmacy", "Nursing", "Administration",
    "Accounting", "Security", "Housekeeping", "Maintenance", "Transport", "Reception",
];

pub const JOB_TITLES: &[&str] = &[
    "Specialist Physician", "Resident Physician", "General Practitioner", "Head of Department",
    "Deputy Head of Department", "Senior Nurse", "Nurse", "Lab Technician", "Radiology Technician",
    "Pharmacist", "Administrator", "Accountant", "Director", "Supervisor", "Janitor", "Driver",
    "Security Guard",
];

pub const WORK_LOCATIONS: &[&str] = &["Office", "Clinic", "Field work", "Remote", "On call"];

/// Location shown for an employee with no daily report.
pub const DEFAULT_WORK_LOCATION: &str = "Office";

pub const PROJECTS: &[&str] = &[
    "Emergency Department Upgrade",
    "Laboratory System Modernization",
    "Medical Staff Training",
    "Comprehensive Vaccination Campaign",
    "Outpatient Clinics Development",
    "Electronic Patient Management System",
    "Community Health Project",
    "Radiology Equipment Renewal",
    "Medical Quality Program",
    "Preventive Medicine Project",
    "Operating Theatre Development",
    "Electronic Pharmacy System",
    "Medical Rehabilitation Project",
    "Cardiology Unit Modernization",
    "Health Education Program",
    "Maternal Care Project",
    "Children's Services Development",
    "Electronic Appointments System",
];

pub const PROJECT_STATUSES: &[&str] = &[
    "Kick-off", "Planning", "In progress", "Pilot", "Final review", "Nearly complete", "On hold",
];

pub const TASKS: &[&str] = &[
    "Preparing medical reports", "Examining new patients", "Following up surgeries",
    "Updating the database", "Training on the new system", "Reviewing protocols",
    "Running lab tests", "Maintaining medical equipment", "Organizing medical stock",
    "Drafting the monthly work plan", "Following up inpatients", "Preparing operations",
    "Reviewing patient files", "Improving procedures", "Coordinating with other departments",
];

pub const PLANNED_TASKS: &[&str] = &[
    "Examining new patients", "Following up inpatients", "Surgical operations",
    "Medical reports", "Administrative meetings", "Continuous training",
    "Radiology exams", "Analysing results", "Pharmacy management", "Ward cleaning",
];

pub const YESTERDAY_STATUSES: &[&str] = &["Completed", "Partially completed", "Delayed", "Cancelled"];

pub const CHALLENGES: &[&str] = &[
    "Equipment shortage", "Patient overcrowding", "Staff shortage", "Technical issues",
    NO_CHALLENGES, "Test delays", "Coordination issues",
];

pub const NO_CHALLENGES: &str = "No challenges";

pub const RATINGS: &[&str] = &["Excellent", "Very good", "Good", "Acceptable"];

/// Syrian mobile prefixes; employee identifiers are prefix + 6 digits.
pub const MOBILE_PREFIXES: &[&str] = &[
    "0944", "0945", "0946", "0947", "0948", "0949",
    "0954", "0955", "0956", "0957", "0958", "0959",
    "0962", "0963", "0964", "0965", "0966", "0967",
];

pub fn is_facility(name: &str) -> bool {
    FACILITIES.contains(&name)
}
