//! Facility manager directory.

use crate::models::dataset::vocab;

/// Shown when a facility has no manager on record.
pub const UNSPECIFIED: &str = "Unspecified";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub name: &'static str,
    /// Empty when unknown.
    pub phone: &'static str,
}

impl Contact {
    pub const UNSPECIFIED: Contact = Contact { name: UNSPECIFIED, phone: "" };

    pub fn has_phone(&self) -> bool {
        !self.phone.is_empty()
    }
}

const MANAGERS: &[(&str, Contact)] = &[
    ("Al-Assad University Hospital", Contact { name: "Dr. Mohammad Al-Aswad", phone: "0944123456" }),
    ("Al-Mouwasat University Hospital", Contact { name: "Dr. Fatima Hammoud", phone: "0955234567" }),
    ("Children's University Hospital", Contact { name: "Dr. Khaled Shaheen", phone: "0946345678" }),
    ("Damascus Hospital (Ibn Al-Nafis)", Contact { name: "Dr. Nour Abdullah", phone: "0957456789" }),
    ("Maternity University Hospital", Contact { name: "Dr. Rana Al-Masri", phone: "0944567890" }),
    ("Ophthalmology University Hospital", Contact { name: "Dr. Omar Al-Khouri", phone: "0955678901" }),
    ("Oncology Hospital", Contact { name: "Dr. Layla Najjar", phone: "0946789012" }),
    ("Al-Basel Heart Hospital", Contact { name: "Dr. Samer Othman", phone: "0957890123" }),
    ("Martyr Yusuf Al-Azma Hospital", Contact { name: "Dr. Hind Zeidan", phone: "0944901234" }),
    ("Red Crescent Hospital", Contact { name: "Dr. Ahmad Al-Halabi", phone: "0955012345" }),
    ("Al-Sham Health Center", Contact { name: "Dr. Maryam Abdul Rahman", phone: "0946123456" }),
    ("Douma Health Center", Contact { name: "Dr. Walid Al-Aswad", phone: "0957234567" }),
    ("Jaramana Health Center", Contact { name: "Ms. Suad Merhi", phone: "0944345678" }),
    ("Al-Midan Health Center", Contact { name: "Mr. Hussam Taleb", phone: "0955456789" }),
    ("Al-Qaboun Health Center", Contact { name: "Ms. Nadia Haddad", phone: "0946567890" }),
    ("Bab Touma Health Center", Contact { name: "Dr. Basel Al-Shaar", phone: "0957678901" }),
    ("Al-Qassaa Health Center", Contact { name: "Dr. Rami Al-Hakim", phone: "0944789012" }),
    ("Al-Zahira Health Center", Contact { name: "Dr. Salma Al-Turk", phone: "0955890123" }),
    ("Directorate Headquarters", Contact { name: "Dr. Akram Matouk", phone: "0946901234" }),
    ("Central Emergency Department", Contact { name: "Dr. Imad Al-Bitar", phone: "0957012345" }),
    ("Public Health Laboratory", Contact { name: "Dr. Mona Al-Sabbagh", phone: "0944123789" }),
    ("Disease Control Center", Contact { name: "Dr. Jihad Al-Atassi", phone: "0955234890" }),
];

/// Manager of a facility, or `Contact::UNSPECIFIED`.
pub fn manager_for(facility: &str) -> Contact {
    MANAGERS
        .iter()
        .find(|(f, _)| *f == facility)
        .map(|(_, c)| *c)
        .unwrap_or(Contact::UNSPECIFIED)
}

/// Facilities from `facilities` with no manager entry.
pub fn missing_managers<'a>(facilities: &[&'a str]) -> Vec<&'a str> {
    facilities
        .iter()
        .copied()
        .filter(|f| !MANAGERS.iter().any(|(m, _)| m == f))
        .collect()
}

/// Checked once at start-up; gaps are logged, lookups fall back to "Unspecified".
pub fn validate() -> Result<(), Vec<&'static str>> {
    let missing = missing_managers(vocab::FACILITIES);
    if missing.is_empty() { Ok(()) } else { Err(missing) }
}
