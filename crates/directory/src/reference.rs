//! Static reference data consumed by the filter engine and the UI layer.
//!
//! All of this is configuration, not derived at runtime: the selectable
//! lists behind every filter dimension, plus the two lookup maps used by the
//! symptom filter and the specialty search. The maps are built once at first
//! use and never mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// States selectable in the state filter.
pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
    "Andaman and Nicobar Islands",
    "Chandigarh",
    "Dadra and Nagar Haveli and Daman and Diu",
    "Lakshadweep",
    "Delhi",
    "Puducherry",
];

pub const SYMPTOMS: &[&str] = &[
    "Headache",
    "Fatigue",
    "Cough",
    "Fever",
    "Nausea or Vomiting",
    "Abdominal Pain",
    "Dizziness",
    "Shortness of Breath",
    "Chest Pain",
    "Back Pain",
    "Joint or Muscle Pain",
    "Skin Rash",
    "Sore Throat",
    "Nasal Congestion",
    "Diarrhea",
    "Constipation",
    "Urinary Issues",
    "Sleep Disturbances",
    "Mood Changes",
    "Weight Changes",
    "Appetite Changes",
    "Menstrual Irregularities",
];

pub const SPECIALTIES: &[&str] = &[
    "Cardiologist",
    "Dentist",
    "Gynaecologist",
    "Dermatologist",
    "Neurologist",
    "Orthopedist",
    "Pediatrician",
    "Pulmonologist",
    "Gastroenterologist",
    "Physiotherapist",
    "General Physician",
    "Diagnostics",
];

pub const LOCATIONS: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Kolkata",
    "Kerala",
    "Bihar",
    "Rajasthan",
    "Hyderabad",
    "Jaipur",
    "Chennai",
    "Bengaluru",
];

/// Fee ceilings (rupees) selectable in the consultation-fee filter.
pub const FEES: &[u32] = &[100, 200, 300, 500, 1000, 1500, 2000, 3000, 5000];

pub const RATINGS: &[u32] = &[1, 2, 3, 4, 5];

pub const LANGUAGES: &[&str] = &["English", "Hindi", "Tamil", "Telugu", "Marathi"];

pub const AVAILABILITY: &[&str] = &["Morning", "Afternoon", "Evening", "Night"];

/// The four experience brackets, in ascending order.
pub const EXPERIENCE_BRACKETS: &[&str] =
    &["1-3 years", "3-5 years", "5-10 years", "10+ years"];

/// Lowercase keyword synonyms per canonical specialty, keyed by the
/// lowercased specialty label. Used to expand a free-text search query
/// before substring matching.
pub static SPECIALITY_KEYWORDS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let entries: &[(&str, &[&str])] = &[
            ("cardiologist", &["cardiologist", "cardiology", "heart"]),
            ("dentist", &["dentist", "dental", "teeth"]),
            ("gynaecologist", &["gynaecologist", "gynecology", "obgyn"]),
            ("dermatologist", &["dermatologist", "skin"]),
            ("neurologist", &["neurologist", "neuro"]),
            ("orthopedist", &["orthopedist", "orthopedic", "bones"]),
            ("pediatrician", &["pediatrician", "child"]),
            ("pulmonologist", &["pulmonologist", "lungs", "respiratory"]),
            (
                "gastroenterologist",
                &["gastroenterologist", "gastro", "digestive"],
            ),
            ("physiotherapist", &["physiotherapist", "physio"]),
            (
                "general physician",
                &["general physician", "physician", "gp"],
            ),
            ("diagnostics", &["diagnostics", "lab"]),
        ];
        entries.iter().copied().collect()
    });

/// Specialties known to treat each symptom, keyed by the exact symptom label.
/// Symptoms without an entry impose no mapping (the symptom filter then
/// matches nothing for them).
pub static SYMPTOM_SPECIALTIES: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| {
        let entries: &[(&str, &[&str])] = &[
            ("Headache", &["Neurologist"]),
            ("Chest Pain", &["Cardiologist"]),
            ("Skin Rash", &["Dermatologist"]),
            ("Joint or Muscle Pain", &["Orthopedist", "Physiotherapist"]),
            ("Abdominal Pain", &["Gastroenterologist"]),
            ("Cough", &["Pulmonologist"]),
            ("Nasal Congestion", &["Pulmonologist"]),
            ("Menstrual Irregularities", &["Gynaecologist"]),
            ("Sleep Disturbances", &["Neurologist", "General Physician"]),
            ("Urinary Issues", &["General Physician"]),
            ("Sore Throat", &["General Physician", "Pulmonologist"]),
        ];
        entries.iter().copied().collect()
    });

/// Keyword set for a free-text specialty query.
///
/// A query matching a known specialty label (case-insensitively) expands to
/// that specialty's keyword set; any other query is its own sole keyword.
/// The query is expected to be already trimmed and lowercased.
pub fn specialty_keywords(normalized_query: &str) -> Vec<&str> {
    match SPECIALITY_KEYWORDS.get(normalized_query) {
        Some(keywords) => keywords.to_vec(),
        None => vec![normalized_query],
    }
}

/// Specialties mapped to a symptom label, empty for unmapped symptoms.
pub fn specialties_for_symptom(symptom: &str) -> &'static [&'static str] {
    SYMPTOM_SPECIALTIES.get(symptom).copied().unwrap_or(&[])
}
