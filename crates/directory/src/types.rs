//! Core domain types for the doctor directory.
//!
//! Three record shapes live here:
//! - `Doctor`: the canonical shape every downstream component works with
//! - `RemoteDoctorRecord`: the shape returned by the listing endpoint
//! - `FallbackDoctorRecord`: the shape of the embedded fallback dataset
//!
//! The two raw shapes never leave this crate un-normalized; see the
//! `normalize` module for the coalescing rules.

use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder substituted for display fields that neither source provides.
pub const NOT_MENTIONED: &str = "Not Mentioned";

/// Consultation fee assumed by the fee filter when a record carries none.
pub const DEFAULT_CONSULTATION_FEE: u32 = 800;

/// Rating assumed by the rating filter when a record carries none.
pub const DEFAULT_RATING: f32 = 4.0;

// =============================================================================
// Canonical shape
// =============================================================================

/// Canonical doctor record used throughout filtering and pagination.
///
/// Invariants upheld by the normalizer:
/// - `id` is non-empty and unique within one merged result set
/// - `experience_years` is always present (unparsable input becomes 0)
/// - `languages` is never empty
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Doctor {
    pub id: String,
    pub full_name: String,
    pub medical_speciality: String,
    pub experience_years: u32,
    pub city: String,
    pub state: String,
    pub country: String,
    /// Absent means the record never stated a fee; filters substitute
    /// [`DEFAULT_CONSULTATION_FEE`], display layers show "N/A".
    pub consultation_fee: Option<u32>,
    /// 0.0–5.0 when present; filters substitute [`DEFAULT_RATING`].
    pub rating: Option<f32>,
    pub languages: Vec<String>,
    pub availability: Vec<String>,
    /// Either an absolute URL or an embedded-image token.
    pub photo: Option<String>,
    pub phone: String,
    pub email: String,
}

impl Doctor {
    /// Consultation fee with the documented filter-time default applied.
    pub fn fee_or_default(&self) -> u32 {
        self.consultation_fee.unwrap_or(DEFAULT_CONSULTATION_FEE)
    }

    /// Rating with the documented filter-time default applied.
    pub fn rating_or_default(&self) -> f32 {
        self.rating.unwrap_or(DEFAULT_RATING)
    }

    /// Whether `photo` holds an absolute URL rather than an embedded token.
    pub fn photo_is_url(&self) -> bool {
        self.photo
            .as_deref()
            .is_some_and(|p| p.starts_with("http"))
    }
}

// =============================================================================
// Source (a): remote listing endpoint
// =============================================================================

/// Raw record as returned by the doctor-listing endpoint.
///
/// The field names already roughly match the canonical shape; everything is
/// optional because the backend omits fields freely. `phone` arrives as a
/// string in some records and a bare number in others, so it gets a lenient
/// deserializer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteDoctorRecord {
    pub id: Option<String>,
    pub full_name: Option<String>,
    pub medical_speciality: Option<String>,
    /// Free text, e.g. `"12 years"`.
    pub experience: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub hospital_current_working: Option<String>,
    pub medical_license_number: Option<String>,
    pub doctor_photo: Option<String>,
    #[serde(deserialize_with = "string_or_number")]
    pub phone: Option<String>,
    pub email: Option<String>,
    pub consultation_fee: Option<u32>,
    pub rating: Option<f32>,
    pub languages: Option<Vec<String>>,
    pub availability: Option<Vec<String>>,
}

/// Accepts `"8897656245"`, `8897656245`, or `null` for the same field.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Integer(u64),
        Float(f64),
    }

    let value: Option<Raw> = Option::deserialize(deserializer)?;
    Ok(value.map(|raw| match raw {
        Raw::Text(s) => s,
        Raw::Integer(n) => n.to_string(),
        Raw::Float(n) => n.to_string(),
    }))
}

// =============================================================================
// Source (b): embedded fallback dataset
// =============================================================================

/// Record shape of the embedded fallback dataset.
///
/// Uses a different naming convention than the endpoint (`name` instead of
/// `fullName`, `speciality` instead of `medicalSpeciality`, `locality` and
/// `address` instead of structured city/state fields).
#[derive(Debug, Clone)]
pub struct FallbackDoctorRecord {
    pub name: String,
    /// Free text, e.g. `"8 years"`.
    pub experience: String,
    pub speciality: String,
    pub locality: String,
    pub address: String,
    pub phone: Option<u64>,
    pub email: Option<String>,
    pub gender: String,
    pub languages: Vec<String>,
    pub rating: f32,
    pub consultation_fee: u32,
    pub doctor_photo: Option<String>,
    pub city: String,
    pub state: String,
}
