//! Normalization of heterogeneous doctor records into the canonical shape.
//!
//! Both sources funnel through here before any filtering happens:
//! - endpoint records keep their own field when present, otherwise fall back
//!   to the [`NOT_MENTIONED`] placeholder
//! - fallback-dataset records get their differently-named fields mapped
//!   across and a synthetic, position-stable `id`
//!
//! Numeric defaults (fee 800, rating 4, experience 0) are deliberately NOT
//! applied here. They belong to the filters that need a value; the canonical
//! record keeps `None` so display layers can still show "N/A".

use crate::types::{Doctor, FallbackDoctorRecord, NOT_MENTIONED, RemoteDoctorRecord};

/// Parse the leading integer out of a free-text experience string.
///
/// `"12 years"` -> 12, `"  8yrs"` -> 8, `"senior"` -> 0.
pub fn parse_experience_years(text: &str) -> u32 {
    let digits: String = text
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

fn coalesce(value: &Option<String>) -> String {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_MENTIONED.to_string(),
    }
}

impl Doctor {
    /// Normalize a record from the listing endpoint.
    ///
    /// `index` is the record's position in the response; it is only used to
    /// synthesize an `id` for records the backend returned without one.
    pub fn from_remote(index: usize, record: &RemoteDoctorRecord) -> Self {
        let full_name = coalesce(&record.full_name);
        let id = match record.id.as_deref().map(str::trim) {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => format!("api-{}-{}", index, full_name),
        };

        Self {
            id,
            full_name,
            medical_speciality: coalesce(&record.medical_speciality),
            experience_years: record
                .experience
                .as_deref()
                .map(parse_experience_years)
                .unwrap_or(0),
            city: coalesce(&record.city),
            state: coalesce(&record.state),
            country: coalesce(&record.country),
            consultation_fee: record.consultation_fee,
            rating: record.rating,
            languages: non_empty_languages(record.languages.clone()),
            availability: record
                .availability
                .clone()
                .filter(|a| !a.is_empty())
                .unwrap_or_else(default_availability),
            photo: record.doctor_photo.clone(),
            phone: coalesce(&record.phone),
            email: coalesce(&record.email),
        }
    }

    /// Normalize a record from the embedded fallback dataset.
    ///
    /// `index` is the record's position in the dataset; combined with the
    /// name it yields an `id` that is stable within one pass and cannot
    /// collide with endpoint ids.
    pub fn from_fallback(index: usize, record: &FallbackDoctorRecord) -> Self {
        Self {
            id: format!("mock-{}-{}", index, record.name),
            full_name: record.name.clone(),
            medical_speciality: record.speciality.clone(),
            experience_years: parse_experience_years(&record.experience),
            // The dataset records a locality as well as a city; the locality
            // wins, matching how these records were always displayed.
            city: if record.locality.is_empty() {
                record.city.clone()
            } else {
                record.locality.clone()
            },
            state: record.state.clone(),
            country: "India".to_string(),
            consultation_fee: Some(record.consultation_fee),
            rating: Some(record.rating),
            languages: non_empty_languages(Some(record.languages.clone())),
            availability: vec![
                "Morning".to_string(),
                "Afternoon".to_string(),
                "Evening".to_string(),
            ],
            photo: record.doctor_photo.clone(),
            phone: record
                .phone
                .map(|p| p.to_string())
                .unwrap_or_else(|| NOT_MENTIONED.to_string()),
            email: record
                .email
                .clone()
                .unwrap_or_else(|| NOT_MENTIONED.to_string()),
        }
    }
}

fn non_empty_languages(languages: Option<Vec<String>>) -> Vec<String> {
    match languages {
        Some(list) if !list.is_empty() => list,
        _ => vec!["English".to_string()],
    }
}

fn default_availability() -> Vec<String> {
    vec!["Morning".to_string(), "Evening".to_string()]
}

/// Normalize both sources independently and concatenate, endpoint records
/// first.
///
/// Deliberately does NOT de-duplicate across sources: a doctor present in
/// both is listed twice. That mirrors the upstream behavior and this is the
/// place a future de-duplication pass would slot in.
pub fn merge_sources(
    remote: &[RemoteDoctorRecord],
    fallback: &[FallbackDoctorRecord],
) -> Vec<Doctor> {
    remote
        .iter()
        .enumerate()
        .map(|(i, r)| Doctor::from_remote(i, r))
        .chain(
            fallback
                .iter()
                .enumerate()
                .map(|(i, r)| Doctor::from_fallback(i, r)),
        )
        .collect()
}
