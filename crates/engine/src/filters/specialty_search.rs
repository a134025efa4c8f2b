//! Free-text specialty search with keyword expansion.
//!
//! A query naming a known specialty ("Cardiologist") expands to that
//! specialty's synonym set; anything else ("cardio") is matched as a raw
//! substring. Either way the doctor passes if its specialty contains ANY
//! keyword.

use crate::filters::normalize;
use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;
use directory::reference::specialty_keywords;

pub struct SpecialtySearchFilter;

impl DoctorFilter for SpecialtySearchFilter {
    fn name(&self) -> &str {
        "SpecialtySearchFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        let query = normalize(&state.search_query);
        if query.is_empty() {
            return true;
        }

        let speciality = normalize(&doctor.medical_speciality);
        specialty_keywords(&query)
            .iter()
            .any(|keyword| speciality.contains(keyword))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::doctor;

    #[test]
    fn empty_query_imposes_no_constraint() {
        let state = FilterState::default();
        assert!(SpecialtySearchFilter.matches(&doctor("Cardiologist"), &state));
    }

    #[test]
    fn raw_substring_matches() {
        let state = FilterState::with_search_query("cardio");
        assert!(SpecialtySearchFilter.matches(&doctor("Cardiologist"), &state));
        assert!(!SpecialtySearchFilter.matches(&doctor("Dentist"), &state));
    }

    #[test]
    fn known_specialty_expands_to_synonyms() {
        // "heart" is a synonym keyword, not part of the label itself.
        let state = FilterState::with_search_query("Cardiologist");
        assert!(SpecialtySearchFilter.matches(&doctor("Cardiology & Heart Care"), &state));
    }

    #[test]
    fn query_is_trimmed_and_case_insensitive() {
        let state = FilterState::with_search_query("  DENTAL ");
        assert!(SpecialtySearchFilter.matches(&doctor("Dentist (Dental Surgeon)"), &state));
    }
}
