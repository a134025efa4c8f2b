//! Symptom filter: infers acceptable specialties from selected symptoms.
//!
//! Unlike the specialty filter this one matches the doctor's specialty
//! EXACTLY against the mapped list, not as a substring. Symptoms without a
//! map entry contribute nothing.

use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;
use directory::reference::specialties_for_symptom;

pub struct SymptomFilter;

impl DoctorFilter for SymptomFilter {
    fn name(&self) -> &str {
        "SymptomFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.symptoms.is_empty() {
            return true;
        }
        state.symptoms.iter().any(|symptom| {
            specialties_for_symptom(symptom)
                .iter()
                .any(|specialty| *specialty == doctor.medical_speciality)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::doctor;

    #[test]
    fn mapped_symptom_selects_its_specialties() {
        let mut state = FilterState::default();
        state.symptoms.insert("Chest Pain".to_string());

        assert!(SymptomFilter.matches(&doctor("Cardiologist"), &state));
        assert!(!SymptomFilter.matches(&doctor("Dentist"), &state));
    }

    #[test]
    fn match_is_exact_not_substring() {
        let mut state = FilterState::default();
        state.symptoms.insert("Chest Pain".to_string());

        // "Senior Cardiologist" is not exactly "Cardiologist".
        assert!(!SymptomFilter.matches(&doctor("Senior Cardiologist"), &state));
    }

    #[test]
    fn any_selected_symptom_suffices() {
        let mut state = FilterState::default();
        state.symptoms.insert("Chest Pain".to_string());
        state.symptoms.insert("Skin Rash".to_string());

        assert!(SymptomFilter.matches(&doctor("Dermatologist"), &state));
    }

    #[test]
    fn unmapped_symptom_matches_nothing() {
        let mut state = FilterState::default();
        state.symptoms.insert("Fatigue".to_string());

        assert!(!SymptomFilter.matches(&doctor("General Physician"), &state));
    }
}
