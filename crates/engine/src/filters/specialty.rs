//! Multi-select specialty filter: case-insensitive substring match.

use crate::filters::normalize;
use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct SpecialtyFilter;

impl DoctorFilter for SpecialtyFilter {
    fn name(&self) -> &str {
        "SpecialtyFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.specialties.is_empty() {
            return true;
        }
        let speciality = normalize(&doctor.medical_speciality);
        state
            .specialties
            .iter()
            .any(|selected| speciality.contains(&normalize(selected)))
    }
}
