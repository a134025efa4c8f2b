//! Language filter: the doctor's languages must intersect the selection.

use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct LanguageFilter;

impl DoctorFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.languages.is_empty() {
            return true;
        }
        state
            .languages
            .iter()
            .any(|selected| doctor.languages.iter().any(|spoken| spoken == selected))
    }
}
