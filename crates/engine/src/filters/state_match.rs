//! Single-select state filter: exact, case-insensitive match.

use crate::filters::normalize;
use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct StateFilter;

impl DoctorFilter for StateFilter {
    fn name(&self) -> &str {
        "StateFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.selected_state.is_empty() {
            return true;
        }
        normalize(&doctor.state) == normalize(&state.selected_state)
    }
}
