//! Availability filter: the doctor's slots must intersect the selection.

use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct AvailabilityFilter;

impl DoctorFilter for AvailabilityFilter {
    fn name(&self) -> &str {
        "AvailabilityFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.availability.is_empty() {
            return true;
        }
        state
            .availability
            .iter()
            .any(|selected| doctor.availability.iter().any(|slot| slot == selected))
    }
}
