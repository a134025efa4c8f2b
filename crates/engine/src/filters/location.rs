//! Location filter: substring match over city OR state.

use crate::filters::normalize;
use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct LocationFilter;

impl DoctorFilter for LocationFilter {
    fn name(&self) -> &str {
        "LocationFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.locations.is_empty() {
            return true;
        }
        let city = normalize(&doctor.city);
        let doctor_state = normalize(&doctor.state);
        state.locations.iter().any(|selected| {
            let wanted = normalize(selected);
            city.contains(&wanted) || doctor_state.contains(&wanted)
        })
    }
}
