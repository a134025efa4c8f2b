//! Consultation-fee filter: any selected ceiling must cover the fee.
//!
//! Records without a stated fee are assumed to cost the documented default
//! (800) for filtering purposes only.

use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct FeeFilter;

impl DoctorFilter for FeeFilter {
    fn name(&self) -> &str {
        "FeeFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.fees.is_empty() {
            return true;
        }
        let fee = doctor.fee_or_default();
        state.fees.iter().any(|&ceiling| fee <= ceiling)
    }
}
