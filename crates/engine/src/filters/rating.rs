//! Rating filter: EXACT equality against any selected value.
//!
//! This is not a "rated at least N" threshold: a 4.8-rated doctor matches
//! neither a selected 4 nor a selected 5. Unusual for a rating UI, but it is
//! the observed behavior and is preserved verbatim (flagged in DESIGN.md).
//! Records without a rating count as the default 4 here.

use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

pub struct RatingFilter;

impl DoctorFilter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.ratings.is_empty() {
            return true;
        }
        let rating = doctor.rating_or_default();
        state
            .ratings
            .iter()
            .any(|&selected| rating == selected as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::doctor;

    #[test]
    fn exact_equality_not_threshold() {
        let mut subject = doctor("Cardiologist");
        subject.rating = Some(4.8);

        let mut state = FilterState::default();
        state.ratings.insert(4);
        state.ratings.insert(5);
        // 4.8 equals neither 4 nor 5.
        assert!(!RatingFilter.matches(&subject, &state));

        subject.rating = Some(5.0);
        assert!(RatingFilter.matches(&subject, &state));
    }

    #[test]
    fn missing_rating_counts_as_four() {
        let subject = doctor("Dentist");

        let mut state = FilterState::default();
        state.ratings.insert(4);
        assert!(RatingFilter.matches(&subject, &state));

        let mut state = FilterState::default();
        state.ratings.insert(5);
        assert!(!RatingFilter.matches(&subject, &state));
    }
}
