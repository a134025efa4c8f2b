//! Experience filter: bracket the doctor's years, then match the bracket.

use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

/// Classify whole years of practice into exactly one of the four brackets.
///
/// Boundary years fall into the LOWER bracket: 3 -> "1-3 years",
/// 5 -> "3-5 years", 10 -> "5-10 years".
pub fn experience_bracket(years: u32) -> &'static str {
    if years <= 3 {
        "1-3 years"
    } else if years <= 5 {
        "3-5 years"
    } else if years <= 10 {
        "5-10 years"
    } else {
        "10+ years"
    }
}

pub struct ExperienceFilter;

impl DoctorFilter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool {
        if state.experience.is_empty() {
            return true;
        }
        state
            .experience
            .contains(experience_bracket(doctor.experience_years))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::doctor;
    use directory::reference::EXPERIENCE_BRACKETS;

    #[test]
    fn bracketing_is_total_over_small_years() {
        for years in 0..=60 {
            let bracket = experience_bracket(years);
            assert!(EXPERIENCE_BRACKETS.contains(&bracket));
        }
    }

    #[test]
    fn boundaries_classify_into_the_lower_bracket() {
        assert_eq!(experience_bracket(3), "1-3 years");
        assert_eq!(experience_bracket(4), "3-5 years");
        assert_eq!(experience_bracket(5), "3-5 years");
        assert_eq!(experience_bracket(6), "5-10 years");
        assert_eq!(experience_bracket(10), "5-10 years");
        assert_eq!(experience_bracket(11), "10+ years");
    }

    #[test]
    fn zero_years_lands_in_the_first_bracket() {
        assert_eq!(experience_bracket(0), "1-3 years");
    }

    #[test]
    fn filter_uses_the_bracket() {
        let mut subject = doctor("Cardiologist");
        subject.experience_years = 12;

        let mut state = FilterState::default();
        state.experience.insert("10+ years".to_string());
        assert!(ExperienceFilter.matches(&subject, &state));

        let mut state = FilterState::default();
        state.experience.insert("5-10 years".to_string());
        assert!(!ExperienceFilter.matches(&subject, &state));
    }
}
