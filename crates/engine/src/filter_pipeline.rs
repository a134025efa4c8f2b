//! The FilterPipeline composes the per-dimension predicates.
//!
//! A doctor survives the pipeline iff EVERY predicate passes (logical AND).
//! Predicates are pure, so evaluation order only affects log output, not
//! results.

use crate::filters::{
    AvailabilityFilter, ExperienceFilter, FeeFilter, LanguageFilter, LocationFilter,
    RatingFilter, SpecialtyFilter, SpecialtySearchFilter, StateFilter, SymptomFilter,
};
use crate::state::FilterState;
use crate::traits::DoctorFilter;
use directory::Doctor;

/// Chains filter predicates together.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::standard();
/// let filtered = pipeline.apply(doctors, &filter_state);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn DoctorFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The full pipeline: every filter dimension, in the order the UI
    /// presents them.
    pub fn standard() -> Self {
        Self::new()
            .add_filter(SpecialtySearchFilter)
            .add_filter(StateFilter)
            .add_filter(SymptomFilter)
            .add_filter(SpecialtyFilter)
            .add_filter(LocationFilter)
            .add_filter(FeeFilter)
            .add_filter(RatingFilter)
            .add_filter(LanguageFilter)
            .add_filter(AvailabilityFilter)
            .add_filter(ExperienceFilter)
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl DoctorFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence, keeping doctors that pass every one.
    pub fn apply(&self, doctors: Vec<Doctor>, state: &FilterState) -> Vec<Doctor> {
        let mut current = doctors;
        for filter in &self.filters {
            let before = current.len();
            current.retain(|doctor| filter.matches(doctor, state));
            tracing::debug!(
                "Applied filter: {} ({} -> {})",
                filter.name(),
                before,
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::doctor;
    use crate::state::FilterItem;

    #[test]
    fn empty_pipeline_is_identity() {
        let pipeline = FilterPipeline::new();
        let doctors = vec![doctor("Cardiologist"), doctor("Dentist")];
        let filtered = pipeline.apply(doctors.clone(), &FilterState::default());
        assert_eq!(filtered, doctors);
    }

    #[test]
    fn standard_pipeline_with_no_selections_is_identity() {
        let pipeline = FilterPipeline::standard();
        let doctors = vec![doctor("Cardiologist"), doctor("Dentist"), doctor("Neurologist")];
        let filtered = pipeline.apply(doctors.clone(), &FilterState::default());
        assert_eq!(filtered, doctors);
    }

    #[test]
    fn all_dimensions_must_pass() {
        let pipeline = FilterPipeline::standard();

        let mut cardiologist = doctor("Cardiologist");
        cardiologist.experience_years = 12;
        cardiologist.consultation_fee = Some(900);

        // Experience matches, fee ceiling does not.
        let mut state = FilterState::default();
        state.experience.insert("10+ years".to_string());
        state.fees.insert(500);
        assert!(pipeline.apply(vec![cardiologist.clone()], &state).is_empty());

        // Raising the ceiling lets the same doctor through.
        state.fees.insert(1000);
        assert_eq!(pipeline.apply(vec![cardiologist], &state).len(), 1);
    }

    #[test]
    fn relative_order_is_preserved() {
        let pipeline = FilterPipeline::standard();
        let doctors = vec![doctor("Cardiologist"), doctor("Dentist"), doctor("Cardiology Unit")];

        let mut state = FilterState::default();
        state.specialties.insert("Cardio".to_string());

        let filtered = pipeline.apply(doctors, &state);
        let ids: Vec<&str> = filtered.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["test-Cardiologist", "test-Cardiology Unit"]);
    }

    #[test]
    fn toggled_selection_filters_then_restores() {
        use crate::reducer::{Action, reduce};

        let pipeline = FilterPipeline::standard();
        let doctors = vec![doctor("Cardiologist"), doctor("Dentist")];

        let state = reduce(
            &FilterState::default(),
            Action::Toggle(FilterItem::Specialty("Dentist".to_string())),
        );
        assert_eq!(pipeline.apply(doctors.clone(), &state).len(), 1);

        let state = reduce(&state, Action::Toggle(FilterItem::Specialty("Dentist".to_string())));
        assert_eq!(pipeline.apply(doctors, &state).len(), 2);
    }
}
