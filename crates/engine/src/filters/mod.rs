//! Predicate implementations, one file per filter dimension.

mod availability;
mod experience;
mod fee;
mod language;
mod location;
mod rating;
mod specialty;
mod specialty_search;
mod state_match;
mod symptom;

pub use availability::AvailabilityFilter;
pub use experience::{ExperienceFilter, experience_bracket};
pub use fee::FeeFilter;
pub use language::LanguageFilter;
pub use location::LocationFilter;
pub use rating::RatingFilter;
pub use specialty::SpecialtyFilter;
pub use specialty_search::SpecialtySearchFilter;
pub use state_match::StateFilter;
pub use symptom::SymptomFilter;

/// Trimmed, lowercased view of a field for case-insensitive comparison.
pub(crate) fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}
