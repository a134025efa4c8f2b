//! Filter selection state.
//!
//! One `FilterState` instance exists per search session. It is only ever
//! replaced wholesale by the reducer (see the `reducer` module); nothing
//! else mutates it.

use serde::Serialize;
use std::collections::BTreeSet;

/// One selectable value, addressed by its filter dimension.
///
/// Encoding the dimension in the type makes "unknown dimension" actions
/// unrepresentable: every toggle/remove names a real dimension and carries a
/// value of the right type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FilterItem {
    Symptom(String),
    Specialty(String),
    Location(String),
    /// Maximum acceptable consultation fee, in rupees.
    FeeCeiling(u32),
    /// Exact star rating (1-5).
    Rating(u32),
    Language(String),
    Availability(String),
    /// One of the four experience bracket labels.
    Experience(String),
}

/// Current selections across every filter dimension.
///
/// The multi-select dimensions are ordered sets: toggling an absent value
/// adds it, toggling a present value removes it, and a value can never
/// appear twice. `current_page` is 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterState {
    /// Free-text specialty search.
    pub search_query: String,
    /// Single selected state, empty string meaning "no constraint".
    pub selected_state: String,
    pub symptoms: BTreeSet<String>,
    pub specialties: BTreeSet<String>,
    pub locations: BTreeSet<String>,
    pub fees: BTreeSet<u32>,
    pub ratings: BTreeSet<u32>,
    pub languages: BTreeSet<String>,
    pub availability: BTreeSet<String>,
    pub experience: BTreeSet<String>,
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            selected_state: String::new(),
            symptoms: BTreeSet::new(),
            specialties: BTreeSet::new(),
            locations: BTreeSet::new(),
            fees: BTreeSet::new(),
            ratings: BTreeSet::new(),
            languages: BTreeSet::new(),
            availability: BTreeSet::new(),
            experience: BTreeSet::new(),
            current_page: 1,
        }
    }
}

impl FilterState {
    /// State seeded with a search query, e.g. from a navigation parameter.
    pub fn with_search_query(query: impl Into<String>) -> Self {
        Self {
            search_query: query.into(),
            ..Self::default()
        }
    }

    /// Whether any dimension currently constrains the result set.
    pub fn has_active_filters(&self) -> bool {
        !self.search_query.is_empty()
            || !self.selected_state.is_empty()
            || !self.symptoms.is_empty()
            || !self.specialties.is_empty()
            || !self.locations.is_empty()
            || !self.fees.is_empty()
            || !self.ratings.is_empty()
            || !self.languages.is_empty()
            || !self.availability.is_empty()
            || !self.experience.is_empty()
    }

    /// Every selected multi-select value, in the dimension order used for
    /// rendering removable filter tags.
    pub fn active_items(&self) -> Vec<FilterItem> {
        let mut items = Vec::new();
        items.extend(self.symptoms.iter().cloned().map(FilterItem::Symptom));
        items.extend(self.specialties.iter().cloned().map(FilterItem::Specialty));
        items.extend(self.locations.iter().cloned().map(FilterItem::Location));
        items.extend(self.fees.iter().copied().map(FilterItem::FeeCeiling));
        items.extend(self.ratings.iter().copied().map(FilterItem::Rating));
        items.extend(self.languages.iter().cloned().map(FilterItem::Language));
        items.extend(self.availability.iter().cloned().map(FilterItem::Availability));
        items.extend(self.experience.iter().cloned().map(FilterItem::Experience));
        items
    }
}

/// Externally supplied partial state, e.g. a deep-link parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExternalParams {
    pub search_query: Option<String>,
    pub selected_state: Option<String>,
}

impl ExternalParams {
    pub fn search_query(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Self::default()
        }
    }
}
