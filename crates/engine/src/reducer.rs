//! The filter state machine: a pure, total transition function over a
//! closed set of actions.
//!
//! Every selection change in the UI becomes one [`Action`] dispatched
//! through [`reduce`]. The function never performs I/O and never fails;
//! totality over "unknown" actions falls out of the closed enum. Every
//! transition except an explicit page change resets `current_page` to 1,
//! because any other change invalidates the current page's contents.

use crate::state::{ExternalParams, FilterItem, FilterState};
use std::collections::BTreeSet;

/// All transitions the filter state machine supports.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the free-text specialty search.
    SetSearchQuery(String),
    /// Replace the single-select state, empty string clearing it.
    SetSelectedState(String),
    /// Symmetric-difference one value against its dimension's set.
    Toggle(FilterItem),
    /// Remove one value from its dimension's set; no-op when absent.
    Remove(FilterItem),
    /// Empty every multi-select dimension. `search_query` and
    /// `selected_state` are preserved, matching the shipped behavior;
    /// kept verbatim pending product confirmation.
    ClearAllFilters,
    /// Jump to a page. Applied verbatim: bounds-checking against the
    /// current total-page count is the dispatching caller's job.
    SetCurrentPage(usize),
    /// Merge an externally supplied partial state over the current one.
    LoadExternalParams(ExternalParams),
}

/// Apply one action to a state, producing the next state.
pub fn reduce(state: &FilterState, action: Action) -> FilterState {
    match action {
        Action::SetSearchQuery(query) => FilterState {
            search_query: query,
            current_page: 1,
            ..state.clone()
        },

        Action::SetSelectedState(selected) => FilterState {
            selected_state: selected,
            current_page: 1,
            ..state.clone()
        },

        Action::Toggle(item) => {
            let mut next = state.clone();
            match item {
                FilterItem::Symptom(v) => toggle(&mut next.symptoms, v),
                FilterItem::Specialty(v) => toggle(&mut next.specialties, v),
                FilterItem::Location(v) => toggle(&mut next.locations, v),
                FilterItem::FeeCeiling(v) => toggle(&mut next.fees, v),
                FilterItem::Rating(v) => toggle(&mut next.ratings, v),
                FilterItem::Language(v) => toggle(&mut next.languages, v),
                FilterItem::Availability(v) => toggle(&mut next.availability, v),
                FilterItem::Experience(v) => toggle(&mut next.experience, v),
            }
            next.current_page = 1;
            next
        }

        Action::Remove(item) => {
            let mut next = state.clone();
            match item {
                FilterItem::Symptom(v) => drop_value(&mut next.symptoms, &v),
                FilterItem::Specialty(v) => drop_value(&mut next.specialties, &v),
                FilterItem::Location(v) => drop_value(&mut next.locations, &v),
                FilterItem::FeeCeiling(v) => drop_value(&mut next.fees, &v),
                FilterItem::Rating(v) => drop_value(&mut next.ratings, &v),
                FilterItem::Language(v) => drop_value(&mut next.languages, &v),
                FilterItem::Availability(v) => drop_value(&mut next.availability, &v),
                FilterItem::Experience(v) => drop_value(&mut next.experience, &v),
            }
            next.current_page = 1;
            next
        }

        Action::ClearAllFilters => FilterState {
            search_query: state.search_query.clone(),
            selected_state: state.selected_state.clone(),
            ..FilterState::default()
        },

        Action::SetCurrentPage(page) => FilterState {
            current_page: page,
            ..state.clone()
        },

        Action::LoadExternalParams(params) => {
            let mut next = state.clone();
            if let Some(query) = params.search_query {
                next.search_query = query;
            }
            if let Some(selected) = params.selected_state {
                next.selected_state = selected;
            }
            next.current_page = 1;
            next
        }
    }
}

fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

fn drop_value<T: Ord>(set: &mut BTreeSet<T>, value: &T) {
    set.remove(value);
}
