//! One search screen's worth of engine state.
//!
//! A `SearchSession` owns the merged doctor pool, the filter state, the
//! pipeline, and the memoized filtered result. All mutation goes through
//! [`SearchSession::dispatch`], which re-runs the pipeline; everything else
//! is a read-only view for the presentation layer. The session lives exactly
//! as long as its screen and is never persisted.

use crate::filter_pipeline::FilterPipeline;
use crate::pagination::{self, PAGE_SIZE, PageControl};
use crate::reducer::{Action, reduce};
use crate::state::{ExternalParams, FilterItem, FilterState};
use directory::dataset::fallback_doctors;
use directory::{Doctor, RemoteDoctorRecord, merge_sources};
use tracing::{debug, info};

/// What a removable filter tag points at.
#[derive(Debug, Clone, PartialEq)]
pub enum TagTarget {
    SearchQuery,
    SelectedState,
    Item(FilterItem),
}

/// One removable tag in the active-filter summary row.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterTag {
    pub label: String,
    pub target: TagTarget,
}

pub struct SearchSession {
    doctors: Vec<Doctor>,
    state: FilterState,
    pipeline: FilterPipeline,
    /// Pipeline output for the current `state`, refreshed on every dispatch.
    filtered: Vec<Doctor>,
    /// Sticky banner message from a failed listing fetch.
    load_error: Option<String>,
}

impl SearchSession {
    /// Session over fetched endpoint records plus the fallback dataset,
    /// optionally seeded with a navigation-parameter query.
    pub fn new(remote: Vec<RemoteDoctorRecord>, seed_query: Option<&str>) -> Self {
        let doctors = merge_sources(&remote, &fallback_doctors());
        info!(
            remote = remote.len(),
            total = doctors.len(),
            "search session opened"
        );
        Self::from_pool(doctors, seed_query, None)
    }

    /// Session after a failed fetch: fallback dataset only, plus a sticky
    /// error the presentation layer shows as a non-blocking banner.
    pub fn with_load_error(message: impl Into<String>, seed_query: Option<&str>) -> Self {
        let doctors = merge_sources(&[], &fallback_doctors());
        Self::from_pool(doctors, seed_query, Some(message.into()))
    }

    fn from_pool(
        doctors: Vec<Doctor>,
        seed_query: Option<&str>,
        load_error: Option<String>,
    ) -> Self {
        let state = match seed_query {
            Some(query) if !query.is_empty() => FilterState::with_search_query(query),
            _ => FilterState::default(),
        };
        let mut session = Self {
            doctors,
            state,
            pipeline: FilterPipeline::standard(),
            filtered: Vec::new(),
            load_error,
        };
        session.refresh();
        session
    }

    /// Apply one action and re-run the pipeline.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.filtered = self.pipeline.apply(self.doctors.clone(), &self.state);
        debug!(
            matched = self.filtered.len(),
            pool = self.doctors.len(),
            page = self.state.current_page,
            "filter pipeline refreshed"
        );
    }

    /// Bounds-checked page change; out-of-range requests are rejected here
    /// so the reducer never sees them. Returns whether the page changed.
    pub fn set_page(&mut self, page: usize) -> bool {
        if page < 1 || page > self.total_pages() || page == self.state.current_page {
            return false;
        }
        self.dispatch(Action::SetCurrentPage(page));
        true
    }

    /// The "next" control; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        self.set_page(self.state.current_page + 1)
    }

    /// The "previous" control; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        self.set_page(self.state.current_page.saturating_sub(1))
    }

    /// Re-seed the query when the navigation parameter changes externally.
    pub fn reseed_query(&mut self, query: &str) {
        if !query.is_empty() {
            self.dispatch(Action::LoadExternalParams(ExternalParams::search_query(
                query,
            )));
        }
    }

    /// Remove whatever a filter tag points at.
    pub fn remove_tag(&mut self, target: TagTarget) {
        match target {
            TagTarget::SearchQuery => self.dispatch(Action::SetSearchQuery(String::new())),
            TagTarget::SelectedState => self.dispatch(Action::SetSelectedState(String::new())),
            TagTarget::Item(item) => self.dispatch(Action::Remove(item)),
        }
    }

    // ------------------------------------------------------------------
    // Read-only views for the presentation layer
    // ------------------------------------------------------------------

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// All doctors passing the current filters, across every page.
    pub fn results(&self) -> &[Doctor] {
        &self.filtered
    }

    /// The current page's slice of the filtered results.
    pub fn page(&self) -> &[Doctor] {
        pagination::page_slice(&self.filtered, self.state.current_page)
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered.len())
    }

    /// Page-number controls for the current position.
    pub fn page_controls(&self) -> Vec<PageControl> {
        pagination::page_controls(self.state.current_page, self.total_pages())
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn has_active_filters(&self) -> bool {
        self.state.has_active_filters()
    }

    /// The removable-tag summary: search query, selected state, then every
    /// multi-select value in dimension order.
    pub fn filter_tags(&self) -> Vec<FilterTag> {
        let mut tags = Vec::new();
        if !self.state.search_query.is_empty() {
            tags.push(FilterTag {
                label: self.state.search_query.clone(),
                target: TagTarget::SearchQuery,
            });
        }
        if !self.state.selected_state.is_empty() {
            tags.push(FilterTag {
                label: self.state.selected_state.clone(),
                target: TagTarget::SelectedState,
            });
        }
        for item in self.state.active_items() {
            tags.push(FilterTag {
                label: tag_label(&item),
                target: TagTarget::Item(item),
            });
        }
        tags
    }
}

fn tag_label(item: &FilterItem) -> String {
    match item {
        FilterItem::Symptom(v)
        | FilterItem::Specialty(v)
        | FilterItem::Location(v)
        | FilterItem::Language(v)
        | FilterItem::Availability(v)
        | FilterItem::Experience(v) => v.clone(),
        FilterItem::FeeCeiling(fee) => format!("₹{fee}"),
        FilterItem::Rating(rating) => format!("{rating} Stars"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote(name: &str, speciality: &str) -> RemoteDoctorRecord {
        RemoteDoctorRecord {
            full_name: Some(name.to_string()),
            medical_speciality: Some(speciality.to_string()),
            state: Some("Telangana".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn session_always_includes_the_fallback_dataset() {
        let session = SearchSession::new(vec![remote("Asha Rao", "Dentist")], None);
        assert_eq!(session.results().len(), 1 + 4);
        assert!(session.load_error().is_none());
    }

    #[test]
    fn failed_fetch_degrades_to_fallback_plus_banner() {
        let session = SearchSession::with_load_error("listing unavailable", None);
        assert_eq!(session.results().len(), 4);
        assert_eq!(session.load_error(), Some("listing unavailable"));
    }

    #[test]
    fn seed_query_filters_from_the_start() {
        // Two fallback gastroenterologists exist.
        let session = SearchSession::new(Vec::new(), Some("gastro"));
        assert_eq!(session.results().len(), 2);
        assert!(session.has_active_filters());
    }

    #[test]
    fn dispatch_refilters_and_resets_page() {
        let many: Vec<RemoteDoctorRecord> = (0..30)
            .map(|i| remote(&format!("Doctor {i}"), "Dentist"))
            .collect();
        let mut session = SearchSession::new(many, None);
        assert_eq!(session.total_pages(), 4); // 34 doctors

        assert!(session.set_page(3));
        assert_eq!(session.current_page(), 3);

        session.dispatch(Action::Toggle(FilterItem::Specialty("Dentist".to_string())));
        assert_eq!(session.current_page(), 1);
        assert_eq!(session.results().len(), 31); // 30 remote + 1 fallback dentist
    }

    #[test]
    fn page_navigation_is_bounds_checked() {
        let mut session = SearchSession::new(Vec::new(), None);
        assert_eq!(session.total_pages(), 1);

        assert!(!session.set_page(0));
        assert!(!session.set_page(2));
        assert!(!session.previous_page());
        assert!(!session.next_page());
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn tags_cover_query_state_and_items() {
        let mut session = SearchSession::new(Vec::new(), Some("heart"));
        session.dispatch(Action::SetSelectedState("Telangana".to_string()));
        session.dispatch(Action::Toggle(FilterItem::FeeCeiling(1000)));
        session.dispatch(Action::Toggle(FilterItem::Rating(5)));

        let labels: Vec<String> = session.filter_tags().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["heart", "Telangana", "₹1000", "5 Stars"]);
    }

    #[test]
    fn removing_a_tag_clears_its_selection() {
        let mut session = SearchSession::new(Vec::new(), Some("heart"));
        session.dispatch(Action::Toggle(FilterItem::Language("Hindi".to_string())));

        session.remove_tag(TagTarget::Item(FilterItem::Language("Hindi".to_string())));
        session.remove_tag(TagTarget::SearchQuery);

        assert!(!session.has_active_filters());
        assert!(session.filter_tags().is_empty());
    }

    #[test]
    fn reseed_query_replaces_the_search() {
        let mut session = SearchSession::new(Vec::new(), Some("dental"));
        session.reseed_query("gastro");
        assert_eq!(session.state().search_query, "gastro");
        assert_eq!(session.results().len(), 2);

        // An empty parameter does not clobber the query.
        session.reseed_query("");
        assert_eq!(session.state().search_query, "gastro");
    }
}
