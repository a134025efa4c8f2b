//! End-to-end tests over the whole engine: reducer -> pipeline -> paginator,
//! driven through `SearchSession` the way a screen would drive it.

use directory::RemoteDoctorRecord;
use engine::pagination::{page_controls, page_slice, total_pages};
use engine::{Action, FilterItem, FilterState, PageControl, SearchSession, reduce};

fn remote_doctor(
    name: &str,
    speciality: &str,
    state: &str,
    fee: u32,
    experience: &str,
) -> RemoteDoctorRecord {
    RemoteDoctorRecord {
        full_name: Some(name.to_string()),
        medical_speciality: Some(speciality.to_string()),
        experience: Some(experience.to_string()),
        city: Some("Hyderabad".to_string()),
        state: Some(state.to_string()),
        consultation_fee: Some(fee),
        rating: Some(4.0),
        languages: Some(vec!["English".to_string(), "Telugu".to_string()]),
        availability: Some(vec!["Morning".to_string()]),
        ..Default::default()
    }
}

#[test]
fn unfiltered_session_returns_the_full_merged_pool() {
    let remote = vec![
        remote_doctor("One", "Dentist", "Delhi", 300, "2 years"),
        remote_doctor("Two", "Neurologist", "Kerala", 600, "6 years"),
    ];
    let session = SearchSession::new(remote, None);

    // Identity law: no selections -> remote + the 4 fallback records.
    assert_eq!(session.results().len(), 6);
    assert_eq!(session.page().len(), 6);
    assert_eq!(session.total_pages(), 1);
}

#[test]
fn experience_and_fee_interact_as_an_and() {
    // The worked example: 12 years of experience, fee 900.
    let remote = vec![remote_doctor(
        "Tharun",
        "Cardiologist",
        "Telangana",
        900,
        "12 years",
    )];
    // The search narrows the pool to cardiologists first: this record plus
    // the fallback cardiologist (also 12 years, fee 900).
    let mut session = SearchSession::new(remote, Some("cardio"));

    session.dispatch(Action::Toggle(FilterItem::Experience("10+ years".to_string())));
    session.dispatch(Action::Toggle(FilterItem::FeeCeiling(500)));
    // Fee 900 exceeds the only ceiling: both cardiologists excluded.
    assert!(session.results().is_empty());

    session.dispatch(Action::Toggle(FilterItem::FeeCeiling(1000)));
    // 900 <= 1000 for the remote doctor; the fallback cardiologist has 12
    // years and fee 900 as well.
    assert_eq!(session.results().len(), 2);
}

#[test]
fn free_text_search_matches_via_keyword_expansion() {
    let session = SearchSession::new(Vec::new(), Some("cardio"));
    let specialties: Vec<&str> = session
        .results()
        .iter()
        .map(|d| d.medical_speciality.as_str())
        .collect();
    assert_eq!(specialties, vec!["Cardiologist"]);
}

#[test]
fn clear_all_preserves_query_and_selected_state_only() {
    let mut state = FilterState::default();
    state = reduce(&state, Action::SetSelectedState("Telangana".to_string()));
    state = reduce(
        &state,
        Action::Toggle(FilterItem::Specialty("Dentist".to_string())),
    );
    state = reduce(&state, Action::SetSearchQuery("heart".to_string()));

    let cleared = reduce(&state, Action::ClearAllFilters);
    assert_eq!(cleared.selected_state, "Telangana");
    assert_eq!(cleared.search_query, "heart");
    assert!(cleared.specialties.is_empty());
    assert!(!cleared.search_query.is_empty());
}

#[test]
fn pagination_partitions_every_result_exactly_once() {
    let remote: Vec<RemoteDoctorRecord> = (0..91)
        .map(|i| remote_doctor(&format!("Doc {i}"), "Dentist", "Delhi", 200, "4 years"))
        .collect();
    let session = SearchSession::new(remote, None);

    let total = session.results().len();
    assert_eq!(total, 95);
    let pages = total_pages(total);
    assert_eq!(pages, 10);

    let mut ids = Vec::new();
    for page in 1..=pages {
        ids.extend(
            page_slice(session.results(), page)
                .iter()
                .map(|d| d.id.clone()),
        );
    }
    assert_eq!(ids.len(), total);
    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), total);
}

#[test]
fn page_control_window_matches_the_canonical_example() {
    use PageControl::{Ellipsis, Page};
    assert_eq!(
        page_controls(5, 10),
        vec![
            Page(1),
            Ellipsis,
            Page(3),
            Page(4),
            Page(5),
            Page(6),
            Page(7),
            Ellipsis,
            Page(10),
        ]
    );
}

#[test]
fn state_filter_is_exact_while_location_is_substring() {
    let remote = vec![
        remote_doctor("One", "Dentist", "Telangana", 300, "2 years"),
        remote_doctor("Two", "Dentist", "West Bengal", 300, "2 years"),
    ];
    let mut session = SearchSession::new(remote, None);

    session.dispatch(Action::SetSelectedState("telangana".to_string()));
    // Remote "One" plus the fallback cardiologist in Telangana.
    assert_eq!(session.results().len(), 2);

    session.dispatch(Action::SetSelectedState(String::new()));
    session.dispatch(Action::Toggle(FilterItem::Location("Hyderabad".to_string())));
    // Location matches city as a substring: both remote records plus the
    // fallback doctor whose city is Hyderabad... but that record's locality
    // ("LB Nagar") replaced its city, so only the remote pair match.
    assert_eq!(session.results().len(), 2);
}

#[test]
fn fetch_failure_path_still_filters_and_paginates() {
    let mut session = SearchSession::with_load_error("Failed to load doctors.", None);
    assert_eq!(session.load_error(), Some("Failed to load doctors."));
    assert_eq!(session.results().len(), 4);

    session.dispatch(Action::Toggle(FilterItem::Symptom("Abdominal Pain".to_string())));
    // Abdominal Pain maps to Gastroenterologist; the dataset has two.
    assert_eq!(session.results().len(), 2);
    assert_eq!(session.total_pages(), 1);

    // The banner is sticky across dispatches.
    assert_eq!(session.load_error(), Some("Failed to load doctors."));
}
