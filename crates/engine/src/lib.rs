//! Filtering and pagination engine for the doctor directory.
//!
//! This crate provides:
//! - `FilterState` + a pure reducer over a closed action set
//! - `DoctorFilter` trait and one implementation per filter dimension
//! - `FilterPipeline` for composing the predicates (logical AND)
//! - pagination (page slicing + page-number control windowing)
//! - `SearchSession`, the per-screen glue owning all of the above
//!
//! ## Architecture
//! State changes flow one way: an [`Action`] goes through [`reduce`], the
//! new state re-runs the [`FilterPipeline`] over the normalized doctor
//! pool, and the paginator windows the result. Everything here is
//! synchronous and side-effect free; fetching and rendering live in other
//! crates.
//!
//! ## Example Usage
//! ```ignore
//! use engine::{Action, FilterItem, SearchSession};
//!
//! let mut session = SearchSession::new(remote_records, Some("cardio"));
//! session.dispatch(Action::Toggle(FilterItem::FeeCeiling(1000)));
//! for doctor in session.page() {
//!     println!("{} ({})", doctor.full_name, doctor.medical_speciality);
//! }
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod pagination;
pub mod reducer;
pub mod session;
pub mod state;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use pagination::{PAGE_SIZE, PageControl};
pub use reducer::{Action, reduce};
pub use session::{FilterTag, SearchSession, TagTarget};
pub use state::{ExternalParams, FilterItem, FilterState};
pub use traits::DoctorFilter;
