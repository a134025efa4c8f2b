//! # Directory Crate
//!
//! Canonical doctor records for the search engine, merged from two
//! heterogeneously-shaped sources.
//!
//! ## Main Components
//!
//! - **types**: `Doctor` (canonical) plus the two raw record shapes
//! - **normalize**: coalescing rules, id synthesis, experience parsing,
//!   and the two-source merge
//! - **dataset**: the embedded fallback records, always shown alongside
//!   endpoint data
//! - **reference**: static filter lists and the symptom/keyword lookup maps
//!
//! ## Example Usage
//!
//! ```ignore
//! use directory::{dataset::fallback_doctors, normalize::merge_sources};
//!
//! let remote = client.fetch_all().await?;
//! let doctors = merge_sources(&remote, &fallback_doctors());
//! ```

pub mod dataset;
pub mod normalize;
pub mod reference;
pub mod types;

// Re-export commonly used items
pub use normalize::{merge_sources, parse_experience_years};
pub use types::{
    DEFAULT_CONSULTATION_FEE, DEFAULT_RATING, Doctor, FallbackDoctorRecord, NOT_MENTIONED,
    RemoteDoctorRecord,
};
