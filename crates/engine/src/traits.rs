//! Core trait for the filtering pipeline.

use crate::state::FilterState;
use directory::Doctor;

/// One filter dimension's predicate.
///
/// Implementations must be pure: a doctor either passes or it doesn't,
/// given only the record and the current selections. An empty selection for
/// the dimension means "no constraint" and the predicate returns `true`.
///
/// `Send + Sync` so a pipeline can be shared across threads if a caller
/// wants to.
pub trait DoctorFilter: Send + Sync {
    /// Name of this filter, for logging.
    fn name(&self) -> &str;

    /// Whether `doctor` passes this dimension under the current selections.
    fn matches(&self, doctor: &Doctor, state: &FilterState) -> bool;
}
