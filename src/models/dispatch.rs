// Dispatch result model returned to callers

use crate::models::Miles;
use serde::Serialize;

/// The winning match of a dispatch run.
///
/// Computed fresh per request and never persisted. Per-clinician
/// intermediate totals stay inside the optimizer; only the winner is
/// reported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DispatchResult {
    /// Name of the clinician with the shortest total loop
    pub clinician_name: String,

    /// Total loop distance in miles, rounded to the nearest tenth
    pub total_distance_miles: Miles,
}

impl DispatchResult {
    /// Creates a new dispatch result
    pub fn new<S: Into<String>>(clinician_name: S, total_distance_miles: Miles) -> Self {
        Self {
            clinician_name: clinician_name.into(),
            total_distance_miles,
        }
    }
}
