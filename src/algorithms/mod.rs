pub mod dispatch;
pub mod geocode;

// Common algorithm traits
use crate::error::Result;
use crate::models::{Coordinate, DispatchResult};

/// Trait for clinician dispatch solvers
pub trait DispatchSolver {
    /// Find the clinician whose visit loop covers the fewest total miles
    fn find_optimal_clinician(
        &self,
        patient_address: &str,
        requires_lab: bool,
    ) -> Result<DispatchResult>;

    /// Same computation for a patient coordinate that is already resolved
    fn find_optimal_for_coordinate(
        &self,
        patient: Coordinate,
        requires_lab: bool,
    ) -> Result<DispatchResult>;
}
