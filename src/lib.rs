// Public modules
pub mod algorithms;
pub mod error;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::dispatch::DispatchOptimizer;
pub use algorithms::geocode::{FixedPointGeocoder, Geocoder, StaticTableGeocoder};
pub use algorithms::DispatchSolver;
pub use error::{DispatchError, Result};
pub use models::{Clinician, Coordinate, DispatchResult, Lab, Location};
