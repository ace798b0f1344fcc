// Models module - exports all model types

mod coordinate;
mod dispatch;
mod location;

// Re-export model types
pub use self::coordinate::Coordinate;
pub use self::dispatch::DispatchResult;
pub use self::location::Location;

// Common type aliases for improved code readability
pub type Clinician = Location;
pub type Lab = Location;
pub type Miles = f64;
