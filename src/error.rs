//! Error types for clinician dispatch.
//!
//! Every fallible operation in the crate returns [`DispatchError`]. Errors
//! surface synchronously from the dispatch entry points; there are no
//! internal retries.

use thiserror::Error;

/// Main error type for dispatch operations
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The clinician roster is empty; retrying cannot help with static data
    #[error("no clinicians available for dispatch")]
    NoClinicianAvailable,

    /// A lab drop-off was requested but the lab list is empty
    #[error("lab drop-off required but no labs are on the roster")]
    NoLabAvailable,

    /// The patient address could not be resolved to coordinates
    #[error("could not resolve address: {0}")]
    GeocodeFailure(String),

    /// Roster file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Roster file did not parse as valid roster JSON
    #[error("roster parse error: {0}")]
    RosterParse(#[from] serde_json::Error),
}

/// Result type alias for dispatch operations
pub type Result<T> = std::result::Result<T, DispatchError>;
