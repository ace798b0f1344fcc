// Location model representing a named point of interest with a coordinate

use crate::models::Coordinate;
use serde::{Deserialize, Serialize};

/// A named physical point of interest on the roster.
///
/// Clinician home bases and lab drop-off facilities are both plain
/// `Location` records; neither carries extra fields in the current scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Display name of the location (e.g. a clinician's name)
    pub name: String,

    /// Street address of the location
    pub address: String,

    /// Geographic coordinate of the location
    pub coordinate: Coordinate,
}

impl Location {
    /// Creates a new location with the given name, address, and coordinate
    pub fn new<S: Into<String>>(name: S, address: S, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            coordinate,
        }
    }
}
