// Coordinate model representing a geographic point in degrees

use serde::{Deserialize, Serialize};

/// A geographic coordinate in decimal degrees (WGS84-like, unvalidated range)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate from latitude and longitude in degrees
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
