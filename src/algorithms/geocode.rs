// Geocoding seam between patient addresses and coordinates

use std::collections::HashMap;

use crate::error::{DispatchError, Result};
use crate::models::Coordinate;

/// Resolves a street address to a geographic coordinate.
///
/// The dispatcher only ever sees this trait, so a real geocoding service
/// can be swapped in without touching the optimizer's contract.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate>;
}

/// Stand-in geocoder that maps every address to one fixed coordinate.
///
/// Real geocoding is an external service; until one is wired in, dispatch
/// runs against a canonical city-center point. Blank addresses are still
/// rejected as unresolvable.
#[derive(Debug, Clone, Copy)]
pub struct FixedPointGeocoder {
    fixed: Coordinate,
}

impl FixedPointGeocoder {
    /// Creates a geocoder pinned to the given coordinate
    pub fn new(fixed: Coordinate) -> Self {
        Self { fixed }
    }
}

impl Default for FixedPointGeocoder {
    /// Downtown Minneapolis, the canonical patient stand-in point
    fn default() -> Self {
        Self::new(Coordinate::new(44.9778, -93.2650))
    }
}

impl Geocoder for FixedPointGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate> {
        if address.trim().is_empty() {
            return Err(DispatchError::GeocodeFailure(address.to_string()));
        }
        Ok(self.fixed)
    }
}

/// Table-backed geocoder for tests and fixtures
#[derive(Debug, Clone, Default)]
pub struct StaticTableGeocoder {
    table: HashMap<String, Coordinate>,
}

impl StaticTableGeocoder {
    /// Creates an empty table geocoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an address with its coordinate
    pub fn insert<S: Into<String>>(&mut self, address: S, coordinate: Coordinate) {
        self.table.insert(address.into(), coordinate);
    }
}

impl Geocoder for StaticTableGeocoder {
    fn geocode(&self, address: &str) -> Result<Coordinate> {
        self.table
            .get(address)
            .copied()
            .ok_or_else(|| DispatchError::GeocodeFailure(address.to_string()))
    }
}
