// Distance calculation utilities

use crate::models::{Coordinate, Miles};

/// Mean Earth radius in miles used for great-circle mileage
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Round a mileage to the nearest tenth of a mile.
///
/// Dispatch totals are compared and reported at this precision, so every
/// distance passes through here before anything downstream sees it.
pub fn round_to_tenth(miles: Miles) -> Miles {
    (miles * 10.0).round() / 10.0
}

/// Calculate the great-circle distance in miles between two coordinates
/// using the haversine formula, rounded to the nearest tenth of a mile
pub fn haversine_miles(a: Coordinate, b: Coordinate) -> Miles {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    round_to_tenth(EARTH_RADIUS_MILES * c)
}
