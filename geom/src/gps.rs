use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents a (longitude, latitude) pair in degrees. No range validation;
/// the data is hand-authored.
// longitude is x, latitude is y
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    pub fn x(self) -> f64 {
        self.longitude
    }

    pub fn y(self) -> f64 {
        self.latitude
    }

    /// Shift by degrees in each axis.
    pub fn offset(self, dlon: f64, dlat: f64) -> LonLat {
        LonLat::new(self.longitude + dlon, self.latitude + dlat)
    }

    /// The GeoJSON position convention: `[longitude, latitude]`.
    pub fn to_geojson(self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}
