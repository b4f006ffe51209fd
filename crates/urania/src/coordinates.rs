use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Observer location for topocentric calculations.
///
/// Values are taken as given: there is no geographic range check. Two
/// locations are equal only when all three doubles are bitwise equal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    longitude: f64,
    latitude: f64,
    altitude: f64,
}

impl Coordinates {
    /// Longitude and latitude in degrees, altitude in meters
    pub fn new(longitude: f64, latitude: f64, altitude: f64) -> Self {
        Self {
            longitude,
            latitude,
            altitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn is_finite(&self) -> bool {
        self.longitude.is_finite() && self.latitude.is_finite() && self.altitude.is_finite()
    }

    fn bits(&self) -> [u64; 3] {
        [
            self.longitude.to_bits(),
            self.latitude.to_bits(),
            self.altitude.to_bits(),
        ]
    }
}

impl PartialEq for Coordinates {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Coordinates {}

impl Hash for Coordinates {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lon {:.4}, lat {:.4}, alt {:.1}m",
            self.longitude, self.latitude, self.altitude
        )
    }
}
