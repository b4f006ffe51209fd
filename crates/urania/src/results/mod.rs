//! Immutable results of a built request.

pub mod cusps;
pub mod planets;
pub mod transit;

pub use cusps::CuspPositions;
pub use planets::PlanetPositions;
pub use transit::TransitMoment;

use crate::coordinates::Coordinates;
use crate::flags::{CalculationFlags, ZodiacMode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resolved request parameters a result was computed from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestContext {
    event: DateTime<Utc>,
    julian_day: f64,
    flags: CalculationFlags,
    observer: Option<Coordinates>,
}

impl RequestContext {
    pub fn new(
        event: DateTime<Utc>,
        julian_day: f64,
        flags: CalculationFlags,
        observer: Option<Coordinates>,
    ) -> Self {
        Self {
            event,
            julian_day,
            flags,
            observer,
        }
    }

    /// The requested event, Universal Time
    pub fn event(&self) -> DateTime<Utc> {
        self.event
    }

    pub fn julian_day(&self) -> f64 {
        self.julian_day
    }

    pub fn flags(&self) -> CalculationFlags {
        self.flags
    }

    pub fn zodiac(&self) -> ZodiacMode {
        self.flags.zodiac()
    }

    pub fn observer(&self) -> Option<&Coordinates> {
        self.observer.as_ref()
    }

    pub fn is_topocentric(&self) -> bool {
        self.flags.is_topocentric()
    }
}
