use crate::coordinates::Coordinates;
use crate::ephemeris::search::{self, SearchSettings};
use crate::error::EngineError;
use crate::flags::CalculationFlags;
use crate::symbols::{Body, HouseSystem};
use crate::time;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Configuration threaded into every engine call.
///
/// Engines must not keep observer or sidereal state between calls; whatever
/// a call needs is in here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub flags: CalculationFlags,
    pub observer: Option<Coordinates>,
}

impl EngineConfig {
    pub fn geocentric(flags: CalculationFlags) -> Self {
        Self {
            flags,
            observer: None,
        }
    }

    pub fn topocentric(flags: CalculationFlags, observer: Coordinates) -> Self {
        Self {
            flags,
            observer: Some(observer),
        }
    }
}

/// Position of one body as returned by the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees (0-360)
    pub longitude: f64,
    /// Ecliptic latitude in degrees
    pub latitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    /// Flags the engine actually computed with
    pub flags: CalculationFlags,
}

/// Raw house calculation output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseTable {
    /// Index 0 is unused; 1..=12 are the house cusps
    pub cusps: [f64; 13],
    pub ascendant: f64,
    pub midheaven: f64,
}

/// What a transit search is looking for
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitGoal {
    /// A fixed ecliptic longitude in degrees
    Longitude(f64),
    /// Another body's longitude plus an angular offset
    Separation { other: Body, offset: f64 },
}

/// The calculation engine behind the request builders
pub trait Ephemeris {
    /// Ecliptic position and speed of `body` at a UT Julian Day
    fn position_at(
        &self,
        jd_ut: f64,
        body: Body,
        config: &EngineConfig,
    ) -> Result<BodyPosition, EngineError>;

    /// House cusps for `location` at a UT Julian Day
    fn houses_at(
        &self,
        jd_ut: f64,
        config: &EngineConfig,
        location: &Coordinates,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineError>;

    /// Default search bounds for [`Ephemeris::find_transit`]
    fn search_settings(&self) -> SearchSettings {
        SearchSettings::default()
    }

    /// Julian Day (UT) at which `body` reaches the goal, searching from
    /// `start_jd_ut` into the future or, with `backwards`, into the past.
    ///
    /// `Ok(None)` means no crossing within `settings.horizon_days`. The
    /// default scans with [`Ephemeris::position_at`] and refines by bisection.
    fn find_transit(
        &self,
        start_jd_ut: f64,
        body: Body,
        goal: TransitGoal,
        config: &EngineConfig,
        backwards: bool,
        settings: &SearchSettings,
    ) -> Result<Option<f64>, EngineError> {
        let lookup = EngineConfig {
            flags: config.flags.without_transit_search(),
            observer: config.observer,
        };
        search::find_crossing(
            |jd| {
                let position = self.position_at(jd, body, &lookup)?;
                let target = match goal {
                    TransitGoal::Longitude(longitude) => longitude,
                    TransitGoal::Separation { other, offset } => {
                        self.position_at(jd, other, &lookup)?.longitude + offset
                    }
                };
                Ok(search::signed_separation(position.longitude, target))
            },
            start_jd_ut,
            backwards,
            settings,
        )
    }

    fn julian_day_of(&self, event: &DateTime<Utc>) -> f64 {
        time::julian_day(event)
    }

    fn event_of(&self, jd_ut: f64) -> Option<DateTime<Utc>> {
        time::from_julian_day(jd_ut)
    }
}
