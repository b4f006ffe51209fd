use crate::coordinates::Coordinates;
use crate::ephemeris::Ephemeris;
use crate::error::{EngineWarning, RequestError};
use crate::flags::{CalculationFlags, ZodiacMode};
use crate::request::{check_observer, engine_config, parse_body_list};
use crate::results::{PlanetPositions, RequestContext};
use crate::symbols::{body_display_name, resolve_zodiac, Body};
use chrono::{DateTime, Utc};

/// Builds a planet position request
pub struct PlanetBuilder<'a, E: Ephemeris + ?Sized> {
    engine: &'a E,
    event: DateTime<Utc>,
    bodies: Result<Vec<Body>, RequestError>,
    zodiac: Result<ZodiacMode, RequestError>,
    observer: Option<Coordinates>,
}

impl<'a, E: Ephemeris + ?Sized> PlanetBuilder<'a, E> {
    /// Geocentric, tropical, all bodies until configured otherwise
    pub fn new(engine: &'a E, event: DateTime<Utc>) -> Self {
        Self {
            engine,
            event,
            bodies: Ok(Body::ALL.to_vec()),
            zodiac: Ok(ZodiacMode::Tropical),
            observer: None,
        }
    }

    /// Select the 13 default bodies
    pub fn all_bodies(mut self) -> Self {
        self.bodies = Ok(Body::ALL.to_vec());
        self
    }

    /// Select bodies from a comma-separated list such as "Sun,Moon,NNode"
    pub fn bodies(mut self, list: &str) -> Self {
        self.bodies = parse_body_list(list);
        self
    }

    /// Compute topocentric positions for this observer
    pub fn observer_at(mut self, coords: Coordinates) -> Self {
        self.observer = Some(coords);
        self
    }

    /// "Tropical" or an ayanamsa name for sidereal positions
    pub fn zodiac(mut self, name: &str) -> Self {
        self.zodiac = resolve_zodiac(name);
        self
    }

    pub fn build(self) -> Result<PlanetPositions, RequestError> {
        let bodies = self.bodies?;
        let zodiac = self.zodiac?;
        check_observer(self.observer.as_ref())?;

        let flags = CalculationFlags::encode(zodiac, self.observer.is_some(), false);
        let config = engine_config(flags, self.observer);
        let jd = self.engine.julian_day_of(&self.event);
        log::debug!(
            "Planet request at JD {} ({}, {}): {} bodies",
            jd,
            zodiac,
            if self.observer.is_some() { "topocentric" } else { "geocentric" },
            bodies.len()
        );

        let mut positions = Vec::with_capacity(bodies.len());
        let mut warnings = Vec::new();
        for body in bodies {
            let position = self.engine.position_at(jd, body, &config)?;
            if position.flags != flags {
                let warning = EngineWarning {
                    body,
                    requested: flags,
                    actual: position.flags,
                };
                log::warn!("{}", warning);
                warnings.push(warning);
            }
            positions.push((
                body_display_name(body).to_string(),
                (position.longitude, position.speed),
            ));
        }

        let context = RequestContext::new(self.event, jd, flags, self.observer);
        Ok(PlanetPositions::new(context, positions).with_warnings(warnings))
    }
}
