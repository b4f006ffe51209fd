use crate::coordinates::Coordinates;
use crate::ephemeris::{EngineConfig, Ephemeris};
use crate::error::RequestError;
use crate::flags::{CalculationFlags, ZodiacMode};
use crate::request::check_observer;
use crate::results::{CuspPositions, RequestContext};
use crate::symbols::{resolve_house_system, resolve_zodiac, HouseSystem};
use chrono::{DateTime, Utc};

/// Builds a house cusp request. An observer location is required.
pub struct CuspBuilder<'a, E: Ephemeris + ?Sized> {
    engine: &'a E,
    event: DateTime<Utc>,
    system: Result<HouseSystem, RequestError>,
    zodiac: Result<ZodiacMode, RequestError>,
    observer: Option<Coordinates>,
}

impl<'a, E: Ephemeris + ?Sized> CuspBuilder<'a, E> {
    pub fn new(engine: &'a E, event: DateTime<Utc>) -> Self {
        Self {
            engine,
            event,
            system: Ok(HouseSystem::default()),
            zodiac: Ok(ZodiacMode::Tropical),
            observer: None,
        }
    }

    pub fn house_system(mut self, name: &str) -> Self {
        self.system = resolve_house_system(name);
        self
    }

    pub fn observer_at(mut self, coords: Coordinates) -> Self {
        self.observer = Some(coords);
        self
    }

    pub fn zodiac(mut self, name: &str) -> Self {
        self.zodiac = resolve_zodiac(name);
        self
    }

    pub fn build(self) -> Result<CuspPositions, RequestError> {
        let system = self.system?;
        let zodiac = self.zodiac?;
        let location = self
            .observer
            .ok_or(RequestError::MissingRequiredOption("coordinates"))?;
        check_observer(Some(&location))?;

        let flags = CalculationFlags::encode(zodiac, false, false);
        let config = EngineConfig::geocentric(flags);
        let jd = self.engine.julian_day_of(&self.event);
        log::debug!("{} cusps at JD {} for {} ({})", system, jd, location, zodiac);

        let table = self.engine.houses_at(jd, &config, &location, system)?;
        // slot 0 is unused by the engine
        let cusps = table.cusps[1..].to_vec();

        let context = RequestContext::new(self.event, jd, flags, Some(location));
        Ok(CuspPositions::new(context, system, cusps).with_angles(table.ascendant, table.midheaven))
    }
}
