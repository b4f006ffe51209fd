use crate::coordinates::Coordinates;
use crate::ephemeris::{Ephemeris, TransitGoal};
use crate::error::{EngineError, RequestError};
use crate::flags::{CalculationFlags, ZodiacMode};
use crate::request::{check_degrees, check_observer, engine_config};
use crate::results::{RequestContext, TransitMoment};
use crate::symbols::{resolve_body, resolve_zodiac, Body};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Where the transiting body is headed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TransitTarget {
    /// A fixed ecliptic longitude in degrees
    ToPoint(f64),
    /// The current longitude of another body
    ToPlanet(Body),
}

/// Builds a transit search: when does `body` reach the target plus the
/// aspect offset.
pub struct TransitBuilder<'a, E: Ephemeris + ?Sized> {
    engine: &'a E,
    event: DateTime<Utc>,
    body: Option<Result<Body, RequestError>>,
    target: Option<Result<TransitTarget, RequestError>>,
    offset: f64,
    backwards: bool,
    zodiac: Result<ZodiacMode, RequestError>,
    observer: Option<Coordinates>,
    horizon_days: Option<f64>,
}

impl<'a, E: Ephemeris + ?Sized> TransitBuilder<'a, E> {
    /// Search starts at `event`, forwards, as a conjunction
    pub fn new(engine: &'a E, event: DateTime<Utc>) -> Self {
        Self {
            engine,
            event,
            body: None,
            target: None,
            offset: 0.0,
            backwards: false,
            zodiac: Ok(ZodiacMode::Tropical),
            observer: None,
            horizon_days: None,
        }
    }

    /// The transiting body
    pub fn body(mut self, name: &str) -> Self {
        self.body = Some(resolve_body(name));
        self
    }

    /// Target a fixed longitude; replaces any body target
    pub fn target_point(mut self, degrees: f64) -> Self {
        self.target = Some(Ok(TransitTarget::ToPoint(degrees)));
        self
    }

    /// Target another body's position; replaces any point target
    pub fn target_body(mut self, name: &str) -> Self {
        self.target = Some(resolve_body(name).map(TransitTarget::ToPlanet));
        self
    }

    /// Signed angle added to the target, e.g. 90.0 for a square
    pub fn aspect_offset(mut self, degrees: f64) -> Self {
        self.offset = degrees;
        self
    }

    /// Search into the past instead of the future
    pub fn direction(mut self, backwards: bool) -> Self {
        self.backwards = backwards;
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

    /// How far from the start to search, in days; the engine's configured
    /// horizon applies otherwise
    pub fn search_horizon_days(mut self, days: f64) -> Self {
        self.horizon_days = Some(days);
        self
    }

    /// The target currently in effect, if a valid one was set
    pub fn target(&self) -> Option<TransitTarget> {
        match &self.target {
            Some(Ok(target)) => Some(*target),
            _ => None,
        }
    }

    pub fn build(self) -> Result<TransitMoment, RequestError> {
        let body = self
            .body
            .ok_or(RequestError::MissingRequiredOption("body"))??;
        let target = self
            .target
            .ok_or(RequestError::MissingRequiredOption("target"))??;
        let zodiac = self.zodiac?;
        check_observer(self.observer.as_ref())?;
        check_degrees("aspect offset", self.offset)?;

        let goal = match target {
            TransitTarget::ToPoint(point) => {
                check_degrees("target point", point)?;
                TransitGoal::Longitude((point + self.offset).rem_euclid(360.0))
            }
            TransitTarget::ToPlanet(other) if other == body => {
                return Err(RequestError::ConflictingOption(format!(
                    "{} cannot transit its own position",
                    body
                )));
            }
            TransitTarget::ToPlanet(other) => TransitGoal::Separation {
                other,
                offset: self.offset,
            },
        };

        let mut settings = self.engine.search_settings();
        if let Some(days) = self.horizon_days {
            if !(days.is_finite() && days > 0.0) {
                return Err(RequestError::InvalidOption {
                    option: "search horizon",
                    reason: format!("{} is not a positive number of days", days),
                });
            }
            settings.horizon_days = days;
            settings
                .validate()
                .map_err(|reason| RequestError::InvalidOption {
                    option: "search horizon",
                    reason,
                })?;
        }

        let flags = CalculationFlags::encode(zodiac, self.observer.is_some(), true);
        let config = engine_config(flags, self.observer);
        let start_jd = self.engine.julian_day_of(&self.event);
        log::debug!(
            "Transit of {} to {:?}, {}, searching {} from JD {}",
            body,
            goal,
            if self.observer.is_some() { "topocentric" } else { "geocentric" },
            if self.backwards { "backwards" } else { "forwards" },
            start_jd
        );

        let not_found = RequestError::TransitNotFound {
            body,
            backwards: self.backwards,
            horizon_days: settings.horizon_days,
        };

        let found = match self.engine.find_transit(
            start_jd,
            body,
            goal,
            &config,
            self.backwards,
            &settings,
        )? {
            Some(jd) => jd,
            None => return Err(not_found),
        };

        let event = self
            .engine
            .event_of(found)
            .ok_or(EngineError::InvalidJulianDay(found))?;

        let on_requested_side = if self.backwards {
            found < start_jd && event < self.event
        } else {
            found > start_jd && event > self.event
        };
        if !on_requested_side {
            log::warn!(
                "Engine returned JD {} for a {} search from JD {}, discarding",
                found,
                if self.backwards { "backward" } else { "forward" },
                start_jd
            );
            return Err(not_found);
        }

        let context = RequestContext::new(self.event, start_jd, flags, self.observer);
        Ok(TransitMoment::new(
            context,
            body,
            target,
            self.offset,
            self.backwards,
            found,
            event,
        ))
    }
}
