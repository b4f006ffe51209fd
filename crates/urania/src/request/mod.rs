//! Fluent request builders.
//!
//! Setters never fail on the spot: a bad value is kept as an error for that
//! option and returned by `build()` before the engine is called. Setting the
//! option again replaces the error along with the value.

pub mod cusp;
pub mod planet;
pub mod transit;

pub use cusp::CuspBuilder;
pub use planet::PlanetBuilder;
pub use transit::{TransitBuilder, TransitTarget};

use crate::coordinates::Coordinates;
use crate::ephemeris::EngineConfig;
use crate::error::RequestError;
use crate::flags::CalculationFlags;
use crate::symbols::{resolve_body, Body};

/// Parse a comma-separated body list. All names must resolve; duplicates
/// keep their first position.
pub(crate) fn parse_body_list(list: &str) -> Result<Vec<Body>, RequestError> {
    let mut bodies = Vec::new();
    for name in list.split(',') {
        let body = resolve_body(name)?;
        if !bodies.contains(&body) {
            bodies.push(body);
        }
    }
    Ok(bodies)
}

pub(crate) fn check_observer(observer: Option<&Coordinates>) -> Result<(), RequestError> {
    match observer {
        Some(coords) if !coords.is_finite() => Err(RequestError::InvalidOption {
            option: "coordinates",
            reason: format!("values must be finite ({})", coords),
        }),
        _ => Ok(()),
    }
}

pub(crate) fn check_degrees(option: &'static str, value: f64) -> Result<(), RequestError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RequestError::InvalidOption {
            option,
            reason: format!("{} is not a finite angle", value),
        })
    }
}

/// Geocentric config without an observer, topocentric with one
pub(crate) fn engine_config(flags: CalculationFlags, observer: Option<Coordinates>) -> EngineConfig {
    match observer {
        Some(coords) => EngineConfig::topocentric(flags, coords),
        None => EngineConfig::geocentric(flags),
    }
}
