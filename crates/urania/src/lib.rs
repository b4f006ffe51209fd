//! Typed request builders in front of an ephemeris engine.
//!
//! Symbolic astrological vocabulary (planet, house-system and ayanamsa names)
//! is resolved into the engine's numeric calling convention, the right
//! calculation path is selected, and the raw numbers that come back are
//! wrapped in immutable, serializable result values.

pub mod config;
pub mod coordinates;
pub mod document;
pub mod ephemeris;
pub mod error;
pub mod flags;
pub mod request;
pub mod results;
pub mod symbols;
pub mod time;

pub use config::{load_engine_settings, parse_engine_settings, EngineSettings};
pub use coordinates::Coordinates;
pub use document::ToDocument;
pub use ephemeris::{
    BodyPosition, EngineConfig, Ephemeris, HouseTable, SearchSettings, TransitGoal,
};
pub use error::{EngineError, EngineWarning, RequestError, SymbolCategory};
pub use flags::{CalculationFlags, ZodiacMode};
pub use request::{CuspBuilder, PlanetBuilder, TransitBuilder, TransitTarget};
pub use results::{CuspPositions, PlanetPositions, RequestContext, TransitMoment};
pub use symbols::{
    body_display_name, resolve_ayanamsa, resolve_body, resolve_house_system, resolve_zodiac,
    Ayanamsa, Body, HouseSystem,
};

#[cfg(feature = "swisseph")]
pub use ephemeris::SwissEphemeris;
