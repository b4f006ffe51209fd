use crate::flags::CalculationFlags;
use crate::symbols::Body;
use std::fmt;
use thiserror::Error;

/// Which symbol table a name was looked up in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolCategory {
    Body,
    HouseSystem,
    Ayanamsa,
}

impl fmt::Display for SymbolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SymbolCategory::Body => "body",
            SymbolCategory::HouseSystem => "house system",
            SymbolCategory::Ayanamsa => "ayanamsa",
        };
        f.write_str(label)
    }
}

/// Errors raised by the request builders
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Unknown {category}: {name:?}")]
    UnknownSymbol {
        name: String,
        category: SymbolCategory,
    },
    #[error("Missing required option: {0}")]
    MissingRequiredOption(&'static str),
    #[error("Conflicting options: {0}")]
    ConflictingOption(String),
    #[error("Invalid value for {option}: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
    #[error("No transit of {body} found searching {} within {horizon_days} days", search_direction(.backwards))]
    TransitNotFound {
        body: Body,
        backwards: bool,
        horizon_days: f64,
    },
    #[error(transparent)]
    Engine(#[from] EngineError),
}

fn search_direction(backwards: &bool) -> &'static str {
    if *backwards {
        "backwards"
    } else {
        "forwards"
    }
}

impl RequestError {
    pub(crate) fn unknown(name: &str, category: SymbolCategory) -> Self {
        RequestError::UnknownSymbol {
            name: name.to_string(),
            category,
        }
    }
}

/// Errors reported by an ephemeris engine
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Ephemeris data not found at path: {path}. {message}")]
    DataPathNotFound { path: String, message: String },
    #[error("Failed to calculate position for {body} at JD {julian_day}: {message}")]
    Calculation {
        body: Body,
        julian_day: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculation { message: String },
    #[error("Julian day {0} is outside the representable calendar range")]
    InvalidJulianDay(f64),
    #[error("Invalid search settings: {0}")]
    InvalidSearchSettings(String),
}

/// The engine computed a body with different flags than were requested.
///
/// Recoverable: the engine's output is kept and the mismatch is reported
/// alongside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineWarning {
    pub body: Body,
    pub requested: CalculationFlags,
    pub actual: CalculationFlags,
}

impl fmt::Display for EngineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} computed with flags {:#x} instead of {:#x}",
            self.body,
            self.actual.bits(),
            self.requested.bits()
        )
    }
}
