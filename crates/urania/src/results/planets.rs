use crate::error::EngineWarning;
use crate::results::RequestContext;
use std::fmt;

/// Longitude and speed for each requested body, in request order
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetPositions {
    context: RequestContext,
    /// Display name -> (longitude in degrees, speed in degrees per day)
    positions: Vec<(String, (f64, f64))>,
    warnings: Vec<EngineWarning>,
}

impl PlanetPositions {
    pub fn new<I>(context: RequestContext, positions: I) -> Self
    where
        I: IntoIterator<Item = (String, (f64, f64))>,
    {
        Self {
            context,
            positions: positions.into_iter().collect(),
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_warnings(mut self, warnings: Vec<EngineWarning>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    /// `(longitude, speed)` for a display name such as "Sun" or "Lilith"
    pub fn get(&self, name: &str) -> Option<(f64, f64)> {
        self.positions
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| *value)
    }

    pub fn longitude(&self, name: &str) -> Option<f64> {
        self.get(name).map(|(longitude, _)| longitude)
    }

    pub fn speed(&self, name: &str) -> Option<f64> {
        self.get(name).map(|(_, speed)| speed)
    }

    /// Whether the body moves backwards along the ecliptic
    pub fn is_retrograde(&self, name: &str) -> Option<bool> {
        self.speed(name).map(|speed| speed < 0.0)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.positions.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, (f64, f64))> {
        self.positions
            .iter()
            .map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Bodies the engine computed with different flags than requested
    pub fn warnings(&self) -> &[EngineWarning] {
        &self.warnings
    }
}

impl fmt::Display for PlanetPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, (longitude, speed)) in self.iter() {
            writeln!(f, "{:<8} {:>11.6} {:>10.6}", name, longitude, speed)?;
        }
        Ok(())
    }
}
