use crate::results::RequestContext;
use crate::symbols::HouseSystem;
use std::fmt;

/// House cusp longitudes, house 1 first
#[derive(Debug, Clone, PartialEq)]
pub struct CuspPositions {
    context: RequestContext,
    system: HouseSystem,
    cusps: Vec<f64>,
    ascendant: Option<f64>,
    midheaven: Option<f64>,
}

impl CuspPositions {
    pub fn new(context: RequestContext, system: HouseSystem, cusps: Vec<f64>) -> Self {
        Self {
            context,
            system,
            cusps,
            ascendant: None,
            midheaven: None,
        }
    }

    pub(crate) fn with_angles(mut self, ascendant: f64, midheaven: f64) -> Self {
        self.ascendant = Some(ascendant);
        self.midheaven = Some(midheaven);
        self
    }

    pub fn context(&self) -> &RequestContext {
        &self.context
    }

    pub fn system(&self) -> HouseSystem {
        self.system
    }

    pub fn cusps(&self) -> &[f64] {
        &self.cusps
    }

    /// Cusp of a house numbered from 1
    pub fn cusp(&self, house: usize) -> Option<f64> {
        house.checked_sub(1).and_then(|i| self.cusps.get(i)).copied()
    }

    pub fn ascendant(&self) -> Option<f64> {
        self.ascendant
    }

    pub fn midheaven(&self) -> Option<f64> {
        self.midheaven
    }

    pub fn len(&self) -> usize {
        self.cusps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cusps.is_empty()
    }
}

impl fmt::Display for CuspPositions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.system)?;
        for (i, cusp) in self.cusps.iter().enumerate() {
            writeln!(f, "{:>2} {:>11.6}", i + 1, cusp)?;
        }
        Ok(())
    }
}
