//! Calculation-mode bitmask.
//!
//! The engine takes its calculation mode as one integer. Everything outside
//! this module works with [`ZodiacMode`] and plain booleans instead.
//!
//! The ayanamsa id is packed into bits 24..32 rather than the low byte:
//! the low bits carry engine options (`FLAG_SWIEPH`, `FLAG_SPEED`) that go
//! to the engine unchanged. [`CalculationFlags::engine_bits`] clears the id
//! byte and the transit bit before a native call.

use crate::symbols::Ayanamsa;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Use the Swiss Ephemeris data files
pub const FLAG_SWIEPH: u32 = 0x2;
/// Compute speeds along with positions
pub const FLAG_SPEED: u32 = 0x100;
/// Positions relative to a surface observer
pub const FLAG_TOPOCENTRIC: u32 = 0x8000;
/// Sidereal zodiac; the ayanamsa id sits in the high byte
pub const FLAG_SIDEREAL: u32 = 0x1_0000;
/// Transit search on ecliptic longitude
pub const FLAG_TRANSIT_LONGITUDE: u32 = 0x10_0000;

/// Engine feature bits set on every request
pub const DEFAULT_ENGINE_FLAGS: u32 = FLAG_SWIEPH | FLAG_SPEED;

const AYANAMSA_SHIFT: u32 = 24;
const AYANAMSA_MASK: u32 = 0xff << AYANAMSA_SHIFT;

/// Tropical or sidereal zodiac
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZodiacMode {
    #[default]
    Tropical,
    Sidereal(Ayanamsa),
}

impl ZodiacMode {
    pub fn ayanamsa(self) -> Option<Ayanamsa> {
        match self {
            ZodiacMode::Tropical => None,
            ZodiacMode::Sidereal(ayanamsa) => Some(ayanamsa),
        }
    }
}

impl fmt::Display for ZodiacMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZodiacMode::Tropical => f.write_str("Tropical"),
            ZodiacMode::Sidereal(ayanamsa) => write!(f, "Sidereal ({})", ayanamsa),
        }
    }
}

/// Encoded calculation flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalculationFlags(u32);

impl CalculationFlags {
    pub fn encode(zodiac: ZodiacMode, topocentric: bool, transit_search: bool) -> Self {
        let mut bits = DEFAULT_ENGINE_FLAGS;

        if let ZodiacMode::Sidereal(ayanamsa) = zodiac {
            bits |= FLAG_SIDEREAL;
            bits |= (ayanamsa.id() as u32) << AYANAMSA_SHIFT;
        }
        if topocentric {
            bits |= FLAG_TOPOCENTRIC;
        }
        if transit_search {
            bits |= FLAG_TRANSIT_LONGITUDE;
        }

        Self(bits)
    }

    /// Recover the zodiac mode and topocentric choice from encoded flags
    pub fn decode(self) -> (ZodiacMode, bool) {
        (self.zodiac(), self.is_topocentric())
    }

    pub fn zodiac(self) -> ZodiacMode {
        if !self.is_sidereal() {
            return ZodiacMode::Tropical;
        }
        let id = ((self.0 & AYANAMSA_MASK) >> AYANAMSA_SHIFT) as u8;
        match Ayanamsa::from_id(id) {
            Some(ayanamsa) => ZodiacMode::Sidereal(ayanamsa),
            None => {
                log::warn!(
                    "Flags {:#x} carry unknown ayanamsa id {}, treating as tropical",
                    self.0,
                    id
                );
                ZodiacMode::Tropical
            }
        }
    }

    pub fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u32 {
        self.0
    }

    pub fn is_sidereal(self) -> bool {
        self.0 & FLAG_SIDEREAL != 0
    }

    pub fn is_topocentric(self) -> bool {
        self.0 & FLAG_TOPOCENTRIC != 0
    }

    pub fn is_transit_search(self) -> bool {
        self.0 & FLAG_TRANSIT_LONGITUDE != 0
    }

    /// Bits understood by the native engine: the transit bit and the
    /// ayanamsa byte are stripped.
    pub fn engine_bits(self) -> u32 {
        self.0 & !(AYANAMSA_MASK | FLAG_TRANSIT_LONGITUDE)
    }

    /// Same flags with the transit-search bit cleared, as used for the
    /// position lookups a transit search makes.
    pub fn without_transit_search(self) -> Self {
        Self(self.0 & !FLAG_TRANSIT_LONGITUDE)
    }
}

impl Default for CalculationFlags {
    fn default() -> Self {
        Self::encode(ZodiacMode::Tropical, false, false)
    }
}
