//! Name tables for bodies, house systems and ayanamsas.
//!
//! Every table is a closed enumeration: unknown names are always an
//! [`RequestError::UnknownSymbol`](crate::error::RequestError::UnknownSymbol),
//! never a silent default.

pub mod ayanamsa;
pub mod body;
pub mod house_system;

pub use ayanamsa::{resolve_ayanamsa, Ayanamsa};
pub use body::{body_display_name, resolve_body, Body};
pub use house_system::{resolve_house_system, HouseSystem};

use crate::error::RequestError;
use crate::flags::ZodiacMode;

/// Name that selects the tropical zodiac in [`resolve_zodiac`]
pub const TROPICAL: &str = "Tropical";

/// Resolve a zodiac name: "Tropical", or any ayanamsa name for sidereal mode.
pub fn resolve_zodiac(name: &str) -> Result<ZodiacMode, RequestError> {
    if name.trim() == TROPICAL {
        return Ok(ZodiacMode::Tropical);
    }
    resolve_ayanamsa(name).map(ZodiacMode::Sidereal)
}
