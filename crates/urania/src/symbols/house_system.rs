use crate::error::{RequestError, SymbolCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// House-division algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    #[default]
    Placidus,
    Koch,
    Porphyrius,
    Regiomontanus,
    Campanus,
    Equal,
    VehlowEqual,
    WholeSign,
    Meridian,
    Horizontal,
    PolichPage,
    Alcabitus,
    Morinus,
    Krusinski,
}

/// House system mapping: name, variant and the engine's one-letter code.
/// Rows follow declaration order.
const HOUSE_SYSTEMS: &[(&str, HouseSystem, u8)] = &[
    ("Placidus", HouseSystem::Placidus, b'P'),
    ("Koch", HouseSystem::Koch, b'K'),
    ("Porphyrius", HouseSystem::Porphyrius, b'O'),
    ("Regiomontanus", HouseSystem::Regiomontanus, b'R'),
    ("Campanus", HouseSystem::Campanus, b'C'),
    ("Equal", HouseSystem::Equal, b'A'),
    ("Vehlow Equal", HouseSystem::VehlowEqual, b'V'),
    ("Whole Sign", HouseSystem::WholeSign, b'W'),
    ("Meridian", HouseSystem::Meridian, b'X'),
    ("Horizontal", HouseSystem::Horizontal, b'H'),
    ("Polich/Page", HouseSystem::PolichPage, b'T'),
    ("Alcabitus", HouseSystem::Alcabitus, b'B'),
    ("Morinus", HouseSystem::Morinus, b'M'),
    ("Krusinski", HouseSystem::Krusinski, b'U'),
];

impl HouseSystem {
    pub const ALL: [HouseSystem; 14] = [
        HouseSystem::Placidus,
        HouseSystem::Koch,
        HouseSystem::Porphyrius,
        HouseSystem::Regiomontanus,
        HouseSystem::Campanus,
        HouseSystem::Equal,
        HouseSystem::VehlowEqual,
        HouseSystem::WholeSign,
        HouseSystem::Meridian,
        HouseSystem::Horizontal,
        HouseSystem::PolichPage,
        HouseSystem::Alcabitus,
        HouseSystem::Morinus,
        HouseSystem::Krusinski,
    ];

    /// One-letter code passed to the engine's house calculation
    pub fn code(self) -> u8 {
        HOUSE_SYSTEMS[self as usize].2
    }

    pub fn name(self) -> &'static str {
        HOUSE_SYSTEMS[self as usize].0
    }
}

/// Resolve a house-system name. Surrounding whitespace is ignored.
pub fn resolve_house_system(name: &str) -> Result<HouseSystem, RequestError> {
    let trimmed = name.trim();
    HOUSE_SYSTEMS
        .iter()
        .find(|(system_name, _, _)| *system_name == trimmed)
        .map(|(_, system, _)| *system)
        .ok_or_else(|| RequestError::unknown(name, SymbolCategory::HouseSystem))
}

impl FromStr for HouseSystem {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_house_system(s)
    }
}

impl fmt::Display for HouseSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_follow_declaration_order() {
        for (index, system) in HouseSystem::ALL.iter().enumerate() {
            assert_eq!(HOUSE_SYSTEMS[index].1, *system);
        }
        assert_eq!(HOUSE_SYSTEMS.len(), HouseSystem::ALL.len());
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<u8> = HouseSystem::ALL.iter().map(|s| s.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 14);
    }
}
