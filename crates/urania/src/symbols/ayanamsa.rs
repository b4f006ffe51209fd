use crate::error::{RequestError, SymbolCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sidereal zodiac origin. The discriminant is the engine's sidereal mode id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Ayanamsa {
    FaganBradley = 0,
    Lahiri = 1,
    DeLuce = 2,
    Raman = 3,
    Ushashashi = 4,
    Krishnamurti = 5,
    DjwhalKhul = 6,
    Yukteshwar = 7,
    JnBhasin = 8,
    BabylonianKugler1 = 9,
    BabylonianKugler2 = 10,
    BabylonianKugler3 = 11,
    BabylonianHuber = 12,
    BabylonianEtpsc = 13,
    Aldebaran15Tau = 14,
    Hipparchos = 15,
}

const AYANAMSAS: &[(&str, Ayanamsa)] = &[
    ("Fagan/Bradley", Ayanamsa::FaganBradley),
    ("Lahiri", Ayanamsa::Lahiri),
    ("De Luce", Ayanamsa::DeLuce),
    ("Raman", Ayanamsa::Raman),
    ("Ushashashi", Ayanamsa::Ushashashi),
    ("Krishnamurti", Ayanamsa::Krishnamurti),
    ("Djwhal Khul", Ayanamsa::DjwhalKhul),
    ("Yukteshwar", Ayanamsa::Yukteshwar),
    ("JN Bhasin", Ayanamsa::JnBhasin),
    ("Babylonian/Kugler 1", Ayanamsa::BabylonianKugler1),
    ("Babylonian/Kugler 2", Ayanamsa::BabylonianKugler2),
    ("Babylonian/Kugler 3", Ayanamsa::BabylonianKugler3),
    ("Babylonian/Huber", Ayanamsa::BabylonianHuber),
    ("Babylonian/Eta Piscium", Ayanamsa::BabylonianEtpsc),
    ("Babylonian/Aldebaran = 15 Tau", Ayanamsa::Aldebaran15Tau),
    ("Hipparchos", Ayanamsa::Hipparchos),
];

impl Ayanamsa {
    pub const ALL: [Ayanamsa; 16] = [
        Ayanamsa::FaganBradley,
        Ayanamsa::Lahiri,
        Ayanamsa::DeLuce,
        Ayanamsa::Raman,
        Ayanamsa::Ushashashi,
        Ayanamsa::Krishnamurti,
        Ayanamsa::DjwhalKhul,
        Ayanamsa::Yukteshwar,
        Ayanamsa::JnBhasin,
        Ayanamsa::BabylonianKugler1,
        Ayanamsa::BabylonianKugler2,
        Ayanamsa::BabylonianKugler3,
        Ayanamsa::BabylonianHuber,
        Ayanamsa::BabylonianEtpsc,
        Ayanamsa::Aldebaran15Tau,
        Ayanamsa::Hipparchos,
    ];

    /// Engine sidereal mode id
    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn from_id(id: u8) -> Option<Ayanamsa> {
        Ayanamsa::ALL.get(id as usize).copied()
    }

    pub fn name(self) -> &'static str {
        AYANAMSAS[self as usize].0
    }
}

/// Resolve an ayanamsa name. Surrounding whitespace is ignored.
pub fn resolve_ayanamsa(name: &str) -> Result<Ayanamsa, RequestError> {
    let trimmed = name.trim();
    AYANAMSAS
        .iter()
        .find(|(ayanamsa_name, _)| *ayanamsa_name == trimmed)
        .map(|(_, ayanamsa)| *ayanamsa)
        .ok_or_else(|| RequestError::unknown(name, SymbolCategory::Ayanamsa))
}

impl FromStr for Ayanamsa {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_ayanamsa(s)
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
