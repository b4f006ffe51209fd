use crate::error::{RequestError, SymbolCategory};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A celestial point the engine can compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    Chiron,
    /// Mean lunar apogee, shown as "Lilith"
    MeanApogee,
    /// Mean lunar node, shown as "NNode"
    MeanNode,
}

/// Display name, Swiss Ephemeris body number and engine name for every body.
/// Order is the default selection order.
const BODIES: &[(&str, Body, u32, &str)] = &[
    ("Sun", Body::Sun, 0, "Sun"),
    ("Moon", Body::Moon, 1, "Moon"),
    ("Mercury", Body::Mercury, 2, "Mercury"),
    ("Venus", Body::Venus, 3, "Venus"),
    ("Mars", Body::Mars, 4, "Mars"),
    ("Jupiter", Body::Jupiter, 5, "Jupiter"),
    ("Saturn", Body::Saturn, 6, "Saturn"),
    ("Uranus", Body::Uranus, 7, "Uranus"),
    ("Neptune", Body::Neptune, 8, "Neptune"),
    ("Pluto", Body::Pluto, 9, "Pluto"),
    ("Chiron", Body::Chiron, 15, "Chiron"),
    ("Lilith", Body::MeanApogee, 12, "mean Apogee"),
    ("NNode", Body::MeanNode, 10, "mean Node"),
];

impl Body {
    /// The 13 bodies selected by default, in output order
    pub const ALL: [Body; 13] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
        Body::Chiron,
        Body::MeanApogee,
        Body::MeanNode,
    ];

    fn entry(self) -> &'static (&'static str, Body, u32, &'static str) {
        // rows follow declaration order
        &BODIES[self as usize]
    }

    /// Swiss Ephemeris body number
    pub fn engine_id(self) -> u32 {
        self.entry().2
    }

    /// Name the engine itself uses for this body
    pub fn engine_name(self) -> &'static str {
        self.entry().3
    }

    /// Name used in results and accepted by [`resolve_body`]
    pub fn display_name(self) -> &'static str {
        self.entry().0
    }
}

/// Resolve a body name. Surrounding whitespace is ignored; matching is exact.
pub fn resolve_body(name: &str) -> Result<Body, RequestError> {
    let trimmed = name.trim();
    BODIES
        .iter()
        .find(|(display, _, _, _)| *display == trimmed)
        .map(|(_, body, _, _)| *body)
        .ok_or_else(|| RequestError::unknown(name, SymbolCategory::Body))
}

/// Display name for a body.
///
/// The mean apogee and mean node are shown as "Lilith" and "NNode"; every
/// other body keeps the engine's standard name.
pub fn body_display_name(body: Body) -> &'static str {
    match body {
        Body::MeanApogee => "Lilith",
        Body::MeanNode => "NNode",
        other => other.engine_name(),
    }
}

impl FromStr for Body {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        resolve_body(s)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(body_display_name(*self))
    }
}
