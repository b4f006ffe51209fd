pub mod engine;
pub mod search;

#[cfg(feature = "swisseph")]
pub mod swiss;

pub use engine::{BodyPosition, EngineConfig, Ephemeris, HouseTable, TransitGoal};
pub use search::{find_crossing, signed_separation, SearchSettings};

#[cfg(feature = "swisseph")]
pub use swiss::SwissEphemeris;
