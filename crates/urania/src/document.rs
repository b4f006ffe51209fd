//! Structured documents for external consumers.
//!
//! Shapes:
//! - planets: `{"planets": {"Sun": [longitude, speed], ...}}`
//! - cusps: `{"cusps": [house1, ..., house12]}`
//! - transit: `{"transit": {"event": "<rfc3339>", "julian_day": <f64>}}`

use crate::results::{CuspPositions, PlanetPositions, TransitMoment};
use chrono::SecondsFormat;
use serde_json::{json, Map, Value};

pub trait ToDocument {
    fn to_document(&self) -> Value;

    fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.to_document())
    }
}

impl ToDocument for PlanetPositions {
    fn to_document(&self) -> Value {
        let planets: Map<String, Value> = self
            .iter()
            .map(|(name, (longitude, speed))| (name.to_string(), json!([longitude, speed])))
            .collect();
        json!({ "planets": planets })
    }
}

impl ToDocument for CuspPositions {
    fn to_document(&self) -> Value {
        json!({ "cusps": self.cusps() })
    }
}

impl ToDocument for TransitMoment {
    fn to_document(&self) -> Value {
        json!({
            "transit": {
                "event": self.event().to_rfc3339_opts(SecondsFormat::Millis, true),
                "julian_day": self.julian_day(),
            }
        })
    }
}
