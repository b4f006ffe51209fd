#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use std::cell::RefCell;
use urania::{
    Body, BodyPosition, CalculationFlags, Coordinates, EngineConfig, EngineError, Ephemeris,
    HouseSystem, HouseTable, SearchSettings, TransitGoal, ZodiacMode,
};

pub const J2000: f64 = 2_451_545.0;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn event() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 20, 12, 0, 0).unwrap()
}

pub fn new_york() -> Coordinates {
    Coordinates::new(-74.0060, 40.7128, 10.0)
}

/// Longitude at J2000 and mean daily motion
fn mean_motion(body: Body) -> (f64, f64) {
    match body {
        Body::Sun => (280.46, 0.985_647),
        Body::Moon => (218.32, 13.176_396),
        Body::Mercury => (252.25, 4.092_339),
        Body::Venus => (181.98, 1.602_131),
        Body::Mars => (355.43, 0.524_033),
        Body::Jupiter => (34.35, 0.083_056),
        Body::Saturn => (50.08, 0.033_371),
        Body::Uranus => (314.05, 0.011_698),
        Body::Neptune => (304.35, 0.005_965),
        Body::Pluto => (238.93, 0.003_964),
        Body::Chiron => (250.0, 0.019_5),
        Body::MeanApogee => (263.35, 0.111_404),
        Body::MeanNode => (125.04, -0.052_954),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PositionCall {
    pub jd: f64,
    pub body: Body,
    pub config: EngineConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HouseCall {
    pub jd: f64,
    pub config: EngineConfig,
    pub location: Coordinates,
    pub system: HouseSystem,
}

/// Bodies on circular orbits at their mean motion. Sidereal mode
/// subtracts a fixed offset per ayanamsa; a topocentric observer adds a
/// small latitude-dependent shift.
#[derive(Default)]
pub struct LinearEphemeris {
    pub reported_flags: Option<CalculationFlags>,
    pub search: Option<SearchSettings>,
    pub position_calls: RefCell<Vec<PositionCall>>,
    pub house_calls: RefCell<Vec<HouseCall>>,
}

impl LinearEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn longitude(body: Body, jd: f64, config: &EngineConfig) -> f64 {
        let (base, speed) = mean_motion(body);
        let mut longitude = base + speed * (jd - J2000);
        if let ZodiacMode::Sidereal(ayanamsa) = config.flags.zodiac() {
            longitude -= 23.0 + ayanamsa.id() as f64 * 0.5;
        }
        if let Some(observer) = config.observer {
            longitude += observer.latitude() / 10_000.0;
        }
        longitude.rem_euclid(360.0)
    }
}

impl Ephemeris for LinearEphemeris {
    fn position_at(
        &self,
        jd_ut: f64,
        body: Body,
        config: &EngineConfig,
    ) -> Result<BodyPosition, EngineError> {
        self.position_calls.borrow_mut().push(PositionCall {
            jd: jd_ut,
            body,
            config: *config,
        });
        Ok(BodyPosition {
            longitude: Self::longitude(body, jd_ut, config),
            latitude: 0.0,
            speed: mean_motion(body).1,
            flags: self.reported_flags.unwrap_or(config.flags),
        })
    }

    fn houses_at(
        &self,
        jd_ut: f64,
        config: &EngineConfig,
        location: &Coordinates,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineError> {
        self.house_calls.borrow_mut().push(HouseCall {
            jd: jd_ut,
            config: *config,
            location: *location,
            system,
        });
        let ascendant = ((jd_ut - J2000).fract() * 360.0 + location.longitude()).rem_euclid(360.0);
        let mut cusps = [-1.0; 13];
        for (house, cusp) in cusps.iter_mut().enumerate().skip(1) {
            *cusp = (ascendant + 30.0 * (house - 1) as f64).rem_euclid(360.0);
        }
        Ok(HouseTable {
            cusps,
            ascendant,
            midheaven: (ascendant + 270.0).rem_euclid(360.0),
        })
    }

    fn search_settings(&self) -> SearchSettings {
        self.search.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransitCall {
    pub start_jd: f64,
    pub body: Body,
    pub goal: TransitGoal,
    pub config: EngineConfig,
    pub backwards: bool,
    pub settings: SearchSettings,
}

/// Returns a fixed answer from `find_transit` and records what it was asked
pub struct ScriptedEphemeris {
    pub answer: Option<f64>,
    pub transit_calls: RefCell<Vec<TransitCall>>,
}

impl ScriptedEphemeris {
    pub fn answering(answer: Option<f64>) -> Self {
        Self {
            answer,
            transit_calls: RefCell::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> TransitCall {
        self.transit_calls
            .borrow()
            .last()
            .cloned()
            .expect("find_transit was not called")
    }
}

impl Ephemeris for ScriptedEphemeris {
    fn position_at(
        &self,
        _jd_ut: f64,
        body: Body,
        _config: &EngineConfig,
    ) -> Result<BodyPosition, EngineError> {
        Err(EngineError::Calculation {
            body,
            julian_day: 0.0,
            message: "positions are not scripted".to_string(),
        })
    }

    fn houses_at(
        &self,
        _jd_ut: f64,
        _config: &EngineConfig,
        _location: &Coordinates,
        _system: HouseSystem,
    ) -> Result<HouseTable, EngineError> {
        Err(EngineError::HouseCalculation {
            message: "houses are not scripted".to_string(),
        })
    }

    fn find_transit(
        &self,
        start_jd_ut: f64,
        body: Body,
        goal: TransitGoal,
        config: &EngineConfig,
        backwards: bool,
        settings: &SearchSettings,
    ) -> Result<Option<f64>, EngineError> {
        self.transit_calls.borrow_mut().push(TransitCall {
            start_jd: start_jd_ut,
            body,
            goal,
            config: *config,
            backwards,
            settings: *settings,
        });
        Ok(self.answer)
    }
}
