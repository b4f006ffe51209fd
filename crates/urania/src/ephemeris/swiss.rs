//! [`Ephemeris`] backed by the Swiss Ephemeris library.
//!
//! The C library keeps its data path, observer and sidereal mode in process
//! globals. Every call re-applies the configuration it needs under one
//! process-wide lock, so calculations with different settings never see
//! each other's state.

use crate::config::EngineSettings;
use crate::coordinates::Coordinates;
use crate::ephemeris::engine::{BodyPosition, EngineConfig, Ephemeris, HouseTable};
use crate::ephemeris::search::SearchSettings;
use crate::error::EngineError;
use crate::flags::ZodiacMode;
use crate::symbols::{Body, HouseSystem};
use chrono::{DateTime, Datelike, TimeZone, Timelike, Utc};
use std::sync::{Mutex, MutexGuard};
use swisseph::swe::{calc_ut, houses_ex, julday, revjul, set_ephe_path};

/// Gregorian calendar flag; `julday` and `revjul` type it differently
const JULDAY_GREG_CAL: u32 = 1;
const REVJUL_GREG_CAL: i32 = 1;
const ASCMC_ASC: usize = 0;
const ASCMC_MC: usize = 1;

static ENGINE_LOCK: Mutex<()> = Mutex::new(());

fn engine_lock() -> MutexGuard<'static, ()> {
    ENGINE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Swiss Ephemeris adapter
pub struct SwissEphemeris {
    settings: EngineSettings,
}

impl SwissEphemeris {
    pub fn new(settings: EngineSettings) -> Result<Self, EngineError> {
        let path = &settings.data_path;
        if !path.exists() {
            return Err(EngineError::DataPathNotFound {
                path: path.display().to_string(),
                message: "Please ensure Swiss Ephemeris data files are installed.".to_string(),
            });
        }
        log::info!("Swiss Ephemeris data path: {}", path.display());
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Push the call's configuration into the library globals.
    ///
    /// Callers must hold the engine lock.
    fn apply(&self, config: &EngineConfig) {
        set_ephe_path(&self.settings.data_path.to_string_lossy());
        // The safe binding has no setters for sidereal mode or observer.
        // SAFETY: both functions only copy plain numbers into the library's
        // globals, and the engine lock keeps other calls out meanwhile.
        unsafe {
            if let ZodiacMode::Sidereal(ayanamsa) = config.flags.zodiac() {
                libswisseph_sys::swe_set_sid_mode(ayanamsa.id() as i32, 0.0, 0.0);
            }
            if let Some(observer) = config.observer {
                libswisseph_sys::swe_set_topo(
                    observer.longitude(),
                    observer.latitude(),
                    observer.altitude(),
                );
            }
        }
    }
}

impl Ephemeris for SwissEphemeris {
    fn position_at(
        &self,
        jd_ut: f64,
        body: Body,
        config: &EngineConfig,
    ) -> Result<BodyPosition, EngineError> {
        let _guard = engine_lock();
        self.apply(config);

        let result = calc_ut(jd_ut, body.engine_id(), config.flags.engine_bits()).map_err(|e| {
            EngineError::Calculation {
                body,
                julian_day: jd_ut,
                message: format!("Swiss Ephemeris error: {}", e),
            }
        })?;

        let out = result.out;
        Ok(BodyPosition {
            longitude: out[0].rem_euclid(360.0),
            latitude: out[1],
            speed: out[3],
            flags: config.flags,
        })
    }

    fn houses_at(
        &self,
        jd_ut: f64,
        config: &EngineConfig,
        location: &Coordinates,
        system: HouseSystem,
    ) -> Result<HouseTable, EngineError> {
        let _guard = engine_lock();
        self.apply(config);

        let (c, a) = houses_ex(
            jd_ut,
            config.flags.engine_bits() as i32,
            location.latitude(),
            location.longitude(),
            system.code() as i32,
        );

        let mut cusps = [0.0; 13];
        for (slot, value) in cusps.iter_mut().zip(c.iter()) {
            *slot = value.rem_euclid(360.0);
        }
        if cusps[1..].iter().any(|v| !v.is_finite()) {
            return Err(EngineError::HouseCalculation {
                message: format!("{} cusps are not finite at JD {}", system, jd_ut),
            });
        }

        Ok(HouseTable {
            cusps,
            ascendant: a[ASCMC_ASC].rem_euclid(360.0),
            midheaven: a[ASCMC_MC].rem_euclid(360.0),
        })
    }

    fn search_settings(&self) -> SearchSettings {
        self.settings.search
    }

    fn julian_day_of(&self, event: &DateTime<Utc>) -> f64 {
        let hour_decimal = event.hour() as f64
            + event.minute() as f64 / 60.0
            + (event.second() as f64 + event.timestamp_subsec_millis() as f64 / 1000.0) / 3600.0;
        julday(
            event.year(),
            event.month() as i32,
            event.day() as i32,
            hour_decimal,
            JULDAY_GREG_CAL,
        )
    }

    fn event_of(&self, jd_ut: f64) -> Option<DateTime<Utc>> {
        if !jd_ut.is_finite() {
            return None;
        }
        let (year, month, day, hour_decimal) = revjul(jd_ut, REVJUL_GREG_CAL);
        let midnight = Utc
            .with_ymd_and_hms(year, month as u32, day as u32, 0, 0, 0)
            .single()?;
        let millis = (hour_decimal * 3_600_000.0).round() as i64;
        Some(midnight + chrono::Duration::milliseconds(millis))
    }
}
