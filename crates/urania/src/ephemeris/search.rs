//! Longitude-crossing search.
//!
//! Coarse scan in fixed steps from the start day, then bisection on the
//! first genuine sign change of the signed separation from the target.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Upper bound on coarse scan samples for one search
pub const MAX_SCAN_STEPS: f64 = 1_000_000.0;

/// Bounds for a crossing search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Maximum distance from the start, in days
    pub horizon_days: f64,
    /// Scan step in days; must stay below half the fastest body's period
    pub step_days: f64,
    /// Bisection stops once the bracket is narrower than this
    pub tolerance_days: f64,
    pub max_iterations: u32,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            horizon_days: 800.0,
            step_days: 1.0,
            tolerance_days: 1e-6,
            max_iterations: 64,
        }
    }
}

impl SearchSettings {
    pub fn validate(&self) -> Result<(), String> {
        if !(self.horizon_days.is_finite() && self.horizon_days > 0.0) {
            return Err(format!("horizon_days must be positive, got {}", self.horizon_days));
        }
        if !(self.step_days.is_finite() && self.step_days > 0.0) {
            return Err(format!("step_days must be positive, got {}", self.step_days));
        }
        if !(self.tolerance_days.is_finite() && self.tolerance_days > 0.0) {
            return Err(format!(
                "tolerance_days must be positive, got {}",
                self.tolerance_days
            ));
        }
        let steps = self.horizon_days / self.step_days;
        if steps > MAX_SCAN_STEPS {
            return Err(format!(
                "horizon_days {} at step_days {} needs {} scan steps, limit is {}",
                self.horizon_days,
                self.step_days,
                steps.ceil(),
                MAX_SCAN_STEPS
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Signed angle from `target` to `longitude`, in (-180, 180]
pub fn signed_separation(longitude: f64, target: f64) -> f64 {
    let mut d = (longitude - target).rem_euclid(360.0);
    if d > 180.0 {
        d -= 360.0;
    }
    d
}

/// A sign change between two samples that is not the ±180 wrap-around.
fn is_genuine_crossing(f_a: f64, f_b: f64) -> bool {
    f_a * f_b < 0.0 && (f_a - f_b).abs() < 270.0
}

/// Find the first day after (or before, with `backwards`) `start` where
/// `separation` crosses zero.
///
/// The start day itself is never reported. Returns `Ok(None)` when nothing
/// crosses within the horizon.
pub fn find_crossing<F>(
    mut separation: F,
    start: f64,
    backwards: bool,
    settings: &SearchSettings,
) -> Result<Option<f64>, EngineError>
where
    F: FnMut(f64) -> Result<f64, EngineError>,
{
    settings
        .validate()
        .map_err(EngineError::InvalidSearchSettings)?;

    let sign = if backwards { -1.0 } else { 1.0 };
    let steps = (settings.horizon_days / settings.step_days).ceil() as u64;

    let mut t_prev = start;
    let mut f_prev = separation(start)?;

    for i in 1..=steps {
        let offset = (i as f64 * settings.step_days).min(settings.horizon_days);
        let t_curr = start + sign * offset;
        let f_curr = separation(t_curr)?;

        if f_curr == 0.0 {
            return Ok(Some(t_curr));
        }
        if is_genuine_crossing(f_prev, f_curr) {
            let root = bisect(&mut separation, t_prev, f_prev, t_curr, settings)?;
            return Ok(Some(root));
        }

        t_prev = t_curr;
        f_prev = f_curr;
    }

    Ok(None)
}

fn bisect<F>(
    separation: &mut F,
    mut t_a: f64,
    mut f_a: f64,
    mut t_b: f64,
    settings: &SearchSettings,
) -> Result<f64, EngineError>
where
    F: FnMut(f64) -> Result<f64, EngineError>,
{
    for _ in 0..settings.max_iterations {
        if (t_b - t_a).abs() < settings.tolerance_days {
            break;
        }
        let t_mid = 0.5 * (t_a + t_b);
        let f_mid = separation(t_mid)?;
        if f_mid == 0.0 {
            return Ok(t_mid);
        }
        if f_a * f_mid < 0.0 {
            t_b = t_mid;
        } else {
            t_a = t_mid;
            f_a = f_mid;
        }
    }
    Ok(0.5 * (t_a + t_b))
}
