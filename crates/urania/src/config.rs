//! Engine settings, loaded once at process start and passed to whatever
//! constructs the engine.

use crate::ephemeris::SearchSettings;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted when no data path is configured
pub const DATA_PATH_ENV: &str = "SWISS_EPHEMERIS_PATH";
const FALLBACK_DATA_PATH: &str = "/usr/local/share/swisseph";

#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    /// Directory holding the ephemeris data files
    pub data_path: PathBuf,
    pub search: SearchSettings,
}

impl EngineSettings {
    pub fn new(data_path: PathBuf) -> Self {
        Self {
            data_path,
            search: SearchSettings::default(),
        }
    }

    /// Settings with the data path taken from `SWISS_EPHEMERIS_PATH`, or
    /// the usual install location when it is unset
    pub fn from_env() -> Self {
        Self::new(default_data_path())
    }
}

fn default_data_path() -> PathBuf {
    env::var(DATA_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(FALLBACK_DATA_PATH))
}

#[derive(Debug, Clone, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    data_path: Option<PathBuf>,
    #[serde(default)]
    search: SearchSettings,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: Option<EphemerisToml>,
}

/// Parse settings from TOML text with an `[ephemeris]` table.
///
/// A missing table or missing keys fall back to [`EngineSettings::from_env`]
/// and the default search bounds.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse ephemeris settings: {e}"))?;
    let Some(cfg) = root.ephemeris else {
        log::debug!("No [ephemeris] table, using defaults");
        return Ok(EngineSettings::from_env());
    };

    let EphemerisToml { data_path, search } = cfg;
    search
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid [ephemeris.search] settings: {e}"))?;

    Ok(EngineSettings {
        data_path: data_path.unwrap_or_else(default_data_path),
        search,
    })
}

/// Load settings from a TOML file
pub fn load_engine_settings(path: &Path) -> anyhow::Result<EngineSettings> {
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read {}: {e}", path.display()))?;
    parse_engine_settings(&text)
}
