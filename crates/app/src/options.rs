//! Run options read from the environment.
//!
//! | Variable               | Meaning                                        |
//! |------------------------|------------------------------------------------|
//! | `CITY_DESIGNER_CONFIG` | path to a JSON `CityConfig` (missing fields default) |
//! | `CITY_DESIGNER_SEED`   | `u64` seed, clock-seeded when unset            |
//! | `CITY_DESIGNER_CLICKS` | interactive clicks as `x,y;x,y;...`            |
//! | `CITY_DESIGNER_OUT`    | output path, `.bin` for a snapshot, else JSON  |

use std::fmt;
use std::path::PathBuf;

use generation::CityConfig;

pub const CONFIG_VAR: &str = "CITY_DESIGNER_CONFIG";
pub const SEED_VAR: &str = "CITY_DESIGNER_SEED";
pub const CLICKS_VAR: &str = "CITY_DESIGNER_CLICKS";
pub const OUT_VAR: &str = "CITY_DESIGNER_OUT";

#[derive(Debug)]
pub enum OptionsError {
    ReadConfig { path: PathBuf, source: std::io::Error },
    ParseConfig { path: PathBuf, source: serde_json::Error },
    BadSeed(String),
    BadClick(String),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::ReadConfig { path, source } => {
                write!(f, "cannot read config {}: {source}", path.display())
            }
            OptionsError::ParseConfig { path, source } => {
                write!(f, "invalid config {}: {source}", path.display())
            }
            OptionsError::BadSeed(s) => write!(f, "{SEED_VAR} is not a u64: {s:?}"),
            OptionsError::BadClick(s) => write!(f, "{CLICKS_VAR} entry is not x,y: {s:?}"),
        }
    }
}

impl std::error::Error for OptionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OptionsError::ReadConfig { source, .. } => Some(source),
            OptionsError::ParseConfig { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct RunOptions {
    pub config: CityConfig,
    pub seed: Option<u64>,
    pub clicks: Vec<(f32, f32)>,
    pub out: Option<PathBuf>,
}

impl RunOptions {
    pub fn from_env() -> Result<Self, OptionsError> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        let config = match var(CONFIG_VAR) {
            Some(path) => load_config(PathBuf::from(path))?,
            None => {
                let mut config = CityConfig::default();
                config.update_standard_building_size();
                config
            }
        };

        Ok(Self {
            config,
            seed: var(SEED_VAR).as_deref().map(parse_seed).transpose()?,
            clicks: var(CLICKS_VAR)
                .as_deref()
                .map(parse_clicks)
                .transpose()?
                .unwrap_or_default(),
            out: var(OUT_VAR).map(PathBuf::from),
        })
    }
}

fn load_config(path: PathBuf) -> Result<CityConfig, OptionsError> {
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(source) => return Err(OptionsError::ReadConfig { path, source }),
    };
    serde_json::from_str(&text).map_err(|source| OptionsError::ParseConfig { path, source })
}

pub fn parse_seed(s: &str) -> Result<u64, OptionsError> {
    s.trim()
        .parse()
        .map_err(|_| OptionsError::BadSeed(s.to_string()))
}

/// Parse `x,y;x,y;...`. Empty entries (a trailing `;`) are skipped.
pub fn parse_clicks(s: &str) -> Result<Vec<(f32, f32)>, OptionsError> {
    s.split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let bad = || OptionsError::BadClick(entry.to_string());
            let (x, y) = entry.split_once(',').ok_or_else(bad)?;
            let x: f32 = x.trim().parse().map_err(|_| bad())?;
            let y: f32 = y.trim().parse().map_err(|_| bad())?;
            if x.is_finite() && y.is_finite() {
                Ok((x, y))
            } else {
                Err(bad())
            }
        })
        .collect()
}
