use std::env;
use std::ops::Range;
use std::str::FromStr;
use std::time::Duration;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};

use crate::utils::AppError;

/// Latência e falha simuladas do backend mock
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    pub failure_rate: f64,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 1000,
            delay_max_ms: 2000,
            failure_rate: 0.1,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// No latency, no failures. Handy for tests and demos.
    pub fn instant() -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
            failure_rate: 0.0,
            seed: Some(0),
        }
    }

    pub fn delay_range(&self) -> Range<u64> {
        self.delay_min_ms..self.delay_max_ms
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_range("API_DELAY", self.delay_min_ms, self.delay_max_ms)?;
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(AppError::Config(format!(
                "API_FAILURE_RATE must be within [0, 1], got {}",
                self.failure_rate
            )));
        }
        Ok(())
    }
}

/// Artificial delay the loader waits before running a producer
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub delay_min_ms: u64,
    pub delay_max_ms: u64,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delay_min_ms: 500,
            delay_max_ms: 800,
            seed: None,
        }
    }
}

impl LoaderConfig {
    pub fn instant() -> Self {
        Self {
            delay_min_ms: 0,
            delay_max_ms: 0,
            seed: Some(0),
        }
    }

    pub fn delay_range(&self) -> Range<u64> {
        self.delay_min_ms..self.delay_max_ms
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_range("LOADER_DELAY", self.delay_min_ms, self.delay_max_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub api: SimulationConfig,
    pub loader: LoaderConfig,
}

impl AppConfig {
    /// Lê configuração do ambiente (chame `dotenv()` antes)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_defaults = SimulationConfig::default();
        let loader_defaults = LoaderConfig::default();

        let config = AppConfig {
            api: SimulationConfig {
                delay_min_ms: parse_or(&lookup, "API_DELAY_MIN_MS", api_defaults.delay_min_ms)?,
                delay_max_ms: parse_or(&lookup, "API_DELAY_MAX_MS", api_defaults.delay_max_ms)?,
                failure_rate: parse_or(&lookup, "API_FAILURE_RATE", api_defaults.failure_rate)?,
                seed: lookup("API_SEED")
                    .map(|raw| parse_value("API_SEED", &raw))
                    .transpose()?,
            },
            loader: LoaderConfig {
                delay_min_ms: parse_or(&lookup, "LOADER_DELAY_MIN_MS", loader_defaults.delay_min_ms)?,
                delay_max_ms: parse_or(&lookup, "LOADER_DELAY_MAX_MS", loader_defaults.delay_max_ms)?,
                seed: lookup("LOADER_SEED")
                    .map(|raw| parse_value("LOADER_SEED", &raw))
                    .transpose()?,
            },
        };

        config.api.validate()?;
        config.loader.validate()?;
        Ok(config)
    }
}

/// Uniform pick within `[range.start, range.end)`; a collapsed range yields `start`.
pub fn pick_delay(rng: &mut StdRng, range: Range<u64>) -> Duration {
    let ms = if range.start >= range.end {
        range.start
    } else {
        rng.random_range(range)
    };
    Duration::from_millis(ms)
}

/// Seeded RNG when a seed is configured, otherwise seeded from the thread RNG
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::rng().random()),
    }
}

fn validate_range(name: &str, min: u64, max: u64) -> Result<(), AppError> {
    if min > max {
        return Err(AppError::Config(format!(
            "{}_MIN_MS ({}) must not exceed {}_MAX_MS ({})",
            name, min, name, max
        )));
    }
    Ok(())
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => parse_value(key, &raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("{}='{}': {}", key, raw, e)))
}
