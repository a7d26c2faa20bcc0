//! Game timing and word supply settings, read from the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use tokio::time::Duration;

use crate::error::AppError;

pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(300);
pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_millis(1000);
pub const DEFAULT_INVITE_TTL: Duration = Duration::from_secs(120);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Wall-clock limit for one session.
    pub time_limit: Duration,
    /// How often each session's supervisor checks the limit.
    pub check_interval: Duration,
    pub invite_ttl: Duration,
    /// Word file; the built-in vocabulary is used when unset.
    pub words_file: Option<PathBuf>,
    /// Fixed seed for word choice and starting player.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
            check_interval: DEFAULT_CHECK_INTERVAL,
            invite_ttl: DEFAULT_INVITE_TTL,
            words_file: None,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Reads `HANGMAN_*` variables, falling back to defaults for anything
    /// unset. Malformed or zero durations are config errors.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            time_limit: duration_var("HANGMAN_TIME_LIMIT_SECS", Duration::from_secs)?
                .unwrap_or(defaults.time_limit),
            check_interval: duration_var("HANGMAN_CHECK_INTERVAL_MS", Duration::from_millis)?
                .unwrap_or(defaults.check_interval),
            invite_ttl: duration_var("HANGMAN_INVITE_TTL_SECS", Duration::from_secs)?
                .unwrap_or(defaults.invite_ttl),
            words_file: opt_var("HANGMAN_WORDS_FILE").map(PathBuf::from),
            seed: parse_var::<u64>("HANGMAN_SEED")?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero durations. The builders accept anything; the service
    /// validates before use.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value) in [
            ("time_limit", self.time_limit),
            ("check_interval", self.check_interval),
            ("invite_ttl", self.invite_ttl),
        ] {
            if value.is_zero() {
                return Err(AppError::config(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    pub fn with_check_interval(mut self, interval: Duration) -> Self {
        self.check_interval = interval;
        self
    }

    pub fn with_invite_ttl(mut self, ttl: Duration) -> Self {
        self.invite_ttl = ttl;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Non-empty, trimmed value of `name`.
fn opt_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    opt_var(name)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| {
                AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
            })
        })
        .transpose()
}

fn duration_var(name: &str, unit: fn(u64) -> Duration) -> Result<Option<Duration>, AppError> {
    match parse_var::<u64>(name)? {
        Some(0) => Err(AppError::config(format!(
            "Environment variable '{name}' must be greater than zero"
        ))),
        other => Ok(other.map(unit)),
    }
}
