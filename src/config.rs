use std::fmt;

use crate::models::dataset::GeneratorConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_APP_NAME: &str = "Health Directorate Dashboard";
/// `actix_web::cookie::Key::from` needs at least this many bytes.
pub const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    Invalid { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Invalid { key, value } => write!(f, "Invalid value for {key}: {value:?}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: String,
    pub app_name: String,
    /// `None` when unset or shorter than `MIN_SESSION_KEY_LEN`.
    pub session_key: Option<Vec<u8>>,
    pub demo_seed: Option<u64>,
    pub employee_count: Option<usize>,
    pub daily_report_count: Option<usize>,
    pub weekly_report_count: Option<usize>,
}

fn parse_opt<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let session_key = match lookup("SESSION_KEY") {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => Some(val.into_bytes()),
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                None
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                None
            }
        };

        Ok(AppConfig {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
            session_key,
            demo_seed: parse_opt(&lookup, "DEMO_SEED")?,
            employee_count: parse_opt(&lookup, "EMPLOYEE_COUNT")?,
            daily_report_count: parse_opt(&lookup, "DAILY_REPORT_COUNT")?,
            weekly_report_count: parse_opt(&lookup, "WEEKLY_REPORT_COUNT")?,
        })
    }

    /// Generator settings with the configured row counts applied.
    pub fn generator(&self, base: GeneratorConfig) -> GeneratorConfig {
        GeneratorConfig {
            employees: self.employee_count.unwrap_or(base.employees),
            daily_reports: self.daily_report_count.unwrap_or(base.daily_reports),
            weekly_reports: self.weekly_report_count.unwrap_or(base.weekly_reports),
            ..base
        }
    }
}
