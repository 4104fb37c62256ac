use thiserror::Error;

const DEFAULT_BASE_URL: &str = "/";
const DEFAULT_PASSWORD_MIN_LENGTH: usize = 6;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a positive whole number, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },
    #[error("LOG_FORMAT must be `pretty` or `json`, got `{0}`")]
    InvalidLogFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub base_url: String,
    pub log_format: LogFormat,
    pub password_min_length: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup. Unset or empty keys fall back
    /// to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let base_url = get("APP_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let log_format = match get("LOG_FORMAT").as_deref().map(str::trim) {
            None => LogFormat::default(),
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(other) => return Err(ConfigError::InvalidLogFormat(other.to_string())),
        };

        let password_min_length = match get("PASSWORD_MIN_LENGTH") {
            None => DEFAULT_PASSWORD_MIN_LENGTH,
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or(ConfigError::InvalidNumber {
                    key: "PASSWORD_MIN_LENGTH",
                    value: raw.clone(),
                })?,
        };

        Ok(AppConfig {
            base_url,
            log_format,
            password_min_length,
        })
    }
}
