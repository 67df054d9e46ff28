use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppConfigError {
    #[error("environment variable {0} is required")]
    MissingVariable(&'static str),

    #[error("environment variable {name} has an invalid value: {value}")]
    InvalidVariable { name: &'static str, value: String },
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub secret_api_key: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            port: parse_or_default(&lookup, "PORT", 8081)?,
            database_url: required(&lookup, "DATABASE_URL")?,
            database_max_connections: parse_or_default(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            secret_api_key: required(&lookup, "SECRET_API_KEY")?,
        })
    }
}

fn required<F>(lookup: &F, name: &'static str) -> Result<String, AppConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .ok_or(AppConfigError::MissingVariable(name))
}

fn parse_or_default<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, AppConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map_err(|_| AppConfigError::InvalidVariable { name, value: raw })
        }
        _ => Ok(default),
    }
}
