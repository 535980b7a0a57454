use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Credentials for the administrator account created on first start.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    /// Booking statuses that do not block a cabin, lowercased. Empty means every
    /// booking blocks its dates.
    pub inactive_statuses: Vec<String>,

    pub admin: Option<AdminCredentials>,
    pub secure_cookie: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address =
            lookup("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let inactive_statuses = lookup("BOOKING_INACTIVE_STATUSES")
            .map(|value| parse_status_list(&value))
            .unwrap_or_default();

        let admin = match (lookup("ADMIN_EMAIL"), lookup("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminCredentials { email, password }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_PASSWORD".to_string()).into())
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar("ADMIN_EMAIL".to_string()).into())
            }
        };

        let secure_cookie = match lookup("SESSION_SECURE_COOKIE") {
            None => false,
            Some(value) => value.parse::<bool>().map_err(|e| ConfigError::InvalidEnvVar {
                name: "SESSION_SECURE_COOKIE".to_string(),
                reason: e.to_string(),
            })?,
        };

        Ok(Self {
            database_url,
            bind_address,
            inactive_statuses,
            admin,
            secure_cookie,
        })
    }
}

fn parse_status_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|status| status.trim().to_lowercase())
        .filter(|status| !status.is_empty())
        .collect()
}
