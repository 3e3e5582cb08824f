use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_EXPIRES_IN_SECS: i64 = 60 * 60 * 24;
const DEFAULT_JWT_REFRESH_EXPIRES_IN_SECS: i64 = 60 * 60 * 24 * 365;
const DEFAULT_BCRYPT_SALT_ROUNDS: u32 = 12;
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_refresh_secret: String,
    pub jwt_expires_in_secs: i64,
    pub jwt_refresh_expires_in_secs: i64,

    pub bcrypt_salt_rounds: u32,

    pub port: u16,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, or `None` when it is unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and every number parsed
    /// - `Err(AppError::ConfigErr)` - A required variable is missing or a value is malformed
    pub fn from_source<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_refresh_secret: required("JWT_REFRESH_SECRET")?,
            jwt_expires_in_secs: parse_or(&lookup, "JWT_EXPIRES_IN_SECS", DEFAULT_JWT_EXPIRES_IN_SECS)?,
            jwt_refresh_expires_in_secs: parse_or(
                &lookup,
                "JWT_REFRESH_EXPIRES_IN_SECS",
                DEFAULT_JWT_REFRESH_EXPIRES_IN_SECS,
            )?,
            bcrypt_salt_rounds: parse_or(&lookup, "BCRYPT_SALT_ROUNDS", DEFAULT_BCRYPT_SALT_ROUNDS)?,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
        })
    }
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("DATABASE_URL", "sqlite::memory:"),
        ("JWT_SECRET", "access"),
        ("JWT_REFRESH_SECRET", "refresh"),
    ];

    #[test]
    fn applies_defaults_for_optional_variables() {
        let config = Config::from_source(lookup(&REQUIRED)).unwrap();

        assert_eq!(config.port, 5000);
        assert_eq!(config.bcrypt_salt_rounds, 12);
        assert_eq!(config.jwt_expires_in_secs, 86_400);
        assert_eq!(config.cors_origin, "http://localhost:5173");
    }

    #[test]
    fn reports_missing_required_variable() {
        let result = Config::from_source(lookup(&REQUIRED[..2]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(name))) if name == "JWT_REFRESH_SECRET"
        ));
    }

    #[test]
    fn rejects_unparsable_number() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("PORT", "eighty"));

        let result = Config::from_source(lookup(&vars));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
