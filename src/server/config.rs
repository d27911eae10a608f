use std::net::SocketAddr;

use crate::server::{
    error::config::ConfigError,
    util::shift::{
        ShiftClock, DEFAULT_MORNING_START_HOUR, DEFAULT_NIGHT_START_HOUR,
        DEFAULT_UTC_OFFSET_MINUTES,
    },
};

pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";

/// Credentials of the owner account created on startup when no owner exists yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapOwner {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub server_addr: SocketAddr,
    pub shift_clock: ShiftClock,
    pub bootstrap_owner: Option<BootstrapOwner>,
}

impl Config {
    /// Read configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns `None` for unset variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };

        let database_url = required("DATABASE_URL")?;
        let valkey_url = required("VALKEY_URL")?;

        let server_addr = parse_or(&lookup, "SERVER_ADDR", || {
            DEFAULT_SERVER_ADDR.parse::<SocketAddr>()
        })?;

        let utc_offset_minutes = parse_or(&lookup, "SHIFT_UTC_OFFSET_MINUTES", || {
            Ok::<_, std::convert::Infallible>(DEFAULT_UTC_OFFSET_MINUTES)
        })?;
        let morning_start_hour = parse_or(&lookup, "SHIFT_MORNING_START_HOUR", || {
            Ok::<_, std::convert::Infallible>(DEFAULT_MORNING_START_HOUR)
        })?;
        let night_start_hour = parse_or(&lookup, "SHIFT_NIGHT_START_HOUR", || {
            Ok::<_, std::convert::Infallible>(DEFAULT_NIGHT_START_HOUR)
        })?;

        let shift_clock = ShiftClock::new(utc_offset_minutes, morning_start_hour, night_start_hour)?;

        let bootstrap_owner = match (
            lookup("BOOTSTRAP_OWNER_EMAIL"),
            lookup("BOOTSTRAP_OWNER_PASSWORD"),
        ) {
            (Some(email), Some(password)) => Some(BootstrapOwner {
                name: lookup("BOOTSTRAP_OWNER_NAME").unwrap_or_else(|| "Owner".to_string()),
                email,
                password,
            }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingEnvVar(
                    "BOOTSTRAP_OWNER_PASSWORD".to_string(),
                ))
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingEnvVar(
                    "BOOTSTRAP_OWNER_EMAIL".to_string(),
                ))
            }
        };

        Ok(Self {
            database_url,
            valkey_url,
            server_addr,
            shift_clock,
            bootstrap_owner,
        })
    }
}

/// Parse an optional variable, using `default` when it is unset.
fn parse_or<T, F, D, E>(lookup: &F, key: &str, default: D) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
    D: FnOnce() -> Result<T, E>,
    E: std::fmt::Display,
{
    let invalid = |reason: String| ConfigError::InvalidEnvValue {
        var: key.to_string(),
        reason,
    };

    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|e| invalid(e.to_string())),
        None => default().map_err(|e| invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::server::{config::Config, error::config::ConfigError, util::shift::ShiftClock};

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |key| vars.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 2] = [
        ("DATABASE_URL", "postgres://bakeshift@localhost/bakeshift"),
        ("VALKEY_URL", "redis://localhost:6379"),
    ];

    /// Expect defaults for every optional variable when only the required ones are set
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup_from(&REQUIRED)).unwrap();

        assert_eq!(config.server_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.shift_clock, ShiftClock::default());
        assert!(config.bootstrap_owner.is_none());
    }

    /// Expect MissingEnvVar when the database URL is unset
    #[test]
    fn rejects_missing_database_url() {
        let result = Config::from_lookup(lookup_from(&[("VALKEY_URL", "redis://localhost")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    /// Expect InvalidEnvValue when a numeric variable does not parse
    #[test]
    fn rejects_unparsable_offset() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SHIFT_UTC_OFFSET_MINUTES", "one hour"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "SHIFT_UTC_OFFSET_MINUTES"
        ));
    }

    /// Expect the alternate 6/14 boundaries to be accepted through configuration
    #[test]
    fn accepts_alternate_shift_boundaries() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SHIFT_MORNING_START_HOUR", "6"));
        vars.push(("SHIFT_NIGHT_START_HOUR", "14"));

        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        assert_eq!(config.shift_clock, ShiftClock::new(60, 6, 14).unwrap());
    }

    /// Expect an error when the morning shift would not start before the night shift
    #[test]
    fn rejects_inverted_shift_boundaries() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("SHIFT_MORNING_START_HOUR", "22"));
        vars.push(("SHIFT_NIGHT_START_HOUR", "10"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(result, Err(ConfigError::InvalidShiftBoundaries(_))));
    }

    /// Expect the bootstrap owner to require both email and password
    #[test]
    fn bootstrap_owner_requires_password() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("BOOTSTRAP_OWNER_EMAIL", "owner@bakery.test"));

        let result = Config::from_lookup(lookup_from(&vars));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "BOOTSTRAP_OWNER_PASSWORD"));

        vars.push(("BOOTSTRAP_OWNER_PASSWORD", "hunter22"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();

        let owner = config.bootstrap_owner.unwrap();
        assert_eq!(owner.name, "Owner");
        assert_eq!(owner.email, "owner@bakery.test");
    }
}
