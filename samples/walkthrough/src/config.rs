//! Walkthrough configuration.
//!
//! Values come from environment variables (optionally from a `.env` file) and
//! default to the reference scenario.
//!
//! # Example
//!
//! ```rust,ignore
//! use walkthrough::config::WalkthroughConfig;
//!
//! let config = WalkthroughConfig::from_env()?;
//! println!("find probe: {}", config.find);
//! ```

use std::env;
use std::num::ParseIntError;

/// Errors raised while reading the walkthrough configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable holds something other than an integer (list).
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Description of why the value is invalid.
        message: String,
    },
}

/// Inputs of the walkthrough.
///
/// - `initial`: values inserted one by one
/// - `bulk`: values inserted as a sequence afterwards
/// - `find`: probe for `find`
/// - `upper_bound`: probe for `upper_bound`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WalkthroughConfig {
    /// Values inserted individually.
    pub initial: Vec<i64>,
    /// Values inserted in one batch.
    pub bulk: Vec<i64>,
    /// Value looked up with `find`.
    pub find: i64,
    /// Value looked up with `upper_bound`.
    pub upper_bound: i64,
}

impl Default for WalkthroughConfig {
    fn default() -> Self {
        Self {
            initial: vec![-10, 25],
            bulk: vec![-41, 26, 33],
            find: 27,
            upper_bound: 26,
        }
    }
}

impl WalkthroughConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `WALKTHROUGH_INITIAL`: comma-separated integers (default: `-10,25`)
    /// - `WALKTHROUGH_BULK`: comma-separated integers (default: `-41,26,33`)
    /// - `WALKTHROUGH_FIND`: integer (default: 27)
    /// - `WALKTHROUGH_UPPER_BOUND`: integer (default: 26)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Keys for which `lookup` returns `None` keep their default.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            initial: lookup_parsed(&lookup, "WALKTHROUGH_INITIAL", defaults.initial, parse_list)?,
            bulk: lookup_parsed(&lookup, "WALKTHROUGH_BULK", defaults.bulk, parse_list)?,
            find: lookup_parsed(&lookup, "WALKTHROUGH_FIND", defaults.find, parse_integer)?,
            upper_bound: lookup_parsed(
                &lookup,
                "WALKTHROUGH_UPPER_BOUND",
                defaults.upper_bound,
                parse_integer,
            )?,
        })
    }
}

fn lookup_parsed<F, V>(
    lookup: &F,
    key: &str,
    default: V,
    parse: fn(&str) -> Result<V, ParseIntError>,
) -> Result<V, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map_or_else(
        || Ok(default),
        |value| {
            parse(&value).map_err(|error| ConfigError::InvalidValue {
                key: key.to_string(),
                message: error.to_string(),
            })
        },
    )
}

fn parse_integer(raw: &str) -> Result<i64, ParseIntError> {
    raw.trim().parse()
}

/// Parses `-41, 26,33` style lists; a blank value is the empty list.
fn parse_list(raw: &str) -> Result<Vec<i64>, ParseIntError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    raw.split(',').map(parse_integer).collect()
}
