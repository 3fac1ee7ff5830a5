//! Runtime configuration.
//!
//! The only tunable is the cap on how many addresses a materialised
//! expansion may hold. It comes from the environment (a `.env` file is
//! loaded by the binary) and can be overridden on the command line.

use std::error::Error;

/// Default cap on addresses returned by a materialised expansion.
pub const DEFAULT_MAX_ADDRESSES: u128 = 1 << 20;

/// Environment variable overriding [`DEFAULT_MAX_ADDRESSES`].
pub const MAX_ADDRESSES_ENV: &str = "IP_CIDR_MAX_ADDRESSES";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Largest expansion that will be materialised.
    pub max_addresses: u128,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_addresses: DEFAULT_MAX_ADDRESSES,
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        match std::env::var(MAX_ADDRESSES_ENV) {
            Ok(value) => Config::from_value(Some(value.as_str())),
            Err(std::env::VarError::NotPresent) => Config::from_value(None),
            Err(e) => Err(format!("Error reading {MAX_ADDRESSES_ENV}: {e}").into()),
        }
    }

    /// Build configuration from the raw value of [`MAX_ADDRESSES_ENV`].
    pub fn from_value(max_addresses: Option<&str>) -> Result<Config, Box<dyn Error>> {
        let Some(value) = max_addresses else {
            return Ok(Config::default());
        };
        let max_addresses = value
            .trim()
            .parse::<u128>()
            .map_err(|e| format!("Invalid {MAX_ADDRESSES_ENV}='{value}': {e}"))?;
        log::debug!("{MAX_ADDRESSES_ENV}={max_addresses}");
        Ok(Config { max_addresses })
    }

    /// Apply a command line override, if any.
    pub fn with_max_addresses(self, max_addresses: Option<u128>) -> Config {
        Config {
            max_addresses: max_addresses.unwrap_or(self.max_addresses),
        }
    }
}
