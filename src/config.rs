//! Host configuration loaded from environment variables
//!
//! Used only by the `idxstrip-host` program. The connection string is resolved
//! but never opened: database registration is disabled.

use std::env;
use std::fmt;

/// Environment variable holding the development connection string
pub const DEV_CONNECTION_STRING: &str = "DEV_CONNECTION_STRING";

/// Environment variable holding the production connection string
pub const PROD_CONNECTION_STRING: &str = "PROD_CONNECTION_STRING";

/// Connection string used when neither variable is set
pub const DEFAULT_CONNECTION_STRING: &str =
    "server=localhost;port=3306;database=myapp;uid=root;pwd=YourPassword";

/// Where the connection string came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionSource {
    /// `DEV_CONNECTION_STRING`
    Dev,
    /// `PROD_CONNECTION_STRING`
    Prod,
    /// Built-in default
    Default,
}

impl fmt::Display for ConnectionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dev => write!(f, "{DEV_CONNECTION_STRING}"),
            Self::Prod => write!(f, "{PROD_CONNECTION_STRING}"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Process-wide host configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    /// Resolved MySQL connection string
    pub connection_string: String,
    /// Which setting supplied it
    pub source: ConnectionSource,
}

impl HostConfig {
    /// Load from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Dev wins over prod; empty values count as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(connection_string) = resolve(DEV_CONNECTION_STRING) {
            Self {
                connection_string,
                source: ConnectionSource::Dev,
            }
        } else if let Some(connection_string) = resolve(PROD_CONNECTION_STRING) {
            Self {
                connection_string,
                source: ConnectionSource::Prod,
            }
        } else {
            Self {
                connection_string: DEFAULT_CONNECTION_STRING.to_string(),
                source: ConnectionSource::Default,
            }
        }
    }

    /// Connection string with every `pwd=` value replaced by `***`
    #[must_use]
    pub fn masked_connection_string(&self) -> String {
        mask_password(&self.connection_string)
    }
}

fn mask_password(connection_string: &str) -> String {
    connection_string
        .split(';')
        .map(|part| {
            let (key, _) = part.split_once('=').unwrap_or((part, ""));
            if key.trim().eq_ignore_ascii_case("pwd") && part.contains('=') {
                format!("{key}=***")
            } else {
                part.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(";")
}
