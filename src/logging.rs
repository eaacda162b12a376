//! Structured logging setup.
//!
//! Services and handlers log through `tracing`; which subscriber receives the
//! events is chosen here at startup. `off` installs nothing, so every event is
//! discarded.

use std::fmt;
use std::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Output strategy for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human readable output.
    Text,
    /// Multi-line colored output for local development.
    Pretty,
    /// Newline-delimited JSON for log collectors.
    Json,
    /// Discard all events.
    Off,
}

#[derive(Debug, thiserror::Error)]
#[error("must be 'text', 'pretty', 'json' or 'off', got '{0}'")]
pub struct UnknownLogFormat(String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            "off" => Ok(Self::Off),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Pretty => "pretty",
            Self::Json => "json",
            Self::Off => "off",
        };
        f.write_str(name)
    }
}

/// Installs the global subscriber for `format`.
///
/// `filter` uses `RUST_LOG` syntax; an invalid directive falls back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(format: LogFormat, filter: &str) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    let result = match format {
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .pretty()
            .try_init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .json()
            .with_current_span(true)
            .try_init(),
        LogFormat::Off => return Ok(()),
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {e}"))
}
