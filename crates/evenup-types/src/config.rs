//! Engine configuration.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants;
use crate::{EvenupError, Result};

/// Configuration for one ledger engine instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Net balances below this magnitude are treated as settled during simplification.
    pub dust_threshold: Decimal,
    /// Log output settings.
    pub logging: LogConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dust_threshold: constants::DUST_THRESHOLD,
            logging: LogConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| EvenupError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    ///
    /// The dust threshold must stay below one cent, otherwise real one-cent
    /// balances would be silently dropped during simplification.
    pub fn validate(&self) -> Result<()> {
        if self.dust_threshold.is_sign_negative() || self.dust_threshold >= constants::CENT {
            return Err(EvenupError::Configuration(format!(
                "dust_threshold must be in [0, {}), got {}",
                constants::CENT,
                self.dust_threshold
            )));
        }
        if self.logging.filter.trim().is_empty() {
            return Err(EvenupError::Configuration(
                "logging.filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Log output settings consumed by the host's tracing initialisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `"info"` or `"evenup_ledger=debug"`.
    pub filter: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: constants::DEFAULT_LOG_FILTER.to_string(),
            json: false,
        }
    }
}
