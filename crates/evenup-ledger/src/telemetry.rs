//! Tracing subscriber setup for hosts embedding the ledger.

use evenup_types::{EvenupError, LogConfig, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber described by `config`.
///
/// `RUST_LOG` is not consulted; the filter comes from the config so that the
/// engine logs the same way under every host.
///
/// # Errors
/// `Configuration` if the filter directive does not parse or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| EvenupError::Configuration(format!("tracing init failed: {e}")))
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.filter).map_err(|e| {
        EvenupError::Configuration(format!("invalid log filter {:?}: {e}", config.filter))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_filters_parse() {
        for filter in ["info", "evenup_ledger=debug,warn", "trace"] {
            let cfg = LogConfig {
                filter: filter.to_string(),
                json: false,
            };
            assert!(build_filter(&cfg).is_ok(), "{filter}");
        }
    }

    #[test]
    fn invalid_filter_is_configuration_error() {
        let cfg = LogConfig {
            filter: "evenup_ledger=notalevel".to_string(),
            json: false,
        };
        let err = build_filter(&cfg).unwrap_err();
        assert_eq!(err.code(), "EU_ERR_900");
    }

    #[test]
    fn second_init_fails() {
        let cfg = LogConfig::default();
        // The first call may race with other tests; only the second must fail.
        let _ = init_tracing(&cfg);
        assert!(init_tracing(&cfg).is_err());
    }
}
