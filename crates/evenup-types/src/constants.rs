//! System-wide constants for the Evenup ledger engine.

use rust_decimal::Decimal;

/// Fractional digits carried by every [`crate::Amount`] (currency minor units).
pub const MONEY_SCALE: u32 = 2;

/// One minor unit (0.01).
pub const CENT: Decimal = Decimal::from_parts(1, 0, 0, false, MONEY_SCALE);

/// Net balances with a magnitude below this are treated as settled (0.009).
pub const DUST_THRESHOLD: Decimal = Decimal::from_parts(9, 0, 0, false, 3);

/// Percentages in a percentage split must add up to exactly this.
pub const PERCENT_TOTAL: Decimal = Decimal::ONE_HUNDRED;

/// Default `tracing` filter directive used when no config is supplied.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Evenup";
