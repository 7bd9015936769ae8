//! Error types for the Evenup ledger engine.
//!
//! All errors use the `EU_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Split calculation errors
//! - 2xx: Expense application errors
//! - 3xx: Settlement errors
//! - 8xx: Invariant violations
//! - 9xx: General / configuration errors
//!
//! Every variant describes invalid caller input (or, for 8xx, an engine bug).
//! None of them are transient, so none are worth retrying.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{Amount, ParticipantId};

/// Central error enum for all Evenup operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvenupError {
    // =================================================================
    // Split Errors (1xx)
    // =================================================================
    /// A split was requested for a non-positive (or non-finite) total.
    #[error("EU_ERR_100: Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    /// A split was requested with no participants.
    #[error("EU_ERR_101: At least one participant required")]
    NoParticipants,

    /// Exact split values do not sum to the stated total.
    #[error("EU_ERR_102: Exact splits do not sum to total: expected {expected}, got {actual}")]
    SplitMismatch { expected: Amount, actual: Amount },

    /// Percentages do not sum to exactly 100.
    #[error("EU_ERR_103: Percentages must sum to 100, got {actual}")]
    PercentageMismatch { actual: Decimal },

    // =================================================================
    // Expense Errors (2xx)
    // =================================================================
    /// Missing payer or malformed share mapping.
    #[error("EU_ERR_200: Invalid expense: {reason}")]
    InvalidExpense { reason: String },

    // =================================================================
    // Settlement Errors (3xx)
    // =================================================================
    /// Settlement between a participant and themself, or with a missing id.
    #[error("EU_ERR_300: Invalid settlement participants: {reason}")]
    InvalidParticipants { reason: String },

    /// Settlement amount is zero or negative after normalization.
    #[error("EU_ERR_301: Settlement amount must be positive, got {amount}")]
    NonPositiveSettlement { amount: Amount },

    /// No debt edge exists between the two participants.
    #[error("EU_ERR_302: No outstanding balance from {debtor} to {creditor}")]
    NoOutstandingBalance {
        debtor: ParticipantId,
        creditor: ParticipantId,
    },

    /// Settlement amount exceeds the existing debt edge.
    #[error("EU_ERR_303: Settlement of {requested} exceeds owed amount {owed}")]
    SettlementExceedsOwed { requested: Amount, owed: Amount },

    // =================================================================
    // Invariant Errors (8xx)
    // =================================================================
    /// Simplification changed someone's net position. Critical engine bug.
    #[error("EU_ERR_800: Conservation invariant violation: {reason}")]
    ConservationViolation { reason: String },

    // =================================================================
    // General (9xx)
    // =================================================================
    /// Configuration error (invalid config file, out-of-range values, etc.).
    #[error("EU_ERR_900: Configuration error: {0}")]
    Configuration(String),

    /// Serialization / deserialization error.
    #[error("EU_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

impl EvenupError {
    /// Stable error code, e.g. `"EU_ERR_302"`. Transport layers map these to responses.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "EU_ERR_100",
            Self::NoParticipants => "EU_ERR_101",
            Self::SplitMismatch { .. } => "EU_ERR_102",
            Self::PercentageMismatch { .. } => "EU_ERR_103",
            Self::InvalidExpense { .. } => "EU_ERR_200",
            Self::InvalidParticipants { .. } => "EU_ERR_300",
            Self::NonPositiveSettlement { .. } => "EU_ERR_301",
            Self::NoOutstandingBalance { .. } => "EU_ERR_302",
            Self::SettlementExceedsOwed { .. } => "EU_ERR_303",
            Self::ConservationViolation { .. } => "EU_ERR_800",
            Self::Configuration(_) => "EU_ERR_900",
            Self::Serialization(_) => "EU_ERR_901",
        }
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, EvenupError>;

impl From<serde_json::Error> for EvenupError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
