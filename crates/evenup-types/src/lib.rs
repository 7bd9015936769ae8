//! # evenup-types
//!
//! Shared types, errors, and configuration for the **Evenup** ledger engine.
//!
//! This crate is the leaf dependency of the workspace: every other crate
//! depends on it. It defines:
//!
//! - **Money**: [`Amount`] and [`normalize`], the single rounding rule every amount passes through
//! - **Identifiers**: [`ParticipantId`], [`GroupId`], [`Scope`]
//! - **Debt model**: [`DebtGraph`], [`DebtEdge`]
//! - **Split model**: [`SplitPolicy`], [`SplitResult`]
//! - **Configuration**: [`EngineConfig`], [`LogConfig`]
//! - **Errors**: [`EvenupError`] with `EU_ERR_` prefix codes
//! - **Constants**: money scale, dust threshold, defaults

pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod graph;
pub mod ids;
pub mod split;

// Re-export all primary types at crate root for ergonomic imports:
//   use evenup_types::{Amount, DebtGraph, ParticipantId, Scope, ...};

pub use amount::*;
pub use config::*;
pub use error::*;
pub use graph::*;
pub use ids::*;
pub use split::*;

// Constants are accessed via `evenup_types::constants::FOO`
// (not re-exported to avoid name collisions).
