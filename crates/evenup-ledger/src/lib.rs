//! # evenup-ledger
//!
//! **Scoped debt ledger for Evenup.**
//!
//! The [`Ledger`] holds one debt graph per scope (global, or one per group)
//! and exposes the engine's mutating operations:
//!
//! 1. [`Ledger::apply_expense`]: each non-payer owes the payer their share
//! 2. [`Ledger::record_expense`]: split a total, then apply it
//! 3. [`Ledger::settle_debt`]: pay down one edge, then re-simplify the scope
//!
//! Reads ([`Ledger::get_ledger`], [`Ledger::scope_graph`],
//! [`Ledger::net_balances`]) return owned snapshots.
//!
//! ## Concurrency
//!
//! Everything is synchronous and in-memory. Mutations take `&mut self`; a
//! multi-threaded host serializes writers with its own lock around the
//! ledger (or keeps one ledger per shard of scopes).

pub mod settlement;
pub mod store;
pub mod telemetry;

pub use store::Ledger;
pub use telemetry::init_tracing;

pub use evenup_types::{
    Amount, DebtEdge, DebtGraph, EngineConfig, EvenupError, GroupId, LogConfig, ParticipantId,
    Result, Scope, SplitPolicy, SplitResult, normalize,
};
