//! # evenup-simplify
//!
//! **Pure deterministic debt simplifier for Evenup.**
//!
//! Takes one scope's [`DebtGraph`](evenup_types::DebtGraph) and produces a new
//! graph with the same net position for every participant but as few edges
//! as the greedy matching finds. It has:
//!
//! - **Zero side effects**: the input graph is never touched
//! - **Deterministic output**: same input (same insertion order) -> same output
//! - **Conservation check**: [`verify_conservation`] proves nobody's net position moved
//! - **Fingerprints**: [`compute_graph_root`] for cheap cross-host comparison

pub mod conservation;
pub mod fingerprint;
pub mod net;
pub mod simplifier;

pub use conservation::verify_conservation;
pub use fingerprint::{compute_graph_root, graph_root_hex, verify_graph_root};
pub use net::net_balances;
pub use simplifier::{simplify, simplify_with_threshold};
