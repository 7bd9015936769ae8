//! Graph fingerprints for cross-host consistency checks.
//!
//! Two hosts holding the same scope must hold the same debts. The
//! `graph_root` is a SHA-256 over the canonical edge list (sorted by debtor,
//! then creditor) so it can be compared without shipping whole graphs.
//! Insertion order does not affect the root, matching `DebtGraph` equality.

use evenup_types::DebtGraph;
use sha2::{Digest, Sha256};

/// Compute the order-insensitive fingerprint of a graph.
#[must_use]
pub fn compute_graph_root(graph: &DebtGraph) -> [u8; 32] {
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let mut hasher = Sha256::new();
    hasher.update(b"evenup:graph_root:v1:");
    hasher.update((edges.len() as u64).to_le_bytes());

    for (debtor, creditor, amount) in edges {
        // Length prefixes keep ("ab","c") distinct from ("a","bc").
        hasher.update((debtor.as_str().len() as u64).to_le_bytes());
        hasher.update(debtor.as_str().as_bytes());
        hasher.update((creditor.as_str().len() as u64).to_le_bytes());
        hasher.update(creditor.as_str().as_bytes());
        hasher.update(amount.to_string().as_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Hex form of [`compute_graph_root`], as written to logs.
#[must_use]
pub fn graph_root_hex(graph: &DebtGraph) -> String {
    hex::encode(compute_graph_root(graph))
}

/// Recompute the root and compare with `expected_root`.
#[must_use]
pub fn verify_graph_root(graph: &DebtGraph, expected_root: &[u8; 32]) -> bool {
    compute_graph_root(graph) == *expected_root
}
