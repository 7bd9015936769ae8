//! Net balance computation.
//!
//! ```text
//! net(p) = Σ incoming(p) - Σ outgoing(p)
//! ```
//!
//! Positive means the participant is owed money overall (net creditor),
//! negative means they owe (net debtor). Across a whole graph the balances
//! always sum to zero.

use evenup_types::{Amount, DebtGraph, ParticipantId};
use indexmap::IndexMap;

/// Net balance of every participant that appears in `graph`.
///
/// Participants are listed in order of first appearance while walking the
/// edges (debtor before creditor). That order is the simplifier's tie-break.
#[must_use]
pub fn net_balances(graph: &DebtGraph) -> IndexMap<ParticipantId, Amount> {
    let mut net: IndexMap<ParticipantId, Amount> = IndexMap::new();
    for (debtor, creditor, amount) in graph.edges() {
        *net.entry(debtor.clone()).or_insert(Amount::ZERO) -= amount;
        *net.entry(creditor.clone()).or_insert(Amount::ZERO) += amount;
    }
    net
}
