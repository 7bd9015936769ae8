//! Directed debt graph for one ledger scope.
//!
//! An edge `debtor → creditor` with amount `x` means the debtor owes the
//! creditor `x`. Two invariants hold after every write:
//!
//! - no edge carries a zero (or negative) amount: edges reaching zero are removed
//! - no self-edge exists
//!
//! Rows and edges keep insertion order, which is the tie-break order the
//! simplifier sees. Equality ignores that order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Amount, ParticipantId};

/// Raw nested form used for serialization: debtor → (creditor → amount).
pub type RawDebtGraph = IndexMap<ParticipantId, IndexMap<ParticipantId, Amount>>;

/// A single outstanding debt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtEdge {
    pub debtor: ParticipantId,
    pub creditor: ParticipantId,
    pub amount: Amount,
}

/// Debt edges of one scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDebtGraph", into = "RawDebtGraph")]
pub struct DebtGraph {
    rows: RawDebtGraph,
}

impl DebtGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by netting each `(debtor, creditor, amount)` in order.
    pub fn from_edges<I, P>(edges: I) -> Self
    where
        I: IntoIterator<Item = (P, P, Amount)>,
        P: Into<ParticipantId>,
    {
        let mut graph = Self::new();
        for (debtor, creditor, amount) in edges {
            graph.add_debt(&debtor.into(), &creditor.into(), amount);
        }
        graph
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.rows.values().map(IndexMap::len).sum()
    }

    /// Amount `debtor` owes `creditor`, if an edge exists.
    #[must_use]
    pub fn amount(&self, debtor: &str, creditor: &str) -> Option<Amount> {
        self.rows.get(debtor)?.get(creditor).copied()
    }

    /// Everything `debtor` owes, keyed by creditor.
    #[must_use]
    pub fn outgoing(&self, debtor: &str) -> Option<&IndexMap<ParticipantId, Amount>> {
        self.rows.get(debtor)
    }

    /// Iterate edges as `(debtor, creditor, amount)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (&ParticipantId, &ParticipantId, Amount)> {
        self.rows.iter().flat_map(|(debtor, row)| {
            row.iter()
                .map(move |(creditor, amount)| (debtor, creditor, *amount))
        })
    }

    /// Owned edge list, in insertion order.
    #[must_use]
    pub fn to_edges(&self) -> Vec<DebtEdge> {
        self.edges()
            .map(|(debtor, creditor, amount)| DebtEdge {
                debtor: debtor.clone(),
                creditor: creditor.clone(),
                amount,
            })
            .collect()
    }

    /// Sum of all edge amounts.
    #[must_use]
    pub fn total_debt(&self) -> Amount {
        self.edges().map(|(_, _, amount)| amount).sum()
    }

    /// Add `amount` to the `debtor → creditor` edge, creating it if absent.
    ///
    /// Self-edges and zero amounts are ignored. An edge whose result is not
    /// positive is removed. Returns the amount left on the edge.
    pub fn add_debt(
        &mut self,
        debtor: &ParticipantId,
        creditor: &ParticipantId,
        amount: Amount,
    ) -> Amount {
        if debtor == creditor || amount.is_zero() {
            return self.amount(debtor.as_str(), creditor.as_str()).unwrap_or(Amount::ZERO);
        }

        let row = self.rows.entry(debtor.clone()).or_default();
        let current = row.get(creditor).copied().unwrap_or(Amount::ZERO);
        let updated = current + amount;
        if updated.is_positive() {
            row.insert(creditor.clone(), updated);
            updated
        } else {
            row.shift_remove(creditor);
            if row.is_empty() {
                self.rows.shift_remove(debtor);
            }
            Amount::ZERO
        }
    }

    /// Subtract `amount` from an existing edge, removing it at zero.
    ///
    /// Callers validate `amount <= owed` first; anything past zero also
    /// removes the edge. Returns the amount left.
    pub fn reduce_debt(
        &mut self,
        debtor: &ParticipantId,
        creditor: &ParticipantId,
        amount: Amount,
    ) -> Amount {
        self.add_debt(debtor, creditor, -amount)
    }

    /// Consume into the raw nested map.
    #[must_use]
    pub fn into_raw(self) -> RawDebtGraph {
        self.rows
    }
}

impl From<RawDebtGraph> for DebtGraph {
    fn from(raw: RawDebtGraph) -> Self {
        let mut graph = Self::new();
        for (debtor, row) in raw {
            for (creditor, amount) in row {
                graph.add_debt(&debtor, &creditor, amount);
            }
        }
        graph
    }
}

impl From<DebtGraph> for RawDebtGraph {
    fn from(graph: DebtGraph) -> Self {
        graph.rows
    }
}
