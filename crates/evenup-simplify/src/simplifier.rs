//! Net balance greedy matching.
//!
//! ```text
//! simplify(DebtGraph) -> DebtGraph
//! ```
//!
//! ## Algorithm
//!
//! 1. Compute every participant's net balance
//! 2. Drop balances whose magnitude is below the dust threshold
//! 3. Split into debtors (negative net, kept as magnitude) and creditors
//! 4. Stable-sort both sides descending by magnitude
//! 5. Repeatedly match the largest remaining debtor with the largest remaining
//!    creditor for `min(debt, credit)`, emitting one edge per match and
//!    advancing whichever side is exhausted
//!
//! Each match exhausts at least one side, so the output never has more than
//! `debtors + creditors - 1` edges. A pure cycle nets to all-zero balances
//! and disappears. Running the simplifier on its own output returns the same
//! graph: the output's net balances are the input's, and the sorted sides
//! come out in the same order.
//!
//! ## Tie-break
//!
//! Equal magnitudes keep the first-appearance order of [`net_balances`]. The
//! order is deterministic for a given input graph, but callers should not
//! treat which of two equal creditors gets paid first as part of the contract.

use evenup_types::{Amount, DebtGraph, ParticipantId, constants::DUST_THRESHOLD};
use rust_decimal::Decimal;

use crate::net::net_balances;

/// One side of the matching with what is still open.
#[derive(Debug)]
struct Position {
    participant: ParticipantId,
    remaining: Amount,
}

/// A remaining magnitude at zero or within dust counts as fully matched.
fn is_settled(remaining: Amount, dust: Decimal) -> bool {
    !remaining.is_positive() || remaining.is_dust(dust)
}

/// Simplify with the default dust threshold (0.009).
#[must_use]
pub fn simplify(graph: &DebtGraph) -> DebtGraph {
    simplify_with_threshold(graph, DUST_THRESHOLD)
}

/// Simplify, treating net balances with magnitude below `dust` as settled.
#[must_use]
pub fn simplify_with_threshold(graph: &DebtGraph, dust: Decimal) -> DebtGraph {
    let mut debtors: Vec<Position> = Vec::new();
    let mut creditors: Vec<Position> = Vec::new();

    for (participant, net) in net_balances(graph) {
        if is_settled(net.abs(), dust) {
            continue;
        }
        if net.is_negative() {
            debtors.push(Position {
                participant,
                remaining: net.abs(),
            });
        } else {
            creditors.push(Position {
                participant,
                remaining: net,
            });
        }
    }

    // `sort_by` is stable: equal magnitudes keep first-appearance order.
    debtors.sort_by(|a, b| b.remaining.cmp(&a.remaining));
    creditors.sort_by(|a, b| b.remaining.cmp(&a.remaining));

    let mut simplified = DebtGraph::new();
    let mut i = 0;
    let mut j = 0;
    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = debtor.remaining.min(creditor.remaining);
        simplified.add_debt(&debtor.participant, &creditor.participant, amount);

        debtor.remaining -= amount;
        creditor.remaining -= amount;

        if is_settled(debtor.remaining, dust) {
            i += 1;
        }
        if is_settled(creditor.remaining, dust) {
            j += 1;
        }
    }

    tracing::debug!(
        edges_before = graph.edge_count(),
        edges_after = simplified.edge_count(),
        debtors = debtors.len(),
        creditors = creditors.len(),
        "Debt graph simplified"
    );

    simplified
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn c(cents: i64) -> Amount {
        Amount::from_cents(cents)
    }

    fn graph(edges: &[(&str, &str, i64)]) -> DebtGraph {
        DebtGraph::from_edges(edges.iter().map(|(d, cr, x)| (*d, *cr, c(*x))))
    }

    #[test]
    fn removes_simple_transitive_debt() {
        let result = simplify(&graph(&[("A", "B", 1000), ("B", "C", 1000)]));
        assert_eq!(result, graph(&[("A", "C", 1000)]));
    }

    #[test]
    fn handles_partial_transitive_debt() {
        let result = simplify(&graph(&[("A", "B", 1000), ("B", "C", 500)]));
        assert_eq!(result, graph(&[("A", "B", 500), ("A", "C", 500)]));
    }

    #[test]
    fn eliminates_circular_debt_completely() {
        let result = simplify(&graph(&[("A", "B", 1000), ("B", "C", 1000), ("C", "A", 1000)]));
        assert!(result.is_empty());
    }

    #[test]
    fn multiple_debtors_single_creditor_unchanged() {
        let input = graph(&[("A", "D", 3000), ("B", "D", 2000), ("C", "D", 1000)]);
        assert_eq!(simplify(&input), input);
    }

    #[test]
    fn empty_graph_stays_empty() {
        assert!(simplify(&DebtGraph::new()).is_empty());
    }

    #[test]
    fn preserves_legitimate_one_cent_balances() {
        let result = simplify(&graph(&[("A", "B", 1001), ("B", "C", 1000)]));
        assert_eq!(result, graph(&[("A", "B", 1), ("A", "C", 1000)]));
    }

    #[test]
    fn sub_cent_noise_is_normalized_away() {
        // 10.0000001 normalizes to 10.00 before it ever reaches the graph.
        let noisy = Amount::try_from_f64(10.000_000_1).unwrap();
        let input = DebtGraph::from_edges([("A", "B", noisy), ("B", "C", c(1000))]);
        assert_eq!(simplify(&input), graph(&[("A", "C", 1000)]));
    }

    #[test]
    fn output_has_no_zero_edges() {
        let result = simplify(&graph(&[("A", "B", 1000), ("B", "C", 999)]));
        assert!(result.edges().all(|(_, _, amount)| amount.is_positive()));
    }

    #[test]
    fn largest_debtor_pays_largest_creditor_first() {
        let input = graph(&[("A", "X", 500), ("B", "Y", 3000), ("B", "X", 100)]);
        let result = simplify(&input);
        // Debtors: B 31.00, A 5.00. Creditors: Y 30.00, X 6.00.
        assert_eq!(result, graph(&[("B", "Y", 3000), ("B", "X", 100), ("A", "X", 500)]));
    }

    #[test]
    fn equal_magnitudes_keep_first_appearance_order() {
        let result = simplify(&graph(&[("A", "B", 1000), ("B", "C", 500)]));
        let edges = result.to_edges();
        assert_eq!(edges[0].creditor.as_str(), "B");
        assert_eq!(edges[1].creditor.as_str(), "C");
    }

    #[test]
    fn zero_dust_threshold_still_terminates() {
        let input = graph(&[("A", "B", 1000), ("B", "C", 1000), ("C", "A", 400)]);
        let result = simplify_with_threshold(&input, Decimal::ZERO);
        assert_eq!(result, graph(&[("A", "C", 600)]));
    }

    #[test]
    fn opposite_edges_net_out() {
        let result = simplify(&graph(&[("A", "B", 1000), ("B", "A", 400)]));
        assert_eq!(result, graph(&[("A", "B", 600)]));
    }

    fn random_graph(rng: &mut StdRng, people: usize, edges: usize) -> DebtGraph {
        let mut g = DebtGraph::new();
        for _ in 0..edges {
            let d = rng.gen_range(0..people);
            let cr = rng.gen_range(0..people);
            let cents: i64 = rng.gen_range(1..50_000);
            g.add_debt(
                &ParticipantId::new(format!("p{d}")),
                &ParticipantId::new(format!("p{cr}")),
                c(cents),
            );
        }
        g
    }

    #[test]
    fn random_graphs_satisfy_simplification_properties() {
        let mut rng = StdRng::seed_from_u64(42);
        for round in 0..300 {
            let people = rng.gen_range(2..10);
            let edges = rng.gen_range(0..30);
            let input = random_graph(&mut rng, people, edges);
            let output = simplify(&input);

            // Net positions are conserved.
            let before = net_balances(&input);
            let after = net_balances(&output);
            for (participant, net) in &before {
                let moved = after.get(participant).copied().unwrap_or(Amount::ZERO);
                assert!(
                    (*net - moved).is_dust(DUST_THRESHOLD),
                    "round {round}: {participant} moved from {net} to {moved}"
                );
            }

            // Total positive balance equals total output debt.
            let owed: Amount = before.values().filter(|n| n.is_positive()).sum();
            assert_eq!(output.total_debt(), owed, "round {round}");

            // Edge bound.
            let debtors = before.values().filter(|n| n.is_negative()).count();
            let creditors = before.values().filter(|n| n.is_positive()).count();
            if debtors + creditors > 0 {
                assert!(output.edge_count() < debtors + creditors, "round {round}");
            } else {
                assert!(output.is_empty());
            }

            // Idempotent.
            assert_eq!(simplify(&output), output, "round {round}");
        }
    }
}
