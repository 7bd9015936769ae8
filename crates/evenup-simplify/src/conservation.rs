//! Net position conservation checker.
//!
//! Invariant enforced after every simplification the ledger commits:
//! ```text
//! ∀ participant: |net_before(p) - net_after(p)| < dust
//! edges_after <= debtors + creditors - 1
//! ```
//!
//! Simplification may move *who* pays *whom*, never *how much* anyone is
//! owed or owes overall. If this check fails the engine has a bug, and the
//! ledger refuses to commit the new graph.

use evenup_types::{Amount, DebtGraph, EvenupError, Result};
use rust_decimal::Decimal;

use crate::net::net_balances;

/// Verify that `after` preserves every net position of `before`.
///
/// # Errors
/// Returns [`EvenupError::ConservationViolation`] if any participant's net
/// balance moved by at least `dust`, or `after` has more edges than a
/// greedy matching can produce.
pub fn verify_conservation(before: &DebtGraph, after: &DebtGraph, dust: Decimal) -> Result<()> {
    let net_before = net_balances(before);
    let net_after = net_balances(after);

    for (participant, expected) in &net_before {
        let actual = net_after.get(participant).copied().unwrap_or(Amount::ZERO);
        if !(*expected - actual).is_dust(dust) && *expected != actual {
            return Err(EvenupError::ConservationViolation {
                reason: format!(
                    "participant {participant}: net {expected} before, {actual} after"
                ),
            });
        }
    }
    for (participant, actual) in &net_after {
        if !net_before.contains_key(participant) && !actual.is_dust(dust) && !actual.is_zero() {
            return Err(EvenupError::ConservationViolation {
                reason: format!("participant {participant} appeared with net {actual}"),
            });
        }
    }

    let active = net_before
        .values()
        .filter(|net| !net.is_dust(dust) && !net.is_zero())
        .count();
    let max_edges = active.saturating_sub(1);
    if after.edge_count() > max_edges {
        return Err(EvenupError::ConservationViolation {
            reason: format!(
                "{} edges exceed the bound of {max_edges} for {active} active participants",
                after.edge_count()
            ),
        });
    }

    Ok(())
}
