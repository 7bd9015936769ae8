//! Direct settlement of one debt edge.
//!
//! A settlement is the only operation that rewrites a scope wholesale:
//! 1. Validate participants, the existing edge, and the amount
//! 2. Reduce the edge (removing it at exactly zero) on a working copy
//! 3. Re-simplify the whole working copy
//! 4. Check net positions were conserved
//! 5. Swap the simplified graph in as the scope's new state
//!
//! A partial payment can change which netting is optimal, so the scope is
//! rebuilt from net balances rather than patched edge by edge.

use evenup_simplify::{graph_root_hex, simplify_with_threshold, verify_conservation};
use evenup_types::{Amount, EvenupError, ParticipantId, Result, Scope, normalize};
use rust_decimal::Decimal;

use crate::Ledger;

impl Ledger {
    /// Record that `debtor` paid `creditor` `raw` against their debt, then
    /// re-simplify the scope.
    ///
    /// # Errors
    /// Checked in this order, before anything is written:
    /// - `InvalidParticipants` if the ids are equal or either is empty
    /// - `NoOutstandingBalance` if no `debtor → creditor` edge exists
    /// - `NonPositiveSettlement` if `normalize(raw) <= 0`
    /// - `SettlementExceedsOwed` if the amount is larger than the edge
    /// - `ConservationViolation` if simplification would move a net position
    pub fn settle_debt(
        &mut self,
        debtor: &ParticipantId,
        creditor: &ParticipantId,
        raw: Decimal,
        scope: &Scope,
    ) -> Result<()> {
        let owed = self.validate_settlement(debtor, creditor, raw, scope)?;
        let amount = normalize(raw);
        let dust = self.config.dust_threshold;

        let mut working = self.scope_graph(scope);
        let remaining = working.reduce_debt(debtor, creditor, amount);
        let simplified = simplify_with_threshold(&working, dust);
        verify_conservation(&working, &simplified, dust)?;

        tracing::info!(
            %scope,
            %debtor,
            %creditor,
            %amount,
            %owed,
            %remaining,
            edges_before = working.edge_count(),
            edges_after = simplified.edge_count(),
            graph_root = %graph_root_hex(&simplified),
            "Settlement applied, scope re-simplified"
        );

        self.scopes.insert(scope.clone(), simplified);
        Ok(())
    }

    /// Returns the amount currently owed on the edge.
    fn validate_settlement(
        &self,
        debtor: &ParticipantId,
        creditor: &ParticipantId,
        raw: Decimal,
        scope: &Scope,
    ) -> Result<Amount> {
        if debtor.is_empty() || creditor.is_empty() {
            return Err(EvenupError::InvalidParticipants {
                reason: "both debtor and creditor are required".to_string(),
            });
        }
        if debtor == creditor {
            return Err(EvenupError::InvalidParticipants {
                reason: format!("{debtor} cannot settle with themself"),
            });
        }

        let owed = self
            .scopes
            .get(scope)
            .and_then(|graph| graph.amount(debtor.as_str(), creditor.as_str()))
            .ok_or_else(|| EvenupError::NoOutstandingBalance {
                debtor: debtor.clone(),
                creditor: creditor.clone(),
            })?;

        let amount = normalize(raw);
        if !amount.is_positive() {
            return Err(EvenupError::NonPositiveSettlement { amount });
        }
        if amount > owed {
            return Err(EvenupError::SettlementExceedsOwed {
                requested: amount,
                owed,
            });
        }
        Ok(owed)
    }
}
