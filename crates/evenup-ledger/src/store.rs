//! Scoped debt ledger.
//!
//! Holds one [`DebtGraph`] per [`Scope`]. Scopes are created lazily on the
//! first debt written into them and never deleted. Every mutation validates
//! its whole input before touching a graph, so a failed call leaves the
//! ledger exactly as it was.

use std::collections::HashMap;

use evenup_split::calculate_split;
use evenup_types::{
    Amount, DebtGraph, EngineConfig, EvenupError, ParticipantId, Result, Scope, SplitPolicy,
    SplitResult, normalize,
};
use indexmap::IndexMap;
use rust_decimal::Decimal;

/// In-memory store of every scope's debt graph.
///
/// The ledger is an ordinary value: the host creates one at startup and
/// passes it (or a lock around it) to whatever needs it. Mutations take
/// `&mut self`, so two writers can never interleave on the same ledger.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    /// Per-scope debt graphs.
    pub(crate) scopes: HashMap<Scope, DebtGraph>,
    /// Engine settings (dust threshold, logging).
    pub(crate) config: EngineConfig,
}

impl Ledger {
    /// Create an empty ledger with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with the given settings.
    ///
    /// # Errors
    /// Returns `Configuration` if the config fails validation.
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scopes: HashMap::new(),
            config,
        })
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Record that `debtor` owes `creditor` a further `raw` amount.
    ///
    /// Ignored when the two ids are equal, either id is empty, or the amount
    /// normalizes to zero or below. Returns the amount now on the edge.
    pub fn apply_debt(
        &mut self,
        debtor: &ParticipantId,
        creditor: &ParticipantId,
        raw: Decimal,
        scope: &Scope,
    ) -> Amount {
        let amount = normalize(raw);
        if debtor == creditor || debtor.is_empty() || creditor.is_empty() || amount.is_zero() {
            return self.edge(debtor, creditor, scope);
        }
        if amount.is_negative() {
            tracing::warn!(
                %scope,
                %debtor,
                %creditor,
                %amount,
                "Negative debt ignored"
            );
            return self.edge(debtor, creditor, scope);
        }

        let graph = self.scopes.entry(scope.clone()).or_default();
        let updated = graph.add_debt(debtor, creditor, amount);

        tracing::debug!(
            %scope,
            %debtor,
            %creditor,
            %amount,
            balance = %updated,
            "Debt applied"
        );
        updated
    }

    /// Every participant in `shares` other than `payer` now owes `payer` their share.
    ///
    /// # Errors
    /// `InvalidExpense` if the payer id is empty, `shares` is empty, any
    /// participant id is empty, or any share is negative. Nothing is written
    /// on failure.
    pub fn apply_expense(
        &mut self,
        payer: &ParticipantId,
        shares: &SplitResult,
        scope: &Scope,
    ) -> Result<()> {
        validate_expense(payer, shares)?;

        for (participant, share) in shares.iter() {
            if participant == payer {
                continue;
            }
            self.apply_debt(participant, payer, share.value(), scope);
        }

        tracing::info!(
            %scope,
            %payer,
            participants = shares.len(),
            total = %shares.total(),
            "Expense applied"
        );
        Ok(())
    }

    /// Split `total` by `policy` and apply the result with `payer` as creditor.
    ///
    /// Returns the computed split so the caller can echo it back.
    ///
    /// # Errors
    /// Any split error (`InvalidAmount`, `NoParticipants`, `SplitMismatch`,
    /// `PercentageMismatch`) or `InvalidExpense`.
    pub fn record_expense(
        &mut self,
        payer: &ParticipantId,
        total: Decimal,
        policy: &SplitPolicy,
        scope: &Scope,
    ) -> Result<SplitResult> {
        let shares = calculate_split(total, policy)?;
        self.apply_expense(payer, &shares, scope)?;
        Ok(shares)
    }

    /// Snapshot of what `participant` owes, keyed by creditor.
    #[must_use]
    pub fn get_ledger(
        &self,
        participant: &ParticipantId,
        scope: &Scope,
    ) -> IndexMap<ParticipantId, Amount> {
        self.scopes
            .get(scope)
            .and_then(|graph| graph.outgoing(participant.as_str()))
            .cloned()
            .unwrap_or_default()
    }

    /// Snapshot of a whole scope. Unknown scopes read as empty.
    #[must_use]
    pub fn scope_graph(&self, scope: &Scope) -> DebtGraph {
        self.scopes.get(scope).cloned().unwrap_or_default()
    }

    /// Net balance per participant within one scope.
    #[must_use]
    pub fn net_balances(&self, scope: &Scope) -> IndexMap<ParticipantId, Amount> {
        self.scopes
            .get(scope)
            .map(evenup_simplify::net_balances)
            .unwrap_or_default()
    }

    /// Scopes that have received at least one debt.
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.scopes.keys()
    }

    /// Current amount on one edge, zero if absent.
    fn edge(&self, debtor: &ParticipantId, creditor: &ParticipantId, scope: &Scope) -> Amount {
        self.scopes
            .get(scope)
            .and_then(|graph| graph.amount(debtor.as_str(), creditor.as_str()))
            .unwrap_or(Amount::ZERO)
    }
}

fn validate_expense(payer: &ParticipantId, shares: &SplitResult) -> Result<()> {
    if payer.is_empty() {
        return Err(EvenupError::InvalidExpense {
            reason: "payer is required".to_string(),
        });
    }
    if shares.is_empty() {
        return Err(EvenupError::InvalidExpense {
            reason: "share mapping is empty".to_string(),
        });
    }
    for (participant, share) in shares.iter() {
        if participant.is_empty() {
            return Err(EvenupError::InvalidExpense {
                reason: "share mapping contains an empty participant id".to_string(),
            });
        }
        if share.is_negative() {
            return Err(EvenupError::InvalidExpense {
                reason: format!("share for {participant} is negative: {share}"),
            });
        }
    }
    Ok(())
}
