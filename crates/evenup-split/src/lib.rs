//! # evenup-split
//!
//! **Split calculator for Evenup.**
//!
//! Turns an expense total plus a [`SplitPolicy`] into a [`SplitResult`]:
//! one normalized share per participant, summing exactly to the normalized
//! total. Every function here is pure:
//!
//! - **Equal**: truncated base share, leftover cents to the lexicographically first participants
//! - **Exact**: caller amounts, accepted only if they add up to the total to the cent
//! - **Percentage**: per-participant rounding, last participant absorbs the drift

pub mod equal;
pub mod exact;
pub mod percentage;

use evenup_types::{EvenupError, Result, SplitPolicy, SplitResult};
use rust_decimal::Decimal;

pub use equal::equal_split;
pub use exact::exact_split;
pub use percentage::percentage_split;

/// Dispatch on the policy tag.
pub fn calculate_split(total: Decimal, policy: &SplitPolicy) -> Result<SplitResult> {
    let result = match policy {
        SplitPolicy::Equal(participants) => equal_split(total, participants),
        SplitPolicy::Exact(shares) => exact_split(total, shares),
        SplitPolicy::Percentage(percentages) => percentage_split(total, percentages),
    };

    if let Err(err) = &result {
        tracing::debug!(kind = policy.kind(), %total, error = %err, "Split rejected");
    }
    result
}

/// Checks shared by every split: positive total, at least one participant.
pub(crate) fn validate_input(total: Decimal, participant_count: usize) -> Result<()> {
    if total <= Decimal::ZERO {
        return Err(EvenupError::InvalidAmount {
            reason: format!("amount must be positive, got {total}"),
        });
    }
    if participant_count == 0 {
        return Err(EvenupError::NoParticipants);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use evenup_types::{Amount, ParticipantId};
    use indexmap::IndexMap;

    use super::*;

    #[test]
    fn dispatches_equal() {
        let policy = SplitPolicy::Equal(vec!["u1".into(), "u2".into()]);
        let result = calculate_split(Decimal::ONE_HUNDRED, &policy).unwrap();
        assert_eq!(result.get("u1"), Some(Amount::from_cents(5000)));
        assert_eq!(result.get("u2"), Some(Amount::from_cents(5000)));
    }

    #[test]
    fn dispatches_exact() {
        let shares: IndexMap<ParticipantId, Decimal> = [
            ("u1".into(), Decimal::new(10, 0)),
            ("u2".into(), Decimal::new(20, 0)),
        ]
        .into_iter()
        .collect();
        let result = calculate_split(Decimal::new(30, 0), &SplitPolicy::Exact(shares)).unwrap();
        assert_eq!(result.total(), Amount::from_cents(3000));
    }

    #[test]
    fn dispatches_percentage() {
        let pct: IndexMap<ParticipantId, Decimal> = [
            ("u1".into(), Decimal::new(30, 0)),
            ("u2".into(), Decimal::new(50, 0)),
        ]
        .into_iter()
        .collect();
        let err = calculate_split(Decimal::ONE_HUNDRED, &SplitPolicy::Percentage(pct)).unwrap_err();
        assert!(matches!(err, EvenupError::PercentageMismatch { .. }));
    }

    #[test]
    fn non_positive_total_rejected_for_every_policy() {
        let policies = [
            SplitPolicy::Equal(vec!["u1".into()]),
            SplitPolicy::Exact([("u1".into(), Decimal::ZERO)].into_iter().collect()),
            SplitPolicy::Percentage([("u1".into(), Decimal::ONE_HUNDRED)].into_iter().collect()),
        ];
        for policy in &policies {
            for total in [Decimal::ZERO, Decimal::NEGATIVE_ONE] {
                let err = calculate_split(total, policy).unwrap_err();
                assert!(
                    matches!(err, EvenupError::InvalidAmount { .. }),
                    "{} with total {total}: {err}",
                    policy.kind()
                );
            }
        }
    }

    #[test]
    fn empty_participants_rejected_for_every_policy() {
        let policies = [
            SplitPolicy::Equal(Vec::new()),
            SplitPolicy::Exact(IndexMap::new()),
            SplitPolicy::Percentage(IndexMap::new()),
        ];
        for policy in &policies {
            let err = calculate_split(Decimal::TEN, policy).unwrap_err();
            assert_eq!(err, EvenupError::NoParticipants, "{}", policy.kind());
        }
    }
}
