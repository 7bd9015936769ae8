//! Exact split: the caller states every share.

use evenup_types::{Amount, EvenupError, ParticipantId, Result, SplitResult, normalize};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::validate_input;

/// Normalize each share and accept them only if they sum to `normalize(total)`.
///
/// There is no tolerance: a one-cent difference is a mismatch.
///
/// # Errors
/// - `InvalidAmount` / `NoParticipants` for bad input
/// - `SplitMismatch` if the normalized shares do not add up to the total
pub fn exact_split(total: Decimal, shares: &IndexMap<ParticipantId, Decimal>) -> Result<SplitResult> {
    validate_input(total, shares.len())?;

    let result: SplitResult = shares
        .iter()
        .map(|(participant, share)| (participant.clone(), normalize(*share)))
        .collect();

    let expected = normalize(total);
    let actual: Amount = result.total();
    if actual != expected {
        return Err(EvenupError::SplitMismatch { expected, actual });
    }
    Ok(result)
}
