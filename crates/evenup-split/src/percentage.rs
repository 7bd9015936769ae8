//! Percentage split.
//!
//! Rounding every share independently can leave the sum a cent off the
//! total, so the last participant (input order) receives whatever is left
//! instead of their own rounded share.

use evenup_types::{
    Amount, EvenupError, ParticipantId, Result, SplitResult, constants::PERCENT_TOTAL, normalize,
};
use indexmap::IndexMap;
use rust_decimal::Decimal;

use crate::validate_input;

/// Split `total` by percentages that must sum to exactly 100.
///
/// # Errors
/// - `InvalidAmount` / `NoParticipants` for bad input
/// - `PercentageMismatch` if the raw percentages do not sum to 100
pub fn percentage_split(
    total: Decimal,
    percentages: &IndexMap<ParticipantId, Decimal>,
) -> Result<SplitResult> {
    validate_input(total, percentages.len())?;

    let pct_sum: Decimal = percentages.values().copied().sum();
    if pct_sum != PERCENT_TOTAL {
        return Err(EvenupError::PercentageMismatch { actual: pct_sum });
    }

    let last = percentages.len() - 1;
    let mut distributed = Amount::ZERO;
    let mut result = SplitResult::new();
    for (index, (participant, pct)) in percentages.iter().enumerate() {
        let share = if index == last {
            normalize(total - distributed.value())
        } else {
            let share = normalize(total * *pct / PERCENT_TOTAL);
            distributed += share;
            share
        };
        result.insert(participant.clone(), share);
    }
    Ok(result)
}
