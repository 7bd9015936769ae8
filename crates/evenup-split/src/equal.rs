//! Equal split with penny handling.
//!
//! ```text
//! base      = floor(total / n * 100) / 100
//! remainder = normalize(total - base * n)          (0 <= remainder <= n cents)
//! share(p)  = base + 0.01   for the first remainder/0.01 participants in sorted order
//!           = base          for everyone else
//! ```
//!
//! Sorting fixes who receives the extra cents, so the same inputs always give
//! the same shares regardless of the order the caller listed participants in.

use std::collections::BTreeSet;

use evenup_types::{Amount, ParticipantId, Result, SplitResult, constants::MONEY_SCALE, normalize};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::validate_input;

/// Divide `total` evenly among `participants` (treated as a set).
///
/// # Errors
/// - `InvalidAmount` if `total <= 0`
/// - `NoParticipants` if `participants` is empty
pub fn equal_split(total: Decimal, participants: &[ParticipantId]) -> Result<SplitResult> {
    validate_input(total, participants.len())?;

    let sorted: BTreeSet<&ParticipantId> = participants.iter().collect();
    let count = Decimal::from(sorted.len());

    // total > 0, so truncation toward zero is the floor.
    let base = Amount::normalize(
        (total / count).round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::ToZero),
    );
    let mut remainder = normalize(total - base.value() * count);

    let mut result = SplitResult::new();
    for participant in sorted {
        let share = if remainder.is_positive() {
            remainder -= Amount::CENT;
            base + Amount::CENT
        } else {
            base
        };
        result.insert(participant.clone(), share);
    }
    Ok(result)
}
