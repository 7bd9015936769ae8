//! Split policies and split results.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Amount, ParticipantId};

/// How an expense total is divided among participants.
///
/// Wire names match the `splitType` values of the expense API
/// (`EQUAL`, `EXACT`, `PERCENTAGE`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SplitPolicy {
    /// Even shares; leftover cents go to the lexicographically first participants.
    Equal(Vec<ParticipantId>),
    /// Caller-provided amounts that must add up to the total.
    Exact(IndexMap<ParticipantId, Decimal>),
    /// Percentages that must add up to exactly 100. The last entry absorbs rounding.
    Percentage(IndexMap<ParticipantId, Decimal>),
}

impl SplitPolicy {
    /// Short label for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Equal(_) => "EQUAL",
            Self::Exact(_) => "EXACT",
            Self::Percentage(_) => "PERCENTAGE",
        }
    }
}

/// Per-participant shares of one expense, summing exactly to the normalized total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SplitResult {
    shares: IndexMap<ParticipantId, Amount>,
}

impl SplitResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) a participant's share.
    pub fn insert(&mut self, participant: ParticipantId, share: Amount) {
        self.shares.insert(participant, share);
    }

    #[must_use]
    pub fn get(&self, participant: &str) -> Option<Amount> {
        self.shares.get(participant).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, Amount)> {
        self.shares.iter().map(|(id, share)| (id, *share))
    }

    /// Sum of all shares.
    #[must_use]
    pub fn total(&self) -> Amount {
        self.shares.values().sum()
    }

    #[must_use]
    pub fn into_inner(self) -> IndexMap<ParticipantId, Amount> {
        self.shares
    }
}

impl FromIterator<(ParticipantId, Amount)> for SplitResult {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, Amount)>>(iter: I) -> Self {
        Self {
            shares: iter.into_iter().collect(),
        }
    }
}

impl From<IndexMap<ParticipantId, Amount>> for SplitResult {
    fn from(shares: IndexMap<ParticipantId, Amount>) -> Self {
        Self { shares }
    }
}
