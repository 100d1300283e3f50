//! Exchange summary: what each member sends out and gets back.
//!
//! Kickback cards are dropped from both sides first. What remains pairs up
//! one-to-one: the i-th card a member gave goes with the i-th card it
//! received. A member whose two sides differ in length cannot be paired and
//! is reported as a [`SwapMismatch`] instead.

use cardswap_types::{CardCode, CardId, CardswapError, Result, Roster, SwapStatus};
use serde::Serialize;

/// One give/receive pair for a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRow {
    pub member: String,
    pub give: CardCode,
    pub receive: CardCode,
    /// Status of the received card.
    pub status: SwapStatus,
}

impl std::fmt::Display for ExchangeRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.member, self.give, self.receive, self.status
        )
    }
}

/// A member whose non-kickback awarded and given counts differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwapMismatch {
    pub member: String,
    pub awarded: usize,
    pub given: usize,
}

impl SwapMismatch {
    #[must_use]
    pub fn to_error(&self) -> CardswapError {
        CardswapError::SwapCountMismatch {
            member: self.member.clone(),
            awarded: self.awarded,
            given: self.given,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExchangeSummary {
    pub rows: Vec<ExchangeRow>,
    pub mismatches: Vec<SwapMismatch>,
}

impl ExchangeSummary {
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Pair every member's given and awarded cards, in roster order.
///
/// # Errors
/// Returns `UnknownCard` if a member references a card the roster does not
/// own. Count mismatches are not errors; they land in
/// [`ExchangeSummary::mismatches`].
pub fn exchange_summary(roster: &Roster) -> Result<ExchangeSummary> {
    let mut summary = ExchangeSummary::default();

    for member in roster.members() {
        let awarded = without_kickbacks(roster, &member.awarded)?;
        let given = without_kickbacks(roster, &member.given)?;

        if awarded.len() != given.len() {
            let mismatch = SwapMismatch {
                member: member.name.clone(),
                awarded: awarded.len(),
                given: given.len(),
            };
            tracing::error!(
                member = %mismatch.member,
                awarded = mismatch.awarded,
                given = mismatch.given,
                "Incorrect number of cards swapped"
            );
            summary.mismatches.push(mismatch);
            continue;
        }

        for (gave, got) in given.iter().zip(&awarded) {
            let gave = roster.card(*gave)?;
            let got = roster.card(*got)?;
            summary.rows.push(ExchangeRow {
                member: member.name.clone(),
                give: gave.code.clone(),
                receive: got.code.clone(),
                status: got.status,
            });
        }
    }

    Ok(summary)
}

fn without_kickbacks(roster: &Roster, cards: &[CardId]) -> Result<Vec<CardId>> {
    let mut kept = Vec::with_capacity(cards.len());
    for id in cards {
        if roster.card(*id)?.status != SwapStatus::Kickback {
            kept.push(*id);
        }
    }
    Ok(kept)
}
