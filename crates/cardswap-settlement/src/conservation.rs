//! Swap conservation invariant checker.
//!
//! Invariant checked after every allocation run:
//! ```text
//! ∀ card: |{m : card ∈ m.awarded}| == 1 == |{m : card ∈ m.given}|
//! ∀ member: |awarded| <= |offered|
//! pool is empty
//! ```
//!
//! Cards move between members but are never created, duplicated or lost.

use std::collections::HashMap;

use cardswap_types::{CardId, CardswapError, Result, Roster, SwapResult, SwapStatus};

/// Per-card tallies over a roster's awarded and given lists.
#[derive(Debug, Default)]
pub struct SwapConservation {
    /// How many times each card appears in someone's awarded list.
    received: HashMap<CardId, usize>,
    /// How many times each card appears in its owner's given list.
    given: HashMap<CardId, usize>,
    /// Members holding more cards than they offered: (name, awarded, offered).
    overdrawn: Vec<(String, usize, usize)>,
    /// Given entries recorded on someone other than the card's owner.
    misattributed: Vec<CardId>,
}

impl SwapConservation {
    /// Tally every member's lists.
    #[must_use]
    pub fn tally(roster: &Roster) -> Self {
        let mut tally = Self::default();
        for member in roster.members() {
            for id in &member.awarded {
                *tally.received.entry(*id).or_insert(0) += 1;
            }
            for id in &member.given {
                *tally.given.entry(*id).or_insert(0) += 1;
                if roster.card(*id).is_ok_and(|c| c.owner != member.id) {
                    tally.misattributed.push(*id);
                }
            }
            if member.awarded_count() > member.offered_count() {
                tally.overdrawn.push((
                    member.name.clone(),
                    member.awarded_count(),
                    member.offered_count(),
                ));
            }
        }
        tally
    }

    /// Times `card` was received.
    #[must_use]
    pub fn times_received(&self, card: CardId) -> usize {
        self.received.get(&card).copied().unwrap_or(0)
    }

    /// Times `card` was recorded as given.
    #[must_use]
    pub fn times_given(&self, card: CardId) -> usize {
        self.given.get(&card).copied().unwrap_or(0)
    }

    /// Verify the roster-level invariants against `roster`.
    ///
    /// Every card that left the pool (status other than offered) must have
    /// been received exactly once and given exactly once; every card still
    /// offered must appear in neither list.
    ///
    /// # Errors
    /// Returns [`CardswapError::SwapInvariantViolation`] naming the first
    /// broken invariant.
    pub fn verify(&self, roster: &Roster) -> Result<()> {
        if let Some((name, awarded, offered)) = self.overdrawn.first() {
            return Err(violation(format!(
                "member {name} awarded {awarded} cards but offered only {offered}"
            )));
        }
        if let Some(card) = self.misattributed.first() {
            return Err(violation(format!(
                "{card} recorded as given by a member who does not own it"
            )));
        }

        for card in roster.cards() {
            let expected = usize::from(card.status != SwapStatus::Offered);
            let received = self.times_received(card.id);
            let given = self.times_given(card.id);
            if received != expected || given != expected {
                return Err(violation(format!(
                    "{} ({}) status {} received {received}x given {given}x, expected {expected}x",
                    card.id, card.code, card.status
                )));
            }
        }

        if let Some(unknown) = self
            .received
            .keys()
            .chain(self.given.keys())
            .find(|id| roster.card(**id).is_err())
        {
            return Err(violation(format!("{unknown} is not part of the roster")));
        }
        Ok(())
    }

    /// Full post-run check: roster invariants plus an empty pool.
    ///
    /// # Errors
    /// Returns [`CardswapError::SwapInvariantViolation`] on the first
    /// failure.
    pub fn verify_result(result: &SwapResult) -> Result<()> {
        Self::tally(&result.roster).verify(&result.roster)?;
        if !result.leftover.is_empty() {
            return Err(violation(format!(
                "{} cards left in the pool after allocation",
                result.leftover.len()
            )));
        }
        tracing::debug!(
            cards = result.roster.card_count(),
            awards = result.awards.len(),
            "Swap conservation verified"
        );
        Ok(())
    }
}

fn violation(reason: String) -> CardswapError {
    CardswapError::SwapInvariantViolation { reason }
}

#[cfg(test)]
mod tests {
    use cardswap_types::*;

    use super::*;
    use crate::awards::tests::award;

    fn mutual() -> Roster {
        let mut roster = Roster::dummy(&[("A", &["X"], &["Y"]), ("B", &["Y"], &["X"])]);
        award(&mut roster, 1, 0, SwapStatus::Wanted);
        award(&mut roster, 0, 1, SwapStatus::Wanted);
        roster
    }

    #[test]
    fn untouched_roster_is_conserved() {
        let roster = Roster::dummy(&[("A", &["X"], &["Y"])]);
        assert!(SwapConservation::tally(&roster).verify(&roster).is_ok());
    }

    #[test]
    fn completed_swap_is_conserved() {
        let roster = mutual();
        let tally = SwapConservation::tally(&roster);
        assert_eq!(tally.times_received(CardId(0)), 1);
        assert_eq!(tally.times_given(CardId(1)), 1);
        assert!(tally.verify(&roster).is_ok());
    }

    #[test]
    fn double_award_detected() {
        let mut roster = mutual();
        roster.member_mut(MemberId(0)).unwrap().awarded.push(CardId(0));

        let err = SwapConservation::tally(&roster).verify(&roster).unwrap_err();
        assert!(matches!(err, CardswapError::SwapInvariantViolation { .. }));
    }

    #[test]
    fn overdrawn_member_detected() {
        let mut roster = Roster::dummy(&[("A", &["X"], &[]), ("B", &["Y", "Z"], &[])]);
        award(&mut roster, 1, 0, SwapStatus::Unclaimed);
        award(&mut roster, 2, 0, SwapStatus::Unclaimed);

        let err = SwapConservation::tally(&roster).verify(&roster).unwrap_err();
        assert!(err.to_string().contains("offered only 1"), "{err}");
    }

    #[test]
    fn status_without_award_detected() {
        let mut roster = Roster::dummy(&[("A", &["X"], &[])]);
        roster.card_mut(CardId(0)).unwrap().status = SwapStatus::Unclaimed;

        assert!(SwapConservation::tally(&roster).verify(&roster).is_err());
    }

    #[test]
    fn leftover_pool_fails_result_check() {
        let roster = mutual();
        let mut result = SwapResult {
            roster,
            awards: vec![],
            phases: vec![],
            leftover: vec![],
            award_root: [0; 32],
        };
        assert!(SwapConservation::verify_result(&result).is_ok());

        result.leftover.push(CardId(0));
        let err = SwapConservation::verify_result(&result).unwrap_err();
        assert!(err.to_string().starts_with("CS_ERR_600"));
    }
}
