//! Per-round candidate selection.
//!
//! One linear scan over the roster picks the member that receives the next
//! card. Precedence when comparing a member against the current best:
//!
//! 1. higher phase score
//! 2. on equal score, fewer cards awarded so far
//! 3. on equal score and awarded count, more cards offered
//!
//! A full tie keeps the member encountered first. Members failing the
//! phase's eligibility gates are skipped before any comparison.

use std::cmp::Ordering;

use cardswap_types::{MemberId, Phase, Roster, SwapConfig, TeamMember};

/// Pick the member that should receive a card in this round of `phase`.
///
/// Returns `None` when no member is eligible.
#[must_use]
pub fn select_candidate(roster: &Roster, phase: Phase, config: &SwapConfig) -> Option<MemberId> {
    let mut best: Option<&TeamMember> = None;
    for member in roster.members() {
        if !phase.is_eligible(member, config) {
            continue;
        }
        let replaces = match best {
            None => true,
            Some(current) => compare(member, current, phase) == Ordering::Greater,
        };
        if replaces {
            best = Some(member);
        }
    }
    best.map(|m| m.id)
}

/// Priority of `a` relative to `b` in `phase`. `Greater` means `a` goes first.
fn compare(a: &TeamMember, b: &TeamMember, phase: Phase) -> Ordering {
    phase
        .score(a)
        .cmp(&phase.score(b))
        .then_with(|| b.awarded.len().cmp(&a.awarded.len()))
        .then_with(|| a.offered.len().cmp(&b.offered.len()))
}
