//! The three-phase allocation engine.
//!
//! The core function: takes a loaded [`Roster`] and produces a
//! [`SwapResult`]. No I/O, no report printing.
//!
//! ```text
//! allocate(Roster, SwapConfig) -> SwapResult
//! ```
//!
//! ## Phase loop
//!
//! Each phase repeats rounds while the pool is non-empty:
//!
//! 1. Select the best eligible member ([`select_candidate`]); none -> phase ends
//! 2. Look for a card for that member under the phase's policy
//! 3. Found -> award it; not found -> set the phase's exhaustion flag
//!
//! Every successful round removes one card from the pool and every failed
//! round flags one member, so a phase runs at most
//! `pool size + member count + 1` rounds.

use cardswap_types::{
    Award, CardswapError, MemberId, Phase, PhaseReport, Result, Roster, SwapConfig, SwapResult,
};

use crate::{
    code_bucket::PoolEntry, determinism::compute_award_root, pool::CardPool,
    selection::select_candidate,
};

/// Runs the WANTED → KICKBACK → UNCLAIMED phases over a roster.
#[derive(Debug, Clone)]
pub struct SwapEngine {
    config: SwapConfig,
}

impl SwapEngine {
    /// Create an engine with a validated config.
    ///
    /// # Errors
    /// Returns the config's validation error.
    pub fn new(config: SwapConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Allocate every offered card in `roster`.
    ///
    /// The phases themselves have no failure mode; errors only surface if the
    /// roster references ids it does not contain.
    pub fn run(&self, mut roster: Roster) -> Result<SwapResult> {
        let mut pool = CardPool::from_roster(&roster)?;
        let total = pool.len();
        let mut awards: Vec<Award> = Vec::with_capacity(total);
        let mut phases = Vec::with_capacity(Phase::ALL.len());

        tracing::info!(
            members = roster.len(),
            cards = total,
            codes = pool.code_count(),
            max_distance = self.config.max_award_contribution_distance,
            "Allocation starting"
        );

        for phase in Phase::ALL {
            let report = self.run_phase(phase, &mut roster, &mut pool, &mut awards)?;
            tracing::info!(
                phase = %phase,
                rounds = report.rounds,
                awarded = report.awards,
                exhausted = report.exhausted.len(),
                pool_remaining = report.pool_remaining,
                "Phase complete"
            );
            phases.push(report);
        }

        let leftover = pool.drain_remaining();
        if !leftover.is_empty() {
            tracing::warn!(
                leftover = leftover.len(),
                "Pool not exhausted: no eligible member left for remaining cards"
            );
        }

        let award_root = compute_award_root(&awards);
        tracing::info!(
            awards = awards.len(),
            leftover = leftover.len(),
            award_root = hex::encode(award_root),
            "Allocation complete"
        );

        Ok(SwapResult {
            roster,
            awards,
            phases,
            leftover,
            award_root,
        })
    }

    fn run_phase(
        &self,
        phase: Phase,
        roster: &mut Roster,
        pool: &mut CardPool,
        awards: &mut Vec<Award>,
    ) -> Result<PhaseReport> {
        let mut report = PhaseReport::new(phase);
        let round_limit = pool.len() + roster.len() + 1;

        while !pool.is_empty() {
            report.rounds += 1;
            debug_assert!(
                report.rounds <= round_limit,
                "{phase} exceeded its round bound"
            );

            let best = select_candidate(roster, phase, &self.config);
            trace_round(roster, phase, best);
            let Some(best) = best else {
                tracing::debug!(phase = %phase, pool = pool.len(), "No eligible member");
                break;
            };

            match find_match(phase, roster, pool, best)? {
                Some(entry) => {
                    let seq = awards.len() as u64;
                    let award = assign(roster, entry, best, phase, seq)?;
                    let from = &roster.member(award.from)?.name;
                    let to = &roster.member(award.to)?.name;
                    tracing::debug!(
                        phase = %phase,
                        code = %award.code,
                        from = %from,
                        to = %to,
                        "Awarded card"
                    );
                    awards.push(award);
                    report.awards += 1;
                }
                None => {
                    let member = roster.member_mut(best)?;
                    match phase {
                        Phase::Wanted => member.no_more_wanted_in_pool = true,
                        Phase::Kickback => member.no_more_own_in_pool = true,
                        Phase::Unclaimed => {
                            return Err(CardswapError::Internal(
                                "non-empty pool yielded no card".into(),
                            ));
                        }
                    }
                    tracing::debug!(
                        phase = %phase,
                        member = %member.name,
                        "Nothing left in pool for member"
                    );
                    report.exhausted.push(best);
                }
            }
        }

        report.pool_remaining = pool.len();
        Ok(report)
    }
}

/// Allocate `roster` with `config`. Convenience over [`SwapEngine`].
pub fn allocate(roster: Roster, config: &SwapConfig) -> Result<SwapResult> {
    SwapEngine::new(config.clone())?.run(roster)
}

/// Take a card for `member` out of the pool under `phase`'s policy.
///
/// - WANTED: the first wanted code present in the pool, first copy.
/// - KICKBACK: the first pooled card the member contributed.
/// - UNCLAIMED: the first copy of the first pooled code.
fn find_match(
    phase: Phase,
    roster: &Roster,
    pool: &mut CardPool,
    member: MemberId,
) -> Result<Option<PoolEntry>> {
    let entry = match phase {
        Phase::Wanted => roster
            .member(member)?
            .wanted
            .iter()
            .find_map(|code| pool.take_any(code)),
        Phase::Kickback => pool
            .first_owned_by(member)
            .and_then(|e| pool.remove(e.card)),
        Phase::Unclaimed => pool.first_any().and_then(|e| pool.remove(e.card)),
    };
    Ok(entry)
}

/// Hand `entry` to `recipient` and credit its owner.
fn assign(
    roster: &mut Roster,
    entry: PoolEntry,
    recipient: MemberId,
    phase: Phase,
    seq: u64,
) -> Result<Award> {
    let card = roster.card_mut(entry.card)?;
    if card.status.is_awarded() {
        return Err(CardswapError::SwapInvariantViolation {
            reason: format!("{} awarded twice", card.id),
        });
    }
    card.status = phase.status();
    let code = card.code.clone();

    let to = roster.member_mut(recipient)?;
    to.awarded.push(entry.card);
    // Keep the wish list consistent in every phase.
    to.wanted.retain(|c| *c != code);

    roster.member_mut(entry.owner)?.given.push(entry.card);

    Ok(Award {
        seq,
        card: entry.card,
        code,
        from: entry.owner,
        to: recipient,
        phase,
    })
}

/// Per-round status lines: given, awarded, both scores, phase marker.
fn trace_round(roster: &Roster, phase: Phase, selected: Option<MemberId>) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    let selected_name = selected
        .and_then(|id| roster.member(id).ok())
        .map_or("none", |m| m.name.as_str());
    tracing::trace!(phase = %phase, selected = selected_name, "Selected team member");
    for member in roster.members() {
        let marker = if phase.is_exhausted(member) {
            "exhausted"
        } else {
            phase.status().tag()
        };
        tracing::trace!(
            marker,
            member = %member.name,
            given = member.given.len(),
            awarded = member.awarded.len(),
            wanted_score = Phase::Wanted.score(member),
            offered_score = Phase::Unclaimed.score(member),
            score = phase.score(member),
            "stat"
        );
    }
}

#[cfg(test)]
mod tests {
    use cardswap_types::*;

    use super::*;

    fn run(roster: Roster) -> SwapResult {
        allocate(roster, &SwapConfig::default()).unwrap()
    }

    fn name_of(result: &SwapResult, id: MemberId) -> &str {
        &result.roster.member(id).unwrap().name
    }

    #[test]
    fn invalid_config_rejected() {
        let err = SwapEngine::new(SwapConfig::default().with_distance(0)).unwrap_err();
        assert!(matches!(err, CardswapError::InvalidDistance { .. }));
    }

    #[test]
    fn empty_roster_produces_no_awards() {
        let result = run(Roster::new());
        assert!(result.awards.is_empty());
        assert!(result.is_fully_allocated());
        assert_eq!(result.phases.len(), 3);
        assert!(result.phases.iter().all(|p| p.rounds == 0));
    }

    #[test]
    fn mutual_wants_swap_in_wanted_phase() {
        let result = run(Roster::dummy(&[
            ("a", &["x"], &["y"]),
            ("b", &["y"], &["x"]),
        ]));

        assert_eq!(result.awards.len(), 2);
        assert!(result.awards.iter().all(|a| a.phase == Phase::Wanted));
        assert_eq!(result.awards_in(Phase::Kickback).count(), 0);
        assert_eq!(result.awards_in(Phase::Unclaimed).count(), 0);

        let a = result.roster.member_by_name("a").unwrap();
        let card = result.roster.card(a.awarded[0]).unwrap();
        assert_eq!(card.code.as_str(), "Y");
        assert_eq!(card.status, SwapStatus::Wanted);
        assert!(a.wanted.is_empty());
    }

    #[test]
    fn unwanted_card_kicks_back_to_owner() {
        let result = run(Roster::dummy(&[("c", &["z"], &[])]));
        assert_eq!(result.awards.len(), 1);
        let award = &result.awards[0];
        assert_eq!(award.phase, Phase::Kickback);
        assert!(award.is_self_award());
        assert_eq!(
            result.roster.card(award.card).unwrap().status,
            SwapStatus::Kickback
        );
        let wanted = result.phase_report(Phase::Wanted).unwrap();
        assert_eq!(wanted.awards, 0);
        assert_eq!(wanted.exhausted, vec![MemberId(0)]);
    }

    #[test]
    fn distance_gate_limits_wanted_awards() {
        let result = run(Roster::dummy(&[
            ("d", &["q"], &["x", "y", "z"]),
            ("e", &["x", "y", "z"], &[]),
        ]));
        let d = result.roster.member_by_name("d").unwrap();
        let wanted_for_d = result
            .awards_in(Phase::Wanted)
            .filter(|a| a.to == d.id)
            .count();
        assert_eq!(wanted_for_d, 1);
        assert_eq!(d.awarded.len(), 1, "d offered only one card");
    }

    #[test]
    fn first_copy_taken_second_left_for_later() {
        let result = run(Roster::dummy(&[
            ("a", &["x"], &[]),
            ("b", &["x"], &[]),
            ("c", &["w"], &["x"]),
        ]));
        let first = result
            .awards
            .iter()
            .find(|a| a.phase == Phase::Wanted && name_of(&result, a.to) == "c")
            .unwrap();
        assert_eq!(first.card, CardId(0), "a's copy is encountered first");
        assert_eq!(name_of(&result, first.from), "a");

        let b_copy = result.awards.iter().find(|a| a.card == CardId(1)).unwrap();
        assert_ne!(b_copy.phase, Phase::Wanted);
    }

    #[test]
    fn wanted_entries_removed_in_any_phase() {
        // b lists "x" twice; a single award of "x" clears both entries.
        let result = run(Roster::dummy(&[
            ("a", &["x"], &[]),
            ("b", &["y"], &["x", "x"]),
        ]));
        let b = result.roster.member_by_name("b").unwrap();
        assert!(b.wanted.is_empty());
    }

    #[test]
    fn every_card_awarded_once_and_capacity_respected() {
        let result = run(Roster::dummy(&[
            ("a", &["p", "q", "r"], &["s", "t"]),
            ("b", &["s"], &["p", "q"]),
            ("c", &["t", "u"], &["r", "p"]),
        ]));
        assert!(result.is_fully_allocated());
        assert_eq!(result.awards.len(), result.roster.card_count());

        let mut seen: Vec<CardId> = result.awards.iter().map(|a| a.card).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), result.roster.card_count());

        for m in result.roster.members() {
            assert!(m.awarded.len() <= m.offered.len(), "{m}");
            assert_eq!(m.given.len(), m.offered.len(), "{m}");
        }
        assert!(
            result
                .roster
                .cards()
                .iter()
                .all(|c| c.status.is_awarded())
        );
    }

    #[test]
    fn award_root_matches_log() {
        let result = run(Roster::dummy(&[
            ("a", &["x"], &["y"]),
            ("b", &["y"], &["x"]),
        ]));
        assert!(crate::verify_award_root(&result.awards, &result.award_root));
    }

    #[test]
    fn award_seq_is_dense() {
        let result = run(Roster::dummy(&[
            ("a", &["x", "y"], &["z"]),
            ("b", &["z"], &[]),
        ]));
        let seqs: Vec<u64> = result.awards.iter().map(|a| a.seq).collect();
        let expected: Vec<u64> = (0..result.awards.len() as u64).collect();
        assert_eq!(seqs, expected);
    }
}
