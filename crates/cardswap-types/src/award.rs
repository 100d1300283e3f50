//! Allocation output types.
//!
//! The engine produces a [`SwapResult`]: the final roster state, the ordered
//! log of every [`Award`], one [`PhaseReport`] per phase, and a hash over the
//! log that fingerprints the run.

use serde::{Deserialize, Serialize};

use crate::{CardCode, CardId, MemberId, Phase, Roster};

/// One card handed from its owner to a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Award {
    /// Position in the assignment log (0-based, across all phases).
    pub seq: u64,
    pub card: CardId,
    pub code: CardCode,
    /// Owner of the card (the contributor).
    pub from: MemberId,
    /// Recipient.
    pub to: MemberId,
    pub phase: Phase,
}

impl Award {
    /// `true` if the card went back to its own contributor.
    #[must_use]
    pub fn is_self_award(&self) -> bool {
        self.from == self.to
    }
}

impl std::fmt::Display for Award {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Award[{}] {} {} -> {} ({})",
            self.seq,
            self.code,
            self.from,
            self.to,
            self.phase.status(),
        )
    }
}

/// Per-phase bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseReport {
    pub phase: Phase,
    /// Selection rounds run (successful or not).
    pub rounds: usize,
    /// Cards awarded during this phase.
    pub awards: usize,
    /// Members whose exhaustion flag was set during this phase, in order.
    pub exhausted: Vec<MemberId>,
    /// Cards still pooled when the phase ended.
    pub pool_remaining: usize,
}

impl PhaseReport {
    #[must_use]
    pub fn new(phase: Phase) -> Self {
        Self {
            phase,
            rounds: 0,
            awards: 0,
            exhausted: Vec::new(),
            pool_remaining: 0,
        }
    }
}

/// The structured outcome of one allocation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapResult {
    /// Final state of every member and card.
    pub roster: Roster,
    /// Every award in the order it was made.
    pub awards: Vec<Award>,
    /// One report per phase, in execution order.
    pub phases: Vec<PhaseReport>,
    /// Cards never awarded (empty unless a phase stalled).
    pub leftover: Vec<CardId>,
    /// SHA-256 over the assignment log.
    pub award_root: [u8; 32],
}

impl SwapResult {
    /// Awards made during `phase`, in order.
    pub fn awards_in(&self, phase: Phase) -> impl Iterator<Item = &Award> {
        self.awards.iter().filter(move |a| a.phase == phase)
    }

    /// The report for `phase`, if that phase ran.
    #[must_use]
    pub fn phase_report(&self, phase: Phase) -> Option<&PhaseReport> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// `true` if every offered card found a recipient.
    #[must_use]
    pub fn is_fully_allocated(&self) -> bool {
        self.leftover.is_empty()
    }

    /// Hex form of [`award_root`](Self::award_root).
    #[must_use]
    pub fn award_root_hex(&self) -> String {
        hex::encode(self.award_root)
    }
}
