//! Allocation phases.
//!
//! Every swap runs three phases in a fixed order, sharing one pool:
//! **WANTED → KICKBACK → UNCLAIMED**
//!
//! During WANTED, members receive cards from their wish lists.
//! During KICKBACK, members get their own unclaimed cards back.
//! During UNCLAIMED, whatever is left is handed out to fill remaining slots.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{SwapConfig, SwapStatus, TeamMember};

/// The three allocation phases, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Phase {
    /// Match wanted codes against the pool.
    Wanted,
    /// Return members' own cards to them.
    Kickback,
    /// Drain the pool into remaining capacity.
    Unclaimed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wanted => write!(f, "WANTED"),
            Self::Kickback => write!(f, "KICKBACK"),
            Self::Unclaimed => write!(f, "UNCLAIMED"),
        }
    }
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 3] = [Phase::Wanted, Phase::Kickback, Phase::Unclaimed];

    /// Status stamped on cards awarded during this phase.
    #[must_use]
    pub fn status(self) -> SwapStatus {
        match self {
            Self::Wanted => SwapStatus::Wanted,
            Self::Kickback => SwapStatus::Kickback,
            Self::Unclaimed => SwapStatus::Unclaimed,
        }
    }

    /// Return the phase that runs after this one, or `None` after UNCLAIMED.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Wanted => Some(Self::Kickback),
            Self::Kickback => Some(Self::Unclaimed),
            Self::Unclaimed => None,
        }
    }

    /// Selection priority of `member` in this phase. Higher wins.
    ///
    /// - WANTED: `given - awarded` (credit for cards already put back into
    ///   circulation).
    /// - otherwise: `offered - awarded` (unused contribution).
    #[must_use]
    pub fn score(self, member: &TeamMember) -> i64 {
        let awarded = count(member.awarded.len());
        match self {
            Self::Wanted => count(member.given.len()) - awarded,
            Self::Kickback | Self::Unclaimed => count(member.offered.len()) - awarded,
        }
    }

    /// Whether `member` may be selected at all in this phase.
    #[must_use]
    pub fn is_eligible(self, member: &TeamMember, config: &SwapConfig) -> bool {
        if member.is_saturated() {
            return false;
        }
        match self {
            Self::Wanted => {
                let lead = count(member.awarded.len()) - count(member.given.len());
                !member.no_more_wanted_in_pool
                    && lead < count(config.max_award_contribution_distance)
            }
            Self::Kickback => !member.no_more_own_in_pool,
            Self::Unclaimed => true,
        }
    }

    /// Whether this phase's exhaustion flag is already set on `member`.
    #[must_use]
    pub fn is_exhausted(self, member: &TeamMember) -> bool {
        match self {
            Self::Wanted => member.no_more_wanted_in_pool,
            Self::Kickback => member.no_more_own_in_pool,
            Self::Unclaimed => false,
        }
    }
}

fn count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
