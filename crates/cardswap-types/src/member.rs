//! Team member records.
//!
//! A [`TeamMember`] is a plain aggregate of owned sequences. Nothing in this
//! crate mutates the allocation state (`wanted`, `awarded`, `given`, the
//! exhaustion flags); only the allocation engine does.

use serde::{Deserialize, Serialize};

use crate::{CardCode, CardId, MemberId};

/// One participant of a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    /// Unique within a roster.
    pub name: String,
    /// Cards this member brought in. Never changes after load.
    pub offered: Vec<CardId>,
    /// Codes this member still wants. Entries are removed as soon as a card
    /// with that code is awarded to this member.
    pub wanted: Vec<CardCode>,
    /// Cards received, in award order.
    pub awarded: Vec<CardId>,
    /// Cards contributed by this member that were awarded to anyone
    /// (including this member itself), in award order.
    pub given: Vec<CardId>,
    /// Set during the Wanted phase once none of `wanted` is left in the pool.
    pub no_more_wanted_in_pool: bool,
    /// Set during the Kickback phase once none of `offered` is left in the pool.
    pub no_more_own_in_pool: bool,
}

impl TeamMember {
    #[must_use]
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            offered: Vec::new(),
            wanted: Vec::new(),
            awarded: Vec::new(),
            given: Vec::new(),
            no_more_wanted_in_pool: false,
            no_more_own_in_pool: false,
        }
    }

    #[must_use]
    pub fn offered_count(&self) -> usize {
        self.offered.len()
    }

    #[must_use]
    pub fn awarded_count(&self) -> usize {
        self.awarded.len()
    }

    #[must_use]
    pub fn given_count(&self) -> usize {
        self.given.len()
    }

    /// `true` once the member has received as many cards as it contributed.
    #[must_use]
    pub fn is_saturated(&self) -> bool {
        self.awarded.len() >= self.offered.len()
    }

    /// How many more cards this member may still receive.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.offered.len().saturating_sub(self.awarded.len())
    }

    #[must_use]
    pub fn wants(&self, code: &CardCode) -> bool {
        self.wanted.contains(code)
    }
}

impl std::fmt::Display for TeamMember {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (offered={}, awarded={}, given={}, wanted={})",
            self.name,
            self.offered.len(),
            self.awarded.len(),
            self.given.len(),
            self.wanted.len(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_with(offered: u32, awarded: u32) -> TeamMember {
        let mut m = TeamMember::new(MemberId(0), "alice");
        m.offered = (0..offered).map(CardId).collect();
        m.awarded = (100..100 + awarded).map(CardId).collect();
        m
    }

    #[test]
    fn new_member_is_empty() {
        let m = TeamMember::new(MemberId(3), "bob");
        assert_eq!(m.name, "bob");
        assert_eq!(m.offered_count(), 0);
        assert!(!m.no_more_wanted_in_pool);
        assert!(!m.no_more_own_in_pool);
    }

    #[test]
    fn saturation_and_capacity() {
        let m = member_with(3, 1);
        assert!(!m.is_saturated());
        assert_eq!(m.remaining_capacity(), 2);

        let full = member_with(2, 2);
        assert!(full.is_saturated());
        assert_eq!(full.remaining_capacity(), 0);
    }

    #[test]
    fn wants_checks_codes() {
        let mut m = TeamMember::new(MemberId(0), "carol");
        m.wanted.push(CardCode::parse("x1").unwrap());
        assert!(m.wants(&CardCode::parse("X1").unwrap()));
        assert!(!m.wants(&CardCode::parse("X2").unwrap()));
    }

    #[test]
    fn display_shows_counts() {
        let m = member_with(3, 1);
        let s = m.to_string();
        assert!(s.contains("alice"));
        assert!(s.contains("offered=3"));
        assert!(s.contains("awarded=1"));
    }
}
