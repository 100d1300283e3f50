//! The roster: arena of team members and the cards they contributed.
//!
//! Members and cards reference each other by id ([`MemberId`], [`CardId`]),
//! never by pointer. Ids are dense and assigned in load order, so iteration
//! order over the roster is the order in which members were added.

use serde::{Deserialize, Serialize};

use crate::{Card, CardCode, CardId, CardswapError, MemberId, Result, TeamMember};

/// All members of a swap and every card they offered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    members: Vec<TeamMember>,
    cards: Vec<Card>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member with its offered cards and wanted codes.
    ///
    /// One [`Card`] is created per offered code, in order.
    ///
    /// # Errors
    /// - `EmptyMemberName` if `name` is blank
    /// - `DuplicateMember` if a member with this name exists
    /// - `NoOfferedCards` if `offered` is empty
    pub fn add_member(
        &mut self,
        name: &str,
        offered: Vec<CardCode>,
        wanted: Vec<CardCode>,
    ) -> Result<MemberId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CardswapError::EmptyMemberName);
        }
        if self.member_by_name(name).is_some() {
            return Err(CardswapError::DuplicateMember(name.to_string()));
        }
        if offered.is_empty() {
            return Err(CardswapError::NoOfferedCards(name.to_string()));
        }

        let member_id = MemberId(next_id(self.members.len())?);
        let mut member = TeamMember::new(member_id, name);
        for code in offered {
            let card_id = CardId(next_id(self.cards.len())?);
            self.cards.push(Card::new(card_id, code, member_id));
            member.offered.push(card_id);
        }
        member.wanted = wanted;
        self.members.push(member);
        Ok(member_id)
    }

    // =================================================================
    // Queries
    // =================================================================

    /// Members in roster order.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// Cards in creation order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn member(&self, id: MemberId) -> Result<&TeamMember> {
        self.members
            .get(id.index())
            .ok_or(CardswapError::UnknownMember(id))
    }

    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.cards
            .get(id.index())
            .ok_or(CardswapError::UnknownCard(id))
    }

    #[must_use]
    pub fn member_by_name(&self, name: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.name == name)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the roster has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Total number of cards offered by all members.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    // =================================================================
    // Mutation (allocation engine only)
    // =================================================================

    pub fn member_mut(&mut self, id: MemberId) -> Result<&mut TeamMember> {
        self.members
            .get_mut(id.index())
            .ok_or(CardswapError::UnknownMember(id))
    }

    pub fn card_mut(&mut self, id: CardId) -> Result<&mut Card> {
        self.cards
            .get_mut(id.index())
            .ok_or(CardswapError::UnknownCard(id))
    }
}

fn next_id(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| CardswapError::Internal("roster id space exhausted".into()))
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Roster {
    /// Build a roster from `(name, offered, wanted)` triples of raw codes.
    ///
    /// # Panics
    /// Panics on any invalid entry.
    pub fn dummy(entries: &[(&str, &[&str], &[&str])]) -> Self {
        let mut roster = Self::new();
        for (name, offered, wanted) in entries {
            roster
                .add_member(name, dummy_codes(offered), dummy_codes(wanted))
                .expect("dummy roster entry must be valid");
        }
        roster
    }
}

/// Parse raw codes for tests.
///
/// # Panics
/// Panics if any code is blank.
#[cfg(any(test, feature = "test-helpers"))]
pub fn dummy_codes(raw: &[&str]) -> Vec<CardCode> {
    raw.iter()
        .map(|c| CardCode::parse(c).expect("dummy code must not be blank"))
        .collect()
}
