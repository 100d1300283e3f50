//! The pool of not-yet-awarded cards.
//!
//! Uses `BTreeMap<CardCode, CodeBucket>` so that scans over the whole pool
//! (KICKBACK, UNCLAIMED) visit codes in a fixed order on every run. Within a
//! bucket, copies keep the order in which the roster was scanned.
//!
//! An auxiliary `HashMap<CardId, CardCode>` enables removal by card id
//! without scanning every bucket.
//!
//! Invariant: a card is pooled iff it has not been awarded, and a code is a
//! key iff its bucket is non-empty.

use std::collections::{BTreeMap, HashMap};

use cardswap_types::{Card, CardCode, CardId, CardswapError, MemberId, Result, Roster};

use crate::code_bucket::{CodeBucket, PoolEntry};

/// Index of pooled cards, grouped by code.
#[derive(Debug, Default)]
pub struct CardPool {
    buckets: BTreeMap<CardCode, CodeBucket>,
    /// Fast lookup: `CardId -> code` for removal by reference.
    index: HashMap<CardId, CardCode>,
}

impl CardPool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool every offered card, scanning members in roster order and each
    /// member's offered list in order.
    ///
    /// # Errors
    /// Returns `UnknownCard` if a member references a card the roster lacks.
    pub fn from_roster(roster: &Roster) -> Result<Self> {
        let mut pool = Self::new();
        for member in roster.members() {
            for card_id in &member.offered {
                let card = roster.card(*card_id)?;
                if card.status.is_awarded() {
                    continue;
                }
                pool.insert(card)?;
            }
        }
        Ok(pool)
    }

    // =================================================================
    // Insertion
    // =================================================================

    /// Append a card to the bucket for its code, creating the bucket if
    /// absent.
    pub fn insert(&mut self, card: &Card) -> Result<()> {
        if self.index.contains_key(&card.id) {
            return Err(CardswapError::DuplicateCard(card.id));
        }
        self.index.insert(card.id, card.code.clone());
        self.buckets
            .entry(card.code.clone())
            .or_insert_with(|| CodeBucket::new(card.code.clone()))
            .push_back(PoolEntry {
                card: card.id,
                owner: card.owner,
            });
        Ok(())
    }

    // =================================================================
    // Removal
    // =================================================================

    /// Remove and return the first pooled copy of `code`.
    pub fn take_any(&mut self, code: &CardCode) -> Option<PoolEntry> {
        let bucket = self.buckets.get_mut(code)?;
        let entry = bucket.pop_front()?;
        if bucket.is_empty() {
            self.buckets.remove(code);
        }
        self.index.remove(&entry.card);
        Some(entry)
    }

    /// Remove a specific card, wherever it sits in its bucket.
    pub fn remove(&mut self, card: CardId) -> Option<PoolEntry> {
        let code = self.index.remove(&card)?;
        let bucket = self.buckets.get_mut(&code)?;
        let entry = bucket.remove_card(card);
        if bucket.is_empty() {
            self.buckets.remove(&code);
        }
        entry
    }

    /// Remove every remaining card and return their ids in pool order.
    pub fn drain_remaining(&mut self) -> Vec<CardId> {
        self.index.clear();
        let buckets = std::mem::take(&mut self.buckets);
        buckets
            .into_values()
            .flat_map(|b| b.entries.into_iter().map(|e| e.card))
            .collect()
    }

    // =================================================================
    // Queries
    // =================================================================

    /// `true` if at least one copy of `code` is pooled.
    #[must_use]
    pub fn contains_code(&self, code: &CardCode) -> bool {
        self.buckets.contains_key(code)
    }

    /// `true` if `card` is still pooled.
    #[must_use]
    pub fn contains_card(&self, card: CardId) -> bool {
        self.index.contains_key(&card)
    }

    /// First pooled card contributed by `owner`, scanning codes in pool order
    /// and each bucket front to back.
    #[must_use]
    pub fn first_owned_by(&self, owner: MemberId) -> Option<PoolEntry> {
        self.buckets
            .values()
            .find_map(|b| b.first_owned_by(owner))
            .copied()
    }

    /// First copy of the first code in pool order.
    #[must_use]
    pub fn first_any(&self) -> Option<PoolEntry> {
        self.buckets.values().find_map(CodeBucket::front).copied()
    }

    /// Number of pooled cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Number of distinct pooled codes.
    #[must_use]
    pub fn code_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `true` once every card has been awarded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate buckets in pool order.
    pub fn buckets(&self) -> impl Iterator<Item = &CodeBucket> {
        self.buckets.values()
    }
}
