//! All pooled copies of a single card code.
//!
//! Copies are stored in the order they were pooled (FIFO) using a
//! [`VecDeque`].

use std::collections::VecDeque;

use cardswap_types::{CardCode, CardId, MemberId};

/// A pooled card plus the member who contributed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolEntry {
    pub card: CardId,
    pub owner: MemberId,
}

/// Every not-yet-awarded copy of one code.
///
/// The front of the deque is the first copy encountered while scanning the
/// roster and is the one handed out by code lookups.
#[derive(Debug, Clone)]
pub struct CodeBucket {
    /// The code shared by every entry.
    pub code: CardCode,
    /// Copies in pooling order (front = first encountered).
    pub entries: VecDeque<PoolEntry>,
}

impl CodeBucket {
    /// Create a new empty bucket.
    #[must_use]
    pub fn new(code: CardCode) -> Self {
        Self {
            code,
            entries: VecDeque::new(),
        }
    }

    /// Add a copy to the back of this bucket.
    pub fn push_back(&mut self, entry: PoolEntry) {
        self.entries.push_back(entry);
    }

    /// Remove and return the first copy.
    pub fn pop_front(&mut self) -> Option<PoolEntry> {
        self.entries.pop_front()
    }

    /// Peek at the first copy without removing it.
    #[must_use]
    pub fn front(&self) -> Option<&PoolEntry> {
        self.entries.front()
    }

    /// First copy contributed by `owner`.
    #[must_use]
    pub fn first_owned_by(&self, owner: MemberId) -> Option<&PoolEntry> {
        self.entries.iter().find(|e| e.owner == owner)
    }

    /// Remove a specific copy by card id.
    pub fn remove_card(&mut self, card: CardId) -> Option<PoolEntry> {
        let pos = self.entries.iter().position(|e| e.card == card)?;
        self.entries.remove(pos)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
