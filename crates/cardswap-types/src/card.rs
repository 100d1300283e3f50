//! Card types for the CardSwap allocator.
//!
//! A [`Card`] is one physical, tradable unit contributed by exactly one
//! team member. Its [`CardCode`] identifies *what* it is; its [`CardId`]
//! identifies *which copy* it is.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CardId, CardswapError, MemberId, Result};

// ---------------------------------------------------------------------------
// CardCode
// ---------------------------------------------------------------------------

/// Case-normalized card identity code (e.g., `"AB01"`).
///
/// Always trimmed and uppercase, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CardCode(String);

impl CardCode {
    /// Normalize and validate a raw code.
    ///
    /// # Errors
    /// Returns [`CardswapError::EmptyCardCode`] if the code is blank.
    pub fn parse(raw: &str) -> Result<Self> {
        let normalized = raw.trim().to_uppercase();
        if normalized.is_empty() {
            return Err(CardswapError::EmptyCardCode);
        }
        Ok(Self(normalized))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardCode {
    type Err = CardswapError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CardCode {
    type Error = CardswapError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<CardCode> for String {
    fn from(code: CardCode) -> Self {
        code.0
    }
}

impl AsRef<str> for CardCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// SwapStatus
// ---------------------------------------------------------------------------

/// How a card left the pool. Set exactly once, when the card is awarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapStatus {
    /// Still on offer (not yet awarded).
    #[serde(rename = "O")]
    Offered,
    /// Awarded to a member who wanted it.
    #[serde(rename = "N")]
    Wanted,
    /// Handed back to its own contributor.
    #[serde(rename = "K")]
    Kickback,
    /// Distributed from the leftovers.
    #[serde(rename = "U")]
    Unclaimed,
}

impl SwapStatus {
    /// Single-letter tag used in reports.
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Offered => "O",
            Self::Wanted => "N",
            Self::Kickback => "K",
            Self::Unclaimed => "U",
        }
    }

    #[must_use]
    pub fn is_awarded(self) -> bool {
        self != Self::Offered
    }
}

impl fmt::Display for SwapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// One physical card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub code: CardCode,
    /// The contributor. Fixed at creation, never reassigned.
    pub owner: MemberId,
    pub status: SwapStatus,
}

impl Card {
    #[must_use]
    pub fn new(id: CardId, code: CardCode, owner: MemberId) -> Self {
        Self {
            id,
            code,
            owner,
            status: SwapStatus::Offered,
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}] from {} ({})", self.code, self.id, self.owner, self.status)
    }
}
