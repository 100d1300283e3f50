//! Error types for the CardSwap allocator.
//!
//! All errors use the `CS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Roster errors
//! - 2xx: Configuration errors
//! - 3xx: Load errors
//! - 4xx: Parse errors
//! - 6xx: Consistency errors
//! - 9xx: General / internal errors
//!
//! The allocation engine itself has no error path: a phase that cannot
//! progress records exhaustion state instead of failing.

use thiserror::Error;

use crate::{CardId, MemberId};

/// Central error enum for all CardSwap operations.
#[derive(Debug, Error)]
pub enum CardswapError {
    // =================================================================
    // Roster Errors (1xx)
    // =================================================================
    /// A member with this name is already on the roster.
    #[error("CS_ERR_100: Duplicate team member: {0}")]
    DuplicateMember(String),

    /// The member offered no cards and cannot take part.
    #[error("CS_ERR_101: Team member has no offered cards: {0}")]
    NoOfferedCards(String),

    /// The member id is not part of this roster.
    #[error("CS_ERR_102: Unknown team member: {0}")]
    UnknownMember(MemberId),

    /// The card id is not part of this roster.
    #[error("CS_ERR_103: Unknown card: {0}")]
    UnknownCard(CardId),

    /// The member name is blank.
    #[error("CS_ERR_104: Team member name is empty")]
    EmptyMemberName,

    /// The card is already in the pool.
    #[error("CS_ERR_105: Card already pooled: {0}")]
    DuplicateCard(CardId),

    // =================================================================
    // Configuration Errors (2xx)
    // =================================================================
    /// `max_award_contribution_distance` is out of range.
    #[error("CS_ERR_200: Invalid award/contribution distance {value} (minimum {min})")]
    InvalidDistance { value: usize, min: usize },

    /// Configuration error (invalid config file, missing fields, etc.).
    #[error("CS_ERR_201: Configuration error: {0}")]
    Configuration(String),

    // =================================================================
    // Load Errors (3xx)
    // =================================================================
    /// The roster file could not be read.
    #[error("CS_ERR_300: Cannot read roster {path}: {reason}")]
    RosterUnreadable { path: String, reason: String },

    /// A member list file could not be read.
    #[error("CS_ERR_301: Cannot read list {path}: {reason}")]
    ListUnreadable { path: String, reason: String },

    /// The roster loaded, but no member is left after skipping.
    #[error("CS_ERR_302: No team member has offered cards")]
    EmptyRoster,

    /// I/O error.
    #[error("CS_ERR_303: I/O error: {0}")]
    Io(String),

    // =================================================================
    // Parse Errors (4xx)
    // =================================================================
    /// A card code normalized to an empty string.
    #[error("CS_ERR_400: Card code is empty")]
    EmptyCardCode,

    // =================================================================
    // Consistency Errors (6xx)
    // =================================================================
    /// A swap invariant does not hold after allocation.
    #[error("CS_ERR_600: Swap invariant violation: {reason}")]
    SwapInvariantViolation { reason: String },

    /// Filtered awarded and given counts differ for a member.
    #[error("CS_ERR_601: Incorrect number of cards swapped for {member}: awarded {awarded}, given {given}")]
    SwapCountMismatch {
        member: String,
        awarded: usize,
        given: usize,
    },

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("CS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("CS_ERR_901: Serialization error: {0}")]
    Serialization(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, CardswapError>;

impl From<std::io::Error> for CardswapError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CardswapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
