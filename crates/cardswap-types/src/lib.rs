//! # cardswap-types
//!
//! Shared types, errors, and configuration for the **CardSwap** allocator.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MemberId`], [`CardId`]
//! - **Card model**: [`Card`], [`CardCode`], [`SwapStatus`]
//! - **Member model**: [`TeamMember`], [`Roster`]
//! - **Phase model**: [`Phase`]
//! - **Allocation output**: [`Award`], [`PhaseReport`], [`SwapResult`]
//! - **Configuration**: [`SwapConfig`]
//! - **Errors**: [`CardswapError`] with `CS_ERR_` prefix codes
//! - **Constants**: defaults and file-layout names

pub mod award;
pub mod card;
pub mod config;
pub mod constants;
pub mod error;
pub mod ids;
pub mod member;
pub mod phase;
pub mod roster;

// Re-export all primary types at crate root for ergonomic imports:
//   use cardswap_types::{Card, CardCode, Roster, Phase, ...};

pub use award::*;
pub use card::*;
pub use config::*;
pub use error::*;
pub use ids::*;
pub use member::*;
pub use phase::*;
pub use roster::*;

// Constants are accessed via `cardswap_types::constants::FOO`
// (not re-exported to avoid name collisions).
