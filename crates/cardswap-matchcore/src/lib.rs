//! # cardswap-matchcore
//!
//! **Pure deterministic allocation engine for CardSwap.**
//!
//! MatchCore takes a loaded [`Roster`](cardswap_types::Roster) and hands
//! every offered card back out to the members. It has:
//!
//! - **Zero I/O**: no file access, no report printing
//! - **Deterministic output**: same roster + config -> same award log
//! - **Fairness gates**: members cannot receive more than they brought, and
//!   cannot pull wanted cards too far ahead of what they give back
//! - **No error path**: a stalled phase records exhaustion, never fails
//!
//! ```text
//! allocate(Roster, SwapConfig) -> SwapResult
//!     WANTED    -> wish lists, scored by given - awarded
//!     KICKBACK  -> own cards back, scored by offered - awarded
//!     UNCLAIMED -> drain the rest, scored by offered - awarded
//! ```

pub mod code_bucket;
pub mod determinism;
pub mod engine;
pub mod pool;
pub mod selection;

pub use code_bucket::{CodeBucket, PoolEntry};
pub use determinism::{compute_award_root, verify_award_root};
pub use engine::{SwapEngine, allocate};
pub use pool::CardPool;
pub use selection::select_candidate;
