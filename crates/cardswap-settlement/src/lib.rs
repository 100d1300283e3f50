//! # cardswap-settlement
//!
//! **Settlement**: everything that happens after the engine has handed out
//! the last card.
//!
//! ## Pipeline
//!
//! The settlement side receives a [`SwapResult`](cardswap_types::SwapResult)
//! and:
//! 1. Checks swap conservation (every card awarded once, nobody over-awarded,
//!    pool drained)
//! 2. Builds the awards summary (who received which card from whom)
//! 3. Builds the exchange summary (what each member gives and receives)
//! 4. Renders both as tab-separated text or JSON
//!
//! Kickback awards (a card going back to its own contributor) are not real
//! exchanges and are left out of both summaries.

pub mod awards;
pub mod conservation;
pub mod exchange;
pub mod render;

pub use awards::{AwardLine, awards_summary};
pub use conservation::SwapConservation;
pub use exchange::{ExchangeRow, ExchangeSummary, SwapMismatch, exchange_summary};
pub use render::SwapReport;
