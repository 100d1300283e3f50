//! Report assembly and rendering.

use std::io::Write;

use cardswap_types::{CardswapError, PhaseReport, Result, SwapResult, constants};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    awards::{AwardLine, awards_summary},
    exchange::{ExchangeRow, SwapMismatch, exchange_summary},
};

pub const AWARDS_HEADER: &str = "Awards summary (Origin/CardCode/Destination/SwapType):";
pub const EXCHANGE_HEADER: &str =
    "Exchange summary (Team-member/GiveCardCode/ReceiveCardCode/SwapType):";

/// Everything a run produced, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct SwapReport {
    pub engine: String,
    pub version: String,
    pub generated_at: DateTime<Utc>,
    /// Hex SHA-256 over the assignment log.
    pub award_root: String,
    pub members: usize,
    pub cards: usize,
    pub phases: Vec<PhaseReport>,
    pub awards: Vec<AwardLine>,
    pub exchange: Vec<ExchangeRow>,
    pub mismatches: Vec<SwapMismatch>,
}

impl SwapReport {
    /// Build both summaries from a finished run.
    ///
    /// # Errors
    /// Propagates roster lookup failures from the summaries.
    pub fn build(result: &SwapResult) -> Result<Self> {
        let awards = awards_summary(&result.roster)?;
        let exchange = exchange_summary(&result.roster)?;

        tracing::info!(
            awards = awards.len(),
            exchange_rows = exchange.rows.len(),
            mismatches = exchange.mismatches.len(),
            root = %result.award_root_hex(),
            "Swap report built"
        );

        Ok(Self {
            engine: constants::ENGINE_NAME.to_string(),
            version: constants::VERSION.to_string(),
            generated_at: Utc::now(),
            award_root: result.award_root_hex(),
            members: result.roster.len(),
            cards: result.roster.card_count(),
            phases: result.phases.clone(),
            awards,
            exchange: exchange.rows,
            mismatches: exchange.mismatches,
        })
    }

    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Tab-separated text: the awards summary, then the exchange summary.
    ///
    /// Mismatched members are not part of the text; they were logged when
    /// the report was built.
    pub fn write_text<W: Write>(&self, mut out: W) -> Result<()> {
        writeln!(out, "{AWARDS_HEADER}")?;
        for line in &self.awards {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        writeln!(out)?;
        writeln!(out, "{EXCHANGE_HEADER}")?;
        for row in &self.exchange {
            writeln!(out, "{row}")?;
        }
        out.flush()?;
        Ok(())
    }

    pub fn write_json<W: Write>(&self, mut out: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut out, self)?;
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }

    pub fn to_text(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_text(&mut buf)?;
        String::from_utf8(buf).map_err(|e| CardswapError::Internal(e.to_string()))
    }
}
