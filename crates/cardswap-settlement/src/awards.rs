//! Awards summary: one line per card that changed hands.

use cardswap_types::{CardCode, Result, Roster, SwapStatus};
use serde::Serialize;

/// A card handed from its contributor to a recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardLine {
    /// Name of the contributor.
    pub origin: String,
    pub code: CardCode,
    /// Name of the recipient.
    pub destination: String,
    pub status: SwapStatus,
}

impl std::fmt::Display for AwardLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.origin, self.code, self.destination, self.status
        )
    }
}

/// Every non-kickback award, grouped by recipient in roster order.
///
/// # Errors
/// Returns `UnknownCard` / `UnknownMember` if the roster references ids it
/// does not own.
pub fn awards_summary(roster: &Roster) -> Result<Vec<AwardLine>> {
    let mut lines = Vec::new();
    for member in roster.members() {
        for id in &member.awarded {
            let card = roster.card(*id)?;
            if card.status == SwapStatus::Kickback {
                continue;
            }
            lines.push(AwardLine {
                origin: roster.member(card.owner)?.name.clone(),
                code: card.code.clone(),
                destination: member.name.clone(),
                status: card.status,
            });
        }
    }
    Ok(lines)
}
