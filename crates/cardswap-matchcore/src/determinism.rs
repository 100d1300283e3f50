//! Reproducibility fingerprint for an allocation run.
//!
//! Two runs over the same roster with the same config must produce the same
//! award log. The `award_root` is a hash over that log, so runs can be
//! compared (or a published result checked) without diffing full reports.

use cardswap_types::Award;
use sha2::{Digest, Sha256};

/// Compute the award root over an ordered award log.
///
/// Depends on, per award and in order: sequence number, card id, code,
/// contributor, recipient and phase tag.
#[must_use]
pub fn compute_award_root(awards: &[Award]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"cardswap:award_root:v1:");
    hasher.update((awards.len() as u64).to_le_bytes());

    for award in awards {
        hasher.update(award.seq.to_le_bytes());
        hasher.update(award.card.0.to_le_bytes());
        // Length prefix keeps "AB"+"1" distinct from "A"+"B1".
        let code = award.code.as_str().as_bytes();
        hasher.update((code.len() as u64).to_le_bytes());
        hasher.update(code);
        hasher.update(award.from.0.to_le_bytes());
        hasher.update(award.to.0.to_le_bytes());
        hasher.update(award.phase.status().tag().as_bytes());
    }

    let result = hasher.finalize();
    let mut root = [0u8; 32];
    root.copy_from_slice(&result);
    root
}

/// Verify that an award log hashes to the expected root.
#[must_use]
pub fn verify_award_root(awards: &[Award], expected_root: &[u8; 32]) -> bool {
    compute_award_root(awards) == *expected_root
}
