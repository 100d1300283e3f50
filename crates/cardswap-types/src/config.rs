//! Configuration for a swap run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{CardswapError, Result, constants};

/// Tunables for one allocation run plus the team-directory layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Maximum allowed `awarded - given` for a member to still be selected in
    /// the WANTED phase. Must be at least 1.
    pub max_award_contribution_distance: usize,
    /// Roster file name inside the team directory.
    pub roster_file: String,
    /// Suffix appended to a member name to find its offered list.
    pub offered_suffix: String,
    /// Suffix appended to a member name to find its wanted list.
    pub wanted_suffix: String,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            max_award_contribution_distance: constants::DEFAULT_MAX_AWARD_CONTRIBUTION_DISTANCE,
            roster_file: constants::DEFAULT_ROSTER_FILE.to_string(),
            offered_suffix: constants::DEFAULT_OFFERED_SUFFIX.to_string(),
            wanted_suffix: constants::DEFAULT_WANTED_SUFFIX.to_string(),
        }
    }
}

impl SwapConfig {
    /// Check that every field holds a usable value.
    ///
    /// # Errors
    /// - `InvalidDistance` if the distance is below the minimum
    /// - `Configuration` if a file name or suffix is empty
    pub fn validate(&self) -> Result<()> {
        if self.max_award_contribution_distance < constants::MIN_AWARD_CONTRIBUTION_DISTANCE {
            return Err(CardswapError::InvalidDistance {
                value: self.max_award_contribution_distance,
                min: constants::MIN_AWARD_CONTRIBUTION_DISTANCE,
            });
        }
        if self.roster_file.trim().is_empty() {
            return Err(CardswapError::Configuration("roster_file is empty".into()));
        }
        if self.offered_suffix.is_empty() || self.wanted_suffix.is_empty() {
            return Err(CardswapError::Configuration(
                "list suffixes must not be empty".into(),
            ));
        }
        if self.offered_suffix == self.wanted_suffix {
            return Err(CardswapError::Configuration(
                "offered and wanted suffixes must differ".into(),
            ));
        }
        Ok(())
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(source).map_err(|e| CardswapError::Configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            CardswapError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&source)
    }

    /// Return a copy with a different distance.
    #[must_use]
    pub fn with_distance(mut self, distance: usize) -> Self {
        self.max_award_contribution_distance = distance;
        self
    }

    /// File name of `member`'s offered list.
    #[must_use]
    pub fn offered_file(&self, member: &str) -> String {
        format!("{member}{}", self.offered_suffix)
    }

    /// File name of `member`'s wanted list.
    #[must_use]
    pub fn wanted_file(&self, member: &str) -> String {
        format!("{member}{}", self.wanted_suffix)
    }
}
