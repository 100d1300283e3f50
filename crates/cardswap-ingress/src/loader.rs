//! Team directory loading.
//!
//! A team directory holds a roster file (one member name per line) and, per
//! member, an offered list and a wanted list named after the member:
//!
//! ```text
//! team/
//!   team.txt
//!   alice-offered.txt
//!   alice-wanted.txt
//!   bob-offered.txt
//!   ...
//! ```
//!
//! Only a missing roster file is fatal. Everything else degrades: an
//! unreadable list counts as empty, and members that end up with no offered
//! cards are skipped. Each such event is logged and returned as a
//! [`LoadIssue`].

use std::{
    fmt,
    path::{Path, PathBuf},
};

use cardswap_types::{CardCode, CardswapError, Result, Roster, SwapConfig};
use serde::Serialize;

use crate::card_spec::parse_card_list;

/// Which of a member's two lists an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    Offered,
    Wanted,
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Offered => write!(f, "offered"),
            Self::Wanted => write!(f, "wanted"),
        }
    }
}

/// A non-fatal problem found while loading a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LoadIssue {
    /// A list file is missing or unreadable; treated as empty.
    ListUnreadable {
        member: String,
        list: ListKind,
        path: String,
        reason: String,
    },
    /// The member offered nothing and was left out of the swap.
    NoOffers { member: String },
    /// The name appears more than once in the roster; later entries skipped.
    DuplicateMember { member: String },
}

impl LoadIssue {
    /// Name of the member this issue concerns.
    #[must_use]
    pub fn member(&self) -> &str {
        match self {
            Self::ListUnreadable { member, .. }
            | Self::NoOffers { member }
            | Self::DuplicateMember { member } => member,
        }
    }

    /// `true` if the member was excluded from the roster.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        matches!(self, Self::NoOffers { .. } | Self::DuplicateMember { .. })
    }
}

impl fmt::Display for LoadIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListUnreadable {
                member,
                list,
                path,
                reason,
            } => write!(f, "Cannot read {list} file for team member {member} ({path}): {reason}"),
            Self::NoOffers { member } => write!(f, "Skipping member with no offers: {member}"),
            Self::DuplicateMember { member } => {
                write!(f, "Skipping duplicate team member: {member}")
            }
        }
    }
}

/// Outcome of loading a team directory.
#[derive(Debug, Clone)]
pub struct LoadedTeam {
    pub roster: Roster,
    /// Problems encountered, in the order they were found.
    pub issues: Vec<LoadIssue>,
}

impl LoadedTeam {
    /// Names of members excluded from the roster.
    pub fn skipped(&self) -> impl Iterator<Item = &str> {
        self.issues
            .iter()
            .filter(|i| i.is_skip())
            .map(LoadIssue::member)
    }
}

/// Reads a team directory into a [`Roster`].
#[derive(Debug, Clone)]
pub struct TeamLoader {
    dir: PathBuf,
    config: SwapConfig,
}

impl TeamLoader {
    /// Create a loader for `dir` using the file layout in `config`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, config: SwapConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the roster file and every member's lists.
    ///
    /// # Errors
    /// Returns `RosterUnreadable` if the roster file cannot be read.
    pub fn load(&self) -> Result<LoadedTeam> {
        let roster_path = self.dir.join(&self.config.roster_file);
        let names = std::fs::read_to_string(&roster_path).map_err(|e| {
            CardswapError::RosterUnreadable {
                path: roster_path.display().to_string(),
                reason: e.to_string(),
            }
        })?;

        let mut roster = Roster::new();
        let mut issues = Vec::new();

        for name in names.lines().map(str::trim).filter(|n| !n.is_empty()) {
            let offered = self.read_list(name, ListKind::Offered, &mut issues);
            let wanted = self.read_list(name, ListKind::Wanted, &mut issues);

            match roster.add_member(name, offered, wanted) {
                Ok(id) => {
                    tracing::debug!(member = name, id = %id, "Team member loaded");
                }
                Err(CardswapError::NoOfferedCards(_)) => {
                    record(&mut issues, LoadIssue::NoOffers {
                        member: name.to_string(),
                    });
                }
                Err(CardswapError::DuplicateMember(_)) => {
                    record(&mut issues, LoadIssue::DuplicateMember {
                        member: name.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            dir = %self.dir.display(),
            members = roster.len(),
            cards = roster.card_count(),
            issues = issues.len(),
            "Team loaded"
        );

        Ok(LoadedTeam { roster, issues })
    }

    fn list_path(&self, member: &str, list: ListKind) -> PathBuf {
        let file = match list {
            ListKind::Offered => self.config.offered_file(member),
            ListKind::Wanted => self.config.wanted_file(member),
        };
        self.dir.join(file)
    }

    /// Read one list. Failures are recorded and yield an empty list.
    fn read_list(&self, member: &str, list: ListKind, issues: &mut Vec<LoadIssue>) -> Vec<CardCode> {
        let path = self.list_path(member, list);
        let parsed = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|text| parse_card_list(&text).map_err(|e| e.to_string()));
        match parsed {
            Ok(codes) => codes,
            Err(reason) => {
                record(issues, LoadIssue::ListUnreadable {
                    member: member.to_string(),
                    list,
                    path: path.display().to_string(),
                    reason,
                });
                Vec::new()
            }
        }
    }
}

fn record(issues: &mut Vec<LoadIssue>, issue: LoadIssue) {
    tracing::warn!(member = issue.member(), "{issue}");
    issues.push(issue);
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(name), body).unwrap();
    }

    #[test]
    fn loads_members_in_roster_order() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "team.txt", "ann\nbob\n");
        write(tmp.path(), "ann-offered.txt", "x1\nAB:01, 02\n");
        write(tmp.path(), "ann-wanted.txt", "y1\n");
        write(tmp.path(), "bob-offered.txt", "y1\n");
        write(tmp.path(), "bob-wanted.txt", "ab01\n");

        let team = TeamLoader::new(tmp.path(), SwapConfig::default())
            .load()
            .unwrap();
        assert!(team.issues.is_empty(), "{:?}", team.issues);
        assert_eq!(team.roster.len(), 2);
        assert_eq!(team.roster.card_count(), 4);

        let ann = team.roster.member_by_name("ann").unwrap();
        let codes: Vec<&str> = ann
            .offered
            .iter()
            .map(|id| team.roster.card(*id).unwrap().code.as_str())
            .collect();
        assert_eq!(codes, vec!["X1", "AB01", "AB02"]);
        assert_eq!(team.roster.members()[1].name, "bob");
    }

    #[test]
    fn missing_wanted_list_is_empty() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "team.txt", "ann\n");
        write(tmp.path(), "ann-offered.txt", "x1\n");

        let team = TeamLoader::new(tmp.path(), SwapConfig::default())
            .load()
            .unwrap();
        assert_eq!(team.roster.len(), 1);
        assert!(team.roster.members()[0].wanted.is_empty());
        assert!(matches!(
            team.issues.as_slice(),
            [LoadIssue::ListUnreadable {
                list: ListKind::Wanted,
                ..
            }]
        ));
        assert_eq!(team.skipped().count(), 0);
    }

    #[test]
    fn member_without_offers_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "team.txt", "ann\nghost\n");
        write(tmp.path(), "ann-offered.txt", "x1\n");
        write(tmp.path(), "ann-wanted.txt", "");
        write(tmp.path(), "ghost-wanted.txt", "x1\n");

        let team = TeamLoader::new(tmp.path(), SwapConfig::default())
            .load()
            .unwrap();
        assert_eq!(team.roster.len(), 1);
        let skipped: Vec<&str> = team.skipped().collect();
        assert_eq!(skipped, vec!["ghost"]);
    }

    #[test]
    fn duplicate_names_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "team.txt", "ann\n\n  ann  \n");
        write(tmp.path(), "ann-offered.txt", "x1\n");
        write(tmp.path(), "ann-wanted.txt", "");

        let team = TeamLoader::new(tmp.path(), SwapConfig::default())
            .load()
            .unwrap();
        assert_eq!(team.roster.len(), 1);
        assert_eq!(team.roster.card_count(), 1);
        assert!(matches!(
            team.issues.as_slice(),
            [LoadIssue::DuplicateMember { member }] if member == "ann"
        ));
    }

    #[test]
    fn missing_roster_is_fatal() {
        let tmp = tempfile::tempdir().unwrap();
        let err = TeamLoader::new(tmp.path(), SwapConfig::default())
            .load()
            .unwrap_err();
        assert!(matches!(err, CardswapError::RosterUnreadable { .. }));
    }

    #[test]
    fn custom_layout_from_config() {
        let tmp = tempfile::tempdir().unwrap();
        write(tmp.path(), "members.lst", "ann\n");
        write(tmp.path(), "ann.have", "x1\n");
        write(tmp.path(), "ann.need", "y1\n");

        let config = SwapConfig {
            roster_file: "members.lst".into(),
            offered_suffix: ".have".into(),
            wanted_suffix: ".need".into(),
            ..SwapConfig::default()
        };
        let team = TeamLoader::new(tmp.path(), config).load().unwrap();
        assert!(team.issues.is_empty());
        assert_eq!(team.roster.members()[0].wanted.len(), 1);
    }

    #[test]
    fn issue_display_mentions_member() {
        let issue = LoadIssue::NoOffers {
            member: "ghost".into(),
        };
        assert_eq!(issue.to_string(), "Skipping member with no offers: ghost");
        assert!(issue.is_skip());
    }
}
