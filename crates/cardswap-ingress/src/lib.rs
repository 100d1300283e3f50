//! # cardswap-ingress
//!
//! **Ingress**: everything between files on disk and a loaded
//! [`Roster`](cardswap_types::Roster).
//!
//! 1. **card_spec**: expands `PREFIX:S1, S2` lines into normalized codes
//! 2. **TeamLoader**: reads `team.txt` and each member's offered/wanted lists
//! 3. **convert**: rewrites a list into one code per line
//!
//! ## Load Flow
//!
//! ```text
//! team.txt -> member names
//!     -> <name>-offered.txt, <name>-wanted.txt -> parse_card_list()
//!     -> Roster::add_member()            (skipped + LoadIssue on failure)
//!     -> LoadedTeam { roster, issues }
//! ```
//!
//! Unreadable list files and members without offers never abort a load;
//! they are logged and returned as [`LoadIssue`]s.

pub mod card_spec;
pub mod convert;
pub mod loader;

pub use card_spec::{parse_card_list, parse_card_spec};
pub use convert::convert_list;
pub use loader::{ListKind, LoadIssue, LoadedTeam, TeamLoader};
