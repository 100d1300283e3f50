//! System-wide constants for the CardSwap allocator.

/// Default cap on `awarded - given` during the WANTED phase.
///
/// Raising it lets members with many offered cards be more "collaborative":
/// others may swap more wanted cards for their unwanted ones.
pub const DEFAULT_MAX_AWARD_CONTRIBUTION_DISTANCE: usize = 1;

/// Smallest accepted value for the award/contribution distance.
pub const MIN_AWARD_CONTRIBUTION_DISTANCE: usize = 1;

/// Default roster file name inside a team directory.
pub const DEFAULT_ROSTER_FILE: &str = "team.txt";

/// Default suffix of a member's offered list (`<name>-offered.txt`).
pub const DEFAULT_OFFERED_SUFFIX: &str = "-offered.txt";

/// Default suffix of a member's wanted list (`<name>-wanted.txt`).
pub const DEFAULT_WANTED_SUFFIX: &str = "-wanted.txt";

/// Separator between prefix and suffix list in a card-code specification.
pub const CARD_SPEC_PREFIX_SEPARATOR: char = ':';

/// Separator between suffixes in a card-code specification.
pub const CARD_SPEC_SUFFIX_SEPARATOR: char = ',';

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "CardSwap";
