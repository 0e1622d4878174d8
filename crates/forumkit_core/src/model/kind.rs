//! Entity registry: wire discriminant tags to entity kinds.
//!
//! # Responsibility
//! - Map the `kind` string of a tagged envelope to a closed `ThingKind`.
//! - Report which kinds the decoder turns into bucketed entities.
//!
//! # Invariants
//! - Lookup goes through one static table; there is no other tag mapping.
//! - Unrecognized tags map to `ThingKind::Unknown`, never to an error.

use std::fmt::{Display, Formatter};

/// Discriminant of a tagged envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThingKind {
    /// `t1`
    Comment,
    /// `t2`
    Account,
    /// `t3`
    Post,
    /// `t4`
    Message,
    /// `t5`
    Subreddit,
    /// `t6`
    Award,
    Listing,
    KarmaList,
    TrophyList,
    UserList,
    /// `more`: continuation marker for omitted replies.
    More,
    /// `modaction`
    ModAction,
    /// Any tag missing from the registry table.
    Unknown,
}

const KIND_TABLE: &[(&str, ThingKind)] = &[
    ("t1", ThingKind::Comment),
    ("t2", ThingKind::Account),
    ("t3", ThingKind::Post),
    ("t4", ThingKind::Message),
    ("t5", ThingKind::Subreddit),
    ("t6", ThingKind::Award),
    ("Listing", ThingKind::Listing),
    ("KarmaList", ThingKind::KarmaList),
    ("TrophyList", ThingKind::TrophyList),
    ("UserList", ThingKind::UserList),
    ("more", ThingKind::More),
    ("modaction", ThingKind::ModAction),
];

impl ThingKind {
    /// Resolves a wire tag. Matching is exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Self {
        KIND_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == tag)
            .map(|(_, kind)| *kind)
            .unwrap_or(ThingKind::Unknown)
    }

    /// Wire tag for this kind. `Unknown` has no tag and returns `""`.
    pub fn tag(self) -> &'static str {
        KIND_TABLE
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(tag, _)| *tag)
            .unwrap_or("")
    }

    /// Whether the decoder produces entities of this kind.
    pub fn is_bucketed(self) -> bool {
        matches!(
            self,
            ThingKind::Comment
                | ThingKind::Account
                | ThingKind::Post
                | ThingKind::Subreddit
                | ThingKind::More
                | ThingKind::ModAction
        )
    }

    /// All kinds known to the registry, in table order.
    pub fn known() -> impl Iterator<Item = ThingKind> {
        KIND_TABLE.iter().map(|(_, kind)| *kind)
    }
}

impl Display for ThingKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThingKind::Unknown => write!(f, "unknown"),
            other => write!(f, "{}", other.tag()),
        }
    }
}
