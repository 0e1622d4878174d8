//! Typed domain model for forum API entities.
//!
//! # Responsibility
//! - Define the field schema of every bucketed entity kind.
//! - Provide one polymorphic `Thing` view over all entity kinds.
//!
//! # Invariants
//! - Every entity exposes an id and a fullname usable for cross-references.
//! - Entities are immutable once decoded; only reply containers grow.
//! - JSON `null` and absent scalar fields decode to zero values.

use crate::decode::Things;
use serde::de::DeserializeOwned;
use std::borrow::Cow;

pub mod comment;
pub mod fullname;
pub mod kind;
pub mod mod_action;
pub mod more;
pub mod post;
pub mod subreddit;
pub mod timestamp;
pub mod user;
pub(crate) mod wire;

pub use comment::Comment;
pub use fullname::{fullname_for, Fullname, FullnameError};
pub use kind::ThingKind;
pub use mod_action::ModAction;
pub use more::More;
pub use post::Post;
pub use subreddit::Subreddit;
pub use timestamp::Timestamp;
pub use user::User;

/// Entity shape that owns one bucket of a `Things` set.
///
/// Implemented by every bucketed kind so decoding and listing projection can
/// be written once over `T: Entity`.
pub trait Entity: DeserializeOwned + Clone {
    /// Registry kind decoded into this shape.
    const KIND: ThingKind;
    /// Field name used when a page of this entity is encoded.
    const ITEMS_FIELD: &'static str;

    fn id(&self) -> &str;
    fn fullname(&self) -> Cow<'_, str>;

    fn bucket(things: &Things) -> &[Self];
    fn bucket_mut(things: &mut Things) -> &mut Vec<Self>;
    fn into_thing(self) -> Thing;
}

/// Polymorphic entity over every bucketed kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Thing {
    Comment(Comment),
    Post(Post),
    Subreddit(Subreddit),
    User(User),
    ModAction(ModAction),
    More(More),
}

impl Thing {
    pub fn kind(&self) -> ThingKind {
        match self {
            Self::Comment(_) => ThingKind::Comment,
            Self::Post(_) => ThingKind::Post,
            Self::Subreddit(_) => ThingKind::Subreddit,
            Self::User(_) => ThingKind::Account,
            Self::ModAction(_) => ThingKind::ModAction,
            Self::More(_) => ThingKind::More,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::Comment(value) => value.id(),
            Self::Post(value) => value.id(),
            Self::Subreddit(value) => value.id(),
            Self::User(value) => value.id(),
            Self::ModAction(value) => value.id(),
            Self::More(value) => value.id(),
        }
    }

    pub fn fullname(&self) -> Cow<'_, str> {
        match self {
            Self::Comment(value) => value.fullname(),
            Self::Post(value) => value.fullname(),
            Self::Subreddit(value) => value.fullname(),
            Self::User(value) => value.fullname(),
            Self::ModAction(value) => value.fullname(),
            Self::More(value) => value.fullname(),
        }
    }
}
