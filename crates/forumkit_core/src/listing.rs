//! Listing cursor model.
//!
//! # Responsibility
//! - Hold one decoded bucket set together with its pagination cursors.
//! - Project a single entity kind out of it, paired with both cursors.
//!
//! # Invariants
//! - Projection never mutates the listing; one listing may be projected
//!   any number of times, for any number of kinds.
//! - Cursors are opaque; `""` means "no cursor" and `null` decodes to `""`.

use crate::decode::Things;
use crate::model::wire::null_as_default;
use crate::model::{Comment, Entity, ModAction, More, Post, Subreddit, Thing, ThingKind, User};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Wire wrapper `{"kind": "Listing", "data": {...}}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListingEnvelope {
    #[serde(deserialize_with = "null_as_default")]
    pub kind: String,
    pub data: Listing,
}

/// Things from one API response plus the anchors for adjacent pages.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Listing {
    #[serde(rename = "children")]
    pub things: Things,
    #[serde(deserialize_with = "null_as_default")]
    pub after: String,
    #[serde(deserialize_with = "null_as_default")]
    pub before: String,
}

impl Listing {
    /// Typed projection of one bucket paired with the listing cursors.
    pub fn project<T: Entity>(&self) -> Page<T> {
        Page {
            items: self.things.bucket::<T>().to_vec(),
            after: self.after.clone(),
            before: self.before.clone(),
        }
    }

    /// Dynamic projection by registry kind.
    ///
    /// Kinds without a bucket project to an empty page that still carries
    /// the cursors.
    pub fn project_kind(&self, kind: ThingKind) -> Page<Thing> {
        let items = match kind {
            ThingKind::Comment => things_of::<Comment>(&self.things),
            ThingKind::More => things_of::<More>(&self.things),
            ThingKind::Account => things_of::<User>(&self.things),
            ThingKind::Post => things_of::<Post>(&self.things),
            ThingKind::Subreddit => things_of::<Subreddit>(&self.things),
            ThingKind::ModAction => things_of::<ModAction>(&self.things),
            _ => Vec::new(),
        };
        Page {
            items,
            after: self.after.clone(),
            before: self.before.clone(),
        }
    }

    pub fn comments(&self) -> Page<Comment> {
        self.project()
    }

    pub fn posts(&self) -> Page<Post> {
        self.project()
    }

    pub fn users(&self) -> Page<User> {
        self.project()
    }

    pub fn subreddits(&self) -> Page<Subreddit> {
        self.project()
    }

    pub fn mod_actions(&self) -> Page<ModAction> {
        self.project()
    }

    /// First continuation marker, if the listing carries any.
    pub fn first_more(&self) -> Option<&More> {
        self.things.mores.first()
    }

    pub fn has_next(&self) -> bool {
        !self.after.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.before.is_empty()
    }
}

fn things_of<T: Entity>(things: &Things) -> Vec<Thing> {
    things
        .bucket::<T>()
        .iter()
        .cloned()
        .map(T::into_thing)
        .collect()
}

/// One projected bucket with the cursors of the listing it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub after: String,
    pub before: String,
}

impl<T> Page<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        !self.after.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        !self.before.is_empty()
    }
}

impl<T: Entity + Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Page", 3)?;
        state.serialize_field(T::ITEMS_FIELD, &self.items)?;
        state.serialize_field("after", &self.after)?;
        state.serialize_field("before", &self.before)?;
        state.end()
    }
}
