//! Continuation marker entity (`more`).
//!
//! A marker stands in for replies the API left out of a tree. Its
//! `children` are the ids still to be fetched below `parent_id`.

use crate::decode::Things;
use crate::model::kind::ThingKind;
use crate::model::wire::null_as_default;
use crate::model::{Entity, Thing};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Entry point to replies omitted from a base comment tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct More {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub fullname: String,
    #[serde(deserialize_with = "null_as_default")]
    pub parent_id: String,
    /// Replies to the parent plus replies to those replies, recursively.
    #[serde(deserialize_with = "null_as_default")]
    pub count: i64,
    /// Comment levels from the parent down to the deepest omitted reply.
    #[serde(deserialize_with = "null_as_default")]
    pub depth: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub children: Vec<String>,
}

impl More {
    /// Whether any child ids remain to be fetched.
    pub fn has_pending(&self) -> bool {
        !self.children.is_empty()
    }
}

impl Entity for More {
    const KIND: ThingKind = ThingKind::More;
    const ITEMS_FIELD: &'static str = "more";

    fn id(&self) -> &str {
        &self.id
    }

    fn fullname(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.fullname)
    }

    fn bucket(things: &Things) -> &[Self] {
        &things.mores
    }

    fn bucket_mut(things: &mut Things) -> &mut Vec<Self> {
        &mut things.mores
    }

    fn into_thing(self) -> Thing {
        Thing::More(self)
    }
}
