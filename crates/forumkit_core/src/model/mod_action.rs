//! Moderation log entry (`modaction`).
//!
//! The wire `id` already carries its `ModAction_` prefix, so it doubles as
//! the fullname.

use crate::decode::Things;
use crate::model::kind::ThingKind;
use crate::model::timestamp::{self, Timestamp};
use crate::model::wire::null_as_default;
use crate::model::{Entity, Thing};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One action taken by a moderator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModAction {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub action: String,
    #[serde(
        rename = "created_utc",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_optional"
    )]
    pub created: Option<Timestamp>,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub details: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub description: String,

    #[serde(
        rename = "mod",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub moderator: String,
    /// Base36 id of the moderator account, without the `t2_` prefix.
    #[serde(
        rename = "mod_id36",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub moderator_id: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub target_author: String,
    #[serde(
        rename = "target_fullname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub target_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub target_title: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub target_permalink: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub target_body: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub subreddit: String,
    #[serde(
        rename = "sr_id36",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub subreddit_id: String,
}

impl Entity for ModAction {
    const KIND: ThingKind = ThingKind::ModAction;
    const ITEMS_FIELD: &'static str = "moderator_actions";

    fn id(&self) -> &str {
        &self.id
    }

    fn fullname(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.id)
    }

    fn bucket(things: &Things) -> &[Self] {
        &things.mod_actions
    }

    fn bucket_mut(things: &mut Things) -> &mut Vec<Self> {
        &mut things.mod_actions
    }

    fn into_thing(self) -> Thing {
        Thing::ModAction(self)
    }
}
