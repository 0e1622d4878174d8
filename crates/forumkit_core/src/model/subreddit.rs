//! Subreddit entity (`t5`).

use crate::decode::Things;
use crate::model::kind::ThingKind;
use crate::model::timestamp::{self, Timestamp};
use crate::model::wire::null_as_default;
use crate::model::{Entity, Thing};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Community metadata plus the viewer's relationship to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subreddit {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(
        rename = "name",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub fullname: String,
    #[serde(
        rename = "created_utc",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_optional"
    )]
    pub created: Option<Timestamp>,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(
        rename = "display_name",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub name: String,
    #[serde(
        rename = "display_name_prefixed",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub name_prefixed: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        rename = "public_description",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    #[serde(
        rename = "subreddit_type",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub kind: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub suggested_comment_sort: String,

    #[serde(deserialize_with = "null_as_default")]
    pub subscribers: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_user_count: Option<i64>,
    #[serde(rename = "over18", deserialize_with = "null_as_default")]
    pub nsfw: bool,
    #[serde(rename = "user_is_moderator", deserialize_with = "null_as_default")]
    pub user_is_mod: bool,
    #[serde(rename = "user_is_subscriber", deserialize_with = "null_as_default")]
    pub subscribed: bool,
    #[serde(rename = "user_has_favorited", deserialize_with = "null_as_default")]
    pub favorite: bool,
}

impl Entity for Subreddit {
    const KIND: ThingKind = ThingKind::Subreddit;
    const ITEMS_FIELD: &'static str = "subreddits";

    fn id(&self) -> &str {
        &self.id
    }

    fn fullname(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.fullname)
    }

    fn bucket(things: &Things) -> &[Self] {
        &things.subreddits
    }

    fn bucket_mut(things: &mut Things) -> &mut Vec<Self> {
        &mut things.subreddits
    }

    fn into_thing(self) -> Thing {
        Thing::Subreddit(self)
    }
}
