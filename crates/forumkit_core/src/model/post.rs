//! Post entity (`t3`).

use crate::decode::Things;
use crate::model::kind::ThingKind;
use crate::model::timestamp::{self, Timestamp};
use crate::model::wire::null_as_default;
use crate::model::{Entity, Thing};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A submitted post.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
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
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_optional"
    )]
    pub edited: Option<Timestamp>,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub permalink: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub url: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(
        rename = "selftext",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub body: String,

    pub likes: Option<bool>,

    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub upvote_ratio: f64,
    #[serde(rename = "num_comments", deserialize_with = "null_as_default")]
    pub number_of_comments: i64,

    #[serde(
        rename = "subreddit",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub subreddit_name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub subreddit_name_prefixed: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub subreddit_id: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(
        rename = "author_fullname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub author_id: String,

    #[serde(deserialize_with = "null_as_default")]
    pub spoiler: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub locked: bool,
    #[serde(rename = "over_18", deserialize_with = "null_as_default")]
    pub nsfw: bool,
    #[serde(rename = "is_self", deserialize_with = "null_as_default")]
    pub is_self_post: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub saved: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub stickied: bool,
}

impl Entity for Post {
    const KIND: ThingKind = ThingKind::Post;
    const ITEMS_FIELD: &'static str = "posts";

    fn id(&self) -> &str {
        &self.id
    }

    fn fullname(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.fullname)
    }

    fn bucket(things: &Things) -> &[Self] {
        &things.posts
    }

    fn bucket_mut(things: &mut Things) -> &mut Vec<Self> {
        &mut things.posts
    }

    fn into_thing(self) -> Thing {
        Thing::Post(self)
    }
}
