//! Account entity (`t2`).
//!
//! The wire `name` of an account is the username, not a fullname. The
//! fullname is derived from the bare id instead.

use crate::decode::Things;
use crate::model::fullname::fullname_for;
use crate::model::kind::ThingKind;
use crate::model::timestamp::{self, Timestamp};
use crate::model::wire::null_as_default;
use crate::model::{Entity, Thing};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A user account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(
        rename = "created_utc",
        skip_serializing_if = "Option::is_none",
        deserialize_with = "timestamp::deserialize_optional"
    )]
    pub created: Option<Timestamp>,

    #[serde(rename = "link_karma", deserialize_with = "null_as_default")]
    pub post_karma: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub comment_karma: i64,

    #[serde(deserialize_with = "null_as_default")]
    pub is_friend: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_employee: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub has_verified_email: bool,
    #[serde(rename = "over_18", deserialize_with = "null_as_default")]
    pub nsfw: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub is_suspended: bool,
}

impl Entity for User {
    const KIND: ThingKind = ThingKind::Account;
    const ITEMS_FIELD: &'static str = "users";

    fn id(&self) -> &str {
        &self.id
    }

    fn fullname(&self) -> Cow<'_, str> {
        Cow::Owned(fullname_for(ThingKind::Account, &self.id))
    }

    fn bucket(things: &Things) -> &[Self] {
        &things.users
    }

    fn bucket_mut(things: &mut Things) -> &mut Vec<Self> {
        &mut things.users
    }

    fn into_thing(self) -> Thing {
        Thing::User(self)
    }
}
