//! Comment entity (`t1`).
//!
//! # Responsibility
//! - Define the comment field schema and its wire field names.
//! - Own the comment's reply container; no back-pointer to the parent.
//!
//! # Invariants
//! - `fullname` is the wire `name`; `parent_id` is the fullname of a post
//!   or of another comment.
//! - `replies` decodes from `""`, `null`, or a listing envelope and encodes
//!   to `null` when empty.

use crate::decode::Things;
use crate::model::fullname::Fullname;
use crate::model::kind::ThingKind;
use crate::model::timestamp::{self, Timestamp};
use crate::model::wire::null_as_default;
use crate::model::{Entity, Thing};
use crate::tree::Replies;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A comment posted by a user, together with the replies delivered with it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
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
    pub parent_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub permalink: String,

    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub body: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(
        rename = "author_fullname",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub author_id: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub author_flair_text: String,
    #[serde(
        rename = "author_flair_template_id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub author_flair_id: String,

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

    /// Viewer's vote: `Some(true)` up, `Some(false)` down, `None` neither.
    pub likes: Option<bool>,

    #[serde(deserialize_with = "null_as_default")]
    pub score: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub controversiality: i64,

    #[serde(
        rename = "link_id",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub post_id: String,
    // The post_* fields below are only present on some endpoints.
    #[serde(
        rename = "link_title",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub post_title: String,
    #[serde(
        rename = "link_permalink",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub post_permalink: String,
    #[serde(
        rename = "link_author",
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub post_author: String,
    #[serde(rename = "num_comments", skip_serializing_if = "Option::is_none")]
    pub post_num_comments: Option<i64>,

    #[serde(deserialize_with = "null_as_default")]
    pub is_submitter: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub score_hidden: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub saved: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub stickied: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub locked: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub can_gild: bool,
    #[serde(rename = "over_18", deserialize_with = "null_as_default")]
    pub nsfw: bool,

    pub replies: Replies,
}

impl Comment {
    /// Whether the reply tree below this comment has omitted replies to fetch.
    pub fn has_more(&self) -> bool {
        self.replies.has_more()
    }

    /// Kind of the entity this comment replies to, when `parent_id` parses.
    pub fn parent_kind(&self) -> Option<ThingKind> {
        Fullname::parse(&self.parent_id).ok().map(|parent| parent.kind)
    }

    /// Whether this comment replies directly to a post.
    pub fn is_top_level(&self) -> bool {
        self.parent_kind() == Some(ThingKind::Post)
    }
}

impl Entity for Comment {
    const KIND: ThingKind = ThingKind::Comment;
    const ITEMS_FIELD: &'static str = "comments";

    fn id(&self) -> &str {
        &self.id
    }

    fn fullname(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.fullname)
    }

    fn bucket(things: &Things) -> &[Self] {
        &things.comments
    }

    fn bucket_mut(things: &mut Things) -> &mut Vec<Self> {
        &mut things.comments
    }

    fn into_thing(self) -> Thing {
        Thing::Comment(self)
    }
}

#[cfg(test)]
mod tests {
    use super::Comment;
    use crate::model::kind::ThingKind;

    #[test]
    fn minimal_payload_decodes_with_defaults() {
        let comment: Comment =
            serde_json::from_str(r#"{"name":"t1_b","parent_id":"t3_x","body":"hi"}"#).unwrap();
        assert_eq!(comment.fullname, "t1_b");
        assert_eq!(comment.parent_id, "t3_x");
        assert_eq!(comment.body, "hi");
        assert_eq!(comment.score, 0);
        assert!(comment.replies.is_empty());
        assert!(comment.is_top_level());
    }

    #[test]
    fn null_fields_do_not_reject_the_comment() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": "fxw10aa",
                "name": "t1_fxw10aa",
                "parent_id": "t1_parent",
                "author_flair_text": null,
                "author_flair_template_id": null,
                "likes": null,
                "score": 3,
                "edited": false,
                "created_utc": 1594606094.0,
                "replies": ""
            }"#,
        )
        .unwrap();
        assert_eq!(comment.author_flair_text, "");
        assert_eq!(comment.likes, None);
        assert_eq!(comment.edited, None);
        assert_eq!(comment.created.map(|ts| ts.unix_seconds()), Some(1_594_606_094));
        assert_eq!(comment.parent_kind(), Some(ThingKind::Comment));
        assert!(!comment.is_top_level());
    }

    #[test]
    fn encoding_uses_wire_names_and_null_replies() {
        let comment = Comment {
            id: "abc".to_string(),
            fullname: "t1_abc".to_string(),
            nsfw: true,
            ..Comment::default()
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["name"], "t1_abc");
        assert_eq!(json["over_18"], true);
        assert!(json["replies"].is_null());
        assert!(json.get("body").is_none());
    }
}
