//! Post plus its full discussion thread.
//!
//! # Responsibility
//! - Combine a root-post listing and a reply listing into one result.
//! - Expose the root-level continuation marker to follow-up fetch logic.
//!
//! # Invariants
//! - The wire payload is exactly two listing envelopes: post, then replies.
//! - The root is the first post of listing one; extra posts are ignored.
//! - The root-level marker is the first marker of listing two.

use crate::decode::{DecodeError, DecodeResult};
use crate::listing::{Listing, ListingEnvelope};
use crate::model::{Comment, More, Post};
use crate::tree::{self, ReplyNode, ReplyTree, Replies};
use log::debug;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const COMPOSITE_LISTINGS: usize = 2;

/// A post and its threaded replies.
#[derive(Debug, Clone, PartialEq)]
pub struct PostAndComments {
    pub post: Post,
    pub replies: Replies,
}

impl PostAndComments {
    /// Assembles a composite from two already decoded listings.
    ///
    /// Neither listing is mutated; the needed entities are cloned.
    ///
    /// # Errors
    /// - Returns `DecodeError::MissingRootEntity` when `first` holds no post.
    pub fn assemble(first: &Listing, second: &Listing) -> DecodeResult<Self> {
        let post = first
            .things
            .posts
            .first()
            .cloned()
            .ok_or(DecodeError::MissingRootEntity)?;
        Ok(Self {
            post,
            replies: Replies {
                comments: second.things.comments.clone(),
                more: second.first_more().cloned(),
            },
        })
    }

    /// Owned variant of [`PostAndComments::assemble`].
    ///
    /// # Errors
    /// - Returns `DecodeError::MissingRootEntity` when `first` holds no post.
    pub fn from_listings(first: Listing, second: Listing) -> DecodeResult<Self> {
        let post = first
            .things
            .posts
            .into_iter()
            .next()
            .ok_or(DecodeError::MissingRootEntity)?;
        Ok(Self {
            post,
            replies: Replies {
                comments: second.things.comments,
                more: second.things.mores.into_iter().next(),
            },
        })
    }

    /// Top-level comments.
    pub fn comments(&self) -> &[Comment] {
        &self.replies.comments
    }

    /// Root-level continuation marker.
    pub fn more(&self) -> Option<&More> {
        self.replies.more.as_ref()
    }

    /// Whether the thread has omitted replies left to fetch at root level.
    pub fn has_more(&self) -> bool {
        self.replies.has_more()
    }

    /// Attaches a comment anywhere in the thread. Returns whether it matched.
    pub fn add_comment(&mut self, comment: Comment) -> bool {
        tree::insert(self, ReplyNode::Comment(comment)).is_ok()
    }

    /// Attaches a continuation marker anywhere in the thread, replacing the
    /// marker at its attachment point. Returns whether it matched.
    pub fn add_more(&mut self, more: More) -> bool {
        tree::insert(self, ReplyNode::More(more)).is_ok()
    }
}

impl ReplyTree for PostAndComments {
    fn owner_fullname(&self) -> &str {
        &self.post.fullname
    }

    fn replies(&self) -> &Replies {
        &self.replies
    }

    fn split_mut(&mut self) -> (&str, &mut Replies) {
        (&self.post.fullname, &mut self.replies)
    }
}

/// Decodes `[<post listing>, <comment listing>]` into a composite.
///
/// # Errors
/// - Returns `DecodeError::Json` when the payload is not a JSON array of
///   listing envelopes.
/// - Returns `DecodeError::WrongArity` when the array length is not two.
/// - Returns `DecodeError::MissingRootEntity` when the first listing holds
///   no post.
pub fn decode_post_and_comments(bytes: &[u8]) -> DecodeResult<PostAndComments> {
    let listings: Vec<ListingEnvelope> = serde_json::from_slice(bytes)?;
    let composite = from_envelopes(listings)?;
    debug!(
        "event=composite_decode module=composite status=ok post={} top_level={} has_more={}",
        composite.post.fullname,
        composite.replies.len(),
        composite.has_more()
    );
    Ok(composite)
}

fn from_envelopes(listings: Vec<ListingEnvelope>) -> DecodeResult<PostAndComments> {
    let [first, second]: [ListingEnvelope; COMPOSITE_LISTINGS] =
        listings
            .try_into()
            .map_err(|listings: Vec<ListingEnvelope>| DecodeError::WrongArity {
                expected: COMPOSITE_LISTINGS,
                found: listings.len(),
            })?;
    PostAndComments::from_listings(first.data, second.data)
}

impl<'de> Deserialize<'de> for PostAndComments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let listings = Vec::<ListingEnvelope>::deserialize(deserializer)?;
        from_envelopes(listings).map_err(D::Error::custom)
    }
}

impl Serialize for PostAndComments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PostAndComments", 2)?;
        state.serialize_field("post", &self.post)?;
        state.serialize_field("comments", &self.replies.comments)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::PostAndComments;
    use crate::decode::DecodeError;
    use crate::listing::Listing;

    #[test]
    fn assemble_requires_a_post_in_first_listing() {
        let err = PostAndComments::assemble(&Listing::default(), &Listing::default()).unwrap_err();
        assert!(matches!(err, DecodeError::MissingRootEntity));
    }

    #[test]
    fn extra_listings_are_wrong_arity() {
        let listing = r#"{"kind":"Listing","data":{"children":[{"kind":"t3","data":{"name":"t3_x"}}]}}"#;
        let payload = format!("[{listing},{listing},{listing}]");
        let err = super::decode_post_and_comments(payload.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::WrongArity {
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn deserialize_reports_wrong_arity() {
        let err = serde_json::from_str::<PostAndComments>(r#"[{"kind":"Listing","data":{}}]"#)
            .unwrap_err();
        assert!(err.to_string().contains("expected an array of 2 listings, found 1"));
    }
}
