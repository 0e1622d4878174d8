//! Reply container and its asymmetric wire format.
//!
//! # Invariants
//! - A container holds at most one continuation marker.
//! - Decoding `""` or `null` yields an empty container; decoding a listing
//!   envelope takes its comment bucket and its first marker.
//! - Encoding an empty container yields `null`, never `""`; a non-empty one
//!   encodes as an array of comments without the marker.
//! - Wire nesting deeper than `MAX_REPLY_DEPTH` fails the comment that
//!   carries it, so the enclosing bucket drops it as malformed.
//! - Search, traversal and drop use explicit stacks; tree depth is bounded
//!   by memory, not by the call stack.

use super::ReplyNode;
use crate::listing::ListingEnvelope;
use crate::model::{Comment, More};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::cell::Cell;

const EMPTY_REPLIES_SENTINEL: &str = r#""""#;

/// Deepest reply listing decoded from the wire, counted from the outermost
/// comment.
pub const MAX_REPLY_DEPTH: usize = 32;

thread_local! {
    static REPLY_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Direct replies of one comment or of a composite root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Replies {
    pub comments: Vec<Comment>,
    pub more: Option<More>,
}

impl Replies {
    pub fn is_empty(&self) -> bool {
        self.comments.is_empty() && self.more.is_none()
    }

    /// Number of direct child comments.
    pub fn len(&self) -> usize {
        self.comments.len()
    }

    /// Whether the marker at this level still has child ids to fetch.
    pub fn has_more(&self) -> bool {
        self.more.as_ref().is_some_and(More::has_pending)
    }

    /// Attaches `node` below `owner` or below the first descendant comment
    /// whose fullname equals the node's parent.
    ///
    /// Search order is pre-order depth-first: `owner` itself, then each
    /// child comment's subtree in order. A marker replaces any marker already
    /// held at the attachment point.
    ///
    /// # Errors
    /// - Hands `node` back unchanged when no attachment point matches.
    pub fn insert_under(&mut self, owner: &str, node: ReplyNode) -> Result<(), ReplyNode> {
        if node.parent_id() == owner {
            self.accept(node);
            return Ok(());
        }

        let Some(path) = self.path_to(node.parent_id()) else {
            return Err(node);
        };
        let mut target = self;
        for index in path {
            target = &mut target.comments[index].replies;
        }
        target.accept(node);
        Ok(())
    }

    /// Total comments in this container and every nested container.
    pub fn count_descendants(&self) -> usize {
        let mut total = 0;
        let mut pending = vec![self];
        while let Some(replies) = pending.pop() {
            total += replies.comments.len();
            pending.extend(replies.comments.iter().map(|comment| &comment.replies));
        }
        total
    }

    /// Visits every nested comment in pre-order with its depth (0 = direct).
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(usize, &'a Comment)) {
        let mut levels = vec![self.comments.iter()];
        while let Some(level) = levels.last_mut() {
            match level.next() {
                Some(comment) => {
                    visit(levels.len() - 1, comment);
                    levels.push(comment.replies.comments.iter());
                }
                None => {
                    levels.pop();
                }
            }
        }
    }

    /// Child indexes leading from `self` to the first comment, in pre-order,
    /// whose fullname is `fullname`. The last index names that comment.
    fn path_to(&self, fullname: &str) -> Option<Vec<usize>> {
        // One frame per open container: (container, next child to visit).
        let mut frames: Vec<(&Replies, usize)> = vec![(self, 0)];
        while let Some(frame) = frames.last_mut() {
            let (replies, next) = *frame;
            let Some(comment) = replies.comments.get(next) else {
                frames.pop();
                continue;
            };
            frame.1 += 1;
            if comment.fullname == fullname {
                return Some(frames.iter().map(|(_, next)| next - 1).collect());
            }
            frames.push((&comment.replies, 0));
        }
        None
    }

    fn accept(&mut self, node: ReplyNode) {
        match node {
            ReplyNode::Comment(comment) => self.comments.push(comment),
            ReplyNode::More(more) => self.more = Some(more),
        }
    }
}

impl Drop for Replies {
    fn drop(&mut self) {
        // Detach grandchildren before each comment drops so drop never recurses.
        let mut pending = std::mem::take(&mut self.comments);
        while let Some(mut comment) = pending.pop() {
            pending.append(&mut comment.replies.comments);
        }
    }
}

/// Live reply-listing nesting on this thread; released on drop.
struct DepthGuard;

impl DepthGuard {
    fn enter() -> Option<Self> {
        REPLY_DEPTH.with(|depth| {
            let next = depth.get() + 1;
            if next > MAX_REPLY_DEPTH {
                return None;
            }
            depth.set(next);
            Some(DepthGuard)
        })
    }
}

impl Drop for DepthGuard {
    fn drop(&mut self) {
        REPLY_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

impl<'de> Deserialize<'de> for Replies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<Box<RawValue>>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(Self::default());
        };
        if raw.get() == EMPTY_REPLIES_SENTINEL {
            return Ok(Self::default());
        }

        let _guard = DepthGuard::enter().ok_or_else(|| {
            D::Error::custom(format!("reply nesting exceeds {MAX_REPLY_DEPTH} levels"))
        })?;
        let envelope: ListingEnvelope =
            serde_json::from_str(raw.get()).map_err(D::Error::custom)?;
        let mut things = envelope.data.things;
        Ok(Self {
            comments: std::mem::take(&mut things.comments),
            more: things.mores.into_iter().next(),
        })
    }
}

impl Serialize for Replies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.comments.is_empty() {
            return serializer.serialize_none();
        }
        self.comments.serialize(serializer)
    }
}
