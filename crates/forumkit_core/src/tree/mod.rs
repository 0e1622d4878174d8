//! Reply tree assembly.
//!
//! # Responsibility
//! - Weave flat comment/marker streams into owned recursive reply trees.
//! - Report how many nodes were attached or dropped.
//!
//! # Invariants
//! - Attachment is pre-order depth-first over already attached comments;
//!   the first fullname match wins.
//! - A node with no matching parent is dropped without mutating the tree.
//! - Nodes are only appended; entity payload fields are never touched.
//! - Trees hold no parent back-pointers; each comment owns its replies.

mod replies;

pub use replies::{Replies, MAX_REPLY_DEPTH};

use crate::model::{Comment, More};
use log::debug;

/// Unit of insertion into a reply tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplyNode {
    Comment(Comment),
    More(More),
}

impl ReplyNode {
    /// Fullname of the entity this node declares as its parent.
    pub fn parent_id(&self) -> &str {
        match self {
            Self::Comment(comment) => &comment.parent_id,
            Self::More(more) => &more.parent_id,
        }
    }

    pub fn fullname(&self) -> &str {
        match self {
            Self::Comment(comment) => &comment.fullname,
            Self::More(more) => &more.fullname,
        }
    }
}

impl From<Comment> for ReplyNode {
    fn from(value: Comment) -> Self {
        Self::Comment(value)
    }
}

impl From<More> for ReplyNode {
    fn from(value: More) -> Self {
        Self::More(value)
    }
}

/// Owner of a reply container that nodes can be attached under.
pub trait ReplyTree {
    /// Fullname that top-level replies declare as their parent.
    fn owner_fullname(&self) -> &str;
    fn replies(&self) -> &Replies;
    /// Owner fullname and container, borrowed together for insertion.
    fn split_mut(&mut self) -> (&str, &mut Replies);
}

impl ReplyTree for Comment {
    fn owner_fullname(&self) -> &str {
        &self.fullname
    }

    fn replies(&self) -> &Replies {
        &self.replies
    }

    fn split_mut(&mut self) -> (&str, &mut Replies) {
        (&self.fullname, &mut self.replies)
    }
}

/// Inserts one node into `tree`.
///
/// # Errors
/// - Returns the node unchanged when no attachment point matches its parent.
pub fn insert<T: ReplyTree + ?Sized>(tree: &mut T, node: ReplyNode) -> Result<(), ReplyNode> {
    let (owner, replies) = tree.split_mut();
    replies.insert_under(owner, node)
}

/// Outcome counters of one `assemble` pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub attached_comments: usize,
    pub attached_mores: usize,
    /// Nodes whose declared parent is not in the tree.
    pub dropped: usize,
}

impl AssemblyReport {
    pub fn attached(&self) -> usize {
        self.attached_comments + self.attached_mores
    }
}

/// Inserts `nodes` in order, dropping those that cannot be attached.
///
/// Order matters: a reply must come after the comment it answers, or it is
/// dropped.
pub fn assemble<T, I>(tree: &mut T, nodes: I) -> AssemblyReport
where
    T: ReplyTree + ?Sized,
    I: IntoIterator<Item = ReplyNode>,
{
    let mut report = AssemblyReport::default();
    for node in nodes {
        let is_comment = matches!(node, ReplyNode::Comment(_));
        match insert(tree, node) {
            Ok(()) if is_comment => report.attached_comments += 1,
            Ok(()) => report.attached_mores += 1,
            Err(dropped) => {
                report.dropped += 1;
                debug!(
                    "event=reply_attach module=tree status=skip reason=no_parent fullname={} parent={}",
                    dropped.fullname(),
                    dropped.parent_id()
                );
            }
        }
    }
    debug!(
        "event=tree_assemble module=tree status=ok owner={} attached_comments={} attached_mores={} dropped={}",
        tree.owner_fullname(),
        report.attached_comments,
        report.attached_mores,
        report.dropped
    );
    report
}
