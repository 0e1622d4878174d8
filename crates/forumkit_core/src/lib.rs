//! Response decoding and reply-tree assembly for a social-forum API client.
//! This crate is the single source of truth for decoding invariants; request
//! building and transport live with the caller.

pub mod composite;
pub mod decode;
pub mod listing;
pub mod logging;
pub mod model;
pub mod tree;

pub use composite::{decode_post_and_comments, PostAndComments};
pub use decode::{
    decode_listing, decode_reply_stream, decode_things, DecodeError, DecodeResult,
    JsonFailureCategory, SkipStats, Things,
};
pub use listing::{Listing, ListingEnvelope, Page};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::{
    Comment, Entity, Fullname, FullnameError, ModAction, More, Post, Subreddit, Thing, ThingKind,
    Timestamp, User,
};
pub use tree::{
    assemble, insert, AssemblyReport, ReplyNode, ReplyTree, Replies, MAX_REPLY_DEPTH,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
