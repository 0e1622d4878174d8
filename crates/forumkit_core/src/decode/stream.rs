//! Ordered reply streams for incremental tree insertion.
//!
//! # Responsibility
//! - Decode comment and continuation-marker envelopes in array order.
//! - Accept both a bare things array and the "load more children" wrapper.
//!
//! # Invariants
//! - Interleaving between comments and markers is preserved; a bucket set
//!   would lose it.
//! - Elements of any other kind are skipped the same way the bucket decoder
//!   skips them.

use super::error::DecodeResult;
use super::things::Envelope;
use crate::model::{Comment, More, ThingKind};
use crate::tree::ReplyNode;
use log::debug;
use serde::Deserialize;
use serde_json::value::RawValue;

#[derive(Deserialize)]
struct MoreChildrenResponse {
    #[serde(default)]
    json: MoreChildrenBody,
}

#[derive(Default, Deserialize)]
struct MoreChildrenBody {
    #[serde(default)]
    data: MoreChildrenData,
}

#[derive(Default, Deserialize)]
struct MoreChildrenData {
    #[serde(default)]
    things: Option<Vec<Box<RawValue>>>,
}

/// Decodes a reply stream into insertion-ordered nodes.
///
/// # Errors
/// - Returns `DecodeError::Json` when the payload is not JSON, or is neither
///   an array nor an object.
pub fn decode_reply_stream(bytes: &[u8]) -> DecodeResult<Vec<ReplyNode>> {
    let elements = if starts_with_object(bytes) {
        let response: MoreChildrenResponse = serde_json::from_slice(bytes)?;
        response.json.data.things.unwrap_or_default()
    } else {
        serde_json::from_slice::<Vec<Box<RawValue>>>(bytes)?
    };

    let mut nodes = Vec::with_capacity(elements.len());
    for (index, element) in elements.iter().enumerate() {
        if let Some(node) = decode_node(index, element) {
            nodes.push(node);
        }
    }
    debug!(
        "event=reply_stream_decode module=decode status=ok elements={} nodes={}",
        elements.len(),
        nodes.len()
    );
    Ok(nodes)
}

fn decode_node(index: usize, element: &RawValue) -> Option<ReplyNode> {
    let envelope = Envelope::parse(element).ok()?;
    let node = match ThingKind::from_tag(&envelope.kind) {
        ThingKind::Comment => envelope.payload::<Comment>().map(ReplyNode::Comment),
        ThingKind::More => envelope.payload::<More>().map(ReplyNode::More),
        _ => {
            debug!(
                "event=reply_stream_decode module=decode status=skip reason=not_reply index={}",
                index
            );
            return None;
        }
    };
    match node {
        Ok(node) => Some(node),
        Err(err) => {
            debug!(
                "event=reply_stream_decode module=decode status=skip reason=malformed_payload index={} error={}",
                index, err
            );
            None
        }
    }
}

fn starts_with_object(bytes: &[u8]) -> bool {
    bytes
        .iter()
        .find(|byte| !byte.is_ascii_whitespace())
        .is_some_and(|byte| *byte == b'{')
}
