//! Discriminated decoder for tagged-envelope payloads.
//!
//! # Responsibility
//! - Fan a JSON array of `{kind, data}` envelopes out into typed buckets.
//! - Decode listing envelopes and ordered reply streams.
//!
//! # Invariants
//! - Only an unparseable or wrongly shaped outer payload is fatal.
//! - Each element decodes in isolation; its failure drops only itself.
//! - The same element logic serves top-level and nested arrays.

mod error;
mod stream;
mod things;

pub use error::{DecodeError, DecodeResult, JsonFailureCategory};
pub use stream::decode_reply_stream;
pub use things::{SkipStats, Things};

use crate::listing::{Listing, ListingEnvelope};
use crate::model::ThingKind;
use log::debug;
use serde_json::value::RawValue;

/// Decodes a JSON array of tagged envelopes into a bucket set.
///
/// # Errors
/// - Returns `DecodeError::Json` when the payload is not JSON or not an array.
pub fn decode_things(bytes: &[u8]) -> DecodeResult<Things> {
    let elements: Vec<Box<RawValue>> = serde_json::from_slice(bytes)?;
    let things = Things::from_elements(&elements);
    debug!(
        "event=things_decode module=decode status=ok entities={} skipped_unknown={} skipped_malformed={}",
        things.len(),
        things.skipped.unknown_kind,
        things.skipped.malformed
    );
    Ok(things)
}

/// Decodes one `{"kind":"Listing","data":{...}}` envelope.
///
/// # Errors
/// - Returns `DecodeError::Json` when the payload is not a JSON object.
pub fn decode_listing(bytes: &[u8]) -> DecodeResult<Listing> {
    let envelope: ListingEnvelope = serde_json::from_slice(bytes)?;
    if ThingKind::from_tag(&envelope.kind) != ThingKind::Listing {
        debug!(
            "event=listing_decode module=decode status=ok note=unexpected_kind kind={}",
            envelope.kind.escape_debug()
        );
    }
    debug!(
        "event=listing_decode module=decode status=ok entities={} has_after={} has_before={}",
        envelope.data.things.len(),
        envelope.data.has_next(),
        envelope.data.has_previous()
    );
    Ok(envelope.data)
}
