//! Bucket set built from one array of tagged envelopes.
//!
//! # Invariants
//! - A bucket only ever holds entities of its own kind.
//! - Within a bucket, order equals array order.
//! - Unknown kinds and malformed elements are counted, logged at `debug`,
//!   and otherwise dropped; they never fail the aggregate decode.

use crate::model::{Comment, Entity, ModAction, More, Post, Subreddit, ThingKind, User};
use log::debug;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

/// Wire unit: `{"kind": <tag>, "data": <payload>}` with the payload undecoded.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope {
    #[serde(default)]
    pub(crate) kind: String,
    #[serde(default)]
    pub(crate) data: Option<Box<RawValue>>,
}

impl Envelope {
    pub(crate) fn parse(raw: &RawValue) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw.get())
    }

    pub(crate) fn payload<T: Entity>(&self) -> Result<T, serde_json::Error> {
        match &self.data {
            Some(data) => serde_json::from_str(data.get()),
            None => Err(serde_json::Error::missing_field("data")),
        }
    }
}

/// Diagnostic counters for elements that produced no entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkipStats {
    /// Tag missing from the registry, or a known kind with no bucket.
    pub unknown_kind: usize,
    /// Element that is not an envelope, or whose payload misfits its kind.
    pub malformed: usize,
}

impl SkipStats {
    pub fn total(&self) -> usize {
        self.unknown_kind + self.malformed
    }
}

/// One ordered bucket per entity kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Things {
    pub comments: Vec<Comment>,
    pub mores: Vec<More>,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub subreddits: Vec<Subreddit>,
    pub mod_actions: Vec<ModAction>,
    pub skipped: SkipStats,
}

impl Things {
    /// Builds buckets from raw array elements, isolating each failure.
    pub(crate) fn from_elements(elements: &[Box<RawValue>]) -> Self {
        let mut things = Self::default();
        for (index, element) in elements.iter().enumerate() {
            things.push_element(index, element);
        }
        things
    }

    /// Typed view of one bucket.
    pub fn bucket<T: Entity>(&self) -> &[T] {
        T::bucket(self)
    }

    /// Number of entities in the bucket of `kind`; zero for unbucketed kinds.
    pub fn count(&self, kind: ThingKind) -> usize {
        match kind {
            ThingKind::Comment => self.comments.len(),
            ThingKind::More => self.mores.len(),
            ThingKind::Account => self.users.len(),
            ThingKind::Post => self.posts.len(),
            ThingKind::Subreddit => self.subreddits.len(),
            ThingKind::ModAction => self.mod_actions.len(),
            _ => 0,
        }
    }

    /// Total entities across all buckets.
    pub fn len(&self) -> usize {
        ThingKind::known().map(|kind| self.count(kind)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push_element(&mut self, index: usize, element: &RawValue) {
        let envelope = match Envelope::parse(element) {
            Ok(envelope) => envelope,
            Err(err) => {
                self.skipped.malformed += 1;
                debug!(
                    "event=thing_decode module=decode status=skip reason=not_envelope index={} error={}",
                    index, err
                );
                return;
            }
        };

        let kind = ThingKind::from_tag(&envelope.kind);
        match kind {
            ThingKind::Comment => self.push_payload::<Comment>(index, &envelope),
            ThingKind::More => self.push_payload::<More>(index, &envelope),
            ThingKind::Account => self.push_payload::<User>(index, &envelope),
            ThingKind::Post => self.push_payload::<Post>(index, &envelope),
            ThingKind::Subreddit => self.push_payload::<Subreddit>(index, &envelope),
            ThingKind::ModAction => self.push_payload::<ModAction>(index, &envelope),
            _ => {
                self.skipped.unknown_kind += 1;
                debug!(
                    "event=thing_decode module=decode status=skip reason=unknown_kind index={} kind={}",
                    index,
                    envelope.kind.escape_debug()
                );
            }
        }
    }

    fn push_payload<T: Entity>(&mut self, index: usize, envelope: &Envelope) {
        match envelope.payload::<T>() {
            Ok(entity) => T::bucket_mut(self).push(entity),
            Err(err) => {
                self.skipped.malformed += 1;
                debug!(
                    "event=thing_decode module=decode status=skip reason=malformed_payload index={} kind={} error={}",
                    index,
                    T::KIND,
                    err
                );
            }
        }
    }
}

impl<'de> Deserialize<'de> for Things {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Option::<Vec<Box<RawValue>>>::deserialize(deserializer)?;
        Ok(elements
            .map(|elements| Self::from_elements(&elements))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::{SkipStats, Things};
    use crate::model::{Comment, ThingKind};

    #[test]
    fn non_object_elements_are_isolated() {
        let things: Things = serde_json::from_str(
            r#"[1, "x", null, {"kind":"t1","data":{"name":"t1_a"}}, {"kind":"t1"}]"#,
        )
        .unwrap();
        assert_eq!(things.bucket::<Comment>().len(), 1);
        assert_eq!(
            things.skipped,
            SkipStats {
                unknown_kind: 0,
                malformed: 4,
            }
        );
    }

    #[test]
    fn known_but_unbucketed_kinds_count_as_unknown() {
        let things: Things = serde_json::from_str(
            r#"[{"kind":"t6","data":{}}, {"kind":"Listing","data":{}}, {"kind":"zz","data":{}}, {"data":{}}]"#,
        )
        .unwrap();
        assert!(things.is_empty());
        assert_eq!(things.skipped.unknown_kind, 4);
        assert_eq!(things.skipped.total(), 4);
    }

    #[test]
    fn null_array_is_an_empty_set() {
        let things: Things = serde_json::from_str("null").unwrap();
        assert!(things.is_empty());
        assert_eq!(things.count(ThingKind::Post), 0);
    }
}
