//! Kind-prefixed identifiers (`t1_abc`) used for cross-entity references.
//!
//! # Invariants
//! - A fullname is `t<digit>_<base36 id>`; the prefix must be a registry tag.
//! - Parsing never allocates; the parsed id borrows from the input.

use crate::model::kind::ThingKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static FULLNAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(t[1-6])_([0-9a-z]+)$").expect("valid fullname regex"));

/// Errors from fullname parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullnameError {
    Empty,
    Malformed(String),
}

impl Display for FullnameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "fullname must not be empty"),
            Self::Malformed(value) => write!(f, "malformed fullname: `{value}`"),
        }
    }
}

impl Error for FullnameError {}

/// Parsed view of a fullname.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fullname<'a> {
    pub kind: ThingKind,
    pub id: &'a str,
}

impl<'a> Fullname<'a> {
    pub fn parse(value: &'a str) -> Result<Self, FullnameError> {
        if value.is_empty() {
            return Err(FullnameError::Empty);
        }
        let captures = FULLNAME_RE
            .captures(value)
            .ok_or_else(|| FullnameError::Malformed(value.to_string()))?;
        let (Some(prefix), Some(id)) = (captures.get(1), captures.get(2)) else {
            return Err(FullnameError::Malformed(value.to_string()));
        };
        Ok(Self {
            kind: ThingKind::from_tag(prefix.as_str()),
            id: &value[id.start()..id.end()],
        })
    }
}

impl Display for Fullname<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}_{}", self.kind.tag(), self.id)
    }
}

/// Builds `<tag>_<id>` for kinds whose wire payload lacks a fullname.
pub fn fullname_for(kind: ThingKind, id: &str) -> String {
    format!("{}_{}", kind.tag(), id)
}
