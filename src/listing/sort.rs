// src/listing/sort.rs
// =============================================================================
// Ordering entries by a filename mask.
//
// The mask is a regex (case-insensitive) run against each entry's sort key.
// Entries whose key matches come first, ordered by the matched text; the rest
// keep their relative order at the end. With a mask like `\d{4}-\d{2}-\d{2}`
// dated posts sort by date and everything else trails behind.
//
// An empty match counts as no match, so an empty mask changes nothing.
// =============================================================================

use std::cmp::Ordering;

use regex::{Regex, RegexBuilder};

use super::entry::Entry;
use crate::error::{BlogError, Result};

#[derive(Debug, Clone)]
pub struct SortMask {
    regex: Regex,
}

impl SortMask {
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| BlogError::SortMask {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self { regex })
    }

    /// The part of `name` this mask orders by, if any.
    pub fn key<'a>(&self, name: &'a str) -> Option<&'a str> {
        self.regex
            .find(name)
            .map(|m| m.as_str())
            .filter(|m| !m.is_empty())
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (self.key(a), self.key(b)) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Stable sort by each entry's `key`.
    pub fn sort(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| self.compare(&a.key, &b.key));
    }
}
