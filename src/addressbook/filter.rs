//! Contact search filter.
//!
//! The haystack is First Name, Last Name and Company concatenated with no
//! separator and lowercased, so `"petersm"` matches Peter Smith. The needle is
//! a plain substring: no tokenizing, no ranking, no fuzzy matching.

use crate::model::{Contact, Field};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    needle: String,
}

impl ContactFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// The lowercased query.
    pub fn query(&self) -> &str {
        &self.needle
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, contact: &Contact) -> bool {
        matches(&self.needle, contact)
    }
}

/// `query_lowercased` must already be lowercased.
pub fn matches(query_lowercased: &str, contact: &Contact) -> bool {
    if query_lowercased.is_empty() {
        return true;
    }
    let haystack = format!(
        "{}{}{}",
        contact.get(Field::FirstName),
        contact.get(Field::LastName),
        contact.get(Field::Company)
    )
    .to_lowercase();
    haystack.contains(query_lowercased)
}
