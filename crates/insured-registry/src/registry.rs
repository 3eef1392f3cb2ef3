//! In-memory registry of insured persons.
//!
//! Provides:
//! - Appending records in insertion order (duplicates allowed)
//! - Listing every record, with an explicit empty signal
//! - Case-insensitive multi-keyword search over names and phone

use tracing::debug;

use crate::error::{Error, Result};
use crate::person::InsuredPerson;

/// Split a search query into lower-case keywords.
///
/// Commas count as separators alongside whitespace, so `"Jan, Novak"` and
/// `"jan novak"` produce the same keywords. Empty tokens are dropped.
#[must_use]
pub fn keywords(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .replace(',', " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Ordered collection of insured persons.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    persons: Vec<InsuredPerson>,
}

impl Registry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a person to the end of the registry.
    pub fn add(&mut self, person: InsuredPerson) {
        let position = self.persons.len();
        self.persons.push(person);
        debug!(position, "Appended insured person");
    }

    /// Get every person in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRegistry`] if nobody has been added yet.
    pub fn list_all(&self) -> Result<&[InsuredPerson]> {
        if self.persons.is_empty() {
            return Err(Error::EmptyRegistry);
        }
        Ok(&self.persons)
    }

    /// Find every person whose name or phone contains all keywords of `query`.
    ///
    /// Results keep insertion order. An empty registry yields an empty
    /// result, and a query without keywords yields every person.
    #[must_use]
    pub fn search_by_text(&self, query: &str) -> Vec<&InsuredPerson> {
        let keywords = keywords(query);

        let results: Vec<_> = self
            .persons
            .iter()
            .filter(|person| person.matches(&keywords))
            .collect();

        debug!(
            keywords = keywords.len(),
            hits = results.len(),
            "Search finished"
        );
        results
    }

    /// Number of persons in the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.persons.len()
    }

    /// Check whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    /// Iterate over persons in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, InsuredPerson> {
        self.persons.iter()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a InsuredPerson;
    type IntoIter = std::slice::Iter<'a, InsuredPerson>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
