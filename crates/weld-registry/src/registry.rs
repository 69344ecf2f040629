//! Ordered collection of source libraries.

use rustc_hash::FxHashSet;

use crate::error::{RegistryError, Result};
use crate::ident::is_valid_identifier;
use crate::library::LibraryEntry;

/// The libraries to merge, in priority order.
///
/// Order is significant: the first library to define a symbol owns the
/// named export, while the last one wins inside the default export.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LibraryRegistry {
    entries: Vec<LibraryEntry>,
}

impl LibraryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from entries, validating each in order.
    ///
    /// # Errors
    ///
    /// Fails on the first empty, non-identifier or duplicate name.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = LibraryEntry>,
    {
        let mut registry = Self::new();
        for entry in entries {
            registry.push(entry)?;
        }
        Ok(registry)
    }

    /// Append a library at the lowest priority.
    pub fn push(&mut self, entry: LibraryEntry) -> Result<()> {
        if entry.name().is_empty() {
            return Err(RegistryError::empty_name(entry.specifier()));
        }
        if !is_valid_identifier(entry.name()) {
            return Err(RegistryError::invalid_name(entry.name()));
        }
        if self.get(entry.name()).is_some() {
            return Err(RegistryError::duplicate(entry.name()));
        }

        tracing::debug!(
            library = entry.name(),
            specifier = entry.specifier(),
            exports = entry.module().len(),
            "registered library"
        );
        self.entries.push(entry);
        Ok(())
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_library(mut self, entry: LibraryEntry) -> Result<Self> {
        self.push(entry)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&LibraryEntry> {
        self.entries.iter().find(|entry| entry.name() == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LibraryEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(LibraryEntry::name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of distinct property names across all libraries.
    pub fn distinct_symbols(&self) -> usize {
        let mut seen = FxHashSet::default();
        for entry in &self.entries {
            seen.extend(entry.module().keys());
        }
        seen.len()
    }
}

impl<'a> IntoIterator for &'a LibraryRegistry {
    type Item = &'a LibraryEntry;
    type IntoIter = std::slice::Iter<'a, LibraryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
