//! Library entries and their export namespaces.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Opaque value recorded for a library property.
///
/// Runtime inspection stores the `typeof` tag of the property, static
/// inspection stores `null`. The aggregator never looks inside it.
pub type ExportValue = serde_json::Value;

/// Immutable, ordered view of a library's own enumerable properties.
///
/// Iteration follows insertion order, which is the library's natural
/// enumeration order as reported by whoever inspected it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleNamespace {
    exports: IndexMap<String, ExportValue>,
}

impl ModuleNamespace {
    /// Build a namespace from `(name, value)` pairs.
    ///
    /// A repeated name keeps its first position and takes the later value,
    /// matching how object properties behave when assigned twice.
    pub fn from_exports<I, K>(exports: I) -> Self
    where
        I: IntoIterator<Item = (K, ExportValue)>,
        K: Into<String>,
    {
        exports.into_iter().collect()
    }

    /// Build a namespace from names alone, recording `null` for every value.
    pub fn from_names<I, K>(names: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        names
            .into_iter()
            .map(|name| (name, ExportValue::Null))
            .collect()
    }

    /// Property names in enumeration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(String::as_str)
    }

    /// `(name, value)` pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ExportValue)> {
        self.exports.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&ExportValue> {
        self.exports.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.exports.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, ExportValue)> for ModuleNamespace {
    fn from_iter<T: IntoIterator<Item = (K, ExportValue)>>(iter: T) -> Self {
        let mut exports = IndexMap::new();
        for (name, value) in iter {
            exports.insert(name.into(), value);
        }
        Self { exports }
    }
}

/// One source library: the binding it is imported under, where it is
/// imported from, and what it exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryEntry {
    name: String,
    specifier: String,
    module: ModuleNamespace,
}

impl LibraryEntry {
    /// Create an entry imported from `specifier`.
    pub fn new(
        name: impl Into<String>,
        specifier: impl Into<String>,
        module: ModuleNamespace,
    ) -> Self {
        Self {
            name: name.into(),
            specifier: specifier.into(),
            module,
        }
    }

    /// Create an entry whose specifier equals its name.
    pub fn bare(name: impl Into<String>, module: ModuleNamespace) -> Self {
        let name = name.into();
        Self {
            specifier: name.clone(),
            name,
            module,
        }
    }

    /// Import binding, also used to attribute exported symbols.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Module specifier used in the generated `import` statement.
    pub fn specifier(&self) -> &str {
        &self.specifier
    }

    pub fn module(&self) -> &ModuleNamespace {
        &self.module
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn namespace_preserves_insertion_order() {
        let ns = ModuleNamespace::from_exports([
            ("zeta", json!(1)),
            ("alpha", json!(2)),
            ("mid", json!(3)),
        ]);
        assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn repeated_name_keeps_first_position() {
        let ns = ModuleNamespace::from_exports([
            ("a", json!(1)),
            ("b", json!(2)),
            ("a", json!(3)),
        ]);
        assert_eq!(ns.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(ns.get("a"), Some(&json!(3)));
    }

    #[test]
    fn from_names_records_null() {
        let ns = ModuleNamespace::from_names(["x", "y"]);
        assert_eq!(ns.len(), 2);
        assert_eq!(ns.get("x"), Some(&ExportValue::Null));
        assert!(!ns.contains("z"));
    }

    #[test]
    fn bare_entry_uses_name_as_specifier() {
        let entry = LibraryEntry::bare("Alpha", ModuleNamespace::default());
        assert_eq!(entry.specifier(), "Alpha");
        assert!(entry.module().is_empty());
    }
}
