//! Symbol aggregation: merging library surfaces into one flat namespace.
//!
//! Named exports are curated. Private (`_`-prefixed) and unstable
//! (`unstable`-prefixed) names are dropped, and a name defined by several
//! libraries is attributed to the first one in registry order. Later
//! definitions are shadowed silently; they are recorded in
//! [`Aggregation::shadowed`] for diagnostics only.
//!
//! The default export follows different rules, see [`merge_default`].

use std::collections::hash_map::Entry;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::library::ExportValue;
use crate::registry::LibraryRegistry;

/// Prefix marking private or internal symbols.
pub const PRIVATE_PREFIX: &str = "_";

/// Prefix marking unstable or experimental symbols.
pub const UNSTABLE_PREFIX: &str = "unstable";

/// Why a property was left out of the named exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Exclusion {
    Private,
    Unstable,
}

impl std::fmt::Display for Exclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Private => write!(f, "private"),
            Self::Unstable => write!(f, "unstable"),
        }
    }
}

/// Classify a property name against the exclusion conventions.
///
/// Returns `None` for names that may be exported.
pub fn classify(name: &str) -> Option<Exclusion> {
    if name.starts_with(PRIVATE_PREFIX) {
        Some(Exclusion::Private)
    } else if name.starts_with(UNSTABLE_PREFIX) {
        Some(Exclusion::Unstable)
    } else {
        None
    }
}

/// One named export of the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub symbol_name: String,
    pub owning_library: String,
}

/// A symbol that lost a collision to an earlier library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shadowed {
    pub symbol: String,
    pub library: String,
    pub winner: String,
}

/// A symbol dropped by the naming conventions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excluded {
    pub symbol: String,
    pub library: String,
    pub reason: Exclusion,
}

/// Names already emitted, with the library that declared each one. The
/// first writer of a name wins.
#[derive(Debug, Default)]
pub struct DeclaredSet {
    owners: FxHashMap<String, String>,
}

impl DeclaredSet {
    pub fn contains(&self, name: &str) -> bool {
        self.owners.contains_key(name)
    }

    /// Declare `name` for `owner`. Returns the earlier owner when the name
    /// was already declared, leaving it in place.
    pub fn declare(&mut self, name: &str, owner: &str) -> Option<&str> {
        match self.owners.entry(name.to_string()) {
            Entry::Occupied(entry) => Some(entry.into_mut().as_str()),
            Entry::Vacant(entry) => {
                entry.insert(owner.to_string());
                None
            }
        }
    }

    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.owners.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.owners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

/// Result of [`aggregate`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Aggregation {
    /// Named exports in emission order, unique by symbol name
    pub exports: Vec<ExportRecord>,
    pub shadowed: Vec<Shadowed>,
    pub excluded: Vec<Excluded>,
}

impl Aggregation {
    /// Library that owns the named export `symbol`, if any.
    pub fn owner_of(&self, symbol: &str) -> Option<&str> {
        self.exports
            .iter()
            .find(|record| record.symbol_name == symbol)
            .map(|record| record.owning_library.as_str())
    }

    pub fn symbol_names(&self) -> impl Iterator<Item = &str> {
        self.exports.iter().map(|record| record.symbol_name.as_str())
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }
}

/// Walk the registry and produce the facade's named exports.
///
/// Libraries are visited in registry order and their properties in each
/// library's own enumeration order. The output never contains the same
/// symbol twice.
pub fn aggregate(registry: &LibraryRegistry) -> Aggregation {
    let mut declared = DeclaredSet::default();
    let mut aggregation = Aggregation::default();

    for library in registry {
        for symbol in library.module().keys() {
            if let Some(reason) = classify(symbol) {
                tracing::trace!(symbol, library = library.name(), %reason, "excluded symbol");
                aggregation.excluded.push(Excluded {
                    symbol: symbol.to_string(),
                    library: library.name().to_string(),
                    reason,
                });
                continue;
            }

            if let Some(winner) = declared.declare(symbol, library.name()) {
                let winner = winner.to_string();
                tracing::debug!(symbol, library = library.name(), winner = %winner, "shadowed symbol");
                aggregation.shadowed.push(Shadowed {
                    symbol: symbol.to_string(),
                    library: library.name().to_string(),
                    winner,
                });
                continue;
            }

            aggregation.exports.push(ExportRecord {
                symbol_name: symbol.to_string(),
                owning_library: library.name().to_string(),
            });
        }
    }

    tracing::debug!(
        exports = aggregation.exports.len(),
        shadowed = aggregation.shadowed.len(),
        excluded = aggregation.excluded.len(),
        "aggregated registry"
    );

    aggregation
}

/// A property of the merged default export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefaultMember {
    pub library: String,
    pub value: ExportValue,
}

/// Model of the facade's default export object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DefaultExport {
    members: IndexMap<String, DefaultMember>,
}

impl DefaultExport {
    pub fn get(&self, name: &str) -> Option<&DefaultMember> {
        self.members.get(name)
    }

    /// Library whose value ends up under `name`.
    pub fn owner_of(&self, name: &str) -> Option<&str> {
        self.members.get(name).map(|member| member.library.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.members.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DefaultMember)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Shallow union of every library's full export object.
///
/// This is `{ ...A, ...B, ... }` in registry order: no filtering, a key keeps
/// the position where it first appeared, and its value comes from the last
/// library that defines it.
pub fn merge_default(registry: &LibraryRegistry) -> DefaultExport {
    let mut members = IndexMap::new();
    for library in registry {
        for (name, value) in library.module().iter() {
            members.insert(
                name.to_string(),
                DefaultMember {
                    library: library.name().to_string(),
                    value: value.clone(),
                },
            );
        }
    }
    DefaultExport { members }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::{LibraryEntry, ModuleNamespace};
    use serde_json::json;

    fn registry(libs: &[(&str, &[&str])]) -> LibraryRegistry {
        LibraryRegistry::from_entries(libs.iter().map(|(name, exports)| {
            LibraryEntry::bare(*name, ModuleNamespace::from_names(exports.iter().copied()))
        }))
        .unwrap()
    }

    #[test]
    fn classify_prefixes() {
        assert_eq!(classify("_internal"), Some(Exclusion::Private));
        assert_eq!(classify("__SECRET"), Some(Exclusion::Private));
        assert_eq!(classify("unstable_batchedUpdates"), Some(Exclusion::Unstable));
        assert_eq!(classify("unstableFeatureFlag"), Some(Exclusion::Unstable));
        assert_eq!(classify("Unstable"), None);
        assert_eq!(classify("useState"), None);
    }

    #[test]
    fn records_shadowed_winner() {
        let agg = aggregate(&registry(&[("A", &["Foo"]), ("B", &["Foo", "Bar"])]));
        assert_eq!(agg.owner_of("Foo"), Some("A"));
        assert_eq!(
            agg.shadowed,
            vec![Shadowed {
                symbol: "Foo".into(),
                library: "B".into(),
                winner: "A".into(),
            }]
        );
    }

    #[test]
    fn records_exclusions_per_library() {
        let agg = aggregate(&registry(&[("A", &["_x", "unstable_y", "z"])]));
        let reasons: Vec<_> = agg.excluded.iter().map(|e| e.reason).collect();
        assert_eq!(reasons, vec![Exclusion::Private, Exclusion::Unstable]);
        assert_eq!(agg.symbol_names().collect::<Vec<_>>(), vec!["z"]);
    }

    #[test]
    fn excluded_name_does_not_block_later_libraries() {
        // The filter runs before the declared-set check, so nothing is declared.
        let agg = aggregate(&registry(&[("A", &["_x"]), ("B", &["_x"])]));
        assert!(agg.is_empty());
        assert!(agg.shadowed.is_empty());
    }

    #[test]
    fn default_keeps_first_position_last_value() {
        let reg = LibraryRegistry::from_entries([
            LibraryEntry::bare(
                "A",
                ModuleNamespace::from_exports([("x", json!(1)), ("y", json!(2))]),
            ),
            LibraryEntry::bare(
                "B",
                ModuleNamespace::from_exports([("z", json!(3)), ("x", json!(4))]),
            ),
        ])
        .unwrap();

        let merged = merge_default(&reg);
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["x", "y", "z"]);
        assert_eq!(merged.get("x").unwrap().value, json!(4));
        assert_eq!(merged.owner_of("x"), Some("B"));
    }

    #[test]
    fn empty_registry_aggregates_to_nothing() {
        let reg = LibraryRegistry::new();
        assert!(aggregate(&reg).is_empty());
        assert!(merge_default(&reg).is_empty());
    }

    #[test]
    fn declared_set_first_writer_wins() {
        let mut set = DeclaredSet::default();
        assert_eq!(set.declare("a", "First"), None);
        assert_eq!(set.declare("a", "Second"), Some("First"));
        assert!(set.contains("a"));
        assert_eq!(set.owner_of("a"), Some("First"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn many_collisions_name_the_first_owner() {
        let libs: Vec<String> = (0..50).map(|i| format!("Lib{i}")).collect();
        let reg = LibraryRegistry::from_entries(libs.iter().map(|name| {
            LibraryEntry::bare(name.as_str(), ModuleNamespace::from_names(["shared", name.as_str()]))
        }))
        .unwrap();

        let aggregation = aggregate(&reg);
        assert_eq!(aggregation.owner_of("shared"), Some("Lib0"));
        assert_eq!(aggregation.shadowed.len(), 49);
        assert!(aggregation.shadowed.iter().all(|s| s.winner == "Lib0"));
        assert_eq!(aggregation.len(), 51);
    }
}
