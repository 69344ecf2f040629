//! Library registry and symbol aggregation for weld facades
//!
//! A facade re-exports the public surface of several libraries from one
//! module. This crate models the inputs and computes what the facade
//! exports; it performs no I/O.
//!
//! # Named exports versus the default export
//!
//! - [`aggregate`] walks the registry in order and keeps the first
//!   definition of every public name. Names starting with `_` or
//!   `unstable` are dropped.
//! - [`merge_default`] models `{ ...A, ...B }`: every property of every
//!   library, later libraries overriding earlier ones.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use weld_registry::{LibraryEntry, LibraryRegistry, ModuleNamespace, aggregate, merge_default};
//!
//! let registry = LibraryRegistry::from_entries([
//!     LibraryEntry::bare("Alpha", ModuleNamespace::from_exports([("a", json!(1)), ("_hidden", json!(2))])),
//!     LibraryEntry::bare("Beta", ModuleNamespace::from_exports([("a", json!(3)), ("b", json!(4))])),
//! ])?;
//!
//! let named = aggregate(&registry);
//! assert_eq!(named.owner_of("a"), Some("Alpha"));
//! assert_eq!(named.owner_of("b"), Some("Beta"));
//!
//! let default = merge_default(&registry);
//! assert_eq!(default.get("a").unwrap().value, json!(3));
//! # Ok::<(), weld_registry::RegistryError>(())
//! ```

mod aggregate;
mod error;
mod ident;
mod library;
mod registry;

pub use aggregate::{
    Aggregation, DeclaredSet, DefaultExport, DefaultMember, Excluded, Exclusion, ExportRecord,
    PRIVATE_PREFIX, Shadowed, UNSTABLE_PREFIX, aggregate, classify, merge_default,
};
pub use error::{RegistryError, Result};
pub use ident::{is_reserved_word, is_valid_identifier};
pub use library::{ExportValue, LibraryEntry, ModuleNamespace};
pub use registry::LibraryRegistry;
