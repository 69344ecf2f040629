//! Facade source generation for weld
//!
//! Turns an [`Aggregation`](weld_registry::Aggregation) into the text of a
//! TypeScript module that re-exports every aggregated symbol, and checks
//! that text with the OXC parser before anything else consumes it.
//!
//! # Example
//!
//! ```rust
//! use weld_gen::{emit, validate_syntax};
//! use weld_registry::{LibraryEntry, LibraryRegistry, ModuleNamespace, aggregate};
//!
//! let registry = LibraryRegistry::from_entries([
//!     LibraryEntry::new("React", "react", ModuleNamespace::from_names(["useState", "_internal"])),
//! ])?;
//! let source = emit(&registry, &aggregate(&registry))?;
//!
//! assert!(source.as_str().contains("export const useState = React.useState as typeof React.useState;"));
//! validate_syntax(source.as_str())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod emit;
mod error;
mod format;
mod parser;
mod scan;

pub use emit::{FacadeEmitter, FacadeSource, emit};
pub use error::{GenError, Result};
pub use format::{FormatOptions, IndentStyle, QuoteStyle};
pub use parser::{ParseDiagnostic, ParseOptions, validate_syntax};
pub use scan::{ExportScan, scan_exports};
