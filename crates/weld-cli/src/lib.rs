//! Weld CLI - builds one React facade module, its declarations and bundles.
//!
//! A build runs in two halves. The first half has no side effects on disk:
//!
//! 1. load [`config::WeldConfig`] from `weld.config.json`
//! 2. inspect every library ([`inspect`]) into a `LibraryRegistry`
//! 3. aggregate, emit and syntax-check the facade ([`facade`])
//!
//! The second half is the ordered [`pipeline`]: reset the output directory,
//! write the facade, generate declarations, then bundle the debug and
//! production variants ([`variant`]) through the [`collab`] traits.
//!
//! # Modules
//!
//! - [`error`] - error types rendered through miette
//! - [`logger`] - tracing setup
//! - [`ui`] - status lines and formatting

pub mod cli;
pub mod collab;
pub mod commands;
pub mod config;
pub mod error;
pub mod facade;
pub mod inspect;
pub mod logger;
pub mod pipeline;
pub mod process;
pub mod ui;
pub mod variant;

pub use error::{CliError, CollaboratorError, ConfigError, InspectError, Result, ResultExt};
