#![deny(missing_docs)]

//! # ngscaffold Core
//!
//! Core library for scaffolding NgRx artifacts into Angular projects: a
//! structural TypeScript patching engine plus the generators built on it.

/// Shared error types.
pub mod error;

/// TypeScript parsing into a closed syntax tree.
pub mod parser;

/// Code patching utilities.
pub mod patcher;

/// Relative module references between files.
pub mod paths;

/// Name casing helpers.
pub mod naming;

/// Staged file writes over a project directory.
pub mod tree;

/// Project configuration.
pub mod config;

/// Templates for generated files.
pub mod templates;

/// Artifact generators.
pub mod schematics;

pub use config::{Overrides, ScaffoldConfig, Settings};
pub use error::{AppError, AppResult};
pub use parser::{parse, SourceDocument};
pub use patcher::{
    add_reducer_to_state, append_element, apply_changes, insert_import,
    locate_registration_array, register_in_decorator, ImportSpecifier, InsertionChange, PatchSet,
    Registration, RegistrationLookup, RegistrationSite, StateRegistration,
};
pub use paths::relative_module_reference;
pub use tree::StagedTree;
