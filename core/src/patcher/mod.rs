#![deny(missing_docs)]

//! # Code Patching
//!
//! Computes insertion-only patches for existing TypeScript files based on AST analysis.
//! Every patch is a list of insertions at offsets into the unmodified original text,
//! applied in one pass.
//!
//! - **changes**: Insertion values, `PatchSet`, and the applier.
//! - **files**: File-level patching (imports).
//! - **decorators**: Locating registration arrays in decorator configuration.
//! - **arrays** / **objects**: Appending elements, properties and interface members.
//! - **workflows**: High-level patching recipes (module registration, state wiring).

pub(crate) mod common;

/// Insertion changes and the patch applier.
pub mod changes;

/// Array literal augmentation.
pub mod arrays;

/// Decorator site lookup.
pub mod decorators;

/// File-level patching operations (imports).
pub mod files;

/// Object literal and interface augmentation.
pub mod objects;

/// High-level patching workflows.
pub mod workflows;

pub use arrays::append_element;
pub use changes::{apply_changes, ChangeKind, InsertionChange, PatchSet};
pub use decorators::{locate_registration_array, RegistrationLookup, RegistrationSite};
pub use files::{insert_import, ImportSpecifier};
pub use objects::{append_interface_member, append_property};
pub use workflows::{add_reducer_to_state, register_in_decorator, Registration, StateRegistration};
