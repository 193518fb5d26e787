#![deny(missing_docs)]

//! # Schematics
//!
//! Generators for NgRx artifacts. Each one renders new files, optionally
//! patches the owning module, and stages every change in a [`StagedTree`].
//! Nothing is written until the caller commits the tree.
//!
//! [`StagedTree`]: crate::tree::StagedTree

/// Module discovery and the shared patch cycle.
pub mod common;

/// Actions file generator.
pub mod action;

/// Effects generator.
pub mod effect;

/// Entity model, actions and reducer generator.
pub mod entity;

/// Reducer generator.
pub mod reducer;

/// State file generator.
pub mod store;

pub use action::ActionOptions;
pub use common::{artifact_dir, find_module, patch_file};
pub use effect::EffectOptions;
pub use entity::EntityOptions;
pub use reducer::ReducerOptions;
pub use store::StoreOptions;
