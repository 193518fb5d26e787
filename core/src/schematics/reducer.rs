//! `reducer`: renders a reducer, and optionally registers it as a feature in a
//! module and as a slice of a root state file.

use crate::config::Settings;
use crate::error::AppResult;
use crate::naming::{camelize, classify, dasherize};
use crate::paths::relative_module_reference;
use crate::patcher::{
    add_reducer_to_state, register_in_decorator, ImportSpecifier, Registration,
    StateRegistration,
};
use crate::schematics::common::{artifact_dir, find_module, patch_file};
use crate::templates;
use crate::tree::StagedTree;
use std::path::{Path, PathBuf};

/// Options for the reducer generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducerOptions {
    /// Artifact name, e.g. `users`.
    pub name: String,
    /// Resolved shared settings.
    pub settings: Settings,
    /// Module to register `StoreModule.forFeature(...)` in.
    pub module: Option<String>,
    /// Root state file (relative to the source root) to add the slice to.
    pub reducers: Option<PathBuf>,
}

/// Stages the reducer files and the module / state patches.
pub fn generate(tree: &mut StagedTree, options: &ReducerOptions) -> AppResult<()> {
    let name = &options.name;
    let stem = format!("{}.reducer", dasherize(name));
    let dir = artifact_dir(&options.settings, name, "reducers");
    let reducer_file = dir.join(format!("{stem}.ts"));

    register_reducer(
        tree,
        &options.settings,
        name,
        &reducer_file,
        options.module.as_deref(),
        options.reducers.as_deref(),
    )?;

    tree.create(&reducer_file, templates::reducer())?;
    if options.settings.spec {
        tree.create(
            dir.join(format!("{stem}.spec.ts")),
            templates::reducer_spec(name, &stem),
        )?;
    }
    Ok(())
}

/// Registers `reducer_file` as the `StoreModule.forFeature` of `module` and
/// as the `name` slice of the `reducers` state file (relative to the source root).
pub(crate) fn register_reducer(
    tree: &mut StagedTree,
    settings: &Settings,
    name: &str,
    reducer_file: &Path,
    module: Option<&str>,
    reducers: Option<&Path>,
) -> AppResult<()> {
    let namespace = format!("from{}", classify(name));

    if let Some(module) = module {
        let module_path = find_module(tree, &settings.source_root, module)?;
        let reference = relative_module_reference(&module_path, reducer_file);
        let registration = Registration::required(
            format!(
                "StoreModule.forFeature('{}', {namespace}.reducer)",
                camelize(name)
            ),
            vec![
                ImportSpecifier::named("StoreModule", "@ngrx/store"),
                ImportSpecifier::namespace(namespace.as_str(), reference),
            ],
        );
        patch_file(tree, &module_path, |doc| {
            register_in_decorator(doc, "NgModule", "imports", &[registration])
        })?;
    }

    if let Some(reducers) = reducers {
        let state_path = settings.source_root.join(reducers);
        let registration = StateRegistration {
            key: camelize(name),
            namespace,
            module_reference: relative_module_reference(&state_path, reducer_file),
        };
        patch_file(tree, &state_path, |doc| {
            add_reducer_to_state(doc, &registration)
        })?;
    }
    Ok(())
}
