//! `store`: renders a state file (`<statePath>/index.ts`) and registers the
//! store in a module, either as the application root or as a feature.

use crate::config::Settings;
use crate::error::AppResult;
use crate::naming::{camelize, classify};
use crate::paths::relative_module_reference;
use crate::patcher::{register_in_decorator, ImportSpecifier, Registration};
use crate::schematics::common::{find_module, patch_file};
use crate::templates;
use crate::tree::StagedTree;
use std::path::{Path, PathBuf};

/// Options for the store generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    /// Feature name; used for the `forFeature` key and namespace.
    pub name: String,
    /// Resolved shared settings.
    pub settings: Settings,
    /// Module to register the store in.
    pub module: Option<String>,
    /// Register with `forRoot` plus the devtools instrumentation.
    pub root: bool,
    /// State folder relative to the source root.
    pub state_path: PathBuf,
    /// Name of the state interface.
    pub state_interface: String,
}

impl StoreOptions {
    /// Options with the default `reducers` folder and `State` interface.
    pub fn new(name: impl Into<String>, settings: Settings) -> Self {
        Self {
            name: name.into(),
            settings,
            module: None,
            root: false,
            state_path: PathBuf::from("reducers"),
            state_interface: "State".to_string(),
        }
    }

    fn interface_name(&self) -> String {
        if self.root && self.state_interface != "State" {
            classify(&self.state_interface)
        } else {
            self.state_interface.clone()
        }
    }
}

/// `src/app` -> `src/environments/environment.ts`
fn environments_file(source_root: &Path) -> PathBuf {
    source_root
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join("environments")
        .join("environment.ts")
}

/// Stages the state file and the module registration.
pub fn generate(tree: &mut StagedTree, options: &StoreOptions) -> AppResult<()> {
    let source_root = &options.settings.source_root;
    let state_dir = source_root.join(&options.state_path);
    let state_file = state_dir.join("index.ts");
    let environments = environments_file(source_root);

    if let Some(module) = &options.module {
        let module_path = find_module(tree, source_root, module)?;
        let state_reference = relative_module_reference(&module_path, &state_dir);

        let registrations = if options.root {
            vec![
                Registration::required(
                    "StoreModule.forRoot(reducers, { metaReducers })",
                    vec![
                        ImportSpecifier::named("StoreModule", "@ngrx/store"),
                        ImportSpecifier::named("reducers, metaReducers", state_reference),
                    ],
                ),
                Registration::optional(
                    "!environment.production ? StoreDevtoolsModule.instrument() : []",
                    vec![
                        ImportSpecifier::named("StoreDevtoolsModule", "@ngrx/store-devtools"),
                        ImportSpecifier::named(
                            "environment",
                            relative_module_reference(&module_path, &environments),
                        ),
                    ],
                ),
            ]
        } else {
            let namespace = format!("from{}", classify(&options.name));
            vec![Registration::required(
                format!(
                    "StoreModule.forFeature('{}', {namespace}.reducers, {{ metaReducers: {namespace}.metaReducers }})",
                    camelize(&options.name)
                ),
                vec![
                    ImportSpecifier::named("StoreModule", "@ngrx/store"),
                    ImportSpecifier::namespace(namespace.as_str(), state_reference),
                ],
            )]
        };

        patch_file(tree, &module_path, |doc| {
            register_in_decorator(doc, "NgModule", "imports", &registrations)
        })?;
    }

    let content = templates::store_index(
        &options.interface_name(),
        &relative_module_reference(&state_file, &environments),
    );
    tree.create(state_file, content)
}
