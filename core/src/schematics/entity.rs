//! `entity`: renders an entity model, its adapter actions and an entity
//! reducer, then wires the reducer like the `reducer` generator does.

use crate::config::Settings;
use crate::error::AppResult;
use crate::naming::dasherize;
use crate::paths::relative_module_reference;
use crate::schematics::common::artifact_dir;
use crate::schematics::reducer::register_reducer;
use crate::templates;
use crate::tree::StagedTree;
use std::path::PathBuf;

/// Options for the entity generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityOptions {
    /// Entity name, singular, e.g. `user`.
    pub name: String,
    /// Resolved shared settings.
    pub settings: Settings,
    /// Module to register `StoreModule.forFeature(...)` in.
    pub module: Option<String>,
    /// Root state file (relative to the source root) to add the slice to.
    pub reducers: Option<PathBuf>,
}

/// Stages the model, actions and reducer files and the module / state patches.
///
/// With `group` set the files land in `actions/`, `models/` and `reducers/`
/// folders and import each other across them.
pub fn generate(tree: &mut StagedTree, options: &EntityOptions) -> AppResult<()> {
    let name = &options.name;
    let settings = &options.settings;
    let base = dasherize(name);

    let actions_file = artifact_dir(settings, name, "actions").join(format!("{base}.actions.ts"));
    let model_file = artifact_dir(settings, name, "models").join(format!("{base}.model.ts"));
    let reducer_dir = artifact_dir(settings, name, "reducers");
    let stem = format!("{base}.reducer");
    let reducer_file = reducer_dir.join(format!("{stem}.ts"));

    register_reducer(
        tree,
        settings,
        name,
        &reducer_file,
        options.module.as_deref(),
        options.reducers.as_deref(),
    )?;

    let actions = templates::entity_actions(
        name,
        &relative_module_reference(&actions_file, &model_file),
    );
    let reducer = templates::entity_reducer(
        name,
        &relative_module_reference(&reducer_file, &model_file),
        &relative_module_reference(&reducer_file, &actions_file),
    );

    tree.create(&actions_file, actions)?;
    tree.create(&model_file, templates::entity_model(name))?;
    tree.create(&reducer_file, reducer)?;
    if settings.spec {
        tree.create(
            reducer_dir.join(format!("{stem}.spec.ts")),
            templates::reducer_spec(name, &stem),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn project() -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let app = dir.path().join("src/app");
        fs::create_dir_all(app.join("reducers")).unwrap();
        fs::write(
            app.join("app.module.ts"),
            "import { NgModule } from '@angular/core';\n\n@NgModule({\n  imports: [BrowserModule]\n})\nexport class AppModule {}\n",
        )
        .unwrap();
        fs::write(
            app.join("reducers/index.ts"),
            templates::store_index("State", "../../environments/environment"),
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_grouped_entity_registers_everywhere() {
        let dir = project();
        let mut tree = StagedTree::new(dir.path());
        let options = EntityOptions {
            name: "user".into(),
            settings: Settings {
                group: true,
                ..Settings::default()
            },
            module: Some("app".into()),
            reducers: Some(PathBuf::from("reducers/index.ts")),
        };
        generate(&mut tree, &options).unwrap();

        let staged: Vec<&Path> = tree.pending().collect();
        assert_eq!(
            staged,
            vec![
                Path::new("src/app/app.module.ts"),
                Path::new("src/app/reducers/index.ts"),
                Path::new("src/app/user/actions/user.actions.ts"),
                Path::new("src/app/user/models/user.model.ts"),
                Path::new("src/app/user/reducers/user.reducer.ts"),
                Path::new("src/app/user/reducers/user.reducer.spec.ts"),
            ]
        );

        let module = tree.read(Path::new("src/app/app.module.ts")).unwrap();
        assert!(module.contains("import * as fromUser from './user/reducers/user.reducer';"));
        assert!(module.contains("imports: [BrowserModule, StoreModule.forFeature('user', fromUser.reducer)]"));

        let state = tree.read(Path::new("src/app/reducers/index.ts")).unwrap();
        assert!(state.contains("import * as fromUser from '../user/reducers/user.reducer';"));
        assert!(state.contains("user: fromUser.State;"));

        let reducer = tree
            .read(Path::new("src/app/user/reducers/user.reducer.ts"))
            .unwrap();
        assert!(reducer.contains("import { User } from '../models/user.model';"));
        assert!(reducer.contains("import { UserActions, UserActionTypes } from '../actions/user.actions';"));
    }

    #[test]
    fn test_flat_entity_without_registration() {
        let dir = project();
        let mut tree = StagedTree::new(dir.path());
        let options = EntityOptions {
            name: "user".into(),
            settings: Settings {
                flat: true,
                spec: false,
                ..Settings::default()
            },
            module: None,
            reducers: None,
        };
        generate(&mut tree, &options).unwrap();

        assert_eq!(tree.pending().count(), 3);
        let actions = tree.read(Path::new("src/app/user.actions.ts")).unwrap();
        assert!(actions.contains("import { User } from './user.model';"));
    }
}
