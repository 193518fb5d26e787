//! `effect`: renders an effects class and registers it with `EffectsModule`.

use crate::config::Settings;
use crate::error::AppResult;
use crate::naming::{classify, dasherize};
use crate::paths::relative_module_reference;
use crate::patcher::{register_in_decorator, ImportSpecifier, Registration};
use crate::schematics::common::{artifact_dir, find_module, patch_file};
use crate::templates;
use crate::tree::StagedTree;

/// Options for the effect generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectOptions {
    /// Artifact name, e.g. `users`.
    pub name: String,
    /// Resolved shared settings.
    pub settings: Settings,
    /// Module to register the effects class in.
    pub module: Option<String>,
    /// Use `EffectsModule.forRoot` instead of `forFeature`.
    pub root: bool,
}

/// Stages the effects files and the module registration.
pub fn generate(tree: &mut StagedTree, options: &EffectOptions) -> AppResult<()> {
    let name = &options.name;
    let stem = format!("{}.effects", dasherize(name));
    let dir = artifact_dir(&options.settings, name, "effects");
    let effects_file = dir.join(format!("{stem}.ts"));
    let class = format!("{}Effects", classify(name));

    if let Some(module) = &options.module {
        let module_path = find_module(tree, &options.settings.source_root, module)?;
        let method = if options.root { "forRoot" } else { "forFeature" };
        let registration = Registration::required(
            format!("EffectsModule.{method}([{class}])"),
            vec![
                ImportSpecifier::named("EffectsModule", "@ngrx/effects"),
                ImportSpecifier::named(
                    class.as_str(),
                    relative_module_reference(&module_path, &effects_file),
                ),
            ],
        );
        patch_file(tree, &module_path, |doc| {
            register_in_decorator(doc, "NgModule", "imports", &[registration])
        })?;
    }

    tree.create(&effects_file, templates::effects(name))?;
    if options.settings.spec {
        tree.create(
            dir.join(format!("{stem}.spec.ts")),
            templates::effects_spec(name, &stem),
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_generate_root_effects() {
        let dir = tempdir().unwrap();
        let app = dir.path().join("src/app");
        fs::create_dir_all(&app).unwrap();
        fs::write(
            app.join("app.module.ts"),
            "import { NgModule } from '@angular/core';\n\n@NgModule({\n  imports: [BrowserModule]\n})\nexport class AppModule {}\n",
        )
        .unwrap();

        let mut tree = StagedTree::new(dir.path());
        let options = EffectOptions {
            name: "app".into(),
            settings: Settings {
                flat: true,
                spec: false,
                ..Settings::default()
            },
            module: Some("app".into()),
            root: true,
        };
        generate(&mut tree, &options).unwrap();

        assert_eq!(
            tree.read(Path::new("src/app/app.module.ts")).unwrap(),
            "import { NgModule } from '@angular/core';
import { EffectsModule } from '@ngrx/effects';
import { AppEffects } from './app.effects';

@NgModule({
  imports: [BrowserModule, EffectsModule.forRoot([AppEffects])]
})
export class AppModule {}
"
        );
        let staged: Vec<&Path> = tree.pending().collect();
        assert_eq!(
            staged,
            vec![
                Path::new("src/app/app.module.ts"),
                Path::new("src/app/app.effects.ts")
            ]
        );
    }

    #[test]
    fn test_module_without_ngmodule_fails() {
        let dir = tempdir().unwrap();
        let app = dir.path().join("src/app");
        fs::create_dir_all(&app).unwrap();
        fs::write(app.join("app.module.ts"), "export class AppModule {}\n").unwrap();

        let mut tree = StagedTree::new(dir.path());
        let options = EffectOptions {
            name: "users".into(),
            settings: Settings::default(),
            module: Some("app".into()),
            root: false,
        };
        let err = generate(&mut tree, &options).unwrap_err();
        assert!(matches!(err, AppError::SiteNotFound { .. }));
        assert_eq!(tree.pending().count(), 0);
    }
}
