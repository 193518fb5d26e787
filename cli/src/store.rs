//! # Store Command

use std::path::PathBuf;

use ngscaffold_core::schematics::{store, StoreOptions};
use ngscaffold_core::AppResult;

use crate::common::{run, ArtifactArgs, ProjectArgs};

/// Arguments for `ngscaffold store`.
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
    #[clap(flatten)]
    pub artifact: ArtifactArgs,

    /// Module to register the store in.
    #[clap(long, short)]
    pub module: Option<String>,

    /// Register as the root store, with devtools instrumentation.
    #[clap(long)]
    pub root: bool,

    /// Folder of the state file, relative to the source root.
    #[clap(long, default_value = "reducers")]
    pub state_path: PathBuf,

    /// Name of the state interface.
    #[clap(long, default_value = "State")]
    pub state_interface: String,
}

/// Generates a state file and registers the store.
pub fn execute(project: &ProjectArgs, args: &StoreArgs) -> AppResult<()> {
    run(project, &args.artifact, |tree, settings| {
        store::generate(
            tree,
            &StoreOptions {
                module: args.module.clone(),
                root: args.root,
                state_path: args.state_path.clone(),
                state_interface: args.state_interface.clone(),
                ..StoreOptions::new(args.artifact.name.as_str(), settings)
            },
        )
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_dry_run_leaves_disk_untouched() {
        let dir = tempdir().unwrap();
        let app = dir.path().join("src/app");
        fs::create_dir_all(&app).unwrap();
        let module = "@NgModule({ imports: [] })\nexport class AppModule {}\n";
        fs::write(app.join("app.module.ts"), module).unwrap();

        let project = ProjectArgs {
            project: dir.path().to_path_buf(),
            config: None,
            dry_run: true,
        };
        let args = StoreArgs {
            artifact: ArtifactArgs {
                name: "app".into(),
                path: None,
                spec: false,
                no_spec: false,
                flat: false,
                no_flat: false,
                group: false,
                no_group: false,
            },
            module: Some("app".into()),
            root: true,
            state_path: PathBuf::from("reducers"),
            state_interface: "State".into(),
        };
        execute(&project, &args).unwrap();

        assert_eq!(fs::read_to_string(app.join("app.module.ts")).unwrap(), module);
        assert!(!app.join("reducers").exists());
    }

    #[test]
    fn test_config_file_source_root() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ngscaffold.yaml"),
            "source_root: projects/shop/src/app\n",
        )
        .unwrap();

        let project = ProjectArgs {
            project: dir.path().to_path_buf(),
            config: None,
            dry_run: false,
        };
        let args = StoreArgs {
            artifact: ArtifactArgs {
                name: "shop".into(),
                path: None,
                spec: false,
                no_spec: false,
                flat: false,
                no_flat: false,
                group: false,
                no_group: false,
            },
            module: None,
            root: false,
            state_path: PathBuf::from("state"),
            state_interface: "State".into(),
        };
        execute(&project, &args).unwrap();

        let index = fs::read_to_string(dir.path().join("projects/shop/src/app/state/index.ts")).unwrap();
        assert!(index.contains("from '../../environments/environment';"));
    }
}
