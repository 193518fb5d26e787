#![deny(missing_docs)]

//! # Shared Command Plumbing
//!
//! Arguments every generator accepts, and the load-config / generate / commit
//! cycle they all run through.

use std::path::{Path, PathBuf};

use ngscaffold_core::{AppResult, Overrides, ScaffoldConfig, Settings, StagedTree};
use tracing::info;

/// Project-level flags, shared by all subcommands.
#[derive(clap::Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Root directory of the Angular project.
    #[clap(long, global = true, default_value = ".", env = "NGSCAFFOLD_PROJECT")]
    pub project: PathBuf,

    /// Config file (defaults to `<project>/ngscaffold.yaml` when present).
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Report the files that would be written without touching the disk.
    #[clap(long, global = true)]
    pub dry_run: bool,
}

/// Flags shared by every artifact generator.
#[derive(clap::Args, Debug, Clone)]
pub struct ArtifactArgs {
    /// Name of the artifact, e.g. `users`.
    pub name: String,

    /// Directory to generate into, relative to the project root.
    #[clap(long)]
    pub path: Option<PathBuf>,

    /// Generate spec files.
    #[clap(long, overrides_with = "no_spec")]
    pub spec: bool,

    /// Do not generate spec files.
    #[clap(long = "no-spec", overrides_with = "spec")]
    pub no_spec: bool,

    /// Do not create a folder named after the artifact.
    #[clap(long, overrides_with = "no_flat")]
    pub flat: bool,

    /// Create a folder named after the artifact.
    #[clap(long = "no-flat", overrides_with = "flat")]
    pub no_flat: bool,

    /// Group files into `actions/`, `reducers/`, `effects/` folders.
    #[clap(long, overrides_with = "no_group")]
    pub group: bool,

    /// Do not use group folders.
    #[clap(long = "no-group", overrides_with = "group")]
    pub no_group: bool,
}

/// `--x` / `--no-x` pair: `None` when neither was given.
fn switch(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (_, true) => Some(false),
        (true, false) => Some(true),
        (false, false) => None,
    }
}

impl ArtifactArgs {
    /// Flags given on the command line; unset ones defer to the config file.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            path: self.path.clone(),
            spec: switch(self.spec, self.no_spec),
            flat: switch(self.flat, self.no_flat),
            group: switch(self.group, self.no_group),
        }
    }
}

/// Resolves settings, runs `generate` against a staged tree and commits it.
///
/// Returns the paths written, or that would be written on a dry run.
pub fn run<F>(project: &ProjectArgs, args: &ArtifactArgs, generate: F) -> AppResult<Vec<PathBuf>>
where
    F: FnOnce(&mut StagedTree, Settings) -> AppResult<()>,
{
    let config = ScaffoldConfig::load(&project.project, project.config.as_deref())?;
    let settings = config.resolve(&args.overrides());

    let mut tree = StagedTree::new(&project.project);
    generate(&mut tree, settings)?;

    if project.dry_run {
        let paths: Vec<PathBuf> = tree.pending().map(Path::to_path_buf).collect();
        for path in &paths {
            info!(path = %path.display(), "Would write");
        }
        return Ok(paths);
    }
    tree.commit()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn artifact(name: &str) -> ArtifactArgs {
        ArtifactArgs {
            name: name.into(),
            path: None,
            spec: false,
            no_spec: false,
            flat: false,
            no_flat: false,
            group: false,
            no_group: false,
        }
    }

    #[test]
    fn test_overrides() {
        assert_eq!(artifact("users").overrides().spec, None);
        let overrides = ArtifactArgs {
            spec: true,
            group: true,
            ..artifact("users")
        }
        .overrides();
        assert_eq!(overrides.spec, Some(true));
        assert_eq!(overrides.flat, None);
        assert_eq!(overrides.group, Some(true));
        let overrides = ArtifactArgs {
            no_spec: true,
            ..artifact("users")
        }
        .overrides();
        assert_eq!(overrides.spec, Some(false));
    }

    #[test]
    fn test_no_flag_beats_config_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("ngscaffold.yaml"), "flat: true\ngroup: true\n").unwrap();
        let config = ScaffoldConfig::load(dir.path(), None).unwrap();

        let settings = config.resolve(&artifact("users").overrides());
        assert!(settings.flat && settings.group);

        let args = ArtifactArgs {
            no_flat: true,
            no_group: true,
            ..artifact("users")
        };
        let settings = config.resolve(&args.overrides());
        assert!(!settings.flat);
        assert!(!settings.group);
    }
}
