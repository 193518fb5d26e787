//! # Reducer Command

use std::path::PathBuf;

use ngscaffold_core::schematics::{reducer, ReducerOptions};
use ngscaffold_core::AppResult;

use crate::common::{run, ArtifactArgs, ProjectArgs};

/// Arguments for `ngscaffold reducer`.
#[derive(clap::Args, Debug, Clone)]
pub struct ReducerArgs {
    #[clap(flatten)]
    pub artifact: ArtifactArgs,

    /// Module to register `StoreModule.forFeature` in.
    #[clap(long, short)]
    pub module: Option<String>,

    /// State file to add the reducer to, relative to the source root.
    #[clap(long)]
    pub reducers: Option<PathBuf>,
}

/// Generates a reducer and wires it into the module and state file.
pub fn execute(project: &ProjectArgs, args: &ReducerArgs) -> AppResult<()> {
    run(project, &args.artifact, |tree, settings| {
        reducer::generate(
            tree,
            &ReducerOptions {
                name: args.artifact.name.clone(),
                settings,
                module: args.module.clone(),
                reducers: args.reducers.clone(),
            },
        )
    })?;
    Ok(())
}
