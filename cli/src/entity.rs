//! # Entity Command

use std::path::PathBuf;

use ngscaffold_core::schematics::{entity, EntityOptions};
use ngscaffold_core::AppResult;

use crate::common::{run, ArtifactArgs, ProjectArgs};

/// Arguments for `ngscaffold entity`.
#[derive(clap::Args, Debug, Clone)]
pub struct EntityArgs {
    #[clap(flatten)]
    pub artifact: ArtifactArgs,

    /// Module to register `StoreModule.forFeature` in.
    #[clap(long, short)]
    pub module: Option<String>,

    /// State file to add the entity reducer to, relative to the source root.
    #[clap(long)]
    pub reducers: Option<PathBuf>,
}

/// Generates an entity model, actions and reducer and wires the reducer.
pub fn execute(project: &ProjectArgs, args: &EntityArgs) -> AppResult<()> {
    run(project, &args.artifact, |tree, settings| {
        entity::generate(
            tree,
            &EntityOptions {
                name: args.artifact.name.clone(),
                settings,
                module: args.module.clone(),
                reducers: args.reducers.clone(),
            },
        )
    })?;
    Ok(())
}
