//! # Effect Command

use ngscaffold_core::schematics::{effect, EffectOptions};
use ngscaffold_core::AppResult;

use crate::common::{run, ArtifactArgs, ProjectArgs};

/// Arguments for `ngscaffold effect`.
#[derive(clap::Args, Debug, Clone)]
pub struct EffectArgs {
    #[clap(flatten)]
    pub artifact: ArtifactArgs,

    /// Module to register the effects in, e.g. `app`.
    #[clap(long, short)]
    pub module: Option<String>,

    /// Register with `EffectsModule.forRoot`.
    #[clap(long)]
    pub root: bool,
}

/// Generates an effects class and registers it.
pub fn execute(project: &ProjectArgs, args: &EffectArgs) -> AppResult<()> {
    run(project, &args.artifact, |tree, settings| {
        effect::generate(
            tree,
            &EffectOptions {
                name: args.artifact.name.clone(),
                settings,
                module: args.module.clone(),
                root: args.root,
            },
        )
    })?;
    Ok(())
}
