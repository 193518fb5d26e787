//! # Action Command

use ngscaffold_core::schematics::{action, ActionOptions};
use ngscaffold_core::AppResult;

use crate::common::{run, ArtifactArgs, ProjectArgs};

/// Arguments for `ngscaffold action`.
#[derive(clap::Args, Debug, Clone)]
pub struct ActionArgs {
    #[clap(flatten)]
    pub artifact: ArtifactArgs,
}

/// Generates an actions file.
pub fn execute(project: &ProjectArgs, args: &ActionArgs) -> AppResult<()> {
    run(project, &args.artifact, |tree, settings| {
        action::generate(
            tree,
            &ActionOptions {
                name: args.artifact.name.clone(),
                settings,
            },
        )
    })?;
    Ok(())
}
