//! `action`: renders an actions file. Touches no existing file.

use crate::config::Settings;
use crate::error::AppResult;
use crate::naming::dasherize;
use crate::schematics::common::artifact_dir;
use crate::templates;
use crate::tree::StagedTree;

/// Options for the action generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOptions {
    /// Artifact name, e.g. `user-profile`.
    pub name: String,
    /// Resolved shared settings.
    pub settings: Settings,
}

/// Stages `<name>.actions.ts`.
pub fn generate(tree: &mut StagedTree, options: &ActionOptions) -> AppResult<()> {
    let dir = artifact_dir(&options.settings, &options.name, "actions");
    let file = dir.join(format!("{}.actions.ts", dasherize(&options.name)));
    tree.create(file, templates::actions(&options.name))
}
