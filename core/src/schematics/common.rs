//! Helpers shared by the generators: module discovery, artifact folders and
//! the read-parse-patch-stage cycle for one existing file.

use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::naming::dasherize;
use crate::parser::{parse, SourceDocument};
use crate::patcher::PatchSet;
use crate::tree::StagedTree;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolves the module file to patch.
///
/// `module` may be a project-relative path to an existing file, or a name
/// resolved against the source root as `<m>`, `<m>.ts`, `<m>.module.ts` or
/// `<m>/<basename>.module.ts`. Routing modules are never patched.
pub fn find_module(tree: &StagedTree, source_root: &Path, module: &str) -> AppResult<PathBuf> {
    let direct = PathBuf::from(module);
    let base = source_root.join(module);
    let base_name = base
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let candidates = [
        direct,
        base.clone(),
        append(&base, ".ts"),
        append(&base, ".module.ts"),
        base.join(format!("{base_name}.module.ts")),
    ];

    let found = candidates
        .into_iter()
        .find(|p| p.extension().is_some_and(|e| e == "ts") && tree.exists(p))
        .ok_or_else(|| AppError::FileNotFound(format!("module '{module}'")))?;

    if found.to_string_lossy().ends_with("-routing.module.ts") {
        return Err(AppError::General(format!(
            "Refusing to register into routing module {}",
            found.display()
        )));
    }
    Ok(found)
}

fn append(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

/// Directory for an artifact: `<root>/[<name>/][<group>/]`.
pub fn artifact_dir(settings: &Settings, name: &str, group_folder: &str) -> PathBuf {
    let mut dir = settings.source_root.clone();
    if !settings.flat {
        dir.push(dasherize(name));
    }
    if settings.group {
        dir.push(group_folder);
    }
    dir
}

/// Reads, parses and patches `path`, staging the result if anything changed.
///
/// `compute` sees an immutable snapshot and returns the whole patch; on error
/// nothing is staged for the file.
pub fn patch_file<F>(tree: &mut StagedTree, path: &Path, compute: F) -> AppResult<bool>
where
    F: FnOnce(&SourceDocument) -> AppResult<PatchSet>,
{
    let text = tree.read(path)?;
    let doc = parse(&path.to_string_lossy(), &text)?;
    let patch = compute(&doc)?;

    if patch.is_empty() {
        info!(path = %path.display(), "Already up to date");
        return Ok(false);
    }

    let updated = patch.apply(&doc)?;
    info!(
        path = %path.display(),
        insertions = patch.len(),
        "Patched file"
    );
    tree.overwrite(path, updated)?;
    Ok(true)
}
