#![deny(missing_docs)]

//! # Relative Module References
//!
//! Computes the module specifier one TypeScript file uses to import another.

use std::path::{Component, Path, PathBuf};

/// Computes the extension-less relative module reference from `from_file` to `to_file`.
///
/// The result uses forward slashes and starts with `./` unless it climbs out
/// with `../`. Only the extension is dropped: pass a directory as `to_file` to
/// reference its `index.ts` through the folder.
///
/// ```
/// use ngscaffold_core::paths::relative_module_reference;
///
/// let reference = relative_module_reference(
///     "/app/src/app/store/index.ts",
///     "/app/src/environments/environment.ts",
/// );
/// assert_eq!(reference, "../../environments/environment");
/// ```
pub fn relative_module_reference(from_file: impl AsRef<Path>, to_file: impl AsRef<Path>) -> String {
    let from_dir = from_file.as_ref().parent().unwrap_or_else(|| Path::new(""));
    let to_file = to_file.as_ref();

    let target: PathBuf = to_file.with_extension("");

    let relative = pathdiff::diff_paths(&target, from_dir).unwrap_or(target);
    let joined = relative
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    if joined.is_empty() {
        ".".to_string()
    } else if joined == ".." || joined.starts_with("../") {
        joined
    } else {
        format!("./{joined}")
    }
}
