#![deny(missing_docs)]

//! # Configuration
//!
//! Project-level defaults read from `ngscaffold.yaml`, merged with command-line
//! overrides. Precedence, highest first: flag, config file, built-in default.

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default config file name, looked up in the project root.
pub const CONFIG_FILE: &str = "ngscaffold.yaml";

/// Contents of the config file. Missing keys take the built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Directory generated files are placed under, relative to the project root.
    pub source_root: PathBuf,
    /// Generate `.spec.ts` files.
    pub spec: bool,
    /// Place files directly in the target directory instead of a `<name>/` folder.
    pub flat: bool,
    /// Group files into `actions/`, `reducers/`, `effects/` folders.
    pub group: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("src/app"),
            spec: true,
            flat: false,
            group: false,
        }
    }
}

impl ScaffoldConfig {
    /// Loads `explicit` if given, else `<project_root>/ngscaffold.yaml` if it
    /// exists, else the defaults.
    ///
    /// # Errors
    ///
    /// A given `explicit` file that is missing, or any file that does not parse.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> AppResult<Self> {
        let path = match explicit {
            Some(path) if !path.is_file() => {
                return Err(AppError::FileNotFound(path.display().to_string()))
            }
            Some(path) => path.to_path_buf(),
            None => {
                let default = project_root.join(CONFIG_FILE);
                if !default.is_file() {
                    debug!("No config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parses YAML config content.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Applies command-line overrides.
    pub fn resolve(&self, overrides: &Overrides) -> Settings {
        Settings {
            source_root: overrides
                .path
                .clone()
                .unwrap_or_else(|| self.source_root.clone()),
            spec: overrides.spec.unwrap_or(self.spec),
            flat: overrides.flat.unwrap_or(self.flat),
            group: overrides.group.unwrap_or(self.group),
        }
    }
}

/// Values given on the command line; `None` defers to the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// `--path`
    pub path: Option<PathBuf>,
    /// `--spec` / `--no-spec`
    pub spec: Option<bool>,
    /// `--flat`
    pub flat: Option<bool>,
    /// `--group`
    pub group: Option<bool>,
}

/// Resolved settings shared by every generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory generated files are placed under.
    pub source_root: PathBuf,
    /// Generate `.spec.ts` files.
    pub spec: bool,
    /// Skip the `<name>/` folder.
    pub flat: bool,
    /// Use `actions/`, `reducers/`, `effects/` group folders.
    pub group: bool,
}

impl Default for Settings {
    fn default() -> Self {
        ScaffoldConfig::default().resolve(&Overrides::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempdir().unwrap();
        let config = ScaffoldConfig::load(dir.path(), None).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
    }

    #[test]
    fn test_partial_file() {
        let config = ScaffoldConfig::from_yaml("source_root: projects/shop/src/app\nspec: false\n")
            .unwrap();
        assert_eq!(config.source_root, PathBuf::from("projects/shop/src/app"));
        assert!(!config.spec);
        assert!(!config.flat);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "spek: true\n").unwrap();
        let err = ScaffoldConfig::load(dir.path(), None).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_missing_explicit_file() {
        let dir = tempdir().unwrap();
        let err = ScaffoldConfig::load(dir.path(), Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, AppError::FileNotFound(_)));
    }

    #[test]
    fn test_flags_override_file() {
        let config = ScaffoldConfig::from_yaml("flat: true\ngroup: true\n").unwrap();
        let settings = config.resolve(&Overrides {
            flat: Some(false),
            ..Default::default()
        });
        assert!(!settings.flat);
        assert!(settings.group);
        assert_eq!(settings.source_root, PathBuf::from("src/app"));
    }
}
