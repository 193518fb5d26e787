#![deny(missing_docs)]

//! # Staged Tree
//!
//! A write-back layer over a project directory. Generators create and
//! overwrite files here; nothing reaches the disk until [`StagedTree::commit`].

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Pending file edits on top of a root directory. Paths are relative to the root.
#[derive(Debug)]
pub struct StagedTree {
    root: PathBuf,
    pending: IndexMap<PathBuf, String>,
}

impl StagedTree {
    /// Creates an empty staging area over `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            pending: IndexMap::new(),
        }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Whether `path` exists in the staged view.
    pub fn exists(&self, path: &Path) -> bool {
        self.pending.contains_key(path) || self.root.join(path).is_file()
    }

    /// Reads `path`, preferring staged content over the disk.
    pub fn read(&self, path: &Path) -> AppResult<String> {
        if let Some(content) = self.pending.get(path) {
            return Ok(content.clone());
        }
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }
        Ok(fs::read_to_string(full)?)
    }

    /// Stages a new file.
    ///
    /// # Errors
    ///
    /// Fails if the file already exists, staged or on disk.
    pub fn create(&mut self, path: impl Into<PathBuf>, content: String) -> AppResult<()> {
        let path = path.into();
        if self.exists(&path) {
            return Err(AppError::General(format!(
                "{} already exists",
                path.display()
            )));
        }
        debug!(path = %path.display(), "Staged new file");
        self.pending.insert(path, content);
        Ok(())
    }

    /// Stages new content for an existing file.
    pub fn overwrite(&mut self, path: &Path, content: String) -> AppResult<()> {
        if !self.exists(path) {
            return Err(AppError::FileNotFound(path.display().to_string()));
        }
        debug!(path = %path.display(), "Staged update");
        self.pending.insert(path.to_path_buf(), content);
        Ok(())
    }

    /// Paths with staged content, in staging order.
    pub fn pending(&self) -> impl Iterator<Item = &Path> {
        self.pending.keys().map(PathBuf::as_path)
    }

    /// Writes every staged file to disk, creating parent directories.
    pub fn commit(self) -> AppResult<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.pending.len());
        for (path, content) in self.pending {
            let full = self.root.join(&path);
            if let Some(parent) = full.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&full, content)?;
            info!(path = %path.display(), "Wrote file");
            written.push(path);
        }
        Ok(written)
    }
}
