//! # Local Path Resolver

use std::path::{Path, PathBuf};

use crate::errors::{CTResult, ChartokError};

/// A trait for resolving configured paths to local files.
pub trait PathResolver {
    /// Resolve `path` to an existing local path.
    ///
    /// ## Errors
    /// [`ChartokError::SymbolFileNotFound`] if the path does not resolve.
    fn resolve_local_path(
        &self,
        path: &str,
    ) -> CTResult<PathBuf>;
}

/// Resolves paths against the local filesystem.
///
/// Resolution Order:
/// 1. Expand `~` and `$VAR` / `${VAR}` references.
/// 2. Join relative paths onto `base_dir`, if present.
/// 3. Require the result to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalPathResolver {
    /// Base directory for relative paths.
    ///
    /// When `None`, relative paths are relative to the working directory.
    pub base_dir: Option<PathBuf>,
}

impl LocalPathResolver {
    /// Create a resolver rooted at `base_dir`.
    pub fn with_base_dir<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: Some(base_dir.as_ref().to_path_buf()),
        }
    }

    /// Expand and join `path` without checking that it exists.
    pub fn expand(
        &self,
        path: &str,
    ) -> CTResult<PathBuf> {
        let expanded = shellexpand::full(path)
            .map_err(|e| ChartokError::PathExpansion(e.to_string()))?;
        let expanded = PathBuf::from(expanded.into_owned());

        Ok(match &self.base_dir {
            Some(base) if expanded.is_relative() => base.join(expanded),
            _ => expanded,
        })
    }
}

impl PathResolver for LocalPathResolver {
    fn resolve_local_path(
        &self,
        path: &str,
    ) -> CTResult<PathBuf> {
        let local = self.expand(path)?;
        log::trace!("resolved {path:?} to {}", local.display());

        if !local.exists() {
            return Err(ChartokError::SymbolFileNotFound { path: local });
        }
        Ok(local)
    }
}
