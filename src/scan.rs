//! Directory listing collaborator.
//!
//! The core consumes a flat enumeration of filesystem entries produced
//! behind the `DirectoryLister` seam; all blocking I/O happens here.
//! Enumeration order is unspecified and carries no meaning downstream.

use crate::error::PageMapError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A single filesystem entry beneath the scan root. Transient; not retained
/// past map construction.
#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Walker behavior for the production lister.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    pub follow_symlinks: bool,
    pub max_depth: Option<usize>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            follow_symlinks: false,
            max_depth: None,
        }
    }
}

/// Enumerates every filesystem entry reachable recursively beneath a root
/// directory, each tagged file-or-directory. I/O failures are fatal to the
/// whole call.
pub trait DirectoryLister {
    fn list(&self, dir: &Path) -> Result<Vec<FileEntry>, PageMapError>;
}

/// Production lister backed by `walkdir`.
#[derive(Debug, Default)]
pub struct WalkdirLister {
    config: WalkerConfig,
}

impl WalkdirLister {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: WalkerConfig) -> Self {
        Self { config }
    }
}

impl DirectoryLister for WalkdirLister {
    fn list(&self, dir: &Path) -> Result<Vec<FileEntry>, PageMapError> {
        let mut walk = WalkDir::new(dir)
            .follow_links(self.config.follow_symlinks)
            .min_depth(1);
        if let Some(depth) = self.config.max_depth {
            walk = walk.max_depth(depth);
        }

        let mut entries = Vec::new();
        for entry in walk {
            let entry = entry?;
            entries.push(FileEntry {
                path: entry.path().to_path_buf(),
                is_dir: entry.file_type().is_dir(),
            });
        }
        Ok(entries)
    }
}
