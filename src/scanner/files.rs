//! Candidate file selection
//!
//! Streaming traversal: files are yielded as they are discovered rather than
//! materialized upfront, so peak memory stays bounded on large trees.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::config::ScanConfig;

fn is_excluded(entry: &DirEntry, config: &ScanConfig) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| config.exclude_segments.contains(name))
        .unwrap_or(false)
}

fn has_scannable_suffix(path: &Path, config: &ScanConfig) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    config.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Enumerate files under `root` whose name ends in one of the configured
/// extensions, pruning any subtree whose segment name is excluded.
///
/// A nonexistent root yields an empty iterator rather than an error:
/// scanning an empty tree is a valid, if useless, outcome. Ordering is the
/// filesystem traversal order — stable within one process run on an
/// unchanged tree, with no cross-run guarantee.
pub fn select_files<'a>(
    root: &Path,
    config: &'a ScanConfig,
) -> impl Iterator<Item = PathBuf> + 'a {
    WalkDir::new(root)
        .into_iter()
        .filter_entry(move |entry| entry.depth() == 0 || !is_excluded(entry, config))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(move |path| has_scannable_suffix(path, config))
}
