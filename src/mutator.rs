//! Tree mutator: one depth-first traversal applying content and name substitution.
//!
//! The walk rewrites file contents in place and renames files as it goes, but
//! directory renames are deferred: matches are collected during the walk and
//! applied only after the full subtree has been processed, so files beneath a
//! to-be-renamed directory still get their contents edited under the original
//! path. Skip-set matches prune a directory before its name is ever inspected
//! for a rename.

use crate::error::MutateError;
use crate::replace::ReplacementPair;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Directory names excluded from traversal and mutation.
///
/// Names are matched against each directory entry's base name, never against
/// full paths. Matching is exact and case-sensitive by default; the
/// case-insensitive variant compares ASCII-insensitively.
#[derive(Debug, Clone)]
pub struct SkipSet {
    names: Vec<String>,
    ignore_case: bool,
}

impl SkipSet {
    pub fn new(names: Vec<String>, ignore_case: bool) -> Self {
        Self { names, ignore_case }
    }

    pub fn contains(&self, name: &str) -> bool {
        if self.ignore_case {
            self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
        } else {
            self.names.iter().any(|n| n == name)
        }
    }
}

/// Tree mutator configuration.
#[derive(Debug, Clone)]
pub struct MutatorConfig {
    /// Abort threshold for the running file counter.
    pub max_files: usize,
    /// Directory names to exclude from traversal (e.g. ".git").
    pub skip_dirs: Vec<String>,
    /// Match skip names case-insensitively (default: exact match).
    pub skip_ignore_case: bool,
}

impl Default for MutatorConfig {
    fn default() -> Self {
        Self {
            max_files: 100,
            skip_dirs: vec![".git".to_string()],
            skip_ignore_case: false,
        }
    }
}

/// Tree mutator
pub struct TreeMutator {
    root: PathBuf,
    config: MutatorConfig,
}

impl TreeMutator {
    /// Create a new mutator for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: MutatorConfig::default(),
        }
    }

    /// Create a mutator with custom configuration
    pub fn with_config(root: PathBuf, config: MutatorConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and apply the replacement pair to file contents and to
    /// file and directory names. Returns the number of files processed.
    ///
    /// The root must contain a `.git` entry; this is checked before any
    /// filesystem mutation. On any error the walk stops immediately and
    /// mutations already applied are retained.
    pub fn mutate(&self, pair: &ReplacementPair) -> Result<usize, MutateError> {
        if !self.root.join(".git").exists() {
            return Err(MutateError::NotVersionControlled(self.root.clone()));
        }

        let skip = SkipSet::new(self.config.skip_dirs.clone(), self.config.skip_ignore_case);
        let mut count = 0usize;
        let mut dir_renames: Vec<(PathBuf, String)> = Vec::new();

        let mut walker = WalkDir::new(&self.root).follow_links(false).into_iter();
        while let Some(entry) = walker.next() {
            let entry = entry?;
            let path = entry.path();

            if entry.file_type().is_dir() {
                let name = entry.file_name().to_string_lossy().into_owned();
                if skip.contains(&name) {
                    debug!(dir = %path.display(), "skipping directory");
                    walker.skip_current_dir();
                    continue;
                }
                if path != self.root && pair.matches(&name) {
                    // Deferred: the subtree below is still walked and edited
                    // under the original path; the rename lands in phase two.
                    dir_renames.push((path.to_path_buf(), pair.apply(&name)));
                }
            } else {
                count += 1;
                if count > self.config.max_files {
                    return Err(MutateError::LimitExceeded {
                        limit: self.config.max_files,
                    });
                }
                self.process_file(path, pair)?;
            }
        }

        self.apply_dir_renames(dir_renames)?;

        info!(files = count, root = %self.root.display(), "tree mutation complete");
        Ok(count)
    }

    /// Rewrite a file's contents in place, then rename it when its base name
    /// contains the old string. The two substitutions are independent.
    fn process_file(&self, path: &Path, pair: &ReplacementPair) -> Result<(), MutateError> {
        let data = fs::read(path)?;
        let rewritten = pair.apply_bytes(&data);
        fs::write(path, &rewritten)?;

        let name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            None => return Ok(()),
        };
        if pair.matches(&name) {
            let new_path = path.with_file_name(pair.apply(&name));
            debug!(from = %path.display(), to = %new_path.display(), "renaming file");
            fs::rename(path, &new_path)?;
        }
        Ok(())
    }

    /// Apply deferred directory renames in walk order (ancestors first).
    ///
    /// A pending path whose ancestors were themselves renamed is stale by the
    /// time it is applied, so each path is re-resolved against the renames
    /// already performed before its own rename runs.
    fn apply_dir_renames(&self, pending: Vec<(PathBuf, String)>) -> Result<(), MutateError> {
        let mut applied: Vec<(PathBuf, PathBuf)> = Vec::new();
        for (orig, new_name) in pending {
            let mut current = orig;
            for (from, to) in &applied {
                if let Ok(rest) = current.strip_prefix(from) {
                    current = to.join(rest);
                }
            }
            let target = current.with_file_name(&new_name);
            debug!(from = %current.display(), to = %target.display(), "renaming directory");
            fs::rename(&current, &target)?;
            applied.push((current, target));
        }
        Ok(())
    }
}
