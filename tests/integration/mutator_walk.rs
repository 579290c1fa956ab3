//! Integration tests for the core walk: content rewriting, file renames,
//! skip-set exclusion, and the version-control precondition.

use restring::error::MutateError;
use restring::mutator::{MutatorConfig, TreeMutator};
use restring::replace::ReplacementPair;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn git_root() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();
    temp_dir
}

fn mutate(root: &Path, spec: &str, max_files: usize) -> Result<usize, MutateError> {
    let pair = ReplacementPair::parse(spec).unwrap();
    let config = MutatorConfig {
        max_files,
        ..MutatorConfig::default()
    };
    TreeMutator::with_config(root.to_path_buf(), config).mutate(&pair)
}

/// The concrete scenario from the tool's contract: two files, one renamed
/// with content edited, one renamed with content untouched.
#[test]
fn test_reference_scenario() {
    let temp_dir = git_root();
    let root = temp_dir.path();

    fs::write(root.join("foo.txt"), "hello foo world").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("foo_nested.txt"), "nested").unwrap();

    let count = mutate(root, "foo=bar", 10).unwrap();

    assert_eq!(count, 2);
    assert!(!root.join("foo.txt").exists());
    assert_eq!(
        fs::read_to_string(root.join("bar.txt")).unwrap(),
        "hello bar world"
    );
    assert!(!root.join("sub").join("foo_nested.txt").exists());
    assert_eq!(
        fs::read_to_string(root.join("sub").join("bar_nested.txt")).unwrap(),
        "nested"
    );
}

#[test]
fn test_missing_git_marker_leaves_tree_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join("foo.txt"), "foo content").unwrap();

    let err = mutate(root, "foo=bar", 10).unwrap_err();

    assert!(matches!(err, MutateError::NotVersionControlled(_)));
    assert_eq!(
        fs::read_to_string(root.join("foo.txt")).unwrap(),
        "foo content"
    );
}

/// A `.git` regular file (e.g. a worktree marker) satisfies the precondition.
#[test]
fn test_git_file_marker_is_accepted() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::write(root.join(".git"), "gitdir: elsewhere").unwrap();
    fs::write(root.join("foo.txt"), "foo").unwrap();

    // The .git file itself is a regular file, so it is counted and processed.
    let count = mutate(root, "foo=bar", 10).unwrap();
    assert_eq!(count, 2);
}

/// A skipped directory is never entered: files beneath it are not counted,
/// not edited, not renamed, and the directory itself is not renamed even
/// when its name matches.
#[test]
fn test_skip_set_prunes_subtree_and_beats_rename() {
    let temp_dir = git_root();
    let root = temp_dir.path();

    fs::create_dir(root.join("foo_vendor")).unwrap();
    fs::write(root.join("foo_vendor").join("foo.txt"), "foo inside").unwrap();
    fs::write(root.join("outside.txt"), "foo outside").unwrap();

    let pair = ReplacementPair::parse("foo=bar").unwrap();
    let config = MutatorConfig {
        max_files: 10,
        skip_dirs: vec![".git".to_string(), "foo_vendor".to_string()],
        skip_ignore_case: false,
    };
    let count = TreeMutator::with_config(root.to_path_buf(), config)
        .mutate(&pair)
        .unwrap();

    // Only outside.txt was counted.
    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(root.join("outside.txt")).unwrap(),
        "bar outside"
    );
    // Skip takes precedence over rename: the directory keeps its name and
    // its contents keep theirs.
    assert!(root.join("foo_vendor").exists());
    assert_eq!(
        fs::read_to_string(root.join("foo_vendor").join("foo.txt")).unwrap(),
        "foo inside"
    );
}

#[test]
fn test_skip_set_case_sensitivity_is_configurable() {
    let temp_dir = git_root();
    let root = temp_dir.path();
    fs::create_dir(root.join("Vendor")).unwrap();
    fs::write(root.join("Vendor").join("a.txt"), "foo").unwrap();

    // Exact matching (default): "vendor" does not match "Vendor".
    let pair = ReplacementPair::parse("foo=bar").unwrap();
    let exact = MutatorConfig {
        max_files: 10,
        skip_dirs: vec![".git".to_string(), "vendor".to_string()],
        skip_ignore_case: false,
    };
    let count = TreeMutator::with_config(root.to_path_buf(), exact)
        .mutate(&pair)
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        fs::read_to_string(root.join("Vendor").join("a.txt")).unwrap(),
        "bar"
    );

    // Case-insensitive matching prunes it.
    fs::write(root.join("Vendor").join("a.txt"), "foo").unwrap();
    let insensitive = MutatorConfig {
        max_files: 10,
        skip_dirs: vec![".git".to_string(), "vendor".to_string()],
        skip_ignore_case: true,
    };
    let count = TreeMutator::with_config(root.to_path_buf(), insensitive)
        .mutate(&pair)
        .unwrap();
    assert_eq!(count, 0);
    assert_eq!(
        fs::read_to_string(root.join("Vendor").join("a.txt")).unwrap(),
        "foo"
    );
}

/// Name and content substitutions are independent of each other.
#[test]
fn test_name_and_content_substitution_are_independent() {
    let temp_dir = git_root();
    let root = temp_dir.path();

    // Name matches, content does not.
    fs::write(root.join("foo_name.txt"), "plain text").unwrap();
    // Content matches, name does not.
    fs::write(root.join("plain.txt"), "has foo inside").unwrap();

    let count = mutate(root, "foo=bar", 10).unwrap();

    assert_eq!(count, 2);
    assert_eq!(
        fs::read_to_string(root.join("bar_name.txt")).unwrap(),
        "plain text"
    );
    assert_eq!(
        fs::read_to_string(root.join("plain.txt")).unwrap(),
        "has bar inside"
    );
}

/// A completed run is idempotent: a second run over the same tree processes
/// the same file count and changes nothing.
#[test]
fn test_completed_run_is_idempotent() {
    let temp_dir = git_root();
    let root = temp_dir.path();

    fs::write(root.join("foo.txt"), "foo and foo again").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("other.txt"), "nothing here").unwrap();

    let first = mutate(root, "foo=bar", 10).unwrap();
    let after_first = fs::read_to_string(root.join("bar.txt")).unwrap();

    let second = mutate(root, "foo=bar", 10).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        fs::read_to_string(root.join("bar.txt")).unwrap(),
        after_first
    );
    assert_eq!(after_first, "bar and bar again");
}

/// Non-UTF-8 file contents are replaced bytewise without corruption.
#[test]
fn test_non_utf8_content_survives() {
    let temp_dir = git_root();
    let root = temp_dir.path();

    fs::write(root.join("blob.bin"), b"\x00\xff foo \xfe\x01").unwrap();

    let count = mutate(root, "foo=bar", 10).unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        fs::read(root.join("blob.bin")).unwrap(),
        b"\x00\xff bar \xfe\x01".to_vec()
    );
}
