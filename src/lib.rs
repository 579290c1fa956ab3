//! Restring: recursive literal string replacement for version-controlled trees.
//!
//! Walks a directory tree that carries a `.git` marker and replaces every
//! occurrence of a literal substring with another string, both inside file
//! contents and in file and directory names, guarded by a file-count ceiling.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod mutator;
pub mod replace;
