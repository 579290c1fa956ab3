//! CLI route: resolves configuration and drives the tree mutator.

use crate::cli::parse::Cli;
use crate::config::ConfigLoader;
use crate::error::MutateError;
use crate::mutator::{MutatorConfig, TreeMutator};
use crate::replace::ReplacementPair;
use std::path::PathBuf;
use tracing::info;

/// Runtime context for CLI execution: traversal root and resolved settings.
/// CLI flags win over the config file, which wins over built-in defaults.
pub struct RunContext {
    root: PathBuf,
    config: MutatorConfig,
    replace_spec: String,
}

impl RunContext {
    /// Build a run context from parsed CLI arguments, merging in the config
    /// file for any value the caller did not pass explicitly.
    pub fn from_cli(cli: &Cli) -> Result<Self, MutateError> {
        let file_config = ConfigLoader::load(cli.config.as_deref())?;

        let config = MutatorConfig {
            max_files: cli.maxfiles.unwrap_or(file_config.max_files),
            skip_dirs: cli
                .skip_dirs
                .clone()
                .unwrap_or(file_config.skip_dirs),
            skip_ignore_case: cli.skip_ignore_case || file_config.skip_ignore_case,
        };

        Ok(Self {
            root: cli.directory.clone(),
            config,
            replace_spec: cli.replace.clone(),
        })
    }

    /// Parse the replacement spec and run the mutator.
    /// Returns the success message printed on stdout.
    pub fn execute(&self) -> Result<String, MutateError> {
        let pair = ReplacementPair::parse(&self.replace_spec)?;

        info!(
            root = %self.root.display(),
            old = %pair.old,
            new = %pair.new,
            max_files = self.config.max_files,
            "starting tree mutation"
        );

        let mutator = TreeMutator::with_config(self.root.clone(), self.config.clone());
        let count = mutator.mutate(&pair)?;

        Ok(format!("Processed {} files", count))
    }
}

/// Map an error to the message printed on stderr.
pub fn map_error(err: &MutateError) -> String {
    format!("Error: {}", err)
}
