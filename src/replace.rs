//! Replacement pair parsing and literal substring substitution.

use crate::error::MutateError;

/// An ordered (old, new) literal replacement, parsed from an `old=new` token.
///
/// Both sides are guaranteed non-empty after [`ReplacementPair::parse`], so
/// substitution always terminates and can never match the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplacementPair {
    pub old: String,
    pub new: String,
}

impl ReplacementPair {
    /// Parse an `old=new` token. Exactly one `=` separator is valid and both
    /// parts must be non-empty; any other shape is a configuration error,
    /// reported before any filesystem access happens.
    pub fn parse(spec: &str) -> Result<Self, MutateError> {
        let parts: Vec<&str> = spec.split('=').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(MutateError::Config(format!(
                "replacement must be in the format 'old=new', got {:?}",
                spec
            )));
        }
        Ok(Self {
            old: parts[0].to_string(),
            new: parts[1].to_string(),
        })
    }

    /// Whether `name` contains the old string as a literal substring.
    pub fn matches(&self, name: &str) -> bool {
        name.contains(&self.old)
    }

    /// Replace every non-overlapping occurrence of old with new, left to
    /// right, standard replace-all semantics.
    pub fn apply(&self, input: &str) -> String {
        input.replace(&self.old, &self.new)
    }

    /// Byte-level replace-all. Equivalent to [`ReplacementPair::apply`] on
    /// valid UTF-8 input (UTF-8 is self-synchronizing, so a byte match of a
    /// valid needle always falls on a character boundary) and lossless on
    /// anything else, so file contents never need decoding.
    pub fn apply_bytes(&self, input: &[u8]) -> Vec<u8> {
        let old = self.old.as_bytes();
        let new = self.new.as_bytes();
        let mut out = Vec::with_capacity(input.len());
        let mut i = 0;
        while i < input.len() {
            if input[i..].starts_with(old) {
                out.extend_from_slice(new);
                i += old.len();
            } else {
                out.push(input[i]);
                i += 1;
            }
        }
        out
    }
}
