//! File locations for the word store.

use std::path::PathBuf;

/// Where the word store reads its source text and keeps its mirror.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Text the tree is built from.
    pub source: PathBuf,
    /// The flat-file mirror of the word set.
    pub mirror: PathBuf,
}

impl Config {
    /// Source text used when nothing else is configured.
    pub const DEFAULT_SOURCE: &'static str = "text.txt";
    /// Mirror file used when nothing else is configured.
    pub const DEFAULT_MIRROR: &'static str = "dictionary.txt";
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: PathBuf::from(Self::DEFAULT_SOURCE),
            mirror: PathBuf::from(Self::DEFAULT_MIRROR),
        }
    }
}
