//! Times a lookup in the tree against a linear scan of the mirror.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::warn;

use crate::error::Result;
use crate::mirror::Mirror;
use crate::tree::Tree;

/// The outcome of timing one word against both stores.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// The word that was looked up.
    pub word: String,
    /// Whether the tree holds the word.
    pub in_tree: bool,
    /// How long the tree lookup took.
    pub tree_elapsed: Duration,
    /// Whether any mirror line equals the word.
    pub in_mirror: bool,
    /// How long the mirror scan took, opening the file included.
    pub mirror_elapsed: Duration,
}

impl Comparison {
    /// Whether the tree and the mirror disagree about the word. Drift is only reported, it's
    /// never repaired here.
    pub fn drifted(&self) -> bool {
        self.in_tree != self.in_mirror
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "tree search time: {:.9} seconds",
            self.tree_elapsed.as_secs_f64()
        )?;
        write!(
            f,
            "mirror search time: {:.9} seconds",
            self.mirror_elapsed.as_secs_f64()
        )?;
        if self.drifted() {
            write!(
                f,
                "\nsearch results differ between the tree ({}) and the mirror ({})",
                presence(self.in_tree),
                presence(self.in_mirror)
            )?;
        }
        Ok(())
    }
}

fn presence(found: bool) -> &'static str {
    if found {
        "found"
    } else {
        "not found"
    }
}

/// Looks `word` up in `tree` and then in `mirror`, timing each separately.
pub fn compare(tree: &Tree<String>, mirror: &Mirror, word: &str) -> Result<Comparison> {
    let instant = Instant::now();
    let in_tree = tree.contains(word);
    let tree_elapsed = instant.elapsed();

    let instant = Instant::now();
    let in_mirror = mirror.contains(word)?;
    let mirror_elapsed = instant.elapsed();

    let comparison = Comparison {
        word: word.to_owned(),
        in_tree,
        tree_elapsed,
        in_mirror,
        mirror_elapsed,
    };
    if comparison.drifted() {
        warn!(
            word = %comparison.word,
            in_tree,
            in_mirror,
            "tree and mirror have drifted apart"
        );
    }
    Ok(comparison)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comparison(in_tree: bool, in_mirror: bool) -> Comparison {
        Comparison {
            word: "слива".to_string(),
            in_tree,
            tree_elapsed: Duration::from_nanos(1_500),
            in_mirror,
            mirror_elapsed: Duration::from_millis(2),
        }
    }

    #[test]
    fn agreeing_results_are_not_drift() {
        assert!(!comparison(true, true).drifted());
        assert!(!comparison(false, false).drifted());
        assert!(comparison(true, false).drifted());
        assert!(comparison(false, true).drifted());
    }

    #[test]
    fn display_reports_both_times() {
        let shown = comparison(true, true).to_string();
        assert_eq!(
            shown,
            "tree search time: 0.000001500 seconds\nmirror search time: 0.002000000 seconds"
        );
    }

    #[test]
    fn display_flags_drift() {
        let shown = comparison(false, true).to_string();
        assert!(shown.ends_with(
            "search results differ between the tree (not found) and the mirror (found)"
        ));
    }
}
