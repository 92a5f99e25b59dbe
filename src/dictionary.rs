//! A word tree paired with its mirror file.
//!
//! Building from source text only fills the tree. `add_word` and `delete_word` change the tree
//! first and then the mirror; if the mirror step fails the tree keeps the change and the error is
//! returned to the caller. Both refuse a word that is empty or contains whitespace before
//! touching either store.
//!
//! # Examples
//!
//! ```
//! use wordbst::{Dictionary, Mirror};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let mut dict = Dictionary::new(Mirror::new(dir.path().join("dictionary.txt")));
//!
//! dict.build_from_reader("банан груша\nслива".as_bytes()).unwrap();
//! dict.add_word("яблуко").unwrap();
//! dict.delete_word("банан").unwrap();
//!
//! assert_eq!(dict.words().collect::<Vec<_>>(), ["груша", "слива", "яблуко"]);
//! assert_eq!(dict.mirror().words().unwrap(), ["яблуко"]);
//! ```

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, info};

use crate::compare::{self, Comparison};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::ingest;
use crate::mirror::Mirror;
use crate::tree::Tree;

/// The word store: a [`Tree`] of words and the [`Mirror`] it is copied to.
#[derive(Debug)]
pub struct Dictionary {
    tree: Tree<String>,
    mirror: Mirror,
}

impl Dictionary {
    /// An empty dictionary mirrored to `mirror`.
    pub fn new(mirror: Mirror) -> Self {
        Self {
            tree: Tree::new(),
            mirror,
        }
    }

    /// An empty dictionary using the mirror named in `config`. The source isn't read yet.
    pub fn open(config: &Config) -> Self {
        Self::new(Mirror::new(&config.mirror))
    }

    /// Inserts every word of the file at `path` and returns how many words were read,
    /// duplicates included.
    pub fn build_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let words = ingest::read_file(path)?;
        Ok(self.insert_all(words))
    }

    /// Like [`Dictionary::build_from_file`] but reading from any buffered reader.
    pub fn build_from_reader<R: BufRead>(&mut self, reader: R) -> Result<usize> {
        let words = ingest::read_words(reader)?;
        Ok(self.insert_all(words))
    }

    fn insert_all(&mut self, words: Vec<String>) -> usize {
        let supplied = words.len();
        self.tree.extend(words);
        info!(supplied, distinct = self.tree.len(), "built dictionary");
        supplied
    }

    /// Whether the tree holds `word`. The mirror isn't consulted.
    pub fn contains(&self, word: &str) -> bool {
        self.tree.contains(word)
    }

    /// All words in ascending order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tree.iter().map(String::as_str)
    }

    /// Number of distinct words in the tree.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether the tree holds no words.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying tree.
    pub fn tree(&self) -> &Tree<String> {
        &self.tree
    }

    /// The mirror this dictionary writes to.
    pub fn mirror(&self) -> &Mirror {
        &self.mirror
    }

    /// Inserts `word` and appends it to the mirror. The mirror gets the line even when the tree
    /// already had the word.
    ///
    /// `word` must be a single non-empty run of non-whitespace characters, otherwise
    /// [`Error::InvalidWord`] is returned and nothing changes.
    pub fn add_word(&mut self, word: &str) -> Result<()> {
        check_word(word)?;
        self.tree.insert(word.to_owned());
        self.mirror.append(word)?;
        debug!(word, "added word");
        Ok(())
    }

    /// Deletes `word` from the tree and every matching line from the mirror. Returns how many
    /// mirror lines were dropped. `word` is checked the same way as in
    /// [`Dictionary::add_word`].
    pub fn delete_word(&mut self, word: &str) -> Result<usize> {
        check_word(word)?;
        self.tree.delete(word);
        let removed = self.mirror.remove(word)?;
        debug!(word, removed, "deleted word");
        Ok(removed)
    }

    /// Times a tree lookup of `word` against a scan of the mirror.
    pub fn compare_search_time(&self, word: &str) -> Result<Comparison> {
        compare::compare(&self.tree, &self.mirror, word)
    }

    /// Overwrites the mirror with the tree's words, in order.
    pub fn sync_mirror(&self) -> Result<()> {
        self.mirror.rewrite(self.words())?;
        info!(path = %self.mirror.path().display(), words = self.len(), "synced mirror");
        Ok(())
    }
}

/// A word is exactly one whitespace-separated token.
fn check_word(word: &str) -> Result<()> {
    let mut tokens = ingest::words(word);
    match (tokens.next(), tokens.next()) {
        (Some(token), None) if token == word => Ok(()),
        _ => Err(Error::InvalidWord {
            word: word.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(text: &str) -> (tempfile::TempDir, Dictionary) {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = Dictionary::new(Mirror::new(dir.path().join("dictionary.txt")));
        dict.build_from_reader(text.as_bytes()).unwrap();
        (dir, dict)
    }

    #[test]
    fn build_counts_supplied_words() {
        let dir = tempfile::tempdir().unwrap();
        let mut dict = Dictionary::new(Mirror::new(dir.path().join("dictionary.txt")));

        assert_eq!(dict.build_from_reader("b a b\nc".as_bytes()).unwrap(), 4);
        assert_eq!(dict.len(), 3);
        // Building never writes the mirror.
        assert!(!dict.mirror().path().exists());
    }

    #[test]
    fn add_existing_word_still_appends() {
        let (_dir, mut dict) = dictionary("a b");

        dict.add_word("a").unwrap();

        assert_eq!(dict.len(), 2);
        assert_eq!(dict.mirror().words().unwrap(), ["a"]);
    }

    #[test]
    fn delete_missing_word() {
        let (_dir, mut dict) = dictionary("a b");

        assert_eq!(dict.delete_word("z").unwrap(), 0);
        assert_eq!(dict.words().collect::<Vec<_>>(), ["a", "b"]);
    }

    #[test]
    fn rejects_words_the_mirror_cannot_hold() {
        let (_dir, mut dict) = dictionary("a b");
        dict.add_word("c").unwrap();

        for bad in ["", "a b", "a\nb", " c", "c\t", "\r"] {
            let err = dict.add_word(bad).unwrap_err();
            assert!(matches!(err, Error::InvalidWord { ref word } if word == bad));
            assert!(matches!(
                dict.delete_word(bad),
                Err(Error::InvalidWord { .. })
            ));
        }

        // Neither store was touched by the rejected calls.
        assert_eq!(dict.words().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(dict.mirror().words().unwrap(), ["c"]);
        assert_eq!(dict.delete_word("c").unwrap(), 1);
    }

    #[test]
    fn sync_then_compare_agrees() {
        let (_dir, dict) = dictionary("d b f a c e");
        dict.sync_mirror().unwrap();

        assert_eq!(dict.mirror().words().unwrap(), ["a", "b", "c", "d", "e", "f"]);
        for word in ["a", "f", "zz"] {
            assert!(!dict.compare_search_time(word).unwrap().drifted());
        }
    }
}
