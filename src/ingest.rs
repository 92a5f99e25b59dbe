//! Turns source text into words. A word is any run of non-whitespace characters; nothing is
//! lowercased or stripped of punctuation.

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Splits text into words on whitespace, in the order they appear.
///
/// # Examples
///
/// ```
/// let words: Vec<_> = wordbst::ingest::words("the  quick\tbrown\nfox").collect();
/// assert_eq!(words, ["the", "quick", "brown", "fox"]);
/// ```
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// One line of a text file, without its `\n` or a `\r` just before it.
pub(crate) struct Line {
    /// The line decoded as UTF-8, with invalid sequences replaced by U+FFFD.
    pub(crate) text: String,
    /// Whether any replacement happened.
    pub(crate) lossy: bool,
}

impl Line {
    fn decode(mut raw: Vec<u8>) -> Self {
        if raw.last() == Some(&b'\r') {
            raw.pop();
        }
        let (text, lossy) = match String::from_utf8_lossy(&raw) {
            Cow::Borrowed(text) => (text.to_owned(), false),
            Cow::Owned(text) => (text, true),
        };
        Self { text, lossy }
    }
}

/// Splits `reader` into lines on `\n`. Bytes that aren't UTF-8 don't fail the read; they are
/// decoded lossily and flagged on the [`Line`].
pub(crate) fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<Line>> {
    reader.split(b'\n').map(|raw| raw.map(Line::decode))
}

/// Reads every word from `reader`, line by line. I/O errors are reported against `path`.
pub(crate) fn read_words_from<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>> {
    let mut out = Vec::new();
    for (number, line) in lines(reader).enumerate() {
        let line = line.map_err(|source| Error::Source {
            path: path.to_owned(),
            source,
        })?;
        if line.lossy {
            warn!(
                path = %path.display(),
                line = number + 1,
                "source line is not valid UTF-8, invalid bytes replaced"
            );
        }
        out.extend(words(&line.text).map(str::to_owned));
    }
    Ok(out)
}

/// Reads every word from `reader`, line by line.
pub fn read_words<R: BufRead>(reader: R) -> Result<Vec<String>> {
    read_words_from(reader, Path::new("<reader>"))
}

/// Reads every word from the file at `path`.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Source {
        path: path.to_owned(),
        source,
    })?;
    let words = read_words_from(BufReader::new(file), path)?;
    debug!(path = %path.display(), count = words.len(), "read source words");
    Ok(words)
}
