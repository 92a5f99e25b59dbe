//! A flat-file copy of the word set: UTF-8, one word per line, every line `\n` terminated.
//!
//! The mirror is only kept in step with a tree by explicit [`Mirror::append`] and
//! [`Mirror::remove`] calls. Nothing stops the two from drifting apart (appending a word the
//! tree already holds writes it twice, for example) and nothing here tries to.
//!
//! A mirror file that doesn't exist yet reads as empty. Lines are split on `\n` and a `\r`
//! right before it is ignored, so a CRLF mirror matches the same words an LF one does. Bytes
//! that aren't UTF-8 are read lossily rather than failing the read.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::ingest::{self, Line};

/// Handle to a mirror file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mirror {
    path: PathBuf,
}

impl Mirror {
    /// Makes a handle for the mirror at `path`. The file is not touched until it's used.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the mirror file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `word` as a new line, creating the file if needed.
    pub fn append(&self, word: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(self.io_error())?;
        // One write call so the line lands whole.
        file.write_all(format!("{}\n", word).as_bytes())
            .map_err(self.io_error())?;
        debug!(path = %self.path.display(), word, "appended to mirror");
        Ok(())
    }

    /// Rewrites the mirror without any line equal to `word` and returns how many lines were
    /// dropped. The new contents replace the old file in one rename.
    ///
    /// Lines that are kept are written back byte for byte, their `\r\n` endings included.
    pub fn remove(&self, word: &str) -> Result<usize> {
        let Some(reader) = self.open()? else {
            debug!(path = %self.path.display(), "no mirror to remove from");
            return Ok(0);
        };

        let mut kept: Vec<Vec<u8>> = Vec::new();
        let mut removed = 0;
        for chunk in reader.split(b'\n') {
            let chunk = chunk.map_err(self.io_error())?;
            let line = chunk.strip_suffix(b"\r").unwrap_or(&chunk[..]);
            if line == word.as_bytes() {
                removed += 1;
            } else {
                kept.push(chunk);
            }
        }

        self.replace_with(|out| {
            for chunk in &kept {
                out.write_all(chunk)?;
                out.write_all(b"\n")?;
            }
            Ok(())
        })?;
        debug!(path = %self.path.display(), word, removed, "removed from mirror");
        Ok(removed)
    }

    /// Scans the mirror line by line for an exact match, stopping at the first one.
    pub fn contains(&self, word: &str) -> Result<bool> {
        let Some(reader) = self.open()? else {
            return Ok(false);
        };
        for (number, line) in ingest::lines(reader).enumerate() {
            if self.decoded(number, line)? == word {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Every line of the mirror, in file order.
    pub fn words(&self) -> Result<Vec<String>> {
        let Some(reader) = self.open()? else {
            return Ok(Vec::new());
        };
        ingest::lines(reader)
            .enumerate()
            .map(|(number, line)| self.decoded(number, line))
            .collect()
    }

    /// Replaces the whole mirror with `words`, one per line.
    ///
    /// The words are written to a temporary file next to the mirror which is then renamed over
    /// it, so readers see either the old contents or the new ones.
    pub fn rewrite<I, S>(&self, words: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.replace_with(|out| {
            for word in words {
                writeln!(out, "{}", word.as_ref())?;
            }
            Ok(())
        })
    }

    /// Writes new contents into a temporary file beside the mirror and renames it over the
    /// mirror. An existing mirror's permissions carry over to the new file.
    fn replace_with<F>(&self, write: F) -> Result<()>
    where
        F: FnOnce(&mut BufWriter<&mut File>) -> io::Result<()>,
    {
        let mut tmp = NamedTempFile::new_in(self.dir()).map_err(self.io_error())?;
        {
            let mut out = BufWriter::new(tmp.as_file_mut());
            write(&mut out).map_err(self.io_error())?;
            out.flush().map_err(self.io_error())?;
        }
        match fs::metadata(&self.path) {
            Ok(meta) => tmp
                .as_file()
                .set_permissions(meta.permissions())
                .map_err(self.io_error())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(self.io_error()(e)),
        }
        tmp.persist(&self.path).map_err(|source| Error::Persist {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    /// Unwraps a line read from the mirror, warning when it wasn't valid UTF-8.
    fn decoded(&self, number: usize, line: io::Result<Line>) -> Result<String> {
        let line = line.map_err(self.io_error())?;
        if line.lossy {
            warn!(
                path = %self.path.display(),
                line = number + 1,
                "mirror line is not valid UTF-8, invalid bytes replaced"
            );
        }
        Ok(line.text)
    }

    /// Opens the mirror for reading. `None` means there's no mirror yet.
    fn open(&self) -> Result<Option<BufReader<File>>> {
        match File::open(&self.path) {
            Ok(file) => Ok(Some(BufReader::new(file))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(self.io_error()(e)),
        }
    }

    /// The directory temporary files are created in. It has to be on the same filesystem as the
    /// mirror for the final rename to work.
    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    fn io_error(&self) -> impl Fn(io::Error) -> Error + '_ {
        move |source| Error::Mirror {
            path: self.path.clone(),
            source,
        }
    }
}
