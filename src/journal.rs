//! A journal and the persistence that is kept apart from it
//!
//! [`Journal`] only records entries. Writing them anywhere is the job of
//! [`PersistenceManager`], which knows nothing about journals beyond their
//! entries.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::{debug, info, instrument};

use crate::{error::Result, utils::map_write_error};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Journal {
    title: String,
    entries: Vec<String>,
}

impl Journal {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            entries: Vec::new(),
        }
    }

    /// Records an entry numbered after the ones already in this journal
    pub fn add_entry(&mut self, entry: impl AsRef<str>) {
        let number = self.entries.len() + 1;
        self.entries.push(format!("{}: {}", number, entry.as_ref()));
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }
}

pub struct PersistenceManager;

impl PersistenceManager {
    /// Writes the journal's entries to `path`, one per line
    pub fn save(journal: &Journal, path: impl AsRef<Path>) -> Result<()> {
        debug!(title = %journal.title, entries = journal.entries.len(), "saving journal");
        Self::save_lines(journal.entries(), path)
    }

    /// Writes each line followed by a newline, replacing whatever `path` held
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_lines<I, S>(lines: I, path: impl AsRef<Path>) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let mut writer = Self::create(path, &path_str)?;

        let mut count = 0usize;
        for line in lines {
            writeln!(writer, "{}", line.as_ref()).map_err(|e| map_write_error(&path_str, e))?;
            count += 1;
        }
        writer.flush().map_err(|e| map_write_error(&path_str, e))?;

        info!("Wrote {} lines to {}", count, path_str);
        Ok(())
    }

    /// Writes `content` exactly as given, replacing whatever `path` held
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn save_str(content: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let path_str = path.display().to_string();
        let mut writer = Self::create(path, &path_str)?;

        writer
            .write_all(content.as_bytes())
            .map_err(|e| map_write_error(&path_str, e))?;
        writer.flush().map_err(|e| map_write_error(&path_str, e))?;

        info!("Wrote {} bytes to {}", content.len(), path_str);
        Ok(())
    }

    fn create(path: &Path, path_str: &str) -> Result<BufWriter<File>> {
        let file = File::create(path).map_err(|e| map_write_error(path_str, e))?;
        Ok(BufWriter::new(file))
    }
}
