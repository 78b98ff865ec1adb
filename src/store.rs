// SPDX-License-Identifier: MPL-2.0

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write as _};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};

/// Flat-file storage for day logs, one file per calendar day under
/// `<root>/<YYYY>/<MM>/<DD>.txt`.
///
/// The store only ever creates and appends; day logs are never rewritten or
/// deleted by the tool.
pub struct LogStore {
    root: PathBuf,
}

impl LogStore {
    pub fn new(root: impl Into<PathBuf>) -> LogStore {
        LogStore { root: root.into() }
    }

    pub fn day_path(&self, date: NaiveDate) -> PathBuf {
        self.root
            .join(format!("{:04}", date.year()))
            .join(format!("{:02}", date.month()))
            .join(format!("{:02}.txt", date.day()))
    }

    /// Reads the full contents of a day log, or `None` if the day has no
    /// log file yet.
    pub fn read(&self, date: NaiveDate) -> Result<Option<String>> {
        let path = self.day_path(date);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("could not read day log at {path:?}"))
            }
        }
    }

    /// Creates a new day log containing a single line.  The first line of a
    /// log file carries no trailing newline; appends add their own leading
    /// newline.  Fails if the file already exists.
    pub fn create(&self, date: NaiveDate, line: &str) -> Result<PathBuf> {
        let path = self.day_path(date);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("could not create log directory {parent:?}"))?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .with_context(|| format!("could not create day log at {path:?}"))?;
        write!(file, "{line}")?;
        Ok(path)
    }

    /// Appends one line to an existing day log.  Fails if the file does not
    /// exist: appending must never implicitly start a day.
    pub fn append(&self, date: NaiveDate, line: &str) -> Result<PathBuf> {
        let path = self.day_path(date);
        let mut file = OpenOptions::new()
            .append(true)
            .open(&path)
            .with_context(|| format!("could not open day log at {path:?}"))?;
        write!(file, "\n{line}")?;
        Ok(path)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
