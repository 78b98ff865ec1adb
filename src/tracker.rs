// SPDX-License-Identifier: MPL-2.0

use anyhow::{bail, Result};
use chrono::NaiveDate;

use crate::daylog::{DayLog, Event, EventKind};
use crate::store::LogStore;
use crate::sync::VersionedStore;

/// The operations behind the CLI subcommands.
///
/// Each operation is stateless across invocations: all state lives in the
/// day-log files.  Mutating operations pull before touching the file and
/// commit + push afterwards; sync is best effort and never blocks or rolls
/// back a local change (the local files are authoritative).
pub struct Tracker<'a> {
    store: LogStore,
    sync: &'a dyn VersionedStore,
}

impl<'a> Tracker<'a> {
    pub fn new(store: LogStore, sync: &'a dyn VersionedStore) -> Tracker<'a> {
        Tracker { store, sync }
    }

    /// Starts the given day.  Fails if the day already has a log file, and
    /// leaves the existing file untouched in that case.
    pub fn start(&self, date: NaiveDate, now: i64) -> Result<()> {
        self.pull();
        if self.store.read(date)?.is_some() {
            bail!("you have already started {}", format_date(date));
        }
        let path = self
            .store
            .create(date, &Event::new(now, EventKind::Start).to_line())?;
        self.commit_and_push(&format!("Started {}", format_date(date)), &path);
        Ok(())
    }

    /// Appends an update note or a break marker to an already-started,
    /// not-yet-ended day.
    pub fn record(&self, date: NaiveDate, now: i64, kind: EventKind) -> Result<()> {
        if let EventKind::Note(reason) = &kind {
            if reason.trim().is_empty() {
                bail!("a reason is required when updating the log");
            }
        }
        if let EventKind::Break(name) = &kind {
            if name.trim().is_empty() {
                bail!("a label is required when recording a break");
            }
        }

        self.pull();
        let log = self.open_day(date)?;
        if log.is_ended() {
            bail!("{} has already been ended", format_date(date));
        }
        let path = self.store.append(date, &Event::new(now, kind).to_line())?;
        self.commit_and_push(&format!("Updated {}", format_date(date)), &path);
        Ok(())
    }

    /// Ends the day and returns the net worked seconds.  Fails if the day
    /// was never started or has already been ended; a second `End` is never
    /// appended.
    pub fn end(&self, date: NaiveDate, now: i64) -> Result<i64> {
        self.pull();
        let log = self.open_day(date)?;
        if log.is_ended() {
            bail!("{} has already been ended", format_date(date));
        }
        let path = self
            .store
            .append(date, &Event::new(now, EventKind::End).to_line())?;
        self.commit_and_push(&format!("Ended {}", format_date(date)), &path);

        // report from what was actually written, not from the in-memory log
        self.open_day(date)?.worked_seconds(now)
    }

    /// Computes the worked duration for a day without mutating anything.
    pub fn status(&self, date: NaiveDate, now: i64) -> Result<i64> {
        self.open_day(date)?.worked_seconds(now)
    }

    fn open_day(&self, date: NaiveDate) -> Result<DayLog> {
        match self.store.read(date)? {
            Some(contents) => DayLog::parse(&contents),
            None => bail!("you have not started {} yet", format_date(date)),
        }
    }

    fn pull(&self) {
        match self.sync.pull() {
            Ok(output) if output.is_empty() => {}
            Ok(output) => log::debug!("pulled changes: {output}"),
            Err(err) => log::warn!("could not pull before updating the log: {err:#}"),
        }
    }

    fn commit_and_push(&self, message: &str, path: &std::path::Path) {
        let result = self
            .sync
            .commit(message, path)
            .and_then(|_| self.sync.push());
        if let Err(err) = result {
            log::warn!("could not sync {message:?} to the remote: {err:#}");
        }
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
