// SPDX-License-Identifier: MPL-2.0

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};

/// Replication layer for the log repository.
///
/// The local files are authoritative; implementations replicate them
/// somewhere else.  Keeping this behind a trait lets tests run against
/// [`NoSync`] instead of a real git checkout.
pub trait VersionedStore {
    /// Fetches remote changes before a mutation.  Returns the backend's
    /// human-readable output, or the empty string when nothing changed.
    fn pull(&self) -> Result<String>;

    /// Records a mutation of `path` with the given message.  Returns the
    /// empty string when there was nothing to record.
    fn commit(&self, message: &str, path: &Path) -> Result<String>;

    /// Publishes recorded mutations.  Returns the empty string when the
    /// remote was already up to date.
    fn push(&self) -> Result<String>;
}

/// Syncs the log repository through the external `git` binary.
///
/// Output and exit codes are advisory: a failing pull or push is logged and
/// otherwise ignored, since git is only the replication layer.  Only a git
/// binary that cannot be spawned at all is a hard error.
pub struct GitSync {
    workdir: PathBuf,
    remote: String,
    branch: String,
}

impl GitSync {
    pub fn new(workdir: impl Into<PathBuf>, remote: impl Into<String>, branch: impl Into<String>) -> GitSync {
        GitSync {
            workdir: workdir.into(),
            remote: remote.into(),
            branch: branch.into(),
        }
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        log::debug!("running git {} in {:?}", args.join(" "), self.workdir);
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
            .with_context(|| format!("could not run git {}", args.join(" ")))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push('\n');
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        let combined = combined.trim().to_owned();

        if !output.status.success() {
            log::warn!(
                "git {} exited with {}: {combined}",
                args.join(" "),
                output.status
            );
        }
        Ok(combined)
    }
}

impl VersionedStore for GitSync {
    fn pull(&self) -> Result<String> {
        let result = self.git(&["pull"])?;
        if result.contains("Already up to date.") {
            return Ok(String::new());
        }
        Ok(result)
    }

    fn commit(&self, message: &str, path: &Path) -> Result<String> {
        let path = path.to_string_lossy();
        let added = self.git(&["add", &path, "-v"])?;
        if added.is_empty() {
            // nothing staged, so there is nothing to commit
            return Ok(String::new());
        }
        let committed = self.git(&["commit", "-m", message])?;
        Ok(format!("{added}\n{committed}").trim().to_owned())
    }

    fn push(&self) -> Result<String> {
        let result = self.git(&["push", &self.remote, &self.branch])?;
        if result.contains("Everything up-to-date") {
            return Ok(String::new());
        }
        Ok(result)
    }
}

/// A [`VersionedStore`] that does nothing, for tests and for working
/// against a plain directory.
pub struct NoSync;

impl VersionedStore for NoSync {
    fn pull(&self) -> Result<String> {
        Ok(String::new())
    }

    fn commit(&self, _message: &str, _path: &Path) -> Result<String> {
        Ok(String::new())
    }

    fn push(&self) -> Result<String> {
        Ok(String::new())
    }
}
