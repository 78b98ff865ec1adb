use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Arguments {
    /// increase the verbosity
    ///
    /// This flag can be used multiple times to increase the amount of information
    /// produced by worklog
    #[arg(global = true, short, long, action = clap::ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// output no logging
    ///
    /// Setting quiet disables all logging to stderr.  Data will only be printed
    /// to stdout, and only for commands that output information as their main
    /// action.
    #[arg(global = true, long, action = clap::ArgAction::SetTrue, help_heading = "Logging")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start today's work day
    ///
    /// Creates today's day log with a single Start event and syncs it to
    /// the configured git remote.  Fails if today has already been started.
    Start,

    /// End today's work day
    ///
    /// Appends an End event to today's day log, syncs it, and reports the
    /// time worked today (break intervals excluded).  Fails if today has
    /// not been started or has already been ended.
    End,

    /// Note what you are currently working on
    ///
    /// Appends a timestamped free-text note to today's day log.  Notes do
    /// not affect the computed duration, but a note does mark the end of a
    /// running break.
    #[clap(aliases = &["note"])]
    Update(Update),

    /// Take a break
    ///
    /// Appends a break marker to today's day log.  Time between a break
    /// marker and the next non-break event is excluded from the worked
    /// duration.
    Break(Break),

    /// Show the time worked on a day
    ///
    /// Reports the worked duration for today, or for the given date.  For a
    /// day that has not been ended yet, the duration is measured up to the
    /// current time.  Never modifies the day log.
    Status(Status),

    /// Configure the work log repository
    ///
    /// Asks where the git repository lives on this machine and which remote
    /// and branch to sync with, then prints the environment variable export
    /// to persist those settings.
    Setup,
}

#[derive(Args, Debug)]
pub struct Update {
    /// what you are working on
    ///
    /// All words are joined into a single note.
    #[arg(required = true, num_args = 1..)]
    pub reason: Vec<String>,
}

#[derive(Args, Debug)]
pub struct Break {
    /// a label for the break, e.g. "lunch"
    ///
    /// All words are joined into a single label.
    #[arg(required = true, num_args = 1..)]
    pub label: Vec<String>,
}

#[derive(Args, Debug)]
pub struct Status {
    /// day to report on, in DD.MM.YYYY format
    ///
    /// Defaults to today.
    pub date: Option<String>,
}
