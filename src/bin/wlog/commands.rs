// SPDX-License-Identifier: MPL-2.0

use std::io::{stdin, stdout, Write as _};

use anyhow::{anyhow, bail, Result};
use chrono::{Local, Utc};
use worklog::{
    commands::{Break, Status, Update},
    config::{self, GitSettings, Settings},
    daylog::EventKind,
    parse::parse_date,
    print::format_duration,
    store::LogStore,
    sync::GitSync,
    tracker::Tracker,
};

fn git_sync(settings: &Settings) -> GitSync {
    GitSync::new(
        &settings.location,
        &settings.git.remote,
        &settings.git.branch,
    )
}

pub fn start(settings: Settings) -> Result<()> {
    let sync = git_sync(&settings);
    let tracker = Tracker::new(LogStore::new(&settings.location), &sync);
    let today = Local::now().date_naive();

    tracker.start(today, Utc::now().timestamp())?;
    log::info!("Started {}", today.format("%d.%m.%Y"));
    Ok(())
}

pub fn end(settings: Settings) -> Result<()> {
    let sync = git_sync(&settings);
    let tracker = Tracker::new(LogStore::new(&settings.location), &sync);
    let today = Local::now().date_naive();

    let worked = tracker.end(today, Utc::now().timestamp())?;
    log::info!("Ended {}", today.format("%d.%m.%Y"));
    println!("You spent {} at work today.", format_duration(worked));
    Ok(())
}

pub fn update(settings: Settings, update: Update) -> Result<()> {
    let sync = git_sync(&settings);
    let tracker = Tracker::new(LogStore::new(&settings.location), &sync);
    let today = Local::now().date_naive();
    let reason = update.reason.join(" ");

    tracker.record(today, Utc::now().timestamp(), EventKind::Note(reason))?;
    log::info!("Updated {}", today.format("%d.%m.%Y"));
    Ok(())
}

pub fn take_break(settings: Settings, take_break: Break) -> Result<()> {
    let sync = git_sync(&settings);
    let tracker = Tracker::new(LogStore::new(&settings.location), &sync);
    let today = Local::now().date_naive();
    let label = take_break.label.join(" ");

    tracker.record(today, Utc::now().timestamp(), EventKind::Break(label))?;
    log::info!("On a break since now, enjoy!");
    Ok(())
}

pub fn status(settings: Settings, status: Status) -> Result<()> {
    let sync = git_sync(&settings);
    let tracker = Tracker::new(LogStore::new(&settings.location), &sync);
    let date = status
        .date
        .map(|date| {
            parse_date(&date).ok_or(anyhow!("could not parse date {date}, expected DD.MM.YYYY"))
        })
        .unwrap_or_else(|| Ok(Local::now().date_naive()))?;

    let worked = tracker.status(date, Utc::now().timestamp())?;
    println!(
        "You have worked {} on {}.",
        format_duration(worked),
        date.format("%d.%m.%Y")
    );
    Ok(())
}

pub fn setup() -> Result<()> {
    if config::settings_exist() {
        println!("NOTE: You already have a work log set up!");
    }

    let location = prompt("Where can the repo be found on your machine?: ")?;
    let location = std::path::absolute(location.trim())?;
    let answer = prompt(&format!("Confirm this path is {location:?} - y/N: "))?;
    if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
        bail!("setup cancelled");
    }

    let remote = prompt_with_default("Set correct git remote", "origin")?;
    println!("Using git remote: {remote}");

    let branch = prompt_with_default("Set correct git branch", "master")?;
    println!("Using git branch: {branch}");

    let settings = Settings {
        location,
        git: GitSettings { remote, branch },
    };

    println!("Save the settings by running this command:");
    println!();
    println!(
        "export {}='{}'",
        config::SETTINGS_VAR,
        settings.to_json()?
    );
    println!();
    Ok(())
}

fn prompt(question: &str) -> Result<String> {
    print!("{question}");
    stdout().flush()?;
    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    Ok(answer)
}

fn prompt_with_default(question: &str, default: &str) -> Result<String> {
    let answer = prompt(&format!("{question} (default: {default}): "))?;
    let answer = answer.trim();
    if answer.is_empty() {
        Ok(default.to_owned())
    } else {
        Ok(answer.to_owned())
    }
}
