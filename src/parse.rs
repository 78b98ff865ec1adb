// SPDX-License-Identifier: MPL-2.0

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

static REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?x)
^ # anchor to start of string

(\d{2})\.(\d{2})\.(\d{4}) # day.month.year

$ # anchor to end of string
",
    )
    .expect("Could not parse Regex")
});

/// Parses a `DD.MM.YYYY` date argument.  Returns `None` for anything that
/// does not match the format or does not name a real calendar day.
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    let captures = REGEX.captures(date.trim())?;

    NaiveDate::from_ymd_opt(
        captures[3].parse().ok()?,
        captures[2].parse().ok()?,
        captures[1].parse().ok()?,
    )
}
