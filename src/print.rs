// SPDX-License-Identifier: MPL-2.0

/// Renders a worked duration as `H:MM:SS` for command output.
pub fn format_duration(mut seconds: i64) -> String {
    let negative = seconds < 0;
    if negative {
        seconds = -seconds;
    }
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;
    format!(
        "{}{hours}:{minutes:02}:{seconds:02}",
        if negative { "-" } else { "" }
    )
}
