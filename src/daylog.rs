// SPDX-License-Identifier: MPL-2.0

use anyhow::{Context, Result};

/// A single timestamped entry in a day log.
///
/// The kind of an event is decided once, when the line is parsed, rather
/// than being re-derived from the label text at every use site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub timestamp: i64,
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Start,
    End,
    /// Time excluded from the worked duration.  Stored without the leading
    /// `-` marker; serialization puts it back.
    Break(String),
    /// A free-text note about what is currently being worked on.
    Note(String),
}

impl Event {
    pub fn new(timestamp: i64, kind: EventKind) -> Event {
        Event { timestamp, kind }
    }

    /// Parses one `<timestamp> - <label>` line.
    ///
    /// The line is split on the first `" - "` only, so labels containing the
    /// separator themselves stay intact.  Malformed lines are a
    /// data-integrity error and are surfaced rather than skipped: computing
    /// a duration from a log we cannot fully read would silently produce a
    /// wrong answer.
    pub fn parse_line(line: &str) -> Result<Event> {
        let (timestamp, label) = line
            .split_once(" - ")
            .with_context(|| format!("day log line is missing the ' - ' separator: {line:?}"))?;
        let timestamp = timestamp
            .parse()
            .with_context(|| format!("day log line has a non-numeric timestamp: {line:?}"))?;

        let kind = match label {
            "Start" => EventKind::Start,
            "End" => EventKind::End,
            label => match label.strip_prefix('-') {
                Some(name) => EventKind::Break(name.to_owned()),
                None => EventKind::Note(label.to_owned()),
            },
        };

        Ok(Event { timestamp, kind })
    }

    pub fn to_line(&self) -> String {
        match &self.kind {
            EventKind::Start => format!("{} - Start", self.timestamp),
            EventKind::End => format!("{} - End", self.timestamp),
            EventKind::Break(name) => format!("{} - -{name}", self.timestamp),
            EventKind::Note(text) => format!("{} - {text}", self.timestamp),
        }
    }
}

/// All events recorded for one calendar day, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLog {
    events: Vec<Event>,
}

impl DayLog {
    pub fn parse(contents: &str) -> Result<DayLog> {
        let events = contents
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(Event::parse_line)
            .collect::<Result<Vec<_>>>()?;
        Ok(DayLog { events })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    pub fn is_ended(&self) -> bool {
        matches!(self.last(), Some(event) if event.kind == EventKind::End)
    }

    /// Computes the net worked time in seconds.
    ///
    /// Scans once, in order: everything before the first `Start` is ignored,
    /// closed break intervals are subtracted, and the scan stops at the
    /// first `End`.  An in-progress day (no `End` yet) is measured against
    /// `now`.  A break that is still open when the day ends is NOT
    /// subtracted; that matches the recorded format's intent (the break was
    /// never closed, so its length is unknown) and is deliberate, documented
    /// behavior.
    pub fn worked_seconds(&self, now: i64) -> Result<i64> {
        let mut events = self.events.iter();
        let start = events
            .find(|event| event.kind == EventKind::Start)
            .context("day log has no Start event")?
            .timestamp;

        let mut break_time = 0;
        let mut on_break: Option<i64> = None;
        let mut end = None;
        for event in events {
            match &event.kind {
                EventKind::End => {
                    end = Some(event.timestamp);
                    break;
                }
                EventKind::Break(_) => {
                    if on_break.is_none() {
                        on_break = Some(event.timestamp);
                    }
                }
                EventKind::Start | EventKind::Note(_) => {
                    if let Some(since) = on_break.take() {
                        break_time += event.timestamp - since;
                    }
                }
            }
        }

        Ok((end.unwrap_or(now) - start) - break_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_start_line() {
        let event = Event::parse_line("1000 - Start").unwrap();
        assert_eq!(event, Event::new(1000, EventKind::Start));
    }

    #[test]
    fn parses_end_line() {
        let event = Event::parse_line("2000 - End").unwrap();
        assert_eq!(event, Event::new(2000, EventKind::End));
    }

    #[test]
    fn parses_break_line_without_the_marker() {
        let event = Event::parse_line("1500 - -lunch").unwrap();
        assert_eq!(event, Event::new(1500, EventKind::Break("lunch".to_owned())));
    }

    #[test]
    fn parses_anything_else_as_a_note() {
        let event = Event::parse_line("1800 - lunch over").unwrap();
        assert_eq!(
            event,
            Event::new(1800, EventKind::Note("lunch over".to_owned()))
        );
    }

    #[test]
    fn splits_only_on_the_first_separator() {
        let event = Event::parse_line("1800 - fixing foo - the sequel").unwrap();
        assert_eq!(
            event,
            Event::new(1800, EventKind::Note("fixing foo - the sequel".to_owned()))
        );
    }

    #[test]
    fn rejects_line_without_separator() {
        let err = Event::parse_line("garbage").unwrap_err();
        assert!(err.to_string().contains("separator"));
    }

    #[test]
    fn rejects_line_with_non_numeric_timestamp() {
        let err = Event::parse_line("abc - Start").unwrap_err();
        assert!(err.to_string().contains("non-numeric timestamp"));
    }

    #[test]
    fn events_round_trip_through_their_line_form() {
        for line in ["1000 - Start", "1500 - -lunch", "1800 - code review", "2000 - End"] {
            assert_eq!(Event::parse_line(line).unwrap().to_line(), line);
        }
    }

    #[test]
    fn duration_without_breaks_is_end_minus_start() {
        let log = DayLog::parse("1000 - Start\n2000 - End").unwrap();
        assert_eq!(log.worked_seconds(9999).unwrap(), 1000);
    }

    #[test]
    fn duration_subtracts_a_closed_break() {
        let log =
            DayLog::parse("1000 - Start\n1500 - -lunch\n1800 - lunch over\n2000 - End").unwrap();
        assert_eq!(log.worked_seconds(9999).unwrap(), 700);
    }

    #[test]
    fn in_progress_day_is_measured_against_now() {
        let log = DayLog::parse("1000 - Start").unwrap();
        assert_eq!(log.worked_seconds(1600).unwrap(), 600);
    }

    #[test]
    fn unterminated_break_is_not_subtracted() {
        let log = DayLog::parse("1000 - Start\n1500 - -errand\n2000 - End").unwrap();
        assert_eq!(log.worked_seconds(9999).unwrap(), 1000);
    }

    #[test]
    fn consecutive_break_events_keep_the_first_start_of_break() {
        let log = DayLog::parse(
            "1000 - Start\n1200 - -coffee\n1300 - -still out\n1400 - back\n2000 - End",
        )
        .unwrap();
        assert_eq!(log.worked_seconds(9999).unwrap(), 800);
    }

    #[test]
    fn events_before_the_first_start_are_ignored() {
        let log = DayLog::parse("500 - early note\n1000 - Start\n2000 - End").unwrap();
        assert_eq!(log.worked_seconds(9999).unwrap(), 1000);
    }

    #[test]
    fn scan_stops_at_the_first_end() {
        let log = DayLog::parse("1000 - Start\n2000 - End\n5000 - End").unwrap();
        assert_eq!(log.worked_seconds(9999).unwrap(), 1000);
    }

    #[test]
    fn missing_start_is_an_error() {
        let log = DayLog::parse("1500 - -lunch\n2000 - End").unwrap();
        assert!(log.worked_seconds(9999).is_err());
    }

    #[test]
    fn malformed_log_is_an_error_not_a_wrong_answer() {
        assert!(DayLog::parse("1000 - Start\nnot a log line\n2000 - End").is_err());
    }

    #[test]
    fn is_ended_reflects_the_last_event() {
        assert!(!DayLog::parse("1000 - Start").unwrap().is_ended());
        assert!(DayLog::parse("1000 - Start\n2000 - End").unwrap().is_ended());
    }
}
