//! Due Date Helpers
//!
//! Parsing and classification of server timestamps. The server stores naive
//! UTC timestamps; display and form values use the browser's local time.

use chrono::{DateTime, Duration, Local, NaiveDateTime, TimeZone, Utc};

/// How close a deadline is, for styling the due-date badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    DueSoon,
    Upcoming,
}

impl DueStatus {
    pub fn css_class(&self) -> &'static str {
        match self {
            DueStatus::Overdue => "due-date overdue",
            DueStatus::DueSoon => "due-date due-soon",
            DueStatus::Upcoming => "due-date",
        }
    }
}

/// Parse a server or form timestamp. Naive values are treated as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// A deadline in the past is overdue; within the next 24 hours it is due
/// soon; anything later is neutral.
pub fn classify(due: DateTime<Utc>, now: DateTime<Utc>) -> DueStatus {
    if due < now {
        DueStatus::Overdue
    } else if due - now <= Duration::hours(24) {
        DueStatus::DueSoon
    } else {
        DueStatus::Upcoming
    }
}

pub fn due_status(raw: &str) -> Option<DueStatus> {
    parse_timestamp(raw).map(|due| classify(due, Utc::now()))
}

/// Convert a stored timestamp to the `datetime-local` input format, in the
/// browser's local time zone.
pub fn to_datetime_local(raw: &str) -> Option<String> {
    parse_timestamp(raw).map(|dt| dt.with_timezone(&Local).format("%Y-%m-%dT%H:%M").to_string())
}

/// Human-readable deadline, e.g. "Sep  1, 2026, 10:30 AM".
pub fn format_due(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%b %e, %Y, %I:%M %p")
                .to_string()
        })
        .unwrap_or_else(|| raw.to_string())
}

/// Date-only rendering for created/updated lines.
pub fn format_day(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.with_timezone(&Local).format("%b %e, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(raw: &str) -> DateTime<Utc> {
        parse_timestamp(raw).unwrap()
    }

    #[test]
    fn test_parse_accepts_server_and_form_shapes() {
        assert!(parse_timestamp("2026-09-01T10:30:00").is_some());
        assert!(parse_timestamp("2026-09-01T10:30:00.123456").is_some());
        assert!(parse_timestamp("2026-09-01T10:30").is_some());
        assert!(parse_timestamp("2026-09-01T10:30:00+00:00").is_some());
        assert!(parse_timestamp("not a date").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn test_past_deadline_is_overdue() {
        let now = at("2026-08-30T12:00:00");
        assert_eq!(classify(at("2026-08-30T11:59:00"), now), DueStatus::Overdue);
        assert_eq!(classify(at("2020-01-01T00:00:00"), now), DueStatus::Overdue);
    }

    #[test]
    fn test_deadline_within_a_day_is_due_soon() {
        let now = at("2026-08-30T12:00:00");
        assert_eq!(classify(at("2026-08-30T13:00:00"), now), DueStatus::DueSoon);
        assert_eq!(classify(at("2026-08-31T12:00:00"), now), DueStatus::DueSoon);
    }

    #[test]
    fn test_later_deadline_is_neutral() {
        let now = at("2026-08-30T12:00:00");
        assert_eq!(
            classify(at("2026-08-31T12:00:01"), now),
            DueStatus::Upcoming
        );
        assert_eq!(
            classify(at("2026-09-15T00:00:00"), now),
            DueStatus::Upcoming
        );
    }

    #[test]
    fn test_unparseable_due_date_has_no_status() {
        assert_eq!(due_status("soon-ish"), None);
    }

    #[test]
    fn test_unparseable_timestamps_render_verbatim() {
        assert_eq!(format_due("soon-ish"), "soon-ish");
        assert_eq!(format_day(""), "");
    }
}
