//! Date parsing and window math for the filter engine.
//!
//! Week windows are Sunday-start. The current day is always injected by the
//! caller so preset windows are deterministic under test.

use chrono::{Datelike, Duration, NaiveDate};
use shared::{DateFilter, DatePreset};

/// Parse the day component of an ISO-8601 date or RFC 3339 timestamp string.
/// Returns `None` for anything unparseable; callers never panic on bad data.
pub fn parse_day(date_str: &str) -> Option<NaiveDate> {
    let day_part = date_str.split('T').next().unwrap_or(date_str).trim();
    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").ok()
}

/// The Sunday that starts the week containing `day`.
pub fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(day.weekday().num_days_from_sunday() as i64)
}

/// Inclusive day window. `end = None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDate,
    pub end: Option<NaiveDate>,
}

impl DayWindow {
    fn closed(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && self.end.map_or(true, |end| day <= end)
    }
}

/// Resolve a named preset to its day window relative to `today`.
/// `None` means the preset imposes no constraint (unknown token policy).
pub fn preset_window(preset: DatePreset, today: NaiveDate) -> Option<DayWindow> {
    let sunday = week_start(today);
    match preset {
        DatePreset::Today => Some(DayWindow::closed(today, today)),
        DatePreset::Tomorrow => {
            let tomorrow = today + Duration::days(1);
            Some(DayWindow::closed(tomorrow, tomorrow))
        }
        DatePreset::ThisWeek => Some(DayWindow::closed(sunday, sunday + Duration::days(6))),
        DatePreset::ThisWeekend => {
            // Saturday of the current week through the following Sunday.
            let saturday = sunday + Duration::days(6);
            Some(DayWindow::closed(saturday, saturday + Duration::days(1)))
        }
        DatePreset::NextWeek => Some(DayWindow::closed(
            sunday + Duration::days(7),
            sunday + Duration::days(13),
        )),
        DatePreset::Other => None,
    }
}

/// Resolve any date filter to a window, relative to `today` for presets.
/// `None` means no constraint.
pub fn filter_window(filter: &DateFilter, today: NaiveDate) -> Option<DayWindow> {
    match filter {
        DateFilter::Single { start } => Some(DayWindow::closed(*start, *start)),
        DateFilter::Range { start, end } => Some(DayWindow {
            start: *start,
            end: *end,
        }),
        DateFilter::Preset { preset } => preset_window(*preset, today),
    }
}

/// Apply a date filter to an item's date attribute. Items whose date is
/// missing or unparseable are excluded whenever the filter actually
/// constrains, and pass when it does not.
pub fn matches_date_filter(date_str: Option<&str>, filter: &DateFilter, today: NaiveDate) -> bool {
    match filter_window(filter, today) {
        None => true,
        Some(window) => date_str
            .and_then(parse_day)
            .map_or(false, |day| window.contains(day)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day("2025-06-14"), Some(day("2025-06-14")));
        assert_eq!(
            parse_day("2025-06-13T09:00:00-04:00"),
            Some(day("2025-06-13"))
        );
        assert_eq!(parse_day("TBA"), None);
        assert_eq!(parse_day(""), None);
    }

    #[test]
    fn test_week_start_is_sunday() {
        // 2025-06-12 is a Thursday; its week starts Sunday 2025-06-08.
        assert_eq!(week_start(day("2025-06-12")), day("2025-06-08"));
        // A Sunday is its own week start.
        assert_eq!(week_start(day("2025-06-08")), day("2025-06-08"));
    }

    #[test]
    fn test_this_weekend_window() {
        let today = day("2025-06-12"); // Thursday
        let window = preset_window(DatePreset::ThisWeekend, today).unwrap();
        assert_eq!(window.start, day("2025-06-14")); // Saturday
        assert_eq!(window.end, Some(day("2025-06-15"))); // Sunday
        assert!(window.contains(day("2025-06-14")));
        assert!(!window.contains(day("2025-06-17")));
    }

    #[test]
    fn test_this_week_and_next_week_windows() {
        let today = day("2025-06-12");
        let this_week = preset_window(DatePreset::ThisWeek, today).unwrap();
        assert_eq!(this_week.start, day("2025-06-08"));
        assert_eq!(this_week.end, Some(day("2025-06-14")));

        let next_week = preset_window(DatePreset::NextWeek, today).unwrap();
        assert_eq!(next_week.start, day("2025-06-15"));
        assert_eq!(next_week.end, Some(day("2025-06-21")));
    }

    #[test]
    fn test_today_and_tomorrow() {
        let today = day("2025-06-12");
        let filter = DateFilter::Preset {
            preset: DatePreset::Today,
        };
        assert!(matches_date_filter(Some("2025-06-12"), &filter, today));
        assert!(!matches_date_filter(Some("2025-06-13"), &filter, today));

        let filter = DateFilter::Preset {
            preset: DatePreset::Tomorrow,
        };
        assert!(matches_date_filter(Some("2025-06-13"), &filter, today));
    }

    #[test]
    fn test_unknown_preset_passes_everything() {
        let today = day("2025-06-12");
        let filter = DateFilter::Preset {
            preset: DatePreset::Other,
        };
        assert!(matches_date_filter(Some("1999-01-01"), &filter, today));
        assert!(matches_date_filter(Some("not a date"), &filter, today));
        assert!(matches_date_filter(None, &filter, today));
    }

    #[test]
    fn test_range_open_ended() {
        let today = day("2025-06-12");
        let filter = DateFilter::Range {
            start: day("2025-06-10"),
            end: None,
        };
        assert!(matches_date_filter(Some("2025-06-10"), &filter, today));
        assert!(matches_date_filter(Some("2026-01-01"), &filter, today));
        assert!(!matches_date_filter(Some("2025-06-09"), &filter, today));
    }

    #[test]
    fn test_invalid_date_excluded_under_active_filter() {
        let today = day("2025-06-12");
        let filter = DateFilter::Single {
            start: day("2025-06-12"),
        };
        assert!(!matches_date_filter(Some("garbage"), &filter, today));
        assert!(!matches_date_filter(None, &filter, today));
    }
}
