#[cfg(test)]
mod tests {
    use crate::window::{derive_window, is_future_start};
    use chrono::{Duration, TimeZone, Utc};

    #[test]
    fn test_derive_window_simple() {
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap();
        let window = derive_window(Some(start), 60).expect("window should derive");
        assert_eq!(window.start_time, start);
        assert_eq!(
            window.end_time,
            Utc.with_ymd_and_hms(2030, 1, 1, 11, 0, 0).unwrap()
        );
        assert_eq!(window.duration_minutes(), 60);
    }

    #[test]
    fn test_derive_window_no_start_selected() {
        assert!(derive_window(None, 60).is_none());
    }

    #[test]
    fn test_derive_window_rolls_over_day_and_month() {
        // 2024-01-31T23:50 + 20 min => 2024-02-01T00:10
        let start = Utc.with_ymd_and_hms(2024, 1, 31, 23, 50, 0).unwrap();
        let window = derive_window(Some(start), 20).unwrap();
        assert_eq!(
            window.end_time,
            Utc.with_ymd_and_hms(2024, 2, 1, 0, 10, 0).unwrap()
        );
        assert_eq!(window.duration_minutes(), 20);
    }

    #[test]
    fn test_derive_window_rolls_over_year() {
        let start = Utc.with_ymd_and_hms(2029, 12, 31, 23, 30, 0).unwrap();
        let window = derive_window(Some(start), 45).unwrap();
        assert_eq!(
            window.end_time,
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 15, 0).unwrap()
        );
    }

    #[test]
    fn test_derive_window_leap_day() {
        // 2024 is a leap year, so Feb 28 23:30 + 60 min lands on Feb 29.
        let start = Utc.with_ymd_and_hms(2024, 2, 28, 23, 30, 0).unwrap();
        let window = derive_window(Some(start), 60).unwrap();
        assert_eq!(
            window.end_time,
            Utc.with_ymd_and_hms(2024, 2, 29, 0, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_derive_window_zero_duration() {
        let start = Utc.with_ymd_and_hms(2030, 6, 1, 9, 0, 0).unwrap();
        let window = derive_window(Some(start), 0).unwrap();
        assert_eq!(window.start_time, window.end_time);
        assert_eq!(window.duration_minutes(), 0);
    }

    #[test]
    fn test_duration_invariant_holds_for_various_inputs() {
        let starts = [
            Utc.with_ymd_and_hms(2024, 1, 31, 23, 50, 0).unwrap(),
            Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
        ];
        for start in starts {
            for minutes in [0, 1, 20, 60, 90, 24 * 60] {
                let window = derive_window(Some(start), minutes).unwrap();
                assert_eq!(window.duration_minutes(), minutes);
            }
        }
    }

    #[test]
    fn test_derive_window_unrepresentable_end_is_none() {
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap();
        // Too many minutes for a chrono Duration at all.
        assert!(derive_window(Some(start), i64::MAX).is_none());
        // Representable as a Duration, but the end falls past the calendar.
        assert!(derive_window(Some(start), 1_000_000_000_000).is_none());
    }

    #[test]
    fn test_is_future_start_strict() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap();

        // Equal to now is invalid: strictly-in-the-future is required.
        assert!(!is_future_start(now, now));
        assert!(!is_future_start(now - Duration::minutes(1), now));
        assert!(!is_future_start(now - Duration::days(365), now));

        assert!(is_future_start(now + Duration::seconds(1), now));
        assert!(is_future_start(now + Duration::days(30), now));
    }
}
