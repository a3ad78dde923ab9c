#[cfg(test)]
mod tests {
    use crate::evaluator::BookingWindowEvaluator;
    use chrono::{Duration, TimeZone, Utc};

    fn now() -> chrono::DateTime<chrono::Utc> {
        Utc.with_ymd_and_hms(2030, 1, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_idle_evaluator_cannot_submit() {
        let evaluator = BookingWindowEvaluator::new(60);
        assert!(evaluator.current_window().is_none());
        assert!(!evaluator.can_submit(now()));
    }

    #[test]
    fn test_happy_path_submission_gate() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let start = Utc.with_ymd_and_hms(2030, 1, 1, 10, 0, 0).unwrap();

        let window = evaluator.select_start(Some(start)).expect("window derived");
        assert_eq!(
            window.end_time,
            Utc.with_ymd_and_hms(2030, 1, 1, 11, 0, 0).unwrap()
        );

        // No availability answer yet: submission stays disabled.
        assert!(!evaluator.can_submit(now()));

        assert!(evaluator.record_availability(window, true));
        assert!(evaluator.can_submit(now()));
    }

    #[test]
    fn test_past_start_disables_submission_regardless_of_availability() {
        let mut evaluator = BookingWindowEvaluator::new(30);
        let start = now() - Duration::hours(1);

        let window = evaluator.select_start(Some(start)).unwrap();
        evaluator.record_availability(window, true);

        assert!(!evaluator.can_submit(now()));
        // Start equal to now is also invalid.
        let window = evaluator.select_start(Some(now())).unwrap();
        evaluator.record_availability(window, true);
        assert!(!evaluator.can_submit(now()));
    }

    #[test]
    fn test_unavailable_slot_disables_submission() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let window = evaluator
            .select_start(Some(now() + Duration::hours(2)))
            .unwrap();
        evaluator.record_availability(window, false);
        assert!(!evaluator.can_submit(now()));
    }

    #[test]
    fn test_new_window_clears_previous_availability() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let first = evaluator
            .select_start(Some(now() + Duration::hours(1)))
            .unwrap();
        evaluator.record_availability(first, true);
        assert!(evaluator.can_submit(now()));

        // Choosing a different start supersedes the confirmed window.
        evaluator.select_start(Some(now() + Duration::hours(3)));
        assert!(evaluator.availability_for_current().is_none());
        assert!(!evaluator.can_submit(now()));
    }

    #[test]
    fn test_stale_result_for_superseded_window_is_discarded() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let first = evaluator
            .select_start(Some(now() + Duration::hours(1)))
            .unwrap();
        let second = evaluator
            .select_start(Some(now() + Duration::hours(2)))
            .unwrap();

        // The late answer for the first window arrives after the user moved on.
        assert!(!evaluator.record_availability(first, true));
        assert!(evaluator.availability_for_current().is_none());
        assert!(!evaluator.can_submit(now()));

        // The answer for the current window still lands normally.
        assert!(evaluator.record_availability(second, true));
        assert!(evaluator.can_submit(now()));
    }

    #[test]
    fn test_earlier_available_window_does_not_leak_into_current() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let first = evaluator
            .select_start(Some(now() + Duration::hours(1)))
            .unwrap();
        evaluator.record_availability(first, true);

        let second = evaluator
            .select_start(Some(now() + Duration::hours(4)))
            .unwrap();
        evaluator.record_availability(second, false);

        // The earlier "available" answer must not enable submission now.
        assert!(!evaluator.can_submit(now()));
    }

    #[test]
    fn test_reselecting_same_start_keeps_availability() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let start = now() + Duration::hours(1);
        let window = evaluator.select_start(Some(start)).unwrap();
        evaluator.record_availability(window, true);

        // Same start derives an identical window; the answer still applies.
        evaluator.select_start(Some(start));
        assert_eq!(evaluator.availability_for_current(), Some(true));
    }

    #[test]
    fn test_clearing_start_returns_to_idle() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let window = evaluator
            .select_start(Some(now() + Duration::hours(1)))
            .unwrap();
        evaluator.record_availability(window, true);

        assert!(evaluator.select_start(None).is_none());
        assert!(evaluator.current_window().is_none());
        assert!(!evaluator.can_submit(now()));
    }

    #[test]
    fn test_submission_in_flight_disables_resubmit() {
        let mut evaluator = BookingWindowEvaluator::new(60);
        let window = evaluator
            .select_start(Some(now() + Duration::hours(1)))
            .unwrap();
        evaluator.record_availability(window, true);
        assert!(evaluator.can_submit(now()));

        evaluator.begin_submission();
        assert!(!evaluator.can_submit(now()));

        evaluator.finish_submission();
        assert!(evaluator.can_submit(now()));
    }
}
