use crate::utils::time::{ClockTime, MINUTES_PER_DAY};

/// Minutes worked between two punches.
///
/// A clock-out earlier than the clock-in is read as crossing midnight.
/// A missing punch gives 0; surfacing the gap is the anomaly detector's job.
pub fn calculate_duration_in_minutes(
    clock_in: Option<ClockTime>,
    clock_out: Option<ClockTime>,
) -> i64 {
    let (Some(start), Some(end)) = (clock_in, clock_out) else {
        return 0;
    };

    let in_minutes = start.minutes_since_midnight();
    let mut out_minutes = end.minutes_since_midnight();
    if out_minutes < in_minutes {
        out_minutes += MINUTES_PER_DAY;
    }

    out_minutes - in_minutes
}
