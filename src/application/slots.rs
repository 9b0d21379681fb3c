//! Slot-boundary and interval-overlap arithmetic.
//!
//! Pure CPU-only helpers behind the availability engine and the booking
//! conflict check. All math runs on whole minutes of the day so a seating
//! can never silently wrap past midnight.

use chrono::{NaiveTime, Timelike};

/// Candidate start times are spaced this many minutes apart.
pub const SLOT_INTERVAL_MINUTES: u32 = 15;

fn minutes_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

fn time_from_minutes(m: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(m / 60, m % 60, 0)
}

/// Round a time up to the next interval boundary. Already-aligned times
/// are returned unchanged.
pub fn round_up_to_boundary(time: NaiveTime, interval_minutes: u32) -> NaiveTime {
    let total = minutes_of_day(time);
    let remainder = total % interval_minutes;
    if remainder == 0 {
        return time;
    }
    // Rounding past 23:59 leaves no candidate starts anyway.
    time_from_minutes(total + interval_minutes - remainder).unwrap_or(time)
}

/// Half-open interval overlap: `[a_start, a_end)` vs `[b_start, b_end)`.
/// Touching endpoints (back-to-back seatings) do not conflict.
pub fn overlaps(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    a_start < b_end && a_end > b_start
}

/// End of a seating that starts at `start` and runs `duration_minutes`.
/// Callers guarantee the seating fits within the calendar day
/// (enforced by the `close_time - duration` bound on candidate starts).
pub fn seating_end(start: NaiveTime, duration_minutes: i32) -> NaiveTime {
    time_from_minutes(minutes_of_day(start) + duration_minutes.max(0) as u32)
        .unwrap_or_else(|| NaiveTime::from_hms_opt(23, 59, 59).expect("valid time"))
}

/// Enumerate candidate seating starts between `open` and
/// `close - duration`, stepping by `interval_minutes` from the first
/// boundary at or after `open`.
///
/// Returns an empty list when the window is shorter than one seating.
pub fn candidate_starts(
    open: NaiveTime,
    close: NaiveTime,
    duration_minutes: i32,
    interval_minutes: u32,
) -> Vec<NaiveTime> {
    if duration_minutes <= 0 {
        return Vec::new();
    }

    let open_min = minutes_of_day(round_up_to_boundary(open, interval_minutes));
    let close_min = minutes_of_day(close);
    let duration = duration_minutes as u32;

    let Some(last_start) = close_min.checked_sub(duration) else {
        return Vec::new();
    };

    (open_min..=last_start)
        .step_by(interval_minutes as usize)
        .filter_map(time_from_minutes)
        .collect()
}
