//! Time utilities

use chrono::{Days, NaiveDate, NaiveTime};

/// Convert Codeforces epoch seconds to epoch milliseconds
pub fn seconds_to_millis(seconds: i64) -> i64 {
    seconds.saturating_mul(1000)
}

/// Epoch milliseconds of UTC midnight at the start of `date`
pub fn start_of_day_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Inclusive millisecond bounds covering every instant from the start of
/// `from` to the end of `to`, in UTC
pub fn day_range_millis(from: NaiveDate, to: NaiveDate) -> (i64, i64) {
    let end = to
        .checked_add_days(Days::new(1))
        .map(|next| start_of_day_millis(next) - 1)
        .unwrap_or(i64::MAX);

    (start_of_day_millis(from), end)
}
