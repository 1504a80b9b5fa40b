use chrono::{Datelike, Local};

use crate::models::Season;

/// Season `months` ahead of `current_month` (1 = January).
///
/// Zero months means the current month. Used only when the caller gave no
/// explicit season.
pub fn infer_season(current_month: u32, months: u32) -> Season {
    let future_month = (u64::from(current_month) + u64::from(months) + 11) % 12;
    // future_month is always < 12
    Season::for_month_index(future_month as u32)
}

/// Current calendar month in local time, 1-based
pub fn current_month() -> u32 {
    Local::now().month()
}
