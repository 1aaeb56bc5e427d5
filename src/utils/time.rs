use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Format an hour and minute as a zero-padded HH:MM string
///
/// Values are not range checked, `25:00` is formatted as is.
pub fn format_hhmm(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}

/// Add whole hours to an HH:MM string, wrapping the hour modulo 24
///
/// The minute part is carried over unchanged. Returns `None` when the
/// hour part is not numeric.
pub fn add_hours_wrapping(time_str: &str, hours: u64) -> Option<String> {
    let (hour_str, minute_str) = time_str.split_once(':')?;
    let hour = hour_str.parse::<u64>().ok()?;
    let end_hour = (hour % 24 + hours % 24) % 24;
    Some(format!("{:02}:{}", end_hour, minute_str))
}

/// Offset a date by a number of days, `None` if chrono's range is exceeded
pub fn offset_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// Build a date from a 1-based month and a day within `year`
///
/// Out-of-range values carry over the way a calendar date object does:
/// month 13 is January of the following year, day 32 spills into the next
/// month and day 0 is the last day of the previous month.
pub fn date_from_month_day(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12)).ok()? + 1;
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    offset_days(first, i64::from(day) - 1)
}

/// Days from `from` to the next `target` weekday, always in 1..=7
///
/// The same weekday resolves a full week ahead rather than to today.
pub fn days_until_weekday(from: Weekday, target: Weekday) -> i64 {
    let distance = (target.num_days_from_sunday() + 7 - from.num_days_from_sunday()) % 7;
    if distance == 0 {
        7
    } else {
        i64::from(distance)
    }
}

/// Next occurrence of `target` strictly after `date`
pub fn next_weekday(date: NaiveDate, target: Weekday) -> Option<NaiveDate> {
    offset_days(date, days_until_weekday(date.weekday(), target))
}
