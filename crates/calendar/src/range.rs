use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use time::{Date, Duration, OffsetDateTime};
use time_tz::{ToTimezone, timezones};

use nutrio_shared::first_of_month;

#[derive(
    EnumString, Display, AsRefStr, Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum MonthDirection {
    Previous,
    Next,
}

/// Current local date in the named IANA zone, UTC when the name is unknown.
pub fn today_in(tz: impl Into<String>) -> Date {
    let tz = tz.into();
    let now = OffsetDateTime::now_utc();

    match timezones::get_by_name(&tz) {
        Some(tz) => now.to_timezone(tz).date(),
        None => {
            tracing::warn!(timezone = %tz, "unknown timezone, using UTC");
            now.date()
        }
    }
}

pub fn is_future_date(date: Date, today: Date) -> bool {
    date > today
}

/// Same day one year before `today`. 29 February maps to 28 February.
pub fn min_selectable_date(today: Date) -> Date {
    let year = today.year() - 1;

    today
        .replace_year(year)
        .or_else(|_| today.replace_day(28).and_then(|d| d.replace_year(year)))
        .ok()
        .or_else(|| today.checked_sub(Duration::days(366)))
        .unwrap_or(today)
}

pub fn is_date_selectable(date: Date, today: Date) -> bool {
    min_selectable_date(today) <= date && date <= today
}

/// Whether the month containing `candidate` can be shown when paging in
/// `direction`.
pub fn is_month_in_range(candidate: Date, direction: MonthDirection, today: Date) -> bool {
    let month = first_of_month(candidate);

    match direction {
        MonthDirection::Previous => month >= first_of_month(min_selectable_date(today)),
        MonthDirection::Next => month <= first_of_month(today),
    }
}
