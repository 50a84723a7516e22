use time::{Date, Duration, Month, OffsetDateTime, macros::format_description};

/// Canonical `YYYY-MM-DD` key used to index per-day data.
///
/// Built from the calendar components of `date` as given; callers holding a
/// zoned timestamp should go through [`date_key_of`] so the local day is kept.
pub fn date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Date key of the local calendar day of `datetime`.
///
/// The offset carried by `datetime` is the local one. Converting to UTC first
/// would move late-evening timestamps in negative offsets onto the next day.
pub fn date_key_of(datetime: OffsetDateTime) -> String {
    date_key(datetime.date())
}

pub fn parse_date_key(value: &str) -> crate::Result<Date> {
    if value.len() != 10 || !value.is_ascii() {
        return Err(crate::Error::InvalidDate(value.to_owned()));
    }

    Ok(Date::parse(
        value,
        format_description!("[year]-[month]-[day]"),
    )?)
}

/// Day of week counted from Sunday (Sunday = 0, Saturday = 6).
pub fn weekday_index(date: Date) -> u8 {
    date.weekday().number_days_from_sunday()
}

pub fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::February if time::util::is_leap_year(year) => 29,
        Month::February => 28,
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

pub fn first_of_month(date: Date) -> Date {
    date - Duration::days(i64::from(date.day()) - 1)
}

pub fn last_of_month(date: Date) -> Date {
    let first = first_of_month(date);
    first + Duration::days(i64::from(days_in_month(first.year(), first.month())) - 1)
}

/// First day of the month following the month of `date`.
pub fn next_month(date: Date) -> Date {
    last_of_month(date) + Duration::days(1)
}

/// First day of the month preceding the month of `date`.
pub fn previous_month(date: Date) -> Date {
    first_of_month(first_of_month(date) - Duration::days(1))
}
