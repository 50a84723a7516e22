use serde::Serialize;
use time::{Date, Duration};

use crate::{CompletionData, completion_for, is_future_date};

const WEEKDAY_LETTERS: [char; 7] = ['S', 'M', 'T', 'W', 'T', 'F', 'S'];

/// One cell of the week slider.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WeekDay {
    pub date: Date,
    pub key: String,
    pub letter: char,
    pub day: u8,
    pub completion: f64,
    pub is_complete: bool,
    pub is_selected: bool,
    pub is_disabled: bool,
}

/// The seven days from the Sunday on or before `selected`.
pub fn week_window(selected: Date) -> [Date; 7] {
    let sunday = selected - Duration::days(i64::from(nutrio_shared::weekday_index(selected)));

    std::array::from_fn(|i| sunday + Duration::days(i as i64))
}

/// First and last day of the week containing `selected`.
pub fn week_bounds(selected: Date) -> (Date, Date) {
    let window = week_window(selected);

    (window[0], window[6])
}

pub fn week_view(selected: Date, today: Date, data: &CompletionData) -> [WeekDay; 7] {
    week_window(selected).map(|date| {
        let completion = completion_for(date, data);

        WeekDay {
            date,
            key: nutrio_shared::date_key(date),
            letter: WEEKDAY_LETTERS[usize::from(nutrio_shared::weekday_index(date))],
            day: date.day(),
            completion,
            is_complete: completion >= 100.0,
            is_selected: date == selected,
            is_disabled: is_future_date(date, today),
        }
    })
}
