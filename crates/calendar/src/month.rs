use time::{Date, Month};

use nutrio_shared::{days_in_month, weekday_index};

/// Cells of a Sunday-first month grid. `None` pads the first and last rows.
pub fn generate_month_grid(year: i32, month: Month) -> nutrio_shared::Result<Vec<Option<u8>>> {
    let first = Date::from_calendar_date(year, month, 1)?;

    Ok(month_grid(first))
}

pub(crate) fn month_grid(first: Date) -> Vec<Option<u8>> {
    let leading = usize::from(weekday_index(first));
    let days = days_in_month(first.year(), first.month());

    let mut cells = vec![None; leading];
    cells.extend((1..=days).map(Some));

    let trailing = (7 - cells.len() % 7) % 7;
    cells.extend(std::iter::repeat_n(None, trailing));

    cells
}

/// Header label like `May 2025`.
pub fn month_year_label(date: Date) -> String {
    let month = date.month().to_string();
    let short: String = month.chars().take(3).collect();

    format!("{short} {:04}", date.year())
}
