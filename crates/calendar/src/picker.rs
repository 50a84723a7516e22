use serde::Serialize;
use time::Date;

use nutrio_shared::{first_of_month, next_month, previous_month};

use crate::{
    CompletionData, MonthDirection, completion_for, is_date_selectable, is_month_in_range,
    month::month_grid, month_year_label,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PickerCell {
    Blank,
    Day {
        date: Date,
        day: u8,
        completion: f64,
        is_selected: bool,
        is_selectable: bool,
    },
}

/// Month calendar modal. Paging and selection stay within the last year.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DatePicker {
    today: Date,
    visible_month: Date,
    selected: Date,
}

impl DatePicker {
    pub fn open(initial: Date, today: Date) -> Self {
        Self {
            today,
            visible_month: first_of_month(initial),
            selected: initial,
        }
    }

    pub fn selected(&self) -> Date {
        self.selected
    }

    pub fn visible_month(&self) -> Date {
        self.visible_month
    }

    pub fn label(&self) -> String {
        month_year_label(self.visible_month)
    }

    pub fn can_go_previous(&self) -> bool {
        is_month_in_range(
            previous_month(self.visible_month),
            MonthDirection::Previous,
            self.today,
        )
    }

    pub fn can_go_next(&self) -> bool {
        is_month_in_range(
            next_month(self.visible_month),
            MonthDirection::Next,
            self.today,
        )
    }

    /// Returns whether the visible month changed.
    pub fn go_to_previous_month(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }

        self.visible_month = previous_month(self.visible_month);
        true
    }

    pub fn go_to_next_month(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }

        self.visible_month = next_month(self.visible_month);
        true
    }

    /// Select a day of the visible month. Days outside the selectable window
    /// are ignored.
    pub fn select_day(&mut self, day: u8) -> bool {
        let Ok(date) = self.visible_month.replace_day(day) else {
            return false;
        };

        if !is_date_selectable(date, self.today) {
            tracing::debug!(date = %date, "date not selectable");
            return false;
        }

        self.selected = date;
        true
    }

    pub fn cells(&self, data: &CompletionData) -> Vec<PickerCell> {
        month_grid(self.visible_month)
            .into_iter()
            .map(|cell| match cell {
                None => PickerCell::Blank,
                Some(day) => {
                    let date = self.visible_month + time::Duration::days(i64::from(day) - 1);

                    PickerCell::Day {
                        date,
                        day,
                        completion: completion_for(date, data),
                        is_selected: date == self.selected,
                        is_selectable: is_date_selectable(date, self.today),
                    }
                }
            })
            .collect()
    }

    pub fn confirm(self) -> Date {
        self.selected
    }
}
