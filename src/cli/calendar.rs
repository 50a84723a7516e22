use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Subcommand;
use nutrio_calendar::{CompletionData, DatePicker, PickerCell, today_in, week_view};
use time::{Date, Month};

#[derive(Subcommand)]
pub enum Command {
    /// Week slider around a date
    Week {
        /// Selected date (YYYY-MM-DD), today when omitted
        #[arg(long)]
        date: Option<String>,
        /// JSON map of date key to completion percentage
        #[arg(long)]
        completion: Option<PathBuf>,
    },
    /// Month grid of the date picker
    Month {
        #[arg(long)]
        year: i32,
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=12))]
        month: u8,
        #[arg(long)]
        completion: Option<PathBuf>,
    },
}

pub fn run(config: crate::Config, command: Command) -> anyhow::Result<()> {
    let today = today_in(config.calendar.timezone);

    match command {
        Command::Week { date, completion } => {
            let selected = match date {
                Some(date) => nutrio_shared::parse_date_key(&date)?,
                None => today,
            };

            week(selected, today, &load_completion(completion.as_deref())?);
        }
        Command::Month {
            year,
            month,
            completion,
        } => {
            let first = Date::from_calendar_date(year, Month::try_from(month)?, 1)?;

            month_grid(first, today, &load_completion(completion.as_deref())?);
        }
    }

    Ok(())
}

fn load_completion(path: Option<&Path>) -> anyhow::Result<CompletionData> {
    let Some(path) = path else {
        return Ok(CompletionData::new());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(serde_json::from_str(&content)?)
}

fn week(selected: Date, today: Date, data: &CompletionData) {
    for day in week_view(selected, today, data) {
        let marker = match (day.is_selected, day.is_disabled) {
            (true, _) => ">",
            (_, true) => "-",
            _ => " ",
        };
        let check = if day.is_complete { "done" } else { "" };

        println!(
            "{marker} {} {:>2}  {:>5.1}%  {check}",
            day.letter, day.day, day.completion
        );
    }
}

fn month_grid(first: Date, today: Date, data: &CompletionData) {
    let picker = DatePicker::open(first, today);

    println!("{}", picker.label());
    println!(" S   M   T   W   T   F   S");

    for row in picker.cells(data).chunks(7) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                PickerCell::Blank => "   ".to_owned(),
                PickerCell::Day {
                    day,
                    completion,
                    is_selectable,
                    ..
                } => {
                    let mark = if !is_selectable {
                        ' '
                    } else if *completion >= 100.0 {
                        '*'
                    } else {
                        '.'
                    };

                    format!("{day:>2}{mark}")
                }
            })
            .collect();

        println!("{}", line.join(" "));
    }
}
