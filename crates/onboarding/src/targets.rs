use std::ops::RangeInclusive;

use nutrio_shared::onboarding::WeightGoal;
use strum::{AsRefStr, Display};
use time::{Date, Month};

use crate::OnboardingAnswers;

/// Options offered by the weight pickers, in pounds.
pub const WEIGHT_OPTIONS: RangeInclusive<u16> = 50..=400;

/// Offset applied to the current weight when suggesting a target.
const TARGET_WEIGHT_SWING: u16 = 20;

pub const DEFAULT_GOAL_SPEED: f32 = 1.0;

pub const FIRST_BIRTH_YEAR: i32 = 1940;

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SpeedCategory {
    Gradual,
    Moderate,
    Accelerated,
}

/// Value the goal-weight picker starts on: the saved target when it is a
/// valid option, otherwise the current weight moved 20 lbs in the direction
/// of the weight goal.
pub fn initial_target_weight(answers: &OnboardingAnswers) -> u16 {
    let saved = answers
        .target_weight
        .parse::<u16>()
        .ok()
        .filter(|weight| WEIGHT_OPTIONS.contains(weight));

    if let Some(saved) = saved {
        return saved;
    }

    let current = answers.current_weight;
    let suggested = match answers.weight_goal {
        Some(WeightGoal::Increase) => current.saturating_add(TARGET_WEIGHT_SWING),
        Some(WeightGoal::Loss) => current.saturating_sub(TARGET_WEIGHT_SWING),
        _ => current,
    };

    suggested.clamp(*WEIGHT_OPTIONS.start(), *WEIGHT_OPTIONS.end())
}

/// Signed difference shown under the goal-weight picker, e.g. `"-20 lbs"`.
pub fn net_change_label(current_weight: u16, target_weight: u16) -> String {
    let change = i32::from(target_weight) - i32::from(current_weight);
    let sign = if change >= 0 { "+" } else { "" };

    format!("{sign}{change} lbs")
}

/// Saved pace, or the default when nothing usable was stored.
pub fn goal_speed(answers: &OnboardingAnswers) -> f32 {
    answers
        .goal_speed
        .as_deref()
        .and_then(|speed| speed.parse::<f32>().ok())
        .filter(|speed| speed.is_finite())
        .unwrap_or(DEFAULT_GOAL_SPEED)
}

/// Pace stored in the answers, one decimal.
pub fn format_goal_speed(speed: f32) -> String {
    format!("{speed:.1}")
}

pub fn speed_category(speed: f32) -> SpeedCategory {
    if speed < 1.0 {
        SpeedCategory::Gradual
    } else if speed <= 2.0 {
        SpeedCategory::Moderate
    } else {
        SpeedCategory::Accelerated
    }
}

pub fn birth_years(today: Date) -> RangeInclusive<i32> {
    FIRST_BIRTH_YEAR..=today.year()
}

/// Date from the three date-of-birth wheels. A day past the end of the month
/// (31 February) lands on the last day of that month.
pub fn birth_date(year: i32, month: Month, day: u8) -> nutrio_shared::Result<Date> {
    let day = day.clamp(1, nutrio_shared::days_in_month(year, month));

    Ok(Date::from_calendar_date(year, month, day)?)
}

#[cfg(test)]
mod tests {
    use nutrio_shared::onboarding::FitnessGoal;
    use time::macros::date;

    use super::*;
    use crate::AnswersUpdate;

    #[test]
    fn saved_target_wins() {
        let answers = OnboardingAnswers {
            target_weight: "165".to_owned(),
            weight_goal: Some(WeightGoal::Loss),
            ..Default::default()
        };

        assert_eq!(initial_target_weight(&answers), 165);
    }

    #[test]
    fn target_follows_weight_goal() {
        let mut answers = OnboardingAnswers::default();
        answers.update(AnswersUpdate {
            fitness_goal: Some(FitnessGoal::LoseWeight),
            ..Default::default()
        });
        assert_eq!(initial_target_weight(&answers), 130);

        answers.update(AnswersUpdate {
            fitness_goal: Some(FitnessGoal::GainWeight),
            target_weight: Some("9000".to_owned()),
            ..Default::default()
        });
        assert_eq!(initial_target_weight(&answers), 170);
    }

    #[test]
    fn target_stays_within_options() {
        let answers = OnboardingAnswers {
            current_weight: 60,
            weight_goal: Some(WeightGoal::Loss),
            ..Default::default()
        };

        assert_eq!(initial_target_weight(&answers), 50);
    }

    #[test]
    fn net_change() {
        assert_eq!(net_change_label(150, 130), "-20 lbs");
        assert_eq!(net_change_label(150, 170), "+20 lbs");
        assert_eq!(net_change_label(150, 150), "+0 lbs");
    }

    #[test]
    fn goal_speed_categories() {
        assert_eq!(goal_speed(&OnboardingAnswers::default()), DEFAULT_GOAL_SPEED);
        assert_eq!(format_goal_speed(1.26), "1.3");
        assert_eq!(format_goal_speed(2.0), "2.0");
        assert_eq!(speed_category(0.5), SpeedCategory::Gradual);
        assert_eq!(speed_category(1.0), SpeedCategory::Moderate);
        assert_eq!(speed_category(2.0), SpeedCategory::Moderate);
        assert_eq!(speed_category(2.1), SpeedCategory::Accelerated);

        let answers = OnboardingAnswers {
            goal_speed: Some("1.5".to_owned()),
            ..Default::default()
        };
        assert_eq!(goal_speed(&answers), 1.5);
    }

    #[test]
    fn birth_date_clamps_day() {
        assert_eq!(
            birth_date(2023, Month::February, 31).unwrap(),
            date!(2023 - 02 - 28)
        );
        assert_eq!(
            birth_date(1990, Month::April, 12).unwrap(),
            date!(1990 - 04 - 12)
        );
        assert_eq!(birth_years(date!(2025 - 05 - 30)), 1940..=2025);
    }
}
