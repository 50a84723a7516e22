use nutrio_shared::onboarding::{
    ActivityLevel, Barrier, DietPreference, ExerciseFrequency, FitnessGoal, Goal, OverallGoal,
    Sex, WeightGoal,
};
use serde::{Deserialize, Serialize};
use time::{Date, macros::date};

pub const DEFAULT_DATE_OF_BIRTH: Date = date!(2000 - 01 - 01);

/// Everything collected during one onboarding session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingAnswers {
    pub name: String,
    pub date_of_birth: Date,
    pub height_feet: u8,
    pub height_inches: u8,
    /// Pounds.
    pub current_weight: u16,
    pub sex: Option<Sex>,
    pub goals: Vec<Goal>,
    pub overall_goal: Option<OverallGoal>,
    pub activity_level: Option<ActivityLevel>,
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub diet_preference: Option<DietPreference>,
    pub fitness_goal: Option<FitnessGoal>,
    pub weight_goal: Option<WeightGoal>,
    /// Pounds, as numeric text.
    pub target_weight: String,
    /// Pounds per week with one decimal, as numeric text.
    pub goal_speed: Option<String>,
    pub barriers: Vec<Barrier>,
    pub onboarding_complete: bool,
}

impl Default for OnboardingAnswers {
    fn default() -> Self {
        Self {
            name: String::new(),
            date_of_birth: DEFAULT_DATE_OF_BIRTH,
            height_feet: 5,
            height_inches: 8,
            current_weight: 150,
            sex: None,
            goals: vec![],
            overall_goal: None,
            activity_level: None,
            exercise_frequency: None,
            diet_preference: None,
            fitness_goal: None,
            weight_goal: None,
            target_weight: String::new(),
            goal_speed: None,
            barriers: vec![],
            onboarding_complete: false,
        }
    }
}

/// Partial answers produced by one screen. `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnswersUpdate {
    pub name: Option<String>,
    pub date_of_birth: Option<Date>,
    pub height_feet: Option<u8>,
    pub height_inches: Option<u8>,
    pub current_weight: Option<u16>,
    pub sex: Option<Sex>,
    pub goals: Option<Vec<Goal>>,
    pub overall_goal: Option<OverallGoal>,
    pub activity_level: Option<ActivityLevel>,
    pub exercise_frequency: Option<ExerciseFrequency>,
    pub diet_preference: Option<DietPreference>,
    pub fitness_goal: Option<FitnessGoal>,
    pub weight_goal: Option<WeightGoal>,
    pub target_weight: Option<String>,
    pub goal_speed: Option<String>,
    pub barriers: Option<Vec<Barrier>>,
    pub onboarding_complete: Option<bool>,
}

impl OnboardingAnswers {
    /// Shallow merge, no validation. A fitness goal merged without an
    /// explicit weight goal also sets the matching weight goal.
    pub fn update(&mut self, update: AnswersUpdate) {
        let AnswersUpdate {
            name,
            date_of_birth,
            height_feet,
            height_inches,
            current_weight,
            sex,
            goals,
            overall_goal,
            activity_level,
            exercise_frequency,
            diet_preference,
            fitness_goal,
            weight_goal,
            target_weight,
            goal_speed,
            barriers,
            onboarding_complete,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(date_of_birth) = date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(height_feet) = height_feet {
            self.height_feet = height_feet;
        }
        if let Some(height_inches) = height_inches {
            self.height_inches = height_inches;
        }
        if let Some(current_weight) = current_weight {
            self.current_weight = current_weight;
        }
        if sex.is_some() {
            self.sex = sex;
        }
        if let Some(goals) = goals {
            self.goals = goals;
        }
        if overall_goal.is_some() {
            self.overall_goal = overall_goal;
        }
        if activity_level.is_some() {
            self.activity_level = activity_level;
        }
        if exercise_frequency.is_some() {
            self.exercise_frequency = exercise_frequency;
        }
        if diet_preference.is_some() {
            self.diet_preference = diet_preference;
        }
        if let Some(fitness_goal) = fitness_goal {
            self.fitness_goal = Some(fitness_goal);

            if weight_goal.is_none() {
                self.weight_goal = fitness_goal.weight_goal();
            }
        }
        if weight_goal.is_some() {
            self.weight_goal = weight_goal;
        }
        if let Some(target_weight) = target_weight {
            self.target_weight = target_weight;
        }
        if goal_speed.is_some() {
            self.goal_speed = goal_speed;
        }
        if let Some(barriers) = barriers {
            self.barriers = barriers;
        }
        if let Some(onboarding_complete) = onboarding_complete {
            self.onboarding_complete = onboarding_complete;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the goal-weight and goal-speed steps are part of the traversal.
    pub fn takes_weight_branch(&self) -> bool {
        self.fitness_goal
            .is_some_and(|goal| goal.is_weight_related())
    }
}
