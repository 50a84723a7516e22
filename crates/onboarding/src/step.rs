use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::OnboardingAnswers;

/// One screen of the onboarding flow, identified on the wire by its
/// kebab-case id (`"fitness-goals"`, `"whats-holding-you-back"`).
///
/// Declaration order matches [`SEQUENCE`]; `step as usize` is its index.
#[derive(
    EnumString,
    VariantArray,
    Display,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Step {
    YourGoals,
    OverallGoal,
    YourLifestyle,
    Lifestyle,
    Exercise,
    Diet,
    AboutYou,
    Sex,
    DateOfBirth,
    BodyMeasurements,
    YourFitnessGoals,
    FitnessGoals,
    GoalWeight,
    GoalSpeed,
    WhatsHoldingYouBack,
    Barriers,
    Personalization,
}

/// Canonical step order. Branch skips never remove entries from it.
pub const SEQUENCE: [Step; 17] = [
    Step::YourGoals,
    Step::OverallGoal,
    Step::YourLifestyle,
    Step::Lifestyle,
    Step::Exercise,
    Step::Diet,
    Step::AboutYou,
    Step::Sex,
    Step::DateOfBirth,
    Step::BodyMeasurements,
    Step::YourFitnessGoals,
    Step::FitnessGoals,
    Step::GoalWeight,
    Step::GoalSpeed,
    Step::WhatsHoldingYouBack,
    Step::Barriers,
    Step::Personalization,
];

pub const TOTAL_STEPS: usize = SEQUENCE.len();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Next {
    Step(Step),
    /// Last step done, hand off to user initialization.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Previous {
    Step(Step),
    /// Leave onboarding for the welcome screen.
    Exit,
}

impl Step {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Informational screens introducing a section.
    pub fn is_section_header(self) -> bool {
        matches!(
            self,
            Step::YourLifestyle
                | Step::AboutYou
                | Step::YourFitnessGoals
                | Step::WhatsHoldingYouBack
        )
    }

    /// Share of the flow reached once this step is displayed, in percent.
    pub fn progress(self) -> f64 {
        let current = (self.index() + 1) as f64;
        (current / TOTAL_STEPS as f64 * 100.0).min(100.0)
    }

    pub fn next(self, answers: &OnboardingAnswers) -> Next {
        use Step::*;

        let step = match self {
            YourGoals => OverallGoal,
            OverallGoal => YourLifestyle,
            YourLifestyle => Lifestyle,
            Lifestyle => Exercise,
            Exercise => Diet,
            Diet => AboutYou,
            AboutYou => Sex,
            Sex => DateOfBirth,
            DateOfBirth => BodyMeasurements,
            BodyMeasurements => YourFitnessGoals,
            YourFitnessGoals => FitnessGoals,
            FitnessGoals if answers.takes_weight_branch() => GoalWeight,
            FitnessGoals => WhatsHoldingYouBack,
            GoalWeight => GoalSpeed,
            GoalSpeed => WhatsHoldingYouBack,
            WhatsHoldingYouBack => Barriers,
            Barriers => Personalization,
            Personalization => return Next::Complete,
        };

        Next::Step(step)
    }

    pub fn previous(self, answers: &OnboardingAnswers) -> Previous {
        use Step::*;

        let step = match self {
            YourGoals => return Previous::Exit,
            OverallGoal => YourGoals,
            YourLifestyle => OverallGoal,
            Lifestyle => YourLifestyle,
            Exercise => Lifestyle,
            Diet => Exercise,
            AboutYou => Diet,
            Sex => AboutYou,
            DateOfBirth => Sex,
            BodyMeasurements => DateOfBirth,
            YourFitnessGoals => BodyMeasurements,
            FitnessGoals => YourFitnessGoals,
            GoalWeight => FitnessGoals,
            GoalSpeed => GoalWeight,
            WhatsHoldingYouBack if answers.takes_weight_branch() => GoalSpeed,
            WhatsHoldingYouBack => FitnessGoals,
            Barriers => WhatsHoldingYouBack,
            Personalization => Barriers,
        };

        Previous::Step(step)
    }
}

/// Position of `step_id` in [`SEQUENCE`], `None` when the id is unknown.
pub fn current_step_index(step_id: &str) -> Option<usize> {
    SEQUENCE.iter().position(|step| step.as_ref() == step_id)
}

/// 1-based step number for display, 0 for an unknown id.
pub fn current_step(step_id: &str) -> usize {
    current_step_index(step_id).map_or(0, |index| index + 1)
}

/// Progress bar fill in percent. Unknown ids report an empty bar.
pub fn progress(step_id: &str) -> f64 {
    current_step_index(step_id).map_or(0.0, |index| SEQUENCE[index].progress())
}

/// Unknown ids (the name screen that precedes the sequence, or a stale
/// route) continue at the first step.
pub fn go_to_next_step(step_id: &str, answers: &OnboardingAnswers) -> Next {
    match Step::from_str(step_id) {
        Ok(step) => step.next(answers),
        Err(_) => {
            tracing::warn!(step_id, "unknown onboarding step, restarting sequence");

            Next::Step(SEQUENCE[0])
        }
    }
}

/// Unknown ids leave onboarding.
pub fn go_to_previous_step(step_id: &str, answers: &OnboardingAnswers) -> Previous {
    match Step::from_str(step_id) {
        Ok(step) => step.previous(answers),
        Err(_) => {
            tracing::warn!(step_id, "unknown onboarding step, leaving onboarding");

            Previous::Exit
        }
    }
}
