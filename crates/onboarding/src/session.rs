use crate::{AnswersUpdate, Next, OnboardingAnswers, Previous, SEQUENCE, Step};

/// One onboarding run: the answers collected so far and the step on screen.
///
/// Screens read and write answers only through this type; navigation goes
/// through the step transition table.
#[derive(Clone, Debug, PartialEq)]
pub struct Onboarding {
    answers: OnboardingAnswers,
    current: Step,
}

impl Default for Onboarding {
    fn default() -> Self {
        Self::new()
    }
}

impl Onboarding {
    pub fn new() -> Self {
        Self::with_answers(OnboardingAnswers::default())
    }

    pub fn with_answers(answers: OnboardingAnswers) -> Self {
        Self {
            answers,
            current: SEQUENCE[0],
        }
    }

    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    pub fn current_step(&self) -> Step {
        self.current
    }

    pub fn progress(&self) -> f64 {
        self.current.progress()
    }

    pub fn is_last_step(&self) -> bool {
        self.current.next(&self.answers) == Next::Complete
    }

    pub fn is_complete(&self) -> bool {
        self.answers.onboarding_complete
    }

    pub fn update_answers(&mut self, update: AnswersUpdate) {
        self.answers.update(update);
    }

    pub fn reset_answers(&mut self) {
        self.answers.reset();
    }

    /// Abandon the run and start over from the first step.
    pub fn restart(&mut self) {
        self.answers.reset();
        self.current = SEQUENCE[0];
    }

    /// Move forward. The current step is unchanged when the flow completes.
    pub fn advance(&mut self) -> Next {
        let next = self.current.next(&self.answers);

        if let Next::Step(step) = next {
            tracing::debug!(from = %self.current, to = %step, "onboarding step forward");
            self.current = step;
        }

        next
    }

    /// Move back. The current step is unchanged when leaving onboarding.
    pub fn back(&mut self) -> Previous {
        let previous = self.current.previous(&self.answers);

        if let Previous::Step(step) = previous {
            tracing::debug!(from = %self.current, to = %step, "onboarding step back");
            self.current = step;
        }

        previous
    }

    /// Called once user initialization succeeded.
    pub fn mark_complete(&mut self) {
        self.answers.onboarding_complete = true;
    }
}
