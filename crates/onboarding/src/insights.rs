use nutrio_shared::onboarding::{ActivityLevel, Barrier, FitnessGoal, Goal};

use crate::OnboardingAnswers;

const MAX_INSIGHTS: usize = 5;
const MIN_SPECIFIC_INSIGHTS: usize = 3;

const GENERIC_INSIGHTS: [&str; 3] = [
    "Personalized nutrient target tracking",
    "Daily nutrition quality score",
    "Weekly nutrient balance analysis",
];

/// Tracking features highlighted on the personalization screen.
pub fn personalization_insights(answers: &OnboardingAnswers) -> Vec<&'static str> {
    let mut insights = vec![];

    for (goal, insight) in [
        (Goal::Cognitive, "Omega-3s and B vitamins to support brain health"),
        (Goal::Muscle, "Protein balance optimization across meals"),
        (Goal::Heart, "Heart-healthy fats and antioxidant tracking"),
        (Goal::Energy, "B vitamin and iron status monitoring"),
    ] {
        if answers.goals.contains(&goal) {
            insights.push(insight);
        }
    }

    if answers.activity_level == Some(ActivityLevel::Active) {
        insights.push("Electrolyte and hydration tracking");
    }

    if answers
        .diet_preference
        .is_some_and(|diet| diet.is_plant_based())
    {
        insights.push("Plant protein completeness analysis");
        insights.push("B12, iron, and zinc monitoring");
    }

    if answers.fitness_goal == Some(FitnessGoal::LoseWeight) {
        insights.push("Customized calorie and macro targets");
    }

    if answers.barriers.contains(&Barrier::Time) {
        insights.push("Quick meal recommendations and time-saving suggestions");
    }
    if answers.barriers.contains(&Barrier::Cravings) {
        insights.push("Satiety analysis and craving pattern identification");
    }

    if insights.len() < MIN_SPECIFIC_INSIGHTS {
        insights.extend(GENERIC_INSIGHTS);
    }

    insights.truncate(MAX_INSIGHTS);
    insights
}

#[cfg(test)]
mod tests {
    use nutrio_shared::onboarding::DietPreference;

    use super::*;

    #[test]
    fn pads_with_generic_insights() {
        let insights = personalization_insights(&OnboardingAnswers::default());

        assert_eq!(insights, GENERIC_INSIGHTS.to_vec());
    }

    #[test]
    fn specific_insights_come_first_and_are_capped() {
        let answers = OnboardingAnswers {
            goals: vec![Goal::Cognitive, Goal::Muscle, Goal::Heart, Goal::Energy],
            activity_level: Some(ActivityLevel::Active),
            diet_preference: Some(DietPreference::Vegan),
            barriers: vec![Barrier::Time],
            ..Default::default()
        };

        let insights = personalization_insights(&answers);

        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert_eq!(insights[0], "Omega-3s and B vitamins to support brain health");
        assert_eq!(insights[4], "Electrolyte and hydration tracking");
    }

    #[test]
    fn few_specific_insights_are_kept_before_generic_ones() {
        let answers = OnboardingAnswers {
            fitness_goal: Some(FitnessGoal::LoseWeight),
            ..Default::default()
        };

        let insights = personalization_insights(&answers);

        assert_eq!(insights.len(), 4);
        assert_eq!(insights[0], "Customized calorie and macro targets");
    }
}
