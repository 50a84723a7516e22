use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Health areas picked on the focus screen. `NotSure` is exclusive with every
/// other tag.
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
pub enum Goal {
    Cognitive,
    Muscle,
    Bone,
    Heart,
    Eye,
    Immune,
    Energy,
    Skin,
    Hormonal,
    Sleep,
    Gut,
    Longevity,
    EatHealthy,
    NotSure,
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum OverallGoal {
    NutrientBalance,
    MinimizeHarmful,
    OptimizePerformance,
    BoostHealth,
    UnderstandNutrition,
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    Sedentary,
    Moderate,
    Active,
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseFrequency {
    Rarely,
    Sometimes,
    Often,
    Daily,
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    Classic,
    Pescatarian,
    Vegetarian,
    Vegan,
    LowCarb,
    Keto,
    NoPreference,
}

impl DietPreference {
    pub fn is_plant_based(&self) -> bool {
        matches!(self, Self::Vegetarian | Self::Vegan)
    }
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Sex {
    Male,
    Female,
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FitnessGoal {
    LoseWeight,
    MaintainWeight,
    GainWeight,
    None,
}

impl FitnessGoal {
    /// Weight-related goals unlock the target weight and pace steps.
    pub fn is_weight_related(&self) -> bool {
        matches!(self, Self::LoseWeight | Self::GainWeight)
    }

    pub fn weight_goal(&self) -> Option<WeightGoal> {
        match self {
            Self::LoseWeight => Some(WeightGoal::Loss),
            Self::GainWeight => Some(WeightGoal::Increase),
            Self::MaintainWeight => Some(WeightGoal::Maintain),
            Self::None => None,
        }
    }
}

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
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WeightGoal {
    Increase,
    Loss,
    Maintain,
}

/// Obstacles picked on the barriers screen. `None` is exclusive with every
/// other tag.
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
pub enum Barrier {
    Time,
    Knowledge,
    Cost,
    Cravings,
    Motivation,
    Social,
    Planning,
    Tracking,
    Travel,
    Stress,
    None,
}
