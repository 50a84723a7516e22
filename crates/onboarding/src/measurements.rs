use validator::Validate;

use crate::AnswersUpdate;

const CM_PER_INCH: f64 = 2.54;
const LBS_PER_KG: f64 = 2.20462;

/// Height and weight entered with the imperial pickers.
#[derive(Validate, Clone, Copy, Debug, PartialEq)]
pub struct MeasurementsInput {
    #[validate(range(min = 4, max = 9))]
    pub height_feet: u8,
    #[validate(range(max = 11))]
    pub height_inches: u8,
    #[validate(range(min = 50, max = 400))]
    pub current_weight: u16,
}

/// Height and weight entered with the metric pickers. Answers are always
/// stored in imperial units.
#[derive(Validate, Clone, Copy, Debug, PartialEq)]
pub struct MetricMeasurementsInput {
    #[validate(range(min = 120, max = 240))]
    pub height_cm: u16,
    #[validate(range(min = 30, max = 180))]
    pub weight_kg: u16,
}

impl MeasurementsInput {
    pub fn into_update(self) -> nutrio_shared::Result<AnswersUpdate> {
        self.validate()?;

        Ok(AnswersUpdate {
            height_feet: Some(self.height_feet),
            height_inches: Some(self.height_inches),
            current_weight: Some(self.current_weight),
            ..Default::default()
        })
    }
}

impl MetricMeasurementsInput {
    /// Feet, inches and pounds. Rounding up to 12 inches carries into feet.
    pub fn to_imperial(&self) -> (u8, u8, u16) {
        let total_inches = f64::from(self.height_cm) / CM_PER_INCH;
        let mut feet = (total_inches / 12.0).floor() as u8;
        let mut inches = (total_inches % 12.0).round() as u8;

        if inches == 12 {
            feet += 1;
            inches = 0;
        }

        let pounds = (f64::from(self.weight_kg) * LBS_PER_KG).round() as u16;

        (feet, inches, pounds)
    }

    pub fn into_update(self) -> nutrio_shared::Result<AnswersUpdate> {
        self.validate()?;

        let (feet, inches, pounds) = self.to_imperial();

        Ok(AnswersUpdate {
            height_feet: Some(feet),
            height_inches: Some(inches),
            current_weight: Some(pounds),
            ..Default::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imperial_ranges() {
        let valid = MeasurementsInput {
            height_feet: 5,
            height_inches: 11,
            current_weight: 400,
        };
        assert!(valid.into_update().is_ok());

        for invalid in [
            MeasurementsInput {
                height_feet: 3,
                ..valid
            },
            MeasurementsInput {
                height_inches: 12,
                ..valid
            },
            MeasurementsInput {
                current_weight: 49,
                ..valid
            },
        ] {
            assert!(matches!(
                invalid.into_update(),
                Err(nutrio_shared::Error::Validate(_))
            ));
        }
    }

    #[test]
    fn metric_converts_to_imperial() {
        let input = MetricMeasurementsInput {
            height_cm: 170,
            weight_kg: 40,
        };
        assert_eq!(input.to_imperial(), (5, 7, 88));

        let update = input.into_update().unwrap();
        assert_eq!(update.height_feet, Some(5));
        assert_eq!(update.height_inches, Some(7));
        assert_eq!(update.current_weight, Some(88));
    }

    #[test]
    fn metric_rounding_carries_into_feet() {
        // 182 cm is 71.65 inches, which rounds to 6 ft 0 in rather than 5 ft 12 in
        let input = MetricMeasurementsInput {
            height_cm: 182,
            weight_kg: 80,
        };

        assert_eq!(input.to_imperial(), (6, 0, 176));
    }

    #[test]
    fn metric_ranges() {
        let input = MetricMeasurementsInput {
            height_cm: 250,
            weight_kg: 80,
        };

        assert!(input.into_update().is_err());
    }
}
