use std::collections::HashMap;

use time::Date;

/// Completion percentage per local day, keyed by `YYYY-MM-DD`.
pub type CompletionData = HashMap<String, f64>;

/// Completion of `date`, between 0 and 100. Missing days count as 0.
pub fn completion_for(date: Date, data: &CompletionData) -> f64 {
    let value = data
        .get(&nutrio_shared::date_key(date))
        .copied()
        .unwrap_or(0.0);

    if !value.is_finite() {
        return 0.0;
    }

    value.clamp(0.0, 100.0)
}

pub fn is_complete(date: Date, data: &CompletionData) -> bool {
    completion_for(date, data) >= 100.0
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    fn data() -> CompletionData {
        CompletionData::from([
            ("2025-05-28".to_owned(), 45.5),
            ("2025-05-29".to_owned(), 130.0),
            ("2025-05-30".to_owned(), -10.0),
            ("2025-05-31".to_owned(), f64::NAN),
            ("2025-06-01".to_owned(), 100.0),
        ])
    }

    #[test]
    fn missing_day_is_zero() {
        assert_eq!(completion_for(date!(2025 - 05 - 01), &data()), 0.0);
        assert!(!is_complete(date!(2025 - 05 - 01), &data()));
    }

    #[test]
    fn values_are_clamped() {
        let data = data();

        assert_eq!(completion_for(date!(2025 - 05 - 28), &data), 45.5);
        assert_eq!(completion_for(date!(2025 - 05 - 29), &data), 100.0);
        assert_eq!(completion_for(date!(2025 - 05 - 30), &data), 0.0);
        assert_eq!(completion_for(date!(2025 - 05 - 31), &data), 0.0);
        assert!(is_complete(date!(2025 - 05 - 29), &data));
        assert!(is_complete(date!(2025 - 06 - 01), &data));
    }

    #[test]
    fn reads_from_json() {
        let data: CompletionData =
            serde_json::from_str(r#"{"2025-05-28": 80, "2025-05-29": 100}"#).unwrap();

        assert_eq!(completion_for(date!(2025 - 05 - 28), &data), 80.0);
    }
}
