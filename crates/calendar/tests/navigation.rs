use nutrio_calendar::{CompletionData, DatePicker, week_bounds, week_view};
use nutrio_shared::{date_key_of, parse_date_key};
use time::macros::{date, datetime};

#[test]
fn late_evening_completion_lands_on_local_day() {
    let logged_at = datetime!(2025-05-30 23:30 -5);
    let data = CompletionData::from([(date_key_of(logged_at), 100.0)]);

    let view = week_view(date!(2025 - 05 - 30), date!(2025 - 05 - 30), &data);
    let friday = view.iter().find(|day| day.is_selected).unwrap();

    assert_eq!(friday.key, "2025-05-30");
    assert!(friday.is_complete);
    assert!(!view[6].is_complete);
    assert!(view[6].is_disabled);
}

#[test]
fn picking_a_date_moves_the_week() {
    let today = parse_date_key("2025-05-30").unwrap();
    let mut picker = DatePicker::open(today, today);

    picker.go_to_previous_month();
    picker.select_day(1);
    let picked = picker.confirm();

    assert_eq!(picked, date!(2025 - 04 - 01));
    assert_eq!(
        week_bounds(picked),
        (date!(2025 - 03 - 30), date!(2025 - 04 - 05))
    );

    let view = week_view(picked, today, &CompletionData::new());
    assert!(view.iter().all(|day| !day.is_disabled));
}
