//! Serialization of the data types, built with `--features serde`.

use amlich::calendar::MonthView;
use amlich::holiday::Holiday;
use amlich::{CalendarDate, Date, LunarDate, solar_to_lunar};

#[test]
fn holiday_round_trip() {
    let holiday = Holiday::lunar("Tết Trung Thu", 15, 8).with_description("Rằm tháng Tám");
    let json = serde_json::to_string(&holiday).unwrap();
    assert_eq!(holiday, serde_json::from_str::<Holiday>(&json).unwrap());

    let one_off = Holiday::solar("Launch", 15, 3).in_year(2025);
    let json = serde_json::to_string(&one_off).unwrap();
    assert_eq!(one_off, serde_json::from_str::<Holiday>(&json).unwrap());
}

#[test]
fn dates_round_trip() {
    let lunar = solar_to_lunar(10, 2, 2024).unwrap();
    let json = serde_json::to_string(&lunar).unwrap();
    assert_eq!(lunar, serde_json::from_str::<LunarDate>(&json).unwrap());

    let date = Date::from_gregorian(10, 2, 2024).unwrap();
    for value in [CalendarDate::from(date), CalendarDate::from(lunar)] {
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(value, serde_json::from_str::<CalendarDate>(&json).unwrap());
    }
}

#[test]
fn month_view_round_trip() {
    let view = MonthView::new(2, 2024).unwrap();
    let json = serde_json::to_string(&view).unwrap();
    assert_eq!(view, serde_json::from_str::<MonthView>(&json).unwrap());
}
