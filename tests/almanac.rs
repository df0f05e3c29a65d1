use amlich::date::days_in_month;
use amlich::holiday::{self, Holiday};
use amlich::{CalendarDate, Date, Error, LunarDate, lunar_to_solar, solar_to_lunar};

#[test]
fn tet_dates() {
    assert_eq!((1, 1, 2024), solar_to_lunar(10, 2, 2024).unwrap().dmy());
    assert_eq!((1, 1, 2023), solar_to_lunar(22, 1, 2023).unwrap().dmy());
    for year in 1950..=2050 {
        let date = lunar_to_solar(1, 1, year, false).unwrap();
        let (d, m, y) = date.gregorian();
        assert_eq!(year, y);
        assert!(
            (m == 1 && d >= 21) || (m == 2 && d <= 21),
            "Tết {year} on {d}/{m}"
        );
    }
}

#[test]
fn every_day_1900_2100() {
    let mut last: Option<LunarDate> = None;
    for year in 1900..=2100 {
        for month in 1..=12 {
            for day in 1..=days_in_month(month, year) {
                let lunar = solar_to_lunar(day, month, year).unwrap();
                assert!((1..=30).contains(&lunar.day), "{day}/{month}/{year}");
                assert!((1..=13).contains(&lunar.month), "{day}/{month}/{year}");
                let back = lunar_to_solar(lunar.day, lunar.month, lunar.year, false).unwrap();
                assert_eq!((day, month, year), back.gregorian());
                if let Some(last) = last {
                    assert!(last < lunar, "{} then {}", last, lunar);
                }
                last = Some(lunar);
            }
        }
    }
}

#[test]
fn rejects_invalid_dates() {
    assert!(matches!(
        solar_to_lunar(31, 6, 2024),
        Err(Error::InvalidDate { .. })
    ));
    assert!(matches!(
        lunar_to_solar(1, 13, 2024, false),
        Err(Error::NoLeapMonth { year: 2024 })
    ));
    assert!(lunar_to_solar(1, 13, 2023, false).is_ok());
}

#[test]
fn match_holidays_for_today() {
    let holidays = vec![
        Holiday::solar("Tết Dương Lịch", 1, 1),
        Holiday::lunar("Tết Nguyên Đán", 1, 1),
        Holiday::lunar("Tết Nguyên Tiêu", 15, 1),
    ];
    for h in &holidays {
        h.validate().unwrap();
    }
    let today = Date::from_gregorian(24, 2, 2024).unwrap();
    let found: Vec<_> = holiday::holidays_on(&holidays, today)
        .map(|h| h.name.as_str())
        .collect();
    assert_eq!(vec!["Tết Nguyên Tiêu"], found);

    let tet = CalendarDate::from(LunarDate::new(1, 1, 2025, false).unwrap());
    let until = tet.to_solar().unwrap() - today;
    assert_eq!(Some(until), holidays[1].days_until(today));
}
