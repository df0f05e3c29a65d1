//! Vietnamese names for calendar elements.

/// Heavenly stems (can). For easier indexing, item 0 is the 10th stem, Quý.
const STEMS: &[&str] = &[
    "Quý", "Giáp", "Ất", "Bính", "Đinh", "Mậu", "Kỷ", "Canh", "Tân", "Nhâm",
];

/// Earthly branches (chi). Item 0 is the 12th branch, Hợi.
const BRANCHES: &[&str] = &[
    "Hợi", "Tý", "Sửu", "Dần", "Mão", "Thìn", "Tỵ", "Ngọ", "Mùi", "Thân", "Dậu", "Tuất",
];

/// Converts a sexagenary (can chi) number into its name.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Ất Tỵ", fmt::sexagenary(42));
/// ```
pub fn sexagenary(num: u32) -> String {
    format!(
        "{} {}",
        STEMS[num.rem_euclid(10) as usize],
        BRANCHES[num.rem_euclid(12) as usize]
    )
}

/// Returns the traditional name of lunar month `num`. The first and last
/// months are called "Giêng" and "Chạp". Leap months carry the suffix
/// "nhuận".
///
/// Returns `None` if `num` is not in `1..=12`.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!(Some("Tháng Chạp".to_owned()), fmt::month(12, false));
/// assert_eq!(Some("Tháng Tư nhuận".to_owned()), fmt::month(4, true));
/// assert_eq!(None, fmt::month(13, false));
/// ```
pub fn month(num: u32, leap: bool) -> Option<String> {
    let name = match num {
        1 => "Giêng",
        2 => "Hai",
        3 => "Ba",
        4 => "Tư",
        5 => "Năm",
        6 => "Sáu",
        7 => "Bảy",
        8 => "Tám",
        9 => "Chín",
        10 => "Mười",
        11 => "Mười Một",
        12 => "Chạp",
        _ => return None,
    };
    Some(if leap {
        format!("Tháng {} nhuận", name)
    } else {
        format!("Tháng {}", name)
    })
}

/// Returns the traditional name of lunar day `d`: "Mùng 1" to "Mùng 10" for
/// the first ten days, "Rằm" for the full-moon day, the plain number
/// otherwise.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!("Mùng 10", fmt::day(10));
/// assert_eq!("Rằm", fmt::day(15));
/// assert_eq!("30", fmt::day(30));
/// ```
///
/// # Panics
///
/// Panics if `d` is not in `1..=30`.
pub fn day(d: u32) -> String {
    match d {
        1..=10 => format!("Mùng {}", d),
        15 => "Rằm".to_owned(),
        11..=30 => d.to_string(),
        _ => panic!("day {} not in 1..=30", d),
    }
}

/// Returns the Vietnamese name of solar month `num`, or `None` if `num` is
/// not in `1..=12`.
///
/// # Example
///
/// ```
/// use amlich::lunar::fmt;
///
/// assert_eq!(Some("Tháng Một"), fmt::solar_month(1));
/// ```
pub fn solar_month(num: u32) -> Option<&'static str> {
    const NAMES: &[&str] = &[
        "Tháng Một",
        "Tháng Hai",
        "Tháng Ba",
        "Tháng Tư",
        "Tháng Năm",
        "Tháng Sáu",
        "Tháng Bảy",
        "Tháng Tám",
        "Tháng Chín",
        "Tháng Mười",
        "Tháng Mười Một",
        "Tháng Mười Hai",
    ];
    NAMES.get(num.checked_sub(1)? as usize).copied()
}

/// Returns the name of an ISO-8601 weekday (`1..=7`, Monday first), see
/// [`crate::Date::day_of_week`].
///
/// # Panics
///
/// Panics if `dow` is not in `1..=7`.
pub fn weekday(dow: u32) -> &'static str {
    match dow {
        1 => "Thứ Hai",
        2 => "Thứ Ba",
        3 => "Thứ Tư",
        4 => "Thứ Năm",
        5 => "Thứ Sáu",
        6 => "Thứ Bảy",
        7 => "Chủ Nhật",
        _ => panic!("weekday {} not in 1..=7", dow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sexagenary() {
        for (std, num) in [("Giáp Tý", 1), ("Canh Dần", 27), ("Quý Hợi", 60), ("Mậu Ngọ", 55)] {
            assert_eq!(std, sexagenary(num));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("Mùng 1", 1),
            ("Mùng 10", 10),
            ("11", 11),
            ("Rằm", 15),
            ("20", 20),
            ("30", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    #[should_panic]
    fn test_day_out_of_range() {
        day(31);
    }

    #[test]
    fn test_month() {
        assert_eq!(Some("Tháng Giêng".to_owned()), month(1, false));
        assert_eq!(Some("Tháng Mười Một".to_owned()), month(11, false));
        assert_eq!(Some("Tháng Hai nhuận".to_owned()), month(2, true));
        assert_eq!(None, month(0, false));
    }

    #[test]
    fn test_solar_month() {
        assert_eq!(Some("Tháng Mười Hai"), solar_month(12));
        assert_eq!(None, solar_month(0));
        assert_eq!(None, solar_month(13));
    }

    #[test]
    fn test_weekday() {
        let date = crate::Date::from_gregorian(1, 1, 2000).unwrap();
        assert_eq!("Thứ Bảy", weekday(date.day_of_week()));
    }
}
