//! Conversion between the Gregorian calendar and the Vietnamese lunar
//! calendar (âm lịch).
//!
//! Lunar months are located with an approximate new moon series rather than
//! a lookup table, see [`lunar::ephemeris`]. Dates lying right at a month
//! boundary may land one day off; everything else is exact arithmetic on
//! Julian days.
//!
//! # Examples
//!
//! Converting a solar date, and back:
//!
//! ```
//! use amlich::{lunar_to_solar, solar_to_lunar};
//!
//! let tet = solar_to_lunar(10, 2, 2024).unwrap();
//! assert_eq!((1, 1, 2024), tet.dmy());
//! assert_eq!("Giáp Thìn", tet.year_name());
//!
//! let date = lunar_to_solar(1, 1, 2024, false).unwrap();
//! assert_eq!((10, 2, 2024), date.gregorian());
//! ```
//!
//! Working with [`Date`]:
//!
//! ```
//! use amlich::Date;
//!
//! let date = Date::from_gregorian(22, 1, 2023).unwrap();
//!
//! assert_eq!(7, date.day_of_week()); // Sunday
//! assert_eq!((1, 1, 2023), date.to_lunar().dmy());
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` for the data types.
//!
//! `cargo test --all-features` runs the serialization tests as well.

pub mod calendar;
pub mod date;
pub mod error;
pub mod holiday;
pub mod julian;
pub mod lunar;

pub use date::{CalendarDate, CalendarSystem, Date, YearType};
pub use error::{Error, Result};
pub use holiday::Holiday;
pub use lunar::{LunarDate, lunar_to_solar, solar_to_lunar};
