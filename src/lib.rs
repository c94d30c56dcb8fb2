//! Hebrew and Gregorian calendar conversion.
//!
//! Both calendars pivot through a single absolute day number, with day 1 on
//! Gregorian 1 CE January 1. [`JewishDate`] holds one day in all three forms
//! and navigates by days, Hebrew months and Hebrew years. The free functions
//! expose the underlying calendar arithmetic: molad, Rosh Hashanah
//! postponements, year and month lengths, and kviah.

mod consts;
mod date;
mod error;
mod gregorian;
mod hebrew;
mod prelude;
mod types;

pub use consts::*;
pub use date::JewishDate;
pub use error::CalendarError;
pub use gregorian::{
    absolute_to_gregorian, gregorian_to_absolute, is_gregorian_leap_year,
    last_day_of_gregorian_month,
};
pub use hebrew::{
    absolute_to_hebrew, chalakim_since_molad_tohu, days_in_hebrew_month, days_in_year,
    days_since_start_of_year, hebrew_to_absolute, is_cheshvan_long, is_hebrew_leap_year,
    is_kislev_short, last_month_of_year, molad_of_month, molad_to_absolute_date, month_of_year,
    rosh_hashana_elapsed_days, validate_hebrew_date, year_kviah,
};
pub use types::{AbsoluteDate, DateUnit, GregorianDate, HebrewDate, Molad, MoladTime, YearKviah};
