//! Conversion between proleptic Gregorian dates and absolute day numbers.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DECEMBER, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JANUARY, LEAP_YEAR_CYCLE, MAX_GREGORIAN_YEAR, MAX_MONTH, MIN_GREGORIAN_YEAR,
};
use crate::{AbsoluteDate, CalendarError, GregorianDate};

pub const fn is_gregorian_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in a Gregorian month, 28 through 31.
///
/// # Errors
/// Returns `CalendarError` if the year is before 1 CE or the month is outside 1..=12.
pub fn last_day_of_gregorian_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    validate_year(year)?;
    if !(JANUARY..=MAX_MONTH).contains(&month) {
        return Err(CalendarError::InvalidGregorianMonth(month));
    }
    Ok(days_in_gregorian_month(month, year))
}

/// Month length for a month already known to be in 1..=12
pub(crate) const fn days_in_gregorian_month(month: u8, year: i32) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_gregorian_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub(crate) fn validate_year(year: i32) -> Result<(), CalendarError> {
    if year < MIN_GREGORIAN_YEAR || year > MAX_GREGORIAN_YEAR {
        return Err(CalendarError::InvalidGregorianYear(year));
    }
    Ok(())
}

/// Absolute date of a Gregorian date.
///
/// # Errors
/// Returns `CalendarError` if the date is not a valid Gregorian date.
pub fn gregorian_to_absolute(year: i32, month: u8, day: u8) -> Result<AbsoluteDate, CalendarError> {
    Ok(GregorianDate::new(year, month, day)?.to_absolute())
}

/// Gregorian date of an absolute date.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the date is outside `AbsoluteDate::MIN..=AbsoluteDate::MAX`.
pub fn absolute_to_gregorian(date: AbsoluteDate) -> Result<GregorianDate, CalendarError> {
    if !date.is_supported() {
        return Err(CalendarError::OutOfRange);
    }
    Ok(gregorian_from_absolute(date))
}

/// Gregorian date of an absolute date already known to be supported
pub(crate) fn gregorian_from_absolute(date: AbsoluteDate) -> GregorianDate {
    let target = date.get();

    // A year never exceeds 366 days, so this never overshoots.
    let mut year = target / 366;
    while target >= gregorian_days(year + 1, JANUARY, 1).get() {
        year += 1;
    }

    let mut month = JANUARY;
    while month < DECEMBER
        && target > gregorian_days(year, month, days_in_gregorian_month(month, year)).get()
    {
        month += 1;
    }

    let day = target - gregorian_days(year, month, 1).get() + 1;
    GregorianDate::from_parts_unchecked(year, month, day as u8)
}

/// Day count for an already validated date
pub(crate) const fn gregorian_days(year: i32, month: u8, day: u8) -> AbsoluteDate {
    let mut days = day as i32;
    let mut m = month - 1;
    while m > 0 {
        days += days_in_gregorian_month(m, year) as i32;
        m -= 1;
    }
    let prior = year - 1;
    AbsoluteDate::new(
        days + 365 * prior + prior / LEAP_YEAR_CYCLE - prior / CENTURY_CYCLE + prior / GREGORIAN_CYCLE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year: i32,
            is_leap: bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year: 2020,
                is_leap: true,
                description: "divisible by 4",
            },
            TestCase {
                year: 2021,
                is_leap: false,
                description: "not divisible by 4",
            },
            TestCase {
                year: 1900,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2100,
                is_leap: false,
                description: "century not divisible by 400",
            },
            TestCase {
                year: 2000,
                is_leap: true,
                description: "divisible by 400",
            },
            TestCase {
                year: 2400,
                is_leap: true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_gregorian_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_last_day_of_month() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(last_day_of_gregorian_month(month, 2023), Ok(31), "Month {month}");
        }
        for month in [4, 6, 9, 11] {
            assert_eq!(last_day_of_gregorian_month(month, 2023), Ok(30), "Month {month}");
        }
        assert_eq!(last_day_of_gregorian_month(2, 2023), Ok(28));
        assert_eq!(last_day_of_gregorian_month(2, 2024), Ok(29));
        assert_eq!(last_day_of_gregorian_month(2, 1900), Ok(28));
        assert_eq!(last_day_of_gregorian_month(2, 2000), Ok(29));
    }

    #[test]
    fn test_last_day_of_month_rejects_invalid() {
        assert_eq!(
            last_day_of_gregorian_month(13, 2024),
            Err(CalendarError::InvalidGregorianMonth(13))
        );
        assert_eq!(
            last_day_of_gregorian_month(0, 2024),
            Err(CalendarError::InvalidGregorianMonth(0))
        );
        assert_eq!(
            last_day_of_gregorian_month(2, 0),
            Err(CalendarError::InvalidGregorianYear(0))
        );
    }

    #[test]
    fn test_known_absolute_dates() {
        assert_eq!(gregorian_to_absolute(1, 1, 1).unwrap().get(), 1);
        assert_eq!(gregorian_to_absolute(1, 12, 31).unwrap().get(), 365);
        assert_eq!(gregorian_to_absolute(2, 1, 1).unwrap().get(), 366);
        assert_eq!(gregorian_to_absolute(2010, 9, 9).unwrap().get(), 734_024);
        assert_eq!(
            gregorian_to_absolute(1_000_000, 12, 31).unwrap(),
            AbsoluteDate::MAX
        );
    }

    #[test]
    fn test_gregorian_to_absolute_rejects_invalid() {
        assert!(matches!(
            gregorian_to_absolute(0, 12, 31),
            Err(CalendarError::InvalidGregorianYear(0))
        ));
        assert!(gregorian_to_absolute(2024, 13, 1).is_err());
        assert!(gregorian_to_absolute(2024, 2, 30).is_err());
    }

    #[test]
    fn test_absolute_to_gregorian_bounds() {
        let first = absolute_to_gregorian(AbsoluteDate::MIN).unwrap();
        assert_eq!((first.year(), first.month(), first.day()), (1, 1, 1));

        let last = absolute_to_gregorian(AbsoluteDate::MAX).unwrap();
        assert_eq!((last.year(), last.month(), last.day()), (1_000_000, 12, 31));

        assert!(matches!(
            absolute_to_gregorian(AbsoluteDate::new(0)),
            Err(CalendarError::OutOfRange)
        ));
        assert!(absolute_to_gregorian(AbsoluteDate::new(-5)).is_err());
    }

    #[test]
    fn test_round_trip_every_day() {
        // 1 CE through the end of 2500 covers every leap-rule combination
        let end = gregorian_to_absolute(2500, 12, 31).unwrap().get();
        let mut previous = absolute_to_gregorian(AbsoluteDate::MIN).unwrap();
        for days in 2..=end {
            let date = absolute_to_gregorian(AbsoluteDate::new(days)).unwrap();
            assert_eq!(date.to_absolute().get(), days, "{date}");
            assert!(previous < date, "{previous} should precede {date}");
            previous = date;
        }
    }
}
