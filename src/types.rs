use crate::consts::{
    CHALAKIM_PER_DAY, CHALAKIM_PER_HOUR, CHALAKIM_PER_MINUTE, DATE_SEPARATOR, JEWISH_EPOCH,
    MAX_ABSOLUTE_DATE, MAX_MOLAD_CHALAKIM, MAX_MOLAD_HOURS, MAX_MOLAD_MINUTES, MIN_ABSOLUTE_DATE,
};
use crate::prelude::*;
use crate::{CalendarError, gregorian, hebrew};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Days since the fixed epoch, where day 1 is Gregorian 1 CE January 1.
///
/// Every conversion pivots through this axis.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AbsoluteDate(i32);

impl AbsoluteDate {
    /// Gregorian 1 CE January 1
    pub const MIN: Self = Self(MIN_ABSOLUTE_DATE);
    /// Last day of the supported Gregorian range
    pub const MAX: Self = Self(MAX_ABSOLUTE_DATE);

    /// Wraps a raw day count
    #[inline]
    pub const fn new(days: i32) -> Self {
        Self(days)
    }

    /// Returns the day count as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Day of week, 1 = Sunday through 7 = Shabbos
    #[inline]
    pub const fn day_of_week(self) -> u8 {
        (self.0 % 7).unsigned_abs() as u8 + 1
    }

    /// Whether the date lies on the supported `MIN..=MAX` axis
    #[inline]
    pub const fn is_supported(self) -> bool {
        self.0 >= MIN_ABSOLUTE_DATE && self.0 <= MAX_ABSOLUTE_DATE
    }

    /// Adds `days`, returning `None` on overflow or when the result leaves the supported axis
    pub fn checked_add(self, days: i32) -> Option<Self> {
        self.0
            .checked_add(days)
            .map(Self)
            .filter(|date| date.is_supported())
    }
}

/// A proleptic Gregorian calendar date.
/// The year is at least 1 CE and the day always fits the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new date, rejecting a day past the end of the month.
    ///
    /// # Errors
    /// Returns `CalendarError` if the year, month, or day is out of range.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let last = Self::validate(year, month, day)?;
        if day > last {
            return Err(CalendarError::InvalidGregorianDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Creates a new date, clamping a day past the end of the month to its last day.
    ///
    /// # Errors
    /// Returns `CalendarError` if the year or month is out of range or the day is 0.
    pub fn new_clamped(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let last = Self::validate(year, month, day)?;
        if day > last {
            log::debug!("clamping Gregorian day {day} to {last} for {year}-{month:02}");
        }
        Ok(Self {
            year,
            month,
            day: day.min(last),
        })
    }

    /// Checks everything but the upper day bound, returning the month's last day
    fn validate(year: i32, month: u8, day: u8) -> Result<u8, CalendarError> {
        gregorian::validate_year(year)?;
        if !(1..=crate::MAX_MONTH).contains(&month) {
            return Err(CalendarError::InvalidGregorianMonth(month));
        }
        if day < crate::MIN_DAY {
            return Err(CalendarError::InvalidGregorianDay { year, month, day });
        }
        Ok(gregorian::days_in_gregorian_month(month, year))
    }

    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// One-based month, January = 1
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Days since the epoch for this date
    pub fn to_absolute(&self) -> AbsoluteDate {
        gregorian::gregorian_days(self.year, self.month, self.day)
    }
}

impl FromStr for GregorianDate {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM-DD` date
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_triple(s)?;
        Self::new(year, month, day)
    }
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A Hebrew calendar date on or after 18 Teves 3761.
///
/// Months are numbered from Nissan = 1 through Adar = 12, with Adar II = 13
/// in a leap year. Ordering follows the calendar, so Tishrei sorts before
/// Nissan within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
pub struct HebrewDate {
    year: i32,
    month: u8,
    day: u8,
}

impl HebrewDate {
    /// Creates a new date. A day of 30 in a 29-day month is clamped to 29.
    ///
    /// # Errors
    /// Returns `CalendarError` if the month does not exist in the year, the
    /// day is outside 1..=30, or the date is before 18 Teves 3761.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        hebrew::validate_hebrew_date(year, month, day)?;
        let last = hebrew::hebrew_month_length(month, year);
        if day > last {
            log::debug!("clamping Hebrew day {day} to {last} for {year}-{month:02}");
        }
        Ok(Self {
            year,
            month,
            day: day.min(last),
        })
    }

    pub(crate) const fn from_parts_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month number, Nissan = 1
    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Days since the epoch for this date
    pub fn to_absolute(&self) -> AbsoluteDate {
        hebrew::YearInfo::new(self.year).absolute(self.month, self.day)
    }

    /// Position of the month counted from Tishrei = 1
    fn year_ordinal(&self) -> u8 {
        hebrew::tishrei_ordinal(self.year, self.month)
    }
}

impl PartialOrd for HebrewDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HebrewDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.year_ordinal(), self.day).cmp(&(other.year, other.year_ordinal(), other.day))
    }
}

impl FromStr for HebrewDate {
    type Err = CalendarError;

    /// Parses `YYYY-MM-DD` in Hebrew numbering, e.g. `5771-11-26`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_triple(s)?;
        Self::new(year, month, day)
    }
}

impl Serialize for HebrewDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HebrewDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Splits `YYYY-MM-DD` into numeric components
fn parse_triple(s: &str) -> Result<(i32, u8, u8), CalendarError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(CalendarError::EmptyInput);
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CalendarError::InvalidFormat(format!(
            "Expected 2 {DATE_SEPARATOR} separators, found {}",
            parts.len() - 1
        )));
    }

    Ok((
        parse_number(parts[0])?,
        parse_number(parts[1])?,
        parse_number(parts[2])?,
    ))
}

/// Helper to parse a component with better error messages
fn parse_number<T: FromStr>(s: &str) -> Result<T, CalendarError> {
    s.parse::<T>()
        .map_err(|_| CalendarError::InvalidFormat(s.to_owned()))
}

/// A molad as a whole day count plus chalakim into that day.
///
/// Days count from the molad tohu epoch, with day boundaries at 6pm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Molad {
    day: i32,
    parts: u16,
}

impl Molad {
    /// Splits a chalakim count since molad tohu into day and parts.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the molad day, or the absolute
    /// date it falls on, does not fit in an `i32`.
    pub fn from_chalakim(chalakim: i64) -> Result<Self, CalendarError> {
        let day = i32::try_from(chalakim.div_euclid(CHALAKIM_PER_DAY))
            .ok()
            .filter(|day| day.checked_add(JEWISH_EPOCH).is_some())
            .ok_or(CalendarError::OutOfRange)?;
        // rem_euclid keeps parts in 0..CHALAKIM_PER_DAY
        let parts = chalakim.rem_euclid(CHALAKIM_PER_DAY) as u16;
        Ok(Self { day, parts })
    }

    /// Whole days elapsed since the epoch; day mod 7 of 0 is Sunday
    #[inline]
    pub const fn day(&self) -> i32 {
        self.day
    }

    /// Chalakim into the day, 0..25920
    #[inline]
    pub const fn parts(&self) -> u16 {
        self.parts
    }

    /// Total chalakim since molad tohu
    pub const fn chalakim(&self) -> i64 {
        self.day as i64 * CHALAKIM_PER_DAY + self.parts as i64
    }

    /// The absolute date the molad day falls on
    pub const fn absolute_date(&self) -> AbsoluteDate {
        AbsoluteDate(self.day + JEWISH_EPOCH)
    }

    /// Hours, minutes and chalakim into the molad day
    pub const fn time(&self) -> MoladTime {
        MoladTime::from_parts(self.parts)
    }
}

impl TryFrom<i64> for Molad {
    type Error = CalendarError;

    fn try_from(chalakim: i64) -> Result<Self, Self::Error> {
        Self::from_chalakim(chalakim)
    }
}

impl From<Molad> for i64 {
    fn from(molad: Molad) -> Self {
        molad.chalakim()
    }
}

/// Time of day of a molad: hours 0..=23, minutes 0..=59, chalakim 0..=17.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{}h {}m {}p", hours, minutes, chalakim)]
#[serde(try_from = "u16", into = "u16")]
pub struct MoladTime {
    hours: u8,
    minutes: u8,
    chalakim: u8,
}

impl MoladTime {
    /// Creates a new molad time, validating each component
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMoladTime` if any component is out of range.
    pub fn new(hours: u8, minutes: u8, chalakim: u8) -> Result<Self, CalendarError> {
        if hours > MAX_MOLAD_HOURS || minutes > MAX_MOLAD_MINUTES || chalakim > MAX_MOLAD_CHALAKIM {
            return Err(CalendarError::InvalidMoladTime {
                hours,
                minutes,
                chalakim,
            });
        }
        Ok(Self {
            hours,
            minutes,
            chalakim,
        })
    }

    /// Decomposes chalakim into the day (must be below 25920)
    pub(crate) const fn from_parts(parts: u16) -> Self {
        let parts = parts as i64;
        let hours = parts / CHALAKIM_PER_HOUR;
        let remainder = parts - hours * CHALAKIM_PER_HOUR;
        let minutes = remainder / CHALAKIM_PER_MINUTE;
        Self {
            hours: hours as u8,
            minutes: minutes as u8,
            chalakim: (remainder - minutes * CHALAKIM_PER_MINUTE) as u8,
        }
    }

    /// Chalakim into the day
    pub const fn to_parts(self) -> u16 {
        self.hours as u16 * CHALAKIM_PER_HOUR as u16
            + self.minutes as u16 * CHALAKIM_PER_MINUTE as u16
            + self.chalakim as u16
    }

    pub(crate) const fn with_hours(self, hours: u8) -> Self {
        Self { hours, ..self }
    }

    #[inline]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn chalakim(&self) -> u8 {
        self.chalakim
    }
}

impl TryFrom<u16> for MoladTime {
    type Error = CalendarError;

    fn try_from(parts: u16) -> Result<Self, Self::Error> {
        if i64::from(parts) >= CHALAKIM_PER_DAY {
            let time = Self::from_parts(parts);
            return Err(CalendarError::InvalidMoladTime {
                hours: time.hours,
                minutes: time.minutes,
                chalakim: time.chalakim,
            });
        }
        Ok(Self::from_parts(parts))
    }
}

impl From<MoladTime> for u16 {
    fn from(time: MoladTime) -> Self {
        time.to_parts()
    }
}

/// Year length classification by the lengths of Cheshvan and Kislev
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum YearKviah {
    /// Cheshvan 29, Kislev 29 (chaserim)
    #[display(fmt = "deficient")]
    Deficient,
    /// Cheshvan 29, Kislev 30 (kesidran)
    #[display(fmt = "regular")]
    Regular,
    /// Cheshvan 30, Kislev 30 (shelaimim)
    #[display(fmt = "complete")]
    Complete,
}

/// Unit for `JewishDate::forward`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateUnit {
    #[display(fmt = "day")]
    Day,
    /// Hebrew month
    #[display(fmt = "month")]
    Month,
    /// Hebrew year
    #[display(fmt = "year")]
    Year,
}

impl FromStr for DateUnit {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" | "days" => Ok(Self::Day),
            "month" | "months" => Ok(Self::Month),
            "year" | "years" => Ok(Self::Year),
            _ => Err(CalendarError::UnsupportedUnit(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_date_day_of_week() {
        // 2010-09-09 was a Thursday
        let abs = GregorianDate::new(2010, 9, 9).unwrap().to_absolute();
        assert_eq!(abs.get(), 734_024);
        assert_eq!(abs.day_of_week(), 5);
        // 1 CE January 1 was a Monday
        assert_eq!(AbsoluteDate::MIN.day_of_week(), 2);
    }

    #[test]
    fn test_absolute_date_checked_add() {
        assert_eq!(AbsoluteDate::new(10).checked_add(5), Some(AbsoluteDate::new(15)));
        assert_eq!(AbsoluteDate::MIN.checked_add(-1), None);
        assert_eq!(AbsoluteDate::MAX.checked_add(1), None);
        assert_eq!(AbsoluteDate::MAX.checked_add(i32::MAX), None);
    }

    #[test]
    fn test_gregorian_new_valid() {
        assert!(GregorianDate::new(1, 1, 1).is_ok());
        assert!(GregorianDate::new(2024, 2, 29).is_ok());
        assert!(GregorianDate::new(2024, 12, 31).is_ok());
    }

    #[test]
    fn test_gregorian_new_invalid() {
        assert!(matches!(
            GregorianDate::new(0, 1, 1),
            Err(CalendarError::InvalidGregorianYear(0))
        ));
        assert!(matches!(
            GregorianDate::new(-44, 3, 15),
            Err(CalendarError::InvalidGregorianYear(-44))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 13, 1),
            Err(CalendarError::InvalidGregorianMonth(13))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 0, 1),
            Err(CalendarError::InvalidGregorianMonth(0))
        ));
        assert!(matches!(
            GregorianDate::new(2024, 1, 0),
            Err(CalendarError::InvalidGregorianDay { .. })
        ));
        assert!(matches!(
            GregorianDate::new(2023, 2, 29),
            Err(CalendarError::InvalidGregorianDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
    }

    #[test]
    fn test_gregorian_new_clamped() {
        let date = GregorianDate::new_clamped(2023, 2, 31).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2023, 2, 28));

        let date = GregorianDate::new_clamped(2024, 4, 31).unwrap();
        assert_eq!(date.day(), 30);

        assert!(GregorianDate::new_clamped(2024, 4, 0).is_err());
    }

    #[test]
    fn test_gregorian_display_and_parse() {
        let date = GregorianDate::new(2011, 1, 31).unwrap();
        assert_eq!(date.to_string(), "2011-01-31");
        assert_eq!("2011-01-31".parse::<GregorianDate>().unwrap(), date);
        assert_eq!(" 2011 - 01 - 31 ".parse::<GregorianDate>().unwrap(), date);
        assert_eq!(GregorianDate::new(33, 4, 3).unwrap().to_string(), "0033-04-03");
    }

    #[test]
    fn test_gregorian_parse_errors() {
        assert!(matches!("".parse::<GregorianDate>(), Err(CalendarError::EmptyInput)));
        assert!(matches!(
            "2011-01".parse::<GregorianDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2011-01-31-02".parse::<GregorianDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2011-XX-31".parse::<GregorianDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        // A leading minus for a BC year leaves an empty year component
        assert!(matches!(
            "-0044-03-15".parse::<GregorianDate>(),
            Err(CalendarError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2021-02-29".parse::<GregorianDate>(),
            Err(CalendarError::InvalidGregorianDay { .. })
        ));
    }

    #[test]
    fn test_gregorian_ordering() {
        let d1 = GregorianDate::new(2010, 12, 31).unwrap();
        let d2 = GregorianDate::new(2011, 1, 1).unwrap();
        let d3 = GregorianDate::new(2011, 1, 2).unwrap();
        assert!(d1 < d2);
        assert!(d2 < d3);
    }

    #[test]
    fn test_gregorian_serde() {
        let date = GregorianDate::new(2011, 1, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2011-01-31""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2011-02-30""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_hebrew_new_valid_and_clamped() {
        let date = HebrewDate::new(5771, crate::SHEVAT, 26).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (5771, 11, 26));

        // Cheshvan 5773 has 29 days
        let date = HebrewDate::new(5773, crate::CHESHVAN, 30).unwrap();
        assert_eq!(date.day(), 29);

        // Adar II exists in 5771
        assert!(HebrewDate::new(5771, crate::ADAR_II, 1).is_ok());
    }

    #[test]
    fn test_hebrew_new_invalid() {
        assert!(matches!(
            HebrewDate::new(5772, crate::ADAR_II, 1),
            Err(CalendarError::InvalidHebrewMonth {
                year: 5772,
                month: 13,
                last: 12
            })
        ));
        assert!(matches!(
            HebrewDate::new(5771, 14, 1),
            Err(CalendarError::InvalidHebrewMonth { .. })
        ));
        assert!(matches!(
            HebrewDate::new(5771, 0, 1),
            Err(CalendarError::InvalidHebrewMonth { .. })
        ));
        assert!(matches!(
            HebrewDate::new(5771, crate::NISSAN, 31),
            Err(CalendarError::InvalidHebrewDay(31))
        ));
        assert!(matches!(
            HebrewDate::new(5771, crate::NISSAN, 0),
            Err(CalendarError::InvalidHebrewDay(0))
        ));
        assert!(matches!(
            HebrewDate::new(3761, crate::TEVES, 17),
            Err(CalendarError::PreEpoch { .. })
        ));
        assert!(matches!(
            HebrewDate::new(3760, crate::NISSAN, 1),
            Err(CalendarError::PreEpoch { .. })
        ));
        assert!(HebrewDate::new(3761, crate::TEVES, 18).is_ok());
    }

    #[test]
    fn test_hebrew_ordering_follows_the_year() {
        let tishrei = HebrewDate::new(5771, crate::TISHREI, 1).unwrap();
        let adar_ii = HebrewDate::new(5771, crate::ADAR_II, 1).unwrap();
        let nissan = HebrewDate::new(5771, crate::NISSAN, 1).unwrap();
        let elul = HebrewDate::new(5771, crate::ELUL, 29).unwrap();
        let next_tishrei = HebrewDate::new(5772, crate::TISHREI, 1).unwrap();
        assert!(tishrei < adar_ii);
        assert!(adar_ii < nissan);
        assert!(nissan < elul);
        assert!(elul < next_tishrei);
    }

    #[test]
    fn test_hebrew_display_parse_serde() {
        let date = HebrewDate::new(5771, crate::SHEVAT, 26).unwrap();
        assert_eq!(date.to_string(), "5771-11-26");
        assert_eq!("5771-11-26".parse::<HebrewDate>().unwrap(), date);

        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""5771-11-26""#);
        let parsed: HebrewDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<HebrewDate, _> = serde_json::from_str(r#""5772-13-01""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_molad_decomposition() {
        let molad = Molad::from_chalakim(crate::CHALAKIM_MOLAD_TOHU).unwrap();
        // BaHaRaD: Monday, 5 hours, 204 chalakim
        assert_eq!(molad.day(), 1);
        assert_eq!(molad.parts(), 5 * 1080 + 204);
        let time = molad.time();
        assert_eq!((time.hours(), time.minutes(), time.chalakim()), (5, 11, 6));
        assert_eq!(molad.chalakim(), crate::CHALAKIM_MOLAD_TOHU);
    }

    #[test]
    fn test_molad_serde() {
        let molad = Molad::from_chalakim(54_759_108_344).unwrap();
        let json = serde_json::to_string(&molad).unwrap();
        assert_eq!(json, "54759108344");
        let parsed: Molad = serde_json::from_str(&json).unwrap();
        assert_eq!(molad, parsed);

        // 2^32 molad days would truncate to a valid-looking day
        let result: Result<Molad, _> = serde_json::from_str("111380177494080");
        assert!(result.is_err());
    }

    #[test]
    fn test_molad_rejects_days_outside_i32() {
        let wrapped_day = (1_i64 << 32) + i64::from(734_024 - crate::JEWISH_EPOCH);
        assert_eq!(
            Molad::from_chalakim(wrapped_day * crate::CHALAKIM_PER_DAY),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(
            Molad::from_chalakim(i64::from(i32::MIN) * crate::CHALAKIM_PER_DAY),
            Err(CalendarError::OutOfRange)
        );
        assert_eq!(Molad::try_from(i64::MAX), Err(CalendarError::OutOfRange));

        let last = i64::from(i32::MAX) * crate::CHALAKIM_PER_DAY + 25_919;
        let molad = Molad::from_chalakim(last).unwrap();
        assert_eq!((molad.day(), molad.parts()), (i32::MAX, 25_919));
    }

    #[test]
    fn test_molad_time_new() {
        assert!(MoladTime::new(23, 59, 17).is_ok());
        assert!(matches!(
            MoladTime::new(24, 0, 0),
            Err(CalendarError::InvalidMoladTime { hours: 24, .. })
        ));
        assert!(MoladTime::new(0, 60, 0).is_err());
        assert!(MoladTime::new(0, 0, 18).is_err());
    }

    #[test]
    fn test_molad_time_parts() {
        let time = MoladTime::new(22, 5, 14).unwrap();
        assert_eq!(time.to_parts(), 22 * 1080 + 5 * 18 + 14);
        assert_eq!(MoladTime::try_from(time.to_parts()).unwrap(), time);
        assert!(MoladTime::try_from(25_920).is_err());
        assert_eq!(time.to_string(), "22h 5m 14p");
    }

    #[test]
    fn test_molad_time_serde() {
        let time = MoladTime::new(1, 36, 1).unwrap();
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, (1080 + 36 * 18 + 1).to_string());
        let parsed: MoladTime = serde_json::from_str(&json).unwrap();
        assert_eq!(time, parsed);
        let result: Result<MoladTime, _> = serde_json::from_str("30000");
        assert!(result.is_err());
    }

    #[test]
    fn test_kviah_display_and_serde() {
        assert_eq!(YearKviah::Deficient.to_string(), "deficient");
        let json = serde_json::to_string(&YearKviah::Complete).unwrap();
        assert_eq!(json, r#""Complete""#);
    }

    #[test]
    fn test_date_unit_from_str() {
        assert_eq!("day".parse::<DateUnit>().unwrap(), DateUnit::Day);
        assert_eq!(" Months ".parse::<DateUnit>().unwrap(), DateUnit::Month);
        assert_eq!("YEAR".parse::<DateUnit>().unwrap(), DateUnit::Year);
        assert!(matches!(
            "week".parse::<DateUnit>(),
            Err(CalendarError::UnsupportedUnit(unit)) if unit == "week"
        ));
    }
}
