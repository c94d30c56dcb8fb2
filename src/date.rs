use crate::consts::{
    ADAR, ADAR_II, DECEMBER, ELUL, JANUARY, MAX_HEBREW_YEAR, MAX_MONTH, MIN_DAY, MOLAD_CLOCK_SHIFT,
    MOLAD_DAY_START_OFFSET, NISSAN, TISHREI,
};
use crate::hebrew;
use crate::{
    AbsoluteDate, CalendarError, DateUnit, GregorianDate, HebrewDate, Molad, MoladTime, YearKviah,
    gregorian,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A day held simultaneously as an absolute date, a Gregorian date and a
/// Hebrew date.
///
/// The absolute date is the arbiter: every constructor derives both calendar
/// representations from it, and equality, ordering and hashing use it alone.
/// Values are immutable; the `with_*` and navigation methods return a new date.
///
/// A molad time is carried when the date was built from a molad or an explicit
/// Hebrew date and time, and is zero otherwise.
#[derive(Debug, Clone, Copy)]
pub struct JewishDate {
    absolute: AbsoluteDate,
    gregorian: GregorianDate,
    hebrew: HebrewDate,
    day_of_week: u8,
    molad_time: MoladTime,
}

impl JewishDate {
    /// Creates a date from an absolute day number.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` outside `AbsoluteDate::MIN..=AbsoluteDate::MAX`.
    pub fn from_absolute(absolute: AbsoluteDate) -> Result<Self, CalendarError> {
        Ok(Self {
            absolute,
            gregorian: gregorian::absolute_to_gregorian(absolute)?,
            hebrew: hebrew::absolute_to_hebrew(absolute)?,
            day_of_week: absolute.day_of_week(),
            molad_time: MoladTime::default(),
        })
    }

    /// Creates a date from a Gregorian date with a one-based month.
    /// A day past the end of the month is clamped to its last day.
    ///
    /// # Errors
    /// Returns `CalendarError` if the year is before 1 CE, the month is
    /// outside 1..=12 or the day is 0.
    pub fn from_gregorian(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let gregorian = GregorianDate::new_clamped(year, month, day)?;
        Self::from_absolute(gregorian.to_absolute())
    }

    /// Creates a date from a Gregorian date with a zero-based month (January = 0).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianMonth` for a month outside 0..=11,
    /// reported in one-based form, otherwise as `from_gregorian`.
    pub fn from_gregorian_zero_based(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if month >= MAX_MONTH {
            return Err(CalendarError::InvalidGregorianMonth(month.saturating_add(1)));
        }
        Self::from_gregorian(year, month + 1, day)
    }

    /// Creates a date from a Hebrew date. A day of 30 in a 29-day month is clamped.
    ///
    /// # Errors
    /// Returns `CalendarError` if the month does not exist in the year, the
    /// day is outside 1..=30 or the date is before 18 Teves 3761.
    pub fn from_hebrew(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let hebrew = HebrewDate::new(year, month, day)?;
        Self::from_absolute(hebrew.to_absolute())
    }

    /// Creates a date from a Hebrew date plus a molad time of day.
    ///
    /// # Errors
    /// As `from_hebrew`, plus `CalendarError::InvalidMoladTime` for an hour
    /// outside 0..=23, a minute outside 0..=59 or chalakim outside 0..=17.
    pub fn from_hebrew_with_time(
        year: i32,
        month: u8,
        day: u8,
        hours: u8,
        minutes: u8,
        chalakim: u8,
    ) -> Result<Self, CalendarError> {
        let molad_time = MoladTime::new(hours, minutes, chalakim)?;
        Ok(Self::from_hebrew(year, month, day)?.with_molad_time(molad_time))
    }

    /// Creates a date from chalakim since molad tohu, keeping the time within the molad day.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the molad day is outside the supported range.
    pub fn from_molad(chalakim: i64) -> Result<Self, CalendarError> {
        let molad = Molad::from_chalakim(chalakim)?;
        Ok(Self::from_absolute(molad.absolute_date())?.with_molad_time(molad.time()))
    }

    /// Creates a date from a `chrono` calendar date.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidGregorianYear` for dates before 1 CE.
    pub fn from_naive_date(date: NaiveDate) -> Result<Self, CalendarError> {
        let month = u8::try_from(date.month()).map_err(|_| CalendarError::OutOfRange)?;
        let day = u8::try_from(date.day()).map_err(|_| CalendarError::OutOfRange)?;
        let gregorian = GregorianDate::new(date.year(), month, day)?;
        Self::from_absolute(gregorian.to_absolute())
    }

    /// Today's date in the local time zone.
    ///
    /// # Errors
    /// Returns `CalendarError` only if the system clock reports a date outside the supported range.
    #[cfg(feature = "clock")]
    pub fn today() -> Result<Self, CalendarError> {
        Self::from_naive_date(chrono::Local::now().date_naive())
    }

    /// Returns the date moved to a Gregorian date. The molad time is reset.
    ///
    /// # Errors
    /// As `from_gregorian`.
    pub fn with_gregorian(&self, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_gregorian(year, month, day)
    }

    /// Returns the date moved to a Hebrew date. The molad time is reset.
    ///
    /// # Errors
    /// As `from_hebrew`.
    pub fn with_hebrew(&self, year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::from_hebrew(year, month, day)
    }

    /// Returns the same Hebrew month and day in another year.
    ///
    /// Adar II becomes Adar in a common year, and the day is clamped to the
    /// length of the month in the target year. The molad time is kept.
    ///
    /// # Errors
    /// As `from_hebrew`.
    pub fn with_hebrew_year(&self, year: i32) -> Result<Self, CalendarError> {
        let month = if self.hebrew.month() == ADAR_II && !hebrew::is_hebrew_leap_year(year) {
            ADAR
        } else {
            self.hebrew.month()
        };
        Ok(Self::from_hebrew(year, month, self.hebrew.day())?.with_molad_time(self.molad_time))
    }

    /// Returns the date moved to an absolute date. The molad time is reset.
    ///
    /// # Errors
    /// As `from_absolute`.
    pub fn with_absolute(&self, absolute: AbsoluteDate) -> Result<Self, CalendarError> {
        Self::from_absolute(absolute)
    }

    /// Returns the date moved to a `chrono` date. The molad time is reset.
    ///
    /// # Errors
    /// As `from_naive_date`.
    pub fn with_naive_date(&self, date: NaiveDate) -> Result<Self, CalendarError> {
        Self::from_naive_date(date)
    }

    const fn with_molad_time(self, molad_time: MoladTime) -> Self {
        Self { molad_time, ..self }
    }

    /// Moves forward by `amount` days, Hebrew months or Hebrew years.
    ///
    /// Moving by months or years keeps the day of month, clamped to the
    /// length of the target month.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidAmount` if `amount < 1`, and
    /// `CalendarError::OutOfRange` if the result is past the supported range.
    pub fn forward(&self, unit: DateUnit, amount: i32) -> Result<Self, CalendarError> {
        if amount < 1 {
            return Err(CalendarError::InvalidAmount(amount));
        }
        log::debug!("forward {amount} {unit} from {self}");
        match unit {
            DateUnit::Day if amount == 1 => self.next_day(),
            DateUnit::Day => {
                let absolute = self
                    .absolute
                    .checked_add(amount)
                    .ok_or(CalendarError::OutOfRange)?;
                Ok(Self::from_absolute(absolute)?.with_molad_time(self.molad_time))
            }
            DateUnit::Month => self.forward_months(amount),
            DateUnit::Year => {
                let year = self
                    .hebrew
                    .year()
                    .checked_add(amount)
                    .ok_or(CalendarError::OutOfRange)?;
                self.with_hebrew_year(year)
            }
        }
    }

    /// Moves back one day.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` when called on `AbsoluteDate::MIN`.
    pub fn back(&self) -> Result<Self, CalendarError> {
        let absolute = self
            .absolute
            .checked_add(-1)
            .ok_or(CalendarError::OutOfRange)?;

        let (year, month, day) = (self.gregorian.year(), self.gregorian.month(), self.gregorian.day());
        let gregorian = if day > MIN_DAY {
            GregorianDate::from_parts_unchecked(year, month, day - 1)
        } else if month > JANUARY {
            let last = gregorian::days_in_gregorian_month(month - 1, year);
            GregorianDate::from_parts_unchecked(year, month - 1, last)
        } else {
            GregorianDate::from_parts_unchecked(year - 1, DECEMBER, 31)
        };

        let (year, month, day) = (self.hebrew.year(), self.hebrew.month(), self.hebrew.day());
        let hebrew = if day > MIN_DAY {
            HebrewDate::from_parts_unchecked(year, month, day - 1)
        } else {
            let (year, month) = match month {
                NISSAN => (year, hebrew::last_month_of_year(year)),
                TISHREI => (year - 1, ELUL),
                _ => (year, month - 1),
            };
            HebrewDate::from_parts_unchecked(year, month, hebrew::hebrew_month_length(month, year))
        };

        Ok(Self {
            absolute,
            gregorian,
            hebrew,
            day_of_week: absolute.day_of_week(),
            molad_time: self.molad_time,
        })
    }

    /// Advances both calendars by one day in step with the absolute date
    fn next_day(&self) -> Result<Self, CalendarError> {
        let absolute = self
            .absolute
            .checked_add(1)
            .ok_or(CalendarError::OutOfRange)?;

        let (year, month, day) = (self.gregorian.year(), self.gregorian.month(), self.gregorian.day());
        let gregorian = if day < gregorian::days_in_gregorian_month(month, year) {
            GregorianDate::from_parts_unchecked(year, month, day + 1)
        } else if month < DECEMBER {
            GregorianDate::from_parts_unchecked(year, month + 1, MIN_DAY)
        } else {
            GregorianDate::from_parts_unchecked(year + 1, JANUARY, MIN_DAY)
        };

        let (year, month, day) = (self.hebrew.year(), self.hebrew.month(), self.hebrew.day());
        let hebrew = if day < hebrew::hebrew_month_length(month, year) {
            HebrewDate::from_parts_unchecked(year, month, day + 1)
        } else {
            let (year, month) = next_hebrew_month(year, month);
            HebrewDate::from_parts_unchecked(year, month, MIN_DAY)
        };

        Ok(Self {
            absolute,
            gregorian,
            hebrew,
            day_of_week: absolute.day_of_week(),
            molad_time: self.molad_time,
        })
    }

    fn forward_months(&self, amount: i32) -> Result<Self, CalendarError> {
        // No year has more than 13 months.
        if amount / 13 > MAX_HEBREW_YEAR - self.hebrew.year() {
            return Err(CalendarError::OutOfRange);
        }

        let (mut year, mut month) = (self.hebrew.year(), self.hebrew.month());
        for _ in 0..amount {
            (year, month) = next_hebrew_month(year, month);
        }

        // from_hebrew clamps a day past the end of the target month
        let date = Self::from_hebrew(year, month, self.hebrew.day())?;
        Ok(date.with_molad_time(self.molad_time))
    }

    /// The molad of the current Hebrew month, as the civil date it falls on
    /// with its time counted from midnight.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the molad falls outside the supported range.
    pub fn molad(&self) -> Result<Self, CalendarError> {
        let date = Self::from_molad(self.chalakim_since_molad_tohu())?;
        let time = date.molad_time;
        let date = if time.hours() >= MOLAD_DAY_START_OFFSET {
            date.forward(DateUnit::Day, 1)?
        } else {
            date
        };
        let hours = (time.hours() + MOLAD_CLOCK_SHIFT) % 24;
        Ok(date.with_molad_time(time.with_hours(hours)))
    }

    #[inline]
    pub const fn absolute(&self) -> AbsoluteDate {
        self.absolute
    }

    #[inline]
    pub const fn gregorian(&self) -> GregorianDate {
        self.gregorian
    }

    #[inline]
    pub const fn hebrew(&self) -> HebrewDate {
        self.hebrew
    }

    pub const fn gregorian_year(&self) -> i32 {
        self.gregorian.year()
    }

    /// One-based Gregorian month
    pub const fn gregorian_month(&self) -> u8 {
        self.gregorian.month()
    }

    pub const fn gregorian_day(&self) -> u8 {
        self.gregorian.day()
    }

    pub const fn jewish_year(&self) -> i32 {
        self.hebrew.year()
    }

    /// Hebrew month, Nissan = 1
    pub const fn jewish_month(&self) -> u8 {
        self.hebrew.month()
    }

    pub const fn jewish_day(&self) -> u8 {
        self.hebrew.day()
    }

    /// 1 = Sunday through 7 = Shabbos
    #[inline]
    pub const fn day_of_week(&self) -> u8 {
        self.day_of_week
    }

    #[inline]
    pub const fn molad_time(&self) -> MoladTime {
        self.molad_time
    }

    pub const fn is_leap_year(&self) -> bool {
        hebrew::is_hebrew_leap_year(self.hebrew.year())
    }

    pub fn days_in_year(&self) -> i32 {
        hebrew::days_in_year(self.hebrew.year())
    }

    /// Days in the current Hebrew month
    pub fn days_in_month(&self) -> u8 {
        hebrew::hebrew_month_length(self.hebrew.month(), self.hebrew.year())
    }

    pub const fn last_day_of_gregorian_month(&self) -> u8 {
        gregorian::days_in_gregorian_month(self.gregorian.month(), self.gregorian.year())
    }

    pub fn kviah(&self) -> YearKviah {
        hebrew::year_kviah(self.hebrew.year())
    }

    pub fn is_cheshvan_long(&self) -> bool {
        hebrew::is_cheshvan_long(self.hebrew.year())
    }

    pub fn is_kislev_short(&self) -> bool {
        hebrew::is_kislev_short(self.hebrew.year())
    }

    /// Day ordinal within the Hebrew year, 1 Tishrei = 1
    pub fn days_since_start_of_year(&self) -> i32 {
        let (month, day) = (self.hebrew.month(), self.hebrew.day());
        hebrew::YearInfo::new(self.hebrew.year()).day_of_year(month, day)
    }

    /// Chalakim from molad tohu to the molad of the current month
    pub const fn chalakim_since_molad_tohu(&self) -> i64 {
        hebrew::molad_chalakim(self.hebrew.year(), self.hebrew.month())
    }

    /// The equivalent `chrono` date, if `chrono` can represent the year
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(
            self.gregorian.year(),
            u32::from(self.gregorian.month()),
            u32::from(self.gregorian.day()),
        )
    }
}

/// Month after `month`: Elul rolls into Tishrei of the next year and the last
/// Adar rolls into Nissan of the same year.
fn next_hebrew_month(year: i32, month: u8) -> (i32, u8) {
    if month == ELUL {
        (year + 1, TISHREI)
    } else if month == hebrew::last_month_of_year(year) {
        (year, NISSAN)
    } else {
        (year, month + 1)
    }
}

impl PartialEq for JewishDate {
    fn eq(&self, other: &Self) -> bool {
        self.absolute == other.absolute
    }
}

impl Eq for JewishDate {}

impl Hash for JewishDate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.absolute.hash(state);
    }
}

impl PartialOrd for JewishDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for JewishDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.absolute.cmp(&other.absolute)
    }
}

impl fmt::Display for JewishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.gregorian, self.hebrew)
    }
}

impl TryFrom<NaiveDate> for JewishDate {
    type Error = CalendarError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_naive_date(date)
    }
}

impl From<GregorianDate> for JewishDate {
    fn from(gregorian: GregorianDate) -> Self {
        let absolute = gregorian.to_absolute();
        Self {
            absolute,
            gregorian,
            hebrew: hebrew::hebrew_from_absolute(absolute),
            day_of_week: absolute.day_of_week(),
            molad_time: MoladTime::default(),
        }
    }
}

impl From<HebrewDate> for JewishDate {
    fn from(hebrew: HebrewDate) -> Self {
        let absolute = hebrew.to_absolute();
        Self {
            absolute,
            gregorian: gregorian::gregorian_from_absolute(absolute),
            hebrew,
            day_of_week: absolute.day_of_week(),
            molad_time: MoladTime::default(),
        }
    }
}

impl FromStr for JewishDate {
    type Err = CalendarError;

    /// Parses an ISO `YYYY-MM-DD` Gregorian date
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.parse::<GregorianDate>()?))
    }
}

impl Serialize for JewishDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.gregorian.to_string())
    }
}

impl<'de> Deserialize<'de> for JewishDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
