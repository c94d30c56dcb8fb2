//! Hebrew calendar arithmetic: molad, dechiyos, year and month lengths, and
//! conversion between Hebrew dates and absolute day numbers.

use crate::consts::{
    ADAR, ADAR_II, BETUTAKFOT_PARTS, CHALAKIM_MOLAD_TOHU, CHALAKIM_PER_DAY, CHALAKIM_PER_MONTH,
    CHESHVAN, ELUL, GATRAD_PARTS, IYAR, JEWISH_EPOCH, KISLEV, LONG_MONTH_DAYS, MAX_HEBREW_YEAR,
    METONIC_CYCLE, MIN_HEBREW_DAY, MIN_HEBREW_MONTH, MIN_HEBREW_YEAR, MOLAD_ZAKEN_PARTS,
    MONTHS_PER_CYCLE, NISSAN, SHORT_MONTH_DAYS, TAMMUZ, TEVES, TISHREI,
};
use crate::{AbsoluteDate, CalendarError, HebrewDate, Molad, YearKviah};

// Weekdays as molad day mod 7
const SUNDAY: i32 = 0;
const MONDAY: i32 = 1;
const TUESDAY: i32 = 2;
const WEDNESDAY: i32 = 3;
const FRIDAY: i32 = 5;

/// Leap years are years 3, 6, 8, 11, 14, 17 and 19 of the Metonic cycle.
pub const fn is_hebrew_leap_year(year: i32) -> bool {
    (7 * year + 1).rem_euclid(METONIC_CYCLE) < 7
}

/// `ADAR_II` in a leap year, otherwise `ADAR`
pub const fn last_month_of_year(year: i32) -> u8 {
    if is_hebrew_leap_year(year) { ADAR_II } else { ADAR }
}

/// Position of `month` within the year counted from Tishrei = 1
///
/// # Errors
/// Returns `CalendarError::InvalidHebrewMonth` if the month does not exist in the year.
pub fn month_of_year(year: i32, month: u8) -> Result<u8, CalendarError> {
    check_month(year, month)?;
    Ok(tishrei_ordinal(year, month))
}

pub(crate) const fn tishrei_ordinal(year: i32, month: u8) -> u8 {
    let (shift, months) = if is_hebrew_leap_year(year) { (6, 13) } else { (5, 12) };
    (month + shift) % months + 1
}

/// Chalakim from molad tohu to the molad of `month` in `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidHebrewMonth` if the month does not exist in the year.
pub fn chalakim_since_molad_tohu(year: i32, month: u8) -> Result<i64, CalendarError> {
    check_month(year, month)?;
    Ok(molad_chalakim(year, month))
}

pub(crate) const fn molad_chalakim(year: i32, month: u8) -> i64 {
    let prior = (year - 1) as i64;
    let cycle = METONIC_CYCLE as i64;
    let year_in_cycle = prior % cycle;
    let months_elapsed = MONTHS_PER_CYCLE * (prior / cycle)
        + 12 * year_in_cycle
        + (7 * year_in_cycle + 1) / cycle
        + (tishrei_ordinal(year, month) as i64 - 1);
    CHALAKIM_MOLAD_TOHU + CHALAKIM_PER_MONTH * months_elapsed
}

/// Molad of `month` in `year`
///
/// # Errors
/// Returns `CalendarError::InvalidHebrewMonth` for a month the year lacks, and
/// `CalendarError::OutOfRange` if the molad day does not fit the day axis.
pub fn molad_of_month(year: i32, month: u8) -> Result<Molad, CalendarError> {
    Molad::from_chalakim(chalakim_since_molad_tohu(year, month)?)
}

/// Absolute date the molad day of a chalakim count falls on
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the molad day does not fit the day axis.
pub fn molad_to_absolute_date(chalakim: i64) -> Result<AbsoluteDate, CalendarError> {
    Ok(Molad::from_chalakim(chalakim)?.absolute_date())
}

/// Days from the epoch to Rosh Hashanah of `year`, after applying the dechiyos.
pub fn rosh_hashana_elapsed_days(year: i32) -> i32 {
    let chalakim = molad_chalakim(year, TISHREI);
    let molad_day = chalakim.div_euclid(CHALAKIM_PER_DAY) as i32;
    add_dechiyos(year, molad_day, chalakim.rem_euclid(CHALAKIM_PER_DAY))
}

/// Applies the four postponements to the molad of Tishrei.
///
/// Molad zaken, GaTRaD and BeTuTaKFoT are mutually exclusive; lo ADU rosh is
/// checked afterwards on the resulting day.
fn add_dechiyos(year: i32, molad_day: i32, molad_parts: i64) -> i32 {
    let weekday = molad_day.rem_euclid(7);
    let mut rosh_hashana = molad_day;

    if molad_parts >= MOLAD_ZAKEN_PARTS {
        log::trace!("{year}: molad zaken postpones Rosh Hashanah");
        rosh_hashana += 1;
    } else if weekday == TUESDAY && molad_parts >= GATRAD_PARTS && !is_hebrew_leap_year(year) {
        log::trace!("{year}: GaTRaD postpones Rosh Hashanah");
        rosh_hashana += 1;
    } else if weekday == MONDAY && molad_parts >= BETUTAKFOT_PARTS && is_hebrew_leap_year(year - 1)
    {
        log::trace!("{year}: BeTuTaKFoT postpones Rosh Hashanah");
        rosh_hashana += 1;
    }

    if matches!(rosh_hashana.rem_euclid(7), SUNDAY | WEDNESDAY | FRIDAY) {
        log::trace!("{year}: lo ADU rosh postpones Rosh Hashanah");
        rosh_hashana += 1;
    }
    rosh_hashana
}

/// Days in `year`: 353, 354 or 355, or 383, 384 or 385 in a leap year.
pub fn days_in_year(year: i32) -> i32 {
    rosh_hashana_elapsed_days(year + 1) - rosh_hashana_elapsed_days(year)
}

pub fn year_kviah(year: i32) -> YearKviah {
    kviah_of_length(days_in_year(year))
}

pub fn is_cheshvan_long(year: i32) -> bool {
    year_kviah(year) == YearKviah::Complete
}

pub fn is_kislev_short(year: i32) -> bool {
    year_kviah(year) == YearKviah::Deficient
}

/// Days in a Hebrew month, 29 or 30.
///
/// # Errors
/// Returns `CalendarError::InvalidHebrewMonth` if the month does not exist in the year.
pub fn days_in_hebrew_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    check_month(year, month)?;
    Ok(hebrew_month_length(month, year))
}

pub(crate) fn hebrew_month_length(month: u8, year: i32) -> u8 {
    YearInfo::new(year).month_length(month)
}

/// One-based day ordinal of a date within its Hebrew year (1 Tishrei = 1).
/// A day past the end of the month is clamped.
///
/// # Errors
/// Returns `CalendarError` if the date fails `validate_hebrew_date`.
pub fn days_since_start_of_year(year: i32, month: u8, day: u8) -> Result<i32, CalendarError> {
    let date = HebrewDate::new(year, month, day)?;
    Ok(YearInfo::new(year).day_of_year(date.month(), date.day()))
}

/// Absolute date of a Hebrew date. A day past the end of the month is clamped.
///
/// # Errors
/// Returns `CalendarError` if the date fails `validate_hebrew_date`.
pub fn hebrew_to_absolute(year: i32, month: u8, day: u8) -> Result<AbsoluteDate, CalendarError> {
    Ok(HebrewDate::new(year, month, day)?.to_absolute())
}

/// Hebrew date of an absolute date.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the date is outside `AbsoluteDate::MIN..=AbsoluteDate::MAX`.
pub fn absolute_to_hebrew(date: AbsoluteDate) -> Result<HebrewDate, CalendarError> {
    if !date.is_supported() {
        return Err(CalendarError::OutOfRange);
    }
    Ok(hebrew_from_absolute(date))
}

/// Hebrew date of an absolute date already known to be supported
pub(crate) fn hebrew_from_absolute(date: AbsoluteDate) -> HebrewDate {
    let target = date.get();

    // Hebrew years are shorter than 366 days on average, so the estimate is low.
    let mut year = (target - JEWISH_EPOCH) / 366;
    while target >= YearInfo::new(year + 1).absolute(TISHREI, 1).get() {
        year += 1;
    }

    let info = YearInfo::new(year);
    let mut month = if target < info.absolute(NISSAN, 1).get() {
        TISHREI
    } else {
        NISSAN
    };
    while target > info.absolute(month, info.month_length(month)).get() {
        month += 1;
    }

    let day = target - info.absolute(month, 1).get() + 1;
    HebrewDate::from_parts_unchecked(year, month, day as u8)
}

/// Checks a Hebrew date against the supported range.
///
/// A day of 30 is accepted for every month; callers clamp it to the month length.
///
/// # Errors
/// Returns `InvalidHebrewMonth`, `InvalidHebrewDay`, `PreEpoch`, or
/// `OutOfRange` for dates past `AbsoluteDate::MAX`.
pub fn validate_hebrew_date(year: i32, month: u8, day: u8) -> Result<(), CalendarError> {
    if year > MAX_HEBREW_YEAR {
        return Err(CalendarError::OutOfRange);
    }
    check_month(year, month)?;
    if !(1..=LONG_MONTH_DAYS).contains(&day) {
        return Err(CalendarError::InvalidHebrewDay(day));
    }
    let before_epoch_month = (TISHREI..MIN_HEBREW_MONTH).contains(&month)
        || (month == MIN_HEBREW_MONTH && day < MIN_HEBREW_DAY);
    if year < MIN_HEBREW_YEAR || (year == MIN_HEBREW_YEAR && before_epoch_month) {
        return Err(CalendarError::PreEpoch { year, month, day });
    }
    if year == MAX_HEBREW_YEAR {
        let info = YearInfo::new(year);
        let clamped = day.min(info.month_length(month));
        if !info.absolute(month, clamped).is_supported() {
            return Err(CalendarError::OutOfRange);
        }
    }
    Ok(())
}

fn check_month(year: i32, month: u8) -> Result<(), CalendarError> {
    let last = if year >= 1 { last_month_of_year(year) } else { ADAR };
    if !(NISSAN..=last).contains(&month) {
        return Err(CalendarError::InvalidHebrewMonth { year, month, last });
    }
    Ok(())
}

const fn kviah_of_length(length: i32) -> YearKviah {
    match length % 10 {
        3 => YearKviah::Deficient,
        5 => YearKviah::Complete,
        _ => YearKviah::Regular,
    }
}

/// A Hebrew year with its Rosh Hashanah and length resolved once, so month
/// walks do not recompute the molad.
#[derive(Debug, Clone, Copy)]
pub(crate) struct YearInfo {
    elapsed_days: i32,
    length: i32,
    leap: bool,
}

impl YearInfo {
    pub(crate) fn new(year: i32) -> Self {
        let elapsed_days = rosh_hashana_elapsed_days(year);
        Self {
            elapsed_days,
            length: rosh_hashana_elapsed_days(year + 1) - elapsed_days,
            leap: is_hebrew_leap_year(year),
        }
    }

    pub(crate) const fn last_month(&self) -> u8 {
        if self.leap { ADAR_II } else { ADAR }
    }

    pub(crate) const fn month_length(&self, month: u8) -> u8 {
        let short = match month {
            IYAR | TAMMUZ | ELUL | TEVES | ADAR_II => true,
            CHESHVAN => !matches!(kviah_of_length(self.length), YearKviah::Complete),
            KISLEV => matches!(kviah_of_length(self.length), YearKviah::Deficient),
            ADAR => !self.leap,
            _ => false,
        };
        if short { SHORT_MONTH_DAYS } else { LONG_MONTH_DAYS }
    }

    pub(crate) fn day_of_year(&self, month: u8, day: u8) -> i32 {
        let mut elapsed = i32::from(day);
        if month < TISHREI {
            for m in TISHREI..=self.last_month() {
                elapsed += i32::from(self.month_length(m));
            }
            for m in NISSAN..month {
                elapsed += i32::from(self.month_length(m));
            }
        } else {
            for m in TISHREI..month {
                elapsed += i32::from(self.month_length(m));
            }
        }
        elapsed
    }

    pub(crate) fn absolute(&self, month: u8, day: u8) -> AbsoluteDate {
        AbsoluteDate::new(self.day_of_year(month, day) + self.elapsed_days + JEWISH_EPOCH)
    }
}
