/// Minimum valid Gregorian year (1 CE)
pub const MIN_GREGORIAN_YEAR: i32 = 1;
/// Maximum valid Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: i32 = 1_000_000;

/// Absolute date of Gregorian 1 CE January 1
pub const MIN_ABSOLUTE_DATE: i32 = 1;
/// Absolute date of December 31 in `MAX_GREGORIAN_YEAR`
pub const MAX_ABSOLUTE_DATE: i32 = 365_242_500;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_gregorian_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Nissan, the first month counted from the spring
pub const NISSAN: u8 = 1;
/// Iyar
pub const IYAR: u8 = 2;
/// Sivan
pub const SIVAN: u8 = 3;
/// Tammuz
pub const TAMMUZ: u8 = 4;
/// Av
pub const AV: u8 = 5;
/// Elul, the last month of the Hebrew year
pub const ELUL: u8 = 6;
/// Tishrei, the month the Hebrew year number changes in
pub const TISHREI: u8 = 7;
/// Cheshvan, 29 or 30 days depending on the year
pub const CHESHVAN: u8 = 8;
/// Kislev, 29 or 30 days depending on the year
pub const KISLEV: u8 = 9;
/// Teves
pub const TEVES: u8 = 10;
/// Shevat
pub const SHEVAT: u8 = 11;
/// Adar, or Adar I in a leap year
pub const ADAR: u8 = 12;
/// Adar II, only present in leap years
pub const ADAR_II: u8 = 13;

/// Days in a short Hebrew month
pub const SHORT_MONTH_DAYS: u8 = 29;
/// Days in a full Hebrew month
pub const LONG_MONTH_DAYS: u8 = 30;

/// Length of the 19 year Metonic cycle
pub(crate) const METONIC_CYCLE: i32 = 19;
/// Lunar months in a complete Metonic cycle
pub(crate) const MONTHS_PER_CYCLE: i64 = 235;

/// Chalakim in one minute
pub const CHALAKIM_PER_MINUTE: i64 = 18;
/// Chalakim in one hour
pub const CHALAKIM_PER_HOUR: i64 = 1080;
/// Chalakim in one day
pub const CHALAKIM_PER_DAY: i64 = 25_920;
/// Chalakim in a mean lunar month (29 days, 12 hours, 793 chalakim)
pub const CHALAKIM_PER_MONTH: i64 = 765_433;
/// Molad of Tishrei in year 1 (molad tohu), counted from the start of Sunday
pub const CHALAKIM_MOLAD_TOHU: i64 = 31_524;

/// Absolute date of the day before the Hebrew calendar's elapsed-day count begins
pub const JEWISH_EPOCH: i32 = -1_373_429;

/// Earliest supported Hebrew date: 18 Teves 3761 (Gregorian 1 CE January 1)
pub const MIN_HEBREW_YEAR: i32 = 3761;
/// Hebrew year containing `MAX_ABSOLUTE_DATE`
pub const MAX_HEBREW_YEAR: i32 = 1_003_749;
/// Month of the earliest supported Hebrew date
pub const MIN_HEBREW_MONTH: u8 = TEVES;
/// Day of the earliest supported Hebrew date
pub const MIN_HEBREW_DAY: u8 = 18;

/// Molad Zaken: a molad at or after noon postpones Rosh Hashanah
pub(crate) const MOLAD_ZAKEN_PARTS: i64 = 18 * CHALAKIM_PER_HOUR;
/// GaTRaD: Tuesday molad at or after 9 hours 204 chalakim in a common year
pub(crate) const GATRAD_PARTS: i64 = 9 * CHALAKIM_PER_HOUR + 204;
/// BeTuTaKFoT: Monday molad at or after 15 hours 589 chalakim following a leap year
pub(crate) const BETUTAKFOT_PARTS: i64 = 15 * CHALAKIM_PER_HOUR + 589;

/// Hours the molad day count runs ahead of civil midnight (days start at 6pm)
pub(crate) const MOLAD_DAY_START_OFFSET: u8 = 6;
/// Hours added to a molad hour to express it from civil midnight
pub(crate) const MOLAD_CLOCK_SHIFT: u8 = 18;

/// Largest valid molad hour
pub const MAX_MOLAD_HOURS: u8 = 23;
/// Largest valid molad minute
pub const MAX_MOLAD_MINUTES: u8 = 59;
/// Largest valid molad chalakim remainder within a minute
pub const MAX_MOLAD_CHALAKIM: u8 = 17;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
