/// Error type for calendar conversion and navigation.
///
/// Every variant is a precondition violation at the call site. Nothing is
/// built from invalid input, so a caller's existing value is never affected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Gregorian year before 1 CE.
    #[error("Invalid Gregorian year: {0} (must be >= 1)")]
    InvalidGregorianYear(i32),

    /// Gregorian month outside 1..=12, always reported one-based.
    #[error("Invalid Gregorian month: {0} (must be 1-12)")]
    InvalidGregorianMonth(u8),

    /// Gregorian day of month below 1.
    #[error("Invalid Gregorian day {day} for {year}-{month:02}")]
    InvalidGregorianDay { year: i32, month: u8, day: u8 },

    /// Hebrew month outside 1..=12, or 1..=13 in a leap year.
    #[error("Invalid Hebrew month {month} for year {year} (must be 1-{last})")]
    InvalidHebrewMonth { year: i32, month: u8, last: u8 },

    /// Hebrew day of month outside 1..=30.
    #[error("Invalid Hebrew day: {0} (must be 1-30)")]
    InvalidHebrewDay(u8),

    /// Hebrew date earlier than 18 Teves 3761.
    #[error("Hebrew date {year}-{month:02}-{day:02} is before 18 Teves 3761")]
    PreEpoch { year: i32, month: u8, day: u8 },

    /// Molad time component out of range.
    #[error("Invalid molad time {hours}h {minutes}m {chalakim}p (limits 23h 59m 17p)")]
    InvalidMoladTime { hours: u8, minutes: u8, chalakim: u8 },

    /// Navigation amount below 1.
    #[error("Invalid navigation amount: {0} (must be >= 1)")]
    InvalidAmount(i32),

    /// Navigation unit other than day, month or year.
    #[error("Unsupported navigation unit: {0}")]
    UnsupportedUnit(String),

    /// Navigation that would leave the supported absolute-date axis.
    #[error("Date out of supported range")]
    OutOfRange,

    /// Malformed date text.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty date text.
    #[error("Empty date string")]
    EmptyInput,
}
