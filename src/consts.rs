/// Minimum accepted year (inclusive)
pub const MIN_YEAR: u16 = 100;

/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day number any month can have
pub const MAX_DAY: u8 = 31;

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
    28, // February (non-leap, adjusted by is_leap_year check)
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
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Accepted separators between day, month and year. Any of them may appear in
/// either position.
pub const DATE_SEPARATORS: [char; 3] = ['.', '/', '-'];

/// Two-digit years are offset from this century, no sliding window
pub const TWO_DIGIT_YEAR_BASE: u16 = 2000;

/// Statutory cutoff that switches the duration rule: 1 January 2026
pub const CUTOFF_YEAR: u16 = 2026;
/// Month of the statutory cutoff
pub const CUTOFF_MONTH: u8 = JANUARY;
/// Day of the statutory cutoff
pub const CUTOFF_DAY: u8 = MIN_DAY;

/// Deadline length for start dates on/after the cutoff, and for the overshoot case
pub const SHORT_TERM_MONTHS: u32 = 18;
/// Deadline length under the rule in force before the cutoff
pub const LONG_TERM_MONTHS: u32 = 24;
