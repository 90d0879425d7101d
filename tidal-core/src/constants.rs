pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

pub const HOURS_PER_JULIAN_CENTURY: f64 = 876_600.0;

pub const SECONDS_PER_JULIAN_CENTURY: f64 = 3_155_760_000.0;

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds in a 365-day year; leap days are accounted for separately.
pub const SECONDS_PER_COMMON_YEAR: i64 = 31_536_000;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;
