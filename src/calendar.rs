// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil date/time ⇄ Julian Day conversion.
//!
//! The forward transform is the classical algorithm from *Meeus,
//! Astronomical Algorithms* ch. 7: January and February are treated as
//! months 13 and 14 of the previous year and the Gregorian century
//! correction is always applied.  The result is on the astronomical
//! convention, so the day boundary sits at 12:00 UTC:
//!
//! ```
//! use kalachakra::{civil_to_julian_day, CivilDateTime};
//!
//! let midnight = CivilDateTime::from_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! assert_eq!(civil_to_julian_day(&midnight).value(), 2_460_310.5);
//! ```
//!
//! The inverse switches calendar rule at the integer Julian Day
//! [`GREGORIAN_ADOPTION_JD`] (1582-10-15): earlier days are reconstructed
//! with the Julian calendar rule, later ones with the Gregorian rule.
//! Round-trips are exact (to the microsecond) from the adoption date on.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::EphemerisError;
use crate::JulianDay;

/// First Julian Day number reconstructed with the Gregorian rule.
pub const GREGORIAN_ADOPTION_JD: i64 = 2_299_161;

/// Julian Days accepted by [`julian_day_to_civil`]: -4712-01-01T00:00
/// (Julian calendar) up to, not including, 10000-01-01T00:00 (Gregorian).
pub const CIVIL_JD_RANGE: std::ops::Range<f64> = -0.5..5_373_484.5;

const MICROS_PER_DAY: i64 = 86_400_000_000;
const MICROS_PER_HOUR: i64 = 3_600_000_000;
const MICROS_PER_MINUTE: i64 = 60_000_000;
const MICROS_PER_SECOND: i64 = 1_000_000;

// ═══════════════════════════════════════════════════════════════════════════
// CivilDateTime
// ═══════════════════════════════════════════════════════════════════════════

/// A calendar timestamp on the UTC reference zone.
///
/// Unlike [`chrono::DateTime`], this type can also carry Julian-calendar
/// dates produced by [`julian_day_to_civil`] (e.g. 1500-02-29) that have no
/// proleptic Gregorian counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

impl CivilDateTime {
    /// Builds a timestamp after checking every field against its range.
    ///
    /// Days are only checked against `1..=31`; month lengths depend on the
    /// calendar rule, which the caller owns.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Option<Self> {
        let valid = (1..=12).contains(&month)
            && (1..=31).contains(&day)
            && hour < 24
            && minute < 60
            && second < 61
            && nanosecond < 1_000_000_000;
        valid.then_some(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    /// Whole-second shorthand for [`CivilDateTime::new`].
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        Self::new(year, month, day, hour, minute, second, 0)
    }

    /// Fraction of the civil day elapsed since midnight, in days.
    pub fn day_fraction(&self) -> f64 {
        self.hour as f64 / 24.0
            + self.minute as f64 / 1_440.0
            + self.second as f64 / 86_400.0
            + self.nanosecond as f64 / 86_400_000_000_000.0
    }

    /// Converts to a `chrono` UTC timestamp.
    ///
    /// Returns `None` when the fields do not form a proleptic Gregorian date
    /// chrono can represent.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_nano_opt(self.hour, self.minute, self.second, self.nanosecond)
            .map(|naive| naive.and_utc())
    }

    /// Signed distance `self − other` in seconds, treating both as
    /// Gregorian timestamps.
    pub fn seconds_since(&self, other: &Self) -> f64 {
        (civil_to_julian_day(self) - civil_to_julian_day(other)).value() * 86_400.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for CivilDateTime {
    /// Normalises any zoned timestamp to UTC.
    fn from(dt: DateTime<Tz>) -> Self {
        Self::from(dt.naive_utc())
    }
}

impl From<NaiveDateTime> for CivilDateTime {
    /// Zoneless timestamps are taken to already be in UTC.
    fn from(naive: NaiveDateTime) -> Self {
        Self {
            year: naive.year(),
            month: naive.month(),
            day: naive.day(),
            hour: naive.hour(),
            minute: naive.minute(),
            second: naive.second(),
            nanosecond: naive.nanosecond(),
        }
    }
}

impl FromStr for CivilDateTime {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso(s)
    }
}

impl fmt::Display for CivilDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.nanosecond != 0 {
            write!(f, ".{:06}", self.nanosecond / 1_000)?;
        }
        f.write_str("Z")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════════

/// Civil timestamp (UTC) → Julian Day.
///
/// Never fails; extreme years lose precision but still produce a number.
pub fn civil_to_julian_day(dt: &CivilDateTime) -> JulianDay {
    let decimal_day = dt.day as f64 + dt.day_fraction();

    let (year, month) = if dt.month <= 2 {
        (dt.year as f64 - 1.0, dt.month as f64 + 12.0)
    } else {
        (dt.year as f64, dt.month as f64)
    };

    let a = (year / 100.0).trunc();
    let b = 2.0 - a + (a / 4.0).trunc();

    let jd = (365.25 * (year + 4716.0)).trunc()
        + (30.6001 * (month + 1.0)).trunc()
        + decimal_day
        + b
        - 1524.5;
    JulianDay::new(jd)
}

/// Julian Day → civil timestamp (UTC).
///
/// Days before [`GREGORIAN_ADOPTION_JD`] come back in the Julian calendar.
/// The time of day is rounded to the nearest microsecond; a rounding that
/// reaches midnight rolls over into the next day. Returns `None` for NaN,
/// infinities and any day outside [`CIVIL_JD_RANGE`].
pub fn julian_day_to_civil(jd: JulianDay) -> Option<CivilDateTime> {
    if !CIVIL_JD_RANGE.contains(&jd.value()) {
        return None;
    }
    let shifted = jd.value() + 0.5;
    let mut z = shifted.floor() as i64;
    let mut micros = ((shifted - z as f64) * MICROS_PER_DAY as f64).round() as i64;
    if micros >= MICROS_PER_DAY {
        z += 1;
        micros -= MICROS_PER_DAY;
    }

    let a = if z < GREGORIAN_ADOPTION_JD {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha.div_euclid(4)
    };

    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (30.6001 * e as f64).floor() as i64;
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };

    Some(CivilDateTime {
        year: year as i32,
        month: month as u32,
        day: day as u32,
        hour: (micros / MICROS_PER_HOUR) as u32,
        minute: (micros % MICROS_PER_HOUR / MICROS_PER_MINUTE) as u32,
        second: (micros % MICROS_PER_MINUTE / MICROS_PER_SECOND) as u32,
        nanosecond: (micros % MICROS_PER_SECOND * 1_000) as u32,
    })
}

/// ISO-8601 timestamp → Julian Day.
///
/// Accepts an explicit offset (`Z`, `+05:30`) or a zoneless timestamp, which
/// is taken to be UTC.  A bare date means midnight.
pub fn iso_string_to_julian_day(s: &str) -> Result<JulianDay, EphemerisError> {
    parse_iso(s).map(|dt| civil_to_julian_day(&dt))
}

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const ZONED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

fn parse_iso(s: &str) -> Result<CivilDateTime, EphemerisError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.into());
    }
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, format) {
            return Ok(dt.into());
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(naive.into());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.into());
        }
    }

    Err(EphemerisError::Parse(format!("'{s}' is not an ISO-8601 date/time")))
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
