// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Civil-calendar constructors on [`JulianDay`] (`Time<UT>`).

use chrono::{DateTime, TimeZone};

use crate::calendar::{civil_to_julian_day, iso_string_to_julian_day, julian_day_to_civil, CivilDateTime};
use crate::error::EphemerisError;
use crate::JulianDay;

impl JulianDay {
    /// Julian Day of a civil UTC timestamp.
    #[inline]
    pub fn from_civil(dt: &CivilDateTime) -> Self {
        civil_to_julian_day(dt)
    }

    /// Julian Day of any zoned `chrono` timestamp, normalised to UTC first.
    #[inline]
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        civil_to_julian_day(&CivilDateTime::from(dt))
    }

    /// Parses an ISO-8601 timestamp.
    #[inline]
    pub fn from_iso(s: &str) -> Result<Self, EphemerisError> {
        iso_string_to_julian_day(s)
    }

    /// Civil timestamp for this Julian Day (Julian calendar before 1582-10-15),
    /// or `None` outside [`CIVIL_JD_RANGE`](crate::CIVIL_JD_RANGE).
    #[inline]
    pub fn to_civil(&self) -> Option<CivilDateTime> {
        julian_day_to_civil(*self)
    }
}
