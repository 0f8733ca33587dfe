// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Supported Julian Day window of a provider.

use std::fmt;

use qtty::Days;

#[cfg(feature = "serde")]
use serde::{ser::SerializeStruct, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::EphemerisError;
use crate::JulianDay;

/// A closed interval `[start, end]` of Julian Days on the UT axis.
///
/// Both endpoints are valid query instants; anything outside is rejected,
/// never clamped.
///
/// ```
/// use kalachakra::{DateRange, JulianDay};
///
/// let range = DateRange::new(JulianDay::new(10.0), JulianDay::new(20.0));
/// assert!(range.contains(JulianDay::new(20.0)));
/// assert!(range.check(JulianDay::new(21.0)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    pub start: JulianDay,
    pub end: JulianDay,
}

impl DateRange {
    /// Window between two days, given in either order.
    pub const fn new(a: JulianDay, b: JulianDay) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    /// `true` when `jd` lies within the window, endpoints included.
    pub fn contains(&self, jd: JulianDay) -> bool {
        self.start <= jd && jd <= self.end
    }

    /// Passes `jd` through, or fails with an error naming `jd` and both bounds.
    pub fn check(&self, jd: JulianDay) -> Result<JulianDay, EphemerisError> {
        if self.contains(jd) {
            Ok(jd)
        } else {
            Err(EphemerisError::OutOfRange {
                jd: jd.value(),
                min: self.start.value(),
                max: self.end.value(),
            })
        }
    }

    /// Length of the window.
    pub fn duration(&self) -> Days {
        self.end - self.start
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[cfg(feature = "serde")]
impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut s = serializer.serialize_struct("DateRange", 2)?;
        s.serialize_field("min_julian_day", &self.start.value())?;
        s.serialize_field("max_julian_day", &self.end.value())?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            min_julian_day: f64,
            max_julian_day: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(DateRange::new(
            JulianDay::new(raw.min_julian_day),
            JulianDay::new(raw.max_julian_day),
        ))
    }
}
