// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Immutable body coordinates.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Wraps an angle into `[0, 360)` degrees.
#[inline]
pub fn normalize_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Right ascension and declination, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equatorial {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Position of a body at one instant.
///
/// Ecliptic longitude and latitude are in degrees, distance in
/// astronomical units, longitude speed in degrees per day. Equatorial
/// coordinates are stored together, so they are either both present or
/// both absent.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    longitude: f64,
    latitude: f64,
    distance: f64,
    #[cfg_attr(feature = "serde", serde(flatten))]
    equatorial: Option<Equatorial>,
    longitude_speed: Option<f64>,
}

impl Position {
    /// Ecliptic position; `longitude` is wrapped into `[0, 360)`.
    pub fn new(longitude: f64, latitude: f64, distance: f64) -> Self {
        Self {
            longitude: normalize_degrees(longitude),
            latitude,
            distance,
            equatorial: None,
            longitude_speed: None,
        }
    }

    /// Attaches equatorial coordinates; right ascension is wrapped into `[0, 360)`.
    pub fn with_equatorial(mut self, right_ascension: f64, declination: f64) -> Self {
        self.equatorial = Some(Equatorial {
            right_ascension: normalize_degrees(right_ascension),
            declination,
        });
        self
    }

    pub fn with_longitude_speed(mut self, speed: f64) -> Self {
        self.longitude_speed = Some(speed);
        self
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn equatorial(&self) -> Option<Equatorial> {
        self.equatorial
    }

    pub fn right_ascension(&self) -> Option<f64> {
        self.equatorial.map(|eq| eq.right_ascension)
    }

    pub fn declination(&self) -> Option<f64> {
        self.equatorial.map(|eq| eq.declination)
    }

    pub fn longitude_speed(&self) -> Option<f64> {
        self.longitude_speed
    }

    /// The diametrically opposite point, moving with the same speed.
    ///
    /// Longitude and right ascension are shifted by 180°, latitude and
    /// declination change sign, distance is kept. Used to derive the
    /// descending node from the ascending one.
    pub fn antipode(&self) -> Self {
        Self {
            longitude: normalize_degrees(self.longitude + 180.0),
            latitude: -self.latitude,
            distance: self.distance,
            equatorial: self.equatorial.map(|eq| Equatorial {
                right_ascension: normalize_degrees(eq.right_ascension + 180.0),
                declination: -eq.declination,
            }),
            longitude_speed: self.longitude_speed,
        }
    }

    /// `true` when a longitude speed is known and negative.
    pub fn is_retrograde_motion(&self) -> bool {
        self.longitude_speed.is_some_and(|speed| speed < 0.0)
    }
}
