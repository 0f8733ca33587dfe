// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The raw calculation capability behind an [`EngineAdapter`](crate::EngineAdapter).
//!
//! The trait mirrors the shape of native ephemeris libraries: integer body
//! codes, a flag word selecting centre, frame and speed, and a six-slot
//! result array
//!
//! ```text
//! [lon|ra, lat|dec, dist, d(lon|ra)/dt, d(lat|dec)/dt, d(dist)/dt]
//! ```
//!
//! with a negative status on failure. Configuration calls take `&mut self`,
//! so they can only happen before the engine is shared with the adapter.

mod analytic;
mod ayanamsa;
mod frames;
mod kepler;
mod moon;
mod nodes;

pub use analytic::AnalyticEngine;
pub use ayanamsa::ayanamsa_deg;

use std::fmt;
use std::path::Path;

use bitflags::bitflags;

use crate::config::Ayanamsa;

/// Engine body codes.
pub mod codes {
    pub const SUN: i32 = 0;
    pub const MOON: i32 = 1;
    pub const MERCURY: i32 = 2;
    pub const VENUS: i32 = 3;
    pub const MARS: i32 = 4;
    pub const JUPITER: i32 = 5;
    pub const SATURN: i32 = 6;
    pub const URANUS: i32 = 7;
    pub const NEPTUNE: i32 = 8;
    pub const MEAN_NODE: i32 = 10;
    pub const TRUE_NODE: i32 = 11;
}

bitflags! {
    /// Calculation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CalcFlags: u32 {
        /// Fill the three speed slots.
        const SPEED = 1 << 0;
        /// Centre on the Sun instead of the Earth.
        const HELIOCENTRIC = 1 << 1;
        /// Subtract the configured ayanamsa from ecliptic longitude.
        const SIDEREAL = 1 << 2;
        /// Return right ascension and declination instead of ecliptic coordinates.
        const EQUATORIAL = 1 << 3;
    }
}

/// Negative status code returned by a failing engine call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EngineStatus(pub i32);

impl EngineStatus {
    pub const UNKNOWN_BODY: Self = Self(-1);
    pub const CLOSED: Self = Self(-2);
    pub const INVALID_TIME: Self = Self(-3);
    /// The requested centre makes no sense for the body (heliocentric Sun, nodes).
    pub const UNSUPPORTED_CENTER: Self = Self(-4);

    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Display for EngineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match *self {
            Self::UNKNOWN_BODY => "unknown body code",
            Self::CLOSED => "engine closed",
            Self::INVALID_TIME => "invalid time",
            Self::UNSUPPORTED_CENTER => "unsupported centre",
            _ => "engine failure",
        };
        write!(f, "{what} ({})", self.0)
    }
}

/// A native-style positional calculator.
pub trait CalculationEngine: Send + Sync {
    /// Short engine identifier for introspection.
    fn name(&self) -> &str;

    /// Points the engine at a data directory, or back to built-in data.
    fn set_ephemeris_path(&mut self, path: Option<&Path>);

    /// Selects the ayanamsa used by [`CalcFlags::SIDEREAL`] queries.
    fn set_sidereal_mode(&mut self, ayanamsa: Ayanamsa);

    /// Computes one body at a Julian Day (UT).
    fn calc_ut(&self, jd_ut: f64, code: i32, flags: CalcFlags) -> Result<[f64; 6], EngineStatus>;

    /// Julian Day (UT) window over which results are validated.
    fn validated_range(&self) -> (f64, f64);

    /// Releases engine resources. Later calls to `calc_ut` fail.
    fn close(&self);
}
