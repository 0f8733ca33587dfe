// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT = TT − UT
//!
//! Piecewise model from *Meeus, Astronomical Algorithms* (2nd ed.), ch. 9:
//!
//! | Interval | Model |
//! |----------|-------|
//! | before 948 CE | Stephenson & Houlden quadratic about 948 |
//! | 948 – 1600 | Stephenson & Houlden quadratic about 1850 |
//! | 1600 – 1992 | biennial table, second-difference interpolation (extrapolated before 1620) |
//! | 1992 – 2010 | interpolation through 1990 / 2000 / 2010 estimates |
//! | after 2010 | Meeus eq. 9.1 extrapolation |
//!
//! The [`UT`](crate::UT) scale applies this correction whenever a civil
//! Julian Day is moved onto the dynamical axis, so the calculation engine
//! never needs to call it directly.

use super::instant::Time;
use super::scales::UT;
use qtty::{Days, Seconds, Simplify};

type JulianDayUt = Time<UT>;

/// Number of biennial entries (1620–1992).
const TERMS: usize = 187;

/// Biennial ΔT table from 1620 to 1992 (seconds), compiled by J. Meeus.
#[rustfmt::skip]
const DELTA_T: [Seconds; TERMS] = qtty::qtty_vec!(
    Seconds;
    124.0,115.0,106.0, 98.0, 91.0, 85.0, 79.0, 74.0, 70.0, 65.0,
     62.0, 58.0, 55.0, 53.0, 50.0, 48.0, 46.0, 44.0, 42.0, 40.0,
     37.0, 35.0, 33.0, 31.0, 28.0, 26.0, 24.0, 22.0, 20.0, 18.0,
     16.0, 14.0, 13.0, 12.0, 11.0, 10.0,  9.0,  9.0,  9.0,  9.0,
      9.0,  9.0,  9.0,  9.0, 10.0, 10.0, 10.0, 10.0, 10.0, 11.0,
     11.0, 11.0, 11.0, 11.0, 11.0, 11.0, 12.0, 12.0, 12.0, 12.0,
     12.0, 12.0, 13.0, 13.0, 13.0, 13.0, 14.0, 14.0, 14.0, 15.0,
     15.0, 15.0, 15.0, 16.0, 16.0, 16.0, 16.0, 16.0, 17.0, 17.0,
     17.0, 17.0, 17.0, 17.0, 17.0, 17.0, 16.0, 16.0, 15.0, 14.0,
     13.7, 13.1, 12.7, 12.5, 12.5, 12.5, 12.5, 12.5, 12.5, 12.3,
     12.0, 11.4, 10.6,  9.6,  8.6,  7.5,  6.6,  6.0,  5.7,  5.6,
      5.7,  5.9,  6.2,  6.5,  6.8,  7.1,  7.3,  7.5,  7.7,  7.8,
      7.9,  7.5,  6.4,  5.4,  2.9,  1.6, -1.0, -2.7, -3.6, -4.7,
     -5.4, -5.2, -5.5, -5.6, -5.8, -5.9, -6.2, -6.4, -6.1, -4.7,
     -2.7,  0.0,  2.6,  5.4,  7.7, 10.5, 13.4, 16.0, 18.2, 20.2,
     21.2, 22.4, 23.5, 23.9, 24.3, 24.0, 23.9, 23.9, 23.7, 24.0,
     24.3, 25.3, 26.2, 27.3, 28.2, 29.1, 30.0, 30.7, 31.4, 32.2,
     33.1, 34.0, 35.0, 36.5, 38.3, 40.2, 42.2, 44.5, 46.5, 48.5,
     50.5, 52.2, 53.8, 54.9, 55.8, 56.9, 58.3,
);

// ── Interval boundaries (JD on the UT axis) ──────────────────────────────

const JD_948: JulianDayUt = JulianDayUt::new(2_067_314.5);
const JD_1600: JulianDayUt = JulianDayUt::new(2_305_447.5);
const JD_1620: JulianDayUt = JulianDayUt::new(2_312_752.5);
const JD_1850: JulianDayUt = JulianDayUt::new(2_396_758.5);
const JD_1992: JulianDayUt = JulianDayUt::new(2_448_622.5);
const JD_2000: JulianDayUt = JulianDayUt::new(2_451_544.5);
const JD_2010: JulianDayUt = JulianDayUt::new(2_455_197.5);

#[inline]
fn days_ratio(num: Days, den: Days) -> f64 {
    (num / den).simplify().value()
}

#[inline]
fn centuries_since(jd: JulianDayUt, epoch: JulianDayUt) -> f64 {
    days_ratio(jd - epoch, JulianDayUt::JULIAN_CENTURY)
}

/// Quadratic about 948 CE (Stephenson & Houlden 1986).
#[inline]
fn ancient(jd: JulianDayUt) -> Seconds {
    let c = centuries_since(jd, JD_948);
    Seconds::new(1_830.0) + Seconds::new(-405.0) * c + Seconds::new(46.5) * c * c
}

/// Quadratic about 1850 CE, used for 948–1600.
#[inline]
fn medieval(jd: JulianDayUt) -> Seconds {
    let c = centuries_since(jd, JD_1850);
    Seconds::new(22.5) * c * c
}

/// Second-difference interpolation inside the biennial table, extrapolated
/// backwards from the first entries between 1600 and 1620.
#[inline]
fn tabulated(jd: JulianDayUt) -> Seconds {
    const STEP: Days = Days::new(730.5);

    let i = (days_ratio(jd - JD_1620, STEP) as usize).min(TERMS - 3);
    let a = DELTA_T[i + 1] - DELTA_T[i];
    let b = DELTA_T[i + 2] - DELTA_T[i + 1];
    let c = a - b;
    let n = days_ratio(jd - (JD_1620 + STEP * i as f64), STEP);
    DELTA_T[i + 1] + n / 2.0 * (a + b + n * c)
}

/// Interpolation through the 1990, 2000 and 2010 estimates.
#[inline]
fn recent(jd: JulianDayUt) -> Seconds {
    const DECADE: Days = Days::new(3_652.5);
    const ESTIMATES: [Seconds; 3] = [
        Seconds::new(56.86),
        Seconds::new(63.83),
        Seconds::new(70.0),
    ];

    let a = ESTIMATES[1] - ESTIMATES[0];
    let b = ESTIMATES[2] - ESTIMATES[1];
    let c = b - a;
    let n = days_ratio(jd - JD_2000, DECADE);
    ESTIMATES[1] + n / 2.0 * (a + b + n * c)
}

/// Meeus eq. 9.1 parabola, counted in days from 1810.
#[inline]
fn extrapolated(jd: JulianDayUt) -> Seconds {
    const JD_1810: JulianDayUt = JulianDayUt::new(2_382_148.0);
    let t = days_ratio(jd - JD_1810, Days::new(1.0));
    Seconds::new(-15.0) + Seconds::new(t * t / 41_048_480.0)
}

/// **ΔT** in seconds for a Julian Day on the UT axis.
pub(crate) fn delta_t_seconds_from_ut(jd_ut: JulianDayUt) -> Seconds {
    match jd_ut {
        jd if jd < JD_948 => ancient(jd),
        jd if jd < JD_1600 => medieval(jd),
        jd if jd < JD_1992 => tabulated(jd),
        jd if jd <= JD_2010 => recent(jd),
        jd => extrapolated(jd),
    }
}

impl Time<UT> {
    /// ΔT = TT − UT at this epoch.
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds_from_ut(*self)
    }
}
