// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! | Marker | Description | Relation to JD(TT) |
//! |--------|-------------|--------------------|
//! | [`UT`] | Universal Time, the civil axis | `TT = UT + ΔT` |
//! | [`TT`] | Terrestrial Time, the dynamical axis | identity |
//!
//! Civil timestamps are always converted onto the `UT` axis; the
//! calculation engine moves them onto `TT` before evaluating any series.

use super::delta_t::delta_t_seconds_from_ut;
use super::instant::{Time, TimeScale};
use qtty::{Day, Days};

// ---------------------------------------------------------------------------
// Terrestrial Time
// ---------------------------------------------------------------------------

/// Terrestrial Time — the uniform scale ephemeris series are expressed in.
///
/// A `Time<TT>` value *is* a JD(TT); the conversions are the identity.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct TT;

impl TimeScale for TT {
    const LABEL: &'static str = "JDE(TT)";

    #[inline(always)]
    fn to_jd_tt(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd_tt(jd_tt: Days) -> Days {
        jd_tt
    }
}

// ---------------------------------------------------------------------------
// Universal Time
// ---------------------------------------------------------------------------

/// Universal Time — the scale civil (UTC) timestamps live on.
///
/// The conversion to JD(TT) adds the epoch-dependent **ΔT**; the inverse
/// solves `ut + ΔT(ut) = tt` with a three-step fixed-point iteration, which
/// converges immediately because dΔT/dJD is of order 10⁻⁸.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct UT;

impl TimeScale for UT {
    const LABEL: &'static str = "JD(UT)";

    #[inline]
    fn to_jd_tt(ut_value: Days) -> Days {
        let dt = delta_t_seconds_from_ut(Time::<UT>::from_days(ut_value));
        ut_value + dt.to::<Day>()
    }

    #[inline]
    fn from_jd_tt(jd_tt: Days) -> Days {
        let mut ut = jd_tt;
        for _ in 0..3 {
            let dt = delta_t_seconds_from_ut(Time::<UT>::from_days(ut));
            ut = jd_tt - dt.to::<Day>();
        }
        ut
    }
}

impl From<Time<UT>> for Time<TT> {
    #[inline]
    fn from(t: Time<UT>) -> Self {
        t.to::<TT>()
    }
}

impl From<Time<TT>> for Time<UT> {
    #[inline]
    fn from(t: Time<TT>) -> Self {
        t.to::<UT>()
    }
}
