// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Angle helpers, precession and the ecliptic → equatorial rotation.
//!
//! `t` is always Julian centuries of TT since J2000.0.

use crate::position::normalize_degrees;

const ARCSEC_PER_DEG: f64 = 3600.0;

/// Wraps an angle difference into `(-180, 180]` degrees.
#[inline]
pub(crate) fn wrap_signed_degrees(deg: f64) -> f64 {
    let r = normalize_degrees(deg);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

/// IAU 2006 general precession in longitude p_A, in degrees.
pub(crate) fn general_precession_deg(t: f64) -> f64 {
    let arcsec = t
        * (5028.796195 + t * (1.1054348 + t * (0.00007964 + t * (-0.000023857 + t * -0.0000000383))));
    arcsec / ARCSEC_PER_DEG
}

/// IAU 2006 mean obliquity of the ecliptic, in degrees.
pub(crate) fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406
        + t * (-46.836769 + t * (-0.0001831 + t * (0.00200340 + t * (-0.000000576 + t * -0.0000000434))));
    arcsec / ARCSEC_PER_DEG
}

/// Rectangular → (longitude°, latitude°, radius).
pub(crate) fn to_spherical([x, y, z]: [f64; 3]) -> (f64, f64, f64) {
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return (0.0, 0.0, 0.0);
    }
    let lon = normalize_degrees(y.atan2(x).to_degrees());
    let lat = (z / r).clamp(-1.0, 1.0).asin().to_degrees();
    (lon, lat, r)
}

/// (longitude°, latitude°, radius) → rectangular.
pub(crate) fn to_rectangular(lon: f64, lat: f64, r: f64) -> [f64; 3] {
    let (sl, cl) = lon.to_radians().sin_cos();
    let (sb, cb) = lat.to_radians().sin_cos();
    [r * cb * cl, r * cb * sl, r * sb]
}

/// Ecliptic (λ, β) → equatorial (α, δ) for obliquity ε, all in degrees.
pub(crate) fn ecliptic_to_equatorial(lon: f64, lat: f64, eps: f64) -> (f64, f64) {
    let (sl, cl) = lon.to_radians().sin_cos();
    let (sb, cb) = lat.to_radians().sin_cos();
    let (se, ce) = eps.to_radians().sin_cos();
    let ra = (sl * cb * ce - sb * se).atan2(cl * cb);
    let dec = (sb * ce + cb * se * sl).clamp(-1.0, 1.0).asin();
    (normalize_degrees(ra.to_degrees()), dec.to_degrees())
}
