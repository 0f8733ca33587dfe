// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Geocentric Moon from the ELP-2000/82 series as abridged in
//! *Meeus, Astronomical Algorithms* ch. 47.
//!
//! Longitude and latitude are referred to the mean equinox of date.

use crate::position::normalize_degrees;

/// Kilometres per astronomical unit.
pub(crate) const KM_PER_AU: f64 = 149_597_870.7;

// Multiples of D, M, M′, F followed by the Σl and Σr coefficients
// (10⁻⁶ degree, 10⁻³ km).
#[rustfmt::skip]
const LONGITUDE_DISTANCE: [(i8, i8, i8, i8, f64, f64); 60] = [
    (0,  0,  1,  0, 6_288_774.0, -20_905_355.0),
    (2,  0, -1,  0, 1_274_027.0,  -3_699_111.0),
    (2,  0,  0,  0,   658_314.0,  -2_955_968.0),
    (0,  0,  2,  0,   213_618.0,    -569_925.0),
    (0,  1,  0,  0,  -185_116.0,      48_888.0),
    (0,  0,  0,  2,  -114_332.0,      -3_149.0),
    (2,  0, -2,  0,    58_793.0,     246_158.0),
    (2, -1, -1,  0,    57_066.0,    -152_138.0),
    (2,  0,  1,  0,    53_322.0,    -170_733.0),
    (2, -1,  0,  0,    45_758.0,    -204_586.0),
    (0,  1, -1,  0,   -40_923.0,    -129_620.0),
    (1,  0,  0,  0,   -34_720.0,     108_743.0),
    (0,  1,  1,  0,   -30_383.0,     104_755.0),
    (2,  0,  0, -2,    15_327.0,      10_321.0),
    (0,  0,  1,  2,   -12_528.0,           0.0),
    (0,  0,  1, -2,    10_980.0,      79_661.0),
    (4,  0, -1,  0,    10_675.0,     -34_782.0),
    (0,  0,  3,  0,    10_034.0,     -23_210.0),
    (4,  0, -2,  0,     8_548.0,     -21_636.0),
    (2,  1, -1,  0,    -7_888.0,      24_208.0),
    (2,  1,  0,  0,    -6_766.0,      30_824.0),
    (1,  0, -1,  0,    -5_163.0,      -8_379.0),
    (1,  1,  0,  0,     4_987.0,     -16_675.0),
    (2, -1,  1,  0,     4_036.0,     -12_831.0),
    (2,  0,  2,  0,     3_994.0,     -10_445.0),
    (4,  0,  0,  0,     3_861.0,     -11_650.0),
    (2,  0, -3,  0,     3_665.0,      14_403.0),
    (0,  1, -2,  0,    -2_689.0,      -7_003.0),
    (2,  0, -1,  2,    -2_602.0,           0.0),
    (2, -1, -2,  0,     2_390.0,      10_056.0),
    (1,  0,  1,  0,    -2_348.0,       6_322.0),
    (2, -2,  0,  0,     2_236.0,      -9_884.0),
    (0,  1,  2,  0,    -2_120.0,       5_751.0),
    (0,  2,  0,  0,    -2_069.0,           0.0),
    (2, -2, -1,  0,     2_048.0,      -4_950.0),
    (2,  0,  1, -2,    -1_773.0,       4_130.0),
    (2,  0,  0,  2,    -1_595.0,           0.0),
    (4, -1, -1,  0,     1_215.0,      -3_958.0),
    (0,  0,  2,  2,    -1_110.0,           0.0),
    (3,  0, -1,  0,      -892.0,       3_258.0),
    (2,  1,  1,  0,      -810.0,       2_616.0),
    (4, -1, -2,  0,       759.0,      -1_897.0),
    (0,  2, -1,  0,      -713.0,      -2_117.0),
    (2,  2, -1,  0,      -700.0,       2_354.0),
    (2,  1, -2,  0,       691.0,           0.0),
    (2, -1,  0, -2,       596.0,           0.0),
    (4,  0,  1,  0,       549.0,      -1_423.0),
    (0,  0,  4,  0,       537.0,      -1_117.0),
    (4, -1,  0,  0,       520.0,      -1_571.0),
    (1,  0, -2,  0,      -487.0,      -1_739.0),
    (2,  1,  0, -2,      -399.0,           0.0),
    (0,  0,  2, -2,      -381.0,      -4_421.0),
    (1,  1,  1,  0,       351.0,           0.0),
    (3,  0, -2,  0,      -340.0,           0.0),
    (4,  0, -3,  0,       330.0,           0.0),
    (2, -1,  2,  0,       327.0,           0.0),
    (0,  2,  1,  0,      -323.0,       1_165.0),
    (1,  1, -1,  0,       299.0,           0.0),
    (2,  0,  3,  0,       294.0,           0.0),
    (2,  0, -1, -2,         0.0,       8_752.0),
];

// Multiples of D, M, M′, F followed by the Σb coefficient (10⁻⁶ degree).
// Truncated after the 30 largest terms.
#[rustfmt::skip]
const LATITUDE: [(i8, i8, i8, i8, f64); 30] = [
    (0,  0,  0,  1, 5_128_122.0),
    (0,  0,  1,  1,   280_602.0),
    (0,  0,  1, -1,   277_693.0),
    (2,  0,  0, -1,   173_237.0),
    (2,  0, -1,  1,    55_413.0),
    (2,  0, -1, -1,    46_271.0),
    (2,  0,  0,  1,    32_573.0),
    (0,  0,  2,  1,    17_198.0),
    (2,  0,  1, -1,     9_266.0),
    (0,  0,  2, -1,     8_822.0),
    (2, -1,  0, -1,     8_216.0),
    (2,  0, -2, -1,     4_324.0),
    (2,  0,  1,  1,     4_200.0),
    (2,  1,  0, -1,    -3_359.0),
    (2, -1, -1,  1,     2_463.0),
    (2, -1,  0,  1,     2_211.0),
    (2, -1, -1, -1,     2_065.0),
    (0,  1, -1, -1,    -1_870.0),
    (4,  0, -1, -1,     1_828.0),
    (0,  1,  0,  1,    -1_794.0),
    (0,  0,  0,  3,    -1_749.0),
    (0,  1, -1,  1,    -1_565.0),
    (1,  0,  0,  1,    -1_491.0),
    (0,  1,  1,  1,    -1_475.0),
    (0,  1,  1, -1,    -1_410.0),
    (0,  1,  0, -1,    -1_344.0),
    (1,  0,  0, -1,    -1_335.0),
    (0,  0,  3,  1,     1_107.0),
    (4,  0,  0, -1,     1_021.0),
    (4,  0, -1,  1,       833.0),
];

/// Mean arguments in degrees: L′, D, M, M′, F.
fn arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    [
        218.3164477 + 481_267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0 - t4 / 65_194_000.0,
        297.8501921 + 445_267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0 - t4 / 113_065_000.0,
        357.5291092 + 35_999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0,
        134.9633964 + 477_198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0 - t4 / 14_712_000.0,
        93.2720950 + 483_202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0 + t4 / 863_310_000.0,
    ]
}

/// Geocentric ecliptic longitude°, latitude° and distance in AU.
pub(crate) fn geocentric(t: f64) -> (f64, f64, f64) {
    let [lp, d, m, mp, f] = arguments(t);
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;
    let eccentricity_factor = |m_mult: i8| match m_mult.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };
    let angle = |cd: i8, cm: i8, cmp: i8, cf: i8| {
        (f64::from(cd) * d + f64::from(cm) * m + f64::from(cmp) * mp + f64::from(cf) * f)
            .to_radians()
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(cd, cm, cmp, cf, cl, cr) in &LONGITUDE_DISTANCE {
        let arg = angle(cd, cm, cmp, cf);
        let k = eccentricity_factor(cm);
        sum_l += cl * k * arg.sin();
        sum_r += cr * k * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(cd, cm, cmp, cf, cb) in &LATITUDE {
        sum_b += cb * eccentricity_factor(cm) * angle(cd, cm, cmp, cf).sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();
    let (lp_r, mp_r, f_r) = (lp.to_radians(), mp.to_radians(), f.to_radians());

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    let longitude = normalize_degrees(lp + sum_l / 1e6);
    let latitude = sum_b / 1e6;
    let distance_km = 385_000.56 + sum_r / 1000.0;
    (longitude, latitude, distance_km / KM_PER_AU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12 0h TD: λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let (lon, lat, dist) = geocentric(t);
        assert!((lon - 133.162_655).abs() < 0.01, "λ = {lon}");
        assert!((lat + 3.229_126).abs() < 0.02, "β = {lat}");
        assert!((dist * KM_PER_AU - 368_409.7).abs() < 50.0, "Δ = {}", dist * KM_PER_AU);
    }

    #[test]
    fn stays_within_physical_bounds() {
        for i in 0..200 {
            let t = -2.0 + f64::from(i) * 0.0213;
            let (lon, lat, dist) = geocentric(t);
            assert!((0.0..360.0).contains(&lon));
            assert!(lat.abs() < 5.35, "β = {lat}");
            let km = dist * KM_PER_AU;
            assert!((356_000.0..407_000.0).contains(&km), "Δ = {km}");
        }
    }
}
