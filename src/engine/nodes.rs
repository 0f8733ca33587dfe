// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ascending node of the lunar orbit.
//!
//! Mean node: Ω from the IERS 2010 fundamental arguments. True node: mean
//! plus 13 periodic terms in the Delaunay arguments.

use crate::position::normalize_degrees;

const ARCSEC_TO_RAD: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Delaunay arguments `[l, l′, F, D, Ω]` in radians.
fn fundamental_arguments(t: f64) -> [f64; 5] {
    let poly = |c: [f64; 5]| c[0] + t * (c[1] + t * (c[2] + t * (c[3] + t * c[4])));
    [
        poly([485_868.249036, 1_717_915_923.2178, 31.8792, 0.051635, -0.00024470]),
        poly([1_287_104.79305, 129_596_581.0481, -0.5532, 0.000136, -0.00001149]),
        poly([335_779.526232, 1_739_527_262.8478, -12.7512, -0.001037, 0.00000417]),
        poly([1_072_260.70369, 1_602_961_601.2090, -6.3706, 0.006593, -0.00003169]),
        poly([450_160.398036, -6_962_890.5431, 7.4722, 0.007702, -0.00005939]),
    ]
    .map(|arcsec| arcsec * ARCSEC_TO_RAD)
}

// Multiples of l, l′, F, D, Ω and the amplitude in degrees.
#[rustfmt::skip]
const PERTURBATIONS: [[f64; 6]; 13] = [
    [0.0, 0.0, 0.0,  0.0,  1.0, -1.4979],
    [0.0, 0.0, 2.0, -2.0,  0.0,  0.1500],
    [0.0, 0.0, 2.0,  0.0,  0.0, -0.1226],
    [0.0, 0.0, 0.0,  0.0,  2.0,  0.1176],
    [1.0, 0.0, 0.0,  0.0,  0.0, -0.0801],
    [0.0, 1.0, 0.0,  0.0,  0.0,  0.0056],
    [0.0, 0.0, 2.0,  0.0, -2.0, -0.0047],
    [1.0, 0.0, 2.0,  0.0,  0.0, -0.0043],
    [0.0, 0.0, 2.0, -2.0,  2.0,  0.0040],
    [0.0, 1.0, 0.0,  0.0, -1.0,  0.0037],
    [0.0, 0.0, 0.0,  2.0,  0.0, -0.0030],
    [2.0, 0.0, 0.0,  0.0,  0.0, -0.0020],
    [0.0, 1.0, 2.0, -2.0,  0.0,  0.0015],
];

/// Mean ascending node longitude in degrees, `t` in centuries of TT.
pub(crate) fn mean_node_deg(t: f64) -> f64 {
    normalize_degrees(fundamental_arguments(t)[4].to_degrees())
}

/// True ascending node longitude in degrees, `t` in centuries of TT.
pub(crate) fn true_node_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let correction: f64 = PERTURBATIONS
        .iter()
        .map(|term| {
            let angle: f64 = term[..5].iter().zip(&args).map(|(n, a)| n * a).sum();
            term[5] * angle.sin()
        })
        .sum();
    normalize_degrees(args[4].to_degrees() + correction)
}
