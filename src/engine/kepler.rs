// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Heliocentric planet positions from mean Keplerian elements.
//!
//! Elements and secular rates are the 3000 BC – 3000 AD fit of
//! E. M. Standish, *Keplerian Elements for Approximate Positions of the
//! Major Planets* (JPL), Tables 2a and 2b. Output is rectangular, in AU,
//! referred to the mean ecliptic and equinox of J2000.

use super::frames::wrap_signed_degrees;

/// Mean elements at J2000 and their rates per Julian century.
///
/// Angles in degrees, `a` in AU. `lon_peri` is ϖ, `node` is Ω.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    incl: [f64; 2],
    mean_lon: [f64; 2],
    lon_peri: [f64; 2],
    node: [f64; 2],
    /// Outer-planet correction `b, c, s, f` to the mean anomaly.
    extra: Option<[f64; 4]>,
}

#[rustfmt::skip]
pub(crate) const MERCURY: Elements = Elements {
    a: [0.38709843, 0.0], e: [0.20563661, 0.00002123],
    incl: [7.00559432, -0.00590158], mean_lon: [252.25166724, 149472.67486623],
    lon_peri: [77.45771895, 0.15940013], node: [48.33961819, -0.12214182],
    extra: None,
};

#[rustfmt::skip]
pub(crate) const VENUS: Elements = Elements {
    a: [0.72332102, -0.00000026], e: [0.00676399, -0.00005107],
    incl: [3.39777545, 0.00043494], mean_lon: [181.97970850, 58517.81560260],
    lon_peri: [131.76755713, 0.05679648], node: [76.67261496, -0.27274174],
    extra: None,
};

/// Earth–Moon barycentre.
#[rustfmt::skip]
pub(crate) const EARTH_MOON: Elements = Elements {
    a: [1.00000018, -0.00000003], e: [0.01673163, -0.00003661],
    incl: [-0.00054346, -0.01337178], mean_lon: [100.46691572, 35999.37306329],
    lon_peri: [102.93005885, 0.31795260], node: [-5.11260389, -0.24123856],
    extra: None,
};

#[rustfmt::skip]
pub(crate) const MARS: Elements = Elements {
    a: [1.52371243, 0.00000097], e: [0.09336511, 0.00009149],
    incl: [1.85181869, -0.00724757], mean_lon: [-4.56813164, 19140.29934243],
    lon_peri: [-23.91744784, 0.45223625], node: [49.71320984, -0.26852431],
    extra: None,
};

#[rustfmt::skip]
pub(crate) const JUPITER: Elements = Elements {
    a: [5.20248019, -0.00002864], e: [0.04853590, 0.00018026],
    incl: [1.29861416, -0.00322699], mean_lon: [34.33479152, 3034.90371757],
    lon_peri: [14.27495244, 0.18199196], node: [100.29282654, 0.13024619],
    extra: Some([-0.00012452, 0.06064060, -0.35635438, 38.35125]),
};

#[rustfmt::skip]
pub(crate) const SATURN: Elements = Elements {
    a: [9.54149883, -0.00003065], e: [0.05550825, -0.00032044],
    incl: [2.49424102, 0.00451969], mean_lon: [50.07571329, 1222.11494724],
    lon_peri: [92.86136063, 0.54179478], node: [113.63998702, -0.25015002],
    extra: Some([0.00025899, -0.13434469, 0.87320147, 38.35125]),
};

#[rustfmt::skip]
pub(crate) const URANUS: Elements = Elements {
    a: [19.18797948, -0.00020455], e: [0.04685740, -0.00001550],
    incl: [0.77298127, -0.00180155], mean_lon: [314.20276625, 428.49512595],
    lon_peri: [172.43404441, 0.09266985], node: [73.96250215, 0.05739699],
    extra: Some([0.00058331, -0.97731848, 0.17689245, 7.67025]),
};

#[rustfmt::skip]
pub(crate) const NEPTUNE: Elements = Elements {
    a: [30.06952752, 0.00006447], e: [0.00895439, 0.00000818],
    incl: [1.77005520, 0.00022400], mean_lon: [304.22289287, 218.46515314],
    lon_peri: [46.68158724, 0.01009938], node: [131.78635853, -0.00606302],
    extra: Some([-0.00041348, 0.68346318, -0.10162547, 7.67025]),
};

#[inline]
fn at(pair: [f64; 2], t: f64) -> f64 {
    pair[0] + pair[1] * t
}

/// Solves `M = E − e sin E` for `E` (radians) by Newton iteration.
pub(crate) fn eccentric_anomaly(mean_anomaly: f64, e: f64) -> f64 {
    const TOLERANCE: f64 = 1e-12;
    const MAX_ITER: usize = 30;

    let mut ecc = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..MAX_ITER {
        let delta = (mean_anomaly - (ecc - e * ecc.sin())) / (1.0 - e * ecc.cos());
        ecc += delta;
        if delta.abs() < TOLERANCE {
            break;
        }
    }
    ecc
}

impl Elements {
    /// Heliocentric J2000 ecliptic position in AU, `t` in centuries of TT.
    pub(crate) fn heliocentric(&self, t: f64) -> [f64; 3] {
        let a = at(self.a, t);
        let e = at(self.e, t);
        let incl = at(self.incl, t).to_radians();
        let mean_lon = at(self.mean_lon, t);
        let lon_peri = at(self.lon_peri, t);
        let node = at(self.node, t);

        let mut m = mean_lon - lon_peri;
        if let Some([b, c, s, f]) = self.extra {
            let ft = (f * t).to_radians();
            m += b * t * t + c * ft.cos() + s * ft.sin();
        }
        let m = wrap_signed_degrees(m).to_radians();

        let ecc = eccentric_anomaly(m, e);
        let xp = a * (ecc.cos() - e);
        let yp = a * (1.0 - e * e).sqrt() * ecc.sin();

        let (sw, cw) = (lon_peri - node).to_radians().sin_cos();
        let (so, co) = node.to_radians().sin_cos();
        let (si, ci) = incl.sin_cos();

        [
            (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
            (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
            (sw * si) * xp + (cw * si) * yp,
        ]
    }
}
