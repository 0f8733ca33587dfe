// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Ayanamsa at an arbitrary epoch.
//!
//! Each system is fixed by its value at J2000.0; the offset at any other
//! epoch adds the IAU 2006 general precession accumulated since then.

use super::frames::general_precession_deg;
use crate::config::Ayanamsa;

/// Ayanamsa in degrees at `t` Julian centuries of TT since J2000.0.
pub fn ayanamsa_deg(system: Ayanamsa, t: f64) -> f64 {
    system.reference_j2000_deg() + general_precession_deg(t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_value_at_j2000() {
        for a in Ayanamsa::ALL {
            assert_eq!(ayanamsa_deg(a, 0.0), a.reference_j2000_deg());
        }
    }

    #[test]
    fn lahiri_in_2024() {
        // 2024-01-01 is 0.24 centuries after J2000.
        let v = ayanamsa_deg(Ayanamsa::Lahiri, 0.24);
        assert!((v - 24.188).abs() < 0.01, "Lahiri 2024 = {v}");
    }

    #[test]
    fn grows_with_time() {
        let a = ayanamsa_deg(Ayanamsa::Raman, -1.0);
        let b = ayanamsa_deg(Ayanamsa::Raman, 1.0);
        assert!(b > a);
        assert!(((b - a) - 2.794).abs() < 0.01);
    }
}
