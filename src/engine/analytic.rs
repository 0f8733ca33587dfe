// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Built-in calculation engine.
//!
//! Pipeline for one `calc_ut` call:
//!
//! 1. JD(UT) → JD(TT) through ΔT.
//! 2. Tropical ecliptic position of date:
//!    * planets from Keplerian elements, light-time corrected when
//!      geocentric, then precessed from J2000 to the mean equinox of date;
//!    * the Sun as the reversed heliocentric Earth vector;
//!    * the Moon from the abridged lunar series;
//!    * the nodes from the mean/true node models.
//! 3. Either rotation to the equator of date (`EQUATORIAL`) or the
//!    ayanamsa subtracted from longitude (`SIDEREAL`).
//! 4. Speeds by a symmetric difference of the whole pipeline (`SPEED`).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use qtty::Days;

use super::ayanamsa::ayanamsa_deg;
use super::frames::{
    ecliptic_to_equatorial, general_precession_deg, mean_obliquity_deg, to_rectangular,
    to_spherical, wrap_signed_degrees,
};
use super::kepler::{self, Elements};
use super::nodes::{mean_node_deg, true_node_deg};
use super::{codes, moon, CalcFlags, CalculationEngine, EngineStatus};
use crate::config::Ayanamsa;
use crate::position::normalize_degrees;
use crate::{JulianDay, JulianEphemerisDay, TT};

/// Light travel time for one astronomical unit, in days.
const LIGHT_DAYS_PER_AU: f64 = 0.005_775_518_3;

/// Distance reported for the lunar nodes: the Moon's mean distance.
const NODE_DISTANCE_AU: f64 = 0.002_569_555;

/// Half-width of the speed difference.
const SPEED_STEP: Days = Days::new(1e-3);

/// Pure-Rust engine over analytic planetary, lunar and node theories.
#[derive(Debug, Default)]
pub struct AnalyticEngine {
    data_path: Option<PathBuf>,
    ayanamsa: Ayanamsa,
    closed: AtomicBool,
}

impl AnalyticEngine {
    /// Earliest validated Julian Day (UT).
    pub const MIN_JD: f64 = 625_673.5;
    /// Latest validated Julian Day (UT).
    pub const MAX_JD: f64 = 2_525_593.5;

    pub fn new() -> Self {
        Self::default()
    }

    /// Data directory in use, if one was accepted.
    pub fn data_path(&self) -> Option<&Path> {
        self.data_path.as_deref()
    }

    pub fn ayanamsa(&self) -> Ayanamsa {
        self.ayanamsa
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    fn elements(code: i32) -> Option<&'static Elements> {
        Some(match code {
            codes::MERCURY => &kepler::MERCURY,
            codes::VENUS => &kepler::VENUS,
            codes::MARS => &kepler::MARS,
            codes::JUPITER => &kepler::JUPITER,
            codes::SATURN => &kepler::SATURN,
            codes::URANUS => &kepler::URANUS,
            codes::NEPTUNE => &kepler::NEPTUNE,
            _ => return None,
        })
    }

    /// Tropical ecliptic (longitude°, latitude°, distance AU) of date.
    fn ecliptic_of_date(
        code: i32,
        jde: JulianEphemerisDay,
        heliocentric: bool,
    ) -> Result<(f64, f64, f64), EngineStatus> {
        let t = jde.julian_centuries();
        let precession = general_precession_deg(t);

        let j2000 = match code {
            codes::SUN if heliocentric => return Err(EngineStatus::UNSUPPORTED_CENTER),
            codes::SUN => {
                let [x, y, z] = kepler::EARTH_MOON.heliocentric(t);
                to_spherical([-x, -y, -z])
            }
            codes::MOON => {
                let (lon, lat, dist) = moon::geocentric(t);
                if !heliocentric {
                    return Ok((lon, lat, dist));
                }
                let geo = to_rectangular(lon - precession, lat, dist);
                let earth = kepler::EARTH_MOON.heliocentric(t);
                to_spherical([geo[0] + earth[0], geo[1] + earth[1], geo[2] + earth[2]])
            }
            codes::MEAN_NODE | codes::TRUE_NODE if heliocentric => {
                return Err(EngineStatus::UNSUPPORTED_CENTER)
            }
            codes::MEAN_NODE => return Ok((mean_node_deg(t), 0.0, NODE_DISTANCE_AU)),
            codes::TRUE_NODE => return Ok((true_node_deg(t), 0.0, NODE_DISTANCE_AU)),
            _ => {
                let elements = Self::elements(code).ok_or(EngineStatus::UNKNOWN_BODY)?;
                if heliocentric {
                    to_spherical(elements.heliocentric(t))
                } else {
                    to_spherical(Self::light_time_corrected(elements, jde))
                }
            }
        };

        let (lon, lat, dist) = j2000;
        Ok((normalize_degrees(lon + precession), lat, dist))
    }

    /// Geocentric J2000 vector of a planet seen at `jde`, with the planet
    /// taken at the retarded time.
    fn light_time_corrected(elements: &Elements, jde: JulianEphemerisDay) -> [f64; 3] {
        let earth = kepler::EARTH_MOON.heliocentric(jde.julian_centuries());
        let mut light_time = Days::new(0.0);
        let mut geo = [0.0; 3];
        for _ in 0..3 {
            let p = elements.heliocentric((jde - light_time).julian_centuries());
            geo = [p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]];
            let dist = (geo[0] * geo[0] + geo[1] * geo[1] + geo[2] * geo[2]).sqrt();
            light_time = Days::new(LIGHT_DAYS_PER_AU * dist);
        }
        geo
    }

    /// Three output coordinates for one instant, without speeds.
    fn evaluate(&self, jd: JulianDay, code: i32, flags: CalcFlags) -> Result<[f64; 3], EngineStatus> {
        let jde: JulianEphemerisDay = jd.to::<TT>();
        let t = jde.julian_centuries();
        let (lon, lat, dist) =
            Self::ecliptic_of_date(code, jde, flags.contains(CalcFlags::HELIOCENTRIC))?;

        if flags.contains(CalcFlags::EQUATORIAL) {
            let (ra, dec) = ecliptic_to_equatorial(lon, lat, mean_obliquity_deg(t));
            return Ok([ra, dec, dist]);
        }
        if flags.contains(CalcFlags::SIDEREAL) {
            let sidereal = normalize_degrees(lon - ayanamsa_deg(self.ayanamsa, t));
            return Ok([sidereal, lat, dist]);
        }
        Ok([lon, lat, dist])
    }
}

impl CalculationEngine for AnalyticEngine {
    fn name(&self) -> &str {
        "analytic"
    }

    fn set_ephemeris_path(&mut self, path: Option<&Path>) {
        self.data_path = match path {
            Some(p) if p.is_dir() => {
                tracing::info!(path = %p.display(), "ephemeris data path set");
                Some(p.to_path_buf())
            }
            Some(p) => {
                tracing::debug!(path = %p.display(), "ephemeris data path not found, using built-in series");
                None
            }
            None => {
                tracing::debug!("no ephemeris data path, using built-in series");
                None
            }
        };
    }

    fn set_sidereal_mode(&mut self, ayanamsa: Ayanamsa) {
        tracing::info!(%ayanamsa, "sidereal mode configured");
        self.ayanamsa = ayanamsa;
    }

    fn calc_ut(&self, jd_ut: f64, code: i32, flags: CalcFlags) -> Result<[f64; 6], EngineStatus> {
        if self.is_closed() {
            return Err(EngineStatus::CLOSED);
        }
        if !jd_ut.is_finite() {
            return Err(EngineStatus::INVALID_TIME);
        }

        let jd = JulianDay::new(jd_ut);
        let [a, b, c] = self.evaluate(jd, code, flags)?;
        let mut out = [a, b, c, 0.0, 0.0, 0.0];

        if flags.contains(CalcFlags::SPEED) {
            let before = self.evaluate(jd - SPEED_STEP, code, flags)?;
            let after = self.evaluate(jd + SPEED_STEP, code, flags)?;
            let span = 2.0 * SPEED_STEP.value();
            out[3] = wrap_signed_degrees(after[0] - before[0]) / span;
            out[4] = (after[1] - before[1]) / span;
            out[5] = (after[2] - before[2]) / span;
        }
        Ok(out)
    }

    fn validated_range(&self) -> (f64, f64) {
        (Self::MIN_JD, Self::MAX_JD)
    }

    fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(engine = self.name(), "calculation engine closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JAN_2024: f64 = 2_460_310.5;

    fn calc(code: i32, jd: f64, flags: CalcFlags) -> [f64; 6] {
        AnalyticEngine::new()
            .calc_ut(jd, code, flags | CalcFlags::SPEED)
            .unwrap()
    }

    #[test]
    fn sun_on_new_year_2024() {
        let r = calc(codes::SUN, JAN_2024, CalcFlags::empty());
        assert!((r[0] - 280.0).abs() < 1.0, "λ☉ = {}", r[0]);
        assert!(r[1].abs() < 0.01);
        assert!((r[2] - 0.983).abs() < 0.002, "r = {}", r[2]);
        assert!((r[3] - 1.019).abs() < 0.01, "dλ/dt = {}", r[3]);
    }

    #[test]
    fn sun_at_j2000() {
        // Geometric mean-equinox longitude 280.37° (Meeus ch. 25).
        let r = calc(codes::SUN, 2_451_545.0, CalcFlags::empty());
        assert!((r[0] - 280.37).abs() < 0.05, "λ☉ = {}", r[0]);
    }

    #[test]
    fn moon_moves_about_thirteen_degrees_a_day() {
        let r = calc(codes::MOON, JAN_2024, CalcFlags::empty());
        assert!((11.5..15.5).contains(&r[3]), "dλ/dt = {}", r[3]);
    }

    #[test]
    fn nodes_regress() {
        let mean = calc(codes::MEAN_NODE, JAN_2024, CalcFlags::empty());
        assert!((mean[3] + 0.053).abs() < 0.001, "mean node speed {}", mean[3]);
        assert_eq!(mean[1], 0.0);
        assert_eq!(mean[2], NODE_DISTANCE_AU);
        // Early 2024 the mean ascending node is near 20.9° Aries.
        assert!((mean[0] - 20.9).abs() < 0.2, "Ω = {}", mean[0]);
    }

    #[test]
    fn sidereal_subtracts_ayanamsa_from_longitude_only() {
        let mut engine = AnalyticEngine::new();
        engine.set_sidereal_mode(Ayanamsa::Lahiri);
        let trop = engine.calc_ut(JAN_2024, codes::MARS, CalcFlags::empty()).unwrap();
        let sid = engine
            .calc_ut(JAN_2024, codes::MARS, CalcFlags::SIDEREAL)
            .unwrap();
        let offset = wrap_signed_degrees(trop[0] - sid[0]);
        assert!((offset - 24.19).abs() < 0.02, "offset = {offset}");
        assert_eq!(trop[1], sid[1]);
        assert_eq!(trop[2], sid[2]);

        let eq = engine
            .calc_ut(JAN_2024, codes::MARS, CalcFlags::EQUATORIAL)
            .unwrap();
        let eq_sid = engine
            .calc_ut(JAN_2024, codes::MARS, CalcFlags::EQUATORIAL | CalcFlags::SIDEREAL)
            .unwrap();
        assert_eq!(eq, eq_sid);
    }

    #[test]
    fn heliocentric_centre_rules() {
        let engine = AnalyticEngine::new();
        let helio = CalcFlags::HELIOCENTRIC;
        assert_eq!(
            engine.calc_ut(JAN_2024, codes::SUN, helio),
            Err(EngineStatus::UNSUPPORTED_CENTER)
        );
        assert_eq!(
            engine.calc_ut(JAN_2024, codes::TRUE_NODE, helio),
            Err(EngineStatus::UNSUPPORTED_CENTER)
        );
        let moon = engine.calc_ut(JAN_2024, codes::MOON, helio).unwrap();
        assert!((moon[2] - 0.983).abs() < 0.01, "helio Moon r = {}", moon[2]);
        let mars = engine.calc_ut(JAN_2024, codes::MARS, helio).unwrap();
        assert!((1.38..=1.67).contains(&mars[2]));
    }

    #[test]
    fn rejects_bad_input_and_closed_state() {
        let engine = AnalyticEngine::new();
        assert_eq!(
            engine.calc_ut(JAN_2024, 9, CalcFlags::empty()),
            Err(EngineStatus::UNKNOWN_BODY)
        );
        assert_eq!(
            engine.calc_ut(f64::NAN, codes::SUN, CalcFlags::empty()),
            Err(EngineStatus::INVALID_TIME)
        );
        engine.close();
        engine.close();
        assert!(engine.is_closed());
        assert_eq!(
            engine.calc_ut(JAN_2024, codes::SUN, CalcFlags::empty()),
            Err(EngineStatus::CLOSED)
        );
    }

    #[test]
    fn missing_data_path_falls_back_silently() {
        let mut engine = AnalyticEngine::new();
        engine.set_ephemeris_path(Some(Path::new("/definitely/not/here")));
        assert_eq!(engine.data_path(), None);
        let dir = std::env::temp_dir();
        engine.set_ephemeris_path(Some(dir.as_path()));
        assert_eq!(engine.data_path(), Some(dir.as_path()));
        assert!(engine.calc_ut(JAN_2024, codes::SUN, CalcFlags::empty()).is_ok());
    }

    #[test]
    fn whole_validated_range_is_computable() {
        let engine = AnalyticEngine::new();
        let (min, max) = engine.validated_range();
        for code in [codes::SUN, codes::MOON, codes::MERCURY, codes::NEPTUNE, codes::TRUE_NODE] {
            for jd in [min, max] {
                let r = engine.calc_ut(jd, code, CalcFlags::SPEED).unwrap();
                assert!(r.iter().all(|v| v.is_finite()), "code {code} at {jd}: {r:?}");
                assert!((0.0..360.0).contains(&r[0]));
            }
        }
    }
}
