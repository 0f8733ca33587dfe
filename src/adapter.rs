// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! [`EphemerisProvider`] over a [`CalculationEngine`].
//!
//! The adapter owns its engine. All engine configuration (data path,
//! sidereal mode) happens inside the constructors, while the adapter still
//! holds the engine by value; afterwards only `&self` calls reach it, so
//! the configuration cannot change under in-flight queries.

use tracing::trace;

use crate::body::Body;
use crate::config::{EphemerisSettings, NodeVariant, ZodiacConfig};
use crate::engine::{codes, AnalyticEngine, CalcFlags, CalculationEngine};
use crate::error::{EphemerisError, EphemerisResult};
use crate::position::Position;
use crate::provider::{EphemerisProvider, ProviderInfo};
use crate::range::DateRange;
use crate::JulianDay;

/// Engine code of a directly queryable body.
///
/// The lunar nodes have no code of their own: they are derived from the
/// node model selected in the configuration.
pub const fn engine_code(body: Body) -> Option<i32> {
    match body {
        Body::Sun => Some(codes::SUN),
        Body::Moon => Some(codes::MOON),
        Body::Mercury => Some(codes::MERCURY),
        Body::Venus => Some(codes::VENUS),
        Body::Mars => Some(codes::MARS),
        Body::Jupiter => Some(codes::JUPITER),
        Body::Saturn => Some(codes::SATURN),
        Body::Uranus => Some(codes::URANUS),
        Body::Neptune => Some(codes::NEPTUNE),
        Body::Rahu | Body::Ketu => None,
    }
}

const fn node_code(variant: NodeVariant) -> i32 {
    match variant {
        NodeVariant::True => codes::TRUE_NODE,
        NodeVariant::Mean => codes::MEAN_NODE,
    }
}

/// The primary provider: a configured calculation engine.
#[derive(Debug)]
pub struct EngineAdapter<E: CalculationEngine = AnalyticEngine> {
    engine: E,
    zodiac: ZodiacConfig,
    range: DateRange,
}

impl EngineAdapter<AnalyticEngine> {
    /// Builds the built-in engine from process settings.
    pub fn new(settings: &EphemerisSettings) -> Self {
        Self::with_engine(AnalyticEngine::new(), settings)
    }
}

impl<E: CalculationEngine> EngineAdapter<E> {
    /// Configures `engine` once and takes ownership of it.
    pub fn with_engine(mut engine: E, settings: &EphemerisSettings) -> Self {
        engine.set_ephemeris_path(settings.data_path.as_deref());
        if settings.zodiac.is_sidereal() {
            engine.set_sidereal_mode(settings.zodiac.ayanamsa);
        }
        let (min, max) = engine.validated_range();
        tracing::info!(
            engine = engine.name(),
            zodiac = %settings.zodiac,
            min_jd = min,
            max_jd = max,
            "ephemeris provider configured"
        );
        Self {
            engine,
            zodiac: settings.zodiac,
            range: DateRange::new(JulianDay::new(min), JulianDay::new(max)),
        }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    fn base_flags(&self, geocentric: bool) -> CalcFlags {
        let mut flags = CalcFlags::SPEED;
        if self.zodiac.is_sidereal() {
            flags |= CalcFlags::SIDEREAL;
        }
        if !geocentric {
            flags |= CalcFlags::HELIOCENTRIC;
        }
        flags
    }

    /// Ecliptic query followed by the same query with `EQUATORIAL` added.
    fn query(&self, body: Body, code: i32, jd: JulianDay, geocentric: bool) -> EphemerisResult<Position> {
        let jd = self.range.check(jd)?;
        let flags = self.base_flags(geocentric);
        let calc_error = |status: crate::engine::EngineStatus| EphemerisError::Calculation {
            body: body.to_string(),
            jd: jd.value(),
            status: status.code(),
        };

        trace!(%body, code, jd = jd.value(), flags = flags.bits(), "engine query");
        let ecl = self.engine.calc_ut(jd.value(), code, flags).map_err(calc_error)?;
        let eq = self
            .engine
            .calc_ut(jd.value(), code, flags | CalcFlags::EQUATORIAL)
            .map_err(calc_error)?;

        Ok(Position::new(ecl[0], ecl[1], ecl[2])
            .with_equatorial(eq[0], eq[1])
            .with_longitude_speed(ecl[3]))
    }
}

impl<E: CalculationEngine> EphemerisProvider for EngineAdapter<E> {
    fn get_planet_position(
        &self,
        body: Body,
        jd: JulianDay,
        geocentric: bool,
    ) -> EphemerisResult<Position> {
        let code = engine_code(body).ok_or_else(|| EphemerisError::UnknownBody(body.to_string()))?;
        self.query(body, code, jd, geocentric)
    }

    fn get_lunar_nodes(&self, jd: JulianDay) -> EphemerisResult<(Position, Position)> {
        let rahu = self.query(Body::Rahu, node_code(self.zodiac.node), jd, true)?;
        Ok((rahu, rahu.antipode()))
    }

    fn is_retrograde(&self, body: Body, jd: JulianDay) -> EphemerisResult<bool> {
        if body.never_retrograde() {
            return Ok(false);
        }
        Ok(self.get_planet_position(body, jd, true)?.is_retrograde_motion())
    }

    fn get_supported_date_range(&self) -> DateRange {
        self.range
    }

    fn describe(&self) -> ProviderInfo {
        ProviderInfo {
            engine: self.engine.name().to_string(),
            zodiac: self.zodiac,
            date_range: self.range,
        }
    }

    fn close(&self) {
        self.engine.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Ayanamsa;
    use crate::engine::EngineStatus;
    use crate::error::ErrorKind;
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    /// Engine returning canned values and recording every call.
    #[derive(Default)]
    struct Scripted {
        calls: Mutex<Vec<(i32, CalcFlags)>>,
        path: Option<PathBuf>,
        sidereal: Option<Ayanamsa>,
        fail_equatorial: bool,
        speed: f64,
    }

    impl CalculationEngine for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn set_ephemeris_path(&mut self, path: Option<&Path>) {
            self.path = path.map(Path::to_path_buf);
        }

        fn set_sidereal_mode(&mut self, ayanamsa: Ayanamsa) {
            self.sidereal = Some(ayanamsa);
        }

        fn calc_ut(&self, _jd: f64, code: i32, flags: CalcFlags) -> Result<[f64; 6], EngineStatus> {
            self.calls.lock().unwrap().push((code, flags));
            if flags.contains(CalcFlags::EQUATORIAL) {
                if self.fail_equatorial {
                    return Err(EngineStatus(-7));
                }
                return Ok([0.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
            }
            Ok([359.5, 1.25, 1.0, self.speed, 0.0, 0.0])
        }

        fn validated_range(&self) -> (f64, f64) {
            (2_400_000.5, 2_500_000.5)
        }

        fn close(&self) {}
    }

    fn adapter(engine: Scripted, zodiac: ZodiacConfig) -> EngineAdapter<Scripted> {
        let settings = EphemerisSettings {
            data_path: Some(PathBuf::from("/data/ephe")),
            zodiac,
        };
        EngineAdapter::with_engine(engine, &settings)
    }

    const JD: JulianDay = JulianDay::new(2_460_310.5);

    #[test]
    fn configuration_happens_once_at_construction() {
        let tropical = adapter(Scripted::default(), ZodiacConfig::tropical());
        assert_eq!(tropical.engine().path, Some(PathBuf::from("/data/ephe")));
        assert_eq!(tropical.engine().sidereal, None);

        let sidereal = adapter(Scripted::default(), ZodiacConfig::sidereal(Ayanamsa::Raman));
        assert_eq!(sidereal.engine().sidereal, Some(Ayanamsa::Raman));
    }

    #[test]
    fn equatorial_query_reuses_base_flags() {
        let a = adapter(Scripted::default(), ZodiacConfig::sidereal(Ayanamsa::Lahiri));
        a.get_planet_position(Body::Mars, JD, false).unwrap();

        let calls = a.engine().calls.lock().unwrap().clone();
        let base = CalcFlags::SPEED | CalcFlags::SIDEREAL | CalcFlags::HELIOCENTRIC;
        assert_eq!(
            calls,
            [(codes::MARS, base), (codes::MARS, base | CalcFlags::EQUATORIAL)]
        );
    }

    #[test]
    fn nodes_use_configured_variant_and_antipode() {
        let zodiac = ZodiacConfig::tropical().with_node(NodeVariant::Mean);
        let a = adapter(Scripted::default(), zodiac);
        let (rahu, ketu) = a.get_lunar_nodes(JD).unwrap();

        assert_eq!(a.engine().calls.lock().unwrap()[0].0, codes::MEAN_NODE);
        assert_eq!(rahu.longitude(), 359.5);
        assert_eq!(ketu.longitude(), 179.5);
        assert_eq!(ketu.latitude(), -rahu.latitude());
        assert_eq!(ketu.right_ascension(), Some(180.0));
        assert_eq!(ketu.declination(), Some(-0.0));
    }

    #[test]
    fn nodes_are_not_directly_queryable() {
        let a = adapter(Scripted::default(), ZodiacConfig::tropical());
        for body in Body::NODES {
            let err = a.get_planet_position(body, JD, true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownBody);
        }
        assert!(a.engine().calls.lock().unwrap().is_empty());
    }

    #[test]
    fn engine_failure_carries_raw_status() {
        let engine = Scripted {
            fail_equatorial: true,
            ..Scripted::default()
        };
        let a = adapter(engine, ZodiacConfig::tropical());
        let err = a.get_planet_position(Body::Venus, JD, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Calculation);
        assert_eq!(err.engine_status(), Some(-7));
    }

    #[test]
    fn range_gate_is_inclusive() {
        let a = adapter(Scripted::default(), ZodiacConfig::tropical());
        let range = a.get_supported_date_range();
        let one = qtty::Days::new(1.0);
        assert!(a.get_planet_position(Body::Sun, range.start, true).is_ok());
        assert!(a.get_planet_position(Body::Sun, range.end, true).is_ok());
        for jd in [range.start - one, range.end + one] {
            let err = a.get_planet_position(Body::Sun, jd, true).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::OutOfRange);
            assert!(a.get_lunar_nodes(jd).is_err());
        }
    }

    #[test]
    fn retrograde_rules() {
        let engine = Scripted {
            speed: -0.3,
            ..Scripted::default()
        };
        let a = adapter(engine, ZodiacConfig::tropical());
        assert!(a.is_retrograde(Body::Saturn, JD).unwrap());
        for body in [Body::Sun, Body::Moon, Body::Rahu, Body::Ketu] {
            assert!(!a.is_retrograde(body, JD).unwrap());
        }
    }

    #[test]
    fn describe_reports_engine_and_label() {
        let zodiac = ZodiacConfig::sidereal(Ayanamsa::Krishnamurti);
        let info = adapter(Scripted::default(), zodiac).describe();
        assert_eq!(info.engine, "scripted");
        assert_eq!(info.zodiac_label(), "sidereal:krishnamurti/true-node");
        assert_eq!(info.date_range.end.value(), 2_500_000.5);
    }

    #[test]
    fn engine_codes_cover_primary_bodies() {
        let mut seen: Vec<i32> = Body::PRIMARY.iter().filter_map(|b| engine_code(*b)).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), Body::PRIMARY.len());
    }
}
