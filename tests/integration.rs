use kalachakra::{
    civil_to_julian_day, compute_positions, julian_day_to_civil, Ayanamsa, Body, CivilDateTime,
    EngineAdapter, EphemerisProvider, EphemerisSettings, ErrorKind, JulianDay, NodeVariant,
    PositionRequest, ZodiacConfig,
};
use qtty::Days;

fn settings(zodiac: ZodiacConfig) -> EphemerisSettings {
    EphemerisSettings {
        data_path: None,
        zodiac,
    }
}

fn tropical() -> EngineAdapter {
    EngineAdapter::new(&settings(ZodiacConfig::tropical()))
}

fn wrap180(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 {
        r - 360.0
    } else {
        r
    }
}

#[test]
fn new_year_2024_sun_is_in_capricorn() {
    let jd = JulianDay::from_iso("2024-01-01T00:00:00Z").unwrap();
    assert!((jd.value() - 2_460_310.5).abs() < 1e-4);

    let provider = tropical();
    let sun = provider.get_planet_position(Body::Sun, jd, true).unwrap();
    assert!((sun.longitude() - 280.0).abs() < 1.0, "λ☉ = {}", sun.longitude());
    assert!(sun.right_ascension().is_some() && sun.declination().is_some());
    assert!(!provider.is_retrograde(Body::Sun, jd).unwrap());
}

#[test]
fn node_pair_is_an_exact_antipode() {
    for variant in [NodeVariant::True, NodeVariant::Mean] {
        let provider = EngineAdapter::new(&settings(ZodiacConfig::tropical().with_node(variant)));
        let range = provider.get_supported_date_range();
        let span = range.duration().value();
        let sweep = [0.0, 0.13, 0.37, 0.5, 0.71, 0.94, 1.0]
            .map(|f| if f == 1.0 { range.end } else { range.start + Days::new(span * f) });

        for jd in sweep.into_iter().chain([JulianDay::new(2_460_310.5)]) {
            let (rahu, ketu) = provider.get_lunar_nodes(jd).unwrap();
            assert_eq!(ketu.longitude(), (rahu.longitude() + 180.0) % 360.0, "{variant:?} at {jd}");
            assert_eq!(ketu.latitude(), -rahu.latitude());
            assert_eq!(ketu.distance(), rahu.distance());
            assert_eq!(ketu.longitude_speed(), rahu.longitude_speed());
            assert_eq!(ketu.declination(), rahu.declination().map(|d| -d));
        }
    }
}

#[test]
fn nodes_never_count_as_retrograde() {
    let provider = EngineAdapter::new(&settings(
        ZodiacConfig::tropical().with_node(NodeVariant::Mean),
    ));
    let jd = JulianDay::new(2_460_310.5);
    let (rahu, _) = provider.get_lunar_nodes(jd).unwrap();
    assert!(rahu.longitude_speed().unwrap() < 0.0);
    for body in [Body::Sun, Body::Moon, Body::Rahu, Body::Ketu] {
        assert!(!provider.is_retrograde(body, jd).unwrap());
    }
}

#[test]
fn unknown_body_names_are_rejected() {
    let err = "pluto".parse::<Body>().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownBody);
}

#[test]
fn range_gate_is_inclusive_and_rejects_outside() {
    let provider = tropical();
    let range = provider.get_supported_date_range();
    assert_eq!(range.start.value(), 625_673.5);
    assert_eq!(range.end.value(), 2_525_593.5);

    for jd in [range.start, range.end] {
        assert!(provider.get_planet_position(Body::Mars, jd, true).is_ok());
    }
    for jd in [range.start - Days::new(1.0), range.end + Days::new(1.0)] {
        let err = provider.get_planet_position(Body::Mars, jd, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert!(err.to_string().contains(&jd.value().to_string()));
    }
}

#[test]
fn mars_retrograde_in_january_2025() {
    let provider = tropical();
    let jd = JulianDay::from_iso("2025-01-15T00:00:00Z").unwrap();
    assert!(provider.is_retrograde(Body::Mars, jd).unwrap());
}

#[test]
fn jupiter_direct_in_june_2024() {
    let provider = tropical();
    let jd = JulianDay::from_iso("2024-06-01T00:00:00Z").unwrap();
    assert!(!provider.is_retrograde(Body::Jupiter, jd).unwrap());
}

#[test]
fn sidereal_lahiri_offset() {
    let jd = JulianDay::new(2_460_310.5);
    let tropical = tropical();
    let sidereal = EngineAdapter::new(&settings(ZodiacConfig::sidereal(Ayanamsa::Lahiri)));
    for body in [Body::Sun, Body::Moon, Body::Saturn] {
        let t = tropical.get_planet_position(body, jd, true).unwrap();
        let s = sidereal.get_planet_position(body, jd, true).unwrap();
        let offset = wrap180(t.longitude() - s.longitude());
        assert!((offset - 24.19).abs() < 0.05, "{body}: offset {offset}");
        assert_eq!(t.declination(), s.declination());
    }
}

#[test]
fn heliocentric_mars_distance() {
    let provider = tropical();
    let jd = JulianDay::new(2_460_310.5);
    let mars = provider.get_planet_position(Body::Mars, jd, false).unwrap();
    assert!((1.38..=1.67).contains(&mars.distance()), "r = {}", mars.distance());

    let err = provider.get_planet_position(Body::Sun, jd, false).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Calculation);
}

#[test]
fn sun_declination_at_june_solstice() {
    let provider = tropical();
    let jd = JulianDay::from_iso("2024-06-20T00:00:00Z").unwrap();
    let sun = provider.get_planet_position(Body::Sun, jd, true).unwrap();
    let dec = sun.declination().unwrap();
    assert!((dec - 23.44).abs() < 0.2, "δ☉ = {dec}");
}

#[test]
fn batch_query_through_the_public_surface() {
    let provider = tropical();
    let request = PositionRequest::from_iso(
        "2024-01-01T00:00:00Z",
        Body::ALL.to_vec(),
        true,
    )
    .unwrap();
    let report = compute_positions(&provider, &request).unwrap();
    assert_eq!(report.julian_day.value(), 2_460_310.5);
    assert_eq!(report.positions.len(), Body::ALL.len());
    for row in &report.positions {
        assert!((0.0..360.0).contains(&row.longitude), "{}: {}", row.body, row.longitude);
        assert!((-90.0..=90.0).contains(&row.latitude));
        assert!(row.distance > 0.0);
        assert!(row.right_ascension.is_some() && row.declination.is_some());
        assert!(row.speed.is_some());
    }
}

#[test]
fn calendar_round_trip_1800_to_2200() {
    let mut dt = CivilDateTime::from_ymd_hms(1800, 1, 1, 0, 0, 0).unwrap();
    let mut previous = civil_to_julian_day(&dt);
    // Stride of 3 days 7 h 13 min 17 s walks through every month and hour.
    let stride = Days::new(3.0 + (7.0 * 3600.0 + 13.0 * 60.0 + 17.0) / 86_400.0);
    while dt.year < 2200 {
        let jd = civil_to_julian_day(&dt);
        let back = julian_day_to_civil(jd).unwrap();
        assert!(back.seconds_since(&dt).abs() < 1e-3, "{dt} -> {} -> {back}", jd.value());
        assert!(jd >= previous);
        previous = jd;
        dt = julian_day_to_civil(jd + stride).unwrap();
    }
}

#[test]
fn close_releases_the_engine() {
    let provider = tropical();
    let jd = JulianDay::new(2_460_310.5);
    provider.close();
    let err = provider.get_planet_position(Body::Moon, jd, true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Calculation);
    assert_eq!(err.engine_status(), Some(-2));
}

#[cfg(feature = "serde")]
#[test]
fn report_and_health_serialise() {
    let provider = EngineAdapter::new(&settings(ZodiacConfig::sidereal(Ayanamsa::Raman)));
    let request =
        PositionRequest::from_iso("2024-01-01T00:00:00Z", vec![Body::Rahu], true).unwrap();
    let report = compute_positions(&provider, &request).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["julian_day"], 2_460_310.5);
    assert_eq!(json["positions"][0]["body"], "rahu");
    assert_eq!(json["positions"][0]["is_retrograde"], false);

    let info = serde_json::to_value(provider.describe()).unwrap();
    assert_eq!(info["engine"], "analytic");
    assert_eq!(info["zodiac"]["mode"], "sidereal");
    assert_eq!(info["date_range"]["min_julian_day"], 625_673.5);
}
