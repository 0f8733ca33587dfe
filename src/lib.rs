// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Planetary and lunar-node positions behind a swappable provider.
//!
//! # Core types
//!
//! - [`Time<S>`] — Julian Day instant tagged with a [`TimeScale`] marker.
//! - [`JulianDay`] — `Time<UT>`, the civil axis every query is expressed on.
//! - [`JulianEphemerisDay`] — `Time<TT>`, the axis the series are evaluated on.
//! - [`CivilDateTime`] — calendar timestamp in UTC.
//! - [`Body`] — the nine computed bodies plus the two lunar nodes.
//! - [`Position`] — ecliptic/equatorial coordinates and longitude speed.
//! - [`EphemerisProvider`] — the capability contract callers depend on.
//! - [`EngineAdapter`] — the provider over a [`CalculationEngine`].
//! - [`AnalyticEngine`] — the built-in engine.
//!
//! # Flow
//!
//! ```
//! use kalachakra::{Body, EngineAdapter, EphemerisProvider, EphemerisSettings, JulianDay};
//!
//! let provider = EngineAdapter::new(&EphemerisSettings::default());
//! let jd = JulianDay::from_iso("2024-01-01T00:00:00Z").unwrap();
//! assert_eq!(jd.value(), 2_460_310.5);
//!
//! let sun = provider.get_planet_position(Body::Sun, jd, true).unwrap();
//! assert!((sun.longitude() - 280.0).abs() < 1.0);
//!
//! let (rahu, ketu) = provider.get_lunar_nodes(jd).unwrap();
//! assert_eq!(ketu.latitude(), -rahu.latitude());
//! ```
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`UT`] | Universal Time (civil) |
//! | [`TT`] | Terrestrial Time (dynamical) |
//!
//! ΔT = TT − UT is applied automatically when converting between the two;
//! the raw value is available via [`Time::<UT>::delta_t()`](Time::delta_t).
//!
//! # Logging
//!
//! The crate emits [`tracing`] events and never installs a subscriber:
//! `info` for provider configuration and lifecycle, `debug` for data-path
//! fallbacks, `warn` for unrecognised settings, `trace` for every engine
//! query.

mod adapter;
mod body;
mod calendar;
mod config;
mod delta_t;
pub mod engine;
mod error;
pub(crate) mod instant;
mod julian_day_ext;
mod position;
mod provider;
mod range;
mod registry;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use adapter::{engine_code, EngineAdapter};
pub use body::Body;
pub use calendar::{
    civil_to_julian_day, iso_string_to_julian_day, julian_day_to_civil, CivilDateTime,
    CIVIL_JD_RANGE, GREGORIAN_ADOPTION_JD,
};
pub use config::{Ayanamsa, EphemerisSettings, NodeVariant, ZodiacConfig, ZodiacMode};
pub use engine::{AnalyticEngine, CalcFlags, CalculationEngine, EngineStatus};
pub use error::{EphemerisError, EphemerisResult, ErrorKind, ErrorReport};
pub use instant::{Time, TimeScale};
pub use position::{normalize_degrees, Equatorial, Position};
pub use provider::{
    compute_positions, BodyPosition, EphemerisProvider, PositionReport, PositionRequest,
    ProviderInfo,
};
pub use range::DateRange;
pub use registry::{ephemeris_provider, shutdown_provider, ProviderRegistry};
pub use scales::{TT, UT};

/// Julian Day on the civil (UT) axis.
///
/// This is a type alias for [`Time<UT>`].
pub type JulianDay = Time<UT>;

/// Julian Ephemeris Day on the dynamical (TT) axis.
///
/// This is a type alias for [`Time<TT>`].
pub type JulianEphemerisDay = Time<TT>;
