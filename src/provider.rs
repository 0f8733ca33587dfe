// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The provider contract and the batch query built on top of it.
//!
//! Callers depend on [`EphemerisProvider`] only; the concrete calculation
//! source behind it can be swapped without touching them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::body::Body;
use crate::calendar::{civil_to_julian_day, CivilDateTime};
use crate::config::ZodiacConfig;
use crate::error::{EphemerisError, EphemerisResult};
use crate::position::Position;
use crate::range::DateRange;
use crate::JulianDay;

/// Capability set of an ephemeris source.
///
/// Implementations are shared across threads once built and must not
/// change configuration afterwards.
pub trait EphemerisProvider: Send + Sync {
    /// Ecliptic and equatorial position with longitude speed.
    ///
    /// Only the nine [`Body::PRIMARY`] bodies are accepted; the nodes fail
    /// with [`UnknownBody`](crate::EphemerisError::UnknownBody) and are served by
    /// [`get_lunar_nodes`](Self::get_lunar_nodes).
    fn get_planet_position(
        &self,
        body: Body,
        jd: JulianDay,
        geocentric: bool,
    ) -> EphemerisResult<Position>;

    /// Ascending (rahu) and descending (ketu) node; ketu is the exact antipode.
    fn get_lunar_nodes(&self, jd: JulianDay) -> EphemerisResult<(Position, Position)>;

    /// Apparent retrograde motion. Always `false` for sun, moon, rahu and ketu.
    fn is_retrograde(&self, body: Body, jd: JulianDay) -> EphemerisResult<bool>;

    /// The validated window every query is gated on.
    fn get_supported_date_range(&self) -> DateRange;

    /// Health/introspection summary.
    fn describe(&self) -> ProviderInfo;

    /// Releases underlying resources at process teardown.
    fn close(&self) {}
}

/// What a provider reports on the health surface.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProviderInfo {
    pub engine: String,
    pub zodiac: ZodiacConfig,
    pub date_range: DateRange,
}

impl ProviderInfo {
    pub fn zodiac_label(&self) -> String {
        self.zodiac.label()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Batch query
// ═══════════════════════════════════════════════════════════════════════════

/// Several bodies at one civil instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionRequest {
    pub datetime: CivilDateTime,
    pub bodies: Vec<Body>,
    pub geocentric: bool,
}

impl PositionRequest {
    pub fn new(datetime: CivilDateTime, bodies: Vec<Body>, geocentric: bool) -> Self {
        Self {
            datetime,
            bodies,
            geocentric,
        }
    }

    /// Builds a request from an ISO-8601 timestamp.
    pub fn from_iso(s: &str, bodies: Vec<Body>, geocentric: bool) -> EphemerisResult<Self> {
        Ok(Self::new(s.parse()?, bodies, geocentric))
    }
}

/// One row of a [`PositionReport`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BodyPosition {
    pub body: Body,
    pub longitude: f64,
    pub latitude: f64,
    pub distance: f64,
    pub right_ascension: Option<f64>,
    pub declination: Option<f64>,
    pub speed: Option<f64>,
    pub is_retrograde: bool,
}

impl BodyPosition {
    pub fn new(body: Body, position: &Position, is_retrograde: bool) -> Self {
        Self {
            body,
            longitude: position.longitude(),
            latitude: position.latitude(),
            distance: position.distance(),
            right_ascension: position.right_ascension(),
            declination: position.declination(),
            speed: position.longitude_speed(),
            is_retrograde,
        }
    }
}

/// Answer to a [`PositionRequest`], rows in request order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PositionReport {
    pub datetime: String,
    pub julian_day: JulianDay,
    pub positions: Vec<BodyPosition>,
}

/// Resolves a batch request against `provider`.
///
/// An empty body list is rejected. The instant is range-checked once up
/// front; the node pair is computed at most once even when both rahu and
/// ketu are requested.
pub fn compute_positions(
    provider: &dyn EphemerisProvider,
    request: &PositionRequest,
) -> EphemerisResult<PositionReport> {
    if request.bodies.is_empty() {
        return Err(EphemerisError::EmptyRequest);
    }
    let jd = civil_to_julian_day(&request.datetime);
    provider.get_supported_date_range().check(jd)?;

    let mut nodes: Option<(Position, Position)> = None;
    let mut positions = Vec::with_capacity(request.bodies.len());

    for &body in &request.bodies {
        let position = match body {
            Body::Rahu | Body::Ketu => {
                let (rahu, ketu) = match nodes {
                    Some(pair) => pair,
                    None => *nodes.insert(provider.get_lunar_nodes(jd)?),
                };
                if body == Body::Rahu {
                    rahu
                } else {
                    ketu
                }
            }
            _ => provider.get_planet_position(body, jd, request.geocentric)?,
        };
        let retrograde = provider.is_retrograde(body, jd)?;
        positions.push(BodyPosition::new(body, &position, retrograde));
    }

    Ok(PositionReport {
        datetime: request.datetime.to_string(),
        julian_day: jd,
        positions,
    })
}
