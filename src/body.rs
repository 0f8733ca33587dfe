// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The closed set of bodies a provider knows about.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EphemerisError;

/// A celestial body or lunar node.
///
/// Nine bodies are computed directly; [`Rahu`](Body::Rahu) and
/// [`Ketu`](Body::Ketu) are synthetic and derived from a single node
/// calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    /// Ascending (north) lunar node.
    Rahu,
    /// Descending (south) lunar node.
    Ketu,
}

impl Body {
    /// Bodies accepted by
    /// [`get_planet_position`](crate::EphemerisProvider::get_planet_position).
    pub const PRIMARY: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
    ];

    /// The two lunar nodes.
    pub const NODES: [Body; 2] = [Body::Rahu, Body::Ketu];

    /// Every body, primary first.
    pub const ALL: [Body; 11] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Rahu,
        Body::Ketu,
    ];

    /// Lowercase identifier.
    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "sun",
            Body::Moon => "moon",
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Rahu => "rahu",
            Body::Ketu => "ketu",
        }
    }

    /// `true` for the lunar nodes, which are never queried on their own.
    pub const fn is_synthetic(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }

    /// `true` for bodies that never show retrograde motion in this model.
    pub const fn never_retrograde(self) -> bool {
        matches!(self, Body::Sun | Body::Moon | Body::Rahu | Body::Ketu)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Body::ALL
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EphemerisError::UnknownBody(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Sun".parse::<Body>().unwrap(), Body::Sun);
        assert_eq!(" KETU ".parse::<Body>().unwrap(), Body::Ketu);
        for body in Body::ALL {
            assert_eq!(body.to_string().parse::<Body>().unwrap(), body);
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        let err = "pluto".parse::<Body>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownBody);
        assert_eq!(err, EphemerisError::UnknownBody("pluto".into()));
        assert!("".parse::<Body>().is_err());
    }

    #[test]
    fn partitions_are_disjoint_and_complete() {
        assert!(Body::PRIMARY.iter().all(|b| !b.is_synthetic()));
        assert!(Body::NODES.iter().all(|b| b.is_synthetic()));
        assert_eq!(Body::PRIMARY.len() + Body::NODES.len(), Body::ALL.len());
    }

    #[test]
    fn retrograde_exclusions() {
        let excluded: Vec<_> = Body::ALL.into_iter().filter(|b| b.never_retrograde()).collect();
        assert_eq!(excluded, [Body::Sun, Body::Moon, Body::Rahu, Body::Ketu]);
    }
}
