// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Process configuration consumed by the provider.
//!
//! Settings are resolved exactly once, before the provider is built, and
//! are never mutated afterwards.
//!
//! | Key | Values | Default |
//! |-----|--------|---------|
//! | `EPHEMERIS_PATH` | directory with calculation data | `./ephe` |
//! | `ZODIAC_TYPE` | `tropical`, `sidereal` | `tropical` |
//! | `AYANAMSA` | `LAHIRI`, `RAMAN`, `KRISHNAMURTI`, `FAGAN_BRADLEY` | `LAHIRI` |
//! | `USE_TRUE_NODE` | `true`/`false` (also `1`/`0`, `yes`/`no`, `on`/`off`) | `true` |
//!
//! Values that cannot be recognised fall back to the default and emit a
//! `warn!` event.

use std::fmt;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const EPHEMERIS_PATH_KEY: &str = "EPHEMERIS_PATH";
pub const ZODIAC_TYPE_KEY: &str = "ZODIAC_TYPE";
pub const AYANAMSA_KEY: &str = "AYANAMSA";
pub const USE_TRUE_NODE_KEY: &str = "USE_TRUE_NODE";

/// Data directory used when `EPHEMERIS_PATH` is not set.
pub const DEFAULT_EPHEMERIS_PATH: &str = "./ephe";

// ═══════════════════════════════════════════════════════════════════════════
// Zodiac vocabulary
// ═══════════════════════════════════════════════════════════════════════════

/// Reference frame for ecliptic longitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ZodiacMode {
    /// Longitudes measured from the moving vernal equinox.
    #[default]
    Tropical,
    /// Longitudes measured from a star-anchored origin.
    Sidereal,
}

/// Sidereal reference system. Only meaningful in [`ZodiacMode::Sidereal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Ayanamsa {
    /// Chitrapaksha: Spica at 0° Libra.
    #[default]
    Lahiri,
    /// B. V. Raman.
    Raman,
    /// Krishnamurti Paddhati.
    Krishnamurti,
    /// Fagan–Bradley synetic vernal point.
    FaganBradley,
}

impl Ayanamsa {
    pub const ALL: [Ayanamsa; 4] = [
        Ayanamsa::Lahiri,
        Ayanamsa::Raman,
        Ayanamsa::Krishnamurti,
        Ayanamsa::FaganBradley,
    ];

    /// Ayanamsa at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Ayanamsa::Lahiri => 23.853,
            Ayanamsa::Raman => 22.370,
            Ayanamsa::Krishnamurti => 23.850,
            Ayanamsa::FaganBradley => 24.736,
        }
    }

    /// Configuration spelling.
    pub const fn as_setting(self) -> &'static str {
        match self {
            Ayanamsa::Lahiri => "LAHIRI",
            Ayanamsa::Raman => "RAMAN",
            Ayanamsa::Krishnamurti => "KRISHNAMURTI",
            Ayanamsa::FaganBradley => "FAGAN_BRADLEY",
        }
    }

    /// Case-insensitive lookup of a configuration value.
    pub fn from_setting(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.as_setting().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Ayanamsa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_setting().to_ascii_lowercase())
    }
}

/// Physical model backing the lunar nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum NodeVariant {
    /// Osculating node including periodic perturbations.
    #[default]
    True,
    /// Smooth polynomial node.
    Mean,
}

/// Immutable zodiac configuration, fixed at provider construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ZodiacConfig {
    pub mode: ZodiacMode,
    pub ayanamsa: Ayanamsa,
    pub node: NodeVariant,
}

impl ZodiacConfig {
    pub const fn tropical() -> Self {
        Self {
            mode: ZodiacMode::Tropical,
            ayanamsa: Ayanamsa::Lahiri,
            node: NodeVariant::True,
        }
    }

    pub const fn sidereal(ayanamsa: Ayanamsa) -> Self {
        Self {
            mode: ZodiacMode::Sidereal,
            ayanamsa,
            node: NodeVariant::True,
        }
    }

    pub const fn with_node(mut self, node: NodeVariant) -> Self {
        self.node = node;
        self
    }

    pub const fn is_sidereal(&self) -> bool {
        matches!(self.mode, ZodiacMode::Sidereal)
    }

    /// Short label used on the health surface, e.g. `sidereal:lahiri/true-node`.
    pub fn label(&self) -> String {
        let node = match self.node {
            NodeVariant::True => "true-node",
            NodeVariant::Mean => "mean-node",
        };
        match self.mode {
            ZodiacMode::Tropical => format!("tropical/{node}"),
            ZodiacMode::Sidereal => format!("sidereal:{}/{node}", self.ayanamsa),
        }
    }
}

impl fmt::Display for ZodiacConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// EphemerisSettings
// ═══════════════════════════════════════════════════════════════════════════

/// Everything the provider needs from the process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EphemerisSettings {
    /// Directory holding calculation data; `None` means built-in data only.
    pub data_path: Option<PathBuf>,
    pub zodiac: ZodiacConfig,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            data_path: Some(PathBuf::from(DEFAULT_EPHEMERIS_PATH)),
            zodiac: ZodiacConfig::default(),
        }
    }
}

impl EphemerisSettings {
    /// Reads the settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves the settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = match lookup(EPHEMERIS_PATH_KEY) {
            Some(p) if p.trim().is_empty() => None,
            Some(p) => Some(PathBuf::from(p.trim())),
            None => Some(PathBuf::from(DEFAULT_EPHEMERIS_PATH)),
        };

        let mode = match lookup(ZODIAC_TYPE_KEY) {
            None => ZodiacMode::Tropical,
            Some(v) => match v.trim().to_ascii_lowercase().as_str() {
                "tropical" => ZodiacMode::Tropical,
                "sidereal" => ZodiacMode::Sidereal,
                _ => {
                    tracing::warn!(key = ZODIAC_TYPE_KEY, value = %v, "unrecognised zodiac type, using tropical");
                    ZodiacMode::Tropical
                }
            },
        };

        let ayanamsa = match lookup(AYANAMSA_KEY) {
            None => Ayanamsa::Lahiri,
            Some(v) => Ayanamsa::from_setting(&v).unwrap_or_else(|| {
                tracing::warn!(key = AYANAMSA_KEY, value = %v, "unrecognised ayanamsa, using LAHIRI");
                Ayanamsa::Lahiri
            }),
        };

        let node = match lookup(USE_TRUE_NODE_KEY) {
            None => NodeVariant::True,
            Some(v) => match parse_flag(&v) {
                Some(true) => NodeVariant::True,
                Some(false) => NodeVariant::Mean,
                None => {
                    tracing::warn!(key = USE_TRUE_NODE_KEY, value = %v, "unrecognised boolean, using true node");
                    NodeVariant::True
                }
            },
        };

        Self {
            data_path,
            zodiac: ZodiacConfig {
                mode,
                ayanamsa,
                node,
            },
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> EphemerisSettings {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EphemerisSettings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let s = settings(&[]);
        assert_eq!(s, EphemerisSettings::default());
        assert_eq!(s.data_path, Some(PathBuf::from("./ephe")));
        assert_eq!(s.zodiac, ZodiacConfig::tropical());
    }

    #[test]
    fn sidereal_with_ayanamsa_and_mean_node() {
        let s = settings(&[
            ("EPHEMERIS_PATH", "/opt/ephe"),
            ("ZODIAC_TYPE", "Sidereal"),
            ("AYANAMSA", "fagan_bradley"),
            ("USE_TRUE_NODE", "False"),
        ]);
        assert_eq!(s.data_path, Some(PathBuf::from("/opt/ephe")));
        assert_eq!(s.zodiac.mode, ZodiacMode::Sidereal);
        assert_eq!(s.zodiac.ayanamsa, Ayanamsa::FaganBradley);
        assert_eq!(s.zodiac.node, NodeVariant::Mean);
    }

    #[test]
    fn unrecognised_values_fall_back() {
        let s = settings(&[
            ("ZODIAC_TYPE", "draconic"),
            ("AYANAMSA", "YUKTESHWAR"),
            ("USE_TRUE_NODE", "maybe"),
        ]);
        assert_eq!(s.zodiac, ZodiacConfig::tropical());
    }

    #[test]
    fn empty_path_disables_data_directory() {
        assert_eq!(settings(&[("EPHEMERIS_PATH", "  ")]).data_path, None);
    }

    #[test]
    fn labels() {
        assert_eq!(ZodiacConfig::tropical().label(), "tropical/true-node");
        assert_eq!(
            ZodiacConfig::sidereal(Ayanamsa::Lahiri)
                .with_node(NodeVariant::Mean)
                .label(),
            "sidereal:lahiri/mean-node"
        );
        assert_eq!(
            ZodiacConfig::sidereal(Ayanamsa::FaganBradley).to_string(),
            "sidereal:fagan_bradley/true-node"
        );
    }

    #[test]
    fn ayanamsa_setting_round_trip() {
        for a in Ayanamsa::ALL {
            assert_eq!(Ayanamsa::from_setting(a.as_setting()), Some(a));
        }
        assert_eq!(Ayanamsa::from_setting(" raman "), Some(Ayanamsa::Raman));
        assert_eq!(Ayanamsa::from_setting("unknown"), None);
    }
}
