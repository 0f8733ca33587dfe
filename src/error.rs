// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error taxonomy.
//!
//! | Variant | Raised by | Who is at fault |
//! |---------|-----------|-----------------|
//! | [`Parse`](EphemerisError::Parse) | ISO-8601 parsing | client |
//! | [`UnknownBody`](EphemerisError::UnknownBody) | body lookup | client |
//! | [`OutOfRange`](EphemerisError::OutOfRange) | range gate | client |
//! | [`EmptyRequest`](EphemerisError::EmptyRequest) | batch query | client |
//! | [`Calculation`](EphemerisError::Calculation) | calculation engine | server |
//!
//! Every variant is raised next to its cause and reaches the boundary
//! unchanged; [`ErrorReport`] is the one shape handed to outer layers.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the crate.
pub type EphemerisResult<T> = Result<T, EphemerisError>;

/// Errors produced by time conversion and ephemeris providers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    /// The input timestamp could not be parsed.
    #[error("invalid timestamp: {0}")]
    Parse(String),

    /// The body identifier is not in the queryable set.
    #[error("unknown body '{0}'")]
    UnknownBody(String),

    /// The Julian Day falls outside the provider's validated window.
    #[error("Julian Day {jd} is outside the supported range [{min}, {max}]")]
    OutOfRange { jd: f64, min: f64, max: f64 },

    /// A batch request named no bodies.
    #[error("at least one body must be requested")]
    EmptyRequest,

    /// The calculation engine reported a failure status.
    #[error("calculation failed for {body} at Julian Day {jd} (engine status {status})")]
    Calculation { body: String, jd: f64, status: i32 },
}

/// Tag naming the kind of an [`EphemerisError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    Parse,
    UnknownBody,
    OutOfRange,
    EmptyRequest,
    Calculation,
}

impl ErrorKind {
    /// `true` for kinds caused by bad caller input.
    pub const fn is_client_error(self) -> bool {
        !matches!(self, Self::Calculation)
    }

    /// Stable snake_case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::UnknownBody => "unknown_body",
            Self::OutOfRange => "out_of_range",
            Self::EmptyRequest => "empty_request",
            Self::Calculation => "calculation",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EphemerisError {
    /// Kind tag of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::UnknownBody(_) => ErrorKind::UnknownBody,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::EmptyRequest => ErrorKind::EmptyRequest,
            Self::Calculation { .. } => ErrorKind::Calculation,
        }
    }

    /// Raw engine status for [`Calculation`](Self::Calculation) errors.
    pub const fn engine_status(&self) -> Option<i32> {
        match self {
            Self::Calculation { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Flattens this error into the externally visible shape.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

/// The externally visible error shape: a kind tag plus a message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<EphemerisError> for ErrorReport {
    fn from(err: EphemerisError) -> Self {
        err.report()
    }
}
