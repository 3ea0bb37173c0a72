// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Structured error type for fallible daytime operations.
//!
//! Every failure carries three pieces of context: the operation that failed,
//! the offending input rendered as text, and a root cause from the fixed
//! [`ErrorKind`] taxonomy.  The wrapper never obscures the root cause — tests
//! and callers match on [`Error::kind`] alone, or walk
//! [`std::error::Error::source`] to reach the kind.

use std::fmt;

/// Root-cause categories for daytime failures.
///
/// Each variant is a distinct sentinel that callers can match against
/// directly, independent of the operation that raised it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ErrorKind {
    /// An hour, minute, or second component is outside its valid range.
    #[error("invalid time component")]
    InvalidTimeComponent,

    /// Hour 24 was combined with non-zero minutes or seconds.
    #[error("daytime 24:00:00 must have zero minutes and seconds")]
    EndOfDayExceeded,

    /// Text parses neither as integer seconds nor as `HH:MM:SS`.
    #[error("invalid format")]
    InvalidFormat,

    /// A seconds value or computed quotient falls outside `[0, 86400]`.
    #[error("value out of range")]
    ValueOutOfRange,

    /// The divisor argument is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The modulus argument is zero or negative.
    #[error("modulus must be positive")]
    InvalidModulus,
}

/// Error returned by fallible daytime operations.
///
/// Displays as `daytime: <operation>: <value>: <root cause>`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("daytime: {op}: {value}: {kind}")]
pub struct Error {
    op: &'static str,
    value: String,
    #[source]
    kind: ErrorKind,
}

impl Error {
    pub(crate) fn new(op: &'static str, value: impl fmt::Display, kind: ErrorKind) -> Self {
        Self {
            op,
            value: value.to_string(),
            kind,
        }
    }

    /// The operation that raised the error (e.g. `"parse"`, `"div_rem"`).
    pub fn operation(&self) -> &'static str {
        self.op
    }

    /// The offending input value, rendered as text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The root cause category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}
