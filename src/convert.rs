// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Text and calendar conversions for [`Daytime`].
//!
//! The canonical text form is zero-padded `HH:MM:SS`, with the end-of-day
//! sentinel rendered as the literal `24:00:00`.  Parsing additionally
//! accepts a bare base-10 integer meaning seconds since midnight; integer
//! strings are *always* seconds and never re-interpreted as a clock string.
//!
//! Calendar interop combines a daytime with the date and zone of a caller
//! supplied `chrono::DateTime` — this crate never interprets dates, leap
//! seconds, or DST transitions itself.  Because resolving a wall-clock time
//! in a zone is fallible in chrono, the conversions return `Option`.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, TimeZone};

use crate::daytime::{Daytime, SECONDS_IN_DAY};
use crate::error::{Error, ErrorKind};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// Calendar interop
// ═══════════════════════════════════════════════════════════════════════════

impl Daytime {
    /// Combines this daytime with the calendar date and zone of `base`.
    ///
    /// `base`'s own time of day is ignored.  [`Daytime::END_OF_DAY`] maps to
    /// midnight of the day *after* `base`'s date, in the same zone.
    ///
    /// The value is not validated: the raw seconds count is added to
    /// midnight of `base`'s date, so an out-of-range value simply overflows
    /// into later days.  Returns `None` when the wall-clock result does not
    /// exist in `base`'s zone (a DST gap) or is outside chrono's
    /// representable range.
    pub fn to_datetime<Tz: TimeZone>(self, base: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let midnight = base.date_naive().and_hms_opt(0, 0, 0)?;
        let naive = midnight.checked_add_signed(Duration::seconds(i64::from(self.seconds())))?;
        base.timezone().from_local_datetime(&naive).earliest()
    }

    /// The signed duration from `t` to this daytime placed on `base`'s date.
    ///
    /// Positive when the daytime is later than `t`.
    pub fn since<Tz: TimeZone, Tz2: TimeZone>(
        self,
        t: &DateTime<Tz2>,
        base: &DateTime<Tz>,
    ) -> Option<Duration> {
        Some(self.to_datetime(base)?.signed_duration_since(t))
    }

    /// The signed duration from this daytime placed on `base`'s date to `t`.
    ///
    /// Positive when the daytime is earlier than `t`.
    pub fn until<Tz: TimeZone, Tz2: TimeZone>(
        self,
        t: &DateTime<Tz2>,
        base: &DateTime<Tz>,
    ) -> Option<Duration> {
        Some(t.clone().signed_duration_since(self.to_datetime(base)?))
    }

    /// Formats this daytime on `base`'s date with chrono's strftime syntax.
    pub fn format<Tz: TimeZone>(self, fmt: &str, base: &DateTime<Tz>) -> Option<String>
    where
        Tz::Offset: fmt::Display,
    {
        Some(self.to_datetime(base)?.format(fmt).to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Text form
// ═══════════════════════════════════════════════════════════════════════════

impl fmt::Display for Daytime {
    /// Zero-padded `HH:MM:SS`; `24:00:00` for the sentinel; `invalid` for
    /// values above 86400.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_valid() {
            return f.write_str("invalid");
        }
        if self.is_end_of_day() {
            return f.write_str("24:00:00");
        }
        let (hour, minute, second) = self.clock();
        write!(f, "{hour:02}:{minute:02}:{second:02}")
    }
}

impl FromStr for Daytime {
    type Err = Error;

    /// Parses either a bare integer seconds count or a `HH:MM:SS` literal.
    ///
    /// Integer strings take precedence and are always seconds: `"1234"` is
    /// 1234 seconds, not a malformed clock string.  The clock form is
    /// strict — exactly eight characters, two-digit fields, colons at
    /// positions 2 and 5.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidFormat`] for an empty string or anything that is
    /// neither form; [`ErrorKind::ValueOutOfRange`] for an integer outside
    /// `[0, 86400]`; [`ErrorKind::InvalidTimeComponent`] and
    /// [`ErrorKind::EndOfDayExceeded`] from clock-component validation.
    fn from_str(s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::new("parse", s, ErrorKind::InvalidFormat));
        }
        if is_integer_literal(s) {
            return parse_seconds(s);
        }
        parse_clock(s)
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn parse_seconds(s: &str) -> Result<Daytime, Error> {
    match s.parse::<i64>() {
        Ok(sec) if (0..=i64::from(SECONDS_IN_DAY)).contains(&sec) => {
            Ok(Daytime::from_seconds(sec as u32))
        }
        Ok(_) => Err(Error::new("parse", s, ErrorKind::ValueOutOfRange)),
        // Digit strings too long for i64 are out of range, not malformed.
        Err(_) => Err(Error::new("parse", s, ErrorKind::ValueOutOfRange)),
    }
}

fn parse_clock(s: &str) -> Result<Daytime, Error> {
    let b = s.as_bytes();
    if b.len() != 8 || b[2] != b':' || b[5] != b':' {
        return Err(Error::new("parse", s, ErrorKind::InvalidFormat));
    }
    match (field(&b[0..2]), field(&b[3..5]), field(&b[6..8])) {
        (Some(hour), Some(minute), Some(second)) => Daytime::new(hour, minute, second)
            .map_err(|e| Error::new("parse", s, e.kind())),
        _ => Err(Error::new("parse", s, ErrorKind::InvalidFormat)),
    }
}

/// A fixed-width two-digit decimal field.
fn field(b: &[u8]) -> Option<u32> {
    if b[0].is_ascii_digit() && b[1].is_ascii_digit() {
        Some(u32::from(b[0] - b'0') * 10 + u32::from(b[1] - b'0'))
    } else {
        None
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Serde
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
impl Serialize for Daytime {
    /// Serializes the `Display` form.  Never fails for this type: invalid
    /// values serialize as the string `"invalid"`.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Daytime {
    /// Deserializes from a string, accepting the same two forms as
    /// [`FromStr`].  Stricter than `parse` at this boundary: every parse
    /// failure collapses into a single invalid-format error.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(|_| {
            serde::de::Error::custom(Error::new("deserialize", &text, ErrorKind::InvalidFormat))
        })
    }
}
