// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The [`Daytime`] value type.
//!
//! A `Daytime` is a moment within a single day, stored as a count of whole
//! seconds since midnight.  The valid domain is `[0, 86400]`, where `86400`
//! is the [`Daytime::END_OF_DAY`] sentinel (24:00:00): the same wall-clock
//! instant as midnight, but a distinct value that orders strictly after
//! every other time of day, including [`Daytime::START_OF_DAY`].
//!
//! Values above 86400 are *representable* but invalid.  Operations follow a
//! garbage-in, inert-out policy: they check [`Daytime::is_valid`] first and
//! return the receiver unchanged (or false, or a zero result) when it fails,
//! so an invalid value never propagates as a different invalid value.

use chrono::{DateTime, Duration, TimeZone, Timelike};

use crate::error::{Error, ErrorKind};

/// Seconds in a full 24-hour day; the raw value of [`Daytime::END_OF_DAY`].
pub(crate) const SECONDS_IN_DAY: u32 = 86_400;

const HOURS_IN_DAY: u32 = 24;

/// A time of day counted in whole seconds since midnight, `[0, 86400]`.
///
/// The type is an immutable `Copy` value: every operation returns a new
/// `Daytime` rather than mutating in place.  The derived ordering on the raw
/// integer already places [`Daytime::END_OF_DAY`] after every other valid
/// value; [`Daytime::before`] and [`Daytime::after`] spell the rule out and
/// anchor the midnight-wraparound semantics of [`Daytime::between`].
///
/// The `Default` value is [`Daytime::START_OF_DAY`].
///
/// # Examples
///
/// ```
/// use daytime::Daytime;
///
/// let noon = Daytime::new(12, 0, 0)?;
/// assert_eq!(noon.seconds(), 43_200);
/// assert_eq!(noon.to_string(), "12:00:00");
/// # Ok::<(), daytime::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Daytime(u32);

impl Daytime {
    /// 00:00:00 — the start of the day.
    pub const START_OF_DAY: Daytime = Daytime(0);

    /// 24:00:00 — the end-of-day sentinel.
    ///
    /// Numerically `86400`.  Distinct from [`Daytime::START_OF_DAY`] even
    /// though both name midnight; `END_OF_DAY` orders after everything else.
    pub const END_OF_DAY: Daytime = Daytime(SECONDS_IN_DAY);

    // ── raw representation ────────────────────────────────────────────

    /// Wrap a raw seconds-since-midnight count, without validation.
    ///
    /// Counts above 86400 produce an invalid value; see
    /// [`Daytime::is_valid`].
    #[inline]
    pub const fn from_seconds(seconds: u32) -> Self {
        Daytime(seconds)
    }

    /// The raw seconds-since-midnight count.
    #[inline]
    pub const fn seconds(self) -> u32 {
        self.0
    }

    // ── validity ──────────────────────────────────────────────────────

    /// Whether the value lies in the valid domain `[0, 86400]`.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= SECONDS_IN_DAY
    }

    /// Whether the value is exactly the 24:00:00 sentinel.
    #[inline]
    pub const fn is_end_of_day(self) -> bool {
        self.0 == SECONDS_IN_DAY
    }

    /// Whether the value lies strictly within the day, `[0, 86400)`.
    ///
    /// Excludes both the sentinel and invalid values.
    #[inline]
    pub const fn is_in_day(self) -> bool {
        self.0 < SECONDS_IN_DAY
    }

    // ── construction ──────────────────────────────────────────────────

    /// Builds a daytime from clock components.
    ///
    /// Valid ranges: hour `[0, 24]`, minute `[0, 59]`, second `[0, 59]`.
    /// Hour 24 is only accepted as exactly `24:00:00`, which yields
    /// [`Daytime::END_OF_DAY`].
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidTimeComponent`] when a component is out of range;
    /// [`ErrorKind::EndOfDayExceeded`] for `24:MM:SS` with non-zero minutes
    /// or seconds.
    pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, Error> {
        if hour > HOURS_IN_DAY || minute > 59 || second > 59 {
            return Err(Error::new(
                "new",
                format!("{hour:02}:{minute:02}:{second:02}"),
                ErrorKind::InvalidTimeComponent,
            ));
        }
        if hour == HOURS_IN_DAY && (minute != 0 || second != 0) {
            return Err(Error::new(
                "new",
                format!("{hour:02}:{minute:02}:{second:02}"),
                ErrorKind::EndOfDayExceeded,
            ));
        }
        Ok(Daytime(hour * 3600 + minute * 60 + second))
    }

    /// Builds a daytime from clock components, panicking on invalid input.
    ///
    /// Being `const`, this doubles as a compile-time check for literal
    /// values:
    ///
    /// ```
    /// use daytime::Daytime;
    ///
    /// const OPENING: Daytime = Daytime::must(9, 30, 0);
    /// assert_eq!(OPENING.seconds(), 34_200);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics under the same conditions [`Daytime::new`] errors.  Only call
    /// this with inputs known valid ahead of time.
    pub const fn must(hour: u32, minute: u32, second: u32) -> Self {
        if hour > HOURS_IN_DAY || minute > 59 || second > 59 {
            panic!("daytime: must: time component out of range");
        }
        if hour == HOURS_IN_DAY && (minute != 0 || second != 0) {
            panic!("daytime: must: 24:00:00 must have zero minutes and seconds");
        }
        Daytime(hour * 3600 + minute * 60 + second)
    }

    /// Extracts the time-of-day portion of an absolute timestamp.
    ///
    /// chrono already normalizes the clock components to
    /// `[0, 23]:[0, 59]:[0, 59]`, so the result is always valid and never
    /// the end-of-day sentinel.
    pub fn from_datetime<Tz: TimeZone>(t: &DateTime<Tz>) -> Self {
        Daytime(t.hour() * 3600 + t.minute() * 60 + t.second())
    }

    // ── clock components ──────────────────────────────────────────────

    /// The `(hour, minute, second)` components.
    ///
    /// [`Daytime::END_OF_DAY`] yields `(24, 0, 0)`.  Invalid values are
    /// split by plain integer division and may report hours above 24.
    pub const fn clock(self) -> (u32, u32, u32) {
        if self.is_end_of_day() {
            return (HOURS_IN_DAY, 0, 0);
        }
        (self.0 / 3600, self.0 % 3600 / 60, self.0 % 60)
    }

    /// The hour component, `[0, 24]`.
    #[inline]
    pub const fn hour(self) -> u32 {
        self.clock().0
    }

    /// The minute component, `[0, 59]`.
    #[inline]
    pub const fn minute(self) -> u32 {
        self.clock().1
    }

    /// The second component, `[0, 59]`.
    #[inline]
    pub const fn second(self) -> u32 {
        self.clock().2
    }

    /// The raw seconds count reinterpreted as elapsed time since midnight.
    ///
    /// No sentinel handling is needed: `END_OF_DAY`'s raw 86400 already
    /// means 24 hours elapsed.
    #[inline]
    pub fn duration(self) -> Duration {
        Duration::seconds(i64::from(self.0))
    }

    // ── comparison ────────────────────────────────────────────────────

    /// Whether this daytime occurs before `other`.
    ///
    /// [`Daytime::END_OF_DAY`] is before nothing; everything else is before
    /// it.  Consistent with the derived `Ord` (86400 is already the largest
    /// raw value) — the explicit rule exists to anchor the wraparound logic
    /// of [`Daytime::between`].
    pub const fn before(self, other: Daytime) -> bool {
        if self.is_end_of_day() {
            return false;
        }
        if other.is_end_of_day() {
            return true;
        }
        self.0 < other.0
    }

    /// Whether this daytime occurs after `other`.
    #[inline]
    pub const fn after(self, other: Daytime) -> bool {
        other.before(self)
    }

    /// Whether this daytime lies in the closed interval from `start` to
    /// `end`, wrapping across midnight when `start` orders after `end`.
    ///
    /// Any invalid input makes the answer false.  `start == end` is a
    /// singleton interval.  A wrapping interval such as 23:00 to 01:00
    /// contains everything on either side of the midnight crossing,
    /// endpoints included; the degenerate wrap `[24:00, 00:00]` therefore
    /// contains only those two boundary instants.
    pub const fn between(self, start: Daytime, end: Daytime) -> bool {
        if !self.is_valid() || !start.is_valid() || !end.is_valid() {
            return false;
        }
        if start.0 == end.0 {
            return self.0 == start.0;
        }
        if start.before(end) {
            // Normal interval: start <= self <= end.
            !self.before(start) && !self.after(end)
        } else {
            // Wraps across midnight: start through 24:00, then 00:00 to end.
            !self.before(start) || !self.after(end)
        }
    }

    /// Whether this daytime occurs before the time of day of `t`.
    pub fn before_datetime<Tz: TimeZone>(self, t: &DateTime<Tz>) -> bool {
        self.before(Daytime::from_datetime(t))
    }

    /// Whether this daytime occurs after the time of day of `t`.
    pub fn after_datetime<Tz: TimeZone>(self, t: &DateTime<Tz>) -> bool {
        self.after(Daytime::from_datetime(t))
    }

    /// Whether this daytime equals the time of day of `t`.
    pub fn eq_datetime<Tz: TimeZone>(self, t: &DateTime<Tz>) -> bool {
        self == Daytime::from_datetime(t)
    }
}

impl From<Daytime> for u32 {
    #[inline]
    fn from(d: Daytime) -> u32 {
        d.0
    }
}

impl From<u32> for Daytime {
    #[inline]
    fn from(seconds: u32) -> Daytime {
        Daytime(seconds)
    }
}
