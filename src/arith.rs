// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Wraparound arithmetic over [`Daytime`] values.
//!
//! All day-crossing operations funnel through one normalization routine:
//! floored division of the raw seconds total by 86400 into a canonical
//! daytime plus a signed count of day boundaries crossed, with a single
//! exception — a total of exactly `+86400` lands on
//! [`Daytime::END_OF_DAY`] with zero days crossed, so stepping one full day
//! forward from 00:00:00 ends the *same* logical day rather than starting
//! the next one.
//!
//! Every operation here is defensive: an invalid receiver short-circuits to
//! an unchanged / zero result instead of erroring.  Only [`Daytime::div_rem`]
//! and [`Daytime::modulo`] are fallible, and only for bad arguments.

use chrono::Duration;

use crate::daytime::{Daytime, SECONDS_IN_DAY};
use crate::error::{Error, ErrorKind};

const DAY: i64 = SECONDS_IN_DAY as i64;

/// Normalizes a raw seconds total into `(daytime, days crossed)`.
///
/// Floored division keeps the remainder in `[0, 86399]` for negative totals;
/// a remainder of zero is 00:00:00 of whatever day was reached.  The one
/// special case: a total of exactly `+86400` is 24:00:00 with zero days.
const fn normalize(total: i64) -> (Daytime, i64) {
    if total == DAY {
        return (Daytime::END_OF_DAY, 0);
    }
    let days = total.div_euclid(DAY);
    let remainder = total.rem_euclid(DAY);
    (Daytime::from_seconds(remainder as u32), days)
}

impl Daytime {
    // ── addition / subtraction ────────────────────────────────────────

    /// Adds seconds, wrapping through midnight.
    ///
    /// Returns the normalized daytime and the signed number of day
    /// boundaries crossed.  Negative seconds move backward.  An invalid
    /// receiver is returned unchanged with zero days crossed.  The raw
    /// total saturates at the `i64` limits instead of overflowing.
    ///
    /// ```
    /// use daytime::Daytime;
    ///
    /// // 23:00:00 plus two hours is 01:00:00 the next day.
    /// let (d, days) = Daytime::must(23, 0, 0).add_seconds(7_200);
    /// assert_eq!((d, days), (Daytime::must(1, 0, 0), 1));
    /// ```
    pub const fn add_seconds(self, seconds: i64) -> (Daytime, i64) {
        if !self.is_valid() {
            return (self, 0);
        }
        normalize((self.seconds() as i64).saturating_add(seconds))
    }

    /// Subtracts seconds, wrapping through midnight.
    ///
    /// Equivalent to [`Daytime::add_seconds`] with the sign flipped.
    #[inline]
    pub const fn sub_seconds(self, seconds: i64) -> (Daytime, i64) {
        self.add_seconds(seconds.saturating_neg())
    }

    /// Adds a duration, truncated to whole seconds.
    pub fn add_duration(self, duration: Duration) -> (Daytime, i64) {
        self.add_seconds(duration.num_seconds())
    }

    /// Subtracts a duration, truncated to whole seconds.
    pub fn sub_duration(self, duration: Duration) -> (Daytime, i64) {
        self.add_seconds(duration.num_seconds().saturating_neg())
    }

    // ── difference ────────────────────────────────────────────────────

    /// The difference `self - other` as `(seconds, days crossed)`.
    ///
    /// Seconds are normalized into `[0, 86399]` by floored division; the
    /// day count absorbs the sign.  The sentinel keeps its raw 86400 on
    /// either side, so `END_OF_DAY.diff(START_OF_DAY)` is `(0, 1)` and
    /// `START_OF_DAY.diff(END_OF_DAY)` is `(0, -1)`.  Either input invalid
    /// yields `(0, 0)`.
    pub const fn diff(self, other: Daytime) -> (i64, i64) {
        if !self.is_valid() || !other.is_valid() {
            return (0, 0);
        }
        let diff = self.seconds() as i64 - other.seconds() as i64;
        (diff.rem_euclid(DAY), diff.div_euclid(DAY))
    }

    // ── scaling ───────────────────────────────────────────────────────

    /// Multiplies the seconds count by `factor`, wrapping through midnight.
    ///
    /// Returns the normalized daytime and the signed day-crossing count;
    /// negative factors move backward.  A product of exactly `+86400` is
    /// [`Daytime::END_OF_DAY`] with zero days crossed, like
    /// [`Daytime::add_seconds`].  An invalid receiver is returned unchanged.
    /// The raw product saturates at the `i64` limits instead of overflowing.
    pub const fn scale(self, factor: i64) -> (Daytime, i64) {
        if !self.is_valid() {
            return (self, 0);
        }
        normalize((self.seconds() as i64).saturating_mul(factor))
    }

    // ── division / modulo ─────────────────────────────────────────────

    /// Divides the seconds count, returning `(quotient, remainder)`.
    ///
    /// Truncating integer semantics: the remainder's sign follows the
    /// dividend.  The quotient must itself be a valid daytime, which is how
    /// negative divisors are rejected — a non-negative dividend over a
    /// negative divisor yields a negative quotient.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::DivisionByZero`] when `divisor` is zero;
    /// [`ErrorKind::ValueOutOfRange`] when the quotient falls outside
    /// `[0, 86400]`.  An invalid receiver returns `Ok((self, 0))` unchanged.
    pub fn div_rem(self, divisor: i64) -> Result<(Daytime, i64), Error> {
        if divisor == 0 {
            return Err(Error::new("div_rem", divisor, ErrorKind::DivisionByZero));
        }
        if !self.is_valid() {
            return Ok((self, 0));
        }
        let value = i64::from(self.seconds());
        let quotient = value / divisor;
        let remainder = value % divisor;
        if quotient < 0 || quotient > DAY {
            return Err(Error::new("div_rem", quotient, ErrorKind::ValueOutOfRange));
        }
        Ok((Daytime::from_seconds(quotient as u32), remainder))
    }

    /// The seconds count modulo `modulus`, always in `[0, modulus)`.
    ///
    /// The modulus is not range-checked against 86400: a larger modulus is
    /// accepted and simply never wraps, so `END_OF_DAY.modulo(100_000)`
    /// returns `END_OF_DAY` itself.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::InvalidModulus`] when `modulus` is zero or negative.
    /// An invalid receiver returns `Ok(self)` unchanged.
    pub fn modulo(self, modulus: i64) -> Result<Daytime, Error> {
        if modulus <= 0 {
            return Err(Error::new("modulo", modulus, ErrorKind::InvalidModulus));
        }
        if !self.is_valid() {
            return Ok(self);
        }
        let value = i64::from(self.seconds());
        Ok(Daytime::from_seconds(value.rem_euclid(modulus) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_within_the_day() {
        let (d, days) = Daytime::must(10, 0, 0).add_seconds(3_600);
        assert_eq!((d, days), (Daytime::must(11, 0, 0), 0));
    }

    #[test]
    fn add_crosses_midnight_forward() {
        let (d, days) = Daytime::from_seconds(82_800).add_seconds(7_200);
        assert_eq!((d, days), (Daytime::from_seconds(3_600), 1));

        let (d, days) = Daytime::must(23, 59, 59).add_seconds(2);
        assert_eq!((d, days), (Daytime::must(0, 0, 1), 1));
    }

    #[test]
    fn add_crosses_midnight_backward() {
        let (d, days) = Daytime::START_OF_DAY.add_seconds(-1);
        assert_eq!((d, days), (Daytime::from_seconds(86_399), -1));

        let (d, days) = Daytime::must(1, 0, 0).add_seconds(-7_200);
        assert_eq!((d, days), (Daytime::must(23, 0, 0), -1));
    }

    #[test]
    fn add_exactly_one_day_from_zero_is_end_of_day() {
        let (d, days) = Daytime::START_OF_DAY.add_seconds(86_400);
        assert_eq!((d, days), (Daytime::END_OF_DAY, 0));
    }

    #[test]
    fn add_beyond_end_of_day_wraps() {
        let (d, days) = Daytime::END_OF_DAY.add_seconds(1);
        assert_eq!((d, days), (Daytime::from_seconds(1), 1));

        let (d, days) = Daytime::END_OF_DAY.add_seconds(0);
        assert_eq!((d, days), (Daytime::END_OF_DAY, 0));
    }

    #[test]
    fn add_multiple_days() {
        let (d, days) = Daytime::must(12, 0, 0).add_seconds(3 * 86_400);
        assert_eq!((d, days), (Daytime::must(12, 0, 0), 3));

        // Floored division: -133200 seconds is 11:00:00 two days back.
        let (d, days) = Daytime::must(12, 0, 0).add_seconds(-2 * 86_400 - 3_600);
        assert_eq!((d, days), (Daytime::must(11, 0, 0), -2));

        let (d, days) = Daytime::must(12, 0, 0).add_seconds(-3 * 86_400 - 3_600);
        assert_eq!((d, days), (Daytime::must(11, 0, 0), -3));
    }

    #[test]
    fn add_totalling_exactly_one_day_is_end_of_day() {
        // A raw total of exactly +86400 is the sentinel, regardless of
        // where the day multiple came from.
        let (d, days) = Daytime::must(12, 0, 0).add_seconds(43_200);
        assert_eq!((d, days), (Daytime::END_OF_DAY, 0));
    }

    #[test]
    fn add_landing_on_other_midnights_is_start_of_day() {
        // Any exact day multiple other than +86400 lands on 00:00:00 of
        // the reached day.
        let (d, days) = Daytime::must(12, 0, 0).add_seconds(86_400 + 43_200);
        assert_eq!((d, days), (Daytime::START_OF_DAY, 2));

        let (d, days) = Daytime::must(12, 0, 0).add_seconds(-43_200);
        assert_eq!((d, days), (Daytime::START_OF_DAY, 0));

        let (d, days) = Daytime::START_OF_DAY.add_seconds(2 * 86_400);
        assert_eq!((d, days), (Daytime::START_OF_DAY, 2));
    }

    #[test]
    fn add_on_invalid_receiver_is_inert() {
        let bad = Daytime::from_seconds(90_000);
        assert_eq!(bad.add_seconds(3_600), (bad, 0));
        assert_eq!(bad.sub_seconds(3_600), (bad, 0));
    }

    #[test]
    fn extreme_offsets_saturate_instead_of_overflowing() {
        let noon = Daytime::must(12, 0, 0);
        let (d, days) = noon.add_seconds(i64::MAX);
        assert!(d.is_valid());
        assert!(days > 0);

        let (d, days) = noon.add_seconds(i64::MIN);
        assert!(d.is_valid());
        assert!(days < 0);

        // Negating i64::MIN must not overflow either.
        let (d, _) = noon.sub_seconds(i64::MIN);
        assert!(d.is_valid());
        let (d, _) = noon.sub_duration(Duration::seconds(i64::MIN / 1_000));
        assert!(d.is_valid());

        let (d, days) = Daytime::END_OF_DAY.scale(i64::MIN);
        assert!(d.is_valid());
        assert!(days < 0);
    }

    #[test]
    fn sub_is_add_negated() {
        let (d, days) = Daytime::must(1, 0, 0).sub_seconds(7_200);
        assert_eq!((d, days), (Daytime::must(23, 0, 0), -1));
        assert_eq!(
            Daytime::must(10, 0, 0).sub_seconds(600),
            Daytime::must(10, 0, 0).add_seconds(-600)
        );
    }

    #[test]
    fn add_then_sub_returns_home() {
        for seconds in [0i64, 1, 3_600, 86_399, 86_400, 86_401, 10 * 86_400 + 7] {
            for start in [
                Daytime::START_OF_DAY,
                Daytime::must(6, 30, 0),
                Daytime::from_seconds(86_399),
            ] {
                let (there, d1) = start.add_seconds(seconds);
                let (back, d2) = there.add_seconds(-seconds);
                assert_eq!(back, start, "{start:?} +- {seconds}");
                assert_eq!(d1 + d2, 0, "{start:?} +- {seconds}");
            }
        }
    }

    #[test]
    fn duration_arithmetic_truncates_to_whole_seconds() {
        let base = Daytime::must(10, 0, 0);
        let (d, days) = base.add_duration(Duration::minutes(90));
        assert_eq!((d, days), (Daytime::must(11, 30, 0), 0));

        let (d, days) = base.sub_duration(Duration::hours(11));
        assert_eq!((d, days), (Daytime::must(23, 0, 0), -1));

        // Sub-second parts are dropped, not rounded.
        let (d, _) = base.add_duration(Duration::milliseconds(1_999));
        assert_eq!(d, Daytime::must(10, 0, 1));
    }

    #[test]
    fn diff_basic() {
        assert_eq!(Daytime::must(2, 0, 0).diff(Daytime::must(1, 0, 0)), (3_600, 0));
        assert_eq!(Daytime::must(1, 0, 0).diff(Daytime::must(1, 0, 0)), (0, 0));
    }

    #[test]
    fn diff_negative_wraps_into_previous_day() {
        assert_eq!(
            Daytime::must(1, 0, 0).diff(Daytime::must(2, 0, 0)),
            (82_800, -1)
        );
    }

    #[test]
    fn diff_sentinel_table() {
        assert_eq!(Daytime::END_OF_DAY.diff(Daytime::START_OF_DAY), (0, 1));
        assert_eq!(Daytime::START_OF_DAY.diff(Daytime::END_OF_DAY), (0, -1));
        assert_eq!(Daytime::END_OF_DAY.diff(Daytime::END_OF_DAY), (0, 0));
        assert_eq!(
            Daytime::END_OF_DAY.diff(Daytime::must(23, 0, 0)),
            (3_600, 0)
        );
    }

    #[test]
    fn diff_on_invalid_input_is_zero() {
        let bad = Daytime::from_seconds(90_000);
        assert_eq!(bad.diff(Daytime::START_OF_DAY), (0, 0));
        assert_eq!(Daytime::START_OF_DAY.diff(bad), (0, 0));
    }

    #[test]
    fn scale_within_the_day() {
        let (d, days) = Daytime::must(3, 0, 0).scale(2);
        assert_eq!((d, days), (Daytime::must(6, 0, 0), 0));

        let (d, days) = Daytime::must(5, 0, 0).scale(0);
        assert_eq!((d, days), (Daytime::START_OF_DAY, 0));
    }

    #[test]
    fn scale_to_exactly_one_day_is_end_of_day() {
        let (d, days) = Daytime::must(12, 0, 0).scale(2);
        assert_eq!((d, days), (Daytime::END_OF_DAY, 0));
    }

    #[test]
    fn scale_crosses_days() {
        let (d, days) = Daytime::must(12, 0, 0).scale(3);
        assert_eq!((d, days), (Daytime::must(12, 0, 0), 1));

        let (d, days) = Daytime::must(1, 0, 0).scale(-1);
        assert_eq!((d, days), (Daytime::must(23, 0, 0), -1));

        let (d, days) = Daytime::must(12, 0, 0).scale(-2);
        assert_eq!((d, days), (Daytime::START_OF_DAY, -1));
    }

    #[test]
    fn scale_on_invalid_receiver_is_inert() {
        let bad = Daytime::from_seconds(90_000);
        assert_eq!(bad.scale(5), (bad, 0));
    }

    #[test]
    fn div_rem_basic() {
        let (q, r) = Daytime::from_seconds(43_200).div_rem(7).unwrap();
        assert_eq!(q, Daytime::from_seconds(6_171)); // 01:42:51
        assert_eq!(r, 3);

        let (q, r) = Daytime::END_OF_DAY.div_rem(2).unwrap();
        assert_eq!((q, r), (Daytime::from_seconds(43_200), 0));

        let (q, r) = Daytime::from_seconds(10).div_rem(86_400).unwrap();
        assert_eq!((q, r), (Daytime::START_OF_DAY, 10));
    }

    #[test]
    fn div_rem_by_one_is_identity() {
        let (q, r) = Daytime::END_OF_DAY.div_rem(1).unwrap();
        assert_eq!((q, r), (Daytime::END_OF_DAY, 0));
    }

    #[test]
    fn div_rem_rejects_zero_divisor() {
        let err = Daytime::must(12, 0, 0).div_rem(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DivisionByZero);
        assert_eq!(err.operation(), "div_rem");
    }

    #[test]
    fn div_rem_rejects_negative_divisors_via_quotient_range() {
        let err = Daytime::from_seconds(43_200).div_rem(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueOutOfRange);
        assert_eq!(err.value(), "-43200");
    }

    #[test]
    fn div_rem_on_invalid_receiver_is_inert() {
        let bad = Daytime::from_seconds(90_000);
        assert_eq!(bad.div_rem(7).unwrap(), (bad, 0));
        // The zero-divisor check still fires first.
        assert!(bad.div_rem(0).is_err());
    }

    #[test]
    fn div_rem_reconstructs_the_dividend() {
        for d in [
            Daytime::START_OF_DAY,
            Daytime::from_seconds(1),
            Daytime::from_seconds(43_200),
            Daytime::from_seconds(86_399),
            Daytime::END_OF_DAY,
        ] {
            for divisor in [1i64, 2, 7, 60, 3_600, 86_400, 100_000] {
                let (q, r) = d.div_rem(divisor).unwrap();
                assert_eq!(
                    i64::from(q.seconds()) * divisor + r,
                    i64::from(d.seconds()),
                    "{d:?} / {divisor}"
                );
                assert!(r >= 0 && r < divisor);
            }
        }
    }

    #[test]
    fn modulo_basic() {
        assert_eq!(
            Daytime::from_seconds(7_505).modulo(3_600).unwrap(),
            Daytime::from_seconds(305)
        );
        assert_eq!(
            Daytime::END_OF_DAY.modulo(7).unwrap(),
            Daytime::from_seconds(6)
        );
    }

    #[test]
    fn modulo_larger_than_day_never_wraps() {
        assert_eq!(
            Daytime::END_OF_DAY.modulo(100_000).unwrap(),
            Daytime::END_OF_DAY
        );
        assert_eq!(
            Daytime::must(12, 0, 0).modulo(100_000).unwrap(),
            Daytime::must(12, 0, 0)
        );
    }

    #[test]
    fn modulo_rejects_non_positive_modulus() {
        for modulus in [0i64, -1, -86_400] {
            let err = Daytime::must(12, 0, 0).modulo(modulus).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidModulus, "modulus {modulus}");
            assert_eq!(err.operation(), "modulo");
        }
    }

    #[test]
    fn modulo_on_invalid_receiver_is_inert() {
        let bad = Daytime::from_seconds(90_000);
        assert_eq!(bad.modulo(7).unwrap(), bad);
    }
}
