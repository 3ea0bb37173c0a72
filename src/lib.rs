// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Daytime Module
//!
//! This crate provides a value type for a moment within a single day,
//! counted in whole seconds since midnight.
//!
//! # Core types
//!
//! - [`Daytime`] — seconds since midnight in `[0, 86400]`, where `86400` is
//!   the distinct 24:00:00 end-of-day sentinel.
//! - [`Error`] / [`ErrorKind`] — structured errors carrying the failing
//!   operation, the offending value, and a matchable root cause.
//!
//! # The end-of-day sentinel
//!
//! Midnight has two representations: [`Daytime::START_OF_DAY`] (0,
//! 00:00:00) opens a day and [`Daytime::END_OF_DAY`] (86400, 24:00:00)
//! closes it.  They are never collapsed — `END_OF_DAY` orders strictly
//! after every other valid value, and arithmetic treats an exact one-day
//! step forward from zero as landing on `END_OF_DAY` of the same day
//! rather than `START_OF_DAY` of the next:
//!
//! ```
//! use daytime::Daytime;
//!
//! let (d, days) = Daytime::START_OF_DAY.add_seconds(86_400);
//! assert_eq!((d, days), (Daytime::END_OF_DAY, 0));
//!
//! // 23:00 plus two hours crosses into the next day.
//! let (d, days) = Daytime::must(23, 0, 0).add_seconds(7_200);
//! assert_eq!((d, days), (Daytime::must(1, 0, 0), 1));
//! ```
//!
//! # Operations
//!
//! | Concern | Operations |
//! |---------|------------|
//! | Validity | [`Daytime::is_valid`], [`Daytime::is_end_of_day`], [`Daytime::is_in_day`] |
//! | Construction | [`Daytime::new`], [`Daytime::must`], [`Daytime::from_datetime`], [`str::parse`](std::str::FromStr) |
//! | Components | [`Daytime::clock`], [`Daytime::hour`], [`Daytime::minute`], [`Daytime::second`], [`Daytime::duration`] |
//! | Comparison | [`Daytime::before`], [`Daytime::after`], [`Daytime::between`], derived `Ord` |
//! | Arithmetic | [`Daytime::add_seconds`], [`Daytime::sub_seconds`], [`Daytime::scale`], [`Daytime::diff`], [`Daytime::div_rem`], [`Daytime::modulo`] |
//! | Calendar | [`Daytime::to_datetime`], [`Daytime::since`], [`Daytime::until`], [`Daytime::format`] |
//!
//! # Calendar interop
//!
//! `Daytime` carries no date or zone of its own.  Placing one on the
//! calendar borrows both from a caller-supplied `chrono::DateTime`, and all
//! date, zone, and DST handling stays chrono's business.
//!
//! # Serde
//!
//! With the `serde` feature enabled, `Daytime` serializes as its canonical
//! text form and deserializes from either accepted text form.

mod arith;
mod convert;
mod daytime;
mod error;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use daytime::Daytime;
pub use error::{Error, ErrorKind};
