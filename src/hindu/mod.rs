// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Hindu calendars
//!
//! | Marker | Fields | Arithmetic | Inverse |
//! |--------|--------|------------|---------|
//! | [`OldHinduSolar`] | [`Ymd`] | exact mean motions | closed form |
//! | [`OldHinduLunar`] | [`HinduLunarDate`] | exact mean motions | closed form |
//! | [`ModifiedHinduSolar<N>`] | [`Ymd`] | Surya-Siddhanta, `N` | bisection |
//! | [`ModifiedHinduLunar<N>`] | [`HinduLunarDate`] | Surya-Siddhanta, `N` | bisection |
//!
//! `N` is the numeric mode of the [`engine`]: `f64` (the default) or
//! [`BigRational`](num_rational::BigRational) for bit-reproducible results.
//!
//! ```
//! use calendrica::hindu::{HinduLunarDate, ModifiedHinduLunar};
//! use calendrica::{Date, Fixed};
//!
//! let date = Date::<ModifiedHinduLunar>::from_fixed(Fixed(730_120));
//! assert_eq!(*date.fields(), HinduLunarDate::new(2056, 9, false, 25, false));
//! ```

use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendars::Julian;
use crate::date::{lookup, MonthDayYear, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

pub mod engine;
mod modified;
mod numeric;
mod old;

pub use modified::{ModifiedHinduLunar, ModifiedHinduSolar, LUNAR_ERA, SOLAR_ERA};
pub use numeric::{HinduConstants, HinduNumber};
pub use old::{OldHinduLunar, OldHinduSolar};

/// Onset of the Kali Yuga, 18 February 3102 B.C.E. on the Julian calendar.
pub const HINDU_EPOCH: Fixed = Julian::fixed_from_parts(-3102, 2, 18);

const SOLAR_MONTHS: [&str; 12] = [
    "Mesha", "Vrishabha", "Mithuna", "Karka", "Simha", "Kanya", "Tula", "Vrischika", "Dhanu",
    "Makara", "Kumbha", "Mina",
];

const LUNAR_MONTHS: [&str; 12] = [
    "Chaitra", "Vaisakha", "Jyaishtha", "Ashadha", "Sravana", "Bhadrapada", "Asvina", "Kartika",
    "Margasirsha", "Pausha", "Magha", "Phalguna",
];

/// Fields of a Hindu lunisolar date.
///
/// A leap (adhika) month precedes the regular month of the same number; a
/// leap day repeats the lunar day of the previous sunrise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HinduLunarDate {
    pub year: i64,
    pub month: u8,
    pub leap_month: bool,
    pub day: u8,
    pub leap_day: bool,
}

impl HinduLunarDate {
    pub const fn new(year: i64, month: u8, leap_month: bool, day: u8, leap_day: bool) -> Self {
        Self {
            year,
            month,
            leap_month,
            day,
            leap_day,
        }
    }

    /// Chronological sort key.
    #[inline]
    pub(crate) fn key(&self) -> (i64, u8, bool, u8, bool) {
        (
            self.year,
            self.month,
            !self.leap_month,
            self.day,
            self.leap_day,
        )
    }

    /// Whether `self` falls strictly before `other` in the calendar.
    #[inline]
    pub fn precedes(&self, other: &Self) -> bool {
        self < other
    }
}

impl Ord for HinduLunarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for HinduLunarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl MonthDayYear for HinduLunarDate {
    #[inline]
    fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for HinduLunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}{}-{}{}",
            self.year,
            self.month,
            if self.leap_month { "L" } else { "" },
            self.day,
            if self.leap_day { "L" } else { "" },
        )
    }
}

fn render_solar(fields: &Ymd, era: &str) -> Result<String, CalendarError> {
    let month = lookup(&SOLAR_MONTHS, "Hindu solar months", i64::from(fields.month) - 1)?;
    Ok(format!("{} {} {} {}", fields.day, month, fields.year, era))
}

fn render_lunar(fields: &HinduLunarDate, era: &str) -> Result<String, CalendarError> {
    let month = lookup(&LUNAR_MONTHS, "Hindu lunar months", i64::from(fields.month) - 1)?;
    Ok(format!(
        "{}{} {}{} {} {}",
        fields.day,
        if fields.leap_day { " (leap day)" } else { "" },
        if fields.leap_month { "Adhika " } else { "" },
        month,
        fields.year,
        era,
    ))
}
