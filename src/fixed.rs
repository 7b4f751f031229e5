// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The fixed day count and week arithmetic.
//!
//! [`Fixed`] is the shared integer timeline every calendar converts through:
//! day 1 is Monday, 0001-01-01 on the proleptic Gregorian calendar, which
//! makes it numerically identical to chrono's `num_days_from_ce`.

use chrono::{Datelike, NaiveDate};
use qtty::Days;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arith::modulo;
use crate::error::CalendarError;
use crate::instant::Time;
use crate::scales::{JD, RD};

// ═══════════════════════════════════════════════════════════════════════════
// Fixed
// ═══════════════════════════════════════════════════════════════════════════

/// A signed day number on the shared timeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Fixed(pub i64);

impl Fixed {
    /// Wrap a raw day count.
    #[inline]
    pub const fn new(days: i64) -> Self {
        Self(days)
    }

    /// The raw day count.
    #[inline]
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Fixed day of the Julian day *number* `jdn` (the day starting at noon
    /// before `jdn` ends).
    #[inline]
    pub const fn from_julian_day_number(jdn: i64) -> Self {
        Self(jdn - 1_721_425)
    }

    /// The day containing `moment`.
    #[inline]
    pub fn from_moment(moment: Time<RD>) -> Self {
        Self(moment.value().floor() as i64)
    }

    /// Midnight opening this day.
    #[inline]
    pub fn to_moment(&self) -> Time<RD> {
        Time::<RD>::new(self.0 as f64)
    }

    /// Julian day of midnight opening this day (an `x.5` value).
    #[inline]
    pub fn to_julian_day(&self) -> Time<JD> {
        self.to_moment().to::<JD>()
    }

    /// Convert to a chrono date, if inside chrono's range.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let days = i32::try_from(self.0).ok()?;
        NaiveDate::from_num_days_from_ce_opt(days)
    }
}

impl From<NaiveDate> for Fixed {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self(i64::from(date.num_days_from_ce()))
    }
}

impl From<i64> for Fixed {
    #[inline]
    fn from(days: i64) -> Self {
        Self(days)
    }
}

impl From<Fixed> for i64 {
    #[inline]
    fn from(date: Fixed) -> Self {
        date.0
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RD {}", self.0)
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl Add<i64> for Fixed {
    type Output = Self;
    #[inline]
    fn add(self, rhs: i64) -> Self::Output {
        Self(self.0 + rhs)
    }
}

impl AddAssign<i64> for Fixed {
    #[inline]
    fn add_assign(&mut self, rhs: i64) {
        self.0 += rhs;
    }
}

impl Sub<i64> for Fixed {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: i64) -> Self::Output {
        Self(self.0 - rhs)
    }
}

impl SubAssign<i64> for Fixed {
    #[inline]
    fn sub_assign(&mut self, rhs: i64) {
        self.0 -= rhs;
    }
}

impl Sub for Fixed {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.0 - rhs.0
    }
}

impl Add<Days> for Fixed {
    type Output = Time<RD>;
    #[inline]
    fn add(self, rhs: Days) -> Self::Output {
        self.to_moment() + rhs
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Weekday
// ═══════════════════════════════════════════════════════════════════════════

/// Day of the week, numbered as `fixed mod 7`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Weekday {
    /// All seven days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday of any integer, reduced modulo 7.
    #[inline]
    pub const fn from_index(index: i64) -> Self {
        Self::ALL[modulo(index, 7) as usize]
    }

    /// Numeric value, Sunday = 0.
    #[inline]
    pub const fn index(self) -> i64 {
        self as i64
    }

    /// English name of the day.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// English name of the weekday with index `index`, failing outside `0..7`.
    pub fn name_of(index: i64) -> Result<&'static str, CalendarError> {
        crate::date::lookup(&WEEKDAY_NAMES, "weekdays", index)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// WeekAware
// ═══════════════════════════════════════════════════════════════════════════

/// Weekday arithmetic for anything that sits on the fixed day count.
///
/// Every method is expressed through [`k_day_on_or_before`](Self::k_day_on_or_before)
/// applied to a shifted day.
pub trait WeekAware {
    /// The day this value denotes.
    fn day_count(&self) -> Fixed;

    /// Day of the week.
    #[inline]
    fn weekday(&self) -> Weekday {
        Weekday::from_index(self.day_count().0)
    }

    /// Latest `k` on or before this day.
    #[inline]
    fn k_day_on_or_before(&self, k: Weekday) -> Fixed {
        let date = self.day_count();
        date - modulo(date.0 - k.index(), 7)
    }

    /// Earliest `k` on or after this day.
    #[inline]
    fn k_day_on_or_after(&self, k: Weekday) -> Fixed {
        (self.day_count() + 6).k_day_on_or_before(k)
    }

    /// The `k` closest to this day.
    #[inline]
    fn k_day_nearest(&self, k: Weekday) -> Fixed {
        (self.day_count() + 3).k_day_on_or_before(k)
    }

    /// Latest `k` strictly before this day.
    #[inline]
    fn k_day_before(&self, k: Weekday) -> Fixed {
        (self.day_count() - 1).k_day_on_or_before(k)
    }

    /// Earliest `k` strictly after this day.
    #[inline]
    fn k_day_after(&self, k: Weekday) -> Fixed {
        (self.day_count() + 7).k_day_on_or_before(k)
    }

    /// The `n`-th `k` counting forward from this day (`n > 0`) or backward
    /// from it (`n < 0`), the day itself included.
    ///
    /// `n == 0` yields the first `k` strictly after.
    #[inline]
    fn nth_k_day(&self, n: i64, k: Weekday) -> Fixed {
        if n > 0 {
            self.k_day_before(k) + 7 * n
        } else {
            self.k_day_after(k) + 7 * n
        }
    }
}

impl WeekAware for Fixed {
    #[inline]
    fn day_count(&self) -> Fixed {
        *self
    }
}
