// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Proleptic Gregorian calendar.
//!
//! The day count itself is anchored here: `Fixed(1)` is 0001-01-01. Years are
//! astronomical (year 0 exists and is a leap year).

use crate::arith::fldiv;
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::{Fixed, WeekAware, Weekday};

/// Proleptic Gregorian calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Gregorian;

/// Days before the first of each month in a common year.
pub(crate) const DAYS_BEFORE_MONTH: [i64; 12] =
    [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

pub(crate) const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

impl Gregorian {
    /// Day count of 0001-01-01.
    pub const EPOCH: Fixed = Fixed(1);

    /// Divisible by 4, and either not by 100 or by 400.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Day count of `year-month-day`; `month` must lie in `1..=12`.
    pub(crate) const fn fixed_from_parts(year: i64, month: u8, day: u8) -> Fixed {
        let prior = year - 1;
        let leap_shift = if month > 2 && Self::is_leap_year(year) {
            1
        } else {
            0
        };
        Fixed(
            Self::EPOCH.0 - 1
                + 365 * prior
                + fldiv(prior, 4)
                - fldiv(prior, 100)
                + fldiv(prior, 400)
                + DAYS_BEFORE_MONTH[(month - 1) as usize]
                + leap_shift
                + day as i64,
        )
    }

    /// Gregorian year containing `date`, by 400/100/4/1-year cycle decomposition.
    pub const fn year_from_fixed(date: Fixed) -> i64 {
        let d0 = date.0 - Self::EPOCH.0;
        let n400 = fldiv(d0, 146_097);
        let d1 = d0 - 146_097 * n400;
        let n100 = fldiv(d1, 36_524);
        let d2 = d1 - 36_524 * n100;
        let n4 = fldiv(d2, 1_461);
        let d3 = d2 - 1_461 * n4;
        let n1 = fldiv(d3, 365);
        let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
        if n100 == 4 || n1 == 4 {
            year
        } else {
            year + 1
        }
    }

    /// Days in `month` of `year`.
    pub const fn days_in_month(year: i64, month: u8) -> u8 {
        match month {
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// January 1st of `year`.
    #[inline]
    pub const fn new_year(year: i64) -> Fixed {
        Self::fixed_from_parts(year, 1, 1)
    }

    /// December 31st of `year`.
    #[inline]
    pub const fn year_end(year: i64) -> Fixed {
        Self::fixed_from_parts(year, 12, 31)
    }

    /// Ordinal day of `date` within its year, starting at 1.
    pub const fn day_number(date: Fixed) -> i64 {
        date.0 - Self::new_year(Self::year_from_fixed(date)).0 + 1
    }

    /// Days left in the year after `date`.
    pub const fn days_remaining(date: Fixed) -> i64 {
        Self::year_end(Self::year_from_fixed(date)).0 - date.0
    }

    /// The `n`-th `k` counted from `date` (see [`WeekAware::nth_k_day`]),
    /// e.g. the fourth Thursday from November 1st.
    pub fn nth_k_day(n: i64, k: Weekday, date: Ymd) -> Result<Fixed, CalendarError> {
        Ok(Self::fixed_from_fields(&date)?.nth_k_day(n, k))
    }
}

impl DateConvertible for Gregorian {
    const LABEL: &'static str = "Gregorian";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        Ok(Self::fixed_from_parts(fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        let year = Self::year_from_fixed(date);
        let prior_days = date - Self::new_year(year);
        let correction = if date < Self::fixed_from_parts(year, 3, 1) {
            0
        } else if Self::is_leap_year(year) {
            1
        } else {
            2
        };
        let month = fldiv(12 * (prior_days + correction) + 373, 367);
        let month = small(month);
        let day = date - Self::fixed_from_parts(year, month, 1) + 1;
        Ymd::new(year, month, small(day))
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = lookup(&MONTH_NAMES, "Gregorian months", i64::from(fields.month) - 1)?;
        Ok(format!("{} {} {}", fields.day, month, fields.year))
    }
}
