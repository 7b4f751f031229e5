// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Arithmetic Persian (Solar Hijri) calendar on the 2820-year grand cycle.
//!
//! Six 31-day months, five 30-day months and a final month of 29 or 30
//! days. Leap years follow the 2820-year cycle rule, which agrees with
//! the observed (astronomical) calendar for most but not all modern years.

use crate::arith::{fldiv, modulo};
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::julian::Julian;

/// Arithmetic Persian calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Persian;

const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

/// Days in one 2820-year grand cycle.
const GRAND_CYCLE_DAYS: i64 = 1_029_983;

/// Years elapsed since 474 A.P. (there is no year 0) and the
/// corresponding year inside the grand cycle, in `474..3294`.
#[inline]
const fn cycle_year(year: i64) -> (i64, i64) {
    let y = if year > 0 { year - 474 } else { year - 473 };
    (y, modulo(y, 2820) + 474)
}

impl Persian {
    /// Julian 0622-03-19.
    pub const EPOCH: Fixed = Julian::fixed_from_parts(622, 3, 19);

    /// 683 leap years per 2820-year grand cycle.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        let (_, year) = cycle_year(year);
        modulo((year + 38) * 682, 2816) < 682
    }

    const fn fixed_from_parts(year: i64, month: u8, day: u8) -> Fixed {
        let (y, year) = cycle_year(year);
        let month = month as i64;
        let month_days = if month <= 7 {
            31 * (month - 1)
        } else {
            30 * (month - 1) + 6
        };
        Fixed(
            Self::EPOCH.0 - 1
                + GRAND_CYCLE_DAYS * fldiv(y, 2820)
                + 365 * (year - 1)
                + fldiv(682 * year - 110, 2816)
                + month_days
                + day as i64,
        )
    }

    /// Persian year containing `date`.
    pub const fn year_from_fixed(date: Fixed) -> i64 {
        let d0 = date.0 - Self::fixed_from_parts(475, 1, 1).0;
        let n2820 = fldiv(d0, GRAND_CYCLE_DAYS);
        let d1 = modulo(d0, GRAND_CYCLE_DAYS);
        let y2820 = if d1 == GRAND_CYCLE_DAYS - 1 {
            2820
        } else {
            fldiv(2816 * d1 + 1_031_337, 1_028_522)
        };
        let year = 474 + 2820 * n2820 + y2820;
        if year > 0 {
            year
        } else {
            year - 1
        }
    }
}

impl DateConvertible for Persian {
    const LABEL: &'static str = "Persian";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        if fields.year == 0 {
            return Err(CalendarError::inconsistent(Self::LABEL, fields));
        }
        Ok(Self::fixed_from_parts(fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        let year = Self::year_from_fixed(date);
        let day_of_year = 1 + (date - Self::fixed_from_parts(year, 1, 1));
        let month = if day_of_year <= 186 {
            -fldiv(-day_of_year, 31)
        } else {
            -fldiv(-(day_of_year - 6), 30)
        };
        let month = small(month);
        let day = date - Self::fixed_from_parts(year, month, 1) + 1;
        Ymd::new(year, month, small(day))
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = lookup(&MONTH_NAMES, "Persian months", i64::from(fields.month) - 1)?;
        Ok(format!("{} {} {} A.P.", fields.day, month, fields.year))
    }
}
