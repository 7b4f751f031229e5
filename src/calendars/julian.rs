// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian calendar, with historical year numbering (no year zero).

use crate::arith::{fldiv, modulo};
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::gregorian::{DAYS_BEFORE_MONTH, MONTH_NAMES};

/// Julian calendar marker. Year `-1` (1 B.C.E.) is followed by year `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Julian;

impl Julian {
    /// Day count of Julian 0001-01-01 (Gregorian 0000-12-30).
    pub const EPOCH: Fixed = Fixed(-1);

    /// Every fourth year, counting 1 B.C.E. as a leap year.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        modulo(year, 4) == if year > 0 { 0 } else { 3 }
    }

    /// Day count of `year-month-day`; `year` must be non-zero and `month` in `1..=12`.
    pub(crate) const fn fixed_from_parts(year: i64, month: u8, day: u8) -> Fixed {
        let y = if year < 0 { year + 1 } else { year };
        let prior = y - 1;
        let leap_shift = if month > 2 && Self::is_leap_year(year) {
            1
        } else {
            0
        };
        Fixed(
            Self::EPOCH.0 - 1
                + 365 * prior
                + fldiv(prior, 4)
                + DAYS_BEFORE_MONTH[(month - 1) as usize]
                + leap_shift
                + day as i64,
        )
    }

    /// Julian year containing `date`.
    pub const fn year_from_fixed(date: Fixed) -> i64 {
        let approx = fldiv(4 * (date.0 - Self::EPOCH.0) + 1464, 1461);
        if approx <= 0 {
            approx - 1
        } else {
            approx
        }
    }
}

impl DateConvertible for Julian {
    const LABEL: &'static str = "Julian";
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
        let prior_days = date - Self::fixed_from_parts(year, 1, 1);
        let correction = if date < Self::fixed_from_parts(year, 3, 1) {
            0
        } else if Self::is_leap_year(year) {
            1
        } else {
            2
        };
        let month = small(fldiv(12 * (prior_days + correction) + 373, 367));
        let day = date - Self::fixed_from_parts(year, month, 1) + 1;
        Ymd::new(year, month, small(day))
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = lookup(&MONTH_NAMES, "Julian months", i64::from(fields.month) - 1)?;
        if fields.year < 0 {
            Ok(format!("{} {} {} B.C.E.", fields.day, month, -fields.year))
        } else {
            Ok(format!("{} {} {} C.E.", fields.day, month, fields.year))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reform_boundary() {
        assert_eq!(
            Julian::fixed_from_fields(&Ymd::new(1582, 10, 5)).unwrap(),
            Fixed(577_736)
        );
    }

    #[test]
    fn no_year_zero() {
        assert!(Julian::fixed_from_fields(&Ymd::new(0, 1, 1)).is_err());
        let last_bce = Julian::fixed_from_fields(&Ymd::new(-1, 12, 31)).unwrap();
        assert_eq!(Julian::fields_from_fixed(last_bce + 1), Ymd::new(1, 1, 1));
        assert_eq!(last_bce + 1, Julian::EPOCH);
    }

    #[test]
    fn leap_rule_shifts_before_the_era() {
        assert!(Julian::is_leap_year(1900));
        assert!(Julian::is_leap_year(-1));
        assert!(Julian::is_leap_year(-5));
        assert!(!Julian::is_leap_year(-4));
        assert!(!Julian::is_leap_year(1));
    }

    #[test]
    fn ancient_date() {
        assert_eq!(Julian::fields_from_fixed(Fixed(-214_193)), Ymd::new(-587, 7, 30));
    }

    #[test]
    fn render_era() {
        assert_eq!(Julian::render(&Ymd::new(-587, 7, 30)).unwrap(), "30 July 587 B.C.E.");
        assert_eq!(Julian::render(&Ymd::new(1945, 10, 30)).unwrap(), "30 October 1945 C.E.");
    }
}
