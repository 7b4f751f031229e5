// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Arithmetic Islamic calendar: alternating 30/29-day months and a 30-year
//! cycle of 11 leap years.

use crate::arith::{fldiv, modulo};
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::julian::Julian;

/// Arithmetic Islamic calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Islamic;

const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi I",
    "Rabi II",
    "Jumada I",
    "Jumada II",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qa'da",
    "Dhu al-Hijja",
];

impl Islamic {
    /// Julian 0622-07-16.
    pub const EPOCH: Fixed = Julian::fixed_from_parts(622, 7, 16);

    /// Leap years (355 days) are those with `(14 + 11·year) mod 30 < 11`.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        modulo(14 + 11 * year, 30) < 11
    }

    const fn fixed_from_parts(year: i64, month: u8, day: u8) -> Fixed {
        let month = month as i64;
        Fixed(
            day as i64
                + fldiv(59 * (month - 1) + 1, 2)
                + (year - 1) * 354
                + fldiv(3 + 11 * year, 30)
                + Self::EPOCH.0
                - 1,
        )
    }
}

impl DateConvertible for Islamic {
    const LABEL: &'static str = "Islamic";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        Ok(Self::fixed_from_parts(fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        let year = fldiv(30 * (date - Self::EPOCH) + 10_646, 10_631);
        let prior_days = date - Self::fixed_from_parts(year, 1, 1);
        let month = small(fldiv(11 * prior_days + 330, 325));
        let day = date - Self::fixed_from_parts(year, month, 1) + 1;
        Ymd::new(year, month, small(day))
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = lookup(&MONTH_NAMES, "Islamic months", i64::from(fields.month) - 1)?;
        Ok(format!("{} {} {} A.H.", fields.day, month, fields.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch() {
        assert_eq!(Islamic::EPOCH, Fixed(227_015));
        assert_eq!(Islamic::fields_from_fixed(Islamic::EPOCH), Ymd::new(1, 1, 1));
    }

    #[test]
    fn leap_years_of_the_first_cycle() {
        let leaps: Vec<i64> = (1..=30).filter(|&y| Islamic::is_leap_year(y)).collect();
        assert_eq!(leaps, vec![2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);
    }

    #[test]
    fn dhu_al_hijja_has_thirty_days_in_leap_years() {
        let last = Islamic::fixed_from_fields(&Ymd::new(1420, 12, 30)).unwrap();
        assert_eq!(Islamic::fields_from_fixed(last), Ymd::new(1420, 12, 30));
        let common = Islamic::fixed_from_fields(&Ymd::new(1421, 12, 30)).unwrap();
        assert_eq!(Islamic::fields_from_fixed(common), Ymd::new(1422, 1, 1));
    }

    #[test]
    fn millennium() {
        assert_eq!(Islamic::fields_from_fixed(Fixed(730_120)), Ymd::new(1420, 9, 24));
        assert_eq!(
            Islamic::render(&Ymd::new(1420, 9, 24)).unwrap(),
            "24 Ramadan 1420 A.H."
        );
    }
}
