// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Arithmetic Hebrew calendar.
//!
//! Months are numbered from Nisan (1); the year begins on 1 Tishri (7).
//! Leap years insert Adar II as month 13. New year is the molad of Tishri
//! postponed by the delay rules, and the lengths of Marheshvan and Kislev
//! absorb the resulting variation so every year has 353, 354, 355, 383,
//! 384 or 385 days.

use crate::arith::{fldiv, modulo};
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::julian::Julian;

/// Arithmetic Hebrew calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Hebrew;

pub const NISAN: u8 = 1;
pub const TISHRI: u8 = 7;
pub const MARHESHVAN: u8 = 8;
pub const KISLEV: u8 = 9;
pub const ADAR: u8 = 12;
pub const ADAR_II: u8 = 13;

const MONTH_NAMES: [&str; 13] = [
    "Nisan",
    "Iyyar",
    "Sivan",
    "Tammuz",
    "Av",
    "Elul",
    "Tishri",
    "Marheshvan",
    "Kislev",
    "Tevet",
    "Shevat",
    "Adar",
    "Adar II",
];

impl Hebrew {
    /// Julian −3761-10-07 (1 Tishri A.M. 1).
    pub const EPOCH: Fixed = Julian::fixed_from_parts(-3761, 10, 7);

    /// Seven leap years in every 19-year cycle.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        modulo(7 * year + 1, 19) < 7
    }

    /// Adar II in leap years, Adar otherwise.
    #[inline]
    pub const fn last_month_of_year(year: i64) -> u8 {
        if Self::is_leap_year(year) {
            ADAR_II
        } else {
            ADAR
        }
    }

    /// Days from the epoch to the (once-postponed) molad of Tishri of `year`.
    const fn elapsed_days(year: i64) -> i64 {
        let months_elapsed = fldiv(235 * year - 234, 19);
        let parts_elapsed = 12_084 + 13_753 * months_elapsed;
        let days = 29 * months_elapsed + fldiv(parts_elapsed, 25_920);
        if modulo(3 * (days + 1), 7) < 3 {
            days + 1
        } else {
            days
        }
    }

    /// Further delay of new year keeping adjacent years within legal lengths.
    const fn year_length_correction(year: i64) -> i64 {
        let ny0 = Self::elapsed_days(year - 1);
        let ny1 = Self::elapsed_days(year);
        let ny2 = Self::elapsed_days(year + 1);
        if ny2 - ny1 == 356 {
            2
        } else if ny1 - ny0 == 382 {
            1
        } else {
            0
        }
    }

    /// 1 Tishri of `year`.
    #[inline]
    pub const fn new_year(year: i64) -> Fixed {
        Fixed(Self::EPOCH.0 + Self::elapsed_days(year) + Self::year_length_correction(year))
    }

    /// Length of `year` in days.
    #[inline]
    pub const fn days_in_year(year: i64) -> i64 {
        Self::new_year(year + 1).0 - Self::new_year(year).0
    }

    /// Marheshvan has 30 days in "complete" years.
    #[inline]
    pub const fn long_marheshvan(year: i64) -> bool {
        matches!(Self::days_in_year(year), 355 | 385)
    }

    /// Kislev has 29 days in "deficient" years.
    #[inline]
    pub const fn short_kislev(year: i64) -> bool {
        matches!(Self::days_in_year(year), 353 | 383)
    }

    /// Length of `month` in `year`.
    pub const fn last_day_of_month(month: u8, year: i64) -> u8 {
        let short = match month {
            2 | 4 | 6 | 10 | ADAR_II => true,
            ADAR => !Self::is_leap_year(year),
            MARHESHVAN => !Self::long_marheshvan(year),
            KISLEV => Self::short_kislev(year),
            _ => false,
        };
        if short {
            29
        } else {
            30
        }
    }

    /// Sum of the lengths of months `from..=to` of `year`.
    fn days_in_months(year: i64, from: u8, to: u8) -> i64 {
        (from..=to)
            .map(|m| i64::from(Self::last_day_of_month(m, year)))
            .sum()
    }

    fn fixed_from_parts(year: i64, month: u8, day: u8) -> Fixed {
        let mut days = Self::new_year(year) + (i64::from(day) - 1);
        if month < TISHRI {
            days += Self::days_in_months(year, TISHRI, Self::last_month_of_year(year));
            days += Self::days_in_months(year, NISAN, month - 1);
        } else {
            days += Self::days_in_months(year, TISHRI, month - 1);
        }
        days
    }
}

impl DateConvertible for Hebrew {
    const LABEL: &'static str = "Hebrew";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        let last = Self::last_month_of_year(fields.year);
        check_month(Self::LABEL, fields, fields.month, NISAN..=last)?;
        Ok(Self::fixed_from_parts(fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        // Mean year length is 35975351/98496 days.
        let approx = fldiv((date - Self::EPOCH) * 98_496, 35_975_351) + 1;
        let year = if Self::new_year(approx) <= date {
            approx
        } else {
            approx - 1
        };
        let mut month = if date < Self::fixed_from_parts(year, NISAN, 1) {
            TISHRI
        } else {
            NISAN
        };
        while month < Self::last_month_of_year(year)
            && date > Self::fixed_from_parts(year, month, Self::last_day_of_month(month, year))
        {
            month += 1;
        }
        let day = date - Self::fixed_from_parts(year, month, 1) + 1;
        Ymd::new(year, month, small(day))
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = if fields.month == ADAR && Self::is_leap_year(fields.year) {
            "Adar I"
        } else {
            lookup(&MONTH_NAMES, "Hebrew months", i64::from(fields.month) - 1)?
        };
        Ok(format!("{} {} {} A.M.", fields.day, month, fields.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::Gregorian;
    use crate::date::DateConvertible;

    #[test]
    fn epoch() {
        assert_eq!(Hebrew::EPOCH, Fixed(-1_373_427));
    }

    #[test]
    fn year_lengths_and_month_variants() {
        assert_eq!(Hebrew::days_in_year(5760), 385);
        assert!(Hebrew::long_marheshvan(5760));
        assert_eq!(Hebrew::days_in_year(5761), 353);
        assert!(Hebrew::short_kislev(5761));
        assert_eq!(Hebrew::days_in_year(5762), 354);
        assert_eq!(Hebrew::days_in_year(5784), 383);
        assert_eq!(Hebrew::last_day_of_month(KISLEV, 5784), 29);
        assert_eq!(Hebrew::last_day_of_month(MARHESHVAN, 5785), 30);
    }

    #[test]
    fn rosh_hashanah() {
        assert_eq!(
            Gregorian::fields_from_fixed(Hebrew::new_year(5785)),
            Ymd::new(2024, 10, 3)
        );
        assert_eq!(
            Gregorian::fields_from_fixed(Hebrew::new_year(5784)),
            Ymd::new(2023, 9, 16)
        );
    }

    #[test]
    fn adar_ii_only_in_leap_years() {
        assert!(Hebrew::is_leap_year(5784));
        assert_eq!(Hebrew::last_month_of_year(5784), ADAR_II);
        assert!(Hebrew::fixed_from_fields(&Ymd::new(5785, ADAR_II, 1)).is_err());
        let march_20 = Gregorian::fixed_from_fields(&Ymd::new(2024, 3, 20)).unwrap();
        assert_eq!(Hebrew::fields_from_fixed(march_20), Ymd::new(5784, ADAR_II, 10));
    }

    #[test]
    fn render_names() {
        assert_eq!(Hebrew::render(&Ymd::new(5760, 10, 23)).unwrap(), "23 Tevet 5760 A.M.");
        assert_eq!(Hebrew::render(&Ymd::new(5784, 12, 1)).unwrap(), "1 Adar I 5784 A.M.");
        assert_eq!(Hebrew::render(&Ymd::new(5785, 12, 1)).unwrap(), "1 Adar 5785 A.M.");
    }
}
