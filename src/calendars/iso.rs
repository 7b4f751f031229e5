// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO 8601 week dates.

use std::fmt;

use crate::arith::{amod, fldiv};
use crate::date::{small, DateConvertible};
use crate::error::CalendarError;
use crate::fixed::{Fixed, WeekAware, Weekday};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::gregorian::Gregorian;

/// ISO week-date calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Iso;

/// Year, week and day of week (Monday = 1 … Sunday = 7).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IsoDate {
    pub year: i64,
    pub week: u8,
    pub day: u8,
}

impl IsoDate {
    #[inline]
    pub const fn new(year: i64, week: u8, day: u8) -> Self {
        Self { year, week, day }
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}-{}", self.year, self.week, self.day)
    }
}

impl Iso {
    /// Monday of week 1: the week containing January 4th.
    #[inline]
    fn first_monday(year: i64) -> Fixed {
        Gregorian::fixed_from_parts(year, 1, 4).k_day_on_or_before(Weekday::Monday)
    }

    fn fixed_from_parts(year: i64, week: u8, day: u8) -> Fixed {
        Self::first_monday(year) + 7 * (i64::from(week) - 1) + i64::from(day) - 1
    }

    /// 53 when the year starts on a Thursday (or a Wednesday in leap years), 52 otherwise.
    pub fn weeks_in_year(year: i64) -> u8 {
        small((Self::first_monday(year + 1) - Self::first_monday(year)) / 7)
    }
}

impl DateConvertible for Iso {
    const LABEL: &'static str = "ISO";
    type Fields = IsoDate;

    fn fixed_from_fields(fields: &IsoDate) -> Result<Fixed, CalendarError> {
        if !(1..=7).contains(&fields.day) || fields.week == 0 {
            return Err(CalendarError::inconsistent(Self::LABEL, fields));
        }
        Ok(Self::fixed_from_parts(fields.year, fields.week, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> IsoDate {
        let approx = Gregorian::year_from_fixed(date - 3);
        let year = if date >= Self::fixed_from_parts(approx + 1, 1, 1) {
            approx + 1
        } else {
            approx
        };
        let week = fldiv(date - Self::fixed_from_parts(year, 1, 1), 7) + 1;
        IsoDate::new(year, small(week), small(amod(date.value(), 7)))
    }

    fn render(fields: &IsoDate) -> Result<String, CalendarError> {
        let weekday = Weekday::name_of(i64::from(fields.day) % 7)?;
        Ok(format!("{weekday} of week {} of {}", fields.week, fields.year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gregorian(year: i64, month: u8, day: u8) -> Fixed {
        Gregorian::fixed_from_parts(year, month, day)
    }

    #[test]
    fn millennium_falls_in_the_previous_iso_year() {
        assert_eq!(Iso::fields_from_fixed(Fixed(730_120)), IsoDate::new(1999, 52, 6));
    }

    #[test]
    fn year_boundaries() {
        assert_eq!(Iso::fields_from_fixed(gregorian(2021, 1, 3)), IsoDate::new(2020, 53, 7));
        assert_eq!(Iso::fields_from_fixed(gregorian(2008, 12, 29)), IsoDate::new(2009, 1, 1));
        assert_eq!(Iso::fields_from_fixed(gregorian(2026, 12, 31)), IsoDate::new(2026, 53, 4));
    }

    #[test]
    fn long_years() {
        for year in [2004, 2009, 2015, 2020, 2026] {
            assert_eq!(Iso::weeks_in_year(year), 53, "{year}");
        }
        assert_eq!(Iso::weeks_in_year(2021), 52);
        assert_eq!(Iso::weeks_in_year(2023), 52);
    }

    #[test]
    fn day_must_be_a_weekday_number() {
        assert!(Iso::fixed_from_fields(&IsoDate::new(2000, 1, 0)).is_err());
        assert!(Iso::fixed_from_fields(&IsoDate::new(2000, 1, 8)).is_err());
    }

    #[test]
    fn render_forms() {
        assert_eq!(Iso::render(&IsoDate::new(1999, 52, 6)).unwrap(), "Saturday of week 52 of 1999");
        assert_eq!(Iso::render(&IsoDate::new(2020, 53, 7)).unwrap(), "Sunday of week 53 of 2020");
        assert_eq!(IsoDate::new(2009, 1, 1).to_string(), "2009-W01-1");
    }
}
