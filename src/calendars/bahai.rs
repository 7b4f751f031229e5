// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Arithmetic Bahá'í (Badí') calendar, tied to the Gregorian calendar.
//!
//! Years are grouped in 19-year *Váḥids* and 361-year *Kull-i-Shay'*. Each
//! year starts on Gregorian March 21 and has nineteen 19-day months; the
//! intercalary days of Ayyám-i-Há (four or five, following the leap status
//! of the next Gregorian year) sit between months 18 and 19 and are
//! represented here as month `0`.

use std::fmt;

use crate::arith::{fldiv, modulo};
use crate::date::{lookup, small, DateConvertible};
use crate::error::CalendarError;
use crate::fixed::Fixed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::gregorian::Gregorian;

/// Bahá'í calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bahai;

/// Month number used for the intercalary days.
pub const AYYAM_I_HA: u8 = 0;

/// Fields of a Bahá'í date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BahaiDate {
    /// Kull-i-Shay' (361-year period), from 1.
    pub major: i64,
    /// Váḥid (19-year cycle) within the major period, `1..=19`.
    pub cycle: u8,
    /// Year within the cycle, `1..=19`.
    pub year: u8,
    /// Month `1..=19`, or [`AYYAM_I_HA`].
    pub month: u8,
    pub day: u8,
}

impl BahaiDate {
    pub const fn new(major: i64, cycle: u8, year: u8, month: u8, day: u8) -> Self {
        Self {
            major,
            cycle,
            year,
            month,
            day,
        }
    }
}

const MONTH_NAMES: [&str; 19] = [
    "Baha", "Jalal", "Jamal", "'Azamat", "Nur", "Rahmat", "Kalimat", "Kamal", "Asma'", "'Izzat",
    "Mashiyyat", "'Ilm", "Qudrat", "Qawl", "Masa'il", "Sharaf", "Sultan", "Mulk", "'Ala'",
];

const YEAR_NAMES: [&str; 19] = [
    "Alif", "Ba", "Ab", "Dal", "Bab", "Vav", "Abad", "Jad", "Baha", "Hubb", "Bahhaj", "Javab",
    "Ahad", "Vahhab", "Vidad", "Badi", "Bahi", "Abha", "Vahid",
];

impl Bahai {
    /// Gregorian 1844-03-21.
    pub const EPOCH: Fixed = Gregorian::fixed_from_parts(1844, 3, 21);

    /// Gregorian year in which Bahá'í year `(major, cycle, year)` begins.
    #[inline]
    const fn gregorian_year(major: i64, cycle: u8, year: u8) -> i64 {
        361 * (major - 1) + 19 * (cycle as i64 - 1) + year as i64 - 1 + 1844
    }

    /// Number of intercalary days in the year beginning in Gregorian `gregorian_year`.
    #[inline]
    pub const fn ayyam_i_ha_days(gregorian_year: i64) -> u8 {
        if Gregorian::is_leap_year(gregorian_year + 1) {
            5
        } else {
            4
        }
    }

    fn fixed_from_parts(fields: &BahaiDate) -> Fixed {
        let g_year = Self::gregorian_year(fields.major, fields.cycle, fields.year);
        let month_offset = match fields.month {
            AYYAM_I_HA => 342,
            19 => 342 + i64::from(Self::ayyam_i_ha_days(g_year)),
            month => 19 * (i64::from(month) - 1),
        };
        Gregorian::fixed_from_parts(g_year, 3, 20) + month_offset + i64::from(fields.day)
    }
}

impl DateConvertible for Bahai {
    const LABEL: &'static str = "Bahai";
    type Fields = BahaiDate;

    fn fixed_from_fields(fields: &BahaiDate) -> Result<Fixed, CalendarError> {
        if fields.month > 19 || !(1..=19).contains(&fields.cycle) || !(1..=19).contains(&fields.year)
        {
            return Err(CalendarError::inconsistent(Self::LABEL, fields));
        }
        Ok(Self::fixed_from_parts(fields))
    }

    fn fields_from_fixed(date: Fixed) -> BahaiDate {
        let g_year = Gregorian::year_from_fixed(date);
        let start = Self::gregorian_year(1, 1, 1);
        let years = g_year - start
            - if date <= Gregorian::fixed_from_parts(g_year, 3, 20) {
                1
            } else {
                0
            };
        let major = fldiv(years, 361) + 1;
        let cycle = small(fldiv(modulo(years, 361), 19) + 1);
        let year = small(modulo(years, 19) + 1);
        let first_of = |month: u8| Self::fixed_from_parts(&BahaiDate::new(major, cycle, year, month, 1));
        let month = if date >= first_of(19) {
            19
        } else if date >= first_of(AYYAM_I_HA) {
            AYYAM_I_HA
        } else {
            small(fldiv(date - first_of(1), 19) + 1)
        };
        let day = date - first_of(month) + 1;
        BahaiDate::new(major, cycle, year, month, small(day))
    }

    fn render(fields: &BahaiDate) -> Result<String, CalendarError> {
        let month = if fields.month == AYYAM_I_HA {
            "Ayyam-i-Ha"
        } else {
            lookup(&MONTH_NAMES, "Bahai months", i64::from(fields.month) - 1)?
        };
        let year = lookup(&YEAR_NAMES, "Bahai years", i64::from(fields.year) - 1)?;
        Ok(format!(
            "{} {}, year {} of Vahid {} of Kull-i-Shay {}",
            fields.day, month, year, fields.cycle, fields.major
        ))
    }
}

impl fmt::Display for BahaiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.major, self.cycle, self.year, self.month, self.day
        )
    }
}
