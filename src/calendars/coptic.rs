// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Coptic and Ethiopic calendars: twelve 30-day months plus a five or six
//! day thirteenth month. The two differ only in their epoch.

use crate::arith::{fldiv, modulo};
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::julian::Julian;

/// Coptic (Era of the Martyrs) calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Coptic;

/// Ethiopic calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Ethiopic;

const COPTIC_MONTHS: [&str; 13] = [
    "Thoout", "Paope", "Athor", "Koiak", "Tobe", "Meshir", "Paremotep", "Parmoute", "Pashons",
    "Paone", "Epep", "Mesore", "Epagomene",
];

const ETHIOPIC_MONTHS: [&str; 13] = [
    "Maskaram", "Teqemt", "Hedar", "Takhsas", "Ter", "Yakatit", "Magabit", "Miyazya", "Genbot",
    "Sane", "Hamle", "Nehase", "Paguemen",
];

#[inline]
const fn fixed_from_parts(epoch: Fixed, year: i64, month: u8, day: u8) -> Fixed {
    Fixed(epoch.0 - 1 + 365 * (year - 1) + fldiv(year, 4) + 30 * (month as i64 - 1) + day as i64)
}

fn fields_from_fixed(epoch: Fixed, date: Fixed) -> Ymd {
    let year = fldiv(4 * (date - epoch) + 1463, 1461);
    let month = small(fldiv(date - fixed_from_parts(epoch, year, 1, 1), 30) + 1);
    let day = date - fixed_from_parts(epoch, year, month, 1) + 1;
    Ymd::new(year, month, small(day))
}

impl Coptic {
    /// Julian 284-08-29.
    pub const EPOCH: Fixed = Julian::fixed_from_parts(284, 8, 29);

    /// Years `≡ 3 (mod 4)` carry a sixth epagomenal day.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        modulo(year, 4) == 3
    }
}

impl Ethiopic {
    /// Julian 0008-08-29.
    pub const EPOCH: Fixed = Julian::fixed_from_parts(8, 8, 29);

    /// Same rule as the Coptic calendar.
    #[inline]
    pub const fn is_leap_year(year: i64) -> bool {
        Coptic::is_leap_year(year)
    }
}

impl DateConvertible for Coptic {
    const LABEL: &'static str = "Coptic";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=13)?;
        Ok(fixed_from_parts(Self::EPOCH, fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        fields_from_fixed(Self::EPOCH, date)
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = lookup(&COPTIC_MONTHS, "Coptic months", i64::from(fields.month) - 1)?;
        Ok(format!("{} {} {} A.M.", fields.day, month, fields.year))
    }
}

impl DateConvertible for Ethiopic {
    const LABEL: &'static str = "Ethiopic";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=13)?;
        Ok(fixed_from_parts(Self::EPOCH, fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        fields_from_fixed(Self::EPOCH, date)
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        let month = lookup(&ETHIOPIC_MONTHS, "Ethiopic months", i64::from(fields.month) - 1)?;
        Ok(format!("{} {} {} E.E.", fields.day, month, fields.year))
    }
}
