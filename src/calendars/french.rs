// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! French Revolutionary calendar.
//!
//! Twelve 30-day months followed by five or six complementary days, stored
//! as month 13. Two variants share the field layout:
//!
//! - [`French`]: the arithmetic reform proposal, leap years by the
//!   4/100/400/4000 rule.
//! - [`FrenchAstronomical`]: the original rule, each year beginning on the
//!   day of the autumnal equinox as observed at the Paris meridian.

use qtty::{Days, Degrees, Minutes};

use crate::arith::{fldiv, modulo};
use crate::astro::{
    estimate_prior_solar_longitude, local_from_apparent, solar_longitude, universal_from_local,
    MEAN_TROPICAL_YEAR,
};
use crate::date::{check_month, lookup, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;
use crate::instant::Time;
use crate::scales::RD;

use super::gregorian::Gregorian;

/// Arithmetic French Revolutionary calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct French;

/// Astronomical (equinox-anchored) French Revolutionary calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrenchAstronomical;

/// Month number of the complementary days.
pub const SANSCULOTTIDES: u8 = 13;

const MONTH_NAMES: [&str; 12] = [
    "Vendémiaire",
    "Brumaire",
    "Frimaire",
    "Nivôse",
    "Pluviôse",
    "Ventôse",
    "Germinal",
    "Floréal",
    "Prairial",
    "Messidor",
    "Thermidor",
    "Fructidor",
];

const COMPLEMENTARY_DAYS: [&str; 6] = [
    "jour de la vertu",
    "jour du génie",
    "jour du travail",
    "jour de l'opinion",
    "jour des récompenses",
    "jour de la révolution",
];

/// Gregorian 1792-09-22, the first day of year I.
pub const EPOCH: Fixed = Gregorian::fixed_from_parts(1792, 9, 22);

/// Longitude of the Paris Observatory, 2°20′15″ east.
const PARIS_LONGITUDE: f64 = 2.0 + 20.0 / 60.0 + 15.0 / 3600.0;

fn render(calendar: &'static str, fields: &Ymd) -> Result<String, CalendarError> {
    if fields.month == SANSCULOTTIDES {
        let name = lookup(&COMPLEMENTARY_DAYS, "French complementary days", i64::from(fields.day) - 1)?;
        Ok(format!("{name} an {}", fields.year))
    } else {
        let month = lookup(&MONTH_NAMES, calendar, i64::from(fields.month) - 1)?;
        Ok(format!("{} {} an {}", fields.day, month, fields.year))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Arithmetic variant
// ═══════════════════════════════════════════════════════════════════════════

impl French {
    pub const EPOCH: Fixed = EPOCH;

    /// Every fourth year, except centuries not divisible by 400 and millennia divisible by 4000.
    pub const fn is_leap_year(year: i64) -> bool {
        let century_rest = modulo(year, 400);
        modulo(year, 4) == 0
            && century_rest != 100
            && century_rest != 200
            && century_rest != 300
            && modulo(year, 4000) != 0
    }

    const fn fixed_from_parts(year: i64, month: u8, day: u8) -> Fixed {
        let prior = year - 1;
        Fixed(
            EPOCH.0 - 1 + 365 * prior + fldiv(prior, 4) - fldiv(prior, 100) + fldiv(prior, 400)
                - fldiv(prior, 4000)
                + 30 * (month as i64 - 1)
                + day as i64,
        )
    }
}

impl DateConvertible for French {
    const LABEL: &'static str = "French";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=SANSCULOTTIDES)?;
        Ok(Self::fixed_from_parts(fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        // Mean year of this rule: 1460969/4000 days.
        let approx = fldiv(4000 * (date - EPOCH + 2), 1_460_969) + 1;
        let year = if date < Self::fixed_from_parts(approx, 1, 1) {
            approx - 1
        } else {
            approx
        };
        let month = small(fldiv(date - Self::fixed_from_parts(year, 1, 1), 30) + 1);
        let day = date - Self::fixed_from_parts(year, month, 1) + 1;
        Ymd::new(year, month, small(day))
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        render("French months", fields)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Astronomical variant
// ═══════════════════════════════════════════════════════════════════════════

impl FrenchAstronomical {
    pub const EPOCH: Fixed = EPOCH;

    /// Universal moment of true (apparent) midnight in Paris ending `date`.
    pub fn midnight_in_paris(date: Fixed) -> Time<RD> {
        universal_from_local(
            local_from_apparent((date + 1).to_moment()),
            Minutes::new(PARIS_LONGITUDE * 4.0),
        )
    }

    /// The new year (autumnal equinox day in Paris) on or before `date`.
    pub fn new_year_on_or_before(date: Fixed) -> Fixed {
        let approx =
            estimate_prior_solar_longitude(Degrees::new(180.0), Self::midnight_in_paris(date));
        let mut day = Fixed::from_moment(approx) - 1;
        while solar_longitude(Self::midnight_in_paris(day)).value() < 180.0 {
            day += 1;
        }
        day
    }

    /// First day of `year`.
    pub fn new_year(year: i64) -> Fixed {
        let mid_year = EPOCH.to_moment()
            + Days::new(180.0 + MEAN_TROPICAL_YEAR.value() * (year - 1) as f64);
        Self::new_year_on_or_before(Fixed::from_moment(mid_year))
    }

    /// 366-day years.
    pub fn is_leap_year(year: i64) -> bool {
        Self::new_year(year + 1) - Self::new_year(year) > 365
    }
}

impl DateConvertible for FrenchAstronomical {
    const LABEL: &'static str = "French (astronomical)";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=SANSCULOTTIDES)?;
        Ok(Self::new_year(fields.year) - 1
            + 30 * (i64::from(fields.month) - 1)
            + i64::from(fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        let new_year = Self::new_year_on_or_before(date);
        let year = ((new_year - EPOCH) as f64 / MEAN_TROPICAL_YEAR.value()).round() as i64 + 1;
        let month = small(fldiv(date - new_year, 30) + 1);
        let day = small(modulo(date - new_year, 30) + 1);
        Ymd::new(year, month, day)
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        render("French months", fields)
    }
}
