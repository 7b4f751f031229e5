// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Chinese lunisolar calendar.
//!
//! Months begin on the day of the new moon in Beijing. The winter solstice
//! always falls in month 11; a *sui* (solstice to solstice) containing
//! thirteen new moons gets a leap month, which is the first month of the
//! sui without a major solar term. Years are counted in sexagenary cycles
//! from Gregorian −2636-02-15.

use std::fmt;

use qtty::{Days, Degrees, Minutes};

use crate::arith::{amod, fldiv};
use crate::astro::{
    estimate_prior_solar_longitude, local_from_universal, new_moon_at_or_after, new_moon_before,
    solar_longitude, universal_from_local, MEAN_SYNODIC_MONTH, MEAN_TROPICAL_YEAR,
};
use crate::date::{lookup, small, DateConvertible};
use crate::error::CalendarError;
use crate::fixed::Fixed;
use crate::instant::Time;
use crate::scales::RD;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::gregorian::Gregorian;

/// Chinese calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Chinese;

/// Fields of a Chinese date. A leap month sorts after the regular month
/// with the same number.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ChineseDate {
    /// Sexagenary cycle, from 1.
    pub cycle: i64,
    /// Year within the cycle, `1..=60`.
    pub year: u8,
    /// Month `1..=12`.
    pub month: u8,
    /// `true` for the intercalary repetition of `month`.
    pub leap: bool,
    pub day: u8,
}

impl ChineseDate {
    pub const fn new(cycle: i64, year: u8, month: u8, leap: bool, day: u8) -> Self {
        Self {
            cycle,
            year,
            month,
            leap,
            day,
        }
    }
}

impl fmt::Display for ChineseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let leap = if self.leap { "*" } else { "" };
        write!(
            f,
            "{}-{}-{}{}-{}",
            self.cycle, self.year, self.month, leap, self.day
        )
    }
}

const STEMS: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

const BRANCHES: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

/// Beijing local mean time (116°25′ E) before 1929.
const BEIJING_MEAN_TIME: f64 = 465.0 + 40.0 / 60.0;
/// China standard time from 1929.
const CHINA_STANDARD_TIME: f64 = 480.0;

impl Chinese {
    /// Gregorian −2636-02-15, the traditional start of cycle 1.
    pub const EPOCH: Fixed = Gregorian::fixed_from_parts(-2636, 2, 15);

    /// Offset of Beijing civil time from UT on `date`.
    pub fn zone(date: Fixed) -> Minutes {
        if Gregorian::year_from_fixed(date) < 1929 {
            Minutes::new(BEIJING_MEAN_TIME)
        } else {
            Minutes::new(CHINA_STANDARD_TIME)
        }
    }

    /// Universal moment of midnight opening `date` in Beijing.
    pub fn midnight_in_china(date: Fixed) -> Time<RD> {
        universal_from_local(date.to_moment(), Self::zone(date))
    }

    /// Day of the first Beijing new moon at or after `date`.
    pub fn new_moon_on_or_after(date: Fixed) -> Fixed {
        let moment = new_moon_at_or_after(Self::midnight_in_china(date));
        Fixed::from_moment(local_from_universal(moment, Self::zone(date)))
    }

    /// Day of the last Beijing new moon before `date`.
    pub fn new_moon_before(date: Fixed) -> Fixed {
        let moment = new_moon_before(Self::midnight_in_china(date));
        Fixed::from_moment(local_from_universal(moment, Self::zone(date)))
    }

    /// Index `1..=12` of the last major solar term on or before `date`.
    pub fn current_major_solar_term(date: Fixed) -> u8 {
        let longitude = solar_longitude(Self::midnight_in_china(date)).value();
        small(amod(2 + (longitude / 30.0).floor() as i64, 12))
    }

    /// Day in Beijing of the winter solstice on or before `date`.
    pub fn winter_solstice_on_or_before(date: Fixed) -> Fixed {
        let approx =
            estimate_prior_solar_longitude(Degrees::new(270.0), Self::midnight_in_china(date + 1));
        let mut day = Fixed::from_moment(approx) - 1;
        while solar_longitude(Self::midnight_in_china(day + 1)).value() <= 270.0 {
            day += 1;
        }
        day
    }

    /// `true` if the month starting on `date` contains no major solar term.
    fn no_major_solar_term(date: Fixed) -> bool {
        Self::current_major_solar_term(date)
            == Self::current_major_solar_term(Self::new_moon_on_or_after(date + 1))
    }

    /// `true` if some month from `first` up to `month` (both new-moon days)
    /// lacks a major solar term.
    fn prior_leap_month(first: Fixed, month: Fixed) -> bool {
        let mut month = month;
        while month >= first {
            if Self::no_major_solar_term(month) {
                return true;
            }
            month = Self::new_moon_before(month);
        }
        false
    }

    /// Number of whole mean lunations between two new-moon days.
    #[inline]
    fn lunations(from: Fixed, to: Fixed) -> i64 {
        ((to - from) as f64 / MEAN_SYNODIC_MONTH.value()).round() as i64
    }

    /// New year of the sui containing `date`.
    fn new_year_in_sui(date: Fixed) -> Fixed {
        let s1 = Self::winter_solstice_on_or_before(date);
        let s2 = Self::winter_solstice_on_or_before(s1 + 370);
        let m12 = Self::new_moon_on_or_after(s1 + 1);
        let m13 = Self::new_moon_on_or_after(m12 + 1);
        let next_m11 = Self::new_moon_before(s2 + 1);
        if Self::lunations(m12, next_m11) == 12
            && (Self::no_major_solar_term(m12) || Self::no_major_solar_term(m13))
        {
            Self::new_moon_on_or_after(m13 + 1)
        } else {
            m13
        }
    }

    /// Chinese new year on or before `date`.
    pub fn new_year_on_or_before(date: Fixed) -> Fixed {
        let new_year = Self::new_year_in_sui(date);
        if date >= new_year {
            new_year
        } else {
            Self::new_year_in_sui(date - 180)
        }
    }

    /// Chinese new year falling in Gregorian `year`.
    pub fn new_year(year: i64) -> Fixed {
        Self::new_year_on_or_before(Gregorian::fixed_from_parts(year, 7, 1))
    }

    /// Sexagenary (stem-branch) name of position `n` in the 60-cycle.
    pub fn sexagenary_name(n: i64) -> Result<String, CalendarError> {
        let stem = lookup(&STEMS, "celestial stems", amod(n, 10) - 1)?;
        let branch = lookup(&BRANCHES, "terrestrial branches", amod(n, 12) - 1)?;
        Ok(format!("{stem}-{branch}"))
    }
}

impl DateConvertible for Chinese {
    const LABEL: &'static str = "Chinese";
    type Fields = ChineseDate;

    fn fixed_from_fields(fields: &ChineseDate) -> Result<Fixed, CalendarError> {
        if !(1..=60).contains(&fields.year)
            || !(1..=12).contains(&fields.month)
            || !(1..=30).contains(&fields.day)
        {
            return Err(CalendarError::inconsistent(Self::LABEL, fields));
        }
        let elapsed_years = (fields.cycle - 1) * 60 + i64::from(fields.year) - 1;
        let mid_year = Self::EPOCH.to_moment()
            + Days::new(MEAN_TROPICAL_YEAR.value() * (elapsed_years as f64 + 0.5));
        let new_year = Self::new_year_on_or_before(Fixed::from_moment(mid_year));
        let first_guess =
            Self::new_moon_on_or_after(new_year + (i64::from(fields.month) - 1) * 29);
        let found = Self::fields_from_fixed(first_guess);
        let month_start = if found.month == fields.month && found.leap == fields.leap {
            first_guess
        } else {
            Self::new_moon_on_or_after(first_guess + 1)
        };
        Ok(month_start + i64::from(fields.day) - 1)
    }

    fn fields_from_fixed(date: Fixed) -> ChineseDate {
        let s1 = Self::winter_solstice_on_or_before(date);
        let s2 = Self::winter_solstice_on_or_before(s1 + 370);
        let m12 = Self::new_moon_on_or_after(s1 + 1);
        let next_m11 = Self::new_moon_before(s2 + 1);
        let month_start = Self::new_moon_before(date + 1);
        let leap_year = Self::lunations(m12, next_m11) == 12;

        let shift = if leap_year && Self::prior_leap_month(m12, month_start) {
            1
        } else {
            0
        };
        let month = amod(Self::lunations(m12, month_start) - shift, 12);
        let leap = leap_year
            && Self::no_major_solar_term(month_start)
            && !Self::prior_leap_month(m12, Self::new_moon_before(month_start));

        let elapsed = (1.5 - month as f64 / 12.0
            + (date - Self::EPOCH) as f64 / MEAN_TROPICAL_YEAR.value())
        .floor() as i64;
        ChineseDate::new(
            fldiv(elapsed - 1, 60) + 1,
            small(amod(elapsed, 60)),
            small(month),
            leap,
            small(date - month_start + 1),
        )
    }

    fn render(fields: &ChineseDate) -> Result<String, CalendarError> {
        let year = Self::sexagenary_name(i64::from(fields.year))?;
        let leap = if fields.leap { " (leap)" } else { "" };
        Ok(format!(
            "day {} of month {}{} of {} year, cycle {}",
            fields.day, fields.month, leap, year, fields.cycle
        ))
    }
}
