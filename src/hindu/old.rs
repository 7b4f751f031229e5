// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Old Hindu (Arya-siddhanta) calendars: mean motions only, counted in
//! elapsed years of the Kali Yuga, always in exact rational arithmetic.

use std::sync::OnceLock;

use num_rational::BigRational;

use crate::arith::modulo;
use crate::date::{check_month, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::numeric::HinduNumber;
use super::{render_lunar, render_solar, HinduLunarDate, HINDU_EPOCH};

/// Mean solar calendar of the Arya-siddhanta.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OldHinduSolar;

/// Mean lunisolar calendar of the Arya-siddhanta.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct OldHinduLunar;

struct Arya {
    year: BigRational,
    solar_month: BigRational,
    lunar_month: BigRational,
    lunar_day: BigRational,
    quarter: BigRational,
}

fn arya() -> &'static Arya {
    static ARYA: OnceLock<Arya> = OnceLock::new();
    ARYA.get_or_init(|| {
        let year = BigRational::ratio(1_577_917_500, 4_320_000);
        let lunar_month = BigRational::ratio(1_577_917_500, 53_433_336);
        Arya {
            solar_month: year.clone() / BigRational::integer(12),
            lunar_day: lunar_month.clone() / BigRational::integer(30),
            quarter: BigRational::ratio(1, 4),
            year,
            lunar_month,
        }
    })
}

/// Days since the Kali Yuga at sunrise of `date`.
fn sunrise_since_epoch(date: Fixed) -> BigRational {
    BigRational::integer(date - HINDU_EPOCH) + arya().quarter.clone()
}

/// Last day whose sunrise has not passed `elapsed` days after the epoch.
fn day_of(elapsed: BigRational) -> Fixed {
    HINDU_EPOCH + (elapsed - arya().quarter.clone()).ceil_i64()
}

pub(crate) fn old_solar_from_fixed(date: Fixed) -> Ymd {
    let a = arya();
    let sun = sunrise_since_epoch(date);
    let year = (sun.clone() / a.year.clone()).floor_i64();
    let month = modulo((sun.clone() / a.solar_month.clone()).floor_i64(), 12) + 1;
    let day = sun.modulo(&a.solar_month).floor_i64() + 1;
    Ymd::new(year, small(month), small(day))
}

pub(crate) fn fixed_from_old_solar(year: i64, month: u8, day: u8) -> Fixed {
    let a = arya();
    day_of(
        BigRational::integer(year) * a.year.clone()
            + BigRational::integer(i64::from(month) - 1) * a.solar_month.clone()
            + BigRational::integer(i64::from(day) - 1),
    )
}

pub(crate) fn old_lunar_from_fixed(date: Fixed) -> HinduLunarDate {
    let a = arya();
    let sun = sunrise_since_epoch(date);
    let new_moon = sun.clone() - sun.modulo(&a.lunar_month);
    let remainder = new_moon.modulo(&a.solar_month);
    let leap_month = a.solar_month.clone() - a.lunar_month.clone() >= remainder
        && remainder > BigRational::integer(0);
    let month = modulo((new_moon.clone() / a.solar_month.clone()).ceil_i64(), 12) + 1;
    let day = modulo((sun / a.lunar_day.clone()).floor_i64(), 30) + 1;
    let year = ((new_moon + a.solar_month.clone()) / a.year.clone()).ceil_i64() - 1;
    HinduLunarDate::new(year, small(month), leap_month, small(day), false)
}

pub(crate) fn fixed_from_old_lunar(year: i64, month: u8, leap_month: bool, day: u8) -> Fixed {
    let a = arya();
    let mina = BigRational::integer(12 * year - 1) * a.solar_month.clone();
    let lunar_new_year =
        a.lunar_month.clone() * BigRational::integer((mina.clone() / a.lunar_month.clone()).floor_i64() + 1);
    let first_leap = ((lunar_new_year.clone() - mina)
        / (a.solar_month.clone() - a.lunar_month.clone()))
    .ceil_i64();
    let months = if !leap_month && first_leap <= i64::from(month) {
        i64::from(month)
    } else {
        i64::from(month) - 1
    };
    day_of(
        lunar_new_year
            + a.lunar_month.clone() * BigRational::integer(months)
            + BigRational::integer(i64::from(day) - 1) * a.lunar_day.clone(),
    )
}

impl DateConvertible for OldHinduSolar {
    const LABEL: &'static str = "old Hindu solar";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        Ok(fixed_from_old_solar(fields.year, fields.month, fields.day))
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        old_solar_from_fixed(date)
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        render_solar(fields, "K.Y.")
    }
}

impl DateConvertible for OldHinduLunar {
    const LABEL: &'static str = "old Hindu lunar";
    type Fields = HinduLunarDate;

    fn fixed_from_fields(fields: &HinduLunarDate) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        if fields.leap_day {
            return Err(CalendarError::inconsistent(Self::LABEL, fields));
        }
        Ok(fixed_from_old_lunar(
            fields.year,
            fields.month,
            fields.leap_month,
            fields.day,
        ))
    }

    fn fields_from_fixed(date: Fixed) -> HinduLunarDate {
        old_lunar_from_fixed(date)
    }

    fn render(fields: &HinduLunarDate) -> Result<String, CalendarError> {
        render_lunar(fields, "K.Y.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;

    const ROWS: [(i64, Ymd, HinduLunarDate); 5] = [
        (
            -214_193,
            Ymd::new(2515, 5, 19),
            HinduLunarDate::new(2515, 6, false, 11, false),
        ),
        (
            601_716,
            Ymd::new(4749, 3, 1),
            HinduLunarDate::new(4749, 3, false, 20, false),
        ),
        (
            710_347,
            Ymd::new(5046, 7, 29),
            HinduLunarDate::new(5046, 8, false, 8, false),
        ),
        (
            730_120,
            Ymd::new(5100, 9, 17),
            HinduLunarDate::new(5100, 9, false, 25, false),
        ),
        (
            738_000,
            Ymd::new(5122, 4, 13),
            HinduLunarDate::new(5122, 4, false, 21, false),
        ),
    ];

    #[test]
    fn reference_rows_both_directions() {
        for (rd, solar, lunar) in ROWS {
            assert_eq!(old_solar_from_fixed(Fixed(rd)), solar, "solar at {rd}");
            assert_eq!(old_lunar_from_fixed(Fixed(rd)), lunar, "lunar at {rd}");
            assert_eq!(
                Date::<OldHinduSolar>::new(solar).map(|d| d.fixed()),
                Ok(Fixed(rd))
            );
            assert_eq!(
                Date::<OldHinduLunar>::new(lunar).map(|d| d.fixed()),
                Ok(Fixed(rd))
            );
        }
    }

    #[test]
    fn consecutive_days_round_trip() {
        for rd in 730_000..730_120 {
            let solar = old_solar_from_fixed(Fixed(rd));
            assert_eq!(
                fixed_from_old_solar(solar.year, solar.month, solar.day),
                Fixed(rd)
            );
        }
    }

    #[test]
    fn lunar_leap_day_is_rejected() {
        let fields = HinduLunarDate::new(5100, 9, false, 25, true);
        assert!(matches!(
            Date::<OldHinduLunar>::new(fields),
            Err(CalendarError::InconsistentDate { .. })
        ));
    }

    #[test]
    fn old_hindu_rendering() {
        let date = Date::<OldHinduSolar>::from_fixed(Fixed(730_120));
        assert_eq!(date.to_string(), "17 Dhanu 5100 K.Y.");
        let date = Date::<OldHinduLunar>::from_fixed(Fixed(730_120));
        assert_eq!(date.to_string(), "25 Margasirsha 5100 K.Y.");
    }
}
