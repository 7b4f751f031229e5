// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Modified Hindu calendars: true positions of the Surya-Siddhanta,
//! reckoned at sunrise in Ujjain.
//!
//! Day count → fields is a direct evaluation of the [`engine`](super::engine).
//! The inverse has no closed form: it starts from the old Hindu date with
//! the same fields, widens a bracket around it one synodic month at a time
//! until the target fields fall inside, bisects on the chronological order
//! of the fields, and finally tries the three days around the bisection
//! point for an exact match.

use std::fmt;
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::arith::{amod, fldiv, modulo};
use crate::date::{check_month, small, DateConvertible, Ymd};
use crate::error::CalendarError;
use crate::fixed::Fixed;

use super::engine::{
    calendar_year, days_since_epoch, lunar_day, new_moon, solar_longitude, sunrise, zodiac,
};
use super::numeric::HinduNumber;
use super::old::{fixed_from_old_lunar, fixed_from_old_solar};
use super::{render_lunar, render_solar, HinduLunarDate};

/// Kali Yuga year of the first year of the Saka era.
pub const SOLAR_ERA: i64 = 3179;

/// Kali Yuga year of the first year of the Vikrama era.
pub const LUNAR_ERA: i64 = 3044;

/// Half-width of the initial bisection window, in days.
const SEARCH_RADIUS: i64 = 20;

/// Upper bound on widening steps at either end of the window.
const MAX_WIDENINGS: usize = 64;

type SearchKey = (i64, u8, bool, u8, bool);

/// Hindu solar calendar (Saka era), evaluated in numeric mode `N`.
pub struct ModifiedHinduSolar<N = f64>(PhantomData<fn() -> N>);

/// Hindu lunisolar calendar (Vikrama era, amanta months), evaluated in
/// numeric mode `N`.
pub struct ModifiedHinduLunar<N = f64>(PhantomData<fn() -> N>);

macro_rules! impl_marker_traits {
    ($($marker:ident),*) => {$(
        impl<N> Clone for $marker<N> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<N> Copy for $marker<N> {}

        impl<N> fmt::Debug for $marker<N> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($marker))
            }
        }
    )*};
}

impl_marker_traits!(ModifiedHinduSolar, ModifiedHinduLunar);

/// Solar date of the day whose sunrise-to-sunrise span ends at the sunrise
/// after midnight of `date + 1`.
pub(crate) fn solar_from_fixed<N: HinduNumber>(date: Fixed) -> Ymd {
    let critical = sunrise::<N>(&days_since_epoch(date + 1));
    let month = zodiac(&critical);
    let year = calendar_year(&critical) - SOLAR_ERA;
    let approx = date - 3 - modulo((solar_longitude(&critical) / N::integer(60)).floor_i64(), 30);
    let mut begin = approx;
    while begin < date && zodiac(&sunrise::<N>(&days_since_epoch(begin + 1))) != month {
        begin += 1;
    }
    Ymd::new(year, small(month), small(date - begin + 1))
}

pub(crate) fn lunar_from_fixed<N: HinduNumber>(date: Fixed) -> HinduLunarDate {
    let critical = sunrise::<N>(&days_since_epoch(date));
    let day = lunar_day(&critical);
    let leap_day = day == lunar_day(&sunrise::<N>(&days_since_epoch(date - 1)));
    let last_new_moon = new_moon(&critical);
    let next_new_moon = new_moon(&N::integer(last_new_moon.floor_i64() + 35));
    let solar_month = zodiac(&last_new_moon);
    let leap_month = solar_month == zodiac(&next_new_moon);
    let month = amod(solar_month + 1, 12);
    let reckoned = if month <= 2 { date + 180 } else { date };
    let year = calendar_year::<N>(&days_since_epoch(reckoned)) - LUNAR_ERA;
    HinduLunarDate::new(year, small(month), leap_month, small(day), leap_day)
}

/// Day whose forward conversion reproduces `target` exactly.
///
/// Each end of the window moves outwards by one synodic month (rounded up)
/// until the fields there bracket the target in chronological order.
fn search<N: HinduNumber, F: PartialEq + fmt::Debug>(
    calendar: &'static str,
    target: &F,
    estimate: Fixed,
    forward: impl Fn(Fixed) -> F,
    key: impl Fn(&F) -> SearchKey,
) -> Result<Fixed, CalendarError> {
    let step = N::constants().synodic_month.ceil_i64();
    let wanted = key(target);
    let mut lo = estimate - SEARCH_RADIUS;
    let mut hi = estimate + SEARCH_RADIUS;
    for _ in 0..MAX_WIDENINGS {
        if key(&forward(lo)) <= wanted {
            break;
        }
        lo -= step;
        trace!(calendar, lo = lo.0, "widening downwards");
    }
    for _ in 0..MAX_WIDENINGS {
        if key(&forward(hi)) >= wanted {
            break;
        }
        hi += step;
        trace!(calendar, hi = hi.0, "widening upwards");
    }
    while hi - lo > 2 {
        let mid = Fixed(fldiv(lo.0 + hi.0, 2));
        trace!(calendar, lo = lo.0, hi = hi.0, mid = mid.0, "bisecting");
        if key(&forward(mid)) < wanted {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    let x = Fixed(fldiv(lo.0 + hi.0, 2));
    [x, x - 1, x + 1]
        .into_iter()
        .find(|&candidate| forward(candidate) == *target)
        .ok_or_else(|| {
            debug!(calendar, fields = ?target, near = x.0, "no day reproduces the fields");
            CalendarError::inconsistent(calendar, target)
        })
}

impl<N: HinduNumber> DateConvertible for ModifiedHinduSolar<N> {
    const LABEL: &'static str = "Hindu solar";
    type Fields = Ymd;

    fn fixed_from_fields(fields: &Ymd) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        let estimate = fixed_from_old_solar(fields.year + SOLAR_ERA, fields.month, fields.day);
        search::<N, _>(
            Self::LABEL,
            fields,
            estimate,
            solar_from_fixed::<N>,
            |f: &Ymd| (f.year, f.month, true, f.day, false),
        )
    }

    fn fields_from_fixed(date: Fixed) -> Ymd {
        solar_from_fixed::<N>(date)
    }

    fn render(fields: &Ymd) -> Result<String, CalendarError> {
        render_solar(fields, "Saka")
    }
}

impl<N: HinduNumber> DateConvertible for ModifiedHinduLunar<N> {
    const LABEL: &'static str = "Hindu lunar";
    type Fields = HinduLunarDate;

    fn fixed_from_fields(fields: &HinduLunarDate) -> Result<Fixed, CalendarError> {
        check_month(Self::LABEL, fields, fields.month, 1..=12)?;
        let estimate = fixed_from_old_lunar(
            fields.year + LUNAR_ERA,
            fields.month,
            fields.leap_month,
            fields.day,
        );
        search::<N, _>(
            Self::LABEL,
            fields,
            estimate,
            lunar_from_fixed::<N>,
            HinduLunarDate::key,
        )
    }

    fn fields_from_fixed(date: Fixed) -> HinduLunarDate {
        lunar_from_fixed::<N>(date)
    }

    fn render(fields: &HinduLunarDate) -> Result<String, CalendarError> {
        render_lunar(fields, "V.S.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use num_rational::BigRational;

    const ROWS: [(i64, Ymd, HinduLunarDate); 5] = [
        (
            -214_193,
            Ymd::new(-664, 5, 19),
            HinduLunarDate::new(-529, 6, false, 11, false),
        ),
        (
            601_716,
            Ymd::new(1570, 3, 3),
            HinduLunarDate::new(1705, 3, false, 20, false),
        ),
        (
            710_347,
            Ymd::new(1867, 7, 27),
            HinduLunarDate::new(2002, 8, false, 7, false),
        ),
        (
            730_120,
            Ymd::new(1921, 9, 17),
            HinduLunarDate::new(2056, 9, false, 25, false),
        ),
        (
            738_000,
            Ymd::new(1943, 4, 14),
            HinduLunarDate::new(2078, 4, false, 21, false),
        ),
    ];

    type Solar = ModifiedHinduSolar;
    type Lunar = ModifiedHinduLunar;

    #[test]
    fn float_reference_rows() {
        for (rd, solar, lunar) in ROWS {
            assert_eq!(Solar::fields_from_fixed(Fixed(rd)), solar, "solar at {rd}");
            assert_eq!(Lunar::fields_from_fixed(Fixed(rd)), lunar, "lunar at {rd}");
            assert_eq!(Solar::fixed_from_fields(&solar), Ok(Fixed(rd)));
            assert_eq!(Lunar::fixed_from_fields(&lunar), Ok(Fixed(rd)));
        }
    }

    #[test]
    fn exact_mode_agrees_with_float() {
        let (rd, solar, lunar) = ROWS[3];
        let date = Date::<ModifiedHinduSolar<BigRational>>::from_fixed(Fixed(rd));
        assert_eq!(*date.fields(), solar);
        let date = Date::<ModifiedHinduLunar<BigRational>>::from_fixed(Fixed(rd));
        assert_eq!(*date.fields(), lunar);
        assert_eq!(
            ModifiedHinduLunar::<BigRational>::fixed_from_fields(&lunar),
            Ok(Fixed(rd))
        );
    }

    #[test]
    fn leap_months_and_days() {
        let cases = [
            (-282_230, HinduLunarDate::new(-715, 3, true, 12, true)),
            (28_744, HinduLunarDate::new(136, 7, false, 1, false)),
            (28_745, HinduLunarDate::new(136, 7, false, 1, true)),
            (28_746, HinduLunarDate::new(136, 7, false, 2, false)),
            (108_710, HinduLunarDate::new(355, 6, false, 27, true)),
            (-246_690, HinduLunarDate::new(-618, 6, true, 28, false)),
        ];
        for (rd, lunar) in cases {
            assert_eq!(Lunar::fields_from_fixed(Fixed(rd)), lunar, "lunar at {rd}");
            assert_eq!(Lunar::fixed_from_fields(&lunar), Ok(Fixed(rd)), "{lunar}");
        }
        assert_eq!(
            Solar::fields_from_fixed(Fixed(-282_230)),
            Ymd::new(-850, 2, 14)
        );
    }

    #[test]
    fn expunged_lunar_day_is_inconsistent() {
        assert_eq!(Lunar::fields_from_fixed(Fixed(730_107)).day, 11);
        assert_eq!(Lunar::fields_from_fixed(Fixed(730_108)).day, 13);
        let expunged = HinduLunarDate::new(2056, 9, false, 12, false);
        assert!(matches!(
            Date::<Lunar>::new(expunged),
            Err(CalendarError::InconsistentDate { .. })
        ));
    }

    #[test]
    fn conflicting_flags_are_inconsistent() {
        for fields in [
            HinduLunarDate::new(2056, 9, true, 25, false),
            HinduLunarDate::new(2056, 9, false, 25, true),
        ] {
            assert!(matches!(
                Lunar::fixed_from_fields(&fields),
                Err(CalendarError::InconsistentDate { .. })
            ));
        }
        assert!(matches!(
            Solar::fixed_from_fields(&Ymd::new(1921, 9, 40)),
            Err(CalendarError::InconsistentDate { .. })
        ));
    }

    #[test]
    fn month_out_of_range_is_rejected_early() {
        assert!(Lunar::fixed_from_fields(&HinduLunarDate::new(2056, 13, false, 1, false)).is_err());
        assert!(Solar::fixed_from_fields(&Ymd::new(1921, 0, 1)).is_err());
    }

    #[test]
    fn sequential_days_round_trip() {
        for rd in 730_090..730_130 {
            let lunar = Lunar::fields_from_fixed(Fixed(rd));
            assert_eq!(Lunar::fixed_from_fields(&lunar), Ok(Fixed(rd)), "{lunar}");
            let solar = Solar::fields_from_fixed(Fixed(rd));
            assert_eq!(Solar::fixed_from_fields(&solar), Ok(Fixed(rd)));
        }
    }

    #[test]
    fn estimate_a_month_off_still_converges() {
        // The old-calendar estimate for these month starts lands a whole
        // lunar month away from the true day.
        for rd in [703_135, 705_055, 711_994, 719_938, 726_937, 736_771] {
            let lunar = Lunar::fields_from_fixed(Fixed(rd));
            assert_eq!(lunar.day, 1, "{lunar}");
            assert_eq!(Lunar::fixed_from_fields(&lunar), Ok(Fixed(rd)), "{lunar}");
        }
    }

    #[test]
    fn month_starts_round_trip_across_centuries() {
        let ranges = [700_000..740_000, -400_000..-360_000];
        for rd in ranges.into_iter().flatten() {
            let lunar = Lunar::fields_from_fixed(Fixed(rd));
            if lunar.day <= 2 {
                assert_eq!(Lunar::fixed_from_fields(&lunar), Ok(Fixed(rd)), "{lunar}");
            }
            let solar = Solar::fields_from_fixed(Fixed(rd));
            if solar.day <= 2 {
                assert_eq!(Solar::fixed_from_fields(&solar), Ok(Fixed(rd)), "{solar:?}");
            }
        }
    }

    #[test]
    fn exact_mode_round_trips_a_displaced_month_start() {
        let rd = Fixed(703_135);
        let lunar = ModifiedHinduLunar::<BigRational>::fields_from_fixed(rd);
        assert_eq!(lunar, HinduLunarDate::new(1982, 12, false, 1, false));
        assert_eq!(ModifiedHinduLunar::<BigRational>::fixed_from_fields(&lunar), Ok(rd));
    }

    #[test]
    fn rendering() {
        let date = Date::<Lunar>::from_fixed(Fixed(730_120));
        assert_eq!(date.to_string(), "25 Margasirsha 2056 V.S.");
        let date = Date::<Solar>::from_fixed(Fixed(730_120));
        assert_eq!(date.to_string(), "17 Dhanu 1921 Saka");
    }
}
