// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # ΔT — the ephemeris correction
//!
//! Offset between the uniform dynamical time scale used by the solar and
//! lunar series and universal (Earth-rotation) time, as a piecewise model
//! selected by the Gregorian year of the moment:
//!
//! | Years | Model |
//! |-------|-------|
//! | 1988–2019 | linear, `year − 1933` seconds |
//! | 1900–1987 | degree-7 polynomial in centuries since 1900 |
//! | 1800–1899 | degree-10 polynomial in centuries since 1900 |
//! | 1620–1799 | quadratic in years since 1600 |
//! | otherwise | long-run quadratic extrapolation about 1810 |
//!
//! The correction is applied automatically by the [`JDE`](super::JDE) scale;
//! [`Time::<RD>::delta_t()`](Time::delta_t) exposes the raw value.

use super::calendars::Gregorian;
use super::fixed::Fixed;
use super::instant::Time;
use super::scales::RD;
use crate::arith::poly;
use qtty::{Days, Second, Seconds};

const JAN_1_1810: Fixed = Gregorian::fixed_from_parts(1810, 1, 1);
const JAN_1_1900: Fixed = Gregorian::fixed_from_parts(1900, 1, 1);

#[rustfmt::skip]
const COEFFS_1900_1987: [f64; 8] = [
    -0.00002, 0.000297, 0.025184, -0.181133,
     0.553040, -0.861938, 0.677066, -0.212591,
];

#[rustfmt::skip]
const COEFFS_1800_1899: [f64; 11] = [
    -0.000009, 0.003844, 0.083563, 0.865736, 4.867575, 15.845535,
    31.332267, 38.291999, 28.316289, 11.636204, 2.043794,
];

/// Julian centuries from 1900-01-01 to July 1st of `year`.
#[inline]
fn centuries_since_1900(year: i64) -> f64 {
    (Gregorian::fixed_from_parts(year, 7, 1) - JAN_1_1900) as f64 / 36_525.0
}

/// **1900–1987**: polynomial fit, coefficients yield a fraction of a day.
#[inline]
fn delta_t_twentieth_century(year: i64) -> Seconds {
    Days::new(poly(centuries_since_1900(year), &COEFFS_1900_1987)).to::<Second>()
}

/// **1800–1899**: polynomial fit, coefficients yield a fraction of a day.
#[inline]
fn delta_t_nineteenth_century(year: i64) -> Seconds {
    Days::new(poly(centuries_since_1900(year), &COEFFS_1800_1899)).to::<Second>()
}

/// **1620–1799**: quadratic in years since 1600.
#[inline]
fn delta_t_early_modern(year: i64) -> Seconds {
    let y = (year - 1600) as f64;
    Seconds::new(196.58333 - 4.0675 * y + 0.0219167 * y * y)
}

/// **Outside 1620–2019**: quadratic extrapolation about 1810.
#[inline]
fn delta_t_extrapolated(year: i64) -> Seconds {
    let x = 0.5 + (Gregorian::fixed_from_parts(year, 1, 1) - JAN_1_1810) as f64;
    Seconds::new(x * x / 41_048_480.0 - 15.0)
}

/// Returns **ΔT** in seconds for a moment on the universal axis.
pub(crate) fn delta_t_seconds(moment: Time<RD>) -> Seconds {
    match Gregorian::year_from_fixed(Fixed::from_moment(moment)) {
        year @ 1988..=2019 => Seconds::new((year - 1933) as f64),
        year @ 1900..=1987 => delta_t_twentieth_century(year),
        year @ 1800..=1899 => delta_t_nineteenth_century(year),
        year @ 1620..=1799 => delta_t_early_modern(year),
        year => delta_t_extrapolated(year),
    }
}

// ── Time<RD> convenience method ───────────────────────────────────────────

impl Time<RD> {
    /// Returns **ΔT** (dynamical minus universal time) in seconds at this moment.
    ///
    /// The same correction is applied when converting to [`JDE`](super::JDE).
    #[inline]
    pub fn delta_t(&self) -> Seconds {
        delta_t_seconds(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scales::{JD, JDE};
    use qtty::Day;

    fn at(year: i64) -> Seconds {
        Gregorian::fixed_from_parts(year, 1, 1).to_moment().delta_t()
    }

    #[test]
    fn delta_t_linear_rule() {
        assert!((at(2000) - Seconds::new(67.0)).abs() < Seconds::new(1e-9));
        assert!((at(1988) - Seconds::new(55.0)).abs() < Seconds::new(1e-9));
    }

    #[test]
    fn delta_t_twentieth_century_sample() {
        assert!((at(1900) - Seconds::new(-1.549_279_848_668_263_7)).abs() < Seconds::new(1e-6));
        assert!((at(1950) - Seconds::new(28.776_414_455_141_33)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn delta_t_nineteenth_century_sample() {
        assert!((at(1850) - Seconds::new(7.310_523_537_940_187)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn delta_t_early_modern_sample() {
        assert!((at(1700) - Seconds::new(9.000_33)).abs() < Seconds::new(1e-6));
        assert!((at(1620) - Seconds::new(124.000_01)).abs() < Seconds::new(1e-6));
    }

    #[test]
    fn delta_t_extrapolated_sample() {
        assert!((at(1000) - Seconds::new(2_117.224_137_659_908_6)).abs() < Seconds::new(1e-6));
        assert!((at(2050) - Seconds::new(172.197_867_990_483_45)).abs() < Seconds::new(1e-6));
        assert!((at(-500) - Seconds::new(17_326.585_373_934_675)).abs() < Seconds::new(1e-4));
    }

    #[test]
    fn jde_scale_applies_delta_t() {
        let jd = Time::<JD>::new(2_451_545.0);
        let jde = jd.to::<JDE>();
        let expected = jd.to::<RD>().delta_t().to::<Day>();
        assert!(((jde.quantity() - jd.quantity()) - expected).abs() < Days::new(1e-9));
    }
}
