// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Numeric modes of the Hindu engine.
//!
//! The engine is written once against [`HinduNumber`]. Two modes exist:
//!
//! | Mode | Type | Notes |
//! |------|------|-------|
//! | floating | `f64` | fast; the creation offset costs a few ulps in the fractional parts |
//! | exact | [`BigRational`] | bit-reproducible; every period constant is an exact fraction |

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::OnceLock;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{ToPrimitive, Zero};

/// Period and model constants of the Surya-Siddhanta, in one numeric mode.
#[derive(Debug, Clone)]
pub struct HinduConstants<N> {
    /// Days in a sidereal year.
    pub sidereal_year: N,
    /// Days in a sidereal month.
    pub sidereal_month: N,
    /// Days in a synodic month.
    pub synodic_month: N,
    /// Days from creation to the onset of the Kali Yuga.
    pub creation: N,
    /// Period of the solar anomaly.
    pub anomalistic_year: N,
    /// Period of the lunar anomaly.
    pub anomalistic_month: N,
    /// Arcminutes in a full circle.
    pub circle: N,
    /// Mean daily solar motion in arcminutes.
    pub mean_motion: N,
    /// Size of the solar epicycle, as a fraction of a circle.
    pub solar_epicycle: N,
    /// Size of the lunar epicycle, as a fraction of a circle.
    pub lunar_epicycle: N,
    /// Epicycle contraction applied to both luminaries.
    pub epicycle_change: N,
    /// Scale from arcminutes of longitude correction to days.
    pub equation_factor: N,
    /// Fraction of a day per arcminute of sidereal rotation.
    pub sunrise_factor: N,
    /// Arcminutes of precession per day.
    pub precession_rate: N,
    /// Ratio of the sine of the obliquity to the radius.
    pub obliquity: N,
    /// Latitude of Ujjain in arcminutes.
    pub ujjain_latitude: N,
}

impl<N: HinduNumber> HinduConstants<N> {
    fn new() -> Self {
        let sidereal_year = N::ratio(279_457, 1_080_000) + N::integer(365);
        let circle = N::integer(21_600);
        Self {
            sidereal_month: N::ratio(4_644_439, 14_438_334) + N::integer(27),
            synodic_month: N::ratio(7_087_771, 13_358_334) + N::integer(29),
            creation: sidereal_year.clone() * N::integer(1_955_880_000),
            anomalistic_year: N::ratio(1_577_917_828_000, 4_319_999_613),
            anomalistic_month: N::ratio(1_577_917_828, 57_265_137),
            mean_motion: circle.clone() / sidereal_year.clone(),
            solar_epicycle: N::ratio(14, 360),
            lunar_epicycle: N::ratio(32, 360),
            epicycle_change: N::ratio(1, 42),
            equation_factor: sidereal_year.clone() / circle.clone() / circle.clone(),
            sunrise_factor: N::ratio(1_577_917_828, 1_582_237_828) / circle.clone(),
            precession_rate: N::ratio(3_888_000, 1_577_917_828),
            obliquity: N::ratio(1397, 3438),
            ujjain_latitude: N::integer(1389),
            sidereal_year,
            circle,
        }
    }
}

/// Arithmetic the Hindu engine needs from its number type.
pub trait HinduNumber:
    Clone
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Short name of the mode, used in diagnostics.
    const MODE: &'static str;

    /// The fraction `numerator / denominator`.
    fn ratio(numerator: i64, denominator: i64) -> Self;

    /// An integer value.
    fn integer(value: i64) -> Self;

    /// Largest integer not greater than `self`.
    fn floor(&self) -> Self;

    /// Smallest integer not less than `self`.
    fn ceil(&self) -> Self;

    /// Integer value of an already integral number, saturating.
    fn to_i64(&self) -> i64;

    /// Nearest `f64`.
    fn to_f64(&self) -> f64;

    /// The shared constant table of this mode.
    fn constants() -> &'static HinduConstants<Self>;

    #[inline]
    fn floor_i64(&self) -> i64 {
        self.floor().to_i64()
    }

    #[inline]
    fn ceil_i64(&self) -> i64 {
        self.ceil().to_i64()
    }

    /// Fractional part, in `[0, 1)`.
    #[inline]
    fn fract(&self) -> Self {
        self.clone() - self.floor()
    }

    /// `self - y·⌊self / y⌋`, with the sign of `y`.
    #[inline]
    fn modulo(&self, y: &Self) -> Self {
        self.clone() - y.clone() * (self.clone() / y.clone()).floor()
    }

    #[inline]
    fn abs(&self) -> Self {
        if *self < Self::integer(0) {
            -self.clone()
        } else {
            self.clone()
        }
    }
}

impl HinduNumber for f64 {
    const MODE: &'static str = "float";

    #[inline]
    fn ratio(numerator: i64, denominator: i64) -> Self {
        numerator as f64 / denominator as f64
    }

    #[inline]
    fn integer(value: i64) -> Self {
        value as f64
    }

    #[inline]
    fn floor(&self) -> Self {
        f64::floor(*self)
    }

    #[inline]
    fn ceil(&self) -> Self {
        f64::ceil(*self)
    }

    #[inline]
    fn to_i64(&self) -> i64 {
        *self as i64
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        *self
    }

    fn constants() -> &'static HinduConstants<Self> {
        static CONSTANTS: OnceLock<HinduConstants<f64>> = OnceLock::new();
        CONSTANTS.get_or_init(HinduConstants::new)
    }
}

impl HinduNumber for BigRational {
    const MODE: &'static str = "exact";

    #[inline]
    fn ratio(numerator: i64, denominator: i64) -> Self {
        BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    #[inline]
    fn integer(value: i64) -> Self {
        BigRational::from_integer(BigInt::from(value))
    }

    #[inline]
    fn floor(&self) -> Self {
        BigRational::floor(self)
    }

    #[inline]
    fn ceil(&self) -> Self {
        BigRational::ceil(self)
    }

    fn to_i64(&self) -> i64 {
        let whole = BigRational::floor(self).to_integer();
        whole.to_i64().unwrap_or(if whole < BigInt::zero() {
            i64::MIN
        } else {
            i64::MAX
        })
    }

    fn to_f64(&self) -> f64 {
        match (self.numer().to_f64(), self.denom().to_f64()) {
            (Some(n), Some(d)) => n / d,
            _ => f64::NAN,
        }
    }

    fn constants() -> &'static HinduConstants<Self> {
        static CONSTANTS: OnceLock<HinduConstants<BigRational>> = OnceLock::new();
        CONSTANTS.get_or_init(HinduConstants::new)
    }
}
