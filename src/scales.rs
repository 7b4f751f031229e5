// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Time-scale marker types.
//!
//! Each zero-sized type identifies a numbering of the same continuous
//! timeline and encodes how its values relate to the canonical **universal
//! Julian day**.
//!
//! | Marker | Description | Epoch (JD) |
//! |--------|-------------|------------|
//! | [`JD`] | Julian Day | 0.0 |
//! | [`RD`] | Moment on the fixed day count (`Fixed(1)` = 0001-01-01) | 1 721 424.5 |
//! | [`MJD`] | Modified Julian Date | 2 400 000.5 |
//! | [`JDE`] | Julian Ephemeris Day (dynamical time) | 0.0 + ΔT |

use super::instant::{Time, TimeScale};
use qtty::{Day, Days};

// ---------------------------------------------------------------------------
// Epoch counters
// ---------------------------------------------------------------------------

/// Julian Day, the identity scale.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JD;

impl TimeScale for JD {
    const LABEL: &'static str = "Julian Day:";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd
    }
}

/// Rata Die moment: fractional days on the fixed day count.
///
/// Fixed day `n` spans the moments `[n, n + 1)`, so midnight opening
/// 0001-01-01 (Gregorian) is moment `1.0` and JD 0 is moment −1 721 424.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct RD;

/// The constant offset between JD and RD: `JD = RD + RD_EPOCH`.
pub(crate) const RD_EPOCH: Days = Days::new(1_721_424.5);

impl TimeScale for RD {
    const LABEL: &'static str = "RD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + RD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - RD_EPOCH
    }
}

/// Modified Julian Date, JD minus 2 400 000.5.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct MJD;

const MJD_EPOCH: Days = Days::new(2_400_000.5);

impl TimeScale for MJD {
    const LABEL: &'static str = "MJD";

    #[inline(always)]
    fn to_jd(value: Days) -> Days {
        value + MJD_EPOCH
    }

    #[inline(always)]
    fn from_jd(jd: Days) -> Days {
        jd - MJD_EPOCH
    }
}

// ---------------------------------------------------------------------------
// Dynamical time
// ---------------------------------------------------------------------------

/// Julian Ephemeris Day, the uniform axis used by the solar and lunar series.
///
/// Converting from universal time adds the ephemeris correction of
/// [`delta_t`](super::delta_t); the inverse uses a three-iteration
/// fixed-point solver.
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct JDE;

impl TimeScale for JDE {
    const LABEL: &'static str = "JDE";

    #[inline]
    fn to_jd(jde: Days) -> Days {
        // Solve jd + ΔT(jd) = jde.
        let mut jd = jde;
        for _ in 0..3 {
            let moment = Time::<RD>::from_julian_day(jd);
            jd = jde - super::delta_t::delta_t_seconds(moment).to::<Day>();
        }
        jd
    }

    #[inline]
    fn from_jd(jd: Days) -> Days {
        let moment = Time::<RD>::from_julian_day(jd);
        jd + super::delta_t::delta_t_seconds(moment).to::<Day>()
    }
}

// ---------------------------------------------------------------------------
// Cross-scale From/Into  (generated by macro)
// ---------------------------------------------------------------------------

/// Generate pairwise `From<Time<A>> for Time<B>` implementations.
macro_rules! impl_time_conversions {
    // Base case: single scale, nothing left.
    ($single:ty) => {};

    // Recursive: generate pairs between $first and every $rest, then recurse.
    ($first:ty, $($rest:ty),+ $(,)?) => {
        $(
            impl From<Time<$first>> for Time<$rest> {
                #[inline]
                fn from(t: Time<$first>) -> Self {
                    t.to::<$rest>()
                }
            }

            impl From<Time<$rest>> for Time<$first> {
                #[inline]
                fn from(t: Time<$rest>) -> Self {
                    t.to::<$first>()
                }
            }
        )+

        impl_time_conversions!($($rest),+);
    };
}

impl_time_conversions!(JD, RD, MJD, JDE);
