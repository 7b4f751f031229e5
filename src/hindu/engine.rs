// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Surya-Siddhanta positions and sunrise, generic over the numeric mode.
//!
//! Every function takes `t`, days elapsed since the onset of the Kali Yuga
//! ([`HINDU_EPOCH`]), and measures longitudes in arcminutes of a 21 600′
//! circle. Trigonometry goes through the traditional 24-entry sine table
//! with linear interpolation, so both modes evaluate the same model.

use std::sync::OnceLock;

use tracing::debug;

use crate::fixed::Fixed;
use crate::instant::Time;
use crate::scales::RD;

use super::numeric::{HinduConstants, HinduNumber};
use super::HINDU_EPOCH;

/// Bisection steps allowed per new-moon bracket.
const NEW_MOON_ITERATIONS: usize = 160;

/// Brackets tried by [`new_moon`] before giving up on convergence.
const NEW_MOON_RETRIES: usize = 8;

const RISING_SIGNS: [i64; 6] = [1670, 1795, 1935, 1935, 1795, 1670];

#[inline]
fn k<N: HinduNumber>() -> &'static HinduConstants<N> {
    N::constants()
}

/// Days since the Kali Yuga at the midnight opening `date`.
#[inline]
pub fn days_since_epoch<N: HinduNumber>(date: Fixed) -> N {
    N::integer(date - HINDU_EPOCH)
}

/// The universal-time moment of an engine instant.
#[inline]
pub fn moment_of<N: HinduNumber>(t: &N) -> Time<RD> {
    HINDU_EPOCH.to_moment() + qtty::Days::new(t.to_f64())
}

/// Entry `index` of the sine table, periodic in 96 steps of 225′.
///
/// Entries are `3438·sin(index · 3°45′)` rounded the traditional way.
pub fn sine_table(index: i64) -> i64 {
    static TABLE: OnceLock<[i64; 96]> = OnceLock::new();
    let table = TABLE.get_or_init(|| {
        let mut table = [0_i64; 96];
        for (step, entry) in table.iter_mut().enumerate() {
            let exact = 3438.0 * (step as f64 * 225.0 / 60.0).to_radians().sin();
            let bias = 0.215 * exact.signum() * (exact.abs() - 1716.0).signum();
            *entry = (exact + bias + 0.5).floor() as i64;
        }
        table
    });
    table[index.rem_euclid(96) as usize]
}

/// Interpolated sine of `theta` arcminutes, scaled by 3438.
pub fn sine<N: HinduNumber>(theta: &N) -> N {
    let q = theta.clone() / N::integer(225);
    let f = q.fract();
    let above = N::integer(sine_table(q.ceil_i64()));
    let below = N::integer(sine_table(q.floor_i64()));
    f.clone() * above + (N::integer(1) - f) * below
}

/// Inverse of [`sine`] on `[-3438, 3438]`.
pub fn arcsine<N: HinduNumber>(amplitude: &N) -> N {
    if *amplitude < N::integer(0) {
        return -arcsine(&-amplitude.clone());
    }
    let mut pos = 0;
    while pos < 24 && *amplitude > N::integer(sine_table(pos)) {
        pos += 1;
    }
    let below = sine_table(pos - 1);
    let span = N::integer(sine_table(pos) - below);
    (N::integer(pos - 1) + (amplitude.clone() - N::integer(below)) / span) * N::integer(225)
}

/// Position on a circle of a body with uniform period `period`.
pub fn mean_position<N: HinduNumber>(t: &N, period: &N) -> N {
    (t.clone() / period.clone()).fract() * k::<N>().circle.clone()
}

/// Mean position corrected by an epicycle of relative size `size` that
/// shrinks by `change` with the anomaly.
pub fn true_position<N: HinduNumber>(t: &N, period: &N, size: &N, anomalistic: &N, change: &N) -> N {
    let c = k::<N>();
    let lambda = mean_position(t, period);
    let offset = sine(&mean_position(&(c.creation.clone() + t.clone()), anomalistic));
    let contraction = offset.abs() * change.clone() * size.clone() / N::integer(3438);
    let equation = arcsine(&((size.clone() - contraction) * offset));
    (lambda - equation).modulo(&c.circle)
}

/// Sidereal solar longitude.
pub fn solar_longitude<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    true_position(
        t,
        &c.sidereal_year,
        &c.solar_epicycle,
        &c.anomalistic_year,
        &c.epicycle_change,
    )
}

/// Sign of the zodiac the sun occupies, 1 (Mesha) to 12 (Mina).
pub fn zodiac<N: HinduNumber>(t: &N) -> i64 {
    (solar_longitude(t) / N::integer(1800)).floor_i64() + 1
}

/// Sidereal lunar longitude.
pub fn lunar_longitude<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    true_position(
        t,
        &c.sidereal_month,
        &c.lunar_epicycle,
        &c.anomalistic_month,
        &c.epicycle_change,
    )
}

/// Elongation of the moon from the sun.
pub fn lunar_phase<N: HinduNumber>(t: &N) -> N {
    (lunar_longitude(t) - solar_longitude(t)).modulo(&k::<N>().circle)
}

/// Lunar day (tithi) in progress, 1 to 30.
pub fn lunar_day<N: HinduNumber>(t: &N) -> i64 {
    (lunar_phase(t) / N::integer(720)).floor_i64() + 1
}

/// Latest new moon at or before `t`.
///
/// Bisects the two-thirds-of-a-day bracket around the mean conjunction
/// until the zodiac sign at both ends agrees; a bracket that lands after
/// `t` is retried twenty days earlier. If every retry overshoots, the
/// result is clamped to `t` so it never lies in the future.
pub fn new_moon<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    let two_thirds = N::ratio(2, 3);
    let half_circle = N::integer(10_800);
    let mut target = t.clone();
    let mut mid = target.clone();
    for _ in 0..NEW_MOON_RETRIES {
        let next = target.clone() + N::integer(1);
        let tau = next.clone() - next.modulo(&c.synodic_month);
        let mut lo = tau.clone() - two_thirds.clone();
        let mut hi = tau + two_thirds.clone();
        mid = (lo.clone() + hi.clone()) / N::integer(2);
        for _ in 0..NEW_MOON_ITERATIONS {
            let settled = target < lo || (hi <= target && zodiac(&lo) == zodiac(&hi));
            if settled {
                break;
            }
            if lunar_phase(&mid) < half_circle {
                hi = mid;
            } else {
                lo = mid;
            }
            mid = (lo.clone() + hi.clone()) / N::integer(2);
        }
        if mid <= target {
            return mid;
        }
        target = N::integer(target.floor_i64() - 20);
    }
    debug!(?t, ?mid, "new moon bracket overshot on every retry");
    if mid <= *t {
        mid
    } else {
        t.clone()
    }
}

/// Elapsed sidereal years at `t`, corrected near the year boundary.
pub fn calendar_year<N: HinduNumber>(t: &N) -> i64 {
    let c = k::<N>();
    let q = t.clone() / c.sidereal_year.clone();
    let mean = q.fract() * c.circle.clone();
    let actual = solar_longitude(t);
    let year = q.floor_i64();
    let high = N::integer(20_000);
    let low = N::integer(1000);
    if actual > high && mean < low {
        year - 1
    } else if mean > high && actual < low {
        year + 1
    } else {
        year
    }
}

/// Tropical solar longitude, from the oscillating precession model.
pub fn tropical_longitude<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    let days = t.floor();
    let precession = (days * c.precession_rate.clone()).modulo(&N::integer(6480));
    let precession = N::integer(1620)
        - (N::integer(3240) - (precession + N::integer(1620))).abs();
    (solar_longitude(t) - precession).modulo(&c.circle)
}

/// Arcminutes of sidereal rotation per arcminute of solar longitude while
/// the current sign rises.
pub fn rising_sign<N: HinduNumber>(t: &N) -> N {
    let sign = (tropical_longitude(t) / N::integer(1800)).floor_i64();
    N::integer(RISING_SIGNS[sign.rem_euclid(6) as usize])
}

/// Solar motion in arcminutes per day.
pub fn daily_motion<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    let anomaly = mean_position(&(c.creation.clone() + t.clone()), &c.anomalistic_year);
    let epicycle = c.solar_epicycle.clone() - sine(&anomaly).abs() / N::integer(3_713_040);
    let entry = (anomaly / N::integer(225)).floor_i64();
    let sine_difference = N::integer(sine_table(entry + 1) - sine_table(entry));
    let factor = -(epicycle / N::integer(225)) * sine_difference;
    c.mean_motion.clone() * (factor + N::integer(1))
}

/// Difference between solar and sidereal days, in arcminutes.
pub fn solar_sidereal_difference<N: HinduNumber>(t: &N) -> N {
    daily_motion(t) * rising_sign(t) / N::integer(1800)
}

/// Ascensional difference at latitude `latitude` (arcminutes).
pub fn ascensional_difference<N: HinduNumber>(t: &N, latitude: &N) -> N {
    let sin_declination = k::<N>().obliquity.clone() * sine(&tropical_longitude(t));
    let diurnal_radius = sine(&(N::integer(5400) - arcsine(&sin_declination)));
    let tan_latitude = sine(latitude) / sine(&(latitude.clone() + N::integer(5400)));
    let earth_sine = sin_declination * tan_latitude;
    arcsine(&(earth_sine / diurnal_radius * N::integer(-3438)))
}

/// Difference between true and mean solar time, in days.
pub fn equation_of_time<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    let offset = sine(&mean_position(
        &(c.creation.clone() + t.clone()),
        &c.anomalistic_year,
    ));
    let equation_sun =
        (offset.abs() / N::integer(3_713_040) - c.solar_epicycle.clone()) * offset;
    daily_motion(t) * equation_sun * c.equation_factor.clone()
}

/// Sunrise at Ujjain on the day opening at `t`.
pub fn sunrise<N: HinduNumber>(t: &N) -> N {
    let c = k::<N>();
    t.clone()
        + N::ratio(1, 4)
        + equation_of_time(t)
        + c.sunrise_factor.clone()
            * (ascensional_difference(t, &c.ujjain_latitude)
                + solar_sidereal_difference(t) / N::integer(4))
}

/// Sunrise at Ujjain on `date`, as a universal moment.
pub fn sunrise_moment<N: HinduNumber>(date: Fixed) -> Time<RD> {
    moment_of(&sunrise::<N>(&days_since_epoch(date)))
}
