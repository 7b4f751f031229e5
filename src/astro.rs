// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! # Astronomical position engine
//!
//! Low-precision solar and lunar series used by the astronomical calendars.
//!
//! | Quantity | Method |
//! |----------|--------|
//! | Solar longitude | 49-term periodic series on the dynamical axis, plus aberration and nutation |
//! | Equation of time | closed form in mean longitude, anomaly, obliquity and eccentricity |
//! | Solar longitude crossings | bisection over a window sized from the mean solar rate |
//! | New moons | periodic series indexed by lunation number (no search) |
//! | Sunrise / sunset | almanac approximation with zenith 90°50′ |
//!
//! All moments are [`Time<RD>`] on universal time; series that need the
//! dynamical axis convert through [`JDE`] internally.

use qtty::{Day, Days, Degrees, Minutes, Simplify};

use crate::arith::{fmod, poly};
use crate::calendars::Gregorian;
use crate::fixed::Fixed;
use crate::instant::Time;
use crate::scales::{JD, JDE, RD};

/// Mean length of the tropical year.
pub const MEAN_TROPICAL_YEAR: Days = Days::new(365.242_189);

/// Mean length of the synodic month.
pub const MEAN_SYNODIC_MONTH: Days = Days::new(29.530_588_853);

/// Bisection tolerance of the solar-longitude searches.
const SEARCH_TOLERANCE: Days = Days::new(1e-5);

#[inline]
fn sin_deg(x: f64) -> f64 {
    x.to_radians().sin()
}

#[inline]
fn cos_deg(x: f64) -> f64 {
    x.to_radians().cos()
}

#[inline]
fn tan_deg(x: f64) -> f64 {
    x.to_radians().tan()
}

/// Universal Julian centuries since J2000.0.
#[inline]
fn universal_centuries(moment: Time<RD>) -> f64 {
    ((moment.to::<JD>() - Time::<JD>::J2000) / Time::<JD>::JULIAN_CENTURY)
        .simplify()
        .value()
}

// ═══════════════════════════════════════════════════════════════════════════
// Solar longitude
// ═══════════════════════════════════════════════════════════════════════════

#[rustfmt::skip]
const LONGITUDE_COEFFS: [f64; 49] = [
    403_406.0, 195_207.0, 119_433.0, 112_392.0, 3_891.0, 2_819.0, 1_721.0, 660.0, 350.0, 334.0,
    314.0, 268.0, 242.0, 234.0, 158.0, 132.0, 129.0, 114.0, 99.0, 93.0, 86.0, 78.0, 72.0, 68.0,
    64.0, 46.0, 38.0, 37.0, 32.0, 29.0, 28.0, 27.0, 27.0, 25.0, 24.0, 21.0, 21.0, 20.0, 18.0,
    17.0, 14.0, 13.0, 13.0, 13.0, 12.0, 10.0, 10.0, 10.0, 10.0,
];

#[rustfmt::skip]
const LONGITUDE_MULTIPLIERS: [f64; 49] = [
    0.016_210_43, 628.303_480_67, 628.308_215_24, 628.296_343_02, 1_256.605_691, 1_256.609_84,
    628.324_766, 1_256.593_1, 575.338_5, -0.339_31, 7_771.377_15, 786.041_91, 0.054_12,
    393.020_98, -0.348_61, 1_150.676_98, 157.743_37, 52.966_7, 588.492_7, 52.961_1, -39.807,
    522.376_9, 550.764_7, 2.610_8, 157.738_5, 1_884.910_3, -77.565_5, 2.648_9, 1_179.062_7,
    550.757_5, -79.613_9, 1_884.898_1, 21.321_9, 1_097.710_3, 548.685_6, 254.439_3, -557.314_3,
    606.977_4, 21.327_9, 1_097.716_3, -77.528_2, 1_884.919_1, 2.078_1, 294.246_3, -0.079_9,
    469.411_4, -0.682_9, 214.632_5, 1_572.084,
];

#[rustfmt::skip]
const LONGITUDE_ADDENDS: [f64; 49] = [
    4.721_964, 5.937_458, 1.115_589, 5.781_616, 5.547_4, 1.512, 4.189_7, 5.415, 4.315, 4.553,
    5.198, 5.989, 2.911, 1.423, 0.061, 2.317, 3.193, 2.828, 0.52, 4.65, 4.35, 2.75, 4.5, 3.23,
    1.22, 0.14, 3.44, 4.37, 1.14, 2.84, 5.96, 5.09, 1.72, 2.56, 1.92, 0.09, 5.98, 4.03, 4.47,
    0.79, 4.24, 2.01, 2.65, 4.98, 0.93, 2.21, 3.59, 1.5, 2.55,
];

/// Annual aberration in radians, `c` in dynamical centuries.
#[inline]
fn aberration(c: f64) -> f64 {
    0.000_001_7 * cos_deg(177.63 + 35_999.018_48 * c) - 0.000_097_3
}

/// Nutation in longitude in radians, `c` in dynamical centuries.
#[inline]
fn nutation(c: f64) -> f64 {
    let a = poly(c, &[124.90, -1_934.134, 0.002_063]);
    let b = poly(c, &[201.11, 72_001.537_7, 0.000_57]);
    -0.000_083_4 * sin_deg(a) - 0.000_006_4 * sin_deg(b)
}

/// Apparent geocentric longitude of the sun at `moment`, in `[0, 360)`.
pub fn solar_longitude(moment: Time<RD>) -> Degrees {
    let c = moment.to::<JD>().julian_centuries().value();
    let periodic: f64 = LONGITUDE_COEFFS
        .iter()
        .zip(LONGITUDE_MULTIPLIERS.iter())
        .zip(LONGITUDE_ADDENDS.iter())
        .map(|((x, y), z)| x * (y * c + z).sin())
        .sum();
    let lambda = 4.935_392_9 + 628.331_961_68 * c + 1e-7 * periodic;
    Degrees::new(fmod((lambda + aberration(c) + nutation(c)).to_degrees(), 360.0))
}

// ═══════════════════════════════════════════════════════════════════════════
// Equation of time and local time
// ═══════════════════════════════════════════════════════════════════════════

/// Apparent minus mean solar time at `moment`, as a fraction of a day.
pub fn equation_of_time(moment: Time<RD>) -> Days {
    let c = universal_centuries(moment);
    let longitude = poly(c, &[280.466_45, 36_000.769_83, 0.000_303_2]);
    let anomaly = poly(c, &[357.529_1, 35_999.050_3, -0.000_155_9, -0.000_000_48]);
    let obliquity = poly(
        c,
        &[23.439_291_11, -0.013_004_167, -0.000_000_163_89, 0.000_000_503_6],
    );
    let eccentricity = poly(c, &[0.016_708_617, -0.000_042_037, -0.000_000_123_6]);
    let y = tan_deg(obliquity / 2.0).powi(2);
    let equation = y * sin_deg(2.0 * longitude) - 2.0 * eccentricity * sin_deg(anomaly)
        + 4.0 * eccentricity * y * sin_deg(anomaly) * cos_deg(2.0 * longitude)
        - 0.5 * y * y * sin_deg(4.0 * longitude)
        - 1.25 * eccentricity * eccentricity * sin_deg(2.0 * anomaly);
    Days::new(equation / std::f64::consts::TAU)
}

/// Sundial time corresponding to local mean time `moment`.
#[inline]
pub fn apparent_from_local(moment: Time<RD>) -> Time<RD> {
    moment + equation_of_time(moment)
}

/// Local mean time corresponding to sundial time `moment`.
#[inline]
pub fn local_from_apparent(moment: Time<RD>) -> Time<RD> {
    moment - equation_of_time(moment)
}

/// Universal time of local time `moment` in a zone `zone` ahead of UT.
#[inline]
pub fn universal_from_local(moment: Time<RD>, zone: Minutes) -> Time<RD> {
    moment - zone.to::<Day>()
}

/// Local time in a zone `zone` ahead of UT of universal `moment`.
#[inline]
pub fn local_from_universal(moment: Time<RD>, zone: Minutes) -> Time<RD> {
    moment + zone.to::<Day>()
}

// ═══════════════════════════════════════════════════════════════════════════
// Solar longitude searches
// ═══════════════════════════════════════════════════════════════════════════

/// Days the mean sun needs to advance one degree.
#[inline]
fn solar_rate() -> f64 {
    MEAN_TROPICAL_YEAR.value() / 360.0
}

/// First moment after `moment` at which the solar longitude reaches the next
/// multiple of `step` degrees.
///
/// The window spans `step/360 · 400` days. A target of 0° is detected by the
/// longitude wrapping below `step` rather than by exceeding the target.
pub fn date_next_solar_longitude(moment: Time<RD>, step: Degrees) -> Time<RD> {
    let step = step.value();
    let current = solar_longitude(moment).value();
    let target = fmod(step * (current / step).ceil(), 360.0);
    let mut lo = moment;
    let mut hi = moment + Days::new(step / 360.0 * 400.0);
    let mut mid = lo.mean(hi);
    while hi - lo > SEARCH_TOLERANCE {
        let longitude = solar_longitude(mid).value();
        let reached = if target == 0.0 {
            step >= longitude
        } else {
            longitude >= target
        };
        if reached {
            hi = mid;
        } else {
            lo = mid;
        }
        mid = lo.mean(hi);
    }
    mid
}

/// First moment at or after `moment` at which the solar longitude is `target`.
///
/// Brackets the crossing ±5 days around the mean-rate estimate and bisects.
pub fn solar_longitude_after(target: Degrees, moment: Time<RD>) -> Time<RD> {
    let target = target.value();
    let tau =
        moment + Days::new(solar_rate() * fmod(target - solar_longitude(moment).value(), 360.0));
    let mut lo = moment.max(tau - Days::new(5.0));
    let mut hi = tau + Days::new(5.0);
    while hi - lo > SEARCH_TOLERANCE {
        let mid = lo.mean(hi);
        if fmod(solar_longitude(mid).value() - target, 360.0) < 180.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }
    lo.mean(hi)
}

/// Approximate moment at or before `moment` at which the solar longitude
/// was last `target`, within about a day.
pub fn estimate_prior_solar_longitude(target: Degrees, moment: Time<RD>) -> Time<RD> {
    let target = target.value();
    let rate = solar_rate();
    let tau = moment - Days::new(rate * fmod(solar_longitude(moment).value() - target, 360.0));
    let delta = fmod(solar_longitude(tau).value() - target + 180.0, 360.0) - 180.0;
    moment.min(tau - Days::new(rate * delta))
}

// ═══════════════════════════════════════════════════════════════════════════
// New moons
// ═══════════════════════════════════════════════════════════════════════════

#[rustfmt::skip]
const NEW_MOON_SINE_COEFFS: [f64; 24] = [
    -0.407_20, 0.172_41, 0.016_08, 0.010_39, 0.007_39, -0.005_14, 0.002_08, -0.001_11,
    -0.000_57, 0.000_56, -0.000_42, 0.000_42, 0.000_38, -0.000_24, -0.000_07, 0.000_04,
    0.000_04, 0.000_03, 0.000_03, -0.000_03, 0.000_03, -0.000_02, -0.000_02, 0.000_02,
];

#[rustfmt::skip]
const E_FACTOR: [i32; 24] = [0, 1, 0, 0, 1, 1, 2, 0, 0, 1, 0, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];

#[rustfmt::skip]
const SOLAR_COEFFS: [f64; 24] = [
    0.0, 1.0, 0.0, 0.0, -1.0, 1.0, 2.0, 0.0, 0.0, 1.0, 0.0, 1.0,
    1.0, -1.0, 2.0, 0.0, 3.0, 1.0, 0.0, 1.0, -1.0, -1.0, 1.0, 0.0,
];

#[rustfmt::skip]
const LUNAR_COEFFS: [f64; 24] = [
    1.0, 0.0, 2.0, 0.0, 1.0, 1.0, 0.0, 1.0, 1.0, 2.0, 3.0, 0.0,
    0.0, 2.0, 1.0, 2.0, 0.0, 1.0, 2.0, 1.0, 1.0, 1.0, 3.0, 4.0,
];

#[rustfmt::skip]
const MOON_COEFFS: [f64; 24] = [
    0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, -2.0, 2.0, 0.0, 0.0, 2.0,
    -2.0, 0.0, 0.0, -2.0, 0.0, -2.0, 2.0, 2.0, 2.0, -2.0, 0.0, 0.0,
];

#[rustfmt::skip]
const ADD_CONST: [f64; 14] = [
    299.77, 251.88, 251.83, 349.42, 84.66, 141.74, 207.14,
    154.84, 34.52, 207.19, 291.34, 161.72, 239.56, 331.55,
];

#[rustfmt::skip]
const ADD_COEFF: [f64; 14] = [
    0.107_408, 0.016_321, 26.641_886, 36.412_478, 18.206_239, 53.303_771, 2.453_732,
    7.306_860, 27.261_239, 0.121_824, 1.844_379, 24.198_154, 25.513_099, 3.592_518,
];

#[rustfmt::skip]
const ADD_FACTOR: [f64; 14] = [
    -0.009_173, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];

#[rustfmt::skip]
const EXTRA: [f64; 14] = [
    0.000_325, 0.000_165, 0.000_164, 0.000_126, 0.000_110, 0.000_062, 0.000_060,
    0.000_056, 0.000_047, 0.000_042, 0.000_040, 0.000_037, 0.000_035, 0.000_023,
];

/// Moment of the `n`-th new moon counted from the one of 2000-01-06.
pub fn new_moon_time(n: i64) -> Time<RD> {
    let n = n as f64;
    let k = n / 1_236.85;
    let approx = poly(
        k,
        &[2_451_550.097_65, 36_524.908_822_833_051, 0.000_133_7, -0.000_000_15, 0.000_000_000_73],
    );
    let e = poly(k, &[1.0, -0.002_516, -0.000_007_4]);
    let solar_anomaly = poly(k, &[2.553_4, 35_998.960_422_026_496, -0.000_021_8, -0.000_000_11]);
    let lunar_anomaly = poly(
        k,
        &[201.564_3, 477_197.676_401_067_93, 0.010_743_8, 0.000_012_39, -0.000_000_058],
    );
    let moon_argument = poly(
        k,
        &[160.710_8, 483_200.811_313_968_97, -0.001_634_1, -0.000_002_27, 0.000_000_011],
    );
    let omega = poly(k, &[124.774_6, -1_934.131_361_229_999_8, 0.002_069_1, 0.000_002_15]);

    let correction = -0.000_17 * sin_deg(omega)
        + (0..24)
            .map(|j| {
                NEW_MOON_SINE_COEFFS[j]
                    * e.powi(E_FACTOR[j])
                    * sin_deg(
                        SOLAR_COEFFS[j] * solar_anomaly
                            + LUNAR_COEFFS[j] * lunar_anomaly
                            + MOON_COEFFS[j] * moon_argument,
                    )
            })
            .sum::<f64>();
    let additional: f64 = (0..14)
        .map(|j| EXTRA[j] * sin_deg(ADD_CONST[j] + ADD_COEFF[j] * n + ADD_FACTOR[j] * k * k))
        .sum();

    Time::<JDE>::new(approx + correction + additional).to::<RD>()
}

/// First new moon at or after `moment`.
pub fn new_moon_at_or_after(moment: Time<RD>) -> Time<RD> {
    let date = Fixed::from_moment(moment);
    let years = Gregorian::year_from_fixed(date) as f64
        + Gregorian::day_number(date) as f64 / 365.25
        - 2000.0;
    let mut n = (years * 12.3685).floor() as i64 - 1;
    let mut new_moon = new_moon_time(n);
    while new_moon < moment {
        n += 1;
        new_moon = new_moon_time(n);
    }
    new_moon
}

/// Last new moon strictly before `moment`.
pub fn new_moon_before(moment: Time<RD>) -> Time<RD> {
    new_moon_at_or_after(new_moon_at_or_after(moment) - Days::new(45.0))
}

// ═══════════════════════════════════════════════════════════════════════════
// Sunrise and sunset
// ═══════════════════════════════════════════════════════════════════════════

/// Horizon crossing computed by [`solar_moment`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SolarEvent {
    Sunrise,
    Sunset,
}

impl SolarEvent {
    /// Quarter-day offset from local noon used for the first approximation.
    #[inline]
    const fn offset(self) -> f64 {
        match self {
            SolarEvent::Sunrise => -0.25,
            SolarEvent::Sunset => 0.25,
        }
    }
}

/// Approximate time of `event` on `date` at the given location, as a
/// fraction of the local mean solar day.
///
/// Longitude is positive east. Returns `None` when the sun stays above or
/// below the horizon all day.
pub fn solar_moment(
    date: Fixed,
    latitude: Degrees,
    longitude: Degrees,
    event: SolarEvent,
) -> Option<Days> {
    const OBLIQUITY: f64 = 23.441_884;
    const ZENITH: f64 = 90.833_333;

    let latitude = latitude.value();
    let approx = Gregorian::day_number(date) as f64 + 0.5 + event.offset()
        - longitude.value() / 360.0;
    let anomaly = 0.9856 * approx - 3.289;
    let sun_longitude = fmod(
        anomaly + 1.916 * sin_deg(anomaly) + 282.634 + 0.02 * sin_deg(2.0 * anomaly),
        360.0,
    );

    let mut right_ascension = (cos_deg(OBLIQUITY) * tan_deg(sun_longitude))
        .atan()
        .to_degrees();
    let quadrant = (sun_longitude / 90.0).floor() + 1.0;
    if quadrant != 1.0 && quadrant != 4.0 {
        right_ascension += 180.0;
    }

    let declination = (sin_deg(OBLIQUITY) * sin_deg(sun_longitude)).asin().to_degrees();
    let cos_hour_angle = (cos_deg(ZENITH) - sin_deg(declination) * sin_deg(latitude))
        / (cos_deg(declination) * cos_deg(latitude));
    if !(-1.0..=1.0).contains(&cos_hour_angle) {
        return None;
    }
    let hour_angle = cos_hour_angle.acos().to_degrees() * event.offset().signum();

    let local = (hour_angle + right_ascension) / 360.0 - 0.275_92 - 0.002_737_92 * approx;
    Some(Days::new(local - local.floor()))
}
