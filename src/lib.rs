// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendrica
//!
//! Conversions between a shared linear day count and historical, religious
//! and astronomical calendars.
//!
//! # Core types
//!
//! - [`Fixed`] — signed day number; `Fixed(1)` is Monday 0001-01-01 (Gregorian).
//! - [`Date<C>`] — a day on calendar `C`, holding both the day count and
//!   the calendar's fields.
//! - [`DateConvertible`] — trait that defines a calendar (fields ↔ day count).
//! - [`WeekAware`] — weekday arithmetic shared by [`Fixed`] and every [`Date`].
//! - [`Time<S>`] — fractional instant parameterised by a [`TimeScale`] marker.
//! - [`Moment`] — type alias for `Time<RD>`, the universal-time moment used
//!   by the astronomical functions.
//!
//! # Calendars
//!
//! | Marker | Kind |
//! |--------|------|
//! | [`Gregorian`], [`Julian`] | solar, closed form |
//! | [`Coptic`], [`Ethiopic`] | solar, closed form |
//! | [`Islamic`] | arithmetic lunar |
//! | [`Persian`] | arithmetic solar (2820-year cycle) |
//! | [`Hebrew`] | arithmetic lunisolar |
//! | [`Bahai`] | solar, 19 × 19 days |
//! | [`Iso`] | week date |
//! | [`French`], [`FrenchAstronomical`] | Revolutionary, arithmetic and equinox-based |
//! | [`Mayan`] | Long Count with Haab and Tzolkin |
//! | [`Chinese`] | astronomical lunisolar |
//! | [`OldHinduSolar`], [`OldHinduLunar`] | mean Arya-siddhanta |
//! | [`ModifiedHinduSolar`], [`ModifiedHinduLunar`] | true Surya-Siddhanta, `f64` or exact |
//!
//! # Time scales
//!
//! | Marker | Scale |
//! |--------|-------|
//! | [`JD`] | Julian Day |
//! | [`RD`] | Moment on the fixed day count |
//! | [`MJD`] | Modified Julian Date |
//! | [`JDE`] | Julian Ephemeris Day |
//!
//! # ΔT (Delta T)
//!
//! The difference between dynamical and universal time is applied
//! automatically by the [`JDE`] scale. The raw value (in seconds) is
//! available via [`Time::<RD>::delta_t()`](Time::delta_t).
//!
//! # Example
//!
//! ```
//! use calendrica::{Date, Fixed, Gregorian, Hebrew, Ymd};
//!
//! let day = Date::<Gregorian>::new(Ymd::new(2000, 1, 1)).unwrap();
//! assert_eq!(day.fixed(), Fixed(730_120));
//!
//! let hebrew = day.to::<Hebrew>();
//! assert_eq!(*hebrew.fields(), Ymd::new(5760, 10, 23));
//! assert_eq!(hebrew.to_string(), "23 Tevet 5760 A.M.");
//! ```

pub mod arith;
pub mod astro;
pub mod calendars;
mod date;
mod delta_t;
mod error;
mod fixed;
pub mod hindu;
pub(crate) mod instant;
mod julian_date_ext;
pub(crate) mod scales;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use calendars::{
    Bahai, BahaiDate, Chinese, ChineseDate, Coptic, Ethiopic, French, FrenchAstronomical,
    Gregorian, Haab, Hebrew, Islamic, Iso, IsoDate, Julian, LongCount, Mayan, MayanDate, Persian,
    Tzolkin,
};
pub use date::{Date, DateConvertible, MonthDayYear, Ymd, INVALID_DATE};
pub use error::CalendarError;
pub use fixed::{Fixed, WeekAware, Weekday};
pub use hindu::{HinduLunarDate, ModifiedHinduLunar, ModifiedHinduSolar, OldHinduLunar, OldHinduSolar};
pub use instant::{Time, TimeScale};
pub use scales::{JD, JDE, MJD, RD};

// ── Type aliases ──────────────────────────────────────────────────────────

/// A universal-time moment on the fixed day count: midnight opening
/// `Fixed(n)` is `n.0`.
///
/// This is a type alias for [`Time<RD>`].
pub type Moment = Time<RD>;

/// Julian Date — continuous count of days since the Julian Period.
///
/// This is a type alias for [`Time<JD>`].
pub type JulianDate = Time<JD>;

/// Julian Ephemeris Day — dynamical Julian day used by the solar series.
///
/// This is a type alias for [`Time<JDE>`].
pub type JulianEphemerisDay = Time<JDE>;

/// Modified Julian Date — `JD − 2 400 000.5`.
///
/// This is a type alias for [`Time<MJD>`].
pub type ModifiedJulianDate = Time<MJD>;

/// Hindu solar calendar evaluated in exact rational arithmetic.
pub type HinduSolarExact = ModifiedHinduSolar<num_rational::BigRational>;

/// Hindu lunisolar calendar evaluated in exact rational arithmetic.
pub type HinduLunarExact = ModifiedHinduLunar<num_rational::BigRational>;
