// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Mayan Long Count, Haab and Tzolkin.
//!
//! The Long Count is a mixed-radix day count (20, 18, 20, 20 and an
//! unbounded baktun place). Haab (365 days) and Tzolkin (260 days) are
//! independent cycles read off the same day; the pair repeats every
//! 18 980 days, the Calendar Round.

use std::fmt;

use crate::arith::{amod, fldiv, modulo};
use crate::date::{lookup, small, Date, DateConvertible};
use crate::error::CalendarError;
use crate::fixed::Fixed;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mayan calendar marker.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Mayan;

/// Length of the Calendar Round in days.
pub const CALENDAR_ROUND: i64 = 18_980;

const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Uo", "Zip", "Zotz", "Tzec", "Xul", "Yaxkin", "Mol", "Chen", "Yax", "Zac", "Ceh", "Mac",
    "Kankin", "Muan", "Pax", "Kayab", "Cumku", "Uayeb",
];

const TZOLKIN_NAMES: [&str; 20] = [
    "Imix", "Ik", "Akbal", "Kan", "Chicchan", "Cimi", "Manik", "Lamat", "Muluc", "Oc", "Chuen",
    "Eb", "Ben", "Ix", "Men", "Cib", "Caban", "Etznab", "Cauac", "Ahau",
];

/// Five-place Long Count.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LongCount {
    pub baktun: i64,
    pub katun: u8,
    pub tun: u8,
    pub uinal: u8,
    pub kin: u8,
}

impl LongCount {
    pub const fn new(baktun: i64, katun: u8, tun: u8, uinal: u8, kin: u8) -> Self {
        Self {
            baktun,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// Days since the Long Count epoch.
    pub const fn days(&self) -> i64 {
        self.baktun * 144_000
            + self.katun as i64 * 7_200
            + self.tun as i64 * 360
            + self.uinal as i64 * 20
            + self.kin as i64
    }

    const fn is_normalised(&self) -> bool {
        self.katun < 20 && self.tun < 20 && self.uinal < 18 && self.kin < 20
    }

    fn from_days(days: i64) -> Self {
        let baktun = fldiv(days, 144_000);
        let day_of_baktun = modulo(days, 144_000);
        let katun = fldiv(day_of_baktun, 7_200);
        let day_of_katun = modulo(day_of_baktun, 7_200);
        let tun = fldiv(day_of_katun, 360);
        let day_of_tun = modulo(day_of_katun, 360);
        Self::new(
            baktun,
            small(katun),
            small(tun),
            small(fldiv(day_of_tun, 20)),
            small(modulo(day_of_tun, 20)),
        )
    }
}

impl fmt::Display for LongCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}.{}",
            self.baktun, self.katun, self.tun, self.uinal, self.kin
        )
    }
}

/// Haab date: month `1..=19` (the 19th has 5 days) and day `0..=19`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Haab {
    pub month: u8,
    pub day: u8,
}

impl Haab {
    pub const fn new(month: u8, day: u8) -> Self {
        Self { month, day }
    }

    /// Position within the 365-day cycle.
    const fn ordinal(&self) -> i64 {
        (self.month as i64 - 1) * 20 + self.day as i64
    }
}

/// Tzolkin date: number `1..=13` and name `1..=20`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tzolkin {
    pub number: u8,
    pub name: u8,
}

impl Tzolkin {
    pub const fn new(number: u8, name: u8) -> Self {
        Self { number, name }
    }

    /// Position within the 260-day cycle.
    const fn ordinal(&self) -> i64 {
        let number = self.number as i64;
        modulo(number - 1 + 39 * (number - self.name as i64), 260)
    }
}

/// All three Mayan counts of one day.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MayanDate {
    pub long_count: LongCount,
    pub haab: Haab,
    pub tzolkin: Tzolkin,
}

impl Mayan {
    /// Long Count 0.0.0.0.0: Julian day number 584 283 (Julian −3113-09-06).
    pub const EPOCH: Fixed = Fixed::from_julian_day_number(584_283);

    /// Day count of Haab 0 Pop preceding the epoch (epoch is 8 Cumku).
    pub const HAAB_EPOCH: Fixed = Fixed(Self::EPOCH.0 - Haab::new(18, 8).ordinal());

    /// Day count of Tzolkin 1 Imix preceding the epoch (epoch is 4 Ahau).
    pub const TZOLKIN_EPOCH: Fixed = Fixed(Self::EPOCH.0 - Tzolkin::new(4, 20).ordinal());

    pub fn haab_from_fixed(date: Fixed) -> Haab {
        let count = modulo(date - Self::HAAB_EPOCH, 365);
        Haab::new(small(fldiv(count, 20) + 1), small(modulo(count, 20)))
    }

    pub fn tzolkin_from_fixed(date: Fixed) -> Tzolkin {
        let count = date - Self::TZOLKIN_EPOCH + 1;
        Tzolkin::new(small(amod(count, 13)), small(amod(count, 20)))
    }

    pub fn long_count_from_fixed(date: Fixed) -> LongCount {
        LongCount::from_days(date - Self::EPOCH)
    }

    /// Latest day on or before `date` with Haab date `haab`.
    pub fn haab_on_or_before(haab: Haab, date: Fixed) -> Fixed {
        date - modulo(date - Self::HAAB_EPOCH - haab.ordinal(), 365)
    }

    /// Latest day on or before `date` with Tzolkin date `tzolkin`.
    pub fn tzolkin_on_or_before(tzolkin: Tzolkin, date: Fixed) -> Fixed {
        date - modulo(date - Self::TZOLKIN_EPOCH - tzolkin.ordinal(), 260)
    }

    /// Latest day on or before `date` carrying both `haab` and `tzolkin`.
    ///
    /// Only one combination in five occurs; `None` for the others.
    pub fn calendar_round_on_or_before(haab: Haab, tzolkin: Tzolkin, date: Fixed) -> Option<Fixed> {
        let haab_count = haab.ordinal() + Self::HAAB_EPOCH.0;
        let tzolkin_count = tzolkin.ordinal() + Self::TZOLKIN_EPOCH.0;
        let diff = tzolkin_count - haab_count;
        if modulo(diff, 5) != 0 {
            return None;
        }
        Some(date - modulo(date.0 - haab_count - 365 * diff, CALENDAR_ROUND))
    }
}

impl DateConvertible for Mayan {
    const LABEL: &'static str = "Mayan";
    type Fields = MayanDate;

    /// Uses the Long Count; the Haab and Tzolkin parts are checked by [`Date::new`].
    fn fixed_from_fields(fields: &MayanDate) -> Result<Fixed, CalendarError> {
        if !fields.long_count.is_normalised() {
            return Err(CalendarError::inconsistent(Self::LABEL, fields));
        }
        Ok(Self::EPOCH + fields.long_count.days())
    }

    fn fields_from_fixed(date: Fixed) -> MayanDate {
        MayanDate {
            long_count: Self::long_count_from_fixed(date),
            haab: Self::haab_from_fixed(date),
            tzolkin: Self::tzolkin_from_fixed(date),
        }
    }

    fn render(fields: &MayanDate) -> Result<String, CalendarError> {
        let haab = lookup(&HAAB_MONTHS, "Haab months", i64::from(fields.haab.month) - 1)?;
        let tzolkin = lookup(&TZOLKIN_NAMES, "Tzolkin names", i64::from(fields.tzolkin.name) - 1)?;
        Ok(format!(
            "{} {} {} {} {}",
            fields.long_count, fields.tzolkin.number, tzolkin, fields.haab.day, haab
        ))
    }
}

impl Date<Mayan> {
    /// The day with Long Count `long_count`.
    pub fn from_long_count(long_count: LongCount) -> Result<Self, CalendarError> {
        if !long_count.is_normalised() {
            return Err(CalendarError::inconsistent(Mayan::LABEL, long_count));
        }
        Ok(Self::from_fixed(Mayan::EPOCH + long_count.days()))
    }
}
