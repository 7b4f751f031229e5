// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar-generic dates.
//!
//! A calendar is a zero-sized marker implementing [`DateConvertible`]: a pair
//! of pure functions between its own field structure and the shared
//! [`Fixed`] day count. [`Date<C>`] pairs a day count with the fields derived
//! from it, and every operation on it (ordering, shifting, conversion to
//! another calendar) goes through the day count.
//!
//! ```text
//! fields ──fixed_from_fields──▶ Fixed ──fields_from_fixed──▶ fields
//! ```

use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::NaiveDate;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CalendarError;
use crate::fixed::{Fixed, WeekAware};
use crate::instant::Time;
use crate::scales::{JD, RD};

/// Text written by `Display` when a date cannot be rendered.
pub const INVALID_DATE: &str = "invalid date";

// ═══════════════════════════════════════════════════════════════════════════
// DateConvertible
// ═══════════════════════════════════════════════════════════════════════════

/// The day-count contract every calendar implements.
///
/// `fields_from_fixed` is total. `fixed_from_fields` may fail on fields that
/// are structurally invalid for the calendar (month out of range, year zero
/// on the Julian calendar, a Hindu date that never occurs). It does not
/// police day ranges; [`Date::new`] closes that gap by checking that the
/// computed day count maps back to the same fields.
pub trait DateConvertible: Copy + Debug + 'static {
    /// Calendar name used in errors and logs.
    const LABEL: &'static str;

    /// Calendar-specific fields derived from a day count.
    type Fields: Copy + Debug + PartialEq;

    /// Day count of `fields`.
    fn fixed_from_fields(fields: &Self::Fields) -> Result<Fixed, CalendarError>;

    /// Fields of the day `date`.
    fn fields_from_fixed(date: Fixed) -> Self::Fields;

    /// English rendering of `fields`.
    fn render(fields: &Self::Fields) -> Result<String, CalendarError>;
}

/// Name at `index` in `table`, or [`CalendarError::IndexOutOfRange`].
pub(crate) fn lookup(
    table: &[&'static str],
    name: &'static str,
    index: i64,
) -> Result<&'static str, CalendarError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| table.get(i).copied())
        .ok_or(CalendarError::IndexOutOfRange { table: name, index })
}

// ═══════════════════════════════════════════════════════════════════════════
// Month / day / year shape
// ═══════════════════════════════════════════════════════════════════════════

/// Year, month and day fields shared by most solar calendars.
///
/// The derived order is chronological within a single calendar.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ymd {
    pub year: i64,
    pub month: u8,
    pub day: u8,
}

impl Ymd {
    #[inline]
    pub const fn new(year: i64, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// Anything exposing a month/day/year triple.
pub trait MonthDayYear {
    fn year(&self) -> i64;
    fn month(&self) -> u8;
    fn day(&self) -> u8;
}

impl MonthDayYear for Ymd {
    #[inline]
    fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    fn day(&self) -> u8 {
        self.day
    }
}

/// `Ok(())` if `month` lies in `range`, an inconsistency error naming `fields` otherwise.
pub(crate) fn check_month<F: Debug>(
    calendar: &'static str,
    fields: &F,
    month: u8,
    range: std::ops::RangeInclusive<u8>,
) -> Result<(), CalendarError> {
    if range.contains(&month) {
        Ok(())
    } else {
        Err(CalendarError::inconsistent(calendar, fields))
    }
}

/// Narrow a value already reduced to a small range.
#[inline]
pub(crate) fn small(value: i64) -> u8 {
    value.clamp(0, i64::from(u8::MAX)) as u8
}

// ═══════════════════════════════════════════════════════════════════════════
// Date<C>
// ═══════════════════════════════════════════════════════════════════════════

/// A day on calendar `C`: the authoritative day count plus its fields.
///
/// Fields are always those derived from the day count; every mutator
/// re-derives them.
pub struct Date<C: DateConvertible> {
    fixed: Fixed,
    fields: C::Fields,
    _calendar: PhantomData<C>,
}

impl<C: DateConvertible> Clone for Date<C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: DateConvertible> Copy for Date<C> {}

impl<C: DateConvertible> Debug for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Date")
            .field("calendar", &C::LABEL)
            .field("fixed", &self.fixed)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<C: DateConvertible> Date<C> {
    // ── constructors ──────────────────────────────────────────────────

    /// Build from explicit fields.
    ///
    /// Fails with [`CalendarError::InconsistentDate`] unless the fields name a
    /// day that actually occurs on the calendar.
    pub fn new(fields: C::Fields) -> Result<Self, CalendarError> {
        let fixed = C::fixed_from_fields(&fields)?;
        let derived = C::fields_from_fixed(fixed);
        if derived != fields {
            debug!(calendar = C::LABEL, ?fields, ?derived, "fields do not round-trip");
            return Err(CalendarError::inconsistent(C::LABEL, fields));
        }
        Ok(Self {
            fixed,
            fields,
            _calendar: PhantomData,
        })
    }

    /// Build from a day count.
    #[inline]
    pub fn from_fixed(fixed: Fixed) -> Self {
        Self {
            fixed,
            fields: C::fields_from_fixed(fixed),
            _calendar: PhantomData,
        }
    }

    /// The day containing `moment`.
    #[inline]
    pub fn from_moment(moment: Time<RD>) -> Self {
        Self::from_fixed(Fixed::from_moment(moment))
    }

    // ── accessors ─────────────────────────────────────────────────────

    #[inline]
    pub fn fixed(&self) -> Fixed {
        self.fixed
    }

    #[inline]
    pub fn fields(&self) -> &C::Fields {
        &self.fields
    }

    /// Julian day of the midnight opening this date.
    #[inline]
    pub fn to_julian_day(&self) -> Time<JD> {
        self.fixed.to_julian_day()
    }

    /// Moment of the midnight opening this date.
    #[inline]
    pub fn to_moment(&self) -> Time<RD> {
        self.fixed.to_moment()
    }

    /// The same day on calendar `D`.
    #[inline]
    pub fn to<D: DateConvertible>(&self) -> Date<D> {
        Date::from_fixed(self.fixed)
    }

    /// Convert to a chrono date, if inside chrono's range.
    #[inline]
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        self.fixed.to_naive_date()
    }

    // ── mutators ──────────────────────────────────────────────────────

    /// Move to `fixed`, re-deriving the fields.
    #[inline]
    pub fn set_fixed(&mut self, fixed: Fixed) {
        *self = Self::from_fixed(fixed);
    }

    /// Move to the day named by `fields`; on error `self` is left untouched.
    pub fn set_fields(&mut self, fields: C::Fields) -> Result<(), CalendarError> {
        *self = Self::new(fields)?;
        Ok(())
    }

    // ── ordering on the shared timeline ───────────────────────────────

    /// `true` if this date is earlier than `other`, whatever its calendar.
    #[inline]
    pub fn precedes<D: DateConvertible>(&self, other: &Date<D>) -> bool {
        self.fixed < other.fixed
    }

    /// `true` if this date is later than `other`, whatever its calendar.
    #[inline]
    pub fn follows<D: DateConvertible>(&self, other: &Date<D>) -> bool {
        self.fixed > other.fixed
    }

    /// Days from `other` to this date.
    #[inline]
    pub fn difference<D: DateConvertible>(&self, other: &Date<D>) -> i64 {
        self.fixed - other.fixed
    }
}

impl<C: DateConvertible> From<Fixed> for Date<C> {
    #[inline]
    fn from(fixed: Fixed) -> Self {
        Self::from_fixed(fixed)
    }
}

impl<C: DateConvertible> From<NaiveDate> for Date<C> {
    #[inline]
    fn from(date: NaiveDate) -> Self {
        Self::from_fixed(Fixed::from(date))
    }
}

impl<C: DateConvertible> From<Date<C>> for Fixed {
    #[inline]
    fn from(date: Date<C>) -> Self {
        date.fixed
    }
}

impl<C: DateConvertible> WeekAware for Date<C> {
    #[inline]
    fn day_count(&self) -> Fixed {
        self.fixed
    }
}

impl<C: DateConvertible> MonthDayYear for Date<C>
where
    C::Fields: MonthDayYear,
{
    #[inline]
    fn year(&self) -> i64 {
        self.fields.year()
    }

    #[inline]
    fn month(&self) -> u8 {
        self.fields.month()
    }

    #[inline]
    fn day(&self) -> u8 {
        self.fields.day()
    }
}

// ── Equality / ordering by day count ──────────────────────────────────────

impl<C: DateConvertible> PartialEq for Date<C> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.fixed == other.fixed
    }
}

impl<C: DateConvertible> Eq for Date<C> {}

impl<C: DateConvertible> PartialOrd for Date<C> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: DateConvertible> Ord for Date<C> {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.fixed.cmp(&other.fixed)
    }
}

impl<C: DateConvertible> Hash for Date<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.fixed.hash(state);
    }
}

// ── Display ───────────────────────────────────────────────────────────────

impl<C: DateConvertible> fmt::Display for Date<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match C::render(&self.fields) {
            Ok(text) => f.write_str(&text),
            Err(err) => {
                debug!(calendar = C::LABEL, fields = ?self.fields, %err, "rendering failed");
                f.write_str(INVALID_DATE)
            }
        }
    }
}

// ── Arithmetic ────────────────────────────────────────────────────────────

impl<C: DateConvertible> Add<i64> for Date<C> {
    type Output = Self;
    #[inline]
    fn add(self, days: i64) -> Self::Output {
        Self::from_fixed(self.fixed + days)
    }
}

impl<C: DateConvertible> AddAssign<i64> for Date<C> {
    #[inline]
    fn add_assign(&mut self, days: i64) {
        self.set_fixed(self.fixed + days);
    }
}

impl<C: DateConvertible> Sub<i64> for Date<C> {
    type Output = Self;
    #[inline]
    fn sub(self, days: i64) -> Self::Output {
        Self::from_fixed(self.fixed - days)
    }
}

impl<C: DateConvertible> SubAssign<i64> for Date<C> {
    #[inline]
    fn sub_assign(&mut self, days: i64) {
        self.set_fixed(self.fixed - days);
    }
}

impl<C: DateConvertible> Sub for Date<C> {
    type Output = i64;
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.fixed - rhs.fixed
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<C: DateConvertible> Serialize for Date<C> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        self.fixed.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, C: DateConvertible> Deserialize<'de> for Date<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from_fixed(Fixed::deserialize(deserializer)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{Gregorian, Julian};
    use crate::fixed::Weekday;

    #[test]
    fn new_rejects_days_that_do_not_exist() {
        assert!(Date::<Gregorian>::new(Ymd::new(2023, 2, 29)).is_err());
        assert!(Date::<Gregorian>::new(Ymd::new(2024, 2, 29)).is_ok());
        assert!(Date::<Gregorian>::new(Ymd::new(2024, 13, 1)).is_err());
        assert!(Date::<Gregorian>::new(Ymd::new(2024, 0, 1)).is_err());
    }

    #[test]
    fn conversion_goes_through_the_day_count() {
        let reform = Date::<Gregorian>::new(Ymd::new(1582, 10, 15)).unwrap();
        let julian: Date<Julian> = reform.to();
        assert_eq!(*julian.fields(), Ymd::new(1582, 10, 5));
        assert_eq!(julian.fixed(), reform.fixed());
        assert_eq!(julian.difference(&reform), 0);
    }

    #[test]
    fn shifting_rederives_fields() {
        let mut d = Date::<Gregorian>::new(Ymd::new(1999, 12, 31)).unwrap();
        d += 1;
        assert_eq!(*d.fields(), Ymd::new(2000, 1, 1));
        d -= 60;
        assert_eq!(*d.fields(), Ymd::new(1999, 11, 2));
        assert_eq!((d + 60).fixed(), Fixed(730_120));
        assert_eq!((d + 60) - d, 60);
        assert_eq!((d - 1).day(), 1);
    }

    #[test]
    fn set_fields_keeps_state_on_error() {
        let mut d = Date::<Gregorian>::from_fixed(Fixed(730_120));
        assert!(d.set_fields(Ymd::new(2000, 2, 30)).is_err());
        assert_eq!(d.fixed(), Fixed(730_120));
        d.set_fields(Ymd::new(2000, 3, 1)).unwrap();
        assert_eq!(d.fixed(), Fixed(730_180));
        d.set_fixed(Fixed(1));
        assert_eq!(*d.fields(), Ymd::new(1, 1, 1));
    }

    #[test]
    fn ordering_is_chronological() {
        let a = Date::<Gregorian>::from_fixed(Fixed(10));
        let b = Date::<Julian>::from_fixed(Fixed(11));
        assert!(a.precedes(&b));
        assert!(b.follows(&a));
        assert_eq!(b.difference(&a), 1);
        assert!(a < Date::<Gregorian>::from_fixed(Fixed(11)));
    }

    #[test]
    fn week_and_julian_day() {
        let d = Date::<Gregorian>::new(Ymd::new(2000, 1, 1)).unwrap();
        assert_eq!(d.weekday(), Weekday::Saturday);
        assert_eq!(d.to_julian_day().value(), 2_451_544.5);
        assert_eq!(d.to_moment().value(), 730_120.0);
    }

    #[test]
    fn chrono_round_trip() {
        let naive = NaiveDate::from_ymd_opt(1945, 11, 12).unwrap();
        let d: Date<Gregorian> = naive.into();
        assert_eq!(d.fixed(), Fixed(710_347));
        assert_eq!(d.to_naive_date(), Some(naive));
    }

    #[test]
    fn lookup_reports_the_table() {
        const TABLE: [&str; 2] = ["a", "b"];
        assert_eq!(lookup(&TABLE, "letters", 1), Ok("b"));
        assert_eq!(
            lookup(&TABLE, "letters", -1),
            Err(CalendarError::IndexOutOfRange {
                table: "letters",
                index: -1
            })
        );
    }
}
