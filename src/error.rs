// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Error types for calendar conversions.

/// Error type for all fallible operations in the crate.
///
/// Only two conditions are data errors: fields that no day count
/// reproduces, and name-table lookups that fall outside their table.
/// The latter never escapes a [`Display`](std::fmt::Display) impl.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// No day count reproduces the requested calendar fields.
    #[error("inconsistent {calendar} date: {detail}")]
    InconsistentDate {
        /// Label of the calendar that rejected the fields.
        calendar: &'static str,
        /// Debug rendering of the rejected fields.
        detail: String,
    },

    /// A derived index fell outside a name table while rendering.
    #[error("index {index} out of range for {table}")]
    IndexOutOfRange {
        /// Name of the table being indexed.
        table: &'static str,
        /// The offending index.
        index: i64,
    },
}

impl CalendarError {
    pub(crate) fn inconsistent(calendar: &'static str, fields: impl std::fmt::Debug) -> Self {
        Self::InconsistentDate {
            calendar,
            detail: format!("{fields:?}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_inconsistent_date() {
        let err = CalendarError::inconsistent("Gregorian", (2023, 2, 29));
        assert_eq!(
            err.to_string(),
            "inconsistent Gregorian date: (2023, 2, 29)"
        );
    }

    #[test]
    fn error_index_out_of_range() {
        let err = CalendarError::IndexOutOfRange {
            table: "Islamic months",
            index: 13,
        };
        assert_eq!(err.to_string(), "index 13 out of range for Islamic months");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_clone() {
        let err = CalendarError::IndexOutOfRange {
            table: "weekdays",
            index: 7,
        };
        assert_eq!(err.clone(), err);
    }
}
