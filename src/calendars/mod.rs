// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Calendar markers.
//!
//! | Marker | Fields | Inverse |
//! |--------|--------|---------|
//! | [`Gregorian`], [`Julian`] | [`Ymd`](crate::Ymd) | closed form |
//! | [`Coptic`], [`Ethiopic`] | [`Ymd`](crate::Ymd) | closed form |
//! | [`Islamic`], [`Persian`], [`Hebrew`] | [`Ymd`](crate::Ymd) | closed form |
//! | [`Bahai`] | [`BahaiDate`] | closed form |
//! | [`Iso`] | [`IsoDate`] | closed form |
//! | [`French`] | [`Ymd`](crate::Ymd) | closed form |
//! | [`FrenchAstronomical`] | [`Ymd`](crate::Ymd) | equinox search |
//! | [`Mayan`] | [`MayanDate`] | Long Count |
//! | [`Chinese`] | [`ChineseDate`] | new-moon search |

mod bahai;
mod chinese;
mod coptic;
mod french;
mod gregorian;
pub mod hebrew;
mod islamic;
mod iso;
mod julian;
mod mayan;
mod persian;

pub use bahai::{Bahai, BahaiDate, AYYAM_I_HA};
pub use chinese::{Chinese, ChineseDate};
pub use coptic::{Coptic, Ethiopic};
pub use french::{French, FrenchAstronomical, SANSCULOTTIDES};
pub use gregorian::Gregorian;
pub use hebrew::Hebrew;
pub use islamic::Islamic;
pub use iso::{Iso, IsoDate};
pub use julian::Julian;
pub use mayan::{Haab, LongCount, Mayan, MayanDate, Tzolkin, CALENDAR_ROUND};
pub use persian::Persian;
