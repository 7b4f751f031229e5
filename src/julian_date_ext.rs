// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Julian Date (`Time<JD>`) and ephemeris (`Time<JDE>`) specific extensions.

use qtty::*;

use super::instant::Time;
use super::scales::{JD, JDE, MJD};
use crate::arith::{fmod, poly};

impl Time<JD> {
    /// J2000.0 epoch: 2000-01-01T12:00 (JD 2 451 545.0).
    pub const J2000: Self = Self::new(2_451_545.0);

    /// One Julian century expressed in days.
    pub const JULIAN_CENTURY: Days = Days::new(36_525.0);

    /// Julian centuries since J2000.0 on the **dynamical** axis.
    ///
    /// The instant is first shifted by the ephemeris correction; this is the
    /// argument of the solar longitude series.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        self.to::<JDE>().julian_centuries()
    }

    /// Fraction of a sidereal rotation at this instant, in `[0, 1)`.
    pub fn sidereal_rotation(&self) -> f64 {
        const COEFFS: [f64; 4] = [
            280.460_618_37,
            13_185_000.770_053_742,
            0.000_387_933,
            2.583_311_805_734_952_2e-8,
        ];
        let c = ((*self - Self::J2000) / Self::JULIAN_CENTURY)
            .simplify()
            .value();
        fmod(poly(c, &COEFFS) / 360.0, 1.0)
    }

    /// Convenience: MJD value corresponding to this JD.
    #[inline]
    pub fn to_mjd(&self) -> Time<MJD> {
        self.to::<MJD>()
    }
}

impl Time<JDE> {
    /// J2000.0 on the dynamical axis.
    pub const J2000: Self = Self::new(2_451_545.0);

    /// Julian centuries since J2000.0.
    #[inline]
    pub fn julian_centuries(&self) -> Centuries {
        Centuries::new(
            ((*self - Self::J2000) / Time::<JD>::JULIAN_CENTURY)
                .simplify()
                .value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dynamical_centuries_include_delta_t() {
        let c = Time::<JD>::J2000.julian_centuries();
        // 67 s of ΔT in 2000, expressed in centuries.
        let expected = 67.0 / 86_400.0 / 36_525.0;
        assert!((c - Centuries::new(expected)).abs() < Centuries::new(1e-15));
    }

    #[test]
    fn jde_centuries_are_plain_offsets() {
        let jde = Time::<JDE>::J2000 + Days::new(36_525.0 * 3.0);
        assert!((jde.julian_centuries() - Centuries::new(3.0)).abs() < Centuries::new(1e-12));
    }

    #[test]
    fn sidereal_rotation_at_j2000() {
        let s = Time::<JD>::J2000.sidereal_rotation();
        assert!((s - 0.779_057_273_250_000_1).abs() < 1e-9);
        assert!((0.0..1.0).contains(&s));
    }

    #[test]
    fn to_mjd_matches_offset() {
        let mjd = Time::<JD>::J2000.to_mjd();
        assert!((mjd.quantity() - Days::new(51_544.5)).abs() < Days::new(1e-10));
    }
}
