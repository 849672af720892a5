//! Length and angle unit conversions
//!
//! OOXML drawing coordinates are expressed in English Metric Units. All
//! authored coordinates in this crate are physical inches converted through
//! [`Emu::from_inches`]; conversion rounds half away from zero, so the pinned
//! fixtures below are the contract.

use std::fmt;
use std::ops::{Add, Sub};

/// English Metric Units per inch
pub const EMU_PER_INCH: f64 = 914_400.0;

/// English Metric Units per typographic point (1/72 inch)
pub const EMU_PER_POINT: f64 = EMU_PER_INCH / 72.0;

/// Angular units per degree in DrawingML (`dir`, `rot` attributes)
pub const ANGLE_UNITS_PER_DEGREE: f64 = 60_000.0;

/// Alpha units for a fully opaque color in DrawingML
pub const ALPHA_FULL: f64 = 100_000.0;

/// A length in English Metric Units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Emu(pub i64);

impl Emu {
    /// Zero length
    pub const ZERO: Emu = Emu(0);

    /// Convert a physical length in inches to EMU, rounding to the nearest
    /// integer unit
    pub fn from_inches(inches: f64) -> Self {
        Emu((inches * EMU_PER_INCH).round() as i64)
    }

    /// Convert a typographic point length to EMU (line widths)
    pub fn from_points(points: f64) -> Self {
        Emu((points * EMU_PER_POINT).round() as i64)
    }

    /// Scale this length by a factor, rounding to the nearest unit
    pub fn scale(self, factor: f64) -> Self {
        Emu((self.0 as f64 * factor).round() as i64)
    }
}

impl fmt::Display for Emu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Sub for Emu {
    type Output = Emu;

    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

/// Convert a direction in degrees to DrawingML 60000ths-of-a-degree
pub fn degrees_to_angle_units(degrees: f64) -> i64 {
    (degrees * ANGLE_UNITS_PER_DEGREE).round() as i64
}

/// Convert an opacity in [0, 1] to a DrawingML alpha value in [0, 100000]
///
/// Callers are expected to have range-checked the opacity; see the deck
/// validator.
pub fn opacity_to_alpha(opacity: f64) -> i64 {
    (opacity * ALPHA_FULL).round() as i64
}
