// Copyright 2025 the pathdata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The numeric formatting policy.

use core::fmt;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// How numbers are written into path data.
///
/// Both policies write a number with Rust's shortest round-trip `f64` formatting: no exponent
/// notation, no trailing zeros, and no fractional part at all for integral values (`20.0` is
/// written `20`). On top of that:
///
/// - negative zero is written `0`,
/// - `NaN` and the infinities are written `NaN`, `Infinity` and `-Infinity`. Path renderers
///   reject these, so callers who care should keep their coordinates finite.
///
/// ```
/// use pathdata::Precision;
///
/// assert_eq!(Precision::Full.format(20.0), "20");
/// assert_eq!(Precision::Decimals(2).format(3.14159), "3.14");
/// assert_eq!(Precision::Decimals(0).format(-0.4), "0");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Write every number exactly, without rounding.
    #[default]
    Full,
    /// Round to at most this many decimal places.
    ///
    /// The value is multiplied by `10^n`, rounded to the nearest integer (halfway cases away
    /// from zero) and divided back. When the scaled value is not finite the number is written
    /// unrounded, which only happens far beyond the precision an `f64` can hold.
    Decimals(u32),
}

impl Precision {
    /// Apply the rounding of this policy to `value`.
    pub fn round(self, value: f64) -> f64 {
        match self {
            Precision::Full => value,
            Precision::Decimals(n) => {
                let factor = 10_f64.powi(i32::try_from(n).unwrap_or(i32::MAX));
                let scaled = value * factor;
                if !scaled.is_finite() {
                    return value;
                }
                scaled.round() / factor
            }
        }
    }

    /// Format `value` as it would appear in path data.
    pub fn format(self, value: f64) -> alloc::string::String {
        alloc::format!("{}", self.number(value))
    }

    /// A [`Display`](fmt::Display) adaptor writing `value` under this policy.
    pub fn number(self, value: f64) -> Number {
        Number {
            value,
            precision: self,
        }
    }
}

impl From<Option<u32>> for Precision {
    fn from(decimals: Option<u32>) -> Self {
        decimals.map_or(Precision::Full, Precision::Decimals)
    }
}

/// A number written under a [`Precision`], see [`Precision::number`].
#[derive(Clone, Copy, Debug)]
pub struct Number {
    value: f64,
    precision: Precision,
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.precision.round(self.value);
        if value.is_nan() {
            f.write_str("NaN")
        } else if value.is_infinite() {
            f.write_str(if value > 0. { "Infinity" } else { "-Infinity" })
        } else if value == 0. {
            // Also catches -0.0.
            f.write_str("0")
        } else {
            write!(f, "{value}")
        }
    }
}
