//! Algorithm constants shared by multiple kernels.
//!
//! Module-specific coefficient tables remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// π/2
pub(crate) const HPI: f64 = 1.57079632679489662e+00;

/// 2/π
pub(crate) const TWO_OVER_PI: f64 = 6.36619772367581343e-01;

/// 1/3
pub(crate) const THIRD: f64 = 3.33333333333333333e-01;

/// 2/3
pub(crate) const TTH: f64 = 6.66666666666666667e-01;

/// 1/√3
pub(crate) const ONOVRT: f64 = 5.77350269189625765e-01;

/// Iteration cap for continued fractions and series.
pub(crate) const MAXIT: usize = 10_000;

/// Argument below which the fractional-order kernels use the Temme series
/// instead of the second continued fraction.
pub(crate) const XMIN: f64 = 2.0;

/// Floor substituted for vanishing Lentz denominators.
pub(crate) const FPMIN: f64 = 1.0e-30;

/// Controls the starting order of Miller's backward recurrence.
pub(crate) const ACC: f64 = 40.0;

/// Rescaling trigger during backward recurrence.
pub(crate) const BIGNO: f64 = 1.0e10;

/// Rescaling factor applied when `BIGNO` is exceeded.
pub(crate) const BIGNI: f64 = 1.0e-10;
