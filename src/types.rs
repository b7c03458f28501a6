//! Core types for Bessel function computation.

use core::fmt;

use crate::machine::BesselFloat;

/// J_ν(x), Y_ν(x) and their derivatives, returned by
/// [`bessel_jy`](crate::bessel_jy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JyValues<T: BesselFloat> {
    /// J_ν(x).
    pub j: T,
    /// Y_ν(x).
    pub y: T,
    /// J'_ν(x).
    pub jp: T,
    /// Y'_ν(x).
    pub yp: T,
}

/// I_ν(x), K_ν(x) and their derivatives, returned by
/// [`bessel_ik`](crate::bessel_ik).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkValues<T: BesselFloat> {
    /// I_ν(x).
    pub i: T,
    /// K_ν(x).
    pub k: T,
    /// I'_ν(x).
    pub ip: T,
    /// K'_ν(x).
    pub kp: T,
}

/// Ai(x), Bi(x) and their derivatives, returned by [`airy`](crate::airy).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiryValues<T: BesselFloat> {
    pub ai: T,
    pub bi: T,
    pub aip: T,
    pub bip: T,
}

/// Spherical Bessel functions j_n(x), y_n(x) and their derivatives,
/// returned by [`spherical_bessel`](crate::spherical_bessel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalValues<T: BesselFloat> {
    pub j: T,
    pub y: T,
    pub jp: T,
    pub yp: T,
}

/// Selects the branch of a dual-regime rational approximation.
///
/// Each integer-order primitive has a small-argument form (a ratio of
/// polynomials in x², log-augmented for Y and K) and a large-argument form
/// (amplitude/phase for J and Y, exponentially scaled for I and K).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Regime {
    /// |x| below the family threshold.
    Series,
    /// |x| at or above the family threshold.
    Asymptotic,
}

impl Regime {
    /// Pick the regime for `|x|` against `threshold`.
    ///
    /// `inclusive` puts `|x| == threshold` in the series branch.
    #[inline]
    pub(crate) fn select<T: BesselFloat>(ax: T, threshold: f64, inclusive: bool) -> Self {
        let t = T::from_f64(threshold);
        if ax < t || (inclusive && ax == t) {
            Regime::Series
        } else {
            Regime::Asymptotic
        }
    }
}

/// Direction of a three-term order recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    /// Forward from orders 0 and 1; stable for J when x > n, and for Y, K.
    Upward,
    /// Miller's backward recurrence from an artificially high order.
    Downward,
}

/// Error type for special function computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Chebyshev interval has a >= b, or b - a does not exceed epsilon.
    InvalidInterval,
    /// Too few Chebyshev coefficients for the requested operation.
    InsufficientTerms,
    /// Chebyshev evaluation point is not strictly inside the interval.
    OutOfRange,
    /// Order is negative, non-finite, below the kernel's minimum, or too
    /// large for the recurrence to start above it.
    InvalidOrder,
    /// Argument lies outside the function's domain (e.g. x <= 0 for Y or K).
    InvalidArgument,
    /// Continued fraction or series did not converge within the iteration cap.
    ConvergenceFailure,
    /// Recurrence magnitude exceeded the representable range.
    Overflow,
}

impl Error {
    /// True for the input-validation kinds, false for numerical failures.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            Error::InvalidInterval
                | Error::InsufficientTerms
                | Error::OutOfRange
                | Error::InvalidOrder
                | Error::InvalidArgument
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInterval => {
                write!(f, "invalid interval: endpoints must satisfy a < b")
            }
            Error::InsufficientTerms => {
                write!(f, "insufficient terms: too few expansion coefficients")
            }
            Error::OutOfRange => {
                write!(f, "out of range: x must lie strictly inside (a, b)")
            }
            Error::InvalidOrder => {
                write!(f, "invalid order: check nu or n constraints")
            }
            Error::InvalidArgument => {
                write!(f, "invalid argument: x outside the function's domain")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: algorithm did not meet termination criteria"
                )
            }
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
        }
    }
}

impl core::error::Error for Error {}
