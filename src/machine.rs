//! The `BesselFloat` trait: the float types every routine is generic over.

use num_traits::Float;

use crate::algo::constants::FPMIN;

/// Floating-point trait for Bessel function computation.
///
/// Implemented for `f64` and `f32`. Coefficient tables are stored as f64
/// and narrowed through [`from_f64`](BesselFloat::from_f64); convergence
/// tests run at the precision of the implementing type.
pub trait BesselFloat: Float + core::fmt::Debug + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;

    /// Infallible conversion of an f64 literal (`as f32` for f32).
    fn from_f64(x: f64) -> Self;

    /// Stopping tolerance for continued fractions and series.
    #[inline]
    fn tol() -> Self {
        Self::MACH_EPSILON
    }

    /// Floor substituted for a vanishing Lentz denominator.
    #[inline]
    fn fpmin() -> Self {
        Self::from_f64(FPMIN)
    }

    /// `self * a + b`, fused when `std` is available.
    ///
    /// Named `fma` to avoid ambiguity with [`Float::mul_add`].
    fn fma(self, a: Self, b: Self) -> Self;
}

macro_rules! impl_bessel_float {
    ($t:ty, $eps:expr) => {
        impl BesselFloat for $t {
            const MACH_EPSILON: $t = $eps;

            #[inline]
            fn from_f64(x: f64) -> $t {
                x as $t
            }

            #[cfg(feature = "std")]
            #[inline]
            fn fma(self, a: $t, b: $t) -> $t {
                Float::mul_add(self, a, b)
            }

            #[cfg(not(feature = "std"))]
            #[inline]
            fn fma(self, a: $t, b: $t) -> $t {
                self * a + b
            }
        }
    };
}

impl_bessel_float!(f64, 2.220446049250313e-16);
impl_bessel_float!(f32, 1.1920929e-7);
