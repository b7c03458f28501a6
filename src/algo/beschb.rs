//! Reciprocal-gamma ratios for the Temme series near order zero.
//!
//! For |μ| ≤ 1/2 the fractional-order kernels need
//!
//! ```text
//! Γ₁(μ) = [1/Γ(1-μ) - 1/Γ(1+μ)] / (2μ)
//! Γ₂(μ) = [1/Γ(1-μ) + 1/Γ(1+μ)] / 2
//! ```
//!
//! Both are even in μ and smooth, so each is a short Chebyshev series in
//! 8μ² - 1 ∈ [-1, 1]. Γ₁ stays finite as μ → 0 (limit −γ).

#![allow(clippy::excessive_precision)]

use crate::chebyshev::clenshaw;
use crate::machine::BesselFloat;

/// Chebyshev coefficients of Γ₁ in 8μ² − 1.
#[rustfmt::skip]
const C1: [f64; 7] = [
    -1.142022680371172e0,  6.516511267076e-3,
     3.08709017308e-4,    -3.470626964e-6,
     6.943764e-9,          3.6780e-11,
    -1.36e-13,
];

/// Chebyshev coefficients of Γ₂ in 8μ² − 1.
#[rustfmt::skip]
const C2: [f64; 8] = [
     1.843740587300906e0, -0.076852840844786e0,
     1.271927136655e-3,   -4.971736704e-6,
    -3.3126120e-8,         2.42310e-10,
    -1.70e-13,            -1.0e-15,
];

/// Γ₁, Γ₂, 1/Γ(1+μ) and 1/Γ(1−μ), computed jointly for one μ.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct GammaRatios<T: BesselFloat> {
    pub(crate) gam1: T,
    pub(crate) gam2: T,
    /// 1/Γ(1+μ)
    pub(crate) gampl: T,
    /// 1/Γ(1−μ)
    pub(crate) gammi: T,
}

/// Evaluate the reciprocal-gamma ratios for |μ| ≤ 1/2.
///
/// The endpoints μ = ±1/2 map to the closed end of the Chebyshev
/// interval, which the Clenshaw recurrence handles without special cases.
#[inline]
pub(crate) fn beschb<T: BesselFloat>(mu: T) -> GammaRatios<T> {
    debug_assert!(mu.abs() <= T::from_f64(0.5));

    let xx = T::from_f64(8.0) * mu * mu - T::one();
    let gam1 = clenshaw(xx, &C1.map(T::from_f64));
    let gam2 = clenshaw(xx, &C2.map(T::from_f64));

    GammaRatios {
        gam1,
        gam2,
        gampl: gam2 - mu * gam1,
        gammi: gam2 + mu * gam1,
    }
}
