//! Struve functions H₀(x) and H₁(x).
//!
//! Newman's approximations (Math. Comp. 43, 1984): a polynomial in
//! (x/3)² for |x| ≤ 3, and above that a rational function in (3/x)² that
//! approximates Hₙ − Yₙ, so Yₙ(|x|) is added back. H₀ is odd and H₁ even.
//! Absolute error stays below 2e-7, set mostly by the Y₀ approximation.

#![allow(clippy::excessive_precision)]

use crate::algo::constants::PI;
use crate::besy::{y0, y1};
use crate::machine::BesselFloat;
use crate::types::Regime;
use crate::utils::poly;

const STRUVE_THRESHOLD: f64 = 3.0;

#[rustfmt::skip]
const H0_SMALL: [f64; 6] = [
    1.909859164, -1.909855001, 0.687514637, -0.126164557, 0.013828813, -0.000876918,
];
#[rustfmt::skip]
const H0_NUM: [f64; 4] = [0.99999906, 4.7722892, 3.85542044, 0.3230360];
#[rustfmt::skip]
const H0_DEN: [f64; 4] = [1.0, 4.88331068, 4.28957333, 0.52120508];

#[rustfmt::skip]
const H1_SMALL: [f64; 6] = [
    1.909859286, -1.145914713, 0.294656958, -0.042070508, 0.003785727, -0.000207183,
];
#[rustfmt::skip]
const H1_NUM: [f64; 4] = [1.00000004, 3.92205313, 2.64893033, 0.27450895];
#[rustfmt::skip]
const H1_DEN: [f64; 4] = [1.0, 3.81095112, 2.26216956, 0.10885141];

/// H₀(x) for any real x.
pub(crate) fn struve_h0<T: BesselFloat>(x: T) -> T {
    let ax = x.abs();
    let three = T::from_f64(STRUVE_THRESHOLD);
    let ans = match Regime::select(ax, STRUVE_THRESHOLD, true) {
        Regime::Series => {
            let y = ax / three;
            y * poly(y * y, &H0_SMALL)
        }
        Regime::Asymptotic => {
            let y = three / ax;
            let t = y * y;
            let num = T::from_f64(2.0) * poly(t, &H0_NUM);
            let den = T::from_f64(PI) * ax * poly(t, &H0_DEN);
            num / den + y0(ax)
        }
    };
    if x < T::zero() { -ans } else { ans }
}

/// H₁(x) for any real x.
pub(crate) fn struve_h1<T: BesselFloat>(x: T) -> T {
    let ax = x.abs();
    let three = T::from_f64(STRUVE_THRESHOLD);
    match Regime::select(ax, STRUVE_THRESHOLD, true) {
        Regime::Series => {
            let t = (ax / three) * (ax / three);
            t * poly(t, &H1_SMALL)
        }
        Regime::Asymptotic => {
            let y = three / ax;
            let t = y * y;
            let num = T::from_f64(2.0) * poly(t, &H1_NUM);
            let den = T::from_f64(PI) * poly(t, &H1_DEN);
            num / den + y1(ax)
        }
    }
}
