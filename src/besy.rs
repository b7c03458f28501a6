//! Bessel functions of the second kind, integer order, x > 0.
//!
//! Y₀, Y₁ subtract the logarithmic singularity (2/π)·Jₙ(x)·ln x from a
//! rational approximation below x = 8 and share the Hankel form of J
//! above. Yₙ is always stable upward from Y₀, Y₁.

#![allow(clippy::excessive_precision)]

use crate::algo::recur::{Kind, RecurrenceState};
use crate::besj::{AMPLITUDE, JY_THRESHOLD, P0, P1, PHASE0, PHASE1, Q0, Q1, hankel_terms, j0, j1};
use crate::machine::BesselFloat;
use crate::types::{Error, Regime};
use crate::utils::poly;

#[rustfmt::skip]
const Y0_NUM: [f64; 6] = [
    -2957821389.0, 7062834065.0,  -512359803.6,
    10879881.29,   -86327.92757,  228.4622733,
];
#[rustfmt::skip]
const Y0_DEN: [f64; 6] = [
    40076544269.0, 745249964.8, 7189466.438,
    47447.26470,   226.1030244, 1.0,
];
#[rustfmt::skip]
const Y1_NUM: [f64; 6] = [
    -0.4900604943e13, 0.1275274390e13, -0.5153438139e11,
    0.7349264551e9,   -0.4237922726e7,  0.8511937935e4,
];
#[rustfmt::skip]
const Y1_DEN: [f64; 7] = [
    0.2499580570e14, 0.424441966e12,  0.3733650367e10,
    0.2245904002e8,  0.1020426050e6,  0.3549632885e3,
    1.0,
];

/// Y₀(x); caller guarantees x > 0.
pub(crate) fn y0<T: BesselFloat>(x: T) -> T {
    match Regime::select(x, JY_THRESHOLD, false) {
        Regime::Series => {
            let y = x * x;
            poly(y, &Y0_NUM) / poly(y, &Y0_DEN) + T::from_f64(AMPLITUDE) * j0(x) * x.ln()
        }
        Regime::Asymptotic => {
            let (amp, zq, p, xx) = hankel_terms(x, &P0, &Q0, PHASE0);
            amp * (xx.sin() * p + xx.cos() * zq)
        }
    }
}

/// Y₁(x); caller guarantees x > 0.
pub(crate) fn y1<T: BesselFloat>(x: T) -> T {
    match Regime::select(x, JY_THRESHOLD, false) {
        Regime::Series => {
            let y = x * x;
            x * poly(y, &Y1_NUM) / poly(y, &Y1_DEN)
                + T::from_f64(AMPLITUDE) * (j1(x) * x.ln() - x.recip())
        }
        Regime::Asymptotic => {
            let (amp, zq, p, xx) = hankel_terms(x, &P1, &Q1, PHASE1);
            amp * (xx.sin() * p + xx.cos() * zq)
        }
    }
}

/// Yₙ(x) for n ≥ 2, x > 0.
pub(crate) fn yn<T: BesselFloat>(n: u32, x: T) -> Result<T, Error> {
    if n < 2 {
        return Err(Error::InvalidOrder);
    }
    if x.is_nan() || x <= T::zero() {
        return Err(Error::InvalidArgument);
    }
    let tox = T::from_f64(2.0) / x;
    let mut state = RecurrenceState::new(Kind::Ordinary, y0(x), y1(x));
    let by = state.walk(T::one(), tox, n - 1);
    if !by.is_finite() {
        log::debug!("yn: recurrence overflowed at n = {n}, x = {x:?}");
        return Err(Error::Overflow);
    }
    Ok(by)
}
